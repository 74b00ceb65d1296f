//! Horizontal and vertical sliders.

use uilayout_core::{RegistrationError, Stylesheet, TypeBuilder, TypeRegistry};

use crate::enums::Orientation;
use crate::widget::{Widget, WidgetBase, base_properties, widget};

/// Value range of a slider.
///
/// The value is kept inside `[minimum, maximum]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    minimum: f32,
    maximum: f32,
    value: f32,
}

impl Default for SliderRange {
    fn default() -> Self {
        Self {
            minimum: 0.0,
            maximum: 100.0,
            value: 0.0,
        }
    }
}

impl SliderRange {
    pub fn minimum(&self) -> f32 {
        self.minimum
    }

    pub fn maximum(&self) -> f32 {
        self.maximum
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn set_minimum(&mut self, minimum: f32) {
        self.minimum = minimum;
        self.set_value(self.value);
    }

    pub fn set_maximum(&mut self, maximum: f32) {
        self.maximum = maximum;
        self.set_value(self.value);
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = if self.minimum <= self.maximum {
            value.clamp(self.minimum, self.maximum)
        } else {
            value
        };
    }
}

/// Behaviour shared by both slider orientations.
pub trait Slider: Widget {
    const ORIENTATION: Orientation;
    const STYLES: &'static str;

    fn range(&self) -> &SliderRange;

    fn range_mut(&mut self) -> &mut SliderRange;
}

macro_rules! slider {
    ($ty:ident, $orientation:expr, $styles:literal) => {
        #[derive(Debug, Clone, PartialEq)]
        pub struct $ty {
            pub base: WidgetBase,
            pub range: SliderRange,
        }

        widget!($ty);

        impl Slider for $ty {
            const ORIENTATION: Orientation = $orientation;
            const STYLES: &'static str = $styles;

            fn range(&self) -> &SliderRange {
                &self.range
            }

            fn range_mut(&mut self) -> &mut SliderRange {
                &mut self.range
            }
        }

        impl $ty {
            pub fn new(sheet: &Stylesheet) -> Self {
                let mut slider = Self {
                    base: WidgetBase::default(),
                    range: SliderRange::default(),
                };
                slider.apply_style(sheet, sheet.default_style_name());
                slider
            }

            pub fn orientation(&self) -> Orientation {
                Self::ORIENTATION
            }

            pub fn apply_style(&mut self, sheet: &Stylesheet, style_name: &str) {
                if let Some(style) = sheet.style(Self::STYLES, style_name) {
                    self.base.apply_style(style);
                }
            }
        }
    };
}

slider!(HorizontalSlider, Orientation::Horizontal, "HorizontalSliderStyles");
slider!(VerticalSlider, Orientation::Vertical, "VerticalSliderStyles");

// Range bounds come before the value so a loaded value is clamped against
// the loaded bounds.
fn slider_properties<T: Slider>(builder: TypeBuilder<T>) -> TypeBuilder<T> {
    base_properties(builder)
        .property(
            "Minimum",
            |s| s.range().minimum(),
            |s, v| s.range_mut().set_minimum(v),
        )
        .default_value(0.0f32)
        .property(
            "Maximum",
            |s| s.range().maximum(),
            |s, v| s.range_mut().set_maximum(v),
        )
        .default_value(100.0f32)
        .property("Value", |s| s.range().value(), |s, v| s.range_mut().set_value(v))
        .default_value(0.0f32)
        .read_only("Orientation", |_| T::ORIENTATION)
        .default_value(T::ORIENTATION)
}

pub(crate) fn register(registry: &mut TypeRegistry) -> Result<(), RegistrationError> {
    registry.register(
        slider_properties(TypeBuilder::<HorizontalSlider>::with_stylesheet(
            HorizontalSlider::new,
        ))
        .styled(
            HorizontalSlider::STYLES,
            "StyleName",
            HorizontalSlider::apply_style,
        )
        .build(),
    )?;
    registry.register(
        slider_properties(TypeBuilder::<VerticalSlider>::with_stylesheet(
            VerticalSlider::new,
        ))
        .styled(VerticalSlider::STYLES, "StyleName", VerticalSlider::apply_style)
        .build(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_is_clamped() {
        let mut range = SliderRange::default();
        range.set_value(150.0);
        assert_eq!(range.value(), 100.0);
        range.set_value(-3.0);
        assert_eq!(range.value(), 0.0);

        range.set_value(40.0);
        range.set_maximum(20.0);
        assert_eq!(range.value(), 20.0);
    }

    #[test]
    fn test_orientation_is_fixed_per_type() {
        let sheet = Stylesheet::new();
        assert_eq!(
            HorizontalSlider::new(&sheet).orientation(),
            Orientation::Horizontal
        );
        assert_eq!(VerticalSlider::new(&sheet).orientation(), Orientation::Vertical);
    }
}
