//! Type and property descriptors.
//!
//! A [`TypeDescriptor`] is the registry entry for one concrete type: how to
//! construct it, its ordered properties with type-erased accessors, the
//! implicit-child slot it exposes and the style dictionary it reads from.
//! Descriptors are built with the typed [`TypeBuilder`], so accessors are
//! checked against the concrete struct at compile time and only erased
//! when stored.

use std::fmt;
use std::marker::PhantomData;
use std::sync::OnceLock;

use crate::component::{Component, TypeInfo, Typed};
use crate::container::{ContainerRole, ImplicitSlot};
use crate::error::{ConversionError, ResolutionError};
use crate::registry::PropertySplit;
use crate::style::{StyleApplier, StyleBinding, StylePath, Stylesheet};
use crate::value::{PropertyValue, Value, ValueType};

/// Declared type of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclaredType {
    /// A scalar with a text form.
    Scalar(ValueType),
    /// Exactly one concrete component type.
    Exact(&'static TypeInfo),
    /// Any component type implementing the kind's capabilities.
    Kind(&'static TypeInfo),
}

impl DeclaredType {
    pub fn name(&self) -> &'static str {
        match self {
            DeclaredType::Scalar(ty) => ty.kind.name(),
            DeclaredType::Exact(info) | DeclaredType::Kind(info) => info.name,
        }
    }

    /// Type info of an object-typed declaration.
    pub fn object_info(&self) -> Option<&'static TypeInfo> {
        match self {
            DeclaredType::Scalar(_) => None,
            DeclaredType::Exact(info) | DeclaredType::Kind(info) => Some(info),
        }
    }

    /// Whether `child` may be stored in a property of this type.
    pub fn accepts(&self, child: &TypeInfo) -> bool {
        match self {
            DeclaredType::Scalar(_) => false,
            DeclaredType::Exact(info) => child.name == info.name,
            DeclaredType::Kind(info) => child.is_assignable_to(info),
        }
    }
}

type ScalarGet = Box<dyn Fn(&dyn Component) -> Value + Send + Sync>;
type ScalarSet = Box<dyn Fn(&mut dyn Component, Value) -> Result<(), ConversionError> + Send + Sync>;
type ObjectGet =
    Box<dyn for<'a> Fn(&'a dyn Component) -> Option<&'a dyn Component> + Send + Sync>;
type ObjectGetMut =
    Box<dyn for<'a> Fn(&'a mut dyn Component) -> Option<&'a mut dyn Component> + Send + Sync>;
type ObjectSet =
    Box<dyn Fn(&mut dyn Component, Box<dyn Component>) -> Result<(), ResolutionError> + Send + Sync>;
type ItemsGet = Box<dyn for<'a> Fn(&'a dyn Component) -> Vec<&'a dyn Component> + Send + Sync>;

/// Type-erased property accessors.
pub(crate) enum Access {
    Scalar {
        get: ScalarGet,
        set: Option<ScalarSet>,
    },
    Object {
        get: ObjectGet,
        get_mut: Option<ObjectGetMut>,
        set: Option<ObjectSet>,
    },
    /// Collections are only ever appended to.
    List { items: ItemsGet, push: ObjectSet },
}

/// One registered property of a type.
pub struct PropertyDescriptor {
    name: &'static str,
    declared: DeclaredType,
    collection: bool,
    read_only: bool,
    serializable: bool,
    obsolete: bool,
    default: Option<Value>,
    style_path: Option<StylePath>,
    pub(crate) access: Access,
}

impl PropertyDescriptor {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared type, or the element type for collections.
    pub fn declared(&self) -> DeclaredType {
        self.declared
    }

    pub fn is_collection(&self) -> bool {
        self.collection
    }

    /// No setter: loads append to or fill the existing value.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Excluded from both save and load when false.
    pub fn is_serializable(&self) -> bool {
        self.serializable
    }

    /// Loadable, never written.
    pub fn is_obsolete(&self) -> bool {
        self.obsolete
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn style_path(&self) -> Option<&StylePath> {
        self.style_path.as_ref()
    }

    /// Current value of a scalar property; `None` for object-valued ones.
    pub fn scalar(&self, obj: &dyn Component) -> Option<Value> {
        match &self.access {
            Access::Scalar { get, .. } => Some(get(obj)),
            _ => None,
        }
    }

    /// Objects currently held by a complex property, in order.
    pub fn children<'a>(&self, obj: &'a dyn Component) -> Vec<&'a dyn Component> {
        match &self.access {
            Access::Scalar { .. } => Vec::new(),
            Access::Object { get, .. } => get(obj).into_iter().collect(),
            Access::List { items, .. } => items(obj),
        }
    }

    pub(crate) fn set_scalar(
        &self,
        obj: &mut dyn Component,
        value: Value,
    ) -> Result<(), ConversionError> {
        match &self.access {
            Access::Scalar { set: Some(set), .. } => set(obj, value),
            _ => Err(ConversionError::Unsupported {
                type_name: self.declared.name(),
            }),
        }
    }

    /// Whether the property currently holds anything to write.
    pub(crate) fn has_object_value(&self, obj: &dyn Component) -> bool {
        match &self.access {
            Access::Scalar { .. } => false,
            Access::Object { get, .. } => get(obj).is_some(),
            Access::List { items, .. } => !items(obj).is_empty(),
        }
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("declared", &self.declared.name())
            .field("collection", &self.collection)
            .field("read_only", &self.read_only)
            .field("serializable", &self.serializable)
            .field("obsolete", &self.obsolete)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}

type PlainFactory = Box<dyn Fn() -> Box<dyn Component> + Send + Sync>;
type StyledFactory = Box<dyn Fn(&Stylesheet) -> Box<dyn Component> + Send + Sync>;

/// Construction path of a type.
pub enum Factory {
    Plain(PlainFactory),
    /// Constructor that initialises from the active style sheet.
    Styled(StyledFactory),
}

impl Factory {
    pub fn create(&self, sheet: &Stylesheet) -> Box<dyn Component> {
        match self {
            Factory::Plain(create) => create(),
            Factory::Styled(create) => create(sheet),
        }
    }

    pub fn accepts_stylesheet(&self) -> bool {
        matches!(self, Factory::Styled(_))
    }
}

/// Registry entry for one concrete type.
pub struct TypeDescriptor {
    info: &'static TypeInfo,
    factory: Factory,
    properties: Vec<PropertyDescriptor>,
    implicit: Option<ImplicitSlot>,
    style: Option<StyleBinding>,
    structural: bool,
    pub(crate) classified: OnceLock<PropertySplit>,
}

impl TypeDescriptor {
    pub fn info(&self) -> &'static TypeInfo {
        self.info
    }

    pub fn name(&self) -> &'static str {
        self.info.name
    }

    pub fn factory(&self) -> &Factory {
        &self.factory
    }

    /// Registered properties in declaration order.
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    pub fn implicit_slot(&self) -> Option<&ImplicitSlot> {
        self.implicit.as_ref()
    }

    pub fn style_binding(&self) -> Option<&StyleBinding> {
        self.style.as_ref()
    }

    /// Structural records resolve by their fixed tag, outside the widget namespace.
    pub fn is_structural(&self) -> bool {
        self.structural
    }

    pub fn create(&self, sheet: &Stylesheet) -> Box<dyn Component> {
        self.factory.create(sheet)
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.info.name)
            .field("properties", &self.properties)
            .field("implicit", &self.implicit)
            .field("style", &self.style)
            .field("structural", &self.structural)
            .finish_non_exhaustive()
    }
}

fn downcast<T: Typed>(obj: &dyn Component) -> Option<&T> {
    obj.as_any().downcast_ref::<T>()
}

fn downcast_mut<T: Typed>(obj: &mut dyn Component) -> Option<&mut T> {
    obj.as_any_mut().downcast_mut::<T>()
}

fn target_mut<T: Typed>(obj: &mut dyn Component) -> Result<&mut T, ResolutionError> {
    let container = obj.type_info().name;
    downcast_mut::<T>(obj).ok_or(ResolutionError::Misplaced {
        container,
        child: T::INFO.name,
        expected: T::INFO.name,
    })
}

// Closures are boxed through these so their signatures are inferred as
// higher-ranked over the borrowed object.

fn scalar_get<F>(f: F) -> ScalarGet
where
    F: Fn(&dyn Component) -> Value + Send + Sync + 'static,
{
    Box::new(f)
}

fn scalar_set<F>(f: F) -> ScalarSet
where
    F: Fn(&mut dyn Component, Value) -> Result<(), ConversionError> + Send + Sync + 'static,
{
    Box::new(f)
}

fn object_get<F>(f: F) -> ObjectGet
where
    F: for<'a> Fn(&'a dyn Component) -> Option<&'a dyn Component> + Send + Sync + 'static,
{
    Box::new(f)
}

fn object_get_mut<F>(f: F) -> ObjectGetMut
where
    F: for<'a> Fn(&'a mut dyn Component) -> Option<&'a mut dyn Component> + Send + Sync + 'static,
{
    Box::new(f)
}

fn object_set<F>(f: F) -> ObjectSet
where
    F: Fn(&mut dyn Component, Box<dyn Component>) -> Result<(), ResolutionError>
        + Send
        + Sync
        + 'static,
{
    Box::new(f)
}

fn items_get<F>(f: F) -> ItemsGet
where
    F: for<'a> Fn(&'a dyn Component) -> Vec<&'a dyn Component> + Send + Sync + 'static,
{
    Box::new(f)
}

fn style_applier<F>(f: F) -> StyleApplier
where
    F: Fn(&mut dyn Component, &Stylesheet, &str) + Send + Sync + 'static,
{
    Box::new(f)
}

fn styled_factory<F>(f: F) -> StyledFactory
where
    F: Fn(&Stylesheet) -> Box<dyn Component> + Send + Sync + 'static,
{
    Box::new(f)
}

fn unbox<U: Typed>(child: Box<dyn Component>) -> Result<U, ResolutionError> {
    let child_name = child.type_info().name;
    child
        .into_any()
        .downcast::<U>()
        .map(|boxed| *boxed)
        .map_err(|_| ResolutionError::Misplaced {
            container: U::INFO.name,
            child: child_name,
            expected: U::INFO.name,
        })
}

/// Typed builder for a [`TypeDescriptor`].
///
/// ```ignore
/// TypeBuilder::<Label>::with_stylesheet(Label::new)
///     .property("Text", |l| l.text.clone(), |l, v| l.text = v)
///     .property("Wrap", |l| l.wrap, |l, v| l.wrap = v)
///     .default_value(false)
///     .styled("LabelStyles", "StyleName", Label::apply_style)
///     .build()
/// ```
pub struct TypeBuilder<T: Typed> {
    factory: Factory,
    properties: Vec<PropertyDescriptor>,
    implicit: Option<ImplicitSlot>,
    style: Option<StyleBinding>,
    structural: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Typed> TypeBuilder<T> {
    /// Type constructed without a style sheet.
    pub fn new(create: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self::with_factory(Factory::Plain(Box::new(move || {
            Box::new(create()) as Box<dyn Component>
        })))
    }

    /// Type whose constructor reads the active style sheet.
    pub fn with_stylesheet(create: impl Fn(&Stylesheet) -> T + Send + Sync + 'static) -> Self {
        Self::with_factory(Factory::Styled(styled_factory(move |sheet| {
            Box::new(create(sheet)) as Box<dyn Component>
        })))
    }

    fn with_factory(factory: Factory) -> Self {
        Self {
            factory,
            properties: Vec::new(),
            implicit: None,
            style: None,
            structural: false,
            _marker: PhantomData,
        }
    }

    fn push_property(
        mut self,
        name: &'static str,
        declared: DeclaredType,
        collection: bool,
        read_only: bool,
        access: Access,
    ) -> Self {
        self.properties.push(PropertyDescriptor {
            name,
            declared,
            collection,
            read_only,
            serializable: true,
            obsolete: false,
            default: None,
            style_path: None,
            access,
        });
        self
    }

    fn last_mut(&mut self) -> Option<&mut PropertyDescriptor> {
        self.properties.last_mut()
    }

    /// Read-write scalar property.
    #[must_use]
    pub fn property<V: PropertyValue>(
        self,
        name: &'static str,
        get: impl Fn(&T) -> V + Send + Sync + 'static,
        set: impl Fn(&mut T, V) + Send + Sync + 'static,
    ) -> Self {
        let value_type = V::value_type();
        let access = Access::Scalar {
            get: scalar_get(move |obj| downcast::<T>(obj).map_or(Value::Null, |t| get(t).into_value())),
            set: Some(scalar_set(move |obj, value| {
                let mismatch = || ConversionError::TypeMismatch {
                    expected: value_type.kind.name(),
                };
                let typed = V::from_value(value).ok_or_else(mismatch)?;
                let target = downcast_mut::<T>(obj).ok_or(ConversionError::TypeMismatch {
                    expected: T::INFO.name,
                })?;
                set(target, typed);
                Ok(())
            })),
        };
        self.push_property(name, DeclaredType::Scalar(value_type), false, false, access)
    }

    /// Scalar property without a setter.
    #[must_use]
    pub fn read_only<V: PropertyValue>(
        self,
        name: &'static str,
        get: impl Fn(&T) -> V + Send + Sync + 'static,
    ) -> Self {
        let access = Access::Scalar {
            get: scalar_get(move |obj| downcast::<T>(obj).map_or(Value::Null, |t| get(t).into_value())),
            set: None,
        };
        self.push_property(name, DeclaredType::Scalar(V::value_type()), false, true, access)
    }

    /// Declared default of the last added property.
    #[must_use]
    pub fn default_value(mut self, value: impl PropertyValue) -> Self {
        if let Some(property) = self.last_mut() {
            property.default = Some(value.into_value());
        }
        self
    }

    /// Mark the last added property as load-only.
    #[must_use]
    pub fn obsolete(mut self) -> Self {
        if let Some(property) = self.last_mut() {
            property.obsolete = true;
        }
        self
    }

    /// Exclude the last added property from persistence.
    #[must_use]
    pub fn not_serialized(mut self) -> Self {
        if let Some(property) = self.last_mut() {
            property.serializable = false;
        }
        self
    }

    /// Explicit style lookup path for the last added property.
    ///
    /// Paths are compile-time constants; a malformed one is ignored and the
    /// property compares against its same-named style member.
    #[must_use]
    pub fn style_path(mut self, path: &str) -> Self {
        match path.parse::<StylePath>() {
            Ok(parsed) => {
                if let Some(property) = self.last_mut() {
                    property.style_path = Some(parsed);
                }
            }
            Err(err) => tracing::warn!(type_name = T::INFO.name, "{err}"),
        }
        self
    }

    /// Writable property holding one object of exactly type `U`.
    #[must_use]
    pub fn object<U: Typed>(
        self,
        name: &'static str,
        get: impl Fn(&T) -> Option<&U> + Send + Sync + 'static,
        set: impl Fn(&mut T, U) + Send + Sync + 'static,
    ) -> Self {
        let access = Access::Object {
            get: object_get(move |obj| {
                downcast::<T>(obj)
                    .and_then(|t| get(t))
                    .map(|u| u as &dyn Component)
            }),
            get_mut: None,
            set: Some(object_set(move |obj, child| {
                let child = unbox::<U>(child)?;
                let target = target_mut::<T>(obj)?;
                set(target, child);
                Ok(())
            })),
        };
        self.push_property(name, DeclaredType::Exact(U::INFO), false, false, access)
    }

    /// Read-only property whose existing object is loaded in place.
    #[must_use]
    pub fn object_in_place<U: Typed>(
        self,
        name: &'static str,
        get: impl Fn(&T) -> &U + Send + Sync + 'static,
        get_mut: impl Fn(&mut T) -> &mut U + Send + Sync + 'static,
    ) -> Self {
        let access = Access::Object {
            get: object_get(move |obj| downcast::<T>(obj).map(|t| get(t) as &dyn Component)),
            get_mut: Some(object_get_mut(move |obj| {
                downcast_mut::<T>(obj).map(|t| get_mut(t) as &mut dyn Component)
            })),
            set: None,
        };
        self.push_property(name, DeclaredType::Exact(U::INFO), false, true, access)
    }

    /// Writable property holding one object of any type of `kind`.
    #[must_use]
    pub fn polymorphic(
        self,
        name: &'static str,
        kind: &'static TypeInfo,
        get: impl Fn(&T) -> Option<&dyn Component> + Send + Sync + 'static,
        set: impl Fn(&mut T, Box<dyn Component>) + Send + Sync + 'static,
    ) -> Self {
        let access = Access::Object {
            get: object_get(move |obj| downcast::<T>(obj).and_then(|t| get(t))),
            get_mut: None,
            set: Some(object_set(move |obj, child| {
                let target = target_mut::<T>(obj)?;
                set(target, child);
                Ok(())
            })),
        };
        self.push_property(name, DeclaredType::Kind(kind), false, false, access)
    }

    /// Appendable collection of objects of exactly type `U`.
    #[must_use]
    pub fn list<U: Typed>(
        self,
        name: &'static str,
        items: impl Fn(&T) -> &[U] + Send + Sync + 'static,
        push: impl Fn(&mut T, U) + Send + Sync + 'static,
    ) -> Self {
        let access = Access::List {
            items: items_get(move |obj| {
                downcast::<T>(obj).map_or_else(Vec::new, |t| {
                    items(t).iter().map(|u| u as &dyn Component).collect()
                })
            }),
            push: object_set(move |obj, child| {
                let child = unbox::<U>(child)?;
                let target = target_mut::<T>(obj)?;
                push(target, child);
                Ok(())
            }),
        };
        self.push_property(name, DeclaredType::Exact(U::INFO), true, true, access)
    }

    /// Appendable collection of objects of any type of `kind`.
    #[must_use]
    pub fn polymorphic_list(
        self,
        name: &'static str,
        kind: &'static TypeInfo,
        items: impl Fn(&T) -> &[Box<dyn Component>] + Send + Sync + 'static,
        push: impl Fn(&mut T, Box<dyn Component>) + Send + Sync + 'static,
    ) -> Self {
        let access = Access::List {
            items: items_get(move |obj| {
                downcast::<T>(obj).map_or_else(Vec::new, |t| {
                    items(t).iter().map(|child| child.as_ref()).collect()
                })
            }),
            push: object_set(move |obj, child| {
                let target = target_mut::<T>(obj)?;
                push(target, child);
                Ok(())
            }),
        };
        self.push_property(name, DeclaredType::Kind(kind), true, true, access)
    }

    /// Accept implicit children of `kind` in `role`.
    ///
    /// When several roles are declared the highest-precedence one is kept.
    #[must_use]
    pub fn accepts(
        mut self,
        role: ContainerRole,
        kind: &'static TypeInfo,
        insert: impl Fn(&mut T, Box<dyn Component>) + Send + Sync + 'static,
    ) -> Self {
        if self.implicit.as_ref().is_some_and(|slot| slot.role() <= role) {
            return self;
        }
        self.implicit = Some(ImplicitSlot::new(
            role,
            kind,
            object_set(move |obj, child| {
                let target = target_mut::<T>(obj)?;
                insert(target, child);
                Ok(())
            }),
        ));
        self
    }

    /// Accept implicit children of exactly type `U` in `role`.
    #[must_use]
    pub fn accepts_exact<U: Typed>(
        mut self,
        role: ContainerRole,
        insert: impl Fn(&mut T, U) + Send + Sync + 'static,
    ) -> Self {
        if self.implicit.as_ref().is_some_and(|slot| slot.role() <= role) {
            return self;
        }
        self.implicit = Some(ImplicitSlot::new(
            role,
            U::INFO,
            object_set(move |obj, child| {
                let child = unbox::<U>(child)?;
                let target = target_mut::<T>(obj)?;
                insert(target, child);
                Ok(())
            }),
        ));
        self
    }

    /// Bind the type to a style dictionary.
    ///
    /// `style_property` names the attribute carrying the object's style
    /// name; `apply` re-initialises the object from a named style on load.
    #[must_use]
    pub fn styled(
        mut self,
        dictionary: impl Into<String>,
        style_property: &'static str,
        apply: impl Fn(&mut T, &Stylesheet, &str) + Send + Sync + 'static,
    ) -> Self {
        self.style = Some(StyleBinding::new(
            dictionary.into(),
            style_property,
            Some(style_applier(move |obj, sheet, style_name| {
                if let Some(target) = downcast_mut::<T>(obj) {
                    apply(target, sheet, style_name);
                }
            })),
        ));
        self
    }

    /// Bind the type to a style dictionary used only for suppression.
    #[must_use]
    pub fn style_dictionary(mut self, dictionary: impl Into<String>, style_property: &'static str) -> Self {
        self.style = Some(StyleBinding::new(dictionary.into(), style_property, None));
        self
    }

    /// Resolve this type by its fixed tag ahead of the widget namespace.
    #[must_use]
    pub fn structural(mut self) -> Self {
        self.structural = true;
        self
    }

    pub fn build(self) -> TypeDescriptor {
        TypeDescriptor {
            info: T::INFO,
            factory: self.factory,
            properties: self.properties,
            implicit: self.implicit,
            style: self.style,
            structural: self.structural,
            classified: OnceLock::new(),
        }
    }
}
