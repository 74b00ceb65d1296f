//! Container roles for implicit children.
//!
//! An element whose tag is not a property name of its parent is an
//! implicit child: it is resolved to a type and handed to the parent's
//! container role. A type may declare several roles; the one that comes
//! first in [`ContainerRole`] order is chosen when the type is registered.

use std::fmt;

use crate::component::{Component, TypeInfo};
use crate::error::ResolutionError;

/// Accepted container roles, in precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContainerRole {
    /// Drop-down style selectable item list.
    SelectableItems,
    /// List-box item list.
    ListBoxItems,
    Tabs,
    /// Menu bars and submenus.
    MenuItems,
    /// Exactly one content widget.
    Content,
    /// Arbitrary sequence of widgets.
    Widgets,
    /// Split-pane slots.
    SplitPaneSlots,
    /// Root widget of a document.
    DocumentRoot,
}

impl ContainerRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerRole::SelectableItems => "selectable items",
            ContainerRole::ListBoxItems => "list box items",
            ContainerRole::Tabs => "tabs",
            ContainerRole::MenuItems => "menu items",
            ContainerRole::Content => "content",
            ContainerRole::Widgets => "widgets",
            ContainerRole::SplitPaneSlots => "split pane slots",
            ContainerRole::DocumentRoot => "document root",
        }
    }
}

impl fmt::Display for ContainerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) type Inserter =
    Box<dyn Fn(&mut dyn Component, Box<dyn Component>) -> Result<(), ResolutionError> + Send + Sync>;

/// The insertion point chosen for a container type.
pub struct ImplicitSlot {
    role: ContainerRole,
    accepts: &'static TypeInfo,
    insert: Inserter,
}

impl ImplicitSlot {
    pub(crate) fn new(role: ContainerRole, accepts: &'static TypeInfo, insert: Inserter) -> Self {
        Self {
            role,
            accepts,
            insert,
        }
    }

    pub fn role(&self) -> ContainerRole {
        self.role
    }

    /// Kind of child this slot holds.
    pub fn accepts(&self) -> &'static TypeInfo {
        self.accepts
    }

    /// Place `child` into `container`, checking the child's kind first.
    pub fn insert(
        &self,
        container: &mut dyn Component,
        child: Box<dyn Component>,
    ) -> Result<(), ResolutionError> {
        let child_info = child.type_info();
        if !child_info.is_assignable_to(self.accepts) {
            return Err(ResolutionError::Misplaced {
                container: container.type_info().name,
                child: child_info.name,
                expected: self.accepts.name,
            });
        }
        (self.insert)(container, child)
    }
}

impl fmt::Debug for ImplicitSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImplicitSlot")
            .field("role", &self.role)
            .field("accepts", &self.accepts.name)
            .finish_non_exhaustive()
    }
}
