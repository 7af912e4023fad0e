//! Element-binding collaborator.
//!
//! The widget never touches a document directly: it asks a `DomBinder` for a
//! container, then joins its data against children of that container.

mod memory_document;

pub use memory_document::{ElementNode, MemoryDocument};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::WidgetResult;

/// Opaque handle to one element owned by a `DomBinder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

/// Rendering surface exclusively owned by one widget instance.
///
/// Not `Clone`: one owner for the container's whole lifetime.
#[derive(Debug, PartialEq, Eq)]
pub struct MountPoint {
    element: ElementId,
    dom_id: String,
}

impl MountPoint {
    #[must_use]
    pub fn new(element: ElementId, dom_id: impl Into<String>) -> Self {
        Self {
            element,
            dom_id: dom_id.into(),
        }
    }

    #[must_use]
    pub fn element(&self) -> ElementId {
        self.element
    }

    #[must_use]
    pub fn dom_id(&self) -> &str {
        &self.dom_id
    }
}

/// Element selection and creation API the widget depends on.
pub trait DomBinder {
    /// Creates a detached container element carrying `dom_id`.
    fn create_container(&mut self, dom_id: &str) -> WidgetResult<MountPoint>;

    /// Descendants of `parent` at any depth carrying `class`, in document
    /// order. `parent` itself is never included.
    fn select_by_class(&self, parent: ElementId, class: &str) -> WidgetResult<Vec<ElementId>>;

    fn append_child(
        &mut self,
        parent: ElementId,
        tag: &str,
        class: &str,
    ) -> WidgetResult<ElementId>;

    /// Removes `element` and its whole subtree.
    fn remove_element(&mut self, element: ElementId) -> WidgetResult<()>;
}

/// Enter-only data join.
///
/// Data items beyond the number of existing `class` descendants of `mount`
/// each get a fresh `tag.class` direct child, and `each` runs once per new
/// child.
/// Existing children are left untouched; surplus children are not removed.
pub fn bind_entering<B, T, F>(
    binder: &mut B,
    mount: &MountPoint,
    tag: &str,
    class: &str,
    data: &[T],
    mut each: F,
) -> WidgetResult<Vec<ElementId>>
where
    B: DomBinder + ?Sized,
    F: FnMut(ElementId, &T) -> WidgetResult<()>,
{
    let existing = binder.select_by_class(mount.element(), class)?.len();
    let entering = data.get(existing..).unwrap_or_default();
    trace!(
        existing,
        entering = entering.len(),
        class,
        "bind series to children"
    );

    let mut appended = Vec::with_capacity(entering.len());
    for datum in entering {
        let element = binder.append_child(mount.element(), tag, class)?;
        each(element, datum)?;
        appended.push(element);
    }
    Ok(appended)
}
