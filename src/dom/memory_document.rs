use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::dom::{DomBinder, ElementId, MountPoint};
use crate::error::{WidgetError, WidgetResult};

#[derive(Debug, Clone, PartialEq)]
pub struct ElementNode {
    pub tag: String,
    pub dom_id: Option<String>,
    pub classes: SmallVec<[String; 2]>,
    pub parent: Option<ElementId>,
    pub children: SmallVec<[ElementId; 4]>,
}

impl ElementNode {
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// In-memory element tree implementing `DomBinder`.
///
/// Elements are kept in creation order so iteration matches document order
/// for trees built by appending.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    elements: IndexMap<ElementId, ElementNode>,
    next_id: u64,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn element(&self, element: ElementId) -> Option<&ElementNode> {
        self.elements.get(&element)
    }

    #[must_use]
    pub fn find_by_dom_id(&self, dom_id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .find(|(_, node)| node.dom_id.as_deref() == Some(dom_id))
            .map(|(id, _)| *id)
    }

    /// Elements without a parent.
    pub fn roots(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements
            .iter()
            .filter(|(_, node)| node.parent.is_none())
            .map(|(id, _)| *id)
    }

    fn allocate(&mut self, node: ElementNode) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, node);
        id
    }

    fn node(&self, element: ElementId) -> WidgetResult<&ElementNode> {
        self.elements
            .get(&element)
            .ok_or_else(|| WidgetError::Binding(format!("unknown element {}", element.0)))
    }
}

impl DomBinder for MemoryDocument {
    fn create_container(&mut self, dom_id: &str) -> WidgetResult<MountPoint> {
        if self.find_by_dom_id(dom_id).is_some() {
            return Err(WidgetError::Binding(format!(
                "element id `{dom_id}` is already in use"
            )));
        }
        let element = self.allocate(ElementNode {
            tag: "div".to_owned(),
            dom_id: Some(dom_id.to_owned()),
            classes: SmallVec::new(),
            parent: None,
            children: SmallVec::new(),
        });
        Ok(MountPoint::new(element, dom_id))
    }

    fn select_by_class(&self, parent: ElementId, class: &str) -> WidgetResult<Vec<ElementId>> {
        let node = self.node(parent)?;
        let mut selected = Vec::new();
        let mut pending: Vec<ElementId> = node.children.iter().rev().copied().collect();
        while let Some(next) = pending.pop() {
            let Some(child) = self.elements.get(&next) else {
                continue;
            };
            if child.has_class(class) {
                selected.push(next);
            }
            pending.extend(child.children.iter().rev().copied());
        }
        Ok(selected)
    }

    fn append_child(
        &mut self,
        parent: ElementId,
        tag: &str,
        class: &str,
    ) -> WidgetResult<ElementId> {
        self.node(parent)?;
        let mut classes = SmallVec::new();
        if !class.is_empty() {
            classes.push(class.to_owned());
        }
        let child = self.allocate(ElementNode {
            tag: tag.to_owned(),
            dom_id: None,
            classes,
            parent: Some(parent),
            children: SmallVec::new(),
        });
        if let Some(node) = self.elements.get_mut(&parent) {
            node.children.push(child);
        }
        Ok(child)
    }

    fn remove_element(&mut self, element: ElementId) -> WidgetResult<()> {
        let parent = self.node(element)?.parent;
        if let Some(parent) = parent.and_then(|parent| self.elements.get_mut(&parent)) {
            parent.children.retain(|child| *child != element);
        }

        let mut pending = vec![element];
        while let Some(next) = pending.pop() {
            if let Some(node) = self.elements.shift_remove(&next) {
                pending.extend(node.children);
            }
        }
        Ok(())
    }
}
