use std::{cell::RefCell, rc::Rc};

use gpui::{ScrollHandle, SharedString};
use indexmap::IndexMap;

/// Maps named page sections to children of a scroll container and scrolls
/// them into view.
///
/// Sections must be registered in the same order they are added as children
/// of the element tracking [`Self::scroll_handle`]. Clones share the scroll
/// handle and the active section.
#[derive(Clone, Default)]
pub struct SectionNavigator {
    scroll_handle: ScrollHandle,
    sections: IndexMap<SharedString, usize>,
    active: Rc<RefCell<Option<SharedString>>>,
}

impl SectionNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sections<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        let mut navigator = Self::new();
        for id in ids {
            navigator.register(id);
        }
        navigator
    }

    /// Registers the next child of the scroll container. Registering a known
    /// id returns its existing index.
    pub fn register(&mut self, id: impl Into<SharedString>) -> usize {
        let next = self.sections.len();
        *self.sections.entry(id.into()).or_insert(next)
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.get(id).copied()
    }

    pub fn section_ids(&self) -> impl Iterator<Item = &SharedString> {
        self.sections.keys()
    }

    pub fn scroll_handle(&self) -> &ScrollHandle {
        &self.scroll_handle
    }

    /// The section most recently scrolled to.
    pub fn active_section(&self) -> Option<SharedString> {
        self.active.borrow().clone()
    }

    /// Scrolls the section into view. Returns false for unknown ids.
    pub fn scroll_to_section(&self, id: &str) -> bool {
        let Some((key, &ix)) = self.sections.get_key_value(id) else {
            log::warn!("no section named \"{id}\" to scroll to");
            return false;
        };

        log::debug!("scrolling to section \"{id}\" (child {ix})");
        self.scroll_handle.scroll_to_item(ix);
        *self.active.borrow_mut() = Some(key.clone());
        true
    }
}

/// Upper-cases the first letter of a section id for display.
pub fn section_label(id: &str) -> SharedString {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>().into(),
        None => SharedString::default(),
    }
}
