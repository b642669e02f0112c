use gpui::{ElementId, SharedString};

pub trait ElementIdExt {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId;

    /// Derives a child id for the `ix`th repeated element, e.g. a pagination dot.
    fn with_index(&self, suffix: impl Into<SharedString>, ix: usize) -> ElementId;
}

impl ElementIdExt for ElementId {
    fn with_suffix(&self, suffix: impl Into<SharedString>) -> ElementId {
        ElementId::NamedChild(Box::new(self.clone()), suffix.into())
    }

    fn with_index(&self, suffix: impl Into<SharedString>, ix: usize) -> ElementId {
        ElementId::NamedInteger(
            ElementId::NamedChild(Box::new(self.clone()), suffix.into())
                .to_string()
                .into(),
            ix as u64,
        )
    }
}
