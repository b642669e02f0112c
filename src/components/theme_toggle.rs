use gpui::{App, ElementId, IntoElement, RenderOnce, Window, prelude::FluentBuilder};

use crate::{
    FolioIconKind,
    components::NavButton,
    theme::{ThemePreference, ThemePreferenceExt, ThemeVariantKind},
};

/// Flips between the light and dark variants, pinning the preference.
#[derive(IntoElement)]
pub struct ThemeToggle {
    id: ElementId,
    show_label: bool,
}

impl ThemeToggle {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            show_label: true,
        }
    }

    pub fn show_label(mut self, show_label: bool) -> Self {
        self.show_label = show_label;
        self
    }

    /// The preference a click switches to.
    pub fn toggled(current: ThemeVariantKind) -> ThemePreference {
        match current {
            ThemeVariantKind::Dark => ThemePreference::Light,
            ThemeVariantKind::Light => ThemePreference::Dark,
        }
    }
}

impl RenderOnce for ThemeToggle {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let current = cx.resolved_variant_kind();
        let (icon, label) = match current {
            ThemeVariantKind::Dark => (FolioIconKind::Moon, "Dark"),
            ThemeVariantKind::Light => (FolioIconKind::Sun, "Light"),
        };

        NavButton::new(self.id)
            .icon(icon)
            .when(self.show_label, |this| this.label(label))
            .when(!self.show_label, |this| this.circular())
            .on_click(move |_event, _window, cx| {
                cx.set_theme_preference(Self::toggled(current));
            })
    }
}


#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use super::*;
    use crate::theme::{PreferenceStore, init_with_store};
    use gpui::{
        AppContext, Context, Modifiers, ParentElement, Render, Styled, TestAppContext,
        VisualTestContext, div,
    };

    struct ToggleTestView;

    impl Render for ToggleTestView {
        fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
            div().size_full().child(ThemeToggle::new("toggle"))
        }
    }

    #[gpui::test]
    fn test_clicking_flips_and_persists_the_preference(cx: &mut TestAppContext) {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::new(dir.path().join("preferences.json"));

        let start = cx.update(|cx| {
            init_with_store(cx, Some(store.clone()));
            cx.resolved_variant_kind()
        });

        let window = cx
            .update(|cx| {
                cx.open_window(Default::default(), |_window, cx| cx.new(|_cx| ToggleTestView))
            })
            .unwrap();
        let mut vcx = VisualTestContext::from_window(window.into(), cx);
        vcx.run_until_parked();

        let toggle = vcx.debug_bounds("toggle").expect("toggle is rendered");
        vcx.simulate_click(toggle.center(), Modifiers::none());

        let flipped = ThemeToggle::toggled(start);
        assert_eq!(cx.update(|cx| cx.theme_preference()), flipped);
        assert_ne!(cx.update(|cx| cx.resolved_variant_kind()), start);
        assert_eq!(store.load().unwrap().theme, flipped);

        let pinned_start = match start {
            ThemeVariantKind::Dark => ThemePreference::Dark,
            ThemeVariantKind::Light => ThemePreference::Light,
        };

        vcx.simulate_click(toggle.center(), Modifiers::none());
        assert_eq!(cx.update(|cx| cx.resolved_variant_kind()), start);
        assert_eq!(store.load().unwrap().theme, pinned_start);
    }
}
