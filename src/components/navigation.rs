use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window, div, prelude::FluentBuilder, px,
};
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    ElementIdExt, FolioIconKind,
    components::{NavButton, ThemeToggle},
    primitives::{SectionNavigator, section_label},
    theme::ThemeExt,
};

/// Section links pinned to the top-right corner.
///
/// On desktop the links stack vertically above a labelled theme toggle. On
/// mobile only the toggle and a menu button are shown; the links live in a
/// dropdown that closes once a section is chosen.
#[derive(IntoElement)]
pub struct Navigation {
    id: ElementId,
    navigator: SectionNavigator,
    items: Vec<SharedString>,
    mobile: bool,
}

impl Navigation {
    pub fn new(id: impl Into<ElementId>, navigator: SectionNavigator) -> Self {
        Self {
            id: id.into(),
            navigator,
            items: Vec::new(),
            mobile: false,
        }
    }

    pub fn items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn mobile(mut self, mobile: bool) -> Self {
        self.mobile = mobile;
        self
    }
}

impl RenderOnce for Navigation {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let menu_open_state = window.use_keyed_state(
            self.id.with_suffix("state:menu_open"),
            cx,
            |_window, _cx| false,
        );
        let menu_open = self.mobile && *menu_open_state.read(cx);

        let active = self.navigator.active_section();

        let section_button = |section: SharedString, full_width: bool| {
            let navigator = self.navigator.clone();
            let menu_open_state = menu_open_state.clone();

            NavButton::new(self.id.with_suffix(format!("section:{section}")))
                .label(section_label(&section))
                .selected(active.as_ref() == Some(&section))
                .when(full_width, |this| this.full_width())
                .on_click(move |_event, _window, cx| {
                    navigator.scroll_to_section(&section);
                    menu_open_state.update(cx, |open, cx| {
                        *open = false;
                        cx.notify();
                    });
                })
        };

        let container = div()
            .id(self.id.clone())
            .absolute()
            .top(px(16.))
            .right(px(16.));

        if !self.mobile {
            return container
                .flex()
                .flex_col()
                .items_center()
                .gap(px(8.))
                .children(
                    self.items
                        .iter()
                        .map(|item| section_button(item.clone(), false)),
                )
                .child(ThemeToggle::new(self.id.with_suffix("theme_toggle")).show_label(true));
        }

        let colors = cx.active_variant().colors.clone();
        let corner_radius = cx.get_theme().layout.corner_radii.md;

        container
            .flex()
            .flex_col()
            .items_end()
            .gap(px(8.))
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap(px(8.))
                    .child(ThemeToggle::new(self.id.with_suffix("theme_toggle")).show_label(false))
                    .child(
                        NavButton::new(self.id.with_suffix("menu_button"))
                            .icon(if menu_open {
                                FolioIconKind::Close
                            } else {
                                FolioIconKind::Menu
                            })
                            .on_click({
                                let menu_open_state = menu_open_state.clone();
                                move |_event, _window, cx| {
                                    menu_open_state.update(cx, |open, cx| {
                                        *open = !*open;
                                        cx.notify();
                                    });
                                }
                            }),
                    ),
            )
            .when(menu_open, |this| {
                this.child(
                    div()
                        .relative()
                        .min_w(px(120.))
                        .p(px(8.))
                        .flex()
                        .flex_col()
                        .gap(px(4.))
                        .child(
                            squircle()
                                .absolute_expand()
                                .rounded(corner_radius)
                                .bg(colors.background.elevated),
                        )
                        .children(
                            self.items
                                .iter()
                                .map(|item| section_button(item.clone(), true)),
                        ),
                )
            })
    }
}
