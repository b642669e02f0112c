use gpui::{
    App, CursorStyle, ElementId, FontWeight, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, StatefulInteractiveElement, Styled, Window, div, prelude::FluentBuilder, px,
};
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    ElementIdExt, FolioIconKind,
    components::Icon,
    content::Project,
    theme::{ThemeExt, ThemeTextSizeKind},
    utils::{RgbaExt, hover_bg_transition},
};

/// A project summary: title, status badge, description and tech chips.
///
/// The whole card opens the project's `href` when it has one.
#[derive(IntoElement)]
pub struct ProjectCard {
    id: ElementId,
    project: Project,
}

impl ProjectCard {
    pub fn new(id: impl Into<ElementId>, project: Project) -> Self {
        Self {
            id: id.into(),
            project,
        }
    }
}

impl RenderOnce for ProjectCard {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = cx.active_variant().colors.clone();
        let layout = cx.get_theme().layout.clone();
        let badge = self.project.status.badge_colors(cx);
        let clickable = self.project.href.is_some();

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = clickable && *is_hover_state.read(cx);

        let bg = *hover_bg_transition(
            self.id.clone(),
            window,
            cx,
            is_hover,
            colors.background.surface,
            colors.background.surface.mix(colors.accent.subtle, 0.35),
        )
        .evaluate(window, cx);

        div()
            .id(self.id.clone())
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .gap(layout.padding.md)
            .p(layout.padding.lg)
            .when(clickable, |this| this.cursor(CursorStyle::PointingHand))
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(layout.corner_radii.lg)
                    .bg(bg)
                    .border(px(1.))
                    .border_color(colors.border),
            )
            .child(
                div()
                    .flex()
                    .items_start()
                    .justify_between()
                    .gap(layout.padding.sm)
                    .child(
                        div()
                            .text_size(ThemeTextSizeKind::HeadingMd.resolve(cx))
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(colors.text.primary)
                            .child(self.project.title.clone()),
                    )
                    .child(
                        div()
                            .flex_none()
                            .px(layout.padding.sm)
                            .py(px(2.))
                            .rounded(px(100.))
                            .bg(badge.background)
                            .text_color(badge.text)
                            .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                            .child(self.project.status.label()),
                    ),
            )
            .child(
                div()
                    .flex_1()
                    .text_size(ThemeTextSizeKind::Body.resolve(cx))
                    .text_color(colors.text.secondary)
                    .child(self.project.description.clone()),
            )
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap(px(6.))
                    .children(self.project.tech.iter().map(|tech| {
                        div()
                            .px(layout.padding.sm)
                            .py(px(2.))
                            .rounded(layout.corner_radii.sm)
                            .bg(colors.accent.subtle.alpha(0.5))
                            .text_color(colors.text.secondary)
                            .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                            .child(tech.clone())
                    })),
            )
            .when_some(self.project.link.clone(), |this, link| {
                this.child(
                    div()
                        .id(self.id.with_suffix("link"))
                        .cursor(CursorStyle::PointingHand)
                        .flex()
                        .items_center()
                        .gap(px(6.))
                        .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                        .text_color(colors.accent.primary)
                        .child(Icon::new(FolioIconKind::ExternalLink).color(colors.accent.primary))
                        .child("Visit")
                        .on_click(move |_event, _window, cx| {
                            cx.stop_propagation();
                            cx.open_url(&link);
                        }),
                )
            })
            .when(clickable, |this| {
                this.on_hover(move |hover, _window, cx| {
                    is_hover_state.update(cx, |this, _cx| *this = *hover);
                    cx.notify(is_hover_state.entity_id());
                })
            })
            .when_some(self.project.href, |this, href| {
                this.on_click(move |_event, _window, cx| cx.open_url(&href))
            })
    }
}
