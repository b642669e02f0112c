use gpui::{
    App, ClickEvent, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder, px,
};
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    ElementIdExt,
    components::Icon,
    theme::{ThemeExt, ThemeTextSizeKind},
    utils::{RgbaExt, hover_bg_transition},
};

/// A compact translucent button used for navigation chrome: section links,
/// carousel arrows, the theme toggle and the mobile menu trigger.
#[derive(IntoElement)]
pub struct NavButton {
    id: ElementId,
    label: Option<SharedString>,
    icon: Option<SharedString>,
    circular: bool,
    full_width: bool,
    selected: bool,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl NavButton {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            label: None,
            icon: None,
            circular: false,
            full_width: false,
            selected: false,
            on_click: None,
        }
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn circular(mut self) -> Self {
        self.circular = true;
        self
    }

    /// Stretches the button and left-aligns its content, for dropdown menus.
    pub fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }

    /// Highlights the label, e.g. for the section currently shown.
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn on_click(
        mut self,
        on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }
}

impl RenderOnce for NavButton {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let colors = cx.active_variant().colors.clone();
        let corner_radius = if self.circular {
            px(100.)
        } else {
            cx.get_theme().layout.corner_radii.md
        };
        let padding = cx.get_theme().layout.padding.sm;

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx);

        let bg_transition = hover_bg_transition(
            self.id.clone(),
            window,
            cx,
            is_hover,
            colors.background.elevated,
            colors.accent.subtle.alpha(0.8),
        );
        let bg = *bg_transition.evaluate(window, cx);
        let text_color = if self.selected {
            colors.accent.primary
        } else {
            colors.text.secondary
        };
        let selector = self.id.to_string();

        div()
            .id(self.id.clone())
            .debug_selector(|| selector)
            .cursor(CursorStyle::PointingHand)
            .relative()
            .flex()
            .items_center()
            .gap(padding)
            .map(|this| {
                if self.full_width {
                    this.w_full().justify_start()
                } else {
                    this.justify_center()
                }
            })
            .map(|this| {
                if self.label.is_some() {
                    this.px(padding * 1.5).py(padding)
                } else {
                    this.p(padding)
                }
            })
            .text_size(ThemeTextSizeKind::Caption.resolve(cx))
            .text_color(text_color)
            .child(squircle().absolute_expand().rounded(corner_radius).bg(bg))
            .when_some(self.icon, |this, icon| {
                this.child(Icon::new(icon).size(px(18.)).color(text_color))
            })
            .when_some(self.label, |this, label| this.child(label))
            .on_hover(move |hover, _window, cx| {
                is_hover_state.update(cx, |this, _cx| *this = *hover);
                cx.notify(is_hover_state.entity_id());
            })
            .when_some(self.on_click, |this, on_click| {
                this.on_click(move |event, window, cx| {
                    cx.stop_propagation();
                    (on_click)(event, window, cx);
                })
            })
    }
}
