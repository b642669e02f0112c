use gpui::{Hsla, IntoElement, Pixels, RenderOnce, SharedString, Styled, px, svg};

use crate::theme::ThemeExt;

/// An SVG icon, tinted with the theme's primary text color unless told otherwise.
#[derive(IntoElement)]
pub struct Icon {
    path: SharedString,
    size: Pixels,
    color: Option<Hsla>,
}

impl Icon {
    /// Creates a new icon from an SVG asset path.
    pub fn new(path: impl Into<SharedString>) -> Self {
        Self {
            path: path.into(),
            size: px(16.),
            color: None,
        }
    }

    pub fn size(mut self, size: impl Into<Pixels>) -> Self {
        self.size = size.into();
        self
    }

    pub fn color(mut self, color: impl Into<Hsla>) -> Self {
        self.color = Some(color.into());
        self
    }
}

impl RenderOnce for Icon {
    fn render(self, _window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let color = self
            .color
            .unwrap_or_else(|| cx.active_variant().colors.text.primary.into());

        svg()
            .path(self.path)
            .flex_none()
            .size(self.size)
            .text_color(color)
    }
}
