use gpui::{App, Window};

use crate::{
    components::carousel,
    theme::{self, ThemeExt},
};

/// Registers key bindings and installs the theme provider.
///
/// Reads the persisted theme preference from the default preference store.
pub fn init(cx: &mut App) {
    carousel::init(cx);
    theme::init(cx);
}

pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(cx.get_theme().layout.text.base_size);
}
