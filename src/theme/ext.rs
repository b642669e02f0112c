use gpui::App;

use crate::theme::{Theme, ThemeVariant};

/// Extension trait for accessing and modifying the global theme.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;

    /// The variant selected by the current theme preference.
    fn active_variant(&self) -> &ThemeVariant;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        self.set_global::<Theme>(theme.as_ref().clone())
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }

    fn active_variant(&self) -> &ThemeVariant {
        self.get_theme().variants.active(self)
    }
}
