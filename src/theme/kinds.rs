#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::App;

use crate::theme::ThemeExt;

/// Text size variants that resolve to theme-defined values.
#[derive(Assoc, Clone, Copy)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::AbsoluteLength)]
pub enum ThemeTextSizeKind {
    /// Hero name.
    #[assoc(resolve = cx.get_theme().layout.text.sizes.display)]
    Display,
    /// Section titles.
    #[assoc(resolve = cx.get_theme().layout.text.sizes.heading_lg)]
    HeadingLg,
    /// Card titles.
    #[assoc(resolve = cx.get_theme().layout.text.sizes.heading_md)]
    HeadingMd,
    #[assoc(resolve = cx.get_theme().layout.text.sizes.heading_sm)]
    HeadingSm,
    #[assoc(resolve = cx.get_theme().layout.text.sizes.body)]
    Body,
    /// Chips, badges and labels.
    #[assoc(resolve = cx.get_theme().layout.text.sizes.caption)]
    Caption,
}

/// Padding variants that resolve to theme-defined spacing values.
#[derive(Assoc, Clone, Copy)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemePaddingKind {
    #[assoc(resolve = cx.get_theme().layout.padding.xl)]
    Xl,
    #[assoc(resolve = cx.get_theme().layout.padding.lg)]
    Lg,
    #[assoc(resolve = cx.get_theme().layout.padding.md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.padding.sm)]
    Sm,
}

/// Surface colors from the active theme variant, from the window backdrop up
/// to floating chrome.
#[derive(Assoc, Clone, Copy)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemeSurfaceKind {
    /// Window backdrop behind the paper sheet.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.page)]
    Page,
    /// The sheet the content is printed on.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.paper)]
    Paper,
    /// Panels and cards laid on the paper.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.surface)]
    Surface,
    /// Translucent floating chrome such as the navigation.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.elevated)]
    Elevated,
}

#[derive(Assoc, Clone, Copy)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemeTextColorKind {
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.text.primary)]
    Primary,
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.text.secondary)]
    Secondary,
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.text.muted)]
    Muted,
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.accent.primary)]
    Accent,
}
