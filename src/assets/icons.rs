#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::SharedString;

/// Icon identifiers that map to bundled SVG assets.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn path(&self) -> SharedString)]
pub enum FolioIconKind {
    #[assoc(path = "icons/arrow_left.svg".into())]
    ArrowLeft,
    #[assoc(path = "icons/arrow_right.svg".into())]
    ArrowRight,
    #[assoc(path = "icons/menu.svg".into())]
    Menu,
    #[assoc(path = "icons/close.svg".into())]
    Close,
    #[assoc(path = "icons/sun.svg".into())]
    Sun,
    #[assoc(path = "icons/moon.svg".into())]
    Moon,
    #[assoc(path = "icons/external_link.svg".into())]
    ExternalLink,
    #[assoc(path = "icons/mail.svg".into())]
    Mail,
    #[assoc(path = "icons/phone.svg".into())]
    Phone,
    #[assoc(path = "icons/map_pin.svg".into())]
    MapPin,
    #[assoc(path = "icons/twitter.svg".into())]
    Twitter,
    #[assoc(path = "icons/linkedin.svg".into())]
    Linkedin,
    #[assoc(path = "icons/github.svg".into())]
    Github,
    #[assoc(path = "icons/code.svg".into())]
    Code,
    #[assoc(path = "icons/file_text.svg".into())]
    FileText,
}

impl FolioIconKind {
    pub const ALL: [FolioIconKind; 15] = [
        Self::ArrowLeft,
        Self::ArrowRight,
        Self::Menu,
        Self::Close,
        Self::Sun,
        Self::Moon,
        Self::ExternalLink,
        Self::Mail,
        Self::Phone,
        Self::MapPin,
        Self::Twitter,
        Self::Linkedin,
        Self::Github,
        Self::Code,
        Self::FileText,
    ];
}

impl From<FolioIconKind> for SharedString {
    fn from(icon: FolioIconKind) -> Self {
        icon.path()
    }
}
