#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::sync::LazyLock;

use enum_assoc::Assoc;
use gpui::{App, SharedString};
use serde::{Deserialize, Serialize};

use crate::{
    FolioIconKind,
    components::carousel::CarouselConfig,
    theme::{ThemeBadgeColors, ThemeExt},
};

static CANONICAL: LazyLock<PortfolioContent> = LazyLock::new(|| {
    PortfolioContent::from_string(include_str!("../../content/portfolio.json"))
        .unwrap_or_else(|err| panic!("bundled portfolio content is invalid: {err}"))
});

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioContent {
    pub profile: Profile,
    pub social_links: Vec<SocialLink>,
    pub projects_url: SharedString,
    pub projects: Vec<Project>,
    pub education: Education,
    pub skills: Vec<SkillGroup>,
    pub contact: Contact,
    #[serde(default)]
    pub carousel: CarouselConfig,
}

impl PortfolioContent {
    /// The single data set the page ships with.
    pub fn canonical() -> &'static PortfolioContent {
        &CANONICAL
    }

    pub fn from_string<S: AsRef<str>>(str: S) -> Result<PortfolioContent, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: SharedString,
    pub role: SharedString,
    pub year: SharedString,
    pub bio: Vec<SharedString>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub label: SharedString,
    pub href: SharedString,
    /// The link points at a file to save rather than a page to visit.
    #[serde(default)]
    pub download: bool,
}

#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[func(pub fn icon(&self) -> FolioIconKind)]
pub enum SocialKind {
    #[assoc(icon = FolioIconKind::Twitter)]
    Twitter,
    #[assoc(icon = FolioIconKind::Linkedin)]
    Linkedin,
    #[assoc(icon = FolioIconKind::Github)]
    Github,
    #[assoc(icon = FolioIconKind::Code)]
    Leetcode,
    #[assoc(icon = FolioIconKind::FileText)]
    Resume,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: SharedString,
    pub description: SharedString,
    pub tech: Vec<SharedString>,
    pub status: ProjectStatus,
    /// Where clicking the card leads. Unreleased projects have none.
    #[serde(default)]
    pub href: Option<SharedString>,
    /// Secondary external link shown with an icon in the card footer.
    #[serde(default)]
    pub link: Option<SharedString>,
}

#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[func(pub fn label(&self) -> &'static str)]
#[func(pub fn badge_colors(&self, cx: &App) -> ThemeBadgeColors)]
pub enum ProjectStatus {
    #[assoc(label = "Live")]
    #[assoc(badge_colors = cx.active_variant().colors.status.live)]
    Live,
    #[assoc(label = "In Progress")]
    #[assoc(badge_colors = cx.active_variant().colors.status.in_progress)]
    InProgress,
    #[assoc(label = "Beta")]
    #[assoc(badge_colors = cx.active_variant().colors.status.beta)]
    Beta,
    #[assoc(label = "Archived")]
    #[assoc(badge_colors = cx.active_variant().colors.status.archived)]
    Archived,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: SharedString,
    pub period: SharedString,
    pub courses: Vec<SharedString>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: SharedString,
    pub skills: Vec<SharedString>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub email: SharedString,
    pub phone: SharedString,
    pub location: SharedString,
    pub blurb: SharedString,
}
