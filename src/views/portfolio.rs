#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{
    AnyElement, App, AppContext, Context, CursorStyle, Div, Entity, FontWeight, InteractiveElement,
    IntoElement, ParentElement, Pixels, Render, SharedString, StatefulInteractiveElement, Styled,
    Subscription, Window, div, prelude::FluentBuilder, px,
};
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    FolioIconKind,
    components::{
        Icon, Navigation, ProjectCard,
        carousel::{Carousel, CarouselConfig, CarouselController},
    },
    content::{PortfolioContent, SocialLink},
    init_for_window,
    primitives::SectionNavigator,
    theme::{
        ThemeExt, ThemePaddingKind, ThemePreferenceExt, ThemeSurfaceKind, ThemeTextColorKind,
        ThemeTextSizeKind,
    },
    utils::RgbaExt,
};

/// Viewport widths below this use the mobile layout.
pub const MOBILE_BREAKPOINT: f32 = 768.;

/// Mobile viewports at least this wide lay project cards out in two columns.
const TWO_COLUMN_WIDTH: f32 = 520.;

const PROJECT_CARD_HEIGHT: f32 = 230.;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Desktop,
}

impl Breakpoint {
    pub fn from_width(width: Pixels) -> Self {
        if width < px(MOBILE_BREAKPOINT) {
            Breakpoint::Mobile
        } else {
            Breakpoint::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Breakpoint::Mobile
    }
}

/// The page's sections, in the order they are laid out.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn id(&self) -> &'static str)]
pub enum PageSection {
    #[assoc(id = "home")]
    Home,
    #[assoc(id = "projects")]
    Projects,
    #[assoc(id = "education")]
    Education,
    #[assoc(id = "skills")]
    Skills,
    #[assoc(id = "contact")]
    Contact,
}

impl PageSection {
    pub const ALL: [PageSection; 5] = [
        Self::Home,
        Self::Projects,
        Self::Education,
        Self::Skills,
        Self::Contact,
    ];

    /// Sections linked from the navigation.
    pub const NAVIGABLE: [PageSection; 3] = [Self::Home, Self::Projects, Self::Skills];
}

/// The single-page portfolio.
pub struct PortfolioView {
    content: PortfolioContent,
    carousel: Entity<CarouselController>,
    navigator: SectionNavigator,
    breakpoint: Breakpoint,
    _subscriptions: Vec<Subscription>,
}

impl PortfolioView {
    pub fn new(content: PortfolioContent, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let breakpoint = Breakpoint::from_width(window.viewport_size().width);
        let carousel = cx.new(|cx| {
            let config = content.carousel.clone();
            let autoplay = Self::autoplays(&config, breakpoint);
            CarouselController::new(content.projects.len(), config.autoplay(autoplay), cx)
        });

        let subscriptions = vec![
            cx.observe(&carousel, |_this, _carousel, cx| cx.notify()),
            cx.observe_window_bounds(window, |this, window, cx| {
                this.sync_breakpoint(window, cx);
            }),
            cx.observe_window_appearance(window, |_this, _window, cx| {
                cx.sync_system_appearance();
            }),
        ];

        Self {
            content,
            carousel,
            navigator: SectionNavigator::with_sections(PageSection::ALL.map(|s| s.id())),
            breakpoint,
            _subscriptions: subscriptions,
        }
    }

    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    pub fn carousel(&self) -> &Entity<CarouselController> {
        &self.carousel
    }

    pub fn navigator(&self) -> &SectionNavigator {
        &self.navigator
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// The carousel only autoplays while it is on screen.
    fn autoplays(config: &CarouselConfig, breakpoint: Breakpoint) -> bool {
        config.autoplay && !breakpoint.is_mobile()
    }

    fn sync_breakpoint(&mut self, window: &mut Window, cx: &mut Context<Self>) {
        let breakpoint = Breakpoint::from_width(window.viewport_size().width);
        if breakpoint == self.breakpoint {
            return;
        }

        log::debug!("switching to the {breakpoint:?} layout");
        self.breakpoint = breakpoint;

        let autoplay = Self::autoplays(&self.content.carousel, breakpoint);
        self.carousel.update(cx, |carousel, cx| {
            carousel.set_autoplay(autoplay, cx);
        });
        cx.notify();
    }

    fn render_section(
        &self,
        section: PageSection,
        viewport_width: Pixels,
        cx: &App,
    ) -> AnyElement {
        let body = match section {
            PageSection::Home => self.render_hero(viewport_width, cx),
            PageSection::Projects => self.render_projects(viewport_width, cx),
            PageSection::Education => self.render_education(cx),
            PageSection::Skills => self.render_skills(cx),
            PageSection::Contact => self.render_contact(cx),
        };

        div()
            .id(section.id())
            .w_full()
            .max_w(px(1040.))
            .mx_auto()
            .px(ThemePaddingKind::Xl.resolve(cx))
            .py(ThemePaddingKind::Xl.resolve(cx) * 1.5)
            .child(body)
            .into_any_element()
    }

    fn render_hero(&self, viewport_width: Pixels, cx: &App) -> AnyElement {
        let colors = cx.active_variant().colors.clone();
        let layout = &cx.get_theme().layout;
        let profile = &self.content.profile;
        let mobile = Breakpoint::from_width(viewport_width).is_mobile();

        let profile_card = div()
            .relative()
            .flex_none()
            .map(|this| if mobile { this.w_full() } else { this.w(px(280.)) })
            .p(layout.padding.lg)
            .flex()
            .flex_col()
            .gap(layout.padding.sm)
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(layout.corner_radii.lg)
                    .bg(colors.background.surface)
                    .border(px(1.))
                    .border_color(colors.border),
            )
            .child(
                div()
                    .text_size(ThemeTextSizeKind::HeadingSm.resolve(cx))
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(colors.text.primary)
                    .child(profile.role.clone()),
            )
            .child(
                div()
                    .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                    .text_color(colors.text.muted)
                    .child(profile.year.clone()),
            )
            .child(
                div()
                    .pt(layout.padding.sm)
                    .flex()
                    .flex_col()
                    .gap(layout.padding.sm)
                    .children(
                        self.content
                            .social_links
                            .iter()
                            .enumerate()
                            .map(|(ix, link)| social_link(ix, link, cx)),
                    ),
            );

        div()
            .flex()
            .map(|this| {
                if mobile {
                    this.flex_col()
                } else {
                    this.flex_row().items_start()
                }
            })
            .gap(layout.padding.xl)
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .gap(layout.padding.md)
                    .child(
                        div()
                            .text_size(ThemeTextSizeKind::Display.resolve(cx))
                            .font_weight(FontWeight::BOLD)
                            .text_color(colors.text.primary)
                            .child(profile.name.clone()),
                    )
                    .children(profile.bio.iter().map(|paragraph| {
                        div()
                            .text_size(ThemeTextSizeKind::Body.resolve(cx))
                            .text_color(colors.text.secondary)
                            .child(paragraph.clone())
                    })),
            )
            .child(profile_card)
            .into_any_element()
    }

    fn render_projects(&self, viewport_width: Pixels, cx: &App) -> AnyElement {
        let colors = cx.active_variant().colors.clone();
        let projects = &self.content.projects;

        let cards = projects.iter().enumerate().map(|(ix, project)| {
            div()
                .h(px(PROJECT_CARD_HEIGHT))
                .child(ProjectCard::new(("project", ix), project.clone()))
        });

        let showcase = if Breakpoint::from_width(viewport_width).is_mobile() {
            let columns = if viewport_width >= px(TWO_COLUMN_WIDTH) {
                2
            } else {
                1
            };
            let gap = ThemePaddingKind::Md.resolve(cx);
            let mut cards = cards.collect::<Vec<_>>().into_iter();

            let mut rows = Vec::new();
            loop {
                let row = cards.by_ref().take(columns).collect::<Vec<_>>();
                if row.is_empty() {
                    break;
                }
                let padding = columns - row.len();
                rows.push(
                    div()
                        .flex()
                        .gap(gap)
                        .children(row.into_iter().map(|card| div().flex_1().child(card)))
                        .children((0..padding).map(|_| div().flex_1())),
                );
            }

            div()
                .flex()
                .flex_col()
                .gap(gap)
                .children(rows)
                .into_any_element()
        } else {
            Carousel::new("projects:carousel", self.carousel.clone())
                .children(cards)
                .into_any_element()
        };

        let projects_url = self.content.projects_url.clone();

        div()
            .flex()
            .flex_col()
            .gap(ThemePaddingKind::Lg.resolve(cx))
            .child(section_heading("Projects", cx))
            .child(showcase)
            .child(
                div().flex().justify_center().child(
                    div()
                        .id("projects:more")
                        .cursor(CursorStyle::PointingHand)
                        .flex()
                        .items_center()
                        .gap(px(6.))
                        .text_size(ThemeTextSizeKind::Body.resolve(cx))
                        .text_color(colors.accent.primary)
                        .child("Check out more")
                        .child(Icon::new(FolioIconKind::ExternalLink).color(colors.accent.primary))
                        .on_click(move |_event, _window, cx| cx.open_url(&projects_url)),
                ),
            )
            .into_any_element()
    }

    fn render_education(&self, cx: &App) -> AnyElement {
        let colors = cx.active_variant().colors.clone();
        let education = &self.content.education;

        div()
            .flex()
            .flex_col()
            .gap(ThemePaddingKind::Md.resolve(cx))
            .child(section_heading("Education", cx))
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .items_baseline()
                    .justify_between()
                    .gap(ThemePaddingKind::Sm.resolve(cx))
                    .child(
                        div()
                            .text_size(ThemeTextSizeKind::HeadingMd.resolve(cx))
                            .text_color(colors.text.primary)
                            .child(education.degree.clone()),
                    )
                    .child(
                        div()
                            .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                            .text_color(colors.text.muted)
                            .child(education.period.clone()),
                    ),
            )
            .child(
                div()
                    .flex()
                    .flex_wrap()
                    .gap(px(8.))
                    .children(education.courses.iter().map(|course| chip(course.clone(), cx))),
            )
            .into_any_element()
    }

    fn render_skills(&self, cx: &App) -> AnyElement {
        let colors = cx.active_variant().colors.clone();
        let layout = &cx.get_theme().layout;

        div()
            .flex()
            .flex_col()
            .gap(layout.padding.md)
            .child(section_heading("Capabilities Console", cx))
            .child(
                div()
                    .relative()
                    .p(layout.padding.lg)
                    .flex()
                    .flex_col()
                    .gap(layout.padding.md)
                    .child(
                        squircle()
                            .absolute_expand()
                            .rounded(layout.corner_radii.lg)
                            .bg(colors.background.surface)
                            .border(px(1.))
                            .border_color(colors.border),
                    )
                    .children(self.content.skills.iter().map(|group| {
                        div()
                            .flex()
                            .flex_col()
                            .gap(px(8.))
                            .child(
                                div()
                                    .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .text_color(colors.accent.primary)
                                    .child(format!("> {}", group.category)),
                            )
                            .child(
                                div()
                                    .flex()
                                    .flex_wrap()
                                    .gap(px(8.))
                                    .children(
                                        group.skills.iter().map(|skill| chip(skill.clone(), cx)),
                                    ),
                            )
                    })),
            )
            .into_any_element()
    }

    fn render_contact(&self, cx: &App) -> AnyElement {
        let colors = cx.active_variant().colors.clone();
        let contact = &self.content.contact;

        let row = |id: &'static str, icon: FolioIconKind, text: SharedString, url: Option<String>| {
            div()
                .id(id)
                .flex()
                .items_center()
                .gap(px(10.))
                .text_size(ThemeTextSizeKind::Body.resolve(cx))
                .text_color(colors.text.secondary)
                .child(Icon::new(icon).size(px(18.)).color(colors.text.muted))
                .child(text)
                .when_some(url, |this, url| {
                    this.cursor(CursorStyle::PointingHand)
                        .on_click(move |_event, _window, cx| cx.open_url(&url))
                })
        };

        div()
            .flex()
            .flex_col()
            .gap(ThemePaddingKind::Md.resolve(cx))
            .child(section_heading("Contact", cx))
            .child(
                div()
                    .text_size(ThemeTextSizeKind::Body.resolve(cx))
                    .text_color(colors.text.secondary)
                    .child(contact.blurb.clone()),
            )
            .child(row(
                "contact:email",
                FolioIconKind::Mail,
                contact.email.clone(),
                Some(format!("mailto:{}", contact.email)),
            ))
            .child(row(
                "contact:phone",
                FolioIconKind::Phone,
                contact.phone.clone(),
                Some(format!("tel:{}", contact.phone.replace(' ', ""))),
            ))
            .child(row(
                "contact:location",
                FolioIconKind::MapPin,
                contact.location.clone(),
                None,
            ))
            .into_any_element()
    }
}

impl Render for PortfolioView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        init_for_window(window, cx);

        let viewport_width = window.viewport_size().width;
        let theme = cx.get_theme();
        let family = theme.layout.text.family.first().cloned();

        div()
            .id("portfolio")
            .relative()
            .size_full()
            .bg(ThemeSurfaceKind::Page.resolve(cx))
            .text_color(ThemeTextColorKind::Primary.resolve(cx))
            .when_some(family, |this, family| this.font_family(family))
            .child(
                div()
                    .id("portfolio:scroll")
                    .size_full()
                    .overflow_y_scroll()
                    .track_scroll(self.navigator.scroll_handle())
                    .bg(ThemeSurfaceKind::Paper.resolve(cx))
                    .children(
                        PageSection::ALL
                            .map(|section| self.render_section(section, viewport_width, cx)),
                    ),
            )
            .child(
                Navigation::new("navigation", self.navigator.clone())
                    .items(PageSection::NAVIGABLE.map(|section| section.id()))
                    .mobile(Breakpoint::from_width(viewport_width).is_mobile()),
            )
    }
}

fn section_heading(title: impl Into<SharedString>, cx: &App) -> Div {
    div()
        .text_size(ThemeTextSizeKind::HeadingLg.resolve(cx))
        .font_weight(FontWeight::BOLD)
        .text_color(ThemeTextColorKind::Primary.resolve(cx))
        .child(title.into())
}

fn chip(label: SharedString, cx: &App) -> Div {
    let colors = &cx.active_variant().colors;

    div()
        .px(ThemePaddingKind::Sm.resolve(cx))
        .py(px(3.))
        .rounded(cx.get_theme().layout.corner_radii.sm)
        .bg(colors.accent.subtle.alpha(0.5))
        .text_size(ThemeTextSizeKind::Caption.resolve(cx))
        .text_color(ThemeTextColorKind::Secondary.resolve(cx))
        .child(label)
}

/// Social links alternate their icon between the leading and trailing edge.
fn social_link(ix: usize, link: &SocialLink, cx: &App) -> impl IntoElement {
    let colors = cx.active_variant().colors.clone();
    let href = link.href.clone();

    div()
        .id(("social", ix))
        .cursor(CursorStyle::PointingHand)
        .flex()
        .items_center()
        .gap(px(8.))
        .map(|this| {
            if ix % 2 == 0 {
                this.flex_row()
            } else {
                this.flex_row_reverse().justify_end()
            }
        })
        .text_size(ThemeTextSizeKind::Body.resolve(cx))
        .text_color(colors.text.secondary)
        .child(Icon::new(link.kind.icon()).size(px(18.)).color(colors.accent.primary))
        .child(link.label.clone())
        .when(link.download, |this| {
            this.child(
                div()
                    .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                    .text_color(colors.text.muted)
                    .child("(download)"),
            )
        })
        .on_click(move |_event, _window, cx| cx.open_url(&href))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_boundary() {
        assert_eq!(Breakpoint::from_width(px(320.)), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(px(767.)), Breakpoint::Mobile);
        assert_eq!(Breakpoint::from_width(px(768.)), Breakpoint::Desktop);
        assert_eq!(Breakpoint::from_width(px(1440.)), Breakpoint::Desktop);
    }

    #[test]
    fn test_navigable_sections_are_page_sections() {
        for section in PageSection::NAVIGABLE {
            assert!(PageSection::ALL.contains(&section));
        }

        let ids = PageSection::NAVIGABLE.map(|section| section.id());
        assert_eq!(ids, ["home", "projects", "skills"]);
    }
}

#[cfg(all(test, feature = "test-support"))]
mod gpui_tests {
    use std::time::Duration;

    use super::*;
    use crate::{components::carousel, theme};
    use gpui::{
        Bounds, Size, TestAppContext, VisualTestContext, WindowBounds, WindowOptions, point, size,
    };

    fn desktop() -> Size<Pixels> {
        size(px(1200.), px(800.))
    }

    fn mobile() -> Size<Pixels> {
        size(px(400.), px(800.))
    }

    fn open(
        cx: &mut TestAppContext,
        window_size: Size<Pixels>,
    ) -> (Entity<PortfolioView>, VisualTestContext) {
        cx.update(|cx| {
            theme::init_with_store(cx, None);
            carousel::init(cx);
        });

        let mut view = None;
        let window = cx
            .update(|cx| {
                let options = WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(Bounds {
                        origin: point(px(0.), px(0.)),
                        size: window_size,
                    })),
                    ..Default::default()
                };

                cx.open_window(options, |window, cx| {
                    let entity = cx.new(|cx| {
                        PortfolioView::new(PortfolioContent::canonical().clone(), window, cx)
                    });
                    view = Some(entity.clone());
                    entity
                })
            })
            .unwrap();

        let vcx = VisualTestContext::from_window(window.into(), cx);
        (view.unwrap(), vcx)
    }

    #[gpui::test]
    fn test_sections_registered_in_page_order(cx: &mut TestAppContext) {
        let (view, mut vcx) = open(cx, desktop());
        vcx.run_until_parked();

        view.read_with(&vcx, |view, _| {
            let ids = view
                .navigator()
                .section_ids()
                .map(|id| id.to_string())
                .collect::<Vec<_>>();
            assert_eq!(ids, ["home", "projects", "education", "skills", "contact"]);

            assert!(view.navigator().scroll_to_section("skills"));
            assert!(!view.navigator().scroll_to_section("blog"));
        });
    }

    #[gpui::test]
    fn test_carousel_sized_to_projects_and_autoplays(cx: &mut TestAppContext) {
        let (view, mut vcx) = open(cx, desktop());
        vcx.run_until_parked();

        let (carousel, projects) = view.read_with(&vcx, |view, _| {
            (view.carousel().clone(), view.content().projects.len())
        });

        carousel.read_with(&vcx, |carousel, _| {
            assert_eq!(carousel.state().len(), projects);
            assert_eq!(carousel.current_index(), 0);
        });

        cx.executor().advance_clock(Duration::from_millis(5000));
        vcx.run_until_parked();

        carousel.read_with(&vcx, |carousel, _| {
            assert_eq!(carousel.current_index(), 1);
        });
    }

    #[gpui::test]
    fn test_carousel_only_autoplays_on_desktop(cx: &mut TestAppContext) {
        let (view, mut vcx) = open(cx, mobile());
        vcx.run_until_parked();

        let carousel = view.read_with(&vcx, |view, _| {
            assert_eq!(view.breakpoint(), Breakpoint::Mobile);
            view.carousel().clone()
        });
        carousel.read_with(&vcx, |carousel, _| assert!(!carousel.timer().is_armed()));

        cx.executor().advance_clock(Duration::from_millis(5000));
        vcx.run_until_parked();
        carousel.read_with(&vcx, |carousel, _| assert_eq!(carousel.current_index(), 0));

        vcx.simulate_resize(desktop());
        vcx.run_until_parked();
        view.read_with(&vcx, |view, _| assert_eq!(view.breakpoint(), Breakpoint::Desktop));
        carousel.read_with(&vcx, |carousel, _| assert!(carousel.timer().is_armed()));

        cx.executor().advance_clock(Duration::from_millis(5000));
        vcx.run_until_parked();
        carousel.read_with(&vcx, |carousel, _| assert_eq!(carousel.current_index(), 1));

        vcx.simulate_resize(size(px(500.), px(800.)));
        vcx.run_until_parked();
        carousel.read_with(&vcx, |carousel, _| assert!(!carousel.timer().is_armed()));
    }
}
