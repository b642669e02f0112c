use gpui::{
    App, AppContext, Application, Bounds, KeyBinding, Menu, TitlebarOptions, WindowBounds,
    WindowOptions, actions, point, px, size,
};

use gpui_folio::{FolioAssets, assets, content::PortfolioContent, views::PortfolioView};

actions!(window, [TabNext, TabPrev]);

fn main() {
    env_logger::init();

    Application::new()
        .with_quit_mode(gpui::QuitMode::LastWindowClosed)
        .with_assets(assets![FolioAssets])
        .run(|cx: &mut App| {
            gpui_folio::init(cx);

            cx.set_menus(vec![Menu {
                name: "Portfolio".into(),
                items: vec![],
            }]);

            let bounds = Bounds::centered(None, size(px(1180.), px(860.)), cx);

            let opened = cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        title: Some(PortfolioContent::canonical().profile.name.clone()),
                        appears_transparent: true,
                        traffic_light_position: Some(point(px(10.), px(10.))),
                    }),
                    ..Default::default()
                },
                |window, cx| {
                    cx.new(|cx| {
                        PortfolioView::new(PortfolioContent::canonical().clone(), window, cx)
                    })
                },
            );

            if let Err(err) = opened {
                log::error!("could not open the portfolio window: {err}");
                cx.quit();
                return;
            }

            init_tab_indexing_actions(cx);

            cx.activate(true);
        });
}

fn init_tab_indexing_actions(cx: &mut App) {
    cx.on_action(move |_: &TabNext, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_next(cx);
            });
        })
    });

    cx.on_action(move |_: &TabPrev, cx| {
        cx.defer(move |cx| {
            let Some(window) = cx.active_window() else {
                return;
            };

            let _ = window.update(cx, move |_, window, cx| {
                window.focus_prev(cx);
            });
        })
    });

    cx.bind_keys([KeyBinding::new("tab", TabNext, None)]);
    cx.bind_keys([KeyBinding::new("shift-tab", TabPrev, None)]);
}
