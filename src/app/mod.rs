// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the domains (portfolio, gallery,
//! lightbox, localization) and translates messages into side effects like
//! image decoding or lightbox transitions. This module intentionally keeps
//! policy decisions (window sizing, locale resolution, screen switching)
//! close to the main update loop so it is easy to audit user-facing
//! behavior.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::config;
use crate::i18n::fluent::I18n;
use crate::media::{loader, ImageData};
use crate::portfolio::Portfolio;
use crate::ui::gallery;
use crate::ui::lightbox;
use crate::ui::state::HeaderVisibility;
use crate::ui::theming::ThemeMode;
use iced::{window, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    portfolio: Portfolio,
    /// Category names cached in menu order for the header.
    category_names: Vec<String>,
    gallery: gallery::State,
    lightbox: lightbox::State,
    header_visibility: HeaderVisibility,
    hero: Option<ImageData>,
    portrait: Option<ImageData>,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("active_category", &self.gallery.category())
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Home,
            portfolio: Portfolio::default(),
            category_names: Vec::new(),
            gallery: gallery::State::new(),
            lightbox: lightbox::State::new(),
            header_visibility: HeaderVisibility::new(),
            hero: None,
            portrait: None,
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state and kicks off asynchronous decoding of
    /// the hero and profile images named by the portfolio.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let category_names: Vec<String> = flags
            .portfolio
            .category_names()
            .map(str::to_string)
            .collect();

        let app = App {
            i18n,
            portfolio: flags.portfolio,
            category_names,
            theme_mode: config.theme_mode,
            ..Self::default()
        };

        let mut tasks: Vec<Task<Message>> = Vec::new();

        if let Some(hero) = &app.portfolio.homepage {
            let src = hero.src.clone();
            tasks.push(Task::perform(loader::load_source(src), Message::HeroLoaded));
        }
        if let Some(portrait) = &app.portfolio.about {
            let src = portrait.src.clone();
            tasks.push(Task::perform(
                loader::load_source(src),
                Message::PortraitLoaded,
            ));
        }

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_frame_subscription(self.header_visibility.frame_pending()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::{Category, ImageSource};

    fn test_flags() -> Flags {
        Flags {
            lang: Some("en-US".to_string()),
            portfolio: Portfolio {
                homepage: Some(ImageSource {
                    src: "home.jpg".to_string(),
                }),
                about: None,
                categories: vec![Category {
                    name: "ritratti".to_string(),
                    images: vec![
                        ImageSource {
                            src: "a.jpg".to_string(),
                        },
                        ImageSource {
                            src: "b.jpg".to_string(),
                        },
                    ],
                }],
            },
        }
    }

    #[test]
    fn new_app_starts_on_home() {
        let (app, _task) = App::new(test_flags());
        assert_eq!(app.screen, Screen::Home);
        assert!(!app.lightbox.is_open());
        assert_eq!(app.category_names, vec!["ritratti"]);
    }

    #[test]
    fn default_app_has_no_categories() {
        let app = App::default();
        assert!(app.category_names.is_empty());
        assert_eq!(app.gallery.category(), None);
    }

    #[test]
    fn title_resolves_app_name() {
        let (app, _task) = App::new(test_flags());
        assert_eq!(app.title(), "Fotofolio");
    }
}
