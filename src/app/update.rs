// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, Screen};
use crate::ui::about;
use crate::ui::gallery;
use crate::ui::header;
use crate::ui::lightbox;
use iced::Task;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(msg) => self.handle_header_event(header::update(msg)),
            Message::Gallery(msg) => {
                let (task, effect) = self.gallery.update(msg);
                let side_effect = self.handle_gallery_effect(effect);
                Task::batch([task.map(Message::Gallery), side_effect])
            }
            Message::Lightbox(msg) => self.lightbox.update(msg).map(Message::Lightbox),
            Message::About(msg) => match about::update(&msg) {
                about::Event::BackToHome => {
                    self.go_home();
                    Task::none()
                }
            },
            Message::HeroLoaded(result) => {
                match result {
                    Ok(image) => self.hero = Some(image),
                    // Tolerated: the hero region stays empty.
                    Err(error) => eprintln!("Failed to load homepage image: {error}"),
                }
                Task::none()
            }
            Message::PortraitLoaded(result) => {
                match result {
                    Ok(image) => self.portrait = Some(image),
                    Err(error) => eprintln!("Failed to load profile image: {error}"),
                }
                Task::none()
            }
            Message::FrameTick(_) => {
                self.header_visibility.on_frame();
                Task::none()
            }
            Message::RawEvent { event, .. } => {
                // Keyboard and gesture input only concerns the open overlay.
                if self.lightbox.is_open() {
                    self.lightbox
                        .update(lightbox::Message::RawEvent(event))
                        .map(Message::Lightbox)
                } else {
                    Task::none()
                }
            }
        }
    }

    fn handle_header_event(&mut self, event: header::Event) -> Task<Message> {
        match event {
            header::Event::GoHome => {
                self.go_home();
                Task::none()
            }
            header::Event::ShowCategory(name) => {
                self.screen = Screen::Gallery;
                self.header_visibility.reset();
                let sequence = self.portfolio.sequence(&name).to_vec();
                self.gallery.populate(&name, &sequence).map(Message::Gallery)
            }
            header::Event::OpenAbout => {
                self.screen = Screen::About;
                Task::none()
            }
        }
    }

    fn handle_gallery_effect(&mut self, effect: gallery::Effect) -> Task<Message> {
        match effect {
            gallery::Effect::None => Task::none(),
            gallery::Effect::OpenLightbox {
                category,
                index,
                sequence,
            } => self
                .lightbox
                .open(&category, sequence, index)
                .map(Message::Lightbox),
            gallery::Effect::ScrollReported(offset) => {
                self.header_visibility.record_scroll(offset);
                Task::none()
            }
        }
    }

    /// Restores the hero view: grid hidden, active link cleared.
    fn go_home(&mut self) {
        self.screen = Screen::Home;
        self.gallery.clear();
        self.header_visibility.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;
    use crate::portfolio::{Category, ImageSource, Portfolio};

    fn app_with_categories() -> App {
        let flags = Flags {
            lang: Some("en-US".to_string()),
            portfolio: Portfolio {
                homepage: None,
                about: None,
                categories: vec![
                    Category {
                        name: "ritratti".to_string(),
                        images: vec![
                            ImageSource {
                                src: "r1.jpg".to_string(),
                            },
                            ImageSource {
                                src: "r2.jpg".to_string(),
                            },
                            ImageSource {
                                src: "r3.jpg".to_string(),
                            },
                        ],
                    },
                    Category {
                        name: "paesaggio".to_string(),
                        images: Vec::new(),
                    },
                ],
            },
        };
        let (app, _task) = App::new(flags);
        app
    }

    #[test]
    fn category_link_switches_to_gallery() {
        let mut app = app_with_categories();
        let _ = app.update(Message::Header(header::Message::CategoryPressed(
            "ritratti".to_string(),
        )));

        assert_eq!(app.screen, Screen::Gallery);
        assert_eq!(app.gallery.category(), Some("ritratti"));
        assert_eq!(app.gallery.thumbnails().len(), 3);
    }

    #[test]
    fn missing_category_shows_empty_grid() {
        let mut app = app_with_categories();
        let _ = app.update(Message::Header(header::Message::CategoryPressed(
            "flora".to_string(),
        )));

        assert_eq!(app.screen, Screen::Gallery);
        assert!(app.gallery.thumbnails().is_empty());
        assert!(app.gallery.is_revealed());
    }

    #[test]
    fn logo_restores_hero_and_clears_active_link() {
        let mut app = app_with_categories();
        let _ = app.update(Message::Header(header::Message::CategoryPressed(
            "ritratti".to_string(),
        )));
        let _ = app.update(Message::Header(header::Message::LogoPressed));

        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.gallery.category(), None);
    }

    #[test]
    fn about_link_opens_about_screen() {
        let mut app = app_with_categories();
        let _ = app.update(Message::Header(header::Message::AboutPressed));
        assert_eq!(app.screen, Screen::About);

        let _ = app.update(Message::About(about::Message::BackToHome));
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn thumbnail_press_opens_lightbox_with_context() {
        let mut app = app_with_categories();
        let _ = app.update(Message::Header(header::Message::CategoryPressed(
            "ritratti".to_string(),
        )));
        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailPressed(2)));

        assert!(app.lightbox.is_open());
        assert_eq!(app.lightbox.current_index(), Some(2));
    }

    #[test]
    fn raw_events_are_ignored_while_lightbox_closed() {
        let mut app = app_with_categories();
        let escape = iced::Event::Keyboard(iced::keyboard::Event::KeyPressed {
            key: iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape),
            modified_key: iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape),
            physical_key: iced::keyboard::key::Physical::Code(iced::keyboard::key::Code::Escape),
            location: iced::keyboard::Location::Standard,
            modifiers: iced::keyboard::Modifiers::default(),
            text: None,
            repeat: false,
        });

        let _ = app.update(Message::RawEvent {
            window: iced::window::Id::unique(),
            event: escape,
        });
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn scroll_reports_coalesce_into_frame_tick() {
        let mut app = app_with_categories();
        let _ = app.update(Message::Gallery(gallery::Message::Scrolled(200.0)));
        assert!(app.header_visibility.frame_pending());

        let _ = app.update(Message::FrameTick(std::time::Instant::now()));
        assert!(!app.header_visibility.frame_pending());
        assert!(app.header_visibility.is_hidden());
    }
}
