// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{App, Message, Screen};
use crate::ui::about;
use crate::ui::header;
use crate::ui::home;
use crate::ui::styles;
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let screen_content: Element<'_, Message> = match self.screen {
            Screen::Home | Screen::Gallery => self.page_view(),
            Screen::About => about::view(about::ViewContext {
                i18n: &self.i18n,
                portrait: self.portrait.as_ref(),
            })
            .map(Message::About),
        };

        // The open lightbox stacks over whatever screen is beneath it.
        if self.lightbox.is_open() {
            Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(screen_content)
                .push(self.lightbox.view(&self.i18n).map(Message::Lightbox))
                .into()
        } else {
            screen_content
        }
    }

    /// The shared Home/Gallery page: header band above the content region.
    fn page_view(&self) -> Element<'_, Message> {
        let header = header::view(header::ViewContext {
            i18n: &self.i18n,
            categories: &self.category_names,
            active_category: self.gallery.category(),
            hidden: self.screen == Screen::Gallery && self.header_visibility.is_hidden(),
        })
        .map(Message::Header);

        let body: Element<'_, Message> = match self.screen {
            Screen::Home => home::view(self.hero.as_ref()),
            _ => self.gallery.view(&self.i18n).map(Message::Gallery),
        };

        let page = Column::new().push(header).push(body);

        Container::new(page)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::page)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Flags;
    use crate::portfolio::{Category, ImageSource, Portfolio};
    use crate::ui::gallery;

    fn test_app() -> App {
        let flags = Flags {
            lang: Some("en-US".to_string()),
            portfolio: Portfolio {
                homepage: None,
                about: None,
                categories: vec![Category {
                    name: "ritratti".to_string(),
                    images: vec![ImageSource {
                        src: "a.jpg".to_string(),
                    }],
                }],
            },
        };
        App::new(flags).0
    }

    #[test]
    fn home_screen_renders() {
        let app = test_app();
        let _element = app.view();
    }

    #[test]
    fn gallery_screen_renders() {
        let mut app = test_app();
        let _ = app.update(Message::Header(crate::ui::header::Message::CategoryPressed(
            "ritratti".to_string(),
        )));
        let _element = app.view();
    }

    #[test]
    fn about_screen_renders() {
        let mut app = test_app();
        let _ = app.update(Message::Header(crate::ui::header::Message::AboutPressed));
        let _element = app.view();
    }

    #[test]
    fn open_lightbox_renders_over_gallery() {
        let mut app = test_app();
        let _ = app.update(Message::Header(crate::ui::header::Message::CategoryPressed(
            "ritratti".to_string(),
        )));
        let _ = app.update(Message::Gallery(gallery::Message::ThumbnailPressed(0)));
        assert!(app.lightbox.is_open());
        let _element = app.view();
    }
}
