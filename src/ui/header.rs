// SPDX-License-Identifier: MPL-2.0
//! Site header module for app-level navigation.
//!
//! This module provides the logo wordmark and the category links shown at
//! the top of the Home and Gallery screens. Category links toggle an active
//! state among siblings and switch the content region; the About link leads
//! to its own screen; the logo returns to the hero view.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, container, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Category names in menu order.
    pub categories: &'a [String],
    /// The category whose link carries the active treatment, if any.
    pub active_category: Option<&'a str>,
    /// Whether scroll direction has hidden the header.
    pub hidden: bool,
}

/// Messages emitted by the header.
#[derive(Debug, Clone)]
pub enum Message {
    LogoPressed,
    CategoryPressed(String),
    AboutPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Restore the hero view and clear the active link.
    GoHome,
    /// Populate and show the grid for this category.
    ShowCategory(String),
    /// Navigate to the About screen.
    OpenAbout,
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::LogoPressed => Event::GoHome,
        Message::CategoryPressed(name) => Event::ShowCategory(name),
        Message::AboutPressed => Event::OpenAbout,
    }
}

/// Render the header band.
///
/// A hidden header renders as an empty element so the content region takes
/// the full height, mirroring the slide-away behavior of the original site.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if ctx.hidden {
        return Column::new().width(Length::Fill).into();
    }

    let logo = button(
        Text::new(ctx.i18n.tr("header-logo"))
            .size(typography::TITLE_LG)
            .font(iced::Font {
                weight: iced::font::Weight::Light,
                ..iced::Font::default()
            }),
    )
    .on_press(Message::LogoPressed)
    .padding(spacing::XS)
    .style(styles::button::logo);

    let mut links = Row::new().spacing(spacing::LG).align_y(Vertical::Center);

    for name in ctx.categories {
        let active = ctx.active_category == Some(name.as_str());
        let label = ctx.i18n.tr_or(&format!("category-{name}"), name);

        links = links.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::CategoryPressed(name.clone()))
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::nav_link(active)),
        );
    }

    links = links.push(
        button(Text::new(ctx.i18n.tr("header-about")).size(typography::BODY))
            .on_press(Message::AboutPressed)
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::nav_link(false)),
    );

    let row = Row::new()
        .height(Length::Fixed(sizing::HEADER_HEIGHT))
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(logo)
        .push(Space::new(Length::Fill, Length::Shrink))
        .push(links);

    Container::new(row)
        .width(Length::Fill)
        .style(container_style)
        .into()
}

fn container_style(theme: &iced::Theme) -> container::Style {
    styles::container::header(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    fn category_names() -> Vec<String> {
        vec!["ritratti".to_string(), "paesaggio".to_string()]
    }

    #[test]
    fn header_view_renders() {
        let i18n = I18n::default();
        let categories = category_names();
        let ctx = ViewContext {
            i18n: &i18n,
            categories: &categories,
            active_category: None,
            hidden: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn header_view_renders_with_active_category() {
        let i18n = I18n::default();
        let categories = category_names();
        let ctx = ViewContext {
            i18n: &i18n,
            categories: &categories,
            active_category: Some("ritratti"),
            hidden: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn hidden_header_still_renders() {
        let i18n = I18n::default();
        let categories = category_names();
        let ctx = ViewContext {
            i18n: &i18n,
            categories: &categories,
            active_category: Some("paesaggio"),
            hidden: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn logo_press_goes_home() {
        assert_eq!(update(Message::LogoPressed), Event::GoHome);
    }

    #[test]
    fn category_press_shows_category() {
        let event = update(Message::CategoryPressed("ritratti".to_string()));
        assert_eq!(event, Event::ShowCategory("ritratti".to_string()));
    }

    #[test]
    fn about_press_opens_about() {
        assert_eq!(update(Message::AboutPressed), Event::OpenAbout);
    }
}
