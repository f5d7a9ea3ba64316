// SPDX-License-Identifier: MPL-2.0
//! About screen module: the photographer's profile portrait and bio.
//!
//! Unlike the category links, the About link behaves like a real page
//! navigation: it replaces the whole content region, header included.

use crate::i18n::fluent::I18n;
use crate::media::ImageData;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{button, scrollable, text, Column, Container, Text},
    Element, Length,
};

/// Contextual data needed to render the about screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Profile portrait, once loaded. A missing portrait degrades silently.
    pub portrait: Option<&'a ImageData>,
}

/// Messages emitted by the about screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToHome,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    BackToHome,
}

/// Process an about screen message and return the corresponding event.
#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::BackToHome => Event::BackToHome,
    }
}

/// Render the about screen.
#[must_use]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let back_button = button(text(format!("← {}", ctx.i18n.tr("header-logo"))).size(typography::BODY))
        .on_press(Message::BackToHome);

    let heading = Text::new(ctx.i18n.tr("about-heading")).size(typography::TITLE_LG);

    let mut content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .padding(spacing::XL)
        .push(back_button)
        .push(heading);

    if let Some(portrait) = ctx.portrait {
        content = content.push(
            iced::widget::image::Image::new(portrait.handle.clone())
                .width(Length::Fixed(360.0))
                .height(Length::Shrink),
        );
    }

    content = content.push(
        Text::new(ctx.i18n.tr("about-body"))
            .size(typography::BODY)
            .width(Length::Fixed(480.0)),
    );

    Container::new(scrollable(content))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
