// SPDX-License-Identifier: MPL-2.0
//! Home screen: the hero feature image shown before a category is selected.

use crate::media::ImageData;
use crate::ui::design_tokens::{sizing, spacing};
use iced::{
    widget::{image, Column, Container},
    Element, Length,
};

/// Render the hero view.
///
/// A missing or still-loading hero image degrades to an empty page rather
/// than failing; the header remains fully usable.
pub fn view<Message: 'static>(hero: Option<&ImageData>) -> Element<'_, Message> {
    let mut content = Column::new()
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(iced::alignment::Horizontal::Center);

    if let Some(hero) = hero {
        content = content.push(
            image::Image::new(hero.handle.clone())
                .width(Length::Fixed(sizing::HERO_MAX_WIDTH))
                .height(Length::Shrink),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .into()
}
