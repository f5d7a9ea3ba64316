// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// The site header band. Derived from the active Iced `Theme` background so
/// it stays readable in both light and dark modes without hard-coding colors.
pub fn header(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette.background.strong.color
            },
            width: border::WIDTH_SM,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Neutral page surface behind the hero and grid regions.
pub fn page(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        ..Default::default()
    }
}
