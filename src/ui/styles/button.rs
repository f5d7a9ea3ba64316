// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for header navigation links. The active link carries the accent
/// underline treatment; siblings stay quiet.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette_ext = theme.extended_palette();
        let text_color = if active {
            palette::ACCENT_500
        } else {
            palette_ext.background.base.text
        };

        let border = if active {
            Border {
                color: palette::ACCENT_500,
                width: 2.0,
                radius: radius::NONE.into(),
            }
        } else {
            Border::default()
        };

        match status {
            button::Status::Hovered => button::Style {
                background: None,
                text_color: palette::ACCENT_400,
                border,
                shadow: shadow::NONE,
                snap: true,
            },
            _ => button::Style {
                background: None,
                text_color,
                border,
                shadow: shadow::NONE,
                snap: true,
            },
        }
    }
}

/// Style for buttons drawn over the lightbox (navigation arrows, close).
pub fn overlay(
    text_color: Color,
    alpha_normal: f32,
    alpha_hover: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => alpha_hover,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => alpha_normal,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border::default(),
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Style for thumbnail buttons: no chrome, the photo is the button.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let border = match status {
        button::Status::Hovered | button::Status::Pressed => Border {
            color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..WHITE
            },
            width: 1.0,
            radius: radius::NONE.into(),
        },
        _ => Border::default(),
    };

    button::Style {
        background: None,
        text_color: WHITE,
        border,
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style for the logo button: plain text, no background, no border.
pub fn logo(theme: &Theme, _status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();
    button::Style {
        background: None,
        text_color: palette_ext.background.base.text,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
