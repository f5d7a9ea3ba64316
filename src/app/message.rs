// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::portfolio::Portfolio;
use crate::ui::about;
use crate::ui::gallery;
use crate::ui::header;
use crate::ui::lightbox;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Gallery(gallery::Message),
    Lightbox(lightbox::Message),
    About(about::Message),
    /// The hero feature image finished decoding at startup.
    HeroLoaded(Result<ImageData, Error>),
    /// The about profile portrait finished decoding at startup.
    PortraitLoaded(Result<ImageData, Error>),
    /// Periodic tick driving the deferred header visibility recomputation.
    FrameTick(Instant),
    /// A keyboard or touch event no widget claimed.
    RawEvent {
        window: iced::window::Id,
        event: iced::Event,
    },
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `it`, `en-US`).
    pub lang: Option<String>,
    /// The portfolio to present, resolved by the launcher (embedded default
    /// or an explicit file).
    pub portfolio: Portfolio,
}
