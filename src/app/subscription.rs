// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard and touch events no widget claimed are forwarded as raw events;
//! the update loop routes them to the lightbox only while it is open. The
//! frame subscription only runs while a header visibility recomputation is
//! pending, so idle scrolling costs nothing.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Forwards unclaimed keyboard and touch events to the update loop.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| match &event {
        iced::Event::Keyboard(..) | iced::Event::Touch(..) => match status {
            event::Status::Ignored => Some(Message::RawEvent {
                window: window_id,
                event: event.clone(),
            }),
            event::Status::Captured => None,
        },
        _ => None,
    })
}

/// Ticks at roughly one animation frame while a scroll report awaits its
/// visibility recomputation.
pub fn create_frame_subscription(frame_pending: bool) -> Subscription<Message> {
    if frame_pending {
        time::every(Duration::from_millis(16)).map(Message::FrameTick)
    } else {
        Subscription::none()
    }
}
