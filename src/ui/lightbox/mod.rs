// SPDX-License-Identifier: MPL-2.0
//! Full-screen lightbox overlay: one enlarged image with wrap-around
//! navigation, keyboard and swipe input, and generation-guarded fade
//! transitions.

pub mod component;
pub mod transition;

pub use component::{Message, State};
pub use transition::{Phase, Transition};
