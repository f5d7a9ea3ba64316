// SPDX-License-Identifier: MPL-2.0
//! Gallery grid component: populates the thumbnail grid for a category.

pub mod component;

pub use component::{Effect, Message, State};
