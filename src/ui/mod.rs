// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`home`] - Hero feature image shown before a category is selected
//! - [`gallery`] - Category thumbnail grid with eager/lazy decode scheduling
//! - [`lightbox`] - Full-screen overlay viewer with wrap-around navigation
//! - [`about`] - Photographer profile page
//!
//! # Shared Infrastructure
//!
//! - [`header`] - Site header with logo and category links
//! - [`state`] - Reusable state management (swipe tracking, header visibility)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod about;
pub mod design_tokens;
pub mod gallery;
pub mod header;
pub mod home;
pub mod icons;
pub mod lightbox;
pub mod state;
pub mod styles;
pub mod theming;
