// SPDX-License-Identifier: MPL-2.0
//! Portfolio definition: the static mapping from category names to ordered
//! image sequences, plus the `homepage` and `about` singleton images.
//!
//! The definition ships embedded in the binary and can be overridden with a
//! TOML file passed on the command line. It is consumed read-only; nothing
//! in the application mutates it after startup.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default portfolio definition compiled into the binary.
const EMBEDDED_PORTFOLIO: &str = include_str!("../assets/portfolio.toml");

/// A single image reference. `src` is a filesystem path, absolute or
/// relative to the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageSource {
    pub src: String,
}

/// One named category with its display-ordered image sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    /// Stable identifier, also used as the i18n key suffix for the menu label.
    pub name: String,
    pub images: Vec<ImageSource>,
}

/// The complete portfolio: ordered categories plus the two singletons.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub homepage: Option<ImageSource>,
    #[serde(default)]
    pub about: Option<ImageSource>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Portfolio {
    /// Parses the embedded default portfolio.
    ///
    /// # Panics
    ///
    /// Panics if the compiled-in TOML is malformed, which indicates a build
    /// packaging error.
    #[must_use]
    pub fn embedded() -> Self {
        toml::from_str(EMBEDDED_PORTFOLIO).expect("Failed to parse embedded portfolio definition.")
    }

    /// Loads a portfolio definition from an explicit file path.
    ///
    /// Unlike preference loading, a malformed file here is an error: the
    /// user asked for this specific portfolio and silently falling back to
    /// the embedded one would be misleading.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| Error::Portfolio(e.to_string()))
    }

    /// Looks up a category by name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Returns the image sequence for a category, or an empty slice when the
    /// category does not exist. Navigation over an empty slice is a no-op.
    #[must_use]
    pub fn sequence(&self, name: &str) -> &[ImageSource] {
        self.category(name).map_or(&[], |c| c.images.as_slice())
    }

    /// Category names in menu/display order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }
}
