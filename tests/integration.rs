// SPDX-License-Identifier: MPL-2.0
use fotofolio::config::{self, Config};
use fotofolio::i18n::fluent::I18n;
use fotofolio::navigation::SequenceNavigator;
use fotofolio::portfolio::{ImageSource, Portfolio};
use fotofolio::ui::theming::ThemeMode;
use tempfile::tempdir;

fn sources(names: &[&str]) -> Vec<ImageSource> {
    names
        .iter()
        .map(|n| ImageSource {
            src: (*n).to_string(),
        })
        .collect()
}

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: ThemeMode::System,
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    // Load i18n with initial config
    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to it
    let italian_config = Config {
        language: Some("it".to_string()),
        theme_mode: ThemeMode::System,
    };
    config::save_to_path(&italian_config, &temp_config_file_path)
        .expect("Failed to write italian config file");

    // Load i18n with italian config
    let loaded_italian_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load italian config from path");
    let i18n_it = I18n::new(None, &loaded_italian_config);
    assert_eq!(i18n_it.current_locale().to_string(), "it");

    // Clean up temporary directory
    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_category_labels_are_localized() {
    let mut i18n = I18n::default();

    i18n.set_locale("en-US".parse().unwrap());
    assert_eq!(i18n.tr("category-paesaggio"), "Landscapes");

    i18n.set_locale("it".parse().unwrap());
    assert_eq!(i18n.tr("category-paesaggio"), "Paesaggio");
}

#[test]
fn test_portfolio_file_drives_navigation_context() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let portfolio_path = dir.path().join("portfolio.toml");
    std::fs::write(
        &portfolio_path,
        r#"
        homepage = { src = "images/home.jpg" }

        [[categories]]
        name = "ritratti"
        images = [
            { src = "images/a.jpg" },
            { src = "images/b.jpg" },
            { src = "images/c.jpg" },
        ]
        "#,
    )
    .expect("Failed to write portfolio file");

    let portfolio =
        Portfolio::load_from_path(&portfolio_path).expect("Failed to load portfolio file");

    let mut navigator = SequenceNavigator::new();
    navigator.seed("ritratti", portfolio.sequence("ritratti").to_vec(), 0);

    // Example from the gallery contract: open index 0, next twice lands on
    // the third image, one more wraps back to the first.
    navigator.navigate_next();
    navigator.navigate_next();
    assert_eq!(
        navigator.current().map(|s| s.src.as_str()),
        Some("images/c.jpg")
    );
    navigator.navigate_next();
    assert_eq!(
        navigator.current().map(|s| s.src.as_str()),
        Some("images/a.jpg")
    );
}

#[test]
fn test_wrap_invariant_for_all_categories() {
    let portfolio = Portfolio::embedded();

    for category in &portfolio.categories {
        let length = category.images.len();
        if length == 0 {
            continue;
        }

        let start = length / 2;
        let mut navigator = SequenceNavigator::new();
        navigator.seed(&category.name, category.images.clone(), start);

        for _ in 0..length {
            navigator.navigate_next();
        }
        assert_eq!(
            navigator.current_index(),
            Some(start),
            "category {} broke the wrap invariant",
            category.name
        );
    }
}

#[test]
fn test_empty_sequence_navigation_never_panics() {
    let mut navigator = SequenceNavigator::new();
    navigator.seed("missing", sources(&[]), 0);

    assert!(navigator.navigate_next().is_none());
    assert!(navigator.navigate_previous().is_none());
    assert!(navigator.peek_next().is_none());
    assert!(navigator.peek_previous().is_none());
}
