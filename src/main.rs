// SPDX-License-Identifier: MPL-2.0
use fotofolio::app::{self, Flags};
use fotofolio::portfolio::Portfolio;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or(None);
    let portfolio_path: Option<String> = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    // An explicitly supplied portfolio file must parse; silently falling
    // back to the embedded one would be misleading.
    let portfolio = match portfolio_path {
        Some(path) => match Portfolio::load_from_path(&path) {
            Ok(portfolio) => portfolio,
            Err(error) => {
                eprintln!("failed to load portfolio {path}: {error}");
                std::process::exit(1);
            }
        },
        None => Portfolio::embedded(),
    };

    app::run(Flags { lang, portfolio })
}
