//! Demonstration driver for the filament library. Reads optional settings
//! from `filament.json`, wires up tracing and walks a few showcase
//! pipelines, each ending in the print-like terminal action.

use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use filament::error::Result;
use filament::prelude::{
    add, concat, fold, length, mul, odd, puts, range_to, select, span, unwords, words,
};
use filament::unit::Unit;

#[derive(Debug, Deserialize)]
struct Settings {
    /// Tracing filter directive, e.g. "info" or "filament=debug".
    #[serde(default = "default_log")]
    log: String,
}

fn default_log() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self { log: default_log() }
    }
}

fn settings() -> Settings {
    config::Config::builder()
        .add_source(config::File::with_name("filament").required(false))
        .build()
        .ok()
        .and_then(|loaded| loaded.try_deserialize().ok())
        .unwrap_or_default()
}

fn main() -> Result<()> {
    let settings = settings();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&settings.log).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    info!(log = %settings.log, "filament demo starting");

    // how many odd numbers live below one hundred
    Unit::of(100)
        .chain(span())?
        .chain(select(odd()))?
        .chain(length())?
        .chain(puts())?;

    // the sum and the product of one through ten
    Unit::of(1)
        .chain(range_to(10))?
        .chain(fold(add()))?
        .chain(puts())?;
    Unit::of(1)
        .chain(range_to(10))?
        .chain(fold(mul()))?
        .chain(puts())?;

    // a tuple unit spreads into a binary op
    Unit::new([2, 3])?.chain(add())?.chain(puts())?;

    // strings round-trip through words and back
    Unit::of("functional pipelines in the small")
        .chain(words())?
        .chain(unwords())?
        .chain(puts())?;

    // folding texts together
    Unit::of(vec!["Hello ", "world"])
        .chain(concat())?
        .chain(puts())?;

    info!("filament demo done");
    Ok(())
}
