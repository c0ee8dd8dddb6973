use crate::config::Config;
use crate::scaler::Scaler;
use anyhow::Result;
use console::style;

pub mod config;
pub mod iconset;
pub mod scaler;
mod task;

/// Renders the full icon set described by `config`.
///
/// A missing source image is not an error: a notice is printed and nothing
/// is written. Everything else propagates and aborts the remaining entries.
pub fn generate(config: &Config, verbose: bool) -> Result<()> {
    if !config.icon.exists() {
        println!("source icon not found: {}", config.icon.display());
        return Ok(());
    }
    println!("creating padded icons from {}", config.icon.display());
    println!("padding: {}% on each side", config.padding_fraction * 100.0);
    let scaler = Scaler::open(&config.icon)?;
    iconset::write_iconset(&scaler, &config.output_dir, config.padding_fraction, verbose)?;
    println!(
        "{} icon set written to {}",
        style("[DONE]").green(),
        config.output_dir.display()
    );
    Ok(())
}
