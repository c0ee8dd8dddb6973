use crate::scaler::DEFAULT_PADDING_FRACTION;
use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Everything the generator needs, resolved from defaults, an optional
/// `iconpad.yaml` and command line overrides, in that order.
#[derive(Clone, Debug)]
pub struct Config {
    pub icon: PathBuf,
    pub output_dir: PathBuf,
    pub padding_fraction: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icon: "icon.png".into(),
            output_dir: "AppIcon.appiconset".into(),
            padding_fraction: DEFAULT_PADDING_FRACTION,
        }
    }
}

impl Config {
    pub fn parse<P: AsRef<Path>>(path: P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Ok(Default::default());
        }
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: RawConfig = serde_yaml::from_str(&contents)?;
        let default = Config::default();
        Ok(Self {
            icon: config.icon.unwrap_or(default.icon),
            output_dir: config.output.unwrap_or(default.output_dir),
            padding_fraction: config.padding.unwrap_or(default.padding_fraction),
        })
    }
}

#[derive(Deserialize)]
struct RawConfig {
    icon: Option<PathBuf>,
    output: Option<PathBuf>,
    padding: Option<f32>,
}
