// src/config.rs

use crate::error::{Error, Result};
use crate::model::{ArrowAnchor, ArrowStyle, Rgb, SpinAxis};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "output.vesta";

// --- Main Config Struct ---
// Defaults used by the command line when a flag is not given.

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
  #[serde(default = "Config::default_style")]
  pub style: ArrowStyle,

  #[serde(default = "Config::default_length_scale")]
  pub length_scale: f64,

  #[serde(default)]
  pub spin_axis: SpinAxis,

  #[serde(default = "Config::default_output")]
  pub output: PathBuf,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      style: Self::default_style(),
      length_scale: Self::default_length_scale(),
      spin_axis: SpinAxis::Z,
      output: Self::default_output(),
    }
  }
}

impl Config {
  // Command-line arrows are red unless configured otherwise
  fn default_style() -> ArrowStyle {
    ArrowStyle {
      color: Rgb::new(255, 0, 0),
      width_scale: 1.0,
      anchor: ArrowAnchor::Center,
    }
  }

  fn default_length_scale() -> f64 {
    1.0
  }

  fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
  }

  /// Loads config from standard OS location (e.g., ~/.config/vesta-vec/settings.json)
  pub fn load() -> (Self, String) {
    let path = Self::get_path();
    if path.exists() {
      match Self::load_from(&path) {
        Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
        Err(e) => (Self::default(), format!("Error reading config {:?}: {}", path, e)),
      }
    } else {
      (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      )
    }
  }

  /// Loads an explicitly named settings file. Unlike `load`, failures are errors.
  pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
      Error::config(format!("cannot open settings file {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
  }

  /// Saves config to standard OS location
  pub fn save(&self) -> String {
    let path = Self::get_path();
    match self.save_to(&path) {
      Ok(()) => format!("Config saved to {:?}", path),
      Err(e) => format!("Failed to save config: {}", e),
    }
  }

  pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)?;
      }
    }

    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, self)?;
    Ok(())
  }

  fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("org", "vesta-vec", "vesta-vec") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}
