/*
 *  config.rs
 *
 *  inkprint - text straight onto the eInk framebuffer
 *  (c) 2020-26 Stuart Hunter
 *
 *  YAML configuration, layered under command line overrides
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use dirs_next::home_dir;
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};
use thiserror::Error;

use crate::constants::DEFAULT_FB_DEVICE;
use crate::display::refresh::WaveformMode;

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Effective configuration, every field optional so layers can merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub log_level: Option<String>,     // "info" | "debug" | ...
    /// framebuffer node
    pub device: Option<PathBuf>,
    /// waveform for ordinary (partial) updates
    pub waveform: Option<WaveformMode>,
    /// waveform for flashing (full) updates
    pub flash_waveform: Option<WaveformMode>,
}

impl Config {
    pub fn device_path(&self) -> PathBuf {
        self.device.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_FB_DEVICE))
    }

    pub fn waveform(&self) -> WaveformMode {
        self.waveform.unwrap_or(WaveformMode::Auto)
    }

    pub fn flash_waveform(&self) -> WaveformMode {
        self.flash_waveform.unwrap_or(WaveformMode::Gc16)
    }

    pub fn debug_enabled(&self) -> bool {
        matches!(self.log_level.as_deref(), Some("debug") | Some("trace"))
    }
}

/// Values given on the command line, highest precedence.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// explicit config file, replaces the search
    pub config: Option<PathBuf>,
    pub log_level: Option<String>,
    pub device: Option<PathBuf>,
    pub waveform: Option<WaveformMode>,
}

/// Read YAML, merge the command line over it, validate.
pub fn load(cli: &CliOverrides) -> Result<Config, ConfigError> {
    let mut cfg = Config::default();

    if let Some(p) = cli.config.as_ref() {
        if p.exists() {
            merge(&mut cfg, read_yaml(p)?);
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
    } else if let Some(p) = find_config_file() {
        merge(&mut cfg, read_yaml(&p)?);
    }

    apply_cli_overrides(&mut cfg, cli);
    validate(&cfg)?;
    Ok(cfg)
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    if let Some(home) = home_dir() {
        let p = home.join(".config/inkprint/config.yaml");
        if p.exists() { return Some(p) }
        let p = home.join(".config/inkprint.yaml");
        if p.exists() { return Some(p) }
    }
    let p = PathBuf::from("inkprint.yaml");
    if p.exists() { return Some(p) }
    None
}

pub fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    parse_yaml(&s)
}

pub fn parse_yaml(s: &str) -> Result<Config, ConfigError> {
    // an empty file is a valid, empty config
    if s.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(s)?)
}

/// Shallow merge `src` into `dst`, Option-by-Option.
fn merge(dst: &mut Config, src: Config) {
    if src.log_level.is_some()      { dst.log_level = src.log_level; }
    if src.device.is_some()         { dst.device = src.device; }
    if src.waveform.is_some()       { dst.waveform = src.waveform; }
    if src.flash_waveform.is_some() { dst.flash_waveform = src.flash_waveform; }
}

fn apply_cli_overrides(cfg: &mut Config, cli: &CliOverrides) {
    if cli.log_level.is_some() { cfg.log_level = cli.log_level.clone(); }
    if cli.device.is_some()    { cfg.device = cli.device.clone(); }
    if cli.waveform.is_some()  { cfg.waveform = cli.waveform; }
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if let Some(device) = cfg.device.as_ref() {
        if device.as_os_str().is_empty() {
            return Err(ConfigError::Validation("device must not be empty".into()));
        }
    }
    if let Some(level) = cfg.log_level.as_deref() {
        match level {
            "off" | "error" | "warn" | "info" | "debug" | "trace" => {}
            other => {
                return Err(ConfigError::Validation(format!(
                    "log_level must be off|error|warn|info|debug|trace, got '{}'",
                    other
                )))
            }
        }
    }
    Ok(())
}

/// Pretty YAML of the effective config
pub fn dump_config(cfg: &Config) -> Result<String, ConfigError> {
    Ok(serde_yaml::to_string(cfg)?)
}
