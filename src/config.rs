// src/config.rs  -  Runtime configuration (CLI + TOML)
use anyhow::{Context, Result};
use clap::Parser;
use morse_table::suite::Expectations;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The example config is embedded directly in the binary at compile time.
/// Users can write it out with:  morse-table --write-config
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../config.toml.example");

// ── CLI ───────────────────────────────────────────────────────────────────────
#[derive(Parser, Debug, Default)]
#[command(
    name        = "morse-table",
    about       = "Morse code table: encode text, decode Morse, run the example suite",
    version,
)]
pub struct Cli {
    /// Config file path (default: ~/.config/morse-table/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Tab-separated reference table (default: morse.txt)
    #[arg(short, long)]
    pub table: Option<PathBuf>,

    /// Encode TEXT to Morse, print it and exit
    #[arg(long, value_name = "TEXT", conflicts_with = "decode")]
    pub encode: Option<String>,

    /// Decode a Morse transcription (3-space letter gap, 7-space word gap) and exit
    #[arg(long, value_name = "CODE")]
    pub decode: Option<String>,

    /// Write the built-in default config.toml to the config path and exit.
    /// Use --config <PATH> to write to a custom location.
    #[arg(long, action)]
    pub write_config: bool,

    /// Print the built-in default config.toml to stdout and exit
    #[arg(long, action)]
    pub print_config: bool,
}

// ── TOML file structure ───────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub general: Option<GeneralCfg>,
    pub suite:   Option<SuiteCfg>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralCfg {
    pub table: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteCfg {
    /// Expected size of the character → code map (uppercase aliases included)
    pub expected_chars: Option<usize>,
    /// Expected size of the code → character map
    pub expected_codes: Option<usize>,
}

// ── Resolved / merged config ──────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub table:  PathBuf,
    pub expect: Expectations,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            table:  PathBuf::from("morse.txt"),
            expect: Expectations::default(),
        }
    }
}

// ── Config loader ─────────────────────────────────────────────────────────────
impl AppConfig {
    /// Write the embedded default config to disk.
    /// Returns the path it was written to.
    pub fn write_default_config(cli: &Cli) -> Result<PathBuf> {
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Creating config directory {:?}", parent))?;
        }
        std::fs::write(&path, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("Writing config to {:?}", path))?;
        Ok(path)
    }

    pub fn load(cli: &Cli) -> Result<Self> {
        let mut cfg = Self::default();

        // 1. Load TOML file
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Reading config {:?}", path))?;
            let fc: FileConfig = toml::from_str(&raw)
                .with_context(|| format!("Parsing config {:?}", path))?;
            cfg.apply_file(&fc);
        } else {
            log::info!(
                "[config] no config file at {}, using defaults \
                 (run `morse-table --write-config` to create one)",
                path.display()
            );
        }

        // 2. Apply CLI overrides
        cfg.apply_cli(cli);
        Ok(cfg)
    }

    fn apply_file(&mut self, fc: &FileConfig) {
        if let Some(g) = &fc.general {
            if let Some(v) = &g.table { self.table = v.clone(); }
        }
        if let Some(s) = &fc.suite {
            if let Some(v) = s.expected_chars { self.expect.chars = v; }
            if let Some(v) = s.expected_codes { self.expect.codes = v; }
        }
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(v) = &cli.table { self.table = v.clone(); }
    }
}

fn default_config_path() -> PathBuf {
    dirs_next().join("morse-table").join("config.toml")
}

fn dirs_next() -> PathBuf {
    if let Ok(v) = std::env::var("XDG_CONFIG_HOME") { return PathBuf::from(v); }
    if let Ok(v) = std::env::var("APPDATA")          { return PathBuf::from(v); }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_default();
    PathBuf::from(home).join(".config")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_default_parses_to_defaults() {
        let fc: FileConfig = toml::from_str(DEFAULT_CONFIG_TOML).unwrap();
        let mut cfg = AppConfig::default();
        cfg.apply_file(&fc);
        assert_eq!(cfg.table, PathBuf::from("morse.txt"));
        assert_eq!(cfg.expect, Expectations::default());
    }

    #[test]
    fn cli_table_overrides_file() {
        let fc: FileConfig = toml::from_str(
            "[general]\ntable = \"from-file.txt\"\n[suite]\nexpected_codes = 40\n",
        ).unwrap();
        let cli = Cli { table: Some(PathBuf::from("from-cli.txt")), ..Default::default() };
        let mut cfg = AppConfig::default();
        cfg.apply_file(&fc);
        cfg.apply_cli(&cli);
        assert_eq!(cfg.table, PathBuf::from("from-cli.txt"));
        assert_eq!(cfg.expect.codes, 40);
        assert_eq!(cfg.expect.chars, 80);
    }

    #[test]
    fn load_and_write_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let cli = Cli { config: Some(path.clone()), ..Default::default() };
        assert_eq!(AppConfig::write_default_config(&cli).unwrap(), path);
        let cfg = AppConfig::load(&cli).unwrap();
        assert_eq!(cfg.table, PathBuf::from("morse.txt"));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli { config: Some(dir.path().join("absent.toml")), ..Default::default() };
        let cfg = AppConfig::load(&cli).unwrap();
        assert_eq!(cfg.table, PathBuf::from("morse.txt"));
        assert_eq!(cfg.expect, Expectations::default());
    }

    #[test]
    fn bad_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[suite]\nexpected_chars = \"many\"\n").unwrap();
        let cli = Cli { config: Some(path), ..Default::default() };
        assert!(AppConfig::load(&cli).is_err());
    }
}
