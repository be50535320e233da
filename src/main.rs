// src/main.rs  -  morse-table  entry point
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use config::{AppConfig, Cli};
use morse_table::{decode, encode, suite, MorseTable};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // ── --print-config  ───────────────────────────────────────────────────────
    if cli.print_config {
        print!("{}", config::DEFAULT_CONFIG_TOML);
        return Ok(());
    }

    // ── --write-config  ───────────────────────────────────────────────────────
    if cli.write_config {
        let path = AppConfig::write_default_config(&cli)?;
        println!("Config written to: {}", path.display());
        return Ok(());
    }

    // ── Load config + table ───────────────────────────────────────────────────
    let cfg = AppConfig::load(&cli)?;
    let table = MorseTable::from_path(&cfg.table)
        .with_context(|| format!("Loading reference table {}", cfg.table.display()))?;

    // ── --encode / --decode  ──────────────────────────────────────────────────
    if let Some(text) = &cli.encode {
        let code = encode(text, &table)
            .with_context(|| format!("Encoding {text:?}"))?;
        println!("{code}");
        return Ok(());
    }
    if let Some(code) = &cli.decode {
        println!("{}", decode(code, &table));
        return Ok(());
    }

    // ── Example suite  ────────────────────────────────────────────────────────
    let report = suite::run(&table, &cfg.expect);
    for line in &report.passed   { println!("{line}"); }
    for line in &report.failures { println!("{line}"); }
    if !report.is_ok() {
        log::warn!("{} example check(s) failed", report.failures.len());
        std::process::exit(1);
    }
    Ok(())
}
