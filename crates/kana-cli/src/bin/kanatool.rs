use std::path::PathBuf;

use clap::{Parser, Subcommand};

use kana_cli::commands::simulate_ops::SimulateOptions;
use kana_cli::commands::{config_ops, lookup_ops, simulate_ops, transliterate_ops};

#[derive(Parser)]
#[command(name = "kanatool", about = "Kana composition engine diagnostics")]
struct Cli {
    /// Write JSON trace logs to this directory (requires --features trace)
    #[arg(long, global = true)]
    trace_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show hiragana and katakana forms of a key sequence
    Transliterate {
        /// Romaji or kana keys
        keys: String,
    },
    /// Query the dictionary service for a reading
    Lookup {
        /// Reading (hiragana)
        reading: String,
        /// Override the configured endpoint
        #[arg(long)]
        endpoint: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Run an event script through a composition session
    Simulate {
        /// Events, e.g. "nihon :cand=0 :commit"
        script: String,
        /// Initial field value
        #[arg(long, default_value = "")]
        value: String,
        /// Field length limit (characters)
        #[arg(long)]
        max_length: Option<usize>,
        /// Offline dictionary (JSON: reading -> candidates)
        #[arg(long)]
        dict: Option<String>,
        /// Lookup timeout in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
    },
    /// Export default romaji mappings as TOML
    RomajiExport,
    /// Validate a custom romaji TOML file
    RomajiValidate {
        /// Path to the TOML file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Some(dir) = &cli.trace_dir {
        kana_engine::init_tracing(dir);
    }

    match cli.command {
        Command::Transliterate { keys } => transliterate_ops::transliterate_cmd(&keys),
        Command::Lookup {
            reading,
            endpoint,
            json,
        } => lookup_ops::lookup_cmd(&reading, endpoint.as_deref(), json),
        Command::Simulate {
            script,
            value,
            max_length,
            dict,
            timeout_ms,
        } => {
            let opts = SimulateOptions {
                value: &value,
                max_length,
                dict: dict.as_deref(),
                timeout_ms,
            };
            simulate_ops::simulate_cmd(&script, &opts);
        }
        Command::RomajiExport => config_ops::romaji_export(),
        Command::RomajiValidate { file } => config_ops::romaji_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
