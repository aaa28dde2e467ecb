//! Hoverline - clickable-word hover underlining for terminal text views.
//!
//! # Usage
//!
//! ```bash
//! hoverline src/lib.rs
//! hoverline --watch notes.txt
//! hoverline --theme light --gutter 6 README.md
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use hoverline::app::App;
use hoverline::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use hoverline::theme::ThemeMode;

/// Underline the word under the mouse in a terminal file view
#[derive(Parser, Debug)]
#[command(name = "hoverline", version, about, long_about = None)]
struct Cli {
    /// File to view
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Watch the file for changes and auto-reload
    #[arg(short, long)]
    watch: bool,

    /// Color palette
    #[arg(long, value_enum, default_value = "auto")]
    theme: ThemeMode,

    /// Line-number gutter width in columns (0 disables the gutter)
    #[arg(long, value_name = "COLS")]
    gutter: Option<u16>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    if !cli.file.exists() {
        anyhow::bail!("File not found: {}", cli.file.display());
    }

    let app = App::new(cli.file)
        .with_watch(effective.watch)
        .with_theme(effective.theme.unwrap_or(ThemeMode::Auto))
        .with_gutter(effective.gutter.unwrap_or(5));

    app.run().context("Application error")
}
