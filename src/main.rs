mod term;

use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use panel_markup::config::PanelConfig;
use panel_markup::panel::OutputPanel;
use panel_markup::{format, format_error, format_test, logger};
use term::{cyan, dim, green, red_bold};

// ── CLI definition ──────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "panel-markup",
    about = "Render colored status messages as HTML paragraphs for GUI output panels",
    long_about = "panel-markup wraps status messages in <p> tags with an inline color \
                  style, ready to be appended to a rich-text output panel. Errors are \
                  red, test and success messages are green. Input is never escaped.",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output panel entries as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a message with an arbitrary color
    Message {
        text: String,
        /// Color value for the inline style (defaults to the configured color)
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Format an error message (red)
    Error { text: String },
    /// Format a test/success message (green)
    Test { text: String },
    /// Render tagged lines ("error: ...", "test: ...", "[color] ...") from a file or stdin
    Panel {
        /// Input file (reads stdin when omitted)
        file: Option<PathBuf>,
    },
    /// Manage panel-markup configuration
    Config {
        /// Show the current config
        #[arg(long)]
        show: bool,
        /// Reset config to defaults
        #[arg(long)]
        reset: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("  {} {:#}", red_bold("Error:"), e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let config = PanelConfig::load();
    tracing::debug!(default_color = %config.default_color, "config loaded");

    match cli.command {
        Commands::Message { text, color } => {
            let color = color.unwrap_or_else(|| config.default_color.clone());
            println!("{}", format(&text, &color));
            Ok(())
        }
        Commands::Error { text } => {
            println!("{}", format_error(&text));
            Ok(())
        }
        Commands::Test { text } => {
            println!("{}", format_test(&text));
            Ok(())
        }
        Commands::Panel { file } => cmd_panel(file.as_ref(), &config, cli.json),
        Commands::Config { show, reset } => cmd_config(&config, show, reset),
    }
}

// ── Commands ────────────────────────────────────────────────────────────────

/// Read tagged lines and print them as panel markup.
fn cmd_panel(file: Option<&PathBuf>, config: &PanelConfig, json: bool) -> Result<()> {
    let input = match file {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading panel input");
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => {
            tracing::debug!("reading panel input from stdin");
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let mut panel = OutputPanel::new();
    let added = panel.extend_from_lines(&input, &config.default_color);
    tracing::debug!(entries = added, "panel built");

    if json {
        let entries: Vec<serde_json::Value> = panel
            .entries()
            .iter()
            .map(|e| e.to_json(config.timestamps))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else if !panel.is_empty() {
        println!("{}", panel.to_html());
    }

    Ok(())
}

/// Show or reset the persisted configuration.
fn cmd_config(config: &PanelConfig, show: bool, reset: bool) -> Result<()> {
    if reset {
        PanelConfig::default().save()?;
        println!("  {} Config reset to defaults.", green("✓"));
        return Ok(());
    }

    if show {
        println!("{}", serde_json::to_string_pretty(config)?);
        return Ok(());
    }

    let location = match PanelConfig::config_path() {
        Some(path) if path.exists() => cyan(&path.display().to_string()),
        Some(path) => format!("{} {}", path.display(), dim("(not written yet)")),
        None => dim("no config directory on this platform"),
    };
    println!("  Config file:   {location}");
    println!("  Default color: {}", cyan(&config.default_color));
    println!("  Timestamps:    {}", cyan(&config.timestamps.to_string()));
    println!(
        "  {} Use {} or {} to manage.",
        dim("→"),
        green("--show"),
        green("--reset")
    );

    Ok(())
}
