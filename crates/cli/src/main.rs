//! CLI tool for generating intelligent speaker notes from presentation
//! outlines.

use anyhow::{Context, Result};
use clap::Parser;
use decknotes_core::{
    analyze_presentation_intelligence, format_presentation_notes, VerbosityLevel,
};
use std::fs;
use std::path::{Path, PathBuf};

/// Generate speaker notes from a presentation outline ("Slide N: ..." text).
#[derive(Parser, Debug)]
#[command(name = "decknotes")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Outline text file ("Slide N: ..." markers)
    outline: PathBuf,

    /// Visual-analysis text file (same "Slide N: ..." convention)
    #[arg(long)]
    visuals: Option<PathBuf>,

    /// Note density: Brief, Standard, or Detailed (unknown levels fall
    /// back to Standard)
    #[arg(long, default_value = "Standard")]
    verbosity: String,

    /// Emit the per-slide intelligence map as JSON instead of notes text
    #[arg(long)]
    json: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let output = run(&args)?;

    match &args.output {
        Some(path) => write_output(path, &output)?,
        None => print!("{}", output),
    }

    Ok(())
}

/// Analyze the inputs and render the requested output text.
fn run(args: &Args) -> Result<String> {
    let outline = fs::read_to_string(&args.outline)
        .with_context(|| format!("Failed to read outline {}", args.outline.display()))?;

    let visuals = match &args.visuals {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read visuals {}", path.display()))?,
        None => String::new(),
    };

    let intelligence = analyze_presentation_intelligence(&outline, &visuals);
    log::debug!("analyzed {} slides", intelligence.len());

    if intelligence.is_empty() {
        log::warn!(
            "no \"Slide N:\" markers found in {}",
            args.outline.display()
        );
    }

    if args.json {
        let json = serde_json::to_string_pretty(&intelligence)
            .context("Failed to serialize intelligence map")?;
        return Ok(format!("{}\n", json));
    }

    let verbosity = VerbosityLevel::from_label(&args.verbosity);
    let notes = format_presentation_notes(&intelligence, verbosity);

    if notes.is_empty() {
        Ok(notes)
    } else {
        Ok(format!("{}\n", notes))
    }
}

/// Write output to a file, creating parent directories as needed.
fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}
