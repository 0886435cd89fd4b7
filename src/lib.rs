//! Jointlabel: keypoint, tag, and bounding-box labeling for object images.
//!
//! This crate is the headless core of an image labeling tool. It owns the
//! per-image label documents, their sidecar `.label` files, the
//! confirm/drag editing state machines, and sequential navigation with
//! autosave. A display front-end drives it with [`editor::Command`] values
//! and paints the primitives from [`render::render_overlay`]; nothing in
//! here touches a screen.
//!
//! # Modules
//!
//! - [`config`]: joint/tag/color vocabularies, read once at startup
//! - [`label`]: the document model and the sidecar codec
//! - [`editor`]: joint, tag, and bounding-box editing state
//! - [`session`]: directory navigation and autosave
//! - [`render`]: overlay draw primitives for a front-end
//! - [`validation`]: sidecar checks against the configuration
//! - [`error`]: error types for jointlabel operations

pub mod config;
pub mod editor;
pub mod error;
pub mod label;
pub mod render;
pub mod session;
pub mod validation;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
pub use error::JointlabelError;

/// The jointlabel CLI application.
#[derive(Parser)]
#[command(name = "jointlabel")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print the label sidecar for an image.
    Show(ShowArgs),

    /// Validate label sidecars against the config vocabularies.
    Validate(ValidateArgs),
}

/// Arguments for the show subcommand.
#[derive(clap::Args)]
struct ShowArgs {
    /// Image file whose sidecar to print.
    image: PathBuf,
}

/// Arguments for the validate subcommand.
#[derive(clap::Args)]
struct ValidateArgs {
    /// An image file, or a directory of images.
    path: PathBuf,

    /// Directory holding JointNames.txt, TagNames.txt, and
    /// JointDotColors.txt.
    #[arg(long, default_value = ".")]
    config_dir: PathBuf,

    /// Treat warnings as errors (exit non-zero if any warnings).
    #[arg(long)]
    strict: bool,
}

/// Run the jointlabel CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), JointlabelError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Show(args)) => run_show(args),
        Some(Commands::Validate(args)) => run_validate(args),
        None => {
            println!("jointlabel {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Keypoint, tag, and bounding-box labeling for object images.");
            println!();
            println!("Run 'jointlabel --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the show subcommand.
fn run_show(args: ShowArgs) -> Result<(), JointlabelError> {
    let Some(doc) = label::read_label(&args.image)? else {
        println!("No label file for {}", args.image.display());
        return Ok(());
    };

    println!("{}", label::label_path(&args.image).display());

    println!("Joints:");
    if doc.joints().is_empty() {
        println!("  (none)");
    }
    for joint in doc.joints() {
        println!("  {}: ({}, {})", joint.name, joint.x, joint.y);
    }

    println!("Tags:");
    if doc.tags().is_empty() {
        println!("  (none)");
    }
    for (name, value) in doc.tags() {
        println!("  {name}: {value}");
    }

    match doc.bounding_box() {
        Some(b) => println!("Bounding box: ({}, {})-({}, {})", b.x1, b.y1, b.x2, b.y2),
        None => println!("Bounding box: (none)"),
    }

    Ok(())
}

/// Execute the validate subcommand.
fn run_validate(args: ValidateArgs) -> Result<(), JointlabelError> {
    // Config problems are fatal before any sidecar is looked at.
    let config = Config::load(&args.config_dir)?;

    let report = validation::validate_path(&config, &args.path)?;
    print!("{}", report);

    let has_errors = report.error_count() > 0;
    let has_warnings = report.warning_count() > 0;

    if has_errors || (args.strict && has_warnings) {
        Err(JointlabelError::ValidationFailed {
            error_count: report.error_count(),
            warning_count: report.warning_count(),
        })
    } else {
        Ok(())
    }
}
