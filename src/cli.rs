//! Command-line interface and command dispatch.
//!
//! One subcommand per transform; each reads the input document fully,
//! applies its pure transform, and writes the output file once. Errors
//! surface as a non-zero exit with a diagnostic naming the offending
//! section/setting.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use log::debug;

use crate::data::SchemaDocument;
use crate::{io, passes, render};

/// confbase - build-time config schema artifact generator
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available transforms.
#[derive(Subcommand)]
pub enum Commands {
    /// Inject explicit section/setting order lists into a schema document
    Enumerate(TransformArgs),
    /// Convert keyed sections/settings into ordered lists of records
    Flatten(TransformArgs),
    /// Generate a Go struct declaration mirroring the schema shape
    #[command(name = "struct")]
    Struct(StructArgs),
    /// Render an INI file with default values and description comments
    Ini(TransformArgs),
}

/// Input/output paths shared by every transform.
#[derive(Args)]
pub struct TransformArgs {
    /// Input schema document (json, yaml or toml)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file
    #[arg(short, long)]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct StructArgs {
    #[command(flatten)]
    pub paths: TransformArgs,

    /// Package name for the generated declaration
    #[arg(long, default_value = "main")]
    pub package: String,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Enumerate(args) => {
                let doc = passes::enumerate(load(&args.input)?);
                io::write_document(&args.output, &doc.as_json())?;
                report(&args.output);
            }
            Commands::Flatten(args) => {
                let flat = passes::flatten(load(&args.input)?);
                io::write_document(&args.output, &serde_json::to_value(&flat)?)?;
                report(&args.output);
            }
            Commands::Struct(args) => {
                let doc = load(&args.paths.input)?;
                io::write_text(
                    &args.paths.output,
                    &render::structgen::generate(&doc, &args.package),
                )?;
                report(&args.paths.output);
            }
            Commands::Ini(args) => {
                let doc = load(&args.input)?;
                io::write_text(&args.output, &render::ini::generate(&doc))?;
                report(&args.output);
            }
        }
        Ok(())
    }
}

fn load(path: &Path) -> Result<SchemaDocument> {
    let value = io::read_document(path)?;
    let doc = SchemaDocument::try_from(&value)?;
    debug!("loaded {} sections from {}", doc.sections.len(), path.display());
    Ok(doc)
}

fn report(path: &Path) {
    println!("{}", format!("wrote {}", path.display()).green().bold());
}
