//! Preset management commands.
//!
//! Lists factory and user presets, shows one in detail, and saves a copy
//! to disk for editing.

use anyhow::Context;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use wavebuilder_config::{
    Preset, ValidationError, ensure_user_presets_dir, factory_presets, list_user_presets,
    preset_name_from_path, user_preset_path, user_presets_dir, validate_preset,
};

use super::common::{TableArgs, print_summary, resolve_preset};

#[derive(Args)]
pub struct PresetsArgs {
    #[command(subcommand)]
    command: PresetsCommand,
}

#[derive(Subcommand)]
enum PresetsCommand {
    /// List available presets (factory and user)
    List {
        /// Show only factory presets
        #[arg(long)]
        factory: bool,

        /// Show only user presets
        #[arg(long)]
        user: bool,
    },

    /// Show a preset, its validation status and the table it builds
    Show {
        /// Preset name or path
        name: String,
    },

    /// Save a preset, optionally with overrides, to a file
    Save {
        /// Preset to start from (name or path)
        name: String,

        /// Destination file (defaults to the user presets directory)
        path: Option<PathBuf>,

        #[command(flatten)]
        table: TableArgs,

        /// Description for the saved preset
        #[arg(short, long)]
        description: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show where user presets are stored
    Paths,
}

pub fn run(args: PresetsArgs) -> anyhow::Result<()> {
    match args.command {
        PresetsCommand::List { factory, user } => {
            list_presets(factory, user);
            Ok(())
        }
        PresetsCommand::Show { name } => show_preset(&name),
        PresetsCommand::Save {
            name,
            path,
            table,
            description,
            force,
        } => save_preset(&name, path, &table, description, force),
        PresetsCommand::Paths => {
            println!("User presets: {}", user_presets_dir().display());
            Ok(())
        }
    }
}

fn list_presets(factory_only: bool, user_only: bool) {
    if !user_only {
        println!("Factory Presets:");
        println!("================");
        for preset in factory_presets() {
            let desc = preset.description.as_deref().unwrap_or("");
            println!("  {:12} - {}", preset.name, desc);
        }
        println!();
    }

    if !factory_only {
        println!("User Presets:");
        println!("=============");
        let user_presets = list_user_presets();
        if user_presets.is_empty() {
            println!("  (none)");
            println!();
            println!("  Create one with: wavebuilder presets save <name> [path]");
        }
        for path in user_presets {
            let name = preset_name_from_path(&path).unwrap_or_else(|| "unknown".into());
            match Preset::load(&path) {
                Ok(preset) => {
                    let desc = preset.description.as_deref().unwrap_or("");
                    println!("  {name:12} - {desc}");
                }
                Err(e) => println!("  {name:12} - (error loading: {e})"),
            }
        }
        println!();
    }
}

fn show_preset(name: &str) -> anyhow::Result<()> {
    let preset = resolve_preset(name)?;

    println!("Preset: {}", preset.name);
    println!("{}", "=".repeat(8 + preset.name.len()));
    if let Some(desc) = &preset.description {
        println!("{desc}");
    }
    println!();

    match validate_preset(&preset) {
        Ok(()) => {
            let builder = preset.build()?;
            print_summary(&builder);
        }
        Err(err) => {
            println!("Oscillators as written:");
            for (i, osc) in preset.oscillators.iter().enumerate() {
                println!("  {}. {osc}", i + 1);
            }
            println!();
            println!("Problems:");
            for problem in flatten(err) {
                println!("  - {problem}");
            }
        }
    }
    Ok(())
}

fn save_preset(
    name: &str,
    path: Option<PathBuf>,
    table: &TableArgs,
    description: Option<String>,
    force: bool,
) -> anyhow::Result<()> {
    let mut preset = resolve_preset(name)?;
    table.apply(&mut preset);
    if description.is_some() {
        preset.description = description;
    }

    validate_preset(&preset).with_context(|| format!("refusing to save '{}'", preset.name))?;

    let path = match path {
        Some(path) => path,
        None => {
            ensure_user_presets_dir()?;
            user_preset_path(&file_stem_for(&preset.name))
        }
    };

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists; use --force to overwrite",
            path.display()
        );
    }

    preset.save(&path)?;
    println!("Saved '{}' to {}", preset.name, path.display());
    Ok(())
}

fn flatten(err: ValidationError) -> Vec<ValidationError> {
    match err {
        ValidationError::Multiple(errors) => errors.into_iter().flat_map(flatten).collect(),
        other => vec![other],
    }
}

fn file_stem_for(name: &str) -> String {
    name.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}
