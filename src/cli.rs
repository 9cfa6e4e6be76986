use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::SchemaType;
use crate::mapper::RecipeRowBinding;

/// ldforge - schema.org JSON-LD generator for structured-data forms
#[derive(Parser, Debug, Clone)]
#[command(name = "ldforge", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, env = "LDFORGE_CONFIG", default_value = "ldforge.toml", global = true)]
    pub config: PathBuf,

    /// Refuse to generate from forms with missing or malformed fields
    #[arg(long, env = "LDFORGE_STRICT", global = true)]
    pub strict: bool,

    /// Rows read for recipe ingredients and instructions (legacy, direct)
    #[arg(long, env = "LDFORGE_RECIPE_BINDING", global = true)]
    pub recipe_binding: Option<RecipeRowBinding>,

    /// Preview refresh delay after the last edit, in milliseconds
    #[arg(long, env = "LDFORGE_DEBOUNCE_MS", global = true)]
    pub debounce_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate the JSON-LD script block for a form file
    Generate {
        /// Form file (.json, .yaml, .yml or .toml)
        file: PathBuf,

        /// Schema type to generate instead of the one saved in the form
        #[arg(short = 't', long = "type")]
        schema_type: Option<SchemaType>,

        /// Export the script to this file instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print bare JSON without the script tag
        #[arg(long)]
        json: bool,
    },

    /// Check a form file and list missing or malformed fields
    Validate {
        file: PathBuf,

        #[arg(short = 't', long = "type")]
        schema_type: Option<SchemaType>,
    },

    /// Generate a script file for every form file in a directory
    Batch {
        dir: PathBuf,

        #[arg(long)]
        out_dir: PathBuf,
    },

    /// List the supported schema types
    Types,
}
