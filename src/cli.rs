//! Command-line argument parsing for emojipass
//!
//! Supports:
//! - Rendering a value as the field would show it
//! - Password metrics for a study record
//! - Recall distance between a target and attempts
//! - Listing the emoji palette
//! - Replaying a scripted editing session

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::StudyConfig;
use crate::editable::EditorOptions;

/// Grapheme-aware masked password field
#[derive(Parser, Debug)]
#[command(name = "emojipass", version, about = "Grapheme-aware masked password field")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: CliCommand,

    /// Use the login field preset instead of registration
    #[arg(long, global = true)]
    pub login: bool,

    /// Mask symbol override for this run
    #[arg(long, global = true, value_name = "CHAR")]
    pub mask: Option<char>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Print TEXT as the field displays it
    Render {
        text: String,
        /// Show one mask symbol per grapheme
        #[arg(long)]
        masked: bool,
    },
    /// Strength and emoji statistics as survey JSON
    Metrics {
        password: String,
        /// Seconds spent creating the password
        #[arg(long, value_name = "SECS", default_value_t = 0.0)]
        creation_time: f64,
        /// Copy the JSON to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Grapheme edit distance from TARGET to each attempt
    Distance {
        target: String,
        #[arg(required = true, value_name = "ATTEMPT")]
        attempts: Vec<String>,
    },
    /// List palette categories
    Palette {
        /// Show recently picked symbols only
        #[arg(long)]
        recent: bool,
    },
    /// Replay an editing script (stdin when omitted)
    Session {
        #[arg(value_name = "SCRIPT")]
        script: Option<PathBuf>,
    },
}

/// Which field the run simulates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPreset {
    Registration,
    Login,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    pub command: CliCommand,
    pub preset: FieldPreset,
    pub mask: Option<char>,
}

impl CliArgs {
    /// Validate parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if let Some(mask) = self.mask {
            if mask.len_utf16() != 1 {
                return Err(format!("Mask symbol {:?} must be a single UTF-16 unit", mask));
            }
        }

        if let CliCommand::Metrics { creation_time, .. } = &self.command {
            if !creation_time.is_finite() || *creation_time < 0.0 {
                return Err(format!("Invalid creation time: {}", creation_time));
            }
        }

        Ok(StartupConfig {
            command: self.command,
            preset: if self.login {
                FieldPreset::Login
            } else {
                FieldPreset::Registration
            },
            mask: self.mask,
        })
    }
}

impl StartupConfig {
    /// Editor options for the simulated field, layering config and flags
    pub fn editor_options(&self, config: &StudyConfig) -> EditorOptions {
        let preset = match self.preset {
            FieldPreset::Registration => EditorOptions::registration(),
            FieldPreset::Login => EditorOptions::login(),
        };
        let mut options = config.editor_options(preset);
        if let Some(mask) = self.mask {
            options.mask_symbol = mask;
        }
        options
    }
}
