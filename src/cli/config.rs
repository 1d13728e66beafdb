use std::collections::BTreeMap;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::document::writer::DEFAULT_OUTPUT;
use crate::suggest::suggestion::{SuggestionRule, default_rules};

pub const DEFAULT_CONFIG: &str = "datacontract-init.yaml";
pub const DEFAULT_VERSION_KEY: &str = "dataContractSpecification";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "datacontract-init",
    version,
    about = "Create a starter data contract from a versioned schema"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: datacontract-init.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prompt for required fields and write a new contract file
    Init {
        /// Schema version, resolved to schema-<version>.json
        #[arg(long)]
        spec_version: String,

        /// Output file (default: datacontract.yml)
        #[arg(short, long)]
        file: Option<String>,

        /// Directory holding schema files
        #[arg(long)]
        schema_dir: Option<String>,
    },

    /// List schema fields in prompt order
    Fields {
        /// Schema version, resolved to schema-<version>.json
        #[arg(long)]
        spec_version: String,

        /// Directory holding schema files
        #[arg(long)]
        schema_dir: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `datacontract-init.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub init: InitConfig,

    /// Identifier-specific suggestions, merged over the built-in ones
    #[serde(default)]
    pub suggestions: BTreeMap<String, SuggestionRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitConfig {
    #[serde(default = "default_schema_dir")]
    pub schema_dir: String,

    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_version_key")]
    pub version_key: String,
}

impl Default for InitConfig {
    fn default() -> Self {
        Self {
            schema_dir: default_schema_dir(),
            output: default_output(),
            version_key: default_version_key(),
        }
    }
}

// Serde default helpers
fn default_schema_dir() -> String { ".".to_string() }
fn default_output() -> String { DEFAULT_OUTPUT.to_string() }
fn default_version_key() -> String { DEFAULT_VERSION_KEY.to_string() }

impl AppConfig {
    /// Built-in suggestion rules with the configured ones layered on top.
    pub fn suggestion_rules(&self) -> BTreeMap<String, SuggestionRule> {
        let mut rules = default_rules();
        rules.extend(self.suggestions.clone());
        rules
    }
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG);
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = config_path, error = %e, "ignoring malformed config file");
            AppConfig::default()
        }),
        Err(e) => {
            tracing::debug!(path = config_path, error = %e, "no config file, using defaults");
            AppConfig::default()
        }
    }
}
