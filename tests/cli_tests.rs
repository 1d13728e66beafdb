mod common;

use clap::Parser;
use common::utils::fixtures_dir;
use datacontract_init::cli::commands::format_fields;
use datacontract_init::cli::config::{
    AppConfig, Cli, Commands, DEFAULT_VERSION_KEY, InitConfig, load_config,
};
use datacontract_init::schema::loader::{FileSchemaSource, SchemaSource};
use datacontract_init::suggest::suggestion::SuggestionRule;

// ============================================================================
// CLI Argument Parsing Tests
// ============================================================================

#[test]
fn cli_parse_init_minimal() {
    let cli = Cli::parse_from(["datacontract-init", "init", "--spec-version", "0.9.3"]);
    match cli.command {
        Commands::Init {
            spec_version,
            file,
            schema_dir,
        } => {
            assert_eq!(spec_version, "0.9.3");
            assert!(file.is_none());
            assert!(schema_dir.is_none());
        }
        _ => panic!("Expected Init command"),
    }
    assert_eq!(cli.verbose, 0);
    assert!(cli.config.is_none());
}

#[test]
fn cli_parse_init_all_args() {
    let cli = Cli::parse_from([
        "datacontract-init",
        "-vv",
        "--config",
        "custom.yaml",
        "init",
        "--spec-version",
        "0.9.2",
        "-f",
        "orders.yaml",
        "--schema-dir",
        "schemas",
    ]);
    match cli.command {
        Commands::Init {
            spec_version,
            file,
            schema_dir,
        } => {
            assert_eq!(spec_version, "0.9.2");
            assert_eq!(file, Some("orders.yaml".to_string()));
            assert_eq!(schema_dir, Some("schemas".to_string()));
        }
        _ => panic!("Expected Init command"),
    }
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.config, Some("custom.yaml".to_string()));
}

#[test]
fn cli_parse_fields() {
    let cli = Cli::parse_from(["datacontract-init", "fields", "--spec-version", "0.9.3", "-v"]);
    match cli.command {
        Commands::Fields {
            spec_version,
            schema_dir,
        } => {
            assert_eq!(spec_version, "0.9.3");
            assert!(schema_dir.is_none());
        }
        _ => panic!("Expected Fields command"),
    }
    assert_eq!(cli.verbose, 1, "verbose is global");
}

#[test]
fn cli_requires_spec_version() {
    let result = Cli::try_parse_from(["datacontract-init", "init"]);
    assert!(result.is_err());
}

// ============================================================================
// Config File Tests
// ============================================================================

#[test]
fn config_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.init.schema_dir, ".");
    assert_eq!(config.init.output, "datacontract.yml");
    assert_eq!(config.init.version_key, DEFAULT_VERSION_KEY);
    assert!(config.suggestions.is_empty());
}

#[test]
fn config_missing_file_returns_defaults() {
    let config = load_config(Some("/nonexistent/datacontract-init.yaml"));
    assert_eq!(config.init.output, "datacontract.yml");
}

#[test]
fn config_malformed_file_returns_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    std::fs::write(&path, "init: [this is: not, a mapping").unwrap();

    let config = load_config(path.to_str());
    assert_eq!(config.init.schema_dir, ".");
}

#[test]
fn config_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("datacontract-init.yaml");
    std::fs::write(
        &path,
        "init:\n  schema_dir: schemas\nsuggestions:\n  info.owner: { kind: literal, value: data-team }\n",
    )
    .unwrap();

    let config = load_config(path.to_str());
    assert_eq!(config.init.schema_dir, "schemas");
    assert_eq!(config.init.output, "datacontract.yml");
    assert_eq!(config.init.version_key, DEFAULT_VERSION_KEY);
    assert_eq!(
        config.suggestions["info.owner"],
        SuggestionRule::Literal {
            value: "data-team".into()
        }
    );
}

#[test]
fn config_roundtrip() {
    let mut config = AppConfig {
        init: InitConfig {
            schema_dir: "schemas".into(),
            output: "contract.yaml".into(),
            version_key: "specVersion".into(),
        },
        ..AppConfig::default()
    };
    config.suggestions.insert("info.created".into(), SuggestionRule::Today);

    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed: AppConfig = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(parsed.init.output, "contract.yaml");
    assert_eq!(parsed.init.version_key, "specVersion");
    assert_eq!(parsed.suggestions["info.created"], SuggestionRule::Today);
}

#[test]
fn suggestion_rules_layer_config_over_defaults() {
    let mut config = AppConfig::default();
    assert_eq!(config.suggestion_rules()["info.id"], SuggestionRule::Uuid);

    config.suggestions.insert(
        "info.id".into(),
        SuggestionRule::Literal {
            value: "orders".into(),
        },
    );
    config.suggestions.insert("info.created".into(), SuggestionRule::Today);

    let rules = config.suggestion_rules();
    assert_eq!(rules.len(), 2);
    assert_eq!(
        rules["info.id"],
        SuggestionRule::Literal {
            value: "orders".into()
        }
    );
}

// ============================================================================
// fields listing
// ============================================================================

#[test]
fn format_fields_lists_prompt_order() {
    let schema = FileSchemaSource::new(fixtures_dir())
        .resolve("0.9.3")
        .unwrap()
        .sorted();
    let listing = format_fields(&schema.flattened());
    let lines: Vec<&str> = listing.lines().collect();

    assert_eq!(lines.len(), 16);
    assert!(lines[0].starts_with("dataContractSpecification"));
    assert!(lines[0].ends_with("required"));
    assert!(lines[2].starts_with("info.created"));
    assert!(lines[2].contains("date"));
    assert!(lines.last().unwrap().starts_with("tags"));
    assert!(lines.last().unwrap().contains("array"));
    assert!(lines.last().unwrap().ends_with("optional"));
}

#[test]
fn format_fields_empty() {
    assert_eq!(format_fields(&[]), "");
}
