use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use serde_yaml::Mapping;

use crate::cli::config::AppConfig;
use crate::collect::collector::{ValueMap, collect_required};
use crate::collect::prompt::Prompter;
use crate::document::builder::{build_document, ensure_root_entry};
use crate::document::writer::write_document;
use crate::error::InitError;
use crate::schema::loader::{FileSchemaSource, SchemaSource};
use crate::schema::schema_model::FlatField;
use crate::suggest::suggestion::SuggestionEngine;

/// Everything a single init run needs besides its I/O streams.
#[derive(Debug, Clone)]
pub struct InitRequest {
    pub spec_version: String,
    pub output: PathBuf,
    pub version_key: String,
}

// ============================================================================
// init subcommand
// ============================================================================

pub fn cmd_init(
    spec_version: &str,
    file: Option<&str>,
    schema_dir: Option<&str>,
    config: &AppConfig,
) -> Result<(), InitError> {
    let source = FileSchemaSource::new(schema_dir.unwrap_or(&config.init.schema_dir));
    let engine = SuggestionEngine::new(config.suggestion_rules());
    let request = InitRequest {
        spec_version: spec_version.to_string(),
        output: PathBuf::from(file.filter(|f| !f.is_empty()).unwrap_or(&config.init.output)),
        version_key: config.init.version_key.clone(),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    init_contract(&request, &source, &engine, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Resolve the schema, prompt for required fields, then write the document
/// and echo it to `output`. Nothing is written if prompting fails.
pub fn init_contract<R: BufRead, W: Write>(
    request: &InitRequest,
    source: &dyn SchemaSource,
    engine: &SuggestionEngine,
    input: R,
    output: W,
) -> Result<Mapping, InitError> {
    let schema = source.resolve(&request.spec_version)?;

    let mut values = ValueMap::new();
    values.insert(request.version_key.clone(), request.spec_version.clone());

    let sorted = schema.sorted();
    let fields = sorted.flattened();

    let mut prompter = Prompter::new(input, output);
    let prompted = collect_required(&fields, &mut values, engine, &mut prompter)?;
    tracing::info!(prompted, fields = fields.len(), "collected required fields");

    let document = ensure_root_entry(
        build_document(&values, &schema),
        &request.version_key,
        &request.spec_version,
    );

    let (_, mut echo) = prompter.into_inner();
    write_document(&document, &request.output, &mut echo)?;

    Ok(document)
}

// ============================================================================
// fields subcommand
// ============================================================================

pub fn cmd_fields(
    spec_version: &str,
    schema_dir: Option<&str>,
    config: &AppConfig,
) -> Result<(), InitError> {
    let dir = Path::new(schema_dir.unwrap_or(&config.init.schema_dir));
    let schema = FileSchemaSource::new(dir).resolve(spec_version)?.sorted();
    print!("{}", format_fields(&schema.flattened()));
    Ok(())
}

/// One line per field: identifier, type, and whether it is required.
pub fn format_fields(fields: &[FlatField<'_>]) -> String {
    let width = fields
        .iter()
        .map(|f| f.identifier.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for field in fields {
        let required = if field.field.required { "required" } else { "optional" };
        out.push_str(&format!(
            "{:<width$}  {:<8}  {}\n",
            field.identifier,
            field.field.field_type.name(),
            required,
            width = width
        ));
    }
    out
}
