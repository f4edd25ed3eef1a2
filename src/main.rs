//! Deploy Editor CLI
//!
//! A command-line host for the SSH deploy form. It plays the part of the
//! editor session: it loads a record, mounts a form over it, feeds edits
//! through the pipeline and prints the resulting document and errors.
//!
//! ```text
//! deploy-editor new
//! deploy-editor check target.json
//! deploy-editor edit target.toml --set certPath=/srv/tls/site.crt --set command="nginx -s reload"
//! ```
//!
//! Output documents go to stdout as JSON; nothing is written back to disk.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use deploy_editor::config::{load_settings_or_default, EditorSettings};
use deploy_editor::deploy::{load_document, ConfigDocument, Field};
use deploy_editor::editor::{DeployForm, Snapshot};
use deploy_editor::i18n::Catalog;
use deploy_editor::observability::logging::init_logging;
use deploy_editor::validation::Schema;

#[derive(Parser)]
#[command(name = "deploy-editor")]
#[command(about = "Edit and validate SSH deploy target configurations", long_about = None)]
struct Cli {
    /// Editor settings file (TOML).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Message catalog (TOML), layered over the built-in English messages.
    #[arg(long)]
    messages: Option<PathBuf>,

    /// Log level; overrides the settings file.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a new record seeded with defaults
    New,
    /// Validate a stored record and list every violation
    Check {
        /// Record to check (.json or .toml)
        document: PathBuf,
    },
    /// Apply field edits to a stored record and print the result
    Edit {
        /// Record to edit (.json or .toml)
        document: PathBuf,

        /// Field assignment, applied in order
        #[arg(long = "set", value_name = "FIELD=VALUE")]
        edits: Vec<String>,
    },
}

fn main() -> Result<ExitCode, Box<dyn Error>> {
    let cli = Cli::parse();
    let settings = load_settings_or_default(cli.settings.as_deref())?;

    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(&settings.observability.log_level);
    init_logging(level)?;

    let catalog = load_catalog(&settings, cli.messages.as_deref())?;
    let schema = Schema::ssh_deploy(&catalog)?;

    match cli.command {
        Commands::New => {
            let mut form = DeployForm::new(schema);
            form.mount(&settings.defaults);
            print_snapshot(&form.snapshot())?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { document } => {
            let document = load_document(&document)?;
            match schema.check(&document) {
                Ok(()) => {
                    println!("ok");
                    Ok(ExitCode::SUCCESS)
                }
                Err(violations) => {
                    for violation in &violations {
                        println!("{violation}");
                    }
                    tracing::warn!(violations = violations.len(), "Document is invalid");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Edit { document, edits } => {
            let edits = edits
                .iter()
                .map(|edit| parse_assignment(edit))
                .collect::<Result<Vec<_>, _>>()?;
            let document = load_document(&document)?;

            let mut form = edit_form(schema, document, &settings);
            for (field, value) in &edits {
                form.edit(*field, value);
            }

            print_snapshot(&form.snapshot())?;
            Ok(if form.has_errors() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
    }
}

fn load_catalog(settings: &EditorSettings, cli_path: Option<&Path>) -> Result<Catalog, Box<dyn Error>> {
    let path = cli_path.or(settings.messages.catalog_path.as_deref());
    let catalog = match path {
        Some(path) => Catalog::english().merge(Catalog::load(path)?),
        None => Catalog::english(),
    };
    Ok(catalog)
}

fn edit_form(schema: Schema, document: ConfigDocument, settings: &EditorSettings) -> DeployForm {
    let mut form = DeployForm::with_document(schema, document)
        .validate_on_mount(settings.editor.validate_on_mount);
    form.mount(&settings.defaults);
    form
}

/// Split `field=value` into a known field and its raw value.
fn parse_assignment(input: &str) -> Result<(Field, String), Box<dyn Error>> {
    let (name, value) = input
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got {input:?}"))?;
    let field = name.trim().parse::<Field>()?;
    Ok((field, value.to_string()))
}

fn print_snapshot(snapshot: &Snapshot) -> Result<(), Box<dyn Error>> {
    let out = json!({
        "document": &*snapshot.document,
        "errors": &*snapshot.errors,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignment() {
        let (field, value) = parse_assignment("keyPath=  /a.key ").unwrap();
        assert_eq!(field, Field::KeyPath);
        assert_eq!(value, "  /a.key ");

        let (field, value) = parse_assignment("command=a=b").unwrap();
        assert_eq!(field, Field::Command);
        assert_eq!(value, "a=b");
    }

    #[test]
    fn test_parse_assignment_errors() {
        assert!(parse_assignment("certPath").is_err());
        assert!(parse_assignment("cert_path=/a").is_err());
    }
}
