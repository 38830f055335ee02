//! Read file documents through the same services the HTTP API uses.

use clap::{Args, Subcommand};
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use fileshelf_api::AppState;
use fileshelf_core::config::AppConfig;
use fileshelf_core::error::AppError;
use fileshelf_entity::file::FileDocument;
use fileshelf_service::Credentials;

/// Arguments for file commands
#[derive(Debug, Args)]
pub struct FilesArgs {
    /// File subcommand
    #[command(subcommand)]
    pub command: FilesCommand,
}

/// File subcommands
#[derive(Debug, Subcommand)]
pub enum FilesCommand {
    /// Show one file document
    Get {
        /// File id (24 hex characters)
        id: String,
        /// Session token to act as
        #[arg(long)]
        token: Option<String>,
    },
    /// List one page of a folder's children
    List {
        /// Parent folder id, or 0 for the root
        #[arg(long)]
        parent: Option<String>,
        /// Zero-based page number
        #[arg(long)]
        page: Option<String>,
        /// Session token to act as
        #[arg(long)]
        token: Option<String>,
    },
}

/// One table row per file document
#[derive(Debug, Tabled)]
struct FileRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Public")]
    is_public: bool,
    #[tabled(rename = "Parent")]
    parent_id: String,
}

impl From<&FileDocument> for FileRow {
    fn from(doc: &FileDocument) -> Self {
        Self {
            id: doc.id.to_string(),
            name: doc.name.clone(),
            kind: doc.kind.to_string(),
            is_public: doc.is_public,
            parent_id: doc.parent_id.to_string(),
        }
    }
}

/// Execute file commands
pub async fn execute(
    args: &FilesArgs,
    config: AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let state = AppState::from_config(config).await?;

    let result = match &args.command {
        FilesCommand::Get { id, token } => {
            let credentials = Credentials {
                token: token.clone(),
            };
            state
                .file_access
                .get_one(&credentials, id)
                .await
                .map(|doc| print_document(&doc, format))
        }
        FilesCommand::List {
            parent,
            page,
            token,
        } => {
            let credentials = Credentials {
                token: token.clone(),
            };
            state
                .file_listing
                .list(&credentials, parent.as_deref(), page.as_deref())
                .await
                .map(|docs| print_documents(&docs, format))
        }
    };

    state.store.close().await;
    result
}

fn print_document(doc: &FileDocument, format: OutputFormat) {
    match format {
        OutputFormat::Json => output::print_json(doc),
        OutputFormat::Table => output::print_table(&[FileRow::from(doc)]),
    }
}

fn print_documents(docs: &[FileDocument], format: OutputFormat) {
    match format {
        OutputFormat::Json => output::print_json(docs),
        OutputFormat::Table => {
            let rows: Vec<FileRow> = docs.iter().map(FileRow::from).collect();
            output::print_table(&rows);
        }
    }
}
