//! Handlers for the CLI commands.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs, ExportArgs};
use crate::export::{EnglishLabels, ExportFormat, FixedContacts, export_note};
use crate::infra::{read_note_document, write_atomic};

/// Handle the `export` command.
pub fn handle_export(args: &ExportArgs) -> Result<()> {
    let document = read_note_document(&args.note)
        .with_context(|| format!("failed to read note {}", args.note.display()))?;
    let format = ExportFormat::from(args.format);

    // The document is rendered into memory first; a file sink only ever
    // receives a complete document (written atomically).
    let mut buffer = Vec::new();
    export_note(
        &document.note,
        format,
        &EnglishLabels,
        &FixedContacts(document.contacts),
        &mut buffer,
    )?;

    match &args.output {
        Some(output_path) => {
            let is_dir = output_path.is_dir() || output_path.to_string_lossy().ends_with('/');

            let output_file = if is_dir {
                std::fs::create_dir_all(output_path)?;
                output_path.join(default_file_name(document.note.title(), format))
            } else {
                if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                output_path.clone()
            };

            write_atomic(&output_file, &buffer)?;
            println!(
                "Exported '{}' to {}",
                document.note.title().unwrap_or(""),
                output_file.display()
            );
        }
        None => {
            io::stdout().write_all(&buffer)?;
        }
    }

    Ok(())
}

/// Handle the `completions` command.
pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "jotter", &mut io::stdout());
    Ok(())
}

/// Default output file name: the note title plus the format extension,
/// with path separators made safe.
fn default_file_name(title: Option<&str>, format: ExportFormat) -> String {
    let base = title.unwrap_or("").trim();
    let base = if base.is_empty() { "note" } else { base };
    let base: String = base
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect();
    format!("{base}{}", format.extension())
}
