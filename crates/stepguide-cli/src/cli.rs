//! Command-line argument wrappers and one-shot command handling
//!
//! Argument structures carry clap derives and convert into the core
//! parameter types, so the core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Handlers
//! ```
//!
//! Step numbers and note positions are 1-based on the command line and
//! converted to 0-based indices here.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use log::info;
use stepguide_core::{
    display::{self, Notes, StepList, StepView, WelcomeView},
    handlers, navigation_state, AddNote, DeleteNote, EditNote, Guide, ImportNotes,
    OperationStatus, Position, Step, StepCollection, StepRef, StepSummary,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// List all discovered steps
#[derive(Args)]
pub struct StepsArgs {
    #[arg(long, help = "Print the steps as JSON")]
    pub json: bool,
}

/// Show a single step
///
/// Step 0 shows the welcome screen.
#[derive(Args)]
pub struct ShowArgs {
    #[arg(help = "Step number to show (1-based, 0 for the welcome screen)")]
    pub step: usize,
}

/// List the notes of a step
#[derive(Args)]
pub struct ListNotesArgs {
    #[arg(value_parser = step_number, help = "Step number (1-based)")]
    pub step: usize,
    #[arg(long, help = "Print the notes as JSON")]
    pub json: bool,
}

impl From<&ListNotesArgs> for StepRef {
    fn from(val: &ListNotesArgs) -> Self {
        StepRef {
            step_index: val.step - 1,
        }
    }
}

/// Add a note to a step
#[derive(Args)]
pub struct AddNoteArgs {
    #[arg(value_parser = step_number, help = "Step number (1-based)")]
    pub step: usize,
    #[arg(help = "Note text; surrounding whitespace is trimmed")]
    pub text: String,
}

impl From<AddNoteArgs> for AddNote {
    fn from(val: AddNoteArgs) -> Self {
        AddNote {
            step_index: val.step - 1,
            text: val.text,
        }
    }
}

/// Replace the text of a note
#[derive(Args)]
pub struct EditNoteArgs {
    #[arg(value_parser = step_number, help = "Step number (1-based)")]
    pub step: usize,
    #[arg(value_parser = step_number, help = "Note number as shown by `notes list`")]
    pub note: usize,
    #[arg(help = "New note text")]
    pub text: String,
}

impl From<EditNoteArgs> for EditNote {
    fn from(val: EditNoteArgs) -> Self {
        EditNote {
            step_index: val.step - 1,
            position: val.note - 1,
            text: val.text,
        }
    }
}

/// Delete a note
#[derive(Args)]
pub struct DeleteNoteArgs {
    #[arg(value_parser = step_number, help = "Step number (1-based)")]
    pub step: usize,
    #[arg(value_parser = step_number, help = "Note number as shown by `notes list`")]
    pub note: usize,
}

impl From<DeleteNoteArgs> for DeleteNote {
    fn from(val: DeleteNoteArgs) -> Self {
        DeleteNote {
            step_index: val.step - 1,
            position: val.note - 1,
        }
    }
}

/// Print the notes of a step in stored line format
#[derive(Args)]
pub struct ExportNotesArgs {
    #[arg(value_parser = step_number, help = "Step number (1-based)")]
    pub step: usize,
}

/// Replace the notes of a step with the lines of a file
#[derive(Args)]
pub struct ImportNotesArgs {
    #[arg(value_parser = step_number, help = "Step number (1-based)")]
    pub step: usize,
    #[arg(help = "File with one note per line, as written by `notes export`")]
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum NotesCommands {
    /// List the notes of a step
    #[command(alias = "l")]
    List(ListNotesArgs),
    /// Add a note to a step
    #[command(alias = "a")]
    Add(AddNoteArgs),
    /// Replace the text of a note
    #[command(alias = "e")]
    Edit(EditNoteArgs),
    /// Delete a note
    #[command(alias = "d")]
    Delete(DeleteNoteArgs),
    /// Print the notes of a step in stored line format
    Export(ExportNotesArgs),
    /// Replace the notes of a step with the lines of a file
    Import(ImportNotesArgs),
}

/// Parses a 1-based number, rejecting zero.
fn step_number(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("numbering starts at 1".to_string()),
        Ok(number) => Ok(number),
        Err(e) => Err(e.to_string()),
    }
}

/// Error status for a step whose image cannot be read right now.
fn image_status(collection: &StepCollection, step: &Step) -> Option<OperationStatus> {
    collection
        .load_image(step)
        .err()
        .map(|e| OperationStatus::from(&e))
}

// ============================================================================
// Command Handling
// ============================================================================

/// Runs one-shot commands against a guide and renders the results
pub struct Cli {
    guide: Guide,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(guide: Guide, renderer: TerminalRenderer) -> Self {
        Self { guide, renderer }
    }

    /// Show the welcome screen followed by the step overview.
    pub fn overview(&self) -> Result<()> {
        let collection = self.guide.steps();
        self.renderer.show(&WelcomeView {
            root: collection.root(),
            total: collection.len(),
        })?;
        if !collection.is_empty() {
            println!();
            self.renderer.show(&StepList(collection.steps()))?;
        }
        Ok(())
    }

    pub fn list_steps(&self, args: &StepsArgs) -> Result<()> {
        let collection = self.guide.steps();
        if args.json {
            let summaries: Vec<StepSummary> =
                collection.steps().iter().map(StepSummary::from).collect();
            println!("{}", display::to_json(&summaries)?);
            return Ok(());
        }
        if collection.is_empty() {
            return self.renderer.show(&WelcomeView {
                root: collection.root(),
                total: 0,
            });
        }
        self.renderer.show(&StepList(collection.steps()))
    }

    pub fn show_step(&self, args: &ShowArgs) -> Result<()> {
        if args.step == 0 {
            let collection = self.guide.steps();
            return self.renderer.show(&WelcomeView {
                root: collection.root(),
                total: collection.len(),
            });
        }

        let params = StepRef {
            step_index: args.step - 1,
        };
        let details = handlers::handle_show_step(&self.guide, &params)
            .with_context(|| format!("Failed to show step {}", args.step))?;
        self.renderer.show(&StepView {
            step: &details.step,
            description: &details.description,
            total: details.total,
            navigation: navigation_state(Position::Step(details.step.index), details.total),
        })?;
        if let Some(status) = image_status(&self.guide.steps(), &details.step) {
            self.renderer.status(&status)?;
        }
        Ok(())
    }

    pub fn handle_notes_command(&self, command: NotesCommands) -> Result<()> {
        match command {
            NotesCommands::List(args) => {
                let notes = handlers::handle_list_notes(&self.guide, &StepRef::from(&args))
                    .with_context(|| format!("Failed to list notes of step {}", args.step))?;
                if args.json {
                    println!("{}", display::to_json(&notes)?);
                    Ok(())
                } else {
                    self.renderer.render(&format!("## Notes for step {}\n\n", args.step))?;
                    self.renderer.show(&Notes(&notes))
                }
            }
            NotesCommands::Add(args) => {
                let change = handlers::handle_add_note(&self.guide, &args.into())
                    .context("Failed to add note")?;
                info!("Added note to step {}", change.step_number);
                self.renderer.show(&change)
            }
            NotesCommands::Edit(args) => {
                let change = handlers::handle_edit_note(&self.guide, &args.into())
                    .context("Failed to edit note")?;
                self.renderer.show(&change)
            }
            NotesCommands::Delete(args) => {
                let change = handlers::handle_delete_note(&self.guide, &args.into())
                    .context("Failed to delete note")?;
                self.renderer.show(&change)
            }
            NotesCommands::Export(args) => {
                let params = StepRef {
                    step_index: args.step - 1,
                };
                let text = handlers::handle_export_notes(&self.guide, &params)
                    .with_context(|| format!("Failed to export notes of step {}", args.step))?;
                if !text.is_empty() {
                    println!("{text}");
                }
                Ok(())
            }
            NotesCommands::Import(args) => {
                let text = fs::read_to_string(&args.file)
                    .with_context(|| format!("Failed to read {}", args.file.display()))?;
                let params = ImportNotes {
                    step_index: args.step - 1,
                    text,
                };
                let count = handlers::handle_import_notes(&self.guide, &params)
                    .context("Failed to import notes")?;
                self.renderer.status(&OperationStatus::success(format!(
                    "Imported {count} notes into step {}",
                    args.step
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use stepguide_core::GuideBuilder;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_image_status_reports_unreadable_image() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let image = temp_dir.path().join("a.png");
        fs::write(&image, b"fake image").expect("Failed to write image");
        let guide = GuideBuilder::new()
            .with_resources_dir(Some(temp_dir.path()))
            .build()
            .expect("Failed to create guide");
        let collection = guide.steps();
        let step = collection.steps()[0].clone();
        assert!(image_status(&collection, &step).is_none());

        fs::remove_file(&image).expect("Failed to remove image");
        fs::create_dir(&image).expect("Failed to create directory");
        let status = image_status(&collection, &step).expect("Expected an error status");
        assert!(!status.success);
        assert!(status.message.starts_with("Resource unavailable at"));
    }

    #[test]
    fn test_step_number_rejects_zero() {
        assert_eq!(step_number("3"), Ok(3));
        assert!(step_number("0").is_err());
        assert!(step_number("-1").is_err());
        assert!(step_number("x").is_err());
    }

    #[test]
    fn test_args_convert_to_zero_based_params() {
        let edit: EditNote = EditNoteArgs {
            step: 2,
            note: 1,
            text: "t".to_string(),
        }
        .into();
        assert_eq!(edit.step_index, 1);
        assert_eq!(edit.position, 0);

        let delete: DeleteNote = DeleteNoteArgs { step: 1, note: 4 }.into();
        assert_eq!(delete.step_index, 0);
        assert_eq!(delete.position, 3);
    }
}
