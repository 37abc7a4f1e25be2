//! Interactive step browser
//!
//! Reads one command per line and re-renders after every action. The
//! session starts on the welcome screen and ends on `quit` or end of input.

use std::{
    io::{self, BufRead, Write},
    str::FromStr,
};

use anyhow::Result;
use log::debug;
use stepguide_core::{
    display::{NoteChange, NoteChangeKind, Notes, StepView, WelcomeView},
    Guide, GuideError, Note, NotesStore, OperationStatus, StepCollection,
};

use crate::renderer::TerminalRenderer;

const HELP: &str = "\
## Commands

- `n`, `next`: next step
- `p`, `prev`: previous step
- `g N`, `goto N`: jump to step N
- `home`: back to the welcome screen
- `notes`: list notes of the current step
- `add TEXT`: add a note
- `edit K TEXT`: replace note K
- `delete K`: delete note K
- `help`: show this help
- `q`, `quit`: leave
";

/// One parsed line of browser input.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Next,
    Prev,
    GoTo(usize),
    Home,
    ListNotes,
    AddNote(String),
    EditNote(usize, String),
    DeleteNote(usize),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "n" | "next" => Ok(Command::Next),
            "p" | "prev" | "back" => Ok(Command::Prev),
            "g" | "goto" => parse_number(rest).map(Command::GoTo),
            "home" => Ok(Command::Home),
            "notes" => Ok(Command::ListNotes),
            "add" => Ok(Command::AddNote(rest.to_string())),
            "edit" => {
                let (number, text) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Ok(Command::EditNote(parse_number(number)?, text.to_string()))
            }
            "delete" | "del" => parse_number(rest).map(Command::DeleteNote),
            "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            _ => Err(format!("Unknown command: {word}. Type `help` for a list.")),
        }
    }
}

fn parse_number(value: &str) -> Result<usize, String> {
    match value.trim().parse::<usize>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(format!("Expected a number starting at 1, got '{value}'")),
    }
}

/// Interactive session over one discovery pass of a guide.
pub struct Browser {
    guide: Guide,
    collection: StepCollection,
    renderer: TerminalRenderer,
}

impl Browser {
    pub fn new(guide: Guide, renderer: TerminalRenderer) -> Self {
        let collection = guide.steps();
        Self {
            guide,
            collection,
            renderer,
        }
    }

    /// Runs the session until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead) -> Result<()> {
        self.render_current()?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(message) => self.renderer.status(&OperationStatus::failure(message))?,
            }
            io::stdout().flush()?;
        }
        Ok(())
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        debug!("Browser command: {command:?}");
        match command {
            Command::Next => {
                self.collection.advance();
                self.render_current()
            }
            Command::Prev => {
                self.collection.retreat();
                self.render_current()
            }
            Command::Home => {
                self.collection.reset();
                self.render_current()
            }
            Command::GoTo(number) => match self.collection.go_to(number - 1) {
                Ok(_) => self.render_current(),
                Err(e) => self.report(&e),
            },
            Command::ListNotes => self.list_notes(),
            Command::AddNote(text) => self.change_note(|store| {
                let note = store.add(&text)?.clone();
                Ok((NoteChangeKind::Added, store.len() - 1, note))
            }),
            Command::EditNote(number, text) => self.change_note(|store| {
                let note = store.edit(number - 1, &text)?.clone();
                Ok((NoteChangeKind::Edited, number - 1, note))
            }),
            Command::DeleteNote(number) => self.change_note(|store| {
                let note = store.delete(number - 1)?;
                Ok((NoteChangeKind::Deleted, number - 1, note))
            }),
            Command::Help => self.renderer.render(HELP),
            Command::Quit => Ok(()),
        }
    }

    fn render_current(&self) -> Result<()> {
        let Some(step) = self.collection.current() else {
            return self.renderer.show(&WelcomeView {
                root: self.collection.root(),
                total: self.collection.len(),
            });
        };

        let description = self.collection.describe(step);
        self.renderer.show(&StepView {
            step,
            description: &description,
            total: self.collection.len(),
            navigation: self.collection.navigation(),
        })?;
        if let Err(e) = self.collection.load_image(step) {
            self.report(&e)?;
        }
        Ok(())
    }

    fn list_notes(&self) -> Result<()> {
        let Some(step) = self.collection.current() else {
            return self.no_step_selected();
        };
        let store = self.guide.notes(step.index);
        self.renderer
            .render(&format!("## Notes for step {}\n\n", step.number()))?;
        self.renderer.show(&Notes(store.notes()))
    }

    fn change_note<F>(&self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut NotesStore) -> stepguide_core::Result<(NoteChangeKind, usize, Note)>,
    {
        let Some(step) = self.collection.current() else {
            return self.no_step_selected();
        };
        let mut store = self.guide.notes(step.index);
        let outcome = apply(&mut store).and_then(|change| store.close().map(|()| change));
        match outcome {
            Ok((kind, position, note)) => self.renderer.show(&NoteChange {
                kind,
                step_number: step.number(),
                position,
                note,
            }),
            Err(e) => self.report(&e),
        }
    }

    fn no_step_selected(&self) -> Result<()> {
        self.renderer.status(&OperationStatus::failure(
            "No step selected. Go to a step first.",
        ))
    }

    fn report(&self, error: &GuideError) -> Result<()> {
        self.renderer.status(&OperationStatus::from(error))
    }
}
