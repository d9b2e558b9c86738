use super::input::LineInput;
use super::print::{
    print_category_lines, print_error, print_menu, print_messages, print_table, print_total,
};
use assetz::api::{AssetzApi, CmdMessage};
use assetz::error::{AssetzError, Result};
use assetz::index::parse_index;
use assetz::model::{FieldChange, RecordPatch};
use assetz::store::Backend;
use std::io::Write;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Quit,
    List,
    Add,
    Edit,
    Delete,
    Search,
    Filter,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "0" => Some(MenuChoice::Quit),
            "1" => Some(MenuChoice::List),
            "2" => Some(MenuChoice::Add),
            "3" => Some(MenuChoice::Edit),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::Search),
            "6" => Some(MenuChoice::Filter),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

/// Reads one line, or leaves the current action when input runs out.
macro_rules! read_or_quit {
    ($shell:expr, $prompt:expr) => {
        match $shell.input.read_line($prompt)? {
            Some(line) => line,
            None => return Ok(Flow::Quit),
        }
    };
}

/// The interactive menu loop. Owns the API for the lifetime of the session.
pub struct Shell<B: Backend, I: LineInput, W: Write> {
    api: AssetzApi<B>,
    input: I,
    out: W,
    currency: String,
}

impl<B: Backend, I: LineInput, W: Write> Shell<B, I, W> {
    pub fn new(api: AssetzApi<B>, input: I, out: W, currency: impl Into<String>) -> Self {
        Self {
            api,
            input,
            out,
            currency: currency.into(),
        }
    }

    /// Loads the store and runs the menu until quit or end of input.
    ///
    /// Index mistakes are reported and the menu comes back. Anything else,
    /// such as a failed write, ends the session with an error.
    pub fn run(&mut self) -> Result<()> {
        let opened = self.api.open()?;
        print_messages(&mut self.out, &opened.messages)?;

        loop {
            print_menu(&mut self.out)?;
            writeln!(self.out)?;
            self.out.flush()?;
            let Some(line) = self.input.read_line("Select: ")? else {
                break;
            };

            let outcome = match MenuChoice::parse(&line) {
                Some(choice) => {
                    debug!(?choice, "menu selection");
                    self.dispatch(choice)
                }
                None => {
                    print_messages(
                        &mut self.out,
                        &[CmdMessage::error(format!("Invalid choice: '{}'", line.trim()))],
                    )?;
                    Ok(Flow::Continue)
                }
            };

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) if err.is_recoverable() => print_error(&mut self.out, &err)?,
                Err(err) => return Err(err),
            }
        }

        writeln!(self.out, "\nGoodbye!")?;
        self.out.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Quit => Ok(Flow::Quit),
            MenuChoice::List => self.list(),
            MenuChoice::Add => self.add(),
            MenuChoice::Edit => self.edit(),
            MenuChoice::Delete => self.delete(),
            MenuChoice::Search => self.search(),
            MenuChoice::Filter => self.filter(),
        }
    }

    fn list(&mut self) -> Result<Flow> {
        let result = self.api.list_all()?;
        print_table(&mut self.out, &result.listed_records)?;
        print_total(&mut self.out, result.listed_records.len())?;
        Ok(Flow::Continue)
    }

    fn add(&mut self) -> Result<Flow> {
        let category = read_or_quit!(self, "Category (001-999): ");
        let name = read_or_quit!(self, "Name: ");
        let price = read_or_quit!(self, "Price: ");

        let result = self.api.add(category, name, price)?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn edit(&mut self) -> Result<Flow> {
        self.list()?;
        let Some(index) = self.read_index("Record # to edit: ")? else {
            return Ok(Flow::Quit);
        };

        writeln!(self.out, "\n(press Enter to keep the current value)")?;
        let category = read_or_quit!(self, "New category: ");
        let name = read_or_quit!(self, "New name: ");
        let price = read_or_quit!(self, "New price: ");

        let patch = RecordPatch {
            category: keep_if_blank(&category),
            name: keep_if_blank(&name),
            price: keep_if_blank(&price),
        };
        let result = self.api.update(index, patch)?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> Result<Flow> {
        self.list()?;
        let Some(index) = self.read_index("Record # to delete: ")? else {
            return Ok(Flow::Quit);
        };

        let answer = read_or_quit!(self, &format!("Delete record #{}? (y/n): ", index));
        if !answer.trim().eq_ignore_ascii_case("y") {
            print_messages(&mut self.out, &[CmdMessage::info("Delete cancelled")])?;
            return Ok(Flow::Continue);
        }

        let result = self.api.delete(index)?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> Result<Flow> {
        let keyword = read_or_quit!(self, "Keyword: ");
        let result = self.api.search(&keyword)?;
        print_messages(&mut self.out, &result.messages)?;
        if !result.listed_records.is_empty() {
            print_table(&mut self.out, &result.listed_records)?;
        }
        Ok(Flow::Continue)
    }

    fn filter(&mut self) -> Result<Flow> {
        let category = read_or_quit!(self, "Category (001-999): ");
        let result = self.api.filter_by_category(&category)?;
        print_messages(&mut self.out, &result.messages)?;
        print_category_lines(&mut self.out, &result.listed_records, &self.currency)?;
        Ok(Flow::Continue)
    }

    /// Asks until the answer is a whole number, then checks it names a record.
    ///
    /// The range check only spares the user the follow-up prompts; the store
    /// still rejects an out-of-range index on `replace` and `remove`.
    fn read_index(&mut self, prompt: &str) -> Result<Option<usize>> {
        loop {
            let Some(line) = self.input.read_line(prompt)? else {
                return Ok(None);
            };
            match parse_index(&line) {
                Ok(index) if index < self.api.store().len() => return Ok(Some(index)),
                Ok(index) => return Err(AssetzError::not_found(index)),
                Err(err @ AssetzError::InvalidIndex(_)) => {
                    print_error(&mut self.out, &err)?;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

fn keep_if_blank(input: &str) -> FieldChange<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        FieldChange::Keep
    } else {
        FieldChange::Set(trimmed.to_string())
    }
}
