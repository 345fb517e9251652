//! Interactive shell.
//!
//! Keeps one [`Session`] alive across commands, so search text, sort order and
//! page survive between actions. Reads commands line by line from any `BufRead`
//! and writes to any `Write`; the binary wires stdin/stdout.
//!
//! Errors from a single command are printed and the loop goes on. End of input
//! leaves the shell, and also cancels a form that is being filled in.

use super::render::{render_messages_internal, render_shell_help, render_table_internal};
use chrono::Utc;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::PathBuf;
use stockroom::api::CmdMessage;
use stockroom::commands::export::EXPORT_FILENAME;
use stockroom::error::{Result, StockroomError};
use stockroom::model::ProductForm;
use stockroom::presenter::TableView;
use stockroom::session::Session;
use stockroom::sort::SortKey;
use stockroom::store::KeyValueStore;

const PROMPT: &str = "stockroom> ";

pub struct Shell<S: KeyValueStore, R: BufRead, W: Write> {
    session: Session<S>,
    input: R,
    output: W,
    use_color: Option<bool>,
}

impl<S: KeyValueStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(session: Session<S>, input: R, output: W, use_color: Option<bool>) -> Self {
        Self {
            session,
            input,
            output,
            use_color,
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (Session<S>, W) {
        (self.session, self.output)
    }

    pub fn run(&mut self) -> Result<()> {
        self.show_current()?;
        while let Some(line) = self.ask(PROMPT)? {
            let line = line.trim();
            let (command, rest) = match line.split_once(char::is_whitespace) {
                Some((command, rest)) => (command, rest.trim()),
                None => (line, ""),
            };

            match self.dispatch(command, rest) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => self.print_messages(&[CmdMessage::error(e.to_string())])?,
            }
        }
        Ok(())
    }

    /// Runs one command. Returns `false` when the shell should exit.
    fn dispatch(&mut self, command: &str, rest: &str) -> Result<bool> {
        match command {
            "" | "list" | "ls" => self.show_current()?,
            "search" => {
                let table = self.session.set_search(rest)?;
                self.print_table(&table)?;
            }
            "sort" => match SortKey::ALL.iter().find(|k| k.as_key() == rest) {
                Some(key) => {
                    let table = self.session.set_sort(*key)?;
                    self.print_table(&table)?;
                }
                None => {
                    let keys: Vec<&str> = SortKey::ALL.iter().map(|k| k.as_key()).collect();
                    self.print_messages(&[CmdMessage::error(format!(
                        "Unknown sort key '{}'. Use one of: {}",
                        rest,
                        keys.join(", ")
                    ))])?;
                }
            },
            "page" => match rest.parse::<usize>() {
                Ok(n) if n > 0 => {
                    let table = self.session.go_to_page(n)?;
                    self.print_table(&table)?;
                }
                _ => self.print_messages(&[CmdMessage::error(
                    "Page must be a positive number",
                )])?,
            },
            "next" => {
                let page = self.session.state().page.saturating_add(1);
                let table = self.session.go_to_page(page)?;
                self.print_table(&table)?;
            }
            "prev" => {
                let page = self.session.state().page.saturating_sub(1);
                let table = self.session.go_to_page(page)?;
                self.print_table(&table)?;
            }
            "new" => {
                let form = self.session.open_new().clone();
                self.fill_form(form)?;
            }
            "edit" => {
                let form = self.session.open_edit(rest)?.clone();
                self.fill_form(form)?;
            }
            "delete" | "rm" => self.delete(rest)?,
            "export" => self.export(rest)?,
            "import" => self.import(rest)?,
            "help" | "?" => {
                let help = render_shell_help(self.use_color);
                self.write(&help)?;
            }
            "quit" | "exit" | "q" => return Ok(false),
            other => self.print_messages(&[CmdMessage::error(format!(
                "Unknown command '{}'. Type 'help' for a list.",
                other
            ))])?,
        }
        Ok(true)
    }

    /// Prompts for each field, then saves. A rejected form stays open and the
    /// user may retry with the values already entered.
    fn fill_form(&mut self, mut form: ProductForm) -> Result<()> {
        loop {
            let Some(name) = self.ask_field("Name", &form.name)? else {
                self.session.cancel();
                return Ok(());
            };
            let Some(category) = self.ask_field("Category", &form.category)? else {
                self.session.cancel();
                return Ok(());
            };
            let Some(price) = self.ask_field("Price", &form.price)? else {
                self.session.cancel();
                return Ok(());
            };
            let Some(stock) = self.ask_field("Stock", &form.stock)? else {
                self.session.cancel();
                return Ok(());
            };
            form.name = name;
            form.category = category;
            form.price = price;
            form.stock = stock;

            match self.session.save(form.clone()) {
                Ok(result) => {
                    self.print_messages(&result.messages)?;
                    if let Some(table) = &result.table {
                        self.print_table(table)?;
                    }
                    return Ok(());
                }
                Err(StockroomError::Validation(e)) => {
                    self.print_messages(&[CmdMessage::error(e.to_string())])?;
                    if !self.confirm("Try again? [Y/n] ", true)? {
                        self.session.cancel();
                        self.print_messages(&[CmdMessage::info("Cancelled.")])?;
                        return Ok(());
                    }
                }
                Err(e) => {
                    self.session.cancel();
                    return Err(e);
                }
            }
        }
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let product = self
            .session
            .api()
            .find(id)
            .ok_or_else(|| StockroomError::ProductNotFound(id.to_string()))?;
        let confirmed = self.confirm(&format!("Delete \"{}\"? [y/N] ", product.name), false)?;

        let result = self.session.delete(id, |_| confirmed)?;
        self.print_messages(&result.messages)?;
        if let Some(table) = &result.table {
            self.print_table(table)?;
        }
        Ok(())
    }

    fn export(&mut self, path: &str) -> Result<()> {
        let path = if path.is_empty() {
            PathBuf::from(EXPORT_FILENAME)
        } else {
            PathBuf::from(path)
        };
        let file = File::create(&path).map_err(StockroomError::Io)?;
        let mut result = self.session.export(BufWriter::new(file))?;
        result.add_message(CmdMessage::info(format!("Saved to {}", path.display())));
        self.print_messages(&result.messages)
    }

    fn import(&mut self, path: &str) -> Result<()> {
        if path.is_empty() {
            return self.print_messages(&[CmdMessage::error("Usage: import PATH")]);
        }
        let text = std::fs::read_to_string(path).map_err(StockroomError::Io)?;
        let result = self.session.import(&text)?;
        self.print_messages(&result.messages)?;
        if let Some(table) = &result.table {
            self.print_table(table)?;
        }
        Ok(())
    }

    fn show_current(&mut self) -> Result<()> {
        let table = self.session.render()?;
        self.print_table(&table)
    }

    fn status_line(&self) -> String {
        let state = self.session.state();
        let search = if state.search.trim().is_empty() {
            "(none)".to_string()
        } else {
            format!("\"{}\"", state.search)
        };
        format!("search: {} · sort: {}", search, state.sort.label())
    }

    fn print_table(&mut self, table: &TableView) -> Result<()> {
        let status = self.status_line();
        let output = render_table_internal(table, Some(&status), Utc::now(), self.use_color);
        self.write(&output)
    }

    fn print_messages(&mut self, messages: &[CmdMessage]) -> Result<()> {
        let output = render_messages_internal(messages, self.use_color);
        self.write(&output)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .and_then(|_| self.output.flush())
            .map_err(StockroomError::Io)
    }

    /// Writes `prompt` and reads one line. `None` at end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        self.write(prompt)?;
        let mut line = String::new();
        let read = self.input.read_line(&mut line).map_err(StockroomError::Io)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Empty input keeps `current`.
    fn ask_field(&mut self, label: &str, current: &str) -> Result<Option<String>> {
        let prompt = if current.is_empty() {
            format!("{}: ", label)
        } else {
            format!("{} [{}]: ", label, current)
        };
        Ok(self.ask(&prompt)?.map(|answer| {
            if answer.trim().is_empty() {
                current.to_string()
            } else {
                answer
            }
        }))
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        Ok(match self.ask(prompt)? {
            Some(answer) => match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => true,
                "n" | "no" => false,
                _ => default,
            },
            None => false,
        })
    }
}
