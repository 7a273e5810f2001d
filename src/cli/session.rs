//! The interactive console session.
//!
//! A [`Session`] reads lines from any [`BufRead`] and writes to any [`Write`], so the whole
//! conversation can be driven from tests. End of input ends the session as if `Quit` had been
//! chosen.

use std::io::{BufRead, Write};

use log::debug;

use crate::config::ExplorerConfig;
use crate::currency::CurrencyTable;
use crate::dataset::DataSet;
use crate::error::{ExplorerError, ExplorerResult};
use crate::ingestion::{self, IngestionOptions};
use crate::processing::StatKind;
use crate::types::Category;

use super::menu::{render_menu, Command};

/// One user's run through the menu.
pub struct Session<R, W> {
    config: ExplorerConfig,
    dataset: DataSet,
    currencies: CurrencyTable,
    ingestion: IngestionOptions,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Create a session with an empty dataset built from `config`.
    pub fn new(config: ExplorerConfig, input: R, output: W) -> Self {
        let dataset = DataSet::with_header(&config.header, config.copyright.clone());
        let ingestion = config.ingestion_options();
        Self {
            config,
            dataset,
            currencies: CurrencyTable::default(),
            ingestion,
            input,
            output,
        }
    }

    /// The session's dataset.
    pub fn dataset(&self) -> &DataSet {
        &self.dataset
    }

    /// Consume the session and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the greeting, the currency table and the menu loop until the user quits.
    pub fn run(&mut self) -> ExplorerResult<()> {
        if !self.dataset.header().is_empty() {
            writeln!(self.output, "{}", self.dataset.header())?;
        }

        let Some(name) = self.prompt("Hello, please enter your name: ")? else {
            return Ok(());
        };
        writeln!(self.output, "Hey {name}, welcome to the rental explorer!")?;

        let Some(home) = self.choose_home_currency()? else {
            return Ok(());
        };
        let table = self.currencies.conversion_table(&home)?;
        write!(self.output, "{table}")?;

        render_menu(&mut self.output)?;
        loop {
            let cmd = match self.next_command()? {
                Some(cmd) => cmd,
                None => break,
            };
            if cmd == Command::Quit {
                writeln!(self.output, "Goodbye! See you next time")?;
                break;
            }
            self.dispatch(cmd)?;
            render_menu(&mut self.output)?;
        }
        Ok(())
    }

    /// Execute one menu command.
    pub fn dispatch(&mut self, cmd: Command) -> ExplorerResult<()> {
        debug!("dispatching {cmd:?}");
        let result = match cmd {
            Command::AverageCrossTable => self.dataset.display_cross_table(StatKind::Avg, &mut self.output),
            Command::MinimumCrossTable => self.dataset.display_cross_table(StatKind::Min, &mut self.output),
            Command::MaximumCrossTable => self.dataset.display_cross_table(StatKind::Max, &mut self.output),
            Command::StatsByLocation => self.dataset.display_field_table(Category::Location, &mut self.output),
            Command::StatsByPropertyType => {
                self.dataset.display_field_table(Category::PropertyType, &mut self.output)
            }
            Command::LocationFilters => self.adjust_filters(Category::Location),
            Command::PropertyTypeFilters => self.adjust_filters(Category::PropertyType),
            Command::LoadData => self.load_data(),
            Command::Quit => Ok(()),
        };

        match result {
            Err(ExplorerError::EmptyDataset) => {
                writeln!(self.output, "Please load data first.")?;
                Ok(())
            }
            other => other,
        }
    }

    fn prompt(&mut self, text: &str) -> ExplorerResult<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn choose_home_currency(&mut self) -> ExplorerResult<Option<String>> {
        if let Some(code) = self.config.home_currency.clone() {
            if self.currencies.contains(&code) {
                return Ok(Some(code));
            }
            writeln!(self.output, "Configured home currency '{code}' is not supported.")?;
        }

        loop {
            let Some(answer) = self.prompt("What is your home currency? ")? else {
                return Ok(None);
            };
            let code = answer.to_ascii_uppercase();
            if self.currencies.contains(&code) {
                return Ok(Some(code));
            }
            writeln!(self.output, "Please select a valid currency.")?;
        }
    }

    fn next_command(&mut self) -> ExplorerResult<Option<Command>> {
        loop {
            let Some(line) = self.prompt("What is your choice? ")? else {
                return Ok(None);
            };
            match line.parse::<Command>() {
                Ok(cmd) => return Ok(Some(cmd)),
                Err(e) => {
                    render_menu(&mut self.output)?;
                    writeln!(self.output, "Try again. {e}")?;
                }
            }
        }
    }

    fn adjust_filters(&mut self, axis: Category) -> ExplorerResult<()> {
        loop {
            let labels = self.dataset.labels(axis)?;
            if labels.is_empty() {
                writeln!(self.output, "There are no {axis} labels to filter.")?;
                return Ok(());
            }

            writeln!(self.output)?;
            writeln!(self.output, "{} Filters", axis.title())?;
            for (i, label) in labels.iter().enumerate() {
                let state = if self.dataset.is_active(axis, label) {
                    "active"
                } else {
                    "inactive"
                };
                writeln!(self.output, "{} - {label} ({state})", i + 1)?;
            }

            let Some(line) = self.prompt("Enter a number to toggle a filter, or press Enter to finish: ")? else {
                return Ok(());
            };
            if line.is_empty() {
                return Ok(());
            }

            match line.parse::<usize>() {
                Ok(n) if (1..=labels.len()).contains(&n) => {
                    self.dataset.toggle_label(axis, &labels[n - 1])?;
                }
                _ => writeln!(
                    self.output,
                    "Try again. Please select a number from 1-{}.",
                    labels.len()
                )?,
            }
        }
    }

    fn load_data(&mut self) -> ExplorerResult<()> {
        let source = self.config.source();
        match ingestion::load_into(&mut self.dataset, &source, &self.ingestion) {
            Ok(n) => writeln!(self.output, "Loaded {n} listings from {source}.")?,
            Err(e) => writeln!(
                self.output,
                "Could not load data from {source}: {e}. Previous data was kept."
            )?,
        }
        Ok(())
    }
}
