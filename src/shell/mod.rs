//! Interactive menu shell
//!
//! A repeating six-entry menu over a ledger. Every answer is validated where
//! it is read; a rejected answer abandons the current operation, prints the
//! reason and returns to the menu without touching the ledger.

pub mod menu;
pub mod prompt;

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

use crate::config::Settings;
use crate::display::{format_options, format_record_list};
use crate::error::LedgerResult;
use crate::models::{
    parse_entry_date, Classification, Entry, ExpenseCategory, ExpenseRecord, IncomeRecord,
    IncomeSource, Ledger, Money, RecordKind,
};
use crate::reports::LedgerSummary;
use crate::services::LedgerService;
use crate::storage::SnapshotStore;

pub use menu::{MenuChoice, MAIN_MENU};
pub use prompt::{Prompter, ShellError, ShellResult};

/// Source of "today" for blank date answers
pub type Clock = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Fields collected for a new or replacement record
struct RecordInput<C> {
    amount: Money,
    classification: C,
    date: NaiveDate,
    description: String,
}

/// Which wording the record prompts use
#[derive(Clone, Copy)]
enum Wording {
    Add,
    Edit,
}

/// The interactive shell
pub struct Shell<'a, S: SnapshotStore, R, W> {
    service: LedgerService<'a, S>,
    ledger: Ledger,
    currency_symbol: String,
    prompter: Prompter<R, W>,
    today: Clock,
}

impl<'a, S: SnapshotStore, R: BufRead, W: Write> Shell<'a, S, R, W> {
    /// Create a shell over an already-loaded ledger
    pub fn new(
        service: LedgerService<'a, S>,
        ledger: Ledger,
        settings: &Settings,
        input: R,
        output: W,
    ) -> Self {
        Self {
            service,
            ledger,
            currency_symbol: settings.currency_symbol.clone(),
            prompter: Prompter::new(input, output),
            today: local_today,
        }
    }

    /// Use a fixed clock for blank date answers
    pub fn with_clock(mut self, today: Clock) -> Self {
        self.today = today;
        self
    }

    /// Hand back the ledger and the output writer
    pub fn into_parts(self) -> (Ledger, W) {
        (self.ledger, self.prompter.into_output())
    }

    /// Run the menu until Exit or end of input
    pub fn run(&mut self) -> LedgerResult<()> {
        loop {
            match self.step() {
                Ok(true) => {}
                Ok(false) | Err(ShellError::EndOfInput) => break,
                Err(ShellError::Ledger(e)) => {
                    warn!("Unrecoverable shell error: {}", e);
                    return Err(e);
                }
            }
        }

        match self.prompter.say("Goodbye!") {
            Ok(()) | Err(ShellError::EndOfInput) => Ok(()),
            Err(ShellError::Ledger(e)) => Err(e),
        }
    }

    /// Show the menu and handle one choice; `false` means exit
    fn step(&mut self) -> ShellResult<bool> {
        self.prompter.say(MAIN_MENU)?;
        let answer = self.prompter.ask("Choose an option (1-6): ")?;

        let Some(choice) = MenuChoice::parse(&answer) else {
            self.prompter.say("Invalid choice!")?;
            return Ok(true);
        };
        debug!(?choice, "menu choice");

        let result = match choice {
            MenuChoice::AddIncome => self.add_income(),
            MenuChoice::AddExpense => self.add_expense(),
            MenuChoice::ShowSummary => self.show_summary(),
            MenuChoice::Edit => self.edit_transaction(),
            MenuChoice::Delete => self.delete_transaction(),
            MenuChoice::Exit => return Ok(false),
        };

        match result {
            Ok(()) => Ok(true),
            Err(ShellError::Ledger(e)) => {
                // Every ledger error is recoverable here; the ledger was not changed
                if e.is_validation() || e.is_index_error() {
                    debug!("rejected input: {}", e);
                } else {
                    warn!("operation failed: {}", e);
                }
                self.prompter.say(e.to_string())?;
                Ok(true)
            }
            Err(ShellError::EndOfInput) => Err(ShellError::EndOfInput),
        }
    }

    fn add_income(&mut self) -> ShellResult<()> {
        let input = self.collect::<IncomeSource>(RecordKind::Income, Wording::Add)?;
        let record = IncomeRecord::new(
            input.amount,
            input.classification,
            input.date,
            input.description,
        );
        self.service.append_income(&mut self.ledger, record)?;
        self.prompter.say("Income added!")
    }

    fn add_expense(&mut self) -> ShellResult<()> {
        let input = self.collect::<ExpenseCategory>(RecordKind::Expense, Wording::Add)?;
        let record = ExpenseRecord::new(
            input.amount,
            input.classification,
            input.date,
            input.description,
        );
        self.service.append_expense(&mut self.ledger, record)?;
        self.prompter.say("Expense added!")
    }

    fn show_summary(&mut self) -> ShellResult<()> {
        let summary = LedgerSummary::generate(&self.ledger);
        self.prompter.say("")?;
        self.prompter
            .print(summary.format_terminal(&self.currency_symbol))?;

        match self.prompter.ask("\nPress Enter to continue...") {
            Ok(_) | Err(ShellError::EndOfInput) => Ok(()),
            Err(e) => Err(e),
        }
    }

    fn edit_transaction(&mut self) -> ShellResult<()> {
        let Some((kind, position)) = self.select_record("Edit", "edit")? else {
            return Ok(());
        };

        let replacement: Entry = match kind {
            RecordKind::Income => {
                let input = self.collect::<IncomeSource>(kind, Wording::Edit)?;
                IncomeRecord::new(
                    input.amount,
                    input.classification,
                    input.date,
                    input.description,
                )
                .into()
            }
            RecordKind::Expense => {
                let input = self.collect::<ExpenseCategory>(kind, Wording::Edit)?;
                ExpenseRecord::new(
                    input.amount,
                    input.classification,
                    input.date,
                    input.description,
                )
                .into()
            }
        };

        self.service
            .update_at(&mut self.ledger, position, replacement)?;
        self.prompter.say(format!("{} updated!", kind))
    }

    fn delete_transaction(&mut self) -> ShellResult<()> {
        let Some((kind, position)) = self.select_record("Delete", "delete")? else {
            return Ok(());
        };

        self.service.delete_at(&mut self.ledger, kind, position)?;
        self.prompter.say(format!("{} deleted!", kind))
    }

    /// Ask for income vs expense, list the records, and ask for one by number
    ///
    /// Returns `None` when the operation should quietly end (bad kind choice
    /// or nothing to pick from). The returned position is bounds-checked.
    fn select_record(
        &mut self,
        verb: &str,
        verb_lower: &str,
    ) -> ShellResult<Option<(RecordKind, usize)>> {
        let answer = self.prompter.ask(&format!(
            "1. {verb} Income\n2. {verb} Expense\nChoose option (1-2): "
        ))?;

        let Some(kind) = menu::parse_kind(&answer) else {
            self.prompter.say("Invalid choice!")?;
            return Ok(None);
        };

        let entries = self.ledger.entries(kind);
        let noun = kind.noun();
        if entries.is_empty() {
            self.prompter
                .say(format!("No {} transactions available!", noun))?;
            return Ok(None);
        }

        self.prompter.say(format!("\n{} Transactions:", kind))?;
        self.prompter
            .print(format_record_list(&entries, &self.currency_symbol))?;

        let answer = self
            .prompter
            .ask(&format!("Enter {} number to {}: ", noun, verb_lower))?;
        let number = prompt::parse_record_number(&answer, noun, entries.len())?;
        let position = self.ledger.position_of(kind, number)?;

        Ok(Some((kind, position)))
    }

    /// Collect amount, classification, date and description, in that order
    fn collect<C: Classification>(
        &mut self,
        kind: RecordKind,
        wording: Wording,
    ) -> ShellResult<RecordInput<C>> {
        let noun = kind.noun();
        let (amount_prompt, date_prompt, description_prompt) = match wording {
            Wording::Add => (
                format!("Enter {} amount: ", noun),
                "Enter date (YYYY-MM-DD) or press Enter for today: ",
                "Enter description: ",
            ),
            Wording::Edit => (
                "Enter new amount: ".to_string(),
                "Enter new date (YYYY-MM-DD) or press Enter for today: ",
                "Enter new description: ",
            ),
        };

        let answer = self.prompter.ask(&amount_prompt)?;
        let amount = prompt::parse_amount(&answer)?;

        self.prompter
            .say(format!("\n{} {}:", kind, C::HEADING))?;
        self.prompter.print(format_options::<C>())?;
        let answer = self.prompter.ask("Choose an option: ")?;
        let classification = prompt::parse_option::<C>(&answer)?;

        let answer = self.prompter.ask(date_prompt)?;
        let date = parse_entry_date(&answer, (self.today)())?;

        let description = self.prompter.ask(description_prompt)?;

        Ok(RecordInput {
            amount,
            classification,
            date,
            description,
        })
    }
}
