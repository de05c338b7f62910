use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use finance_ledger::audit::AuditLogger;
use finance_ledger::config::{paths::DIR_ENV_VAR, LedgerPaths, Settings};
use finance_ledger::display::format_record_list;
use finance_ledger::export::{export_full_json, export_full_yaml, export_records_csv};
use finance_ledger::models::{Ledger, RecordKind};
use finance_ledger::reports::LedgerSummary;
use finance_ledger::services::LedgerService;
use finance_ledger::shell::Shell;
use finance_ledger::storage::{JsonFileStore, SnapshotStore};

#[derive(Parser)]
#[command(
    name = "finledger",
    version,
    about = "Terminal-based personal income and expense ledger",
    long_about = "finledger keeps a single ledger of income and expense records in \
                  finance_data.json. Run it without a command to open the \
                  interactive menu."
)]
struct Cli {
    /// Directory holding finance_data.json (defaults to the current directory)
    #[arg(long, global = true, env = DIR_ENV_VAR)]
    dir: Option<PathBuf>,

    /// Log level for diagnostics on stderr; RUST_LOG takes precedence
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu (the default)
    Shell,

    /// Print the financial summary
    Summary,

    /// List records with their numbers
    #[command(alias = "ls")]
    List {
        /// Only list this kind of record
        #[arg(value_enum)]
        kind: Option<KindArg>,
    },

    /// Show recent audit log entries
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Export the ledger to a file
    Export {
        /// Output file path
        output: PathBuf,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Show resolved paths and settings
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for RecordKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => RecordKind::Income,
            KindArg::Expense => RecordKind::Expense,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    let paths = LedgerPaths::resolve(cli.dir)?;
    let settings = Settings::load_or_default(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let store = JsonFileStore::new(paths.data_file());
    let audit = AuditLogger::new(paths.audit_log());

    match cli.command {
        None | Some(Commands::Shell) => run_shell(&paths, &settings, &store, &audit)?,
        Some(Commands::Summary) => {
            let ledger = store.load()?;
            print!(
                "{}",
                LedgerSummary::generate(&ledger).format_terminal(&settings.currency_symbol)
            );
        }
        Some(Commands::List { kind }) => {
            let ledger = store.load()?;
            let kinds = match kind {
                Some(kind) => vec![kind.into()],
                None => vec![RecordKind::Income, RecordKind::Expense],
            };
            print_listing(&ledger, &kinds, &settings.currency_symbol);
        }
        Some(Commands::History { limit }) => {
            let total = audit.entry_count()?;
            if total == 0 {
                println!("No audit entries in {}", audit.path().display());
            } else {
                let entries = audit.read_recent(limit)?;
                for entry in &entries {
                    println!("{}", entry.format_human_readable());
                }
                println!();
                println!("Showing {} of {} entries", entries.len(), total);
            }
        }
        Some(Commands::Export {
            output,
            format,
            pretty,
        }) => {
            let ledger = store.load()?;
            let file = File::create(&output)
                .with_context(|| format!("Failed to create {}", output.display()))?;
            let mut writer = BufWriter::new(file);

            match format {
                ExportFormat::Csv => export_records_csv(&ledger, &mut writer)?,
                ExportFormat::Json => export_full_json(&ledger, &mut writer, pretty)?,
                ExportFormat::Yaml => export_full_yaml(&ledger, &mut writer)?,
            }
            writer.flush()?;

            println!(
                "Exported {} income and {} expense records to {}",
                ledger.income.len(),
                ledger.expenses.len(),
                output.display()
            );
        }
        Some(Commands::Config) => {
            println!("Finance Ledger Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data file:      {}", paths.data_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
    }

    Ok(())
}

fn run_shell(
    paths: &LedgerPaths,
    settings: &Settings,
    store: &JsonFileStore,
    audit: &AuditLogger,
) -> Result<()> {
    paths.ensure_directories()?;

    let mut service = LedgerService::new(store);
    if settings.audit_enabled {
        service = service.with_audit(audit);
    }
    let ledger = service
        .load()
        .with_context(|| format!("Could not open {}", store.path().display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(service, ledger, settings, stdin.lock(), stdout.lock());
    shell.run()?;
    Ok(())
}

fn print_listing(ledger: &Ledger, kinds: &[RecordKind], currency_symbol: &str) {
    for (i, kind) in kinds.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} Transactions:", kind);

        let entries = ledger.entries(*kind);
        if entries.is_empty() {
            println!("  (none)");
        } else {
            print!("{}", format_record_list(&entries, currency_symbol));
        }
    }
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        // RUST_LOG exists; use it.
        Some(_) => EnvFilter::from_default_env(),
        // Otherwise only this crate's targets, at the requested level.
        None => EnvFilter::new(format!(
            "{}={},{}={}",
            "finance_ledger",
            level,
            env!("CARGO_CRATE_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
