//! Terminal host for the project board.
//!
//! # Responsibility
//! - Feed form submissions from stdin or a JSON batch file into a board.
//! - Report validation alerts on stderr and write the rendered page.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use project_board_core::{
    init_logging, BoardConfig, FormField, Notifier, ProjectBoard, ProjectStatus, SubmitError,
};
use serde::Deserialize;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "project-board")]
#[command(about = "Collect projects through a validated form", long_about = None)]
struct Cli {
    /// Log level (trace|debug|info|warn|error).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off without it.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    /// JSON file overriding the host id and templates.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for projects on stdin until end of input.
    Interactive {
        /// Write the final page here instead of stdout.
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
    /// Submit every entry of a JSON array of form inputs.
    Batch {
        #[arg(long)]
        input: PathBuf,

        /// Snapshot written by an earlier `--format json` run to load first.
        #[arg(long)]
        seed: Option<PathBuf>,

        #[arg(short = 'o', long)]
        out: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Html,
    Json,
}

/// One batch entry, holding raw field values as typed into the form.
#[derive(Deserialize)]
struct FormEntry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    people: RawPeople,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPeople {
    Number(f64),
    Text(String),
}

impl Default for RawPeople {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl RawPeople {
    fn into_raw(self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value,
        }
    }
}

/// Reports alerts on stderr.
struct StderrNotifier;

impl Notifier for StderrNotifier {
    fn alert(&mut self, message: &str) {
        eprintln!("alert: {message}");
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or(project_board_core::default_log_level());
        init_logging(level, log_dir).context("failed to initialize logging")?;
        info!(
            "event=cli_start module=cli status=ok core_version={}",
            project_board_core::core_version()
        );
    }

    let config = match &cli.config {
        Some(path) => BoardConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => BoardConfig::default(),
    };
    let mut board = ProjectBoard::new(&config).context("failed to build board")?;

    match cli.cmd {
        Commands::Interactive { out } => {
            let stdin = std::io::stdin();
            run_interactive(&mut board, stdin.lock())?;
            let page = board.render_page()?;
            write_output(out.as_deref(), &page)?;
        }
        Commands::Batch {
            input,
            seed,
            out,
            format,
        } => {
            if let Some(seed) = seed {
                let raw = std::fs::read_to_string(&seed)
                    .with_context(|| format!("failed to read {}", seed.display()))?;
                seed_board(&mut board, &raw)
                    .with_context(|| format!("invalid seed snapshot {}", seed.display()))?;
            }

            let raw = std::fs::read_to_string(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;
            let entries: Vec<FormEntry> = serde_json::from_str(&raw)
                .with_context(|| format!("invalid batch file {}", input.display()))?;
            let (accepted, rejected) = run_batch(&mut board, entries)?;
            eprintln!("accepted={accepted} rejected={rejected}");

            let rendered = render_output(&board, format)?;
            write_output(out.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

fn seed_board(board: &mut ProjectBoard, raw: &str) -> Result<usize> {
    let imported = board.import_snapshot_json(raw)?;
    info!("event=seed_loaded module=cli status=ok projects={imported}");
    Ok(imported)
}

fn render_output(board: &ProjectBoard, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Html => board.render_page()?,
        OutputFormat::Json => board.snapshot_json()?,
    })
}

fn run_batch(board: &mut ProjectBoard, entries: Vec<FormEntry>) -> Result<(usize, usize)> {
    let mut notifier = StderrNotifier;
    let (mut accepted, mut rejected) = (0, 0);
    for (index, entry) in entries.into_iter().enumerate() {
        let people = entry.people.into_raw();
        match board.submit_fields(&entry.title, &entry.description, &people, &mut notifier) {
            Ok(_) => accepted += 1,
            Err(SubmitError::InvalidInput { field }) => {
                eprintln!("entry {index}: invalid `{field}`");
                rejected += 1;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok((accepted, rejected))
}

fn run_interactive(board: &mut ProjectBoard, input: impl BufRead) -> Result<()> {
    let mut notifier = StderrNotifier;
    let mut lines = input.lines();
    let stdout = std::io::stdout();

    'form: loop {
        for field in FormField::ALL {
            {
                let mut out = stdout.lock();
                write!(out, "{field}: ")?;
                out.flush()?;
            }
            let Some(line) = lines.next() else {
                break 'form;
            };
            let line = line?;
            // An empty line keeps the value retained from a rejected submit.
            if !line.is_empty() {
                board.input_mut().set_field(field, line);
            }
        }

        match board.submit(&mut notifier) {
            Ok(_) => print_active(board),
            Err(SubmitError::InvalidInput { .. }) => {}
            Err(err) => return Err(err.into()),
        }
    }
    println!();
    Ok(())
}

fn print_active(board: &ProjectBoard) {
    println!("{}", ProjectStatus::Active.heading());
    for project in board.active_projects() {
        println!("- {} ({} people)", project.title, project.people);
    }
}

fn write_output(out: Option<&Path>, content: &str) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}
