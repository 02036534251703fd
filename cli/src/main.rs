//! docsum CLI - document summarization tool

mod shell;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docsum::summarize::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use docsum::workflow::{folder_notice, BatchEvent, Notice, NoticeLevel, Session};
use docsum::{EngineConfig, Error, HttpSummarizer};

#[derive(Parser)]
#[command(name = "docsum")]
#[command(version)]
#[command(about = "Summarize TXT, DOCX and PDF documents with a pretrained model", long_about = None)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Settings for the summarization endpoint.
#[derive(Args)]
struct EngineArgs {
    /// Inference endpoint base URL
    #[arg(long, global = true, env = "DOCSUM_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Summarization model id
    #[arg(long, global = true, env = "DOCSUM_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// API token sent as a bearer token
    #[arg(long, global = true, env = "HF_API_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Request timeout in seconds (waits indefinitely if not set)
    #[arg(long, global = true, env = "DOCSUM_TIMEOUT")]
    timeout: Option<u64>,
}

impl From<EngineArgs> for EngineConfig {
    fn from(args: EngineArgs) -> Self {
        let mut config = EngineConfig::new()
            .with_endpoint(args.endpoint)
            .with_model(args.model);
        if let Some(token) = args.token {
            config = config.with_api_token(token);
        }
        if let Some(secs) = args.timeout {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a single document
    #[command(alias = "sum")]
    Summarize {
        /// Input document (.txt, .docx or .pdf)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Save the summary (.txt or .docx; stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Summarize every supported document in a folder
    Batch {
        /// Folder to scan (subfolders are not visited)
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Save the combined summaries (.txt or .docx)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Print the batch report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Extract the text of a document without summarizing
    Extract {
        /// Input document (.txt, .docx or .pdf)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Interactive session: load, summarize and save step by step
    Shell,

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let engine = cli.engine;

    let result = match cli.command {
        Commands::Summarize { input, output } => {
            new_session(engine).and_then(|s| cmd_summarize(s, &input, output.as_deref()))
        }
        Commands::Batch {
            input,
            output,
            json,
        } => new_session(engine).and_then(|s| cmd_batch(s, &input, output.as_deref(), json)),
        Commands::Extract { input, output } => cmd_extract(&input, output.as_deref()),
        Commands::Shell => new_session(engine).and_then(shell::run),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        print_notice(&Notice::from_error(&e));
        if !e.is_informational() {
            std::process::exit(1);
        }
    }
}

fn new_session(args: EngineArgs) -> docsum::Result<Session> {
    let engine = HttpSummarizer::new(args.into())?;
    log::debug!("Using model {}", engine.config().url());
    Ok(Session::new(Arc::new(engine)))
}

/// Print a notice in the color of its level.
pub(crate) fn print_notice(notice: &Notice) {
    let title = match notice.level {
        NoticeLevel::Info => notice.title.green().bold(),
        NoticeLevel::Warning => notice.title.yellow().bold(),
        NoticeLevel::Error => notice.title.red().bold(),
    };
    if notice.level == NoticeLevel::Error {
        eprintln!("{}: {}", title, notice.message);
    } else {
        println!("{}: {}", title, notice.message);
    }
}

pub(crate) fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

/// Save the session's summary, appending the loaded file's extension when
/// `output` has none.
fn save(session: &Session, output: &Path) -> docsum::Result<()> {
    let target = session.resolve_save_path(output);
    let notice = session.save_summary(&target)?;
    print_notice(&notice);
    println!("{} {}", "Saved to".green(), target.display());
    Ok(())
}

fn cmd_summarize(mut session: Session, input: &Path, output: Option<&Path>) -> docsum::Result<()> {
    session.load_file(input)?;

    let pb = spinner(&format!("Summarizing {}...", input.display()));
    let result = session.generate_summary();
    pb.finish_and_clear();
    result?;

    match output {
        Some(path) => save(&session, path),
        None => {
            println!("{}", session.output());
            Ok(())
        }
    }
}

pub(crate) fn run_batch(session: &mut Session, input: &Path) -> docsum::Result<Notice> {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let result = session.load_folder_with(input, |event| match event {
        BatchEvent::Started { total } => pb.set_length(*total as u64),
        BatchEvent::Processing { name } => pb.set_message(name.clone()),
        BatchEvent::Processed { .. } => pb.inc(1),
        BatchEvent::Skipped { name, reason } => {
            pb.println(format!("{} {}: {}", "Skipped".yellow(), name, reason));
            pb.inc(1);
        }
    });
    pb.finish_and_clear();

    result.map(|report| folder_notice(&report))
}

fn cmd_batch(
    mut session: Session,
    input: &Path,
    output: Option<&Path>,
    json: bool,
) -> docsum::Result<()> {
    if json {
        let report = session.load_folder(input)?;
        println!("{}", report.to_json()?);
    } else {
        let notice = run_batch(&mut session, input)?;
        if output.is_none() {
            print!("{}", session.output());
        }
        print_notice(&notice);
    }

    if let Some(path) = output {
        save(&session, path)?;
    }
    Ok(())
}

fn cmd_extract(input: &Path, output: Option<&Path>) -> docsum::Result<()> {
    let text = docsum::read_file(input)?;

    if let Some(path) = output {
        fs::write(path, &text).map_err(Error::from)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", text);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docsum".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Document summarization tool");
    println!();
    println!("Default model: {}", DEFAULT_MODEL.dimmed());
    println!("License: MIT");
}
