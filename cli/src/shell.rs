//! Interactive session over stdin.
//!
//! Each line is one user action against a single [`Session`], so the
//! loaded-format default for `save` carries over between commands.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use colored::Colorize;

use docsum::workflow::{Action, Notice, Session};
use docsum::DocumentFormat;

use crate::{print_notice, run_batch, spinner};

/// File name used by `save` when no path is given.
const DEFAULT_SAVE_STEM: &str = "summary";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Load(PathBuf),
    Folder(PathBuf),
    Summarize,
    Save(Option<PathBuf>),
    Show(Pane),
    Clear,
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Input,
    Output,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let path = || {
        if rest.is_empty() {
            Err(format!("'{}' needs a path", word))
        } else {
            Ok(PathBuf::from(rest))
        }
    };

    match word {
        "load" | "open" => path().map(Command::Load),
        "folder" | "batch" => path().map(Command::Folder),
        "summarize" | "sum" => Ok(Command::Summarize),
        "save" => Ok(Command::Save((!rest.is_empty()).then(|| PathBuf::from(rest)))),
        "show" => match rest {
            "" | "output" => Ok(Command::Show(Pane::Output)),
            "input" => Ok(Command::Show(Pane::Input)),
            other => Err(format!("unknown pane '{}'", other)),
        },
        "clear" => Ok(Command::Clear),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command '{}' (try 'help')", other)),
    }
}

fn print_help() {
    println!("{}", "Commands".cyan().bold());
    println!("  load <file>     load a .txt, .docx or .pdf into the input pane");
    println!("  folder <dir>    summarize every supported file in a folder");
    println!("  summarize       summarize the input pane");
    println!("  save [file]     save the output pane (.txt or .docx)");
    println!("  show [input|output]");
    println!("  clear           empty the output pane");
    println!("  quit");
    println!();
    println!("{}", "Formats".cyan().bold());
    for format in DocumentFormat::ALL {
        println!("  .{:<14} {}", format.extension(), format.label());
    }
}

/// Run the interactive loop until `quit` or end of input.
pub fn run(mut session: Session) -> docsum::Result<()> {
    println!("{} (type 'help' for commands)", "docsum shell".cyan().bold());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", ">".green().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(msg) => {
                eprintln!("{}", msg.red());
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => print_help(),
            Command::Clear => session.clear_output(),
            Command::Show(Pane::Input) => println!("{}", session.input()),
            Command::Show(Pane::Output) => println!("{}", session.output()),
            Command::Load(path) => print_notice(&session.dispatch(Action::LoadFile(path))),
            Command::Summarize => {
                let pb = spinner("Summarizing...");
                let notice = session.dispatch(Action::GenerateSummary);
                pb.finish_and_clear();
                print_notice(&notice);
            }
            Command::Folder(dir) => {
                let notice = run_batch(&mut session, &dir)
                    .unwrap_or_else(|e| Notice::from_error(&e));
                print_notice(&notice);
            }
            Command::Save(path) => {
                let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_SAVE_STEM));
                let target = session.resolve_save_path(&path);
                print_notice(&session.dispatch(Action::SaveSummary(target)));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths_keep_spaces() {
        assert_eq!(
            parse_command("load  My Documents/report.docx ").unwrap(),
            Command::Load(PathBuf::from("My Documents/report.docx"))
        );
        assert_eq!(
            parse_command("folder ./inbox").unwrap(),
            Command::Folder(PathBuf::from("./inbox"))
        );
    }

    #[test]
    fn test_parse_save() {
        assert_eq!(parse_command("save").unwrap(), Command::Save(None));
        assert_eq!(
            parse_command("save out.txt").unwrap(),
            Command::Save(Some(PathBuf::from("out.txt")))
        );
    }

    #[test]
    fn test_parse_show() {
        assert_eq!(parse_command("show").unwrap(), Command::Show(Pane::Output));
        assert_eq!(parse_command("show input").unwrap(), Command::Show(Pane::Input));
        assert!(parse_command("show everything").is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("load").is_err());
        assert!(parse_command("dance").is_err());
        assert_eq!(parse_command("exit").unwrap(), Command::Quit);
    }
}
