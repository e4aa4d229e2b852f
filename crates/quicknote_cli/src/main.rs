//! Interactive terminal host for the QuickNote board.
//!
//! # Responsibility
//! - Own the single `NoteBoard` for this process.
//! - Turn typed lines into submit / key / delete triggers.

mod command;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use command::{parse_line, Command};
use log::info;
use quicknote_core::{init_logging, logging_status, Key, LogConfig, NoteBoard, Trigger};
use std::io::{self, BufRead, IsTerminal, Write};
use terminal::TerminalSurface;

const HELP: &str = "\
type a note and press Enter to add it
  /add [text]    press the add button (with the current or given text)
  /delete <n>    delete entry number n
  /list          show all notes
  /quit          exit (EOF also exits)
  //text         add a note that starts with '/'";

#[derive(Parser, Debug)]
#[command(name = "quicknote", version, about = "Minimal note-taking widget for the terminal")]
struct Cli {
    /// Log level: trace|debug|info|warn|error [env: QUICKNOTE_LOG_LEVEL]
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files [env: QUICKNOTE_LOG_DIR]
    #[arg(long)]
    log_dir: Option<String>,

    /// Print the remaining notes as JSON on exit
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = LogConfig::resolve(cli.log_level.as_deref(), cli.log_dir.as_deref())
        .context("invalid logging configuration")?;
    init_logging(&config).context("failed to initialize logging")?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let mut board = NoteBoard::new(TerminalSurface::new(io::stdout()));
    if interactive {
        board.surface_mut().say(&help_text());
    }

    run_session(stdin.lock(), &mut board, interactive)?;
    info!(
        "event=session_end module=cli status=ok remaining={}",
        board.notes().len()
    );

    if cli.json {
        let snapshot = serde_json::to_string_pretty(board.notes().as_slice())
            .context("failed to serialize notes")?;
        println!("{snapshot}");
    }
    Ok(())
}

/// Feeds every input line to the board until `/quit` or EOF.
fn run_session<R: BufRead, W: Write>(
    mut input: R,
    board: &mut NoteBoard<TerminalSurface<W>>,
    interactive: bool,
) -> Result<()> {
    let mut buf = Vec::new();
    loop {
        if interactive {
            board.surface_mut().prompt();
        }
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .context("failed to read input")?;
        if read == 0 {
            break;
        }
        // Arbitrary bytes are accepted; invalid UTF-8 becomes U+FFFD.
        let line = String::from_utf8_lossy(&buf);

        let keep_going = apply_line(board, &line);
        if let Some(err) = board.surface_mut().take_error() {
            return Err(err).context("failed to write to terminal");
        }
        if !keep_going {
            break;
        }
    }
    Ok(())
}

fn help_text() -> String {
    let logging = match logging_status() {
        Some(config) => match config.log_dir {
            Some(dir) => format!("level={} log_dir={}", config.level, dir.display()),
            None => format!("level={} log_dir=stderr", config.level),
        },
        None => "off".to_string(),
    };
    format!("{HELP}\nlogging: {logging}")
}

/// Applies one typed line; returns `false` on `/quit`.
fn apply_line<W: Write>(board: &mut NoteBoard<TerminalSurface<W>>, line: &str) -> bool {
    let command = match parse_line(line) {
        Ok(command) => command,
        Err(err) => {
            board.surface_mut().say(&err.to_string());
            return true;
        }
    };

    match command {
        Command::Enter(text) => {
            board.set_input(text);
            board.dispatch(Trigger::KeyPress(Key::Enter));
        }
        Command::Add(text) => {
            if let Some(text) = text {
                board.set_input(text);
            }
            board.dispatch(Trigger::Submit);
        }
        Command::Delete(number) => match board.surface().delete_trigger(number) {
            Some(trigger) => {
                board.dispatch(Trigger::Delete(trigger));
            }
            None => {
                let count = board.surface().entry_count();
                board
                    .surface_mut()
                    .say(&format!("no entry #{number} (showing {count})"));
            }
        },
        Command::List => board.surface_mut().redraw(),
        Command::Help => board.surface_mut().say(&help_text()),
        Command::Quit => return false,
    }
    true
}
