//! termfolio - line-oriented front end for the portfolio terminal
//!
//! Reads lines from stdin and feeds them to a terminal session, printing
//! each new entry as it is recorded. Tab and ArrowUp have no meaning on a
//! plain line stream, so they are spelled out:
//!
//! - a line ending in a tab completes the text before it
//! - a line consisting of `!!` recalls the previous input
//! - an empty line submits whatever completion or recall left pending

use std::env;
use std::io::{IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, error, info, warn};

use termfolio::{
    create_session, load_config, ExecutedEntry, SessionEvent, SystemClipboard, TerminalSession,
};

/// Command line options
#[derive(Debug, Default)]
struct AppArgs {
    /// Configuration file path
    config_path: Option<PathBuf>,
    /// Enable debug logging
    debug: bool,
    /// Copy the scrollback to the system clipboard on exit
    copy_on_exit: bool,
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> anyhow::Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    if i + 1 < args.len() {
                        app_args.config_path = Some(PathBuf::from(&args[i + 1]));
                        i += 1;
                    } else {
                        bail!("Missing config file path");
                    }
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--copy" => {
                    app_args.copy_on_exit = true;
                }
                "--help" | "-?" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("termfolio v{}", termfolio::VERSION);
                    process::exit(0);
                }
                arg => bail!("Unknown option: {}", arg),
            }
            i += 1;
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("termfolio - interactive portfolio terminal");
    println!();
    println!("USAGE:");
    println!("    termfolio [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <PATH>    Load configuration from PATH");
    println!("    -d, --debug            Enable debug logging");
    println!("        --copy             Copy the scrollback to the clipboard on exit");
    println!("    -?, --help             Print this help");
    println!("    -v, --version          Print version");
    println!();
    println!("INPUT:");
    println!("    <text>                 Run a command");
    println!("    <partial><TAB>         Complete a command name");
    println!("    !!                     Recall the previous input");
    println!("    <empty line>           Run the completed or recalled input");
    println!();
    println!("ENVIRONMENT:");
    println!("    TERMFOLIO_DEBUG        Enable debug mode (1 or true)");
    println!("    RUST_LOG               Set logging level (error, warn, info, debug, trace)");
}

fn init_logging(debug: bool) {
    let debug = debug
        || env::var("TERMFOLIO_DEBUG").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"));
    let log_level = if debug { "debug" } else { "info" };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(env_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

fn render_entry(prompt: &str, entry: &ExecutedEntry) {
    println!("{} {}", prompt, entry.input_line());
    for line in entry.output_lines() {
        println!("  {}", line);
    }
}

/// Attach a stdout renderer to `session`
fn attach_renderer(session: &mut TerminalSession) {
    let prompt = session.prompt().to_string();
    let interactive = std::io::stdout().is_terminal();

    session.subscribe(move |event: &SessionEvent| match event {
        SessionEvent::EntryAppended { entry } => render_entry(&prompt, entry),
        SessionEvent::HistoryCleared => {
            if interactive {
                print!("\x1b[2J\x1b[H");
                let _ = std::io::stdout().flush();
            }
        }
        SessionEvent::PendingInputChanged { .. } | SessionEvent::Copied { .. } => {}
    });
}

/// Feed stdin to the session until EOF
async fn run(session: &mut TerminalSession) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if let Some(partial) = line.strip_suffix('\t') {
            session.set_pending_input(partial);
            if session.autocomplete() {
                println!("{} {}", session.prompt(), session.pending_input());
            }
        } else if line == "!!" {
            if session.recall() {
                println!("{} {}", session.prompt(), session.pending_input());
            }
        } else if line.is_empty() {
            session.submit_pending();
        } else {
            session.submit(&line);
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("{}", e);
        print_help();
        process::exit(1);
    });

    init_logging(args.debug);
    info!("Starting termfolio v{}", termfolio::VERSION);
    debug!("Arguments: {:?}", args);

    let config_path = args
        .config_path
        .clone()
        .or_else(|| env::var("TERMFOLIO_CONFIG").ok().map(PathBuf::from));
    let config = load_config(config_path.as_deref())?;

    let mut session = create_session(&config)?;
    session.start_timers()?;

    for entry in session.history() {
        render_entry(session.prompt(), entry);
    }
    attach_renderer(&mut session);

    if let Err(e) = run(&mut session).await {
        error!("Session failed: {:#}", e);
    }

    if args.copy_on_exit {
        match SystemClipboard::new() {
            Ok(clipboard) => {
                // The process exits right after this, so hold the contents
                // until another application has taken them.
                let mut clipboard = clipboard.wait_until_taken();
                let text =
                    tokio::task::block_in_place(|| session.export_to(&mut clipboard))?;
                info!("Copied {} bytes of scrollback", text.len());
            }
            Err(e) => warn!("{}", e),
        }
    }

    let stats = session.stats();
    info!(
        "Available commands: {}, entries in scrollback: {}",
        stats.available_commands, stats.executed_entries
    );
    session.shutdown();
    Ok(())
}
