//! VoxelDash Console CLI
//!
//! Reads server console output from stdin or a file and writes one record
//! per line: either the plain text with escape sequences stripped, or a
//! JSON console-line record with parsed style segments. Useful for
//! inspecting what the panel's console view will receive.

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process;

use tracing::{debug, info};

use voxeldash_console::{strip, ConsoleLine, EmptySequenceMode, Error, Result, StyleParser};

/// Output format for processed lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    /// JSON console-line records with style segments
    Json,
    /// Plain text with escape sequences removed
    Strip,
}

/// Application configuration
#[derive(Debug)]
struct AppArgs {
    /// Input file path (stdin when absent)
    input_path: Option<PathBuf>,
    /// Output format
    output_mode: OutputMode,
    /// Interpret `ESC[m` as a no-op instead of a reset
    empty_noop: bool,
    /// Enable debug mode
    debug: bool,
}

impl Default for AppArgs {
    fn default() -> Self {
        Self {
            input_path: None,
            output_mode: OutputMode::Json,
            empty_noop: false,
            debug: false,
        }
    }
}

impl AppArgs {
    /// Parse command line arguments
    fn parse() -> Result<Self> {
        let args: Vec<String> = env::args().collect();
        let mut app_args = AppArgs::default();

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--json" | "-j" => {
                    app_args.output_mode = OutputMode::Json;
                }
                "--strip" | "-s" => {
                    app_args.output_mode = OutputMode::Strip;
                }
                "--empty-noop" => {
                    app_args.empty_noop = true;
                }
                "--debug" | "-d" => {
                    app_args.debug = true;
                }
                "--help" | "-?" => {
                    print_help();
                    process::exit(0);
                }
                "--version" | "-v" => {
                    println!("voxeldash-console v{}", env!("CARGO_PKG_VERSION"));
                    process::exit(0);
                }
                arg if arg.starts_with('-') => {
                    return Err(Error::InvalidOption {
                        option: arg.to_string(),
                        reason: "unknown option".to_string(),
                    });
                }
                _ => {
                    app_args.input_path = Some(PathBuf::from(&args[i]));
                }
            }
            i += 1;
        }

        Ok(app_args)
    }
}

/// Print help information
fn print_help() {
    println!("VoxelDash Console - ANSI styling inspector for server console output");
    println!();
    println!("USAGE:");
    println!("    voxeldash-console [OPTIONS] [FILE]");
    println!();
    println!("Reads console output from FILE (or stdin) and writes one record per line.");
    println!();
    println!("OPTIONS:");
    println!("    -j, --json         Output JSON console-line records (default)");
    println!("    -s, --strip        Output plain text with escape sequences removed");
    println!("        --empty-noop   Treat ESC[m as a no-op instead of a reset");
    println!("    -d, --debug        Enable debug mode");
    println!("    -?, --help         Print this help message");
    println!("    -v, --version      Print version information");
    println!();
    println!("ENVIRONMENT:");
    println!("    VOXELDASH_DEBUG    Enable debug mode (1 or true)");
    println!("    RUST_LOG           Set logging level (error, warn, info, debug, trace)");
}

fn main() -> Result<()> {
    // Parse command line arguments first
    let args = AppArgs::parse().unwrap_or_else(|e| {
        eprintln!("Failed to parse arguments: {}", e);
        print_help();
        process::exit(1);
    });

    // Initialize logging based on debug flag
    let log_level = if args.debug
        || env::var("VOXELDASH_DEBUG").map_or(false, |v| v == "1" || v.to_lowercase() == "true")
    {
        "debug"
    } else {
        "info"
    };

    let env_filter = env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from(env_filter))
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    debug!("Parsed arguments: {:?}", args);

    let empty_mode = if args.empty_noop {
        EmptySequenceMode::Ignore
    } else {
        EmptySequenceMode::Reset
    };
    let parser = StyleParser::with_empty_sequence_mode(empty_mode);

    match &args.input_path {
        Some(path) => {
            debug!("Reading console output from: {}", path.display());
            let file = File::open(path).map_err(|e| Error::InputReadFailed {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            process_lines(BufReader::new(file), &parser, args.output_mode)?;
        }
        None => {
            debug!("Reading console output from stdin");
            let stdin = io::stdin();
            process_lines(stdin.lock(), &parser, args.output_mode)?;
        }
    }

    Ok(())
}

/// Process console lines from a reader and write records to stdout
fn process_lines<R: BufRead>(reader: R, parser: &StyleParser, mode: OutputMode) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut line_count = 0;

    for (line_number, line) in reader.lines().enumerate() {
        let raw = line?;

        match mode {
            OutputMode::Strip => {
                writeln!(out, "{}", strip(&raw))?;
            }
            OutputMode::Json => {
                let mut console_line = ConsoleLine::new(raw, line_number);
                console_line.parse_styles(parser);
                writeln!(out, "{}", serde_json::to_string(&console_line)?)?;
            }
        }

        line_count += 1;
    }

    info!("Processed {} console lines", line_count);
    Ok(())
}
