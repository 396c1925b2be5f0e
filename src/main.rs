// fxlex - A lexical scanner for the fx drawing-macro language
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! fxlex CLI
//!
//! Dumps the token stream of fx source files.

use clap::Parser;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use fxlex::{format_error, CharSource, Lexer, LexerConfig, ReaderSource, TokenKind};

/// fxlex - token dump for fx source files
#[derive(Parser, Debug)]
#[command(name = "fxlex")]
#[command(version)]
#[command(about = "Print the tokens of fx source files")]
#[command(long_about = r#"
fxlex reads fx source files and prints one token per line in the form

  file:line  {"lexeme",Kind,value}

With no files, standard input is read.

Example usage:
  fxlex shapes.fx
  fxlex shapes.fx --recover --sync ';}'
  cat shapes.fx | fxlex -v
"#)]
struct Cli {
    /// Source files to scan (.fx). Reads stdin when omitted.
    source_files: Vec<PathBuf>,

    /// Keep scanning after a lexical error by skipping to a sync token
    #[arg(short, long)]
    recover: bool,

    /// Characters whose tokens end error recovery
    #[arg(long, default_value = ";", value_parser = parse_sync_kinds)]
    sync: SyncKinds,

    /// Enable verbose output (logs skipped tokens)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone)]
struct SyncKinds(Vec<TokenKind>);

fn parse_sync_kinds(s: &str) -> Result<SyncKinds, String> {
    let kinds = s
        .chars()
        .map(|c| TokenKind::from_char(c).ok_or_else(|| format!("'{}' is not a token", c)))
        .collect::<Result<Vec<_>, _>>()?;
    if kinds.is_empty() {
        return Err("at least one sync character is required".to_string());
    }
    Ok(SyncKinds(kinds))
}

/// How a scan ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Clean,
    LexicalErrors,
    Unreadable,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = LexerConfig::new().with_trace_skipped(cli.verbose);
    let mut outcome = Outcome::Clean;

    if cli.source_files.is_empty() {
        let stdin = io::stdin();
        let mut lexer = Lexer::with_config(ReaderSource::new(stdin.lock()), "<stdin>", config);
        outcome = dump(&mut lexer, &cli, None);
    } else {
        for path in &cli.source_files {
            // The report context comes from the scanned bytes.
            let bytes = match fs::read(path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    eprintln!("Error: Cannot read {}: {}", path.display(), e);
                    return ExitCode::from(3);
                }
            };
            let mut lexer = Lexer::with_config(
                ReaderSource::new(bytes.as_slice()),
                path.display().to_string(),
                config.clone(),
            );
            let source = std::str::from_utf8(&bytes).ok();
            let result = dump(&mut lexer, &cli, source);
            if result != Outcome::Clean {
                outcome = result;
            }
            if outcome == Outcome::Unreadable {
                break;
            }
        }
    }

    match outcome {
        Outcome::Clean => ExitCode::SUCCESS,
        Outcome::LexicalErrors => ExitCode::from(1),
        Outcome::Unreadable => ExitCode::from(3),
    }
}

/// Print every token of one source.
fn dump<S: CharSource>(lexer: &mut Lexer<S>, cli: &Cli, source: Option<&str>) -> Outcome {
    let mut outcome = Outcome::Clean;

    loop {
        match lexer.next_token() {
            Ok(token) if token.is_eof() => break,
            Ok(token) => println!("{}:{}\t{}", lexer.file_name(), lexer.line(), token),
            Err(e) if e.is_fatal() => {
                eprint!("{}", format_error(&e, source));
                return Outcome::Unreadable;
            }
            Err(e) => {
                eprint!("{}", format_error(&e, source));
                outcome = Outcome::LexicalErrors;
                if !cli.recover {
                    break;
                }
                if let Err(e) = lexer.skip_until(&cli.sync.0) {
                    eprint!("{}", format_error(&e, source));
                    return Outcome::Unreadable;
                }
            }
        }
    }

    outcome
}
