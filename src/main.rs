use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use leecode::{decode, encode, reference_table, Result};
use log::{info, warn};

#[derive(Parser)]
#[command(name = "leecode", version, about = "Encode and decode text with the Leecode two-digit codec")]
struct Cli {
    /// Log status lines (same as RUST_LOG=info)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Turn text into Leecode digits
    Encode(InputArgs),
    /// Turn Leecode digits back into text
    Decode(InputArgs),
    /// Print the character -> code table
    Reference {
        /// Add a description column
        #[arg(long)]
        describe: bool,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Input given inline; read from --file or stdin when omitted
    input: Option<String>,

    /// Read input from a file
    #[arg(short, long, conflicts_with = "input")]
    file: Option<PathBuf>,

    /// Do not trim surrounding whitespace from the input
    #[arg(long)]
    keep_whitespace: bool,
}

impl InputArgs {
    fn read(&self) -> Result<String> {
        let raw = match (&self.input, &self.file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => fs::read_to_string(path)?,
            (None, None) => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };

        Ok(prepare_input(raw, self.keep_whitespace))
    }
}

/// Strips surrounding whitespace unless the caller asked to keep it.
fn prepare_input(raw: String, keep_whitespace: bool) -> String {
    if keep_whitespace {
        raw
    } else {
        raw.trim().to_string()
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Encode(args) => {
            let text = args.read()?;
            if text.is_empty() {
                warn!("Nothing to encode");
            }
            let encoded = encode(&text)?;
            info!("Encoded: {} chars → {} digits", text.chars().count(), encoded.len());
            println!("{}", encoded);
        }
        Command::Decode(args) => {
            let code = args.read()?;
            if code.is_empty() {
                warn!("Nothing to decode");
            }
            let decoded = decode(&code)?;
            let digits = code.bytes().filter(u8::is_ascii_digit).count();
            info!("Decoded: {} digits → {} chars", digits, decoded.chars().count());
            println!("{}", decoded);
        }
        Command::Reference { describe } => {
            println!("Character → Code Mapping:\n");
            for entry in reference_table() {
                if describe {
                    println!("{:<24} {}", entry.to_string(), entry.description());
                } else {
                    println!("{}", entry);
                }
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    if let Err(e) = run(cli.command) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_is_trimmed_by_default() {
        assert_eq!(prepare_input("  Hi there\n".to_string(), false), "Hi there");
        assert_eq!(prepare_input("\t \r\n".to_string(), false), "");
    }

    #[test]
    fn keep_whitespace_passes_input_through() {
        assert_eq!(prepare_input("  Hi\n".to_string(), true), "  Hi\n");
    }

    #[test]
    fn positional_input_wins_over_stdin() {
        let args = InputArgs {
            input: Some(" 07 34 ".to_string()),
            file: None,
            keep_whitespace: false,
        };
        assert_eq!(args.read().expect("inline input"), "07 34");
    }
}
