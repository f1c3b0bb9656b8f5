//! docshape CLI - rich-text document structure checker

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use docshape::{Error, ValidateOptions, Validator};

#[derive(Parser)]
#[command(name = "docshape")]
#[command(version)]
#[command(about = "Check rich-text document JSON against the node grammar", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one or more document files
    Check {
        /// Input JSON files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        /// Reject documents nested deeper than this
        #[arg(long, value_name = "N", env = "DOCSHAPE_MAX_DEPTH")]
        max_depth: Option<usize>,

        /// Only report failures
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show node counts for a valid document
    Stats {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output counts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Check {
            inputs,
            max_depth,
            quiet,
        }) => cmd_check(&inputs, max_depth, quiet),
        Some(Commands::Stats { input, json }) => cmd_stats(&input, json),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            println!("{}", "Usage: docshape check <FILE>...".yellow());
            println!("       docshape --help for more information");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Result of checking a single file.
enum Outcome {
    Valid,
    Invalid(String),
    Unreadable(String),
}

fn check_file(validator: &Validator, path: &Path) -> Outcome {
    match validator.validate_file(path) {
        Ok(()) => Outcome::Valid,
        Err(Error::Validation(err)) => Outcome::Invalid(err.to_string()),
        Err(err) => Outcome::Unreadable(err.to_string()),
    }
}

fn cmd_check(
    inputs: &[PathBuf],
    max_depth: Option<usize>,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let options = match max_depth {
        Some(depth) => ValidateOptions::new().with_max_depth(depth),
        None => ValidateOptions::new(),
    };
    let validator = Validator::with_options(options);

    let mut failed = 0;
    for input in inputs {
        match check_file(&validator, input) {
            Outcome::Valid => {
                if !quiet {
                    println!("{} {}", "OK".green().bold(), input.display());
                }
            }
            Outcome::Invalid(message) => {
                failed += 1;
                println!("{} {}", "FAIL".red().bold(), input.display());
                println!("  {} {}", "└─".dimmed(), message);
            }
            Outcome::Unreadable(message) => {
                failed += 1;
                println!("{} {}", "ERROR".red().bold(), input.display());
                println!("  {} {}", "└─".dimmed(), message);
            }
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} documents failed", failed, inputs.len()).into());
    }
    Ok(())
}

fn cmd_stats(input: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let doc = Validator::new().decode_file(input)?;
    let stats = doc.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "Document Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Top-level blocks".bold(), doc.blocks.len());
    println!("{}: {}", "Blocks".bold(), stats.blocks);
    println!("{}: {}", "Links/relationships".bold(), stats.inline_containers);
    println!("{}: {}", "Text leaves".bold(), stats.texts);
    println!("{}: {}", "Total nodes".bold(), stats.total());
    println!("{}: {}", "Max depth".bold(), stats.max_depth);

    let text = doc.plain_text();
    println!("{}: {}", "Words".bold(), text.split_whitespace().count());
    println!("{}: {}", "Characters".bold(), text.chars().count());

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docshape".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Rich-text document structure checker");
    println!();
    println!("License: MIT");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_check_file_valid() {
        let file = write_temp(r#"[{"type":"paragraph","children":[{"text":"hi"}]}]"#);
        assert!(matches!(
            check_file(&Validator::new(), file.path()),
            Outcome::Valid
        ));
    }

    #[test]
    fn test_check_file_invalid_reports_path() {
        let file = write_temp(r#"[{"type":"paragraph","children":[{"text":"hi","bold":false}]}]"#);
        match check_file(&Validator::new(), file.path()) {
            Outcome::Invalid(message) => assert!(message.ends_with("at $[0].children[0].bold")),
            _ => panic!("expected invalid outcome"),
        }
    }

    #[test]
    fn test_check_file_malformed_json() {
        let file = write_temp("[{");
        assert!(matches!(
            check_file(&Validator::new(), file.path()),
            Outcome::Unreadable(_)
        ));
    }

    #[test]
    fn test_check_counts_failures() {
        let good = write_temp("[]");
        let bad = write_temp("{}");
        let inputs = vec![good.path().to_path_buf(), bad.path().to_path_buf()];
        let err = cmd_check(&inputs, None, true).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 documents failed");
        assert!(cmd_check(&inputs[..1], Some(4), true).is_ok());
    }
}
