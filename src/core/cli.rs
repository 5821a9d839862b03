//! Command-line driver
//!
//! `pass-variants <input_file> <output_file>`: no flags, no environment
//! variables. Progress goes to stdout; errors are returned to `main`.

use std::path::{Path, PathBuf};

use crate::core::error::WordlistError;
use crate::core::generator::VariationGenerator;
use crate::core::wordlist::{self, BatchReport};

const DEFAULT_PROGRAM_NAME: &str = "pass-variants";

/// Input and output paths taken from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Invocation {
    /// Parses `argv`, including the program name in position 0
    pub fn from_args(args: &[String]) -> Result<Self, WordlistError> {
        match args {
            [_, input, output] => Ok(Self {
                input: PathBuf::from(input),
                output: PathBuf::from(output),
            }),
            _ => Err(WordlistError::Usage {
                program: args
                    .first()
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string()),
            }),
        }
    }
}

// ============================================================================
// GENERATE COMMAND
// ============================================================================

/// Reads usernames, builds the wordlist and writes it out
pub fn cmd_generate(input: &Path, output: &Path) -> Result<BatchReport, WordlistError> {
    let usernames = wordlist::load_usernames(input)?;
    println!(
        "Loaded {} username(s) from {}",
        usernames.len(),
        input.display()
    );

    let generator = VariationGenerator::default();
    let report = wordlist::build_wordlist(&generator, &usernames);
    for entry in &report.usernames {
        println!(
            "Generated {} variations for: {}",
            entry.variations, entry.username
        );
    }

    wordlist::write_wordlist(output, &report.variations)?;

    println!();
    println!(
        "Total unique variations generated: {}",
        report.total_unique()
    );
    println!("✅ Results written to: {}", output.display());

    Ok(report)
}

/// Entry point used by the binary
pub fn run(args: &[String]) -> Result<(), WordlistError> {
    let invocation = Invocation::from_args(args)?;
    cmd_generate(&invocation.input, &invocation.output)?;
    Ok(())
}
