//! Numeric Core Decoder - CLI
//!
//! Decodes a text file word by word, reducing each group of four letters to
//! its numeric core.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::debug;
use numeric_core::{
    commands::{DecodeRequest, OutputMode, analyze_word, run_decode},
    core::{RemainderPolicy, SearchSpace},
    decoder::{DEFAULT_PLACEHOLDER, DecodeConfig},
    output::{print_analysis_result, print_decode_result},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "numeric_core",
    about = "Decode words by reducing each group of four letters to its numeric core",
    version,
    author,
    subcommand_negates_reqs = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input file: one line of whitespace-separated words per output line
    #[arg(required = true)]
    input: Option<PathBuf>,

    /// Show the letter-to-number conversion and winning operators per group
    #[arg(short, long)]
    debug: bool,

    /// Show a progress bar on stderr while decoding
    #[arg(short, long)]
    progress: bool,

    #[command(flatten)]
    decode: DecodeArgs,
}

#[derive(Args)]
struct DecodeArgs {
    /// Let each operator slot repeat an operator (27 assignments instead of 6)
    #[arg(long, global = true)]
    repeat_ops: bool,

    /// What to do with letters left over after the last group of four
    #[arg(long, global = true, value_enum, default_value_t = RemainderArg::Error)]
    remainder: RemainderArg,

    /// Drop characters outside A-Z instead of failing
    #[arg(long, global = true)]
    skip_non_letters: bool,

    /// Write this character for groups with no numeric core instead of failing
    #[arg(long, global = true, value_name = "CHAR")]
    placeholder: Option<char>,

    /// Shorthand for --remainder drop --skip-non-letters --placeholder '?'
    #[arg(long, global = true)]
    lenient: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum RemainderArg {
    /// Fail the word
    Error,
    /// Ignore the trailing letters
    Drop,
}

impl From<RemainderArg> for RemainderPolicy {
    fn from(arg: RemainderArg) -> Self {
        match arg {
            RemainderArg::Error => Self::Error,
            RemainderArg::Drop => Self::Drop,
        }
    }
}

impl DecodeArgs {
    fn config(&self) -> DecodeConfig {
        let base = if self.lenient {
            DecodeConfig::lenient()
        } else {
            DecodeConfig::new().with_remainder(self.remainder.into())
        };

        let search = if self.repeat_ops {
            SearchSpace::WithRepetition
        } else {
            SearchSpace::Permutations
        };

        DecodeConfig {
            skip_non_letters: base.skip_non_letters || self.skip_non_letters,
            placeholder: self.placeholder.or(base.placeholder),
            ..base.with_search(search)
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show every operator assignment tried for each group of a word
    Analyze {
        /// Word to analyze
        word: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.decode.no_color {
        colored::control::set_override(false);
    }

    let config = cli.decode.config();
    debug!("Decode config: {config:?}");

    match cli.command {
        Some(Commands::Analyze { word }) => run_analyze_command(&word, &config),
        None => {
            let input = cli.input.context("missing input file")?;
            run_decode_command(input, config, cli.debug, cli.progress)
        }
    }
}

fn run_decode_command(
    input: PathBuf,
    config: DecodeConfig,
    debug: bool,
    show_progress: bool,
) -> Result<()> {
    let request = DecodeRequest {
        input,
        config,
        mode: if debug {
            OutputMode::Debug
        } else {
            OutputMode::Simple
        },
        show_progress,
    };

    let result = run_decode(&request)
        .with_context(|| format!("failed to decode {}", request.input.display()))?;
    print_decode_result(&result).context("failed to write output")?;
    Ok(())
}

fn run_analyze_command(word: &str, config: &DecodeConfig) -> Result<()> {
    let result = analyze_word(word, config)?;
    print_analysis_result(&result, config.placeholder.unwrap_or(DEFAULT_PLACEHOLDER));
    Ok(())
}
