use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use word_finder::format::{format_words, DEFAULT_WIDTH};
use word_finder::{Dictionary, DictionaryError, GenerateError, GeneratorConfig, WordGenerator};

/// Find every dictionary word that can be spelled from a handful of letters.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Letters to build words from (A-Z, case-insensitive)
    letters: String,

    /// Word list file, one word per line (defaults to the built-in list)
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Maximum number of input letters (cannot exceed the built-in cap)
    #[arg(short = 'm', long, default_value_t = word_finder::MAX_INPUT_LENGTH)]
    max_length: usize,

    /// Print one word per line with no summary
    #[arg(long)]
    plain: bool,
}

enum Failure {
    Dictionary(DictionaryError),
    Generate(GenerateError),
}

fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORD_FINDER_DEBUG").is_ok();
    word_finder::logging::init_logger(debug_enabled);

    match try_main(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure::Generate(e)) if e.is_validation() => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
        Err(Failure::Generate(e)) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
        Err(Failure::Dictionary(e)) => {
            eprintln!("Error [{}]: {e}", e.code());
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> Result<(), Failure> {
    let loaded;
    let dictionary = match &cli.dictionary {
        Some(path) => {
            loaded = Dictionary::load_from_path(path).map_err(Failure::Dictionary)?;
            &loaded
        }
        None => Dictionary::embedded(),
    };

    let config = GeneratorConfig::default().with_max_input_length(cli.max_length);
    let words = WordGenerator::new(dictionary)
        .with_config(config)
        .generate(&cli.letters)
        .map_err(Failure::Generate)?;

    if cli.plain {
        for word in &words {
            println!("{word}");
        }
    } else {
        println!("{}", format_words(&words, DEFAULT_WIDTH));
    }
    Ok(())
}
