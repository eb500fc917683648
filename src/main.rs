use anyhow::{Context, Result};
use bkspell::cli::output::{self, OutputFormat};
use bkspell::config::Overrides;
use bkspell::{dict, CheckError, Config, SpellChecker};
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::{generate, Shell};
use rayon::prelude::*;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "bkspell")]
#[command(version, about = "Fuzzy spell checking backed by a BK-tree", long_about = None)]
struct Cli {
    /// Files to check
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Exit with code 0 even if errors are found
    #[arg(long)]
    no_fail: bool,

    /// Language/dictionary to use (e.g., en_US, en_GB)
    #[arg(short, long, global = true)]
    language: Option<String>,

    /// Word list to use instead of the installed dictionary
    #[arg(short, long, global = true, env = "BKSPELL_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Maximum edit distance for suggestions
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    tolerance: Option<i32>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Pattern to ignore (regex)
    #[arg(long)]
    ignore_pattern: Vec<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Look up a single word and list corrections
    Suggest {
        /// Word to look up
        word: String,
    },
    /// Analyze the word ending at a cursor position in a file
    Cursor {
        /// File to read
        file: PathBuf,
        /// Zero-based character offset of the cursor
        #[arg(long)]
        offset: usize,
    },
    /// Dictionary management
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Parser, Debug)]
enum DictCommands {
    /// List installed dictionaries
    List,
    /// Download a dictionary
    Download {
        /// Language code (e.g., en_US, en_GB)
        language: String,
    },
    /// Update all dictionaries
    Update,
    /// Show dictionary info
    Info {
        /// Language code
        language: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            let unavailable = matches!(
                e.downcast_ref::<CheckError>(),
                Some(CheckError::DictionaryUnavailable { .. })
            );
            process::exit(if unavailable { 2 } else { 1 });
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "bkspell", &mut io::stdout());
        return Ok(0);
    }

    let colored = !cli.no_color;
    if !colored {
        colored::control::set_override(false);
    }

    let overrides = Overrides {
        language: cli.language.clone(),
        dictionary: cli.dictionary.clone(),
        tolerance: cli.tolerance,
        ignore_patterns: cli.ignore_pattern.clone(),
    };

    match cli.command {
        Some(Commands::Dict { action }) => {
            handle_dict(action)?;
            Ok(0)
        }
        Some(Commands::Suggest { word }) => {
            let checker = SpellChecker::new(&Config::load(overrides)?);
            let end = word.chars().count();
            let context = checker.cursor(&word, end)?;
            output::print_lookup(&context, colored, cli.format);
            Ok(0)
        }
        Some(Commands::Cursor { file, offset }) => {
            let checker = SpellChecker::new(&Config::load(overrides)?);
            let text = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read file: {}", file.display()))?;
            let context = checker.cursor(&text, offset)?;
            output::print_cursor_context(&file, offset, &context, colored, cli.format);
            Ok(0)
        }
        None => check_files(&cli.files, overrides, colored, cli.format, cli.no_fail),
    }
}

fn check_files(
    files: &[PathBuf],
    overrides: Overrides,
    colored: bool,
    format: OutputFormat,
    no_fail: bool,
) -> Result<i32> {
    if files.is_empty() {
        anyhow::bail!("No files specified. Use --help for usage information.");
    }

    let config = Config::load(overrides)?;
    let checker = SpellChecker::new(&config);

    let mut checked = Vec::new();
    for file in files {
        if file.exists() {
            checked.push(file.as_path());
        } else {
            eprintln!("Error: File not found: {}", file.display());
        }
    }

    // The index is read-only once loaded, so files can be checked in parallel.
    let results = checked
        .par_iter()
        .map(|file| checker.check(file).map(|result| (*file, result)))
        .collect::<Result<Vec<_>>>()?;

    output::print_results(&results, colored, format);

    let total_errors: usize = results.iter().map(|(_, r)| r.error_count).sum();
    if format == OutputFormat::Text {
        output::print_check_summary(total_errors, &checked, colored);
    }

    if total_errors > 0 && !no_fail {
        return Ok(1);
    }
    Ok(0)
}

fn handle_dict(action: DictCommands) -> Result<()> {
    match action {
        DictCommands::List => dict::manager::list_dictionaries(),
        DictCommands::Download { language } => dict::manager::download_dictionary(&language),
        DictCommands::Update => dict::manager::update_dictionaries(),
        DictCommands::Info { language } => dict::manager::show_info(&language),
    }
}
