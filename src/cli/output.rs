use crate::checker::service::CursorContext;
use crate::checker::suggestions::Suggestion;
use crate::CheckResult;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonError<'a> {
    file: String,
    line: usize,
    column: usize,
    word: &'a str,
    suggestions: &'a [String],
    context: &'a str,
}

#[derive(Debug, Serialize)]
struct JsonOutput<'a> {
    files_checked: usize,
    total_errors: usize,
    errors: Vec<JsonError<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonCursor<'a> {
    file: String,
    offset: usize,
    #[serde(flatten)]
    context: &'a CursorContext,
}

/// Render all results at once so JSON output stays a single document.
pub fn print_results(results: &[(&Path, CheckResult)], colored_output: bool, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for (file_path, result) in results {
                print_text_errors(file_path, result, colored_output);
            }
        }
        OutputFormat::Json => print_json(&json_results(results)),
    }
}

fn json_results<'a>(results: &'a [(&Path, CheckResult)]) -> JsonOutput<'a> {
    let errors = results
        .iter()
        .flat_map(|(file_path, result)| {
            result.errors.iter().map(move |e| JsonError {
                file: file_path.display().to_string(),
                line: e.line,
                column: e.column,
                word: &e.word,
                suggestions: &e.suggestions,
                context: &e.context,
            })
        })
        .collect::<Vec<_>>();

    JsonOutput {
        files_checked: results.len(),
        total_errors: errors.len(),
        errors,
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize output: {}", e),
    }
}

fn print_text_errors(file_path: &Path, result: &CheckResult, colored_output: bool) {
    if result.errors.is_empty() {
        return;
    }

    let file_name = file_path.display().to_string();

    if colored_output {
        println!("\n{}", file_name.bold().underline());
    } else {
        println!("\n{}", file_name);
    }

    for error in &result.errors {
        let line_info = format!("{}:{}", error.line, error.column);

        if colored_output {
            println!(
                "  {} {} {}",
                line_info.blue().bold(),
                error.word.red().bold(),
                format_context(&error.context, &error.word, colored_output)
            );
        } else {
            println!("  {} {} {}", line_info, error.word, &error.context);
        }

        if !error.suggestions.is_empty() {
            println!(
                "    {} {}",
                arrow(colored_output),
                join_words(error.suggestions.iter().take(5), colored_output)
            );
        }
    }
}

pub fn print_cursor_context(
    file_path: &Path,
    offset: usize,
    context: &CursorContext,
    colored_output: bool,
    format: OutputFormat,
) {
    if format == OutputFormat::Json {
        print_json(&JsonCursor {
            file: file_path.display().to_string(),
            offset,
            context,
        });
        return;
    }

    if context.current_token.is_empty() {
        println!("No word at offset {}", offset);
        return;
    }

    print_word_status(&context.current_token, context.is_known, colored_output);
    print_suggestions(&context.suggestions, context.is_known, colored_output);
}

/// Status line plus ranked candidates for a single looked-up word.
pub fn print_lookup(context: &CursorContext, colored_output: bool, format: OutputFormat) {
    if format == OutputFormat::Json {
        print_json(context);
        return;
    }

    if context.current_token.is_empty() {
        println!("No word to look up");
        return;
    }

    print_word_status(&context.current_token, context.is_known, colored_output);
    print_suggestions(&context.suggestions, context.is_known, colored_output);
}

fn print_word_status(word: &str, is_known: bool, colored: bool) {
    match (is_known, colored) {
        (true, true) => println!(
            "{} {}",
            "✓".green().bold(),
            format!("\"{}\" is spelled correctly", word).green()
        ),
        (true, false) => println!("✓ \"{}\" is spelled correctly", word),
        (false, true) => println!(
            "{} {}",
            "✗".red().bold(),
            format!("\"{}\" not found in dictionary", word).red()
        ),
        (false, false) => println!("✗ \"{}\" not found in dictionary", word),
    }
}

fn print_suggestions(suggestions: &[Suggestion], is_known: bool, colored: bool) {
    if suggestions.is_empty() {
        if !is_known {
            println!("  No suggestions found");
        }
        return;
    }

    let heading = if is_known { "Similar words:" } else { "Did you mean:" };
    if colored {
        println!("  {}", heading.cyan().bold());
    } else {
        println!("  {}", heading);
    }

    for suggestion in suggestions {
        let distance = format!("(distance {})", suggestion.distance);
        if colored {
            println!("    {} {}", suggestion.word.green(), distance.dimmed());
        } else {
            println!("    {} {}", suggestion.word, distance);
        }
    }
}

fn arrow(colored: bool) -> String {
    if colored {
        "→".dimmed().to_string()
    } else {
        "→".to_string()
    }
}

fn join_words<'a>(words: impl Iterator<Item = &'a String>, colored: bool) -> String {
    if colored {
        words
            .map(|s| s.green().to_string())
            .collect::<Vec<_>>()
            .join(&", ".dimmed().to_string())
    } else {
        words.map(String::as_str).collect::<Vec<_>>().join(", ")
    }
}

fn format_context(context: &str, word: &str, colored: bool) -> String {
    if colored {
        context.replace(word, &word.red().bold().to_string())
    } else {
        context.to_string()
    }
}

pub fn print_check_summary(total_errors: usize, files: &[impl AsRef<Path>], colored: bool) {
    println!();
    if total_errors == 0 {
        if colored {
            println!("{}", "✓ No spelling errors found!".green().bold());
        } else {
            println!("✓ No spelling errors found!");
        }
    } else {
        let error_word = if total_errors == 1 { "error" } else { "errors" };
        let file_word = if files.len() == 1 { "file" } else { "files" };
        if colored {
            println!(
                "{} {} {} found in {} {}",
                "✗".red().bold(),
                total_errors.to_string().red().bold(),
                error_word,
                files.len(),
                file_word
            );
        } else {
            println!(
                "✗ {} {} found in {} {}",
                total_errors, error_word, files.len(), file_word
            );
        }
    }
}
