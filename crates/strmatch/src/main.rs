use std::process::ExitCode;

use clap::{Parser, Subcommand};
use strmatch::{commands, Format, Settings};
use strmatch_core::CaseStyle;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "strmatch")]
#[command(about = "Edit distance, closest-match and similarity ranking for strings")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Compare case-sensitively (also STRMATCH_CASE_SENSITIVE)
    #[arg(long, global = true)]
    case_sensitive: bool,

    /// Print ranking results as JSON with distances
    #[arg(long, global = true)]
    json: bool,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Levenshtein distance between two strings
    Distance { a: String, b: String },

    /// The candidate closest to QUERY
    Closest {
        query: String,
        candidates: Vec<String>,
    },

    /// The N candidates closest to QUERY
    Top {
        query: String,
        #[arg(short, long, default_value_t = 5)]
        n: usize,
        candidates: Vec<String>,
    },

    /// All candidates, most similar to TARGET first
    Sort {
        target: String,
        candidates: Vec<String>,
    },

    /// Convert TEXT to camel, pascal, snake or kebab case
    Case { style: CaseStyle, text: String },
}

fn run(args: Args) -> strmatch::Result<String> {
    let settings = Settings::from_env()?.with_case_sensitive_flag(args.case_sensitive);
    debug!(?settings, "resolved settings");

    let format = if args.json { Format::Json } else { Format::Lines };
    let ranker = settings.ranker();

    match args.command {
        Command::Distance { a, b } => Ok(commands::distance(&a, &b)),
        Command::Closest { query, candidates } => {
            commands::closest(&ranker, &query, &candidates, format)
        }
        Command::Top {
            query,
            n,
            candidates,
        } => commands::top(&ranker, &query, &candidates, n, format),
        Command::Sort { target, candidates } => {
            commands::sort(&ranker, &target, &candidates, format)
        }
        Command::Case { style, text } => Ok(commands::convert_case(style, &text)),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    strmatch::tracing::init(&args.log_level);

    match run(args) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!(error = ?e, "command failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
