//! Sapor CLI binary.
//!
//! Subcommands: `plan` (recommendation pipeline), `workflow` (planner graph),
//! `score` (reward for a completion), `feedback` (record a rating).

mod commands;
mod logging;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use config::SaporConfig;
use sapor::{Feedback, FeedbackRecorder};

#[derive(Parser, Debug)]
#[command(name = "sapor")]
#[command(about = "Sapor: budget-aware meal recommendations")]
struct Args {
    #[command(subcommand)]
    cmd: Command,

    /// Verbose: log to stderr, including graph node enter/exit
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Recommend one meal from the built-in catalog
    Plan {
        /// Free-text request, e.g. "vegetarian lunch under $5"
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
        /// With --json, pretty-print (multi-line)
        #[arg(long, requires = "json")]
        pretty: bool,
    },
    /// Plan a mix of deals and home meals with the workflow graph
    Workflow {
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
    },
    /// Score a generated recommendation in [0, 1]
    Score {
        /// Read the completion from this file instead of the arguments
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
        #[arg(required_unless_present = "file", trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Record user feedback; positive ratings become training examples
    Feedback {
        #[arg(long)]
        query: String,
        #[arg(long)]
        recommendation: String,
        /// 1-5
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        rating: u8,
        #[arg(long)]
        comment: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    config::load_and_apply("sapor", None::<&std::path::Path>).ok();
    let args = Args::parse();
    logging::init(args.verbose)?;
    let settings = SaporConfig::from_env()?;

    let out = match args.cmd {
        Command::Plan {
            query,
            json,
            pretty,
        } => commands::plan(&query.join(" "), json, pretty)?,
        Command::Workflow { query } => {
            commands::workflow(&query.join(" "), settings.default_budget, args.verbose).await?
        }
        Command::Score { file, text } => {
            commands::score(&commands::score_input(file.as_deref(), &text)?)
        }
        Command::Feedback {
            query,
            recommendation,
            rating,
            comment,
        } => {
            let recorder = FeedbackRecorder::new(settings.dataset_path)
                .with_min_positive_rating(settings.min_positive_rating);
            let feedback = Feedback {
                user_query: query,
                recommendation,
                rating,
                comment,
            };
            commands::feedback(&recorder, &feedback)?
        }
    };
    println!("{}", out);
    Ok(())
}
