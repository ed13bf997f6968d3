//! Wordle Entropy - CLI
//!
//! Play, get live suggestions, or watch the entropy solver play single and
//! multi-board games.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use rand::prelude::IndexedRandom;
use wordle_entropy::{
    commands::{
        analyze_word, precompute, run_assist, run_benchmark, run_play, solve_multi, solve_word,
        top_guesses,
    },
    config::SolverConfig,
    logging,
    output::{
        print_analysis_result, print_benchmark_result, print_multi_result, print_ranking,
        print_solve_result,
    },
    parallel::{FailurePolicy, ParallelExecutor},
    solver::Solver,
    wordlists::Lexicon,
};

#[derive(Parser)]
#[command(
    name = "wordle_entropy",
    about = "Wordle solver that picks the guess with the most expected information",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Guessable words file (default: built-in list)
    #[arg(long, global = true)]
    words: Option<PathBuf>,

    /// Answers file, must be a subset of the words (default: built-in list)
    #[arg(long, global = true, requires = "words")]
    answers: Option<PathBuf>,

    /// JSON config file; flags below override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Explore the full word list below this many bits of knowledge
    #[arg(long, global = true)]
    iv_threshold: Option<f64>,

    /// Guesses allowed per game
    #[arg(long, global = true)]
    max_guesses: Option<usize>,

    /// First guess ('auto' to compute it)
    #[arg(long, global = true)]
    opening: Option<String>,

    /// Worker threads (0 = one per core)
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,

    /// What to do when a parallel task fails
    #[arg(long, global = true, value_enum)]
    on_error: Option<FailurePolicy>,

    /// Show progress bars for long computations
    #[arg(long, global = true)]
    progress: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess a random answer yourself (default)
    Play,

    /// Suggest guesses for a game played elsewhere
    Assist,

    /// Watch the solver play a given answer
    Solve {
        /// Answer to solve
        word: String,

        /// Show candidates and entropy per turn
        #[arg(short, long)]
        detailed: bool,
    },

    /// Play every answer and report the guess distribution
    Bench {
        /// Only play the first N answers
        #[arg(short, long)]
        limit: Option<usize>,

        /// Use the random-candidate bot as a baseline
        #[arg(long)]
        random: bool,
    },

    /// Watch the solver play several boards at once
    Multi {
        /// Answers to play (default: random)
        #[arg(value_name = "WORDS")]
        targets: Vec<String>,

        /// Number of random boards
        #[arg(short, long, default_value = "4")]
        boards: usize,
    },

    /// Entropy and hint distribution of one guess
    Analyze {
        /// Word to analyze
        word: String,

        /// Hints to list
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Best opening guesses
    Top {
        /// How many to show
        #[arg(short, default_value = "10")]
        n: usize,

        /// Read scores from a precomputed database
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// Score opening guesses and write them to a database
    Precompute {
        /// Output file
        #[arg(short, long, default_value = "scores.json")]
        output: PathBuf,

        /// Only score the first N words
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Defaults, then the config file, then command-line flags
fn load_config(cli: &Cli) -> Result<SolverConfig> {
    let mut config = match &cli.config {
        Some(path) => SolverConfig::from_file(path)?,
        None => SolverConfig::default(),
    };

    if let Some(iv) = cli.iv_threshold {
        config.iv_threshold = iv;
    }
    if let Some(max) = cli.max_guesses {
        config.max_guesses = max;
    }
    if let Some(opening) = &cli.opening {
        config.opening = (!opening.eq_ignore_ascii_case("auto")).then(|| opening.clone());
    }
    if let Some(threads) = cli.threads {
        config.concurrency = threads;
    }
    if let Some(policy) = cli.on_error {
        config.failure_policy = policy;
    }
    config.progress |= cli.progress;

    debug!("{config:?}");
    Ok(config)
}

fn load_lexicon(cli: &Cli) -> Result<Lexicon> {
    let lexicon = match &cli.words {
        Some(words) => Lexicon::from_files(words, cli.answers.as_ref())
            .with_context(|| format!("loading {}", words.display()))?,
        None => Lexicon::embedded()?,
    };
    debug!(
        "{} words, {} answers",
        lexicon.words().len(),
        lexicon.answers().len()
    );
    Ok(lexicon)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = load_config(&cli)?;
    let lexicon = load_lexicon(&cli)?;
    let executor = ParallelExecutor::new(config.concurrency, config.failure_policy)?
        .with_progress(config.progress);
    debug!(
        "{} worker threads, {:?} on failure",
        executor.concurrency(),
        executor.policy()
    );
    let solver = Solver::new(&lexicon, &config, &executor);

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let answer = *lexicon
                .answers()
                .choose(&mut rand::rng())
                .context("the answer list is empty")?;
            run_play(&lexicon, answer, config.max_guesses, &mut io::stdin().lock())?;
        }
        Commands::Assist => {
            let solved = run_assist(&solver, &mut io::stdin().lock())?;
            println!("\nSolved {solved} game(s). Bye!");
        }
        Commands::Solve { word, detailed } => {
            let result = solve_word(&word, &solver)?;
            print_solve_result(&result, detailed);
        }
        Commands::Bench { limit, random } => {
            let summary = run_benchmark(&solver, limit, random)?;
            print_benchmark_result(&summary);
        }
        Commands::Multi { targets, boards } => {
            let game = solve_multi(&solver, &targets, boards, &mut rand::rng())?;
            print_multi_result(&game);
        }
        Commands::Analyze { word, top } => {
            let result = analyze_word(&word, &lexicon)?;
            print_analysis_result(&result, top);
        }
        Commands::Top { n, db } => {
            let ranked = top_guesses(&solver, db.as_deref(), n)?;
            print_ranking(&ranked);
        }
        Commands::Precompute { output, limit } => {
            let db = precompute(&solver, &output, limit)?;
            println!("Wrote {} guesses to {}", db.len(), output.display());
        }
    }

    Ok(())
}
