//! Display functions for command results

use colored::Colorize;

use super::formatters::{colored_guess, create_progress_bar, entropy_bar};
use crate::commands::{AnalysisResult, SolveResult};
use crate::game::{Game, MultiGame};
use crate::solver::{BenchSummary, ScoredGuess};

/// Print the guesses of a game as colored tiles
pub fn print_board(game: &Game<'_>) {
    println!();
    for (word, hint) in game.history() {
        println!("  {}", colored_guess(word, hint));
    }
    println!();
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.as_str().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colored_guess(&step.word, &step.hint),
            step.hint
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Entropy:    {:.3} bits", step.entropy);
            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult, buckets: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.as_str().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        entropy_bar(result.entropy, 30).green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );

    let mut scores: Vec<_> = result.scores.iter().collect();
    scores.sort_by(|a, b| b.1.p.total_cmp(&a.1.p));

    println!(
        "\n📈 {} ({} distinct hints)",
        "Most likely hints:".bright_cyan().bold(),
        scores.len()
    );
    for (hint, score) in scores.into_iter().take(buckets) {
        println!(
            "   {hint}  p = {:.4}  I = {:.2} bits",
            score.p, score.info
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Solved:           {} {}",
        result.solved,
        format!("({:.1}%)", result.success_rate() * 100.0).green()
    );
    if result.failed > 0 {
        println!("   Failed:           {}", result.failed.to_string().red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(1);
    for (&guesses, &count) in &result.distribution {
        let pct = count as f64 / result.total_games as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

/// Print multi-board boards and the outcome
pub fn print_multi_result(game: &MultiGame<'_>) {
    let answers: Vec<String> = game.boards().iter().map(|b| b.answer().to_string()).collect();
    println!("\nAnswers: {}\n", answers.join(", ").bright_yellow().bold());
    print!("{game}");
    println!();
    if game.is_won() {
        println!(
            "{}",
            format!("✅ All boards solved in {} guesses", game.score())
                .green()
                .bold()
        );
    } else {
        let solved = game.boards().iter().filter(|b| b.is_won()).count();
        println!(
            "{}",
            format!("❌ {solved}/{} boards solved", game.boards().len())
                .red()
                .bold()
        );
    }
}

/// Print a ranking of guesses
pub fn print_ranking(ranked: &[ScoredGuess]) {
    println!("\n{}", "Best opening guesses".bright_cyan().bold());
    for (i, scored) in ranked.iter().enumerate() {
        println!(
            "  {:>3}. {}  [{}] {:.4} bits",
            i + 1,
            scored.word.as_str().bright_white().bold(),
            entropy_bar(scored.entropy, 20).green(),
            scored.entropy
        );
    }
}
