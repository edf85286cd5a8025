//! Rubik's cube animator
//!
//! Spins a 3x3x3 cube and turns random slices one quarter turn at a time,
//! either in an interactive 3D viewer or headless from the command line.

mod visualization;

use clap::{Parser, Subcommand};
use log::{info, warn};

use kube::notation::{apply_sequence, format_sequence, parse_sequence, sequence_order, Twist};
use kube::{check_tables, AnimationConfig, MoveScheduler, Permutation};

/// Animates random slice turns on a Rubik's cube.
#[derive(Parser)]
#[command(name = "kube")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Seed for slice selection; random if omitted.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Animation ticks per quarter turn.
    #[arg(long, global = true, default_value_t = kube::config::DEFAULT_QUARTER_TURN_TICKS)]
    ticks_per_turn: u32,
}

#[derive(Subcommand)]
enum Command {
    /// Animate the cube in an interactive 3D viewer.
    Display,
    /// Run the animation without a window and print the result.
    Simulate {
        /// Number of ticks to run.
        #[arg(long, default_value_t = 250)]
        ticks: u64,
    },
    /// Verify the slice tables.
    Check,
    /// Print how many repetitions of a move sequence return to solved.
    Order {
        /// Moves such as "U R U' R'".
        moves: String,
    },
}

fn main() -> eyre::Result<()> {
    env_logger::builder().init();

    let cli = Cli::parse();
    let config = AnimationConfig::new(cli.ticks_per_turn, cli.seed)?;

    match cli.command {
        Some(Command::Simulate { ticks }) => run_simulate(config, ticks),
        Some(Command::Check) => run_check()?,
        Some(Command::Order { moves }) => run_order(&moves)?,
        Some(Command::Display) | None => {
            println!("Controls: Space pause, Right step while paused, R reset");
            visualization::display(MoveScheduler::new(config));
        }
    }
    Ok(())
}

/// Runs the scheduler headless and prints the moves and final permutation.
fn run_simulate(config: AnimationConfig, ticks: u64) {
    let mut scheduler = MoveScheduler::new(config.with_history());
    for _ in 0..ticks {
        scheduler.tick();
    }
    info!(
        "simulated {ticks} ticks, {} moves completed",
        scheduler.completed_moves()
    );
    print!("{}", format_simulation(&scheduler));
}

fn format_simulation(scheduler: &MoveScheduler) -> String {
    let moves: Vec<String> = scheduler.history().iter().map(|s| s.to_string()).collect();
    let mut output = format!("{} moves: {}\n", moves.len(), moves.join(" "));
    if let Some(slice) = scheduler.animation().active_slice() {
        output.push_str(&format!("turning {slice}\n"));
    }
    output.push_str(&scheduler.engine().permutation().to_string());
    output
}

/// Prints a line per slice table and fails if any table is broken.
fn run_check() -> eyre::Result<()> {
    let checks = check_tables();
    for check in &checks {
        let status = if check.passed() { "ok" } else { "FAILED" };
        println!(
            "{}  permutation={} period4={} geometry={}  {status}",
            check.slice, check.is_permutation, check.has_period_four, check.matches_geometry
        );
        if !check.passed() {
            warn!("slice table {} failed: {check:?}", check.slice);
        }
    }
    let failed = checks.iter().filter(|c| !c.passed()).count();
    if failed > 0 {
        eyre::bail!("{failed} slice tables failed");
    }
    Ok(())
}

/// Prints the permutation a sequence produces and its order.
fn run_order(moves: &str) -> eyre::Result<()> {
    let twists = parse_sequence(moves)?;
    print!("{}", format_sequence_result(&twists));
    println!("order {}", sequence_order(&twists));
    Ok(())
}

/// Formats the permutation reached by applying `twists` to a solved cube.
fn format_sequence_result(twists: &[Twist]) -> String {
    let permutation = apply_sequence(&Permutation::IDENTITY, twists);
    format!("after {}:\n{permutation}", format_sequence(twists))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_snapshot() {
        let mut output = String::new();
        for moves in ["U", "R", "U R U' R'", "M E S", "F2 B2 L' D"] {
            let twists = parse_sequence(moves).unwrap();
            output.push_str(&format_sequence_result(&twists));
            output.push('\n');
        }
        insta::assert_snapshot!(output.trim_end());
    }

    #[test]
    fn test_simulation_output_shape() {
        let config = AnimationConfig::new(25, Some(17)).unwrap();
        let mut scheduler = MoveScheduler::new(config.with_history());
        for _ in 0..(25 * 4 + 3) {
            scheduler.tick();
        }
        let output = format_simulation(&scheduler);
        let mut lines = output.lines();
        assert!(lines.next().unwrap().starts_with("4 moves: "));
        assert!(lines.next().unwrap().starts_with("turning "));
        assert_eq!(lines.next(), Some("up         equator    down"));
        assert_eq!(lines.count(), 3);
    }

    #[test]
    fn test_bad_sequence_is_rejected() {
        assert!(run_order("U X").is_err());
        assert!(run_order("").is_err());
    }

    #[test]
    fn test_order_formats_parsed_twists() {
        let twists = parse_sequence("U R U' R'").unwrap();
        let output = format_sequence_result(&twists);
        assert!(output.starts_with("after U R U' R':\n"));
        assert_eq!(sequence_order(&twists), 6);
        assert!(run_order("U R U' R'").is_ok());
    }

    #[test]
    fn test_check_passes() {
        assert!(run_check().is_ok());
    }
}
