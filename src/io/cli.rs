//! Command-line interface for playing a session in the terminal
//!
//! Presentation glue around the engine: reads direction keys, applies moves
//! through a [`Session`], and prints the board. The engine itself never
//! depends on anything here.

use std::io::BufRead;

use clap::Parser;

use crate::algorithm::dispatch::Direction;
use crate::algorithm::session::Session;
use crate::io::configuration::{DEFAULT_GRID_SIZE, DEFAULT_SEED};
use crate::io::error::Result;

#[derive(Parser)]
#[command(name = "tilefold")]
#[command(
    author,
    version,
    about = "Play a sliding-tile merge puzzle in the terminal"
)]
/// Command-line arguments for the demo player
pub struct Cli {
    /// Board dimension (the board is always square)
    #[arg(short = 'n', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Random seed for reproducible games
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Scripted move keys (e.g. "awwd"); unrecognized keys are ignored
    #[arg(short, long)]
    pub moves: Option<String>,

    /// Only print the final board
    #[arg(short, long)]
    pub quiet: bool,
}

/// Plays one session from scripted or interactive input
pub struct GameRunner {
    cli: Cli,
    session: Session,
}

impl GameRunner {
    /// Create a runner with a freshly spawned board
    ///
    /// # Errors
    ///
    /// Returns an error when the requested board dimension is invalid.
    pub fn new(cli: Cli) -> Result<Self> {
        let session = Session::new(cli.size, cli.seed)?;
        Ok(Self { cli, session })
    }

    /// Play the game to completion
    ///
    /// With `--moves` the scripted keys are applied and the final board
    /// printed; otherwise directions are read line by line from stdin until
    /// `q` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading player input from stdin fails.
    pub fn run(&mut self) -> Result<()> {
        if let Some(moves) = self.cli.moves.take() {
            self.play_scripted(&moves);
            self.print_board();
            return Ok(());
        }
        self.play_interactive()
    }

    fn play_scripted(&mut self, moves: &str) {
        for key in moves.chars() {
            if let Some(direction) = Direction::from_key(key) {
                self.session.apply_move(direction);
                if !self.cli.quiet {
                    self.print_board();
                }
            }
        }
    }

    // Allow print for the interactive prompt and board display
    #[allow(clippy::print_stdout)]
    fn play_interactive(&mut self) -> Result<()> {
        self.print_board();
        println!("Move with w/a/s/d, quit with q.");

        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            let mut moved = false;
            for key in line.chars() {
                if key == 'q' || key == 'Q' {
                    return Ok(());
                }
                // Unrecognized keys are ignored: no state change, no error
                if let Some(direction) = Direction::from_key(key) {
                    self.session.apply_move(direction);
                    moved = true;
                }
            }
            if moved {
                self.print_board();
                if self.session.is_stuck() {
                    println!("No move can change the board.");
                    return Ok(());
                }
            }
        }
        Ok(())
    }

    // Allow print for board display
    #[allow(clippy::print_stdout)]
    fn print_board(&self) {
        println!("{}", self.session.grid());
    }
}
