use std::io::{BufRead, Write};

use super::board_view::{render, render_move_guide};
use super::console::Console;
use crate::ai::ComputerAgent;
use crate::config::{AiConfig, Difficulty};
use crate::error::{BoardError, PlayError};
use crate::game::{Addressing, Board, GameStatus, Symbol};
use crate::session::{agent_turn, seat_of, seats_for, Scoreboard, Seat};

const MENU: &str = "\n'1' to play again.\n'2' to change number of players.\n'3' to change AI difficulty.\n'0' to exit.\nSelect: ";

/// Console game session: plays games on one board, keeps score and offers
/// the replay menu after each game.
pub struct App<A: Addressing, R, W> {
    board: Board<A>,
    seats: [Seat; 2],
    computer: ComputerAgent,
    scoreboard: Scoreboard,
    console: Console<R, W>,
}

impl<A: Addressing, R: BufRead, W: Write> App<A, R, W> {
    pub fn new(board: Board<A>, ai: AiConfig, players: u8, input: R, output: W) -> Self {
        App {
            board,
            seats: seats_for(players),
            computer: ComputerAgent::new(ai),
            scoreboard: Scoreboard::new(),
            console: Console::new(input, output),
        }
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.scoreboard
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Main application loop. Returns when the user exits or input ends.
    pub fn run(&mut self) -> Result<(), PlayError> {
        loop {
            self.board.reset();
            let Some(status) = self.play_one()? else {
                return Ok(());
            };
            self.scoreboard.record(status);

            let summary = format!(
                "\n{}Result: {}\n\n{}",
                render(&self.board),
                status,
                self.scoreboard
            );
            self.console.println(&summary)?;

            if !self.menu()? {
                return Ok(());
            }
        }
    }

    /// Play one game. `None` if input ended before the game finished.
    fn play_one(&mut self) -> Result<Option<GameStatus>, PlayError> {
        while !self.board.is_terminal() {
            let symbol = self.board.next_symbol();
            match seat_of(&self.seats, symbol) {
                Seat::Computer => {
                    let token = agent_turn(&mut self.board, &mut self.computer)?;
                    self.console
                        .println(&format!("{symbol} (computer) plays {}", token + 1))?;
                }
                Seat::Human => {
                    if !self.human_turn(symbol)? {
                        return Ok(None);
                    }
                }
            }
        }
        Ok(Some(self.board.status()))
    }

    /// Prompt until the human enters an accepted move. `false` at end of input.
    fn human_turn(&mut self, symbol: Symbol) -> Result<bool, PlayError> {
        let view = format!("\n{}\n{}", render(&self.board), render_move_guide(&self.board));
        self.console.println(&view)?;

        loop {
            let Some(answer) = self.console.prompt(&format!("{symbol} to play: "))? else {
                return Ok(false);
            };
            let limit = self.board.addressing().token_count(self.board.grid());
            let number = match answer.parse::<usize>() {
                Ok(n) if (1..=limit).contains(&n) => n,
                _ => {
                    self.console
                        .println(&format!("The value should be a number between 1 and {limit}."))?;
                    continue;
                }
            };

            // Humans count from 1, tokens from 0
            match self.board.apply_move(number - 1) {
                Ok(_) => return Ok(true),
                Err(err) => self.console.println(&describe(&err))?,
            }
        }
    }

    /// Post-game menu. `false` means stop.
    fn menu(&mut self) -> Result<bool, PlayError> {
        loop {
            let Some(choice) = self.console.prompt_number(MENU, 0..=3)? else {
                return Ok(false);
            };
            match choice {
                0 => return Ok(false),
                1 => return Ok(true),
                2 => {
                    let prompt = "Indicate the number of players (0, 1 or 2): ";
                    let Some(players) = self.console.prompt_number(prompt, 0..=2)? else {
                        return Ok(false);
                    };
                    self.seats = seats_for(players as u8);
                    self.scoreboard.reset();
                    return Ok(true);
                }
                _ => {
                    if !self.change_difficulty()? {
                        return Ok(false);
                    }
                }
            }
        }
    }

    fn change_difficulty(&mut self) -> Result<bool, PlayError> {
        if self.computer.config().searches(self.board.cell_count()) {
            let prompt = "\nType :\n'1' to set to hard AI\n'0' to set to easy AI\nSelect: ";
            let Some(level) = self.console.prompt_number(prompt, 0..=1)? else {
                return Ok(false);
            };
            let difficulty = if level == 1 {
                Difficulty::Hard
            } else {
                Difficulty::Easy
            };
            self.computer.set_difficulty(difficulty);
        } else {
            let prompt = format!(
                "\nAI difficulty is set by thinking time (currently {} ms).\nEnter time in ms (recommended: 1 - 1000): ",
                self.computer.config().think_time_ms
            );
            let Some(millis) = self.console.prompt_number(&prompt, 0..=60_000)? else {
                return Ok(false);
            };
            self.computer.set_think_time_ms(millis);
        }
        Ok(true)
    }
}

/// Message for a rejected human move, using 1-based numbering.
fn describe(err: &BoardError) -> String {
    match err {
        BoardError::OutOfRange { len, .. } => {
            format!("The value should be a number between 1 and {len}.")
        }
        BoardError::Occupied(cell) => {
            format!("Box {} is already taken. Please choose another one.", cell + 1)
        }
        BoardError::ColumnFull(col) => {
            format!("Column {} is full. Please choose another one.", col + 1)
        }
        other => other.to_string(),
    }
}
