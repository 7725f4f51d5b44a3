//! Line-oriented console session.
//!
//! Drives a [`Game`] from text input, one prompt per line, and writes the
//! table to the output after every step. Invalid answers are asked again
//! without limit. Closing the input ends the session as if the player
//! declined to continue.

use std::io::{self, BufRead, Write};

use crate::error::{BetError, SessionError};
use crate::game::{Action, Game, GameState};
use crate::hand::Hand;

/// An interactive session over an input and an output stream.
#[derive(Debug)]
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading answers from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the session and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays rounds until the player stops, runs out of credits, or the
    /// input closes. Returns the final balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the shoe runs out mid-session or the console
    /// cannot be read or written.
    pub fn run(&mut self, game: &mut Game) -> Result<usize, SessionError> {
        while !game.is_over() {
            writeln!(self.output, "Credits: {}", game.credits())?;
            if !self.place_bet(game)? {
                game.finish();
                break;
            }

            game.deal()?;
            self.player_turn(game)?;
            self.dealer_turn(game)?;

            let result = game.settle()?;
            writeln!(self.output, "{}", result.outcome)?;

            if game.is_over() {
                break;
            }

            if self.prompt_letter("Play again? (Y/N): ", play_again)? != Some(true) {
                game.finish();
            }
        }

        writeln!(self.output, "Game over. Thanks for playing!")?;
        self.output.flush()?;
        Ok(game.credits())
    }

    /// Asks for a wager until the game accepts one. Returns `false` if the
    /// input closed first.
    fn place_bet(&mut self, game: &mut Game) -> Result<bool, SessionError> {
        let prompt = format!("Place your bet (1-{}): ", game.credits());
        loop {
            let Some(line) = self.prompt_line(&prompt)? else {
                return Ok(false);
            };
            let Ok(amount) = line.parse::<usize>() else {
                continue;
            };
            match game.bet(amount) {
                Ok(()) => return Ok(true),
                Err(BetError::InvalidState) => return Err(SessionError::InvalidState),
                Err(BetError::ZeroBet | BetError::InsufficientFunds) => {}
            }
        }
    }

    fn player_turn(&mut self, game: &mut Game) -> Result<(), SessionError> {
        while game.state() == GameState::PlayerTurn {
            self.show_hand("Dealer", game.dealer_hand(), false)?;
            self.show_hand("Player", game.player_hand(), true)?;

            let Some(action) = self.prompt_letter(
                "Choose (H)it, (S)tand, (D)ouble Down, (P)ass: ",
                Action::from_choice,
            )?
            else {
                // Input closed mid-turn; finish the round standing.
                game.stand()?;
                break;
            };
            game.act(action)?;
        }

        if game.player_hand().is_busted() {
            self.show_hand("Player", game.player_hand(), true)?;
        }
        Ok(())
    }

    fn dealer_turn(&mut self, game: &mut Game) -> Result<(), SessionError> {
        if game.state() != GameState::DealerTurn {
            return Ok(());
        }

        self.show_hand("Dealer", game.dealer_hand(), true)?;
        while game.dealer_step()?.is_some() {
            self.show_hand("Dealer", game.dealer_hand(), true)?;
        }
        Ok(())
    }

    fn show_hand(&mut self, owner: &str, hand: &Hand, reveal_all: bool) -> io::Result<()> {
        writeln!(self.output, "{owner}'s Hand: {}", hand.render(reveal_all))
    }

    /// Writes `prompt` and reads one trimmed line. `None` means end of input.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_owned()))
    }

    /// Asks `prompt` until the answer is a single letter that `parse` accepts.
    fn prompt_letter<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(char) -> Option<T>,
    ) -> io::Result<Option<T>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            let mut chars = line.chars();
            if let (Some(letter), None) = (chars.next(), chars.next()) {
                if let Some(value) = parse(letter) {
                    return Ok(Some(value));
                }
            }
        }
    }
}

const fn play_again(letter: char) -> Option<bool> {
    match letter {
        'Y' => Some(true),
        'N' => Some(false),
        _ => None,
    }
}
