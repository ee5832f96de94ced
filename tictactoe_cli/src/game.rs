use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tictactoe::Board;
use tracing::{debug, info};

use crate::console::{ask_integer, ask_symbol, Console};
use crate::player::Player;
use crate::transcript::Transcript;

/// Larger boards are refused during setup.
pub const MAX_BOARD_SIZE: usize = 1000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    WonByPlayer { player_idx: usize },
    Draw,
}

/// Summarizes the outcome of playing a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The game goes on, and it's the other player's turn.
    Normal,
    /// The player who just moved has won.
    Won,
    /// The board is full and nobody won.
    Draw,
}

/// A game from the first move to a win or a draw.
#[derive(Debug)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    current_player_idx: usize,
    move_count: usize,
    transcript: Transcript,
}

/// Asks for the board size and the user's symbol, and picks who starts.
pub fn setup_game(console: &mut dyn Console, rng: &mut StdRng) -> anyhow::Result<Game> {
    let board_size = ask_board_size(console)?;
    let human_symbol = ask_symbol(console)?;

    // The computer gets its own RNG, derived from the session's
    let players = [
        Player::human(human_symbol),
        Player::computer(human_symbol.opponent(), StdRng::seed_from_u64(rng.gen())),
    ];

    // Randomly pick a starting player
    let first_player_idx = if rng.gen::<bool>() { 1 } else { 0 };
    if first_player_idx == 0 {
        console.say("Player first")?;
    } else {
        console.say("Computer first")?;
    }

    info!(
        board_size,
        human = %human_symbol,
        first = %players[first_player_idx].name,
        "New game"
    );
    Ok(Game::new(board_size, players, first_player_idx))
}

fn ask_board_size(console: &mut dyn Console) -> anyhow::Result<usize> {
    loop {
        let num = ask_integer(console, "Please enter an integer for board size: ")?;
        match usize::try_from(num) {
            Ok(size) if (1..=MAX_BOARD_SIZE).contains(&size) => return Ok(size),
            _ => console.say(&format!(
                "The board size must be between 1 and {}",
                MAX_BOARD_SIZE
            ))?,
        }
    }
}

impl Game {
    pub fn new(board_size: usize, players: [Player; 2], first_player_idx: usize) -> Self {
        assert!(first_player_idx < 2);
        assert_ne!(players[0].symbol, players[1].symbol);
        Self {
            board: Board::new(board_size),
            players,
            current_player_idx: first_player_idx,
            move_count: 0,
            transcript: Transcript::new(board_size),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Whose turn it is. After the game ended, this is the player who made
    /// the last move.
    pub fn current_player_idx(&self) -> usize {
        self.current_player_idx
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Lets the current player make a move and evaluates it.
    ///
    /// The board only needs to look at the lines through the new symbol to
    /// find a win. A draw is when the move count reaches the number of cells.
    pub fn play_turn(&mut self, console: &mut dyn Console) -> anyhow::Result<TurnOutcome> {
        let player = &mut self.players[self.current_player_idx];
        let pos = player.make_move(&self.board, console)?;
        if let Err(err) = self.board.check_move(pos) {
            anyhow::bail!("{} played an illegal move at {}: {}", player.name, pos, err);
        }

        self.board.place_move(pos, player.symbol);
        self.move_count += 1;
        self.transcript.record_move(&player.name, player.symbol, pos);
        debug!(
            player = %player.name,
            symbol = %player.symbol,
            %pos,
            move_count = self.move_count,
            "Move placed"
        );

        if self.board.check_win(pos, player.symbol) {
            self.transcript.record_winner(&player.name);
            Ok(TurnOutcome::Won)
        } else if self.move_count == self.board.total_moves() {
            Ok(TurnOutcome::Draw)
        } else {
            self.current_player_idx = 1 - self.current_player_idx;
            Ok(TurnOutcome::Normal)
        }
    }

    /// Plays until somebody wins or the board is full, showing the board
    /// before every move.
    pub fn play(&mut self, console: &mut dyn Console) -> anyhow::Result<GameResult> {
        loop {
            console.say(&self.board.to_string())?;
            match self.play_turn(console)? {
                TurnOutcome::Normal => {}
                TurnOutcome::Won => {
                    return Ok(GameResult::WonByPlayer {
                        player_idx: self.current_player_idx,
                    })
                }
                TurnOutcome::Draw => return Ok(GameResult::Draw),
            }
        }
    }
}
