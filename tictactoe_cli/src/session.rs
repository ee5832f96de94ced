use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::console::{ask_yes_no, Console};
use crate::error::InputClosed;
use crate::game::{setup_game, GameResult};

/// Plays games until the user doesn't want to play again, or the input ends.
pub fn run_session(console: &mut dyn Console, rng: &mut StdRng) -> anyhow::Result<()> {
    match play_games(console, rng) {
        Ok(()) => {}
        Err(err) if err.is::<InputClosed>() => {
            info!("Input closed, ending the session");
            console.say("")?;
        }
        Err(err) => return Err(err),
    }
    console.say("Thanks for playing")
}

fn play_games(console: &mut dyn Console, rng: &mut StdRng) -> anyhow::Result<()> {
    for game_idx in 0.. {
        // Nothing carries over from one game to the next
        let mut game = setup_game(console, rng)?;
        let result = game.play(console)?;

        match result {
            GameResult::WonByPlayer { player_idx } => {
                let winner = &game.players()[player_idx].name;
                info!(winner = %winner, game_idx, "Game won");
                console.say(&format!("{} wins!", winner))?;
            }
            GameResult::Draw => {
                info!(game_idx, "Draw");
                console.say("Draw!")?;
            }
        }
        console.say(&game.board().to_string())?;
        debug!(transcript = %game.transcript().to_json()?, "Game finished");

        if !ask_yes_no(console, "Do you want to play again [y/n] ")? {
            break;
        }
    }
    Ok(())
}
