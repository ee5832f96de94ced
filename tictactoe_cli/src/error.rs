/// The input ended while the game was still waiting for an answer.
///
/// This is how a session ends when the user closes stdin instead of
/// declining to play again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputClosed;

impl std::error::Error for InputClosed {}

impl std::fmt::Display for InputClosed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The input was closed before an answer was given")
    }
}
