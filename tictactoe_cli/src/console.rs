use std::io::{BufRead, Stdout, StdinLock, Write};

use tictactoe::Symbol;
use tracing::debug;

use crate::error::InputClosed;

/// Where the game reads answers from and writes its output to.
pub trait Console {
    /// Shows one line of text to the user.
    fn say(&mut self, text: &str) -> anyhow::Result<()>;

    /// Shows `prompt` and reads one line, without the line ending.
    ///
    /// Fails with [`InputClosed`] at the end of the input.
    fn ask(&mut self, prompt: &str) -> anyhow::Result<String>;
}

/// A [`Console`] on top of any line-based reader and writer.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    // A re-usable buffer for reading lines.
    // Should always be empty before and after ask().
    buf: String,
}

impl Terminal<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn say(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let num_bytes_read = self.input.read_line(&mut self.buf)?;
        if num_bytes_read == 0 {
            // 0 bytes read means EOF
            return Err(InputClosed.into());
        }
        let answer = String::from(self.buf.trim_end_matches(['\n', '\r']));
        self.buf.clear();
        Ok(answer)
    }
}

/// Asks until the answer is an integer.
pub fn ask_integer(console: &mut dyn Console, prompt: &str) -> anyhow::Result<isize> {
    loop {
        let answer = console.ask(prompt)?;
        match answer.trim().parse::<isize>() {
            Ok(num) => return Ok(num),
            Err(err) => {
                debug!(?answer, %err, "Not an integer");
                console.say("The input must be an integer")?;
            }
        }
    }
}

/// Asks until the answer is one of the two symbols.
pub fn ask_symbol(console: &mut dyn Console) -> anyhow::Result<Symbol> {
    loop {
        let answer = console.ask("Please choose x or o: ")?;
        match answer.parse::<Symbol>() {
            Ok(symbol) => return Ok(symbol),
            Err(err) => debug!(?answer, %err, "Not a symbol"),
        }
    }
}

/// `y` or `yes` mean yes, anything else means no.
pub fn ask_yes_no(console: &mut dyn Console, prompt: &str) -> anyhow::Result<bool> {
    let answer = console.ask(prompt)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
