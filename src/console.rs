use crate::error::GameError;
use std::io::{BufRead, Write};
use std::time::Duration;

/// The text interface the game narrates through and reads answers from.
pub trait Console {
    /// Prints one line of narration.
    fn say(&mut self, line: &str) -> Result<(), GameError>;

    /// Shows `question` and returns the next line of input, without its line terminator.
    fn ask(&mut self, question: &str) -> Result<String, GameError>;

    /// Holds the narration for a moment.
    fn pause(&mut self, duration: Duration);
}

/// A [Console] over the process's stdin and stdout.
pub struct StdConsole<R, W> {
    input: R,
    output: W,
    pacing: bool,
}

impl StdConsole<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio(pacing: bool) -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout(), pacing)
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W, pacing: bool) -> Self {
        Self { input, output, pacing }
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn say(&mut self, line: &str) -> Result<(), GameError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn ask(&mut self, question: &str) -> Result<String, GameError> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn pause(&mut self, duration: Duration) {
        if self.pacing {
            self.output.flush().ok();
            std::thread::sleep(duration);
        }
    }
}
