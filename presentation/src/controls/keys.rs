//! Line-based key controls read from stdin while a run is in progress.
//!
//! `x` cancels the run, `q` quits the program, anything else prints
//! "Waiting...". Input is line-buffered, so each key is followed by Enter.

use std::io::{BufRead, IsTerminal};
use tokio_util::sync::CancellationToken;

/// A command typed by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Cancel,
    Quit,
    Other,
}

impl KeyCommand {
    pub fn parse(line: &str) -> Self {
        match line.trim().chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('x') => KeyCommand::Cancel,
            Some('q') => KeyCommand::Quit,
            _ => KeyCommand::Other,
        }
    }
}

/// Background stdin reader wired to a run's cancellation token
pub struct KeyControls {
    cancel: CancellationToken,
    quit: CancellationToken,
}

impl KeyControls {
    pub fn new(cancel: CancellationToken) -> Self {
        Self {
            cancel,
            quit: CancellationToken::new(),
        }
    }

    /// Token cancelled when the user asks to quit
    pub fn quit_token(&self) -> CancellationToken {
        self.quit.clone()
    }

    /// Apply one command to the tokens. Returns false once reading should stop.
    pub fn handle(&self, command: KeyCommand) -> bool {
        match command {
            KeyCommand::Cancel => {
                eprintln!("Cancelling...");
                self.cancel.cancel();
                true
            }
            KeyCommand::Quit => {
                self.quit.cancel();
                self.cancel.cancel();
                false
            }
            KeyCommand::Other => {
                eprintln!("Waiting...");
                true
            }
        }
    }

    /// Start reading stdin on a detached thread.
    ///
    /// Does nothing when stdin is not a terminal. A blocking stdin read
    /// cannot be interrupted, so the thread is never joined.
    pub fn spawn(self) -> CancellationToken {
        let quit = self.quit_token();
        if !std::io::stdin().is_terminal() {
            return quit;
        }

        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else {
                    break;
                };
                if !self.handle(KeyCommand::parse(&line)) {
                    break;
                }
            }
        });
        quit
    }
}
