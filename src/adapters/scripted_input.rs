//! Scripted input source for tests and replays

use std::collections::VecDeque;

use crate::{Result, controller::Command, ports::InputSource};

/// Yields a fixed list of commands, then reports exhaustion.
///
/// # Examples
///
/// ```
/// use terminal_2048::adapters::ScriptedInput;
/// use terminal_2048::controller::Command;
/// use terminal_2048::ports::InputSource;
///
/// let mut input = ScriptedInput::new([Command::Restart, Command::Quit]);
/// assert_eq!(input.next_command()?, Some(Command::Restart));
/// assert_eq!(input.remaining(), 1);
/// # Ok::<(), terminal_2048::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    commands: VecDeque<Command>,
}

impl ScriptedInput {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
        }
    }

    pub fn push(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_command(&mut self) -> Result<Option<Command>> {
        Ok(self.commands.pop_front())
    }
}
