//! Input port - where player commands come from

use crate::{Result, controller::Command};

/// Blocking source of player commands.
///
/// Implementations decode raw input themselves and never surface keys they do
/// not understand; `next_command` simply waits for the next meaningful one.
pub trait InputSource {
    /// Block until the next command is available.
    ///
    /// Returns `Ok(None)` when the source is exhausted, which the controller
    /// treats as a quit.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying device cannot be read.
    fn next_command(&mut self) -> Result<Option<Command>>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn next_command(&mut self) -> Result<Option<Command>> {
        (**self).next_command()
    }
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn next_command(&mut self) -> Result<Option<Command>> {
        (**self).next_command()
    }
}
