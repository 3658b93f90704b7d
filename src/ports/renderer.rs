//! Renderer port - presenting frames to the player

use crate::{Result, controller::Frame};

/// Draws one frame per controller transition.
///
/// # Examples
///
/// ```
/// use terminal_2048::{controller::Frame, ports::Renderer};
///
/// struct CountingRenderer {
///     frames: usize,
/// }
///
/// impl Renderer for CountingRenderer {
///     fn render(&mut self, _frame: &Frame) -> terminal_2048::Result<()> {
///         self.frames += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Renderer {
    /// Present `frame`. Nothing is returned to the controller.
    ///
    /// # Errors
    ///
    /// Returns an error if the output device fails.
    fn render(&mut self, frame: &Frame) -> Result<()>;
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        (**self).render(frame)
    }
}

impl<T: Renderer + ?Sized> Renderer for Box<T> {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        (**self).render(frame)
    }
}
