//! Renderer that keeps every frame, for assertions in tests

use crate::{Result, controller::Frame, ports::Renderer};

/// Collects frames instead of drawing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    frames: Vec<Frame>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &Frame) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}
