//! Ordered stack of transaction frames.
//!
//! Backed by a `Vec` with the top of the stack fixed at the back, so read
//! traversals are bounded index scans. Nothing here pops to inspect:
//! `iter_top_down` walks the frames without disturbing their order, which
//! keeps multi-frame reads trivially non-destructive.

use crate::frame::Frame;

/// Stack of open transaction frames, most-recently-opened on top.
#[derive(Debug, Default)]
pub struct FrameStack {
    frames: Vec<Frame>,
}

impl FrameStack {
    /// Create an empty stack (depth 0).
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Push `frame` as the new top.
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Pop and return the top frame, or `None` at depth 0.
    pub fn pop(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// The active (top) frame, if any.
    pub fn top(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Mutable access to the active (top) frame, if any.
    pub fn top_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    /// Number of open frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// True at depth 0.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// All frames from the top down to the bottom, order-preserving.
    pub fn iter_top_down(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter().rev()
    }

    /// Frames below the top, from the one directly under the top down to
    /// the bottom. Empty at depth <= 1.
    pub fn iter_parents_top_down(&self) -> impl Iterator<Item = &Frame> {
        let below_top = self.frames.len().saturating_sub(1);
        self.frames[..below_top].iter().rev()
    }
}
