//! Nesting state: one frame per open list or object.

use alloc::vec::Vec;

use crate::error::ErrorKind;

/// Which kind of compound a frame tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrameKind {
    List,
    Object,
}

/// A marker for one open compound.
///
/// `fresh` stays set until the frame's first child (or its immediate close)
/// has been produced; it suppresses the comma-or-close check for that first
/// item. Keeping the flag in the frame scopes it to the compound it belongs
/// to.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub kind: FrameKind,
    pub fresh: bool,
}

/// Stack of open compounds; depth equals the current nesting level.
///
/// Popping or peeking an empty stack yields `None`, which means "at top
/// level" and is never an error by itself.
#[derive(Debug)]
pub(crate) struct FrameStack {
    frames: Vec<Frame>,
}

impl Default for FrameStack {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStack {
    const DEFAULT_CAPACITY: usize = 16;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, kind: FrameKind) -> Result<(), ErrorKind> {
        self.frames.try_reserve(1).map_err(|_| ErrorKind::Memory)?;
        self.frames.push(Frame { kind, fresh: true });
        Ok(())
    }

    pub fn pop(&mut self) -> Option<FrameKind> {
        self.frames.pop().map(|frame| frame.kind)
    }

    pub fn top(&self) -> Option<Frame> {
        self.frames.last().copied()
    }

    /// Clears the first-child flag on the top frame.
    pub fn clear_fresh(&mut self) {
        if let Some(frame) = self.frames.last_mut() {
            frame.fresh = false;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{FrameKind, FrameStack};

    #[test]
    fn empty_stack_pops_none() {
        let mut stack = FrameStack::new();
        assert!(stack.pop().is_none());
        assert!(stack.top().is_none());
    }

    #[test]
    fn depth_tracks_nesting() {
        let mut stack = FrameStack::new();
        stack.push(FrameKind::List).unwrap();
        stack.push(FrameKind::Object).unwrap();
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.pop(), Some(FrameKind::Object));
        assert_eq!(stack.pop(), Some(FrameKind::List));
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn fresh_is_set_on_push_and_cleared_once() {
        let mut stack = FrameStack::new();
        stack.push(FrameKind::List).unwrap();
        assert!(stack.top().unwrap().fresh);
        stack.clear_fresh();
        assert!(!stack.top().unwrap().fresh);
        stack.push(FrameKind::Object).unwrap();
        assert!(stack.top().unwrap().fresh);
    }
}
