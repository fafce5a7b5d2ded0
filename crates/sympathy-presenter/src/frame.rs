//! Frames, animations, and the presenter queue.

use std::collections::VecDeque;

use serde::Serialize;

/// Floor for the client refresh delay, in seconds. Keeps a hostile or
/// degenerate pacing value from turning the browser into a reload loop.
pub const MIN_REFRESH_SECONDS: u64 = 2;

/// Default minimum display time per line, in seconds.
pub const DEFAULT_DWELL: f64 = 0.3;

/// Default gap between frames, in seconds.
pub const DEFAULT_PAUSE: f64 = 1.0;

/// One paginated unit of narrative text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    /// The lines this frame displays.
    pub lines: Vec<String>,
}

impl Frame {
    /// True if the frame carries nothing a renderer could show.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }
}

/// Result of popping the frame queue.
///
/// Exhaustion is a distinct arm rather than an error so callers must
/// handle both explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Popped {
    /// The head frame, removed from the queue.
    Frame(Frame),
    /// The queue is empty; the caller may rebuild.
    Exhausted,
}

/// A frame plus pacing metadata for the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Animation {
    /// The frame to display.
    pub frame: Frame,
    /// Minimum display time per line, seconds.
    pub dwell: f64,
    /// Gap before the next frame, seconds.
    pub pause: f64,
}

impl Animation {
    /// The client reload delay in whole seconds, floored at
    /// [`MIN_REFRESH_SECONDS`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
    pub fn refresh_delay(&self) -> u64 {
        let raw = (self.dwell * self.frame.lines.len() as f64 + self.pause).ceil();
        (raw as u64).max(MIN_REFRESH_SECONDS)
    }
}

/// FIFO scheduler turning text into timed frames.
#[derive(Debug, Clone)]
pub struct Presenter {
    /// Story title carried through to the renderer.
    pub title: String,
    /// Minimum display time per line, seconds.
    pub dwell: f64,
    /// Gap between frames, seconds.
    pub pause: f64,
    frames: VecDeque<Frame>,
}

impl Presenter {
    /// Builds a presenter from ordered groups of lines, one frame per
    /// group. Building is idempotent: the same segments always produce the
    /// same queue.
    #[must_use]
    pub fn build(title: impl Into<String>, segments: Vec<Vec<String>>) -> Self {
        Self {
            title: title.into(),
            dwell: DEFAULT_DWELL,
            pause: DEFAULT_PAUSE,
            frames: segments.into_iter().map(|lines| Frame { lines }).collect(),
        }
    }

    /// Removes and returns the head frame, or signals exhaustion.
    pub fn pop(&mut self) -> Popped {
        match self.frames.pop_front() {
            Some(frame) => Popped::Frame(frame),
            None => Popped::Exhausted,
        }
    }

    /// Wraps a frame in pacing metadata; `None` for a frame with nothing
    /// to display.
    #[must_use]
    pub fn animate(&self, frame: Frame) -> Option<Animation> {
        if frame.is_blank() {
            return None;
        }
        Some(Animation {
            frame,
            dwell: self.dwell,
            pause: self.pause,
        })
    }

    /// True if more frames are queued.
    #[must_use]
    pub fn pending(&self) -> bool {
        !self.frames.is_empty()
    }

    /// Number of frames still queued.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True if no frames are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
