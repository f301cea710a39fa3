#![forbid(unsafe_code)]

//! Injected clipboard capability.
//!
//! The planner never touches a global clipboard. Hosts hand a
//! [`ClipboardService`] to the component when a copy is requested; the
//! component reports the outcome back as a [`CopyAck`] so the host can
//! show its acknowledgment. Failure is non-fatal and never retried.

/// Outcome of a clipboard write, surfaced to the user by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyAck {
    /// The text reached the clipboard.
    Copied,
    /// The write failed; the reason is host-facing text.
    Failed(String),
}

impl CopyAck {
    /// True when the write succeeded.
    #[must_use]
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied)
    }
}

/// A host-supplied clipboard sink.
///
/// Implementations may complete asynchronously behind the scenes; the
/// planner treats the call as fire-and-forget and only relays the
/// acknowledgment it gets.
pub trait ClipboardService {
    /// Copy `text` to the system clipboard.
    fn copy(&mut self, text: &str) -> CopyAck;
}

/// In-memory clipboard for tests and headless hosts.
///
/// Records the last copied payload; can be constructed failing to
/// exercise the error path.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    fail: bool,
}

impl MemoryClipboard {
    /// A working in-memory clipboard.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            contents: None,
            fail: true,
        }
    }

    /// The last successfully copied payload.
    #[must_use]
    pub fn last_copied(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardService for MemoryClipboard {
    fn copy(&mut self, text: &str) -> CopyAck {
        if self.fail {
            return CopyAck::Failed("clipboard rejected the write".into());
        }
        self.contents = Some(text.to_string());
        CopyAck::Copied
    }
}

/// A clipboard for hosts without clipboard access; every write fails
/// with a fixed reason.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopClipboard;

impl ClipboardService for NoopClipboard {
    fn copy(&mut self, _text: &str) -> CopyAck {
        CopyAck::Failed("clipboard unavailable".into())
    }
}
