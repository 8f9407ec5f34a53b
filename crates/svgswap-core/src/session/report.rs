use crate::error::SwapError;

/// A placeholder that was left in place.
#[derive(Debug)]
pub struct Failure {
    /// Position among the page's placeholders (document order).
    pub index: usize,
    /// The placeholder's raw `src`, if it had one.
    pub src: Option<String>,
    pub error: SwapError,
}

/// Outcome of rewriting one page.
#[derive(Debug)]
pub struct SwapReport {
    pub html: String,
    /// Placeholders matched by the selector.
    pub placeholders: usize,
    pub replaced: usize,
    pub failures: Vec<Failure>,
}

impl SwapReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
