//! Exporters for design-system artifacts
//!
//! Three pure renderers (Markdown document, CSS variables, Tailwind theme
//! block) plus the delivery layer that copies the Markdown document to the
//! clipboard and tracks the transient copied indicator.

pub mod css;
pub mod markdown;
pub mod tailwind;

use crate::clipboard::ClipboardBackend;
use crate::config::TokenConfig;
use std::time::Instant;

/// How long the copied indicator stays set, in milliseconds
pub const COPIED_RESET_MS: u64 = 2000;

/// Transient copied-to-clipboard flag with a timed reset
#[derive(Debug, Default)]
pub struct CopiedIndicator {
    copied_at: Option<Instant>,
}

impl CopiedIndicator {
    pub fn new() -> Self {
        Self { copied_at: None }
    }

    /// Record a copy. Re-marking restarts the reset window.
    pub fn mark(&mut self) {
        self.copied_at = Some(Instant::now());
    }

    /// Clear the flag once the reset window has elapsed
    pub fn tick(&mut self) {
        if let Some(at) = self.copied_at {
            if at.elapsed().as_millis() as u64 >= COPIED_RESET_MS {
                self.copied_at = None;
            }
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied_at.is_some()
    }
}

/// Renders the Markdown document and delivers it to the clipboard
pub struct ExportDelivery<C: ClipboardBackend> {
    clipboard: C,
    pub indicator: CopiedIndicator,
}

impl<C: ClipboardBackend> ExportDelivery<C> {
    pub fn new(clipboard: C) -> Self {
        Self {
            clipboard,
            indicator: CopiedIndicator::new(),
        }
    }

    /// Render the Markdown document, copy it, and mark the indicator
    ///
    /// The document is returned either way; a failed copy is logged and
    /// leaves the indicator unset.
    pub fn deliver_markdown(&mut self, config: &TokenConfig) -> String {
        let document = markdown::render(config, chrono::Utc::now());
        match self.clipboard.copy_text(&document) {
            Ok(()) => self.indicator.mark(),
            Err(e) => tracing::warn!("Clipboard copy failed: {}", e),
        }
        document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_indicator_starts_clear() {
        let indicator = CopiedIndicator::new();
        assert!(!indicator.is_copied());
    }

    #[test]
    fn test_mark_sets_indicator() {
        let mut indicator = CopiedIndicator::new();
        indicator.mark();
        assert!(indicator.is_copied());

        // Within the window a tick leaves it set
        indicator.tick();
        assert!(indicator.is_copied());
    }

    #[test]
    fn test_tick_clears_after_window() {
        let mut indicator = CopiedIndicator::new();
        indicator.copied_at = Some(Instant::now() - Duration::from_millis(COPIED_RESET_MS + 1));
        indicator.tick();
        assert!(!indicator.is_copied());
    }

    #[test]
    fn test_remark_restarts_window() {
        let mut indicator = CopiedIndicator::new();
        indicator.copied_at = Some(Instant::now() - Duration::from_millis(COPIED_RESET_MS + 1));

        // A copy just before the stale flag would have been cleared
        indicator.mark();
        indicator.tick();
        assert!(indicator.is_copied());
    }
}
