//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Per-display-frame callback scheduling
//! - Score text display
//! - Canvas drawing (`web::CanvasSurface`, see `renderer::Surface`)

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::error::PlatformError;

/// Identifies one pending frame callback so it can be withdrawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Registers the game's per-frame callback with the host
///
/// Each request fires at most once, with a monotonically increasing
/// timestamp in milliseconds.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle, PlatformError>;

    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Text sink for the score readout
pub trait ScoreSink {
    fn set_text(&mut self, text: &str);
}

/// Score readout text
pub fn score_text(score: u64) -> String {
    format!("Score: {}", score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_text() {
        assert_eq!(score_text(0), "Score: 0");
        assert_eq!(score_text(1234), "Score: 1234");
    }
}
