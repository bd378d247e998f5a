//! Fatal host errors
//!
//! None of these are recoverable: the binary logs the error and exits.

use std::fmt;

#[derive(Debug)]
pub enum HostError {
    /// Event loop could not be created or failed while running
    EventLoop(String),
    /// Window creation failed
    Window(String),
    /// No drawable surface for the window
    Surface(String),
    /// No GPU adapter compatible with the surface
    Adapter(String),
    /// GPU device request failed
    Device(String),
    /// GPU ran out of memory while presenting
    OutOfMemory,
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostError::EventLoop(e) => write!(f, "event loop error: {}", e),
            HostError::Window(e) => write!(f, "failed to create window: {}", e),
            HostError::Surface(e) => write!(f, "failed to create surface: {}", e),
            HostError::Adapter(e) => write!(f, "no suitable GPU adapter: {}", e),
            HostError::Device(e) => write!(f, "failed to create GPU device: {}", e),
            HostError::OutOfMemory => write!(f, "GPU out of memory"),
        }
    }
}

impl std::error::Error for HostError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_failure() {
        let err = HostError::Window("no display".to_string());
        assert_eq!(err.to_string(), "failed to create window: no display");
        assert_eq!(HostError::OutOfMemory.to_string(), "GPU out of memory");
    }
}
