use opencv::{core::Mat, highgui};
use std::fmt;

use crate::app::FrameSink;

/// How long a single key poll blocks, in milliseconds.
const KEY_POLL_MS: i32 = 1;

#[derive(Debug, Clone)]
pub enum DisplayError {
    OpenCV(String),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::OpenCV(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for DisplayError {}

/// An on-screen window that renders frames and polls the keyboard.
pub struct DisplayWindow {
    name: String,
}

impl DisplayWindow {
    pub fn new(name: &str) -> Result<Self, DisplayError> {
        highgui::named_window(name, highgui::WINDOW_AUTOSIZE)
            .map_err(|e| DisplayError::OpenCV(format!("Failed to create window: {:?}", e)))?;
        Ok(Self {
            name: name.to_owned(),
        })
    }

    /// Renders one frame to the window.
    pub fn show(&self, frame: &Mat) -> Result<(), DisplayError> {
        highgui::imshow(&self.name, frame)
            .map_err(|e| DisplayError::OpenCV(format!("Failed to display frame: {:?}", e)))
    }

    /// Waits up to the poll interval for a key press. The platform key code
    /// is masked to its lowest 8 bits; no key within the interval is `None`.
    pub fn poll_key(&self) -> Result<Option<u8>, DisplayError> {
        let code = highgui::wait_key(KEY_POLL_MS)
            .map_err(|e| DisplayError::OpenCV(format!("Failed to poll for key: {:?}", e)))?;
        if code < 0 {
            Ok(None)
        } else {
            Ok(Some((code & 0xff) as u8))
        }
    }
}

impl Drop for DisplayWindow {
    fn drop(&mut self) {
        // Window teardown failure at shutdown is not actionable.
        let _ = highgui::destroy_window(&self.name);
    }
}

impl FrameSink for DisplayWindow {
    fn render(&mut self, frame: &Mat) -> Result<(), DisplayError> {
        self.show(frame)
    }

    fn poll_key(&mut self) -> Result<Option<u8>, DisplayError> {
        DisplayWindow::poll_key(self)
    }
}
