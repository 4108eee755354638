use opencv::{
    core::Mat,
    prelude::*,
    videoio::{self, VideoCapture},
};
use std::fmt;

use crate::app::FrameStream;

// Defines the error types.
#[derive(Debug, Clone)]
pub enum StreamError {
    OpenCV(String),
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::OpenCV(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StreamError {}

/// A struct responsible for opening a video stream and decoding it frame by
/// frame. The source can be an RTSP/HTTP URL or a local file path.
pub struct FrameSource {
    cap: VideoCapture,
}

impl FrameSource {
    /// Creates a new FrameSource by opening the specified stream source.
    pub fn open(source: &str) -> Result<Self, StreamError> {
        let cap = VideoCapture::from_file(source, videoio::CAP_ANY)
            .map_err(|e| StreamError::OpenCV(format!("Failed to open stream: {:?}", e)))?;

        // Check if the capture was actually opened successfully.
        if !cap.is_opened().unwrap_or(false) {
            return Err(StreamError::OpenCV(format!(
                "Failed to open stream: {}",
                source
            )));
        }

        Ok(Self { cap })
    }

    /// Returns the frames per second (FPS) reported by the source.
    pub fn fps(&self) -> f64 {
        self.cap.get(videoio::CAP_PROP_FPS).unwrap_or(0.0)
    }

    /// Returns the width of the stream's frames.
    pub fn width(&self) -> u32 {
        self.cap.get(videoio::CAP_PROP_FRAME_WIDTH).unwrap_or(0.0) as u32
    }

    /// Returns the height of the stream's frames.
    pub fn height(&self) -> u32 {
        self.cap.get(videoio::CAP_PROP_FRAME_HEIGHT).unwrap_or(0.0) as u32
    }

    /// Reads the next decoded frame from the stream.
    /// Returns `None` at end-of-stream or on any read failure.
    pub fn read_frame(&mut self) -> Option<Mat> {
        let mut frame = Mat::default();
        match self.cap.read(&mut frame) {
            Ok(true) if !frame.empty() => Some(frame),
            // End of stream or read error; the caller treats both the same.
            _ => None,
        }
    }
}

impl FrameStream for FrameSource {
    fn next_frame(&mut self) -> Option<Mat> {
        self.read_frame()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io::Write, path::PathBuf};
    use tempfile::NamedTempFile;

    /// Helper to create a temporary empty file.
    fn create_empty_temp_file() -> PathBuf {
        let mut file = NamedTempFile::new().expect("Failed to create temporary file");
        file.write_all(b"")
            .expect("Failed to write to temporary file");
        file.path().to_path_buf()
    }

    #[test]
    fn test_frame_source_open_non_existent_file() {
        let source_result = FrameSource::open("non_existent_stream.mp4");
        assert!(source_result.is_err());
        if let Err(StreamError::OpenCV(msg)) = source_result {
            assert!(msg.contains("Failed to open stream"));
        } else {
            panic!("Expected an OpenCV error for non-existent source.");
        }
    }

    #[test]
    fn test_frame_source_open_empty_file() {
        let empty_file_path = create_empty_temp_file();
        let source_result = FrameSource::open(empty_file_path.to_str().unwrap());
        // Expecting an error because an empty file is not a valid video
        assert!(
            source_result.is_err(),
            "FrameSource::open should return an error for an empty file."
        );
        if let Err(StreamError::OpenCV(msg)) = source_result {
            assert!(msg.contains("Failed to open stream"));
        } else {
            panic!("Expected an OpenCV error for empty file.");
        }
    }
}
