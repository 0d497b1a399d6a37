use std::path::{Path, PathBuf};

pub const DEFAULT_JPEG_OUTPUT: &str = "logo_personal.jpg";
pub const DEFAULT_B64_OUTPUT: &str = "logo.b64";
/// JPEG quality used when none is given.
pub const DEFAULT_QUALITY: u8 = 75;

/// Paths and settings for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub jpeg_output: PathBuf,
    pub b64_output: PathBuf,
    pub quality: u8,
}

impl Job {
    pub fn new(input: impl AsRef<Path>) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            jpeg_output: PathBuf::from(DEFAULT_JPEG_OUTPUT),
            b64_output: PathBuf::from(DEFAULT_B64_OUTPUT),
            quality: DEFAULT_QUALITY,
        }
    }

    pub fn jpeg_output(mut self, path: impl AsRef<Path>) -> Self {
        self.jpeg_output = path.as_ref().to_path_buf();
        self
    }

    pub fn b64_output(mut self, path: impl AsRef<Path>) -> Self {
        self.b64_output = path.as_ref().to_path_buf();
        self
    }

    /// JPEG quality, clamped to `1..=100`.
    pub fn quality(mut self, quality: u8) -> Self {
        self.quality = quality.clamp(1, 100);
        self
    }
}
