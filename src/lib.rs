#[macro_use]
extern crate log;

mod config;
mod convert;
mod encode;
mod error;
mod pipeline;

pub use config::{Job, DEFAULT_B64_OUTPUT, DEFAULT_JPEG_OUTPUT, DEFAULT_QUALITY};
pub use convert::JpegInfo;
pub use encode::base64_encode;
pub use error::{Error, ErrorKind, Result};
pub use pipeline::{run, Report, Stage};

/// Converts `job.input` to JPEG and saves a base64 copy of its raw bytes.
pub fn convert(job: &Job) -> Result<Report> {
    run(job, |_| ())
}
