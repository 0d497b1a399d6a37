use crate::config::Job;
use crate::convert::{self, JpegInfo};
use crate::encode;
use crate::error::ErrorKind;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    CheckExists,
    Convert,
    Encode,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub jpeg: JpegInfo,
    pub b64_len: usize,
}

/// Runs check, convert and encode in order, calling `on_stage` after each
/// one completes. Stops at the first error; outputs already written stay.
pub fn run(job: &Job, mut on_stage: impl FnMut(Stage)) -> Result<Report> {
    if !job.input.exists() {
        error!("{} does not exist", job.input.display());
        return Err(ErrorKind::MissingInput(job.input.clone()))?;
    }
    on_stage(Stage::CheckExists);

    let jpeg = convert::to_jpeg(&job.input, &job.jpeg_output, job.quality)?;
    info!(
        "Wrote {}x{} jpeg to {}",
        jpeg.width,
        jpeg.height,
        job.jpeg_output.display()
    );
    on_stage(Stage::Convert);

    let b64_len = encode::to_base64_file(&job.input, &job.b64_output)?;
    info!("Wrote base64 to {}", job.b64_output.display());
    on_stage(Stage::Encode);

    on_stage(Stage::Done);
    Ok(Report { jpeg, b64_len })
}
