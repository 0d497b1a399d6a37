use clap::Parser;
use log::debug;
use logo2jpg::{run, Job, Stage, DEFAULT_B64_OUTPUT, DEFAULT_JPEG_OUTPUT, DEFAULT_QUALITY};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "logo2jpg")]
#[command(author, version, about = "Convert an image to JPEG and save a base64 copy of the original", long_about = None)]
struct Cli {
    /// Source image
    input: PathBuf,

    /// Where to write the JPEG
    #[arg(long = "jpg", default_value = DEFAULT_JPEG_OUTPUT)]
    jpeg_output: PathBuf,

    /// Where to write the base64 text of the source file
    #[arg(long = "b64", default_value = DEFAULT_B64_OUTPUT)]
    b64_output: PathBuf,

    /// JPEG quality
    #[arg(long, default_value_t = DEFAULT_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    quality: u8,
}

impl From<Cli> for Job {
    fn from(cli: Cli) -> Self {
        Job::new(cli.input)
            .jpeg_output(cli.jpeg_output)
            .b64_output(cli.b64_output)
            .quality(cli.quality)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let job = Job::from(Cli::parse());
    println!("Checking input: {}", job.input.display());

    let result = run(&job, |stage| match stage {
        Stage::Convert => println!("JPG_CREATED"),
        Stage::Encode => println!("B64_SAVED"),
        Stage::CheckExists | Stage::Done => {}
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            println!("ERROR: {e}");
            debug!("{}", e.backtrace);
            ExitCode::FAILURE
        }
    }
}
