use std::process::ExitCode;

use clap::Parser;
use log::{error, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use squish::error::CodecError;
use squish::tools::cli::{build_pipeline, Args, Command, Job};
use squish::tools::files;

fn main() -> ExitCode {
    let args = Args::parse();

    // Available log levels are Error, Warn, Info, Debug, Trace
    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto).unwrap();

    let result = match &args.command {
        Command::Compress(job) => run(job, true),
        Command::Decompress(job) => run(job, false),
    };

    match result {
        Ok(()) => {
            info!("Done.");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(job: &Job, compressing: bool) -> Result<(), CodecError> {
    files::validate_paths(job.algorithm.extension(), &job.input, &job.output, compressing)?;
    let pipeline = build_pipeline(job);

    let input = files::read_input(&job.input)?;
    info!("Read {} bytes from {}", input.len(), job.input.display());

    let output = if compressing {
        pipeline.compress(&input)?
    } else {
        pipeline.decompress(&input)?
    };

    files::write_output(&job.output, &output)?;
    info!(
        "Wrote {} bytes to {} ({} -> {} bytes)",
        output.len(),
        job.output.display(),
        input.len(),
        output.len()
    );
    Ok(())
}
