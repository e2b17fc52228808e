/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
mod frame;

use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use thiserror::Error;

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Logger(#[from] log::SetLoggerError),

    #[error("Image has no pixels")]
    EmptyImage,
}

type AppResult<T> = Result<T, AppError>;

/// Renders an image the way a protanope would see it.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Image to read
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the simulated image
    #[arg(short, long)]
    output: PathBuf,

    /// Worker threads, defaults to the number of logical CPUs
    #[arg(short, long)]
    threads: Option<usize>,

    /// Log how many pixels had to be clamped into the displayable range
    #[arg(long)]
    report_gamut: bool,
}

fn init_logging() -> AppResult<()> {
    let mut builder = pretty_env_logger::formatted_timed_builder();

    if let Ok(s) = ::std::env::var("RUST_LOG") {
        builder.parse_filters(&s);
    } else {
        builder.parse_filters("info");
    }

    Ok(builder.try_init()?)
}

fn run(args: Args) -> AppResult<()> {
    let mut img = image::open(&args.input)?.to_rgb8();
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(AppError::EmptyImage);
    }
    log::info!("Loaded [{}] {width}x{height}", args.input.display());

    let threads = args.threads.unwrap_or_else(num_cpus::get).max(1);
    log::debug!("Simulating on {threads} threads");

    let instant = Instant::now();
    let deviation = frame::simulate_frame(&mut img, width as usize * 3, threads);
    log::info!(
        "Simulated {} pixels in {:?}, RMSD: {:.6}",
        deviation.points,
        instant.elapsed(),
        deviation.rmsd()
    );
    if deviation.failures > 0 {
        log::warn!("{} pixels could not be simulated", deviation.failures);
    }
    if args.report_gamut {
        log::info!(
            "{} pixels were clamped into the displayable range",
            deviation.out_of_gamut
        );
    }

    img.save(&args.output)?;
    log::info!("Wrote [{}]", args.output.display());
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {e}");
    }
    if let Err(e) = run(args) {
        log::error!("Error running program: {e}");
        std::process::exit(1);
    }
}
