use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use video_deinterlace::{
    DEFAULT_MODE, DeinterlaceConfig, Deinterlacer, InputDescriptor, PixelFormat, RenderOutcome,
    Timestamp,
};

mod raw;
mod sink;

use raw::RawReader;
use sink::FileSink;

#[derive(Parser, Debug)]
#[command(name = "deint")]
#[command(about = "Deinterlace raw planar YUV video")]
struct Args {
    /// Raw input file, frames stored back to back
    input: PathBuf,

    /// Raw output file
    output: PathBuf,

    /// Frame width in pixels
    #[arg(long)]
    width: u32,

    /// Frame height in pixels
    #[arg(long)]
    height: u32,

    /// Input pixel format (i420, iyuv, yv12 or i422)
    #[arg(short, long, default_value = "i420")]
    format: PixelFormat,

    /// Deinterlace mode (discard, mean, blend, bob or linear)
    #[arg(short, long, env = "DEINTERLACE_MODE", default_value = DEFAULT_MODE)]
    mode: String,

    /// Time between input frames, in microseconds
    #[arg(long, default_value_t = 40_000)]
    frame_duration_us: i64,

    /// Timestamp of the first input frame, in microseconds
    #[arg(long, default_value_t = 0)]
    start_us: i64,

    /// Log more (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Counts reported once the whole input has been processed.
#[derive(Debug, PartialEq, Eq)]
struct Summary {
    input_frames: usize,
    output_frames: usize,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<Summary> {
    let config = DeinterlaceConfig::new().with_mode(args.mode.as_str());
    let input = InputDescriptor {
        format: args.format,
        width: args.width,
        height: args.height,
    };

    let out = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    let mut sink = FileSink::new(BufWriter::new(out));

    let mut deinterlacer = Deinterlacer::new(&config, input, &mut sink)?;
    let Some(geometry) = deinterlacer.output() else {
        bail!("{} input cannot be deinterlaced", args.format);
    };
    info!(
        mode = %deinterlacer.mode(),
        output = %geometry,
        "deinterlacing {}",
        args.input.display()
    );

    let file = File::open(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?;
    let mut reader = RawReader::new(BufReader::new(file), args.format, args.width, args.height)?;

    let mut input_frames = 0;
    loop {
        let timestamp = Timestamp(args.start_us + input_frames as i64 * args.frame_duration_us);
        let Some(frame) = reader.read_frame(timestamp)? else {
            break;
        };
        input_frames += 1;

        match deinterlacer.render(&frame, &mut sink) {
            Ok(RenderOutcome::Displayed(_)) => {}
            Ok(RenderOutcome::Inactive) => break,
            Err(e) if e.is_cancelled() => {
                warn!("output aborted after {input_frames} input frames");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    deinterlacer.close(&mut sink);
    let output_frames = sink.written();
    sink.finish()
        .with_context(|| format!("writing {}", args.output.display()))?;

    Ok(Summary {
        input_frames,
        output_frames,
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let summary = run(&args)?;
    info!(
        input_frames = summary.input_frames,
        output_frames = summary.output_frames,
        "done"
    );

    Ok(())
}
