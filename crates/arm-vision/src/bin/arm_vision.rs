use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use arm_vision::detect::MarkerDetector;
use arm_vision::{
    read_events, ArmPipeline, ArmVisionConfig, CameraId, JsonLinesSink, StereoRuntime,
};
use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(
    name = "arm-vision",
    version,
    about = "Estimate arm joint angles from two orthogonal camera views"
)]
struct Cli {
    /// JSON config file (pipeline, detector, log level).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace). Overrides the config.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON via tracing.
    #[cfg(feature = "tracing")]
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fuse line-delimited detection events and print one result per camera-B frame.
    Fuse {
        /// Input JSONL file, `-` for stdin.
        #[arg(long)]
        input: PathBuf,
        /// Output JSONL file. Defaults to stdout.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Maximum number of queued events.
        #[arg(long, default_value_t = 64)]
        queue: usize,
    },
    /// Detect the four markers in one image and print the detection set.
    #[cfg(feature = "image")]
    Detect {
        #[arg(long)]
        image: PathBuf,
    },
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cfg = match &cli.config {
        Some(path) => ArmVisionConfig::load_json(path)?,
        None => ArmVisionConfig::default(),
    };
    init_logging(&cli, &cfg)?;

    match cli.command {
        Command::Fuse {
            input,
            output,
            queue,
        } => run_fuse(&cfg, &input, output.as_deref(), queue),
        #[cfg(feature = "image")]
        Command::Detect { image } => run_detect(&cfg, &image),
    }
}

fn init_logging(cli: &Cli, cfg: &ArmVisionConfig) -> Result<(), Box<dyn std::error::Error>> {
    let level = match cli.verbose {
        0 => cfg.level_filter()?,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    #[cfg(feature = "tracing")]
    {
        tracing_log::LogTracer::init_with_filter(level)?;
        arm_vision::core::init_tracing(cli.json_logs);
    }
    #[cfg(not(feature = "tracing"))]
    arm_vision::core::init_with_level(level)?;

    Ok(())
}

fn run_fuse(
    cfg: &ArmVisionConfig,
    input: &Path,
    output: Option<&Path>,
    queue: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let reader: Box<dyn io::BufRead> = if input == Path::new("-") {
        Box::new(io::stdin().lock())
    } else {
        Box::new(BufReader::new(File::open(input)?))
    };
    let writer: Box<dyn Write + Send> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout()),
    };

    let pipeline = ArmPipeline::new(cfg.pipeline, JsonLinesSink::new(writer));
    let detector = MarkerDetector::new(cfg.detector.clone());
    let runtime = StereoRuntime::spawn(pipeline, detector, queue)?;

    let camera_a = runtime.handle(CameraId::A);
    let camera_b = runtime.handle(CameraId::B);
    let mut events = 0usize;
    for event in read_events(reader) {
        let handle = match event.camera {
            CameraId::A => &camera_a,
            CameraId::B => &camera_b,
        };
        handle.send_detections(event.markers)?;
        events += 1;
    }
    drop(camera_a);
    drop(camera_b);

    let pipeline = runtime.join()?;
    log::info!(
        "processed {events} events, published {} results",
        pipeline.triggers()
    );
    pipeline.into_sink().into_inner().flush()?;
    Ok(())
}

#[cfg(feature = "image")]
fn run_detect(cfg: &ArmVisionConfig, image: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let img = arm_vision::image_io::load_rgb(image)?;
    let detector = MarkerDetector::new(cfg.detector.clone());
    let detections = arm_vision::image_io::detect_markers(&img, &detector);
    let missing: Vec<_> = detections
        .iter()
        .filter(|(_, d)| d.is_none())
        .map(|(c, _)| c.name())
        .collect();
    if !missing.is_empty() {
        log::info!("not found: {}", missing.join(", "));
    }
    println!("{}", serde_json::to_string_pretty(&detections)?);
    Ok(())
}
