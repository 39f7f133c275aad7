// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use edlstrip::app_config::{Config, LogLevel};
use edlstrip::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Strip commercials off a recording using its EDL (default command)
    #[command(alias = "strip")]
    Strip(StripArgs),

    /// Generate shell completions for edlstrip
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct StripArgs {
    /// Video file to strip
    #[arg(value_name = "VIDEO")]
    video: PathBuf,

    /// EDL file used to control stripping (default: <video>.edl)
    #[arg(value_name = "EDL")]
    edl: Option<PathBuf>,

    /// The video codec used to transcode the splits
    #[arg(long, default_value = "copy")]
    vcodec: String,

    /// The audio codec used to transcode the splits
    #[arg(long, default_value = "copy")]
    acodec: String,

    /// The file to write out to (default: <video>_comskipped.mkv)
    #[arg(short, long)]
    outfile: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// edlstrip - Strips commercials off DVR recordings using an EDL file
///
/// Parses a comskip-style EDL cut list, probes the recording's duration,
/// inverts the cuts into the segments worth keeping, extracts each segment
/// with ffmpeg and losslessly joins them into a single MKV.
#[derive(Parser, Debug)]
#[command(name = "edlstrip")]
#[command(version = "1.0.0")]
#[command(about = "Strips commercials off DVR recordings using outputted EDL files")]
#[command(long_about = "edlstrip cuts the commercial regions an EDL file marks out of a recording and \
joins what remains into a single MKV, delegating all media work to ffmpeg.

EXAMPLES:
    edlstrip recording.mpg                      # Use recording.edl, write recording_comskipped.mkv
    edlstrip recording.mpg custom.edl           # Explicit EDL file
    edlstrip --vcodec libx264 recording.mpg     # Frame-accurate cuts via transcode
    edlstrip -o clean.mkv recording.mpg         # Explicit output path
    edlstrip -l debug recording.mpg             # Show the underlying ffmpeg commands
    edlstrip completions bash > edlstrip.bash   # Generate bash completions

CODECS:
    Both codecs default to 'copy' (lossless stream copy). Copy is fast but can
    only cut on keyframes, so boundaries may be off by up to one keyframe
    interval. Pass a real encoder (e.g. --vcodec libx264) for exact cuts.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Video file to strip
    #[arg(value_name = "VIDEO")]
    video: Option<PathBuf>,

    /// EDL file used to control stripping (default: <video>.edl)
    #[arg(value_name = "EDL")]
    edl: Option<PathBuf>,

    /// The video codec used to transcode the splits
    #[arg(long, default_value = "copy")]
    vcodec: String,

    /// The audio codec used to transcode the splits
    #[arg(long, default_value = "copy")]
    acodec: String,

    /// The file to write out to (default: <video>_comskipped.mkv)
    #[arg(short, long)]
    outfile: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default;
    // the level is updated after the CLI options are resolved
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "edlstrip", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Strip(args)) => run_strip(args).await,
        None => {
            // Default behavior - use top-level args
            let video = cli
                .video
                .ok_or_else(|| anyhow!("VIDEO is required when no subcommand is specified"))?;

            let strip_args = StripArgs {
                video,
                edl: cli.edl,
                vcodec: cli.vcodec,
                acodec: cli.acodec,
                outfile: cli.outfile,
                log_level: cli.log_level,
            };
            run_strip(strip_args).await
        }
    }
}

async fn run_strip(options: StripArgs) -> Result<()> {
    // Check that ffmpeg exists on the commandline path before doing any work
    if which::which("ffmpeg").is_err() {
        return Err(anyhow!(
            "ffmpeg was not found on the path of this system! Please install it and try again."
        ));
    }

    // Resolve the configuration: defaults first, then CLI overrides
    let mut config = Config::new(options.video);
    if let Some(edl) = options.edl {
        config.edl = edl;
    }
    if let Some(outfile) = options.outfile {
        config.out_file = outfile;
    }
    config.vcodec = options.vcodec;
    config.acodec = options.acodec;
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    }

    log::set_max_level(config.log_level.to_level_filter());

    config.validate().context("Configuration validation failed")?;

    intro_log(&config);

    let controller = Controller::with_config(config)?;
    controller.run().await
}

// @prints: Banner and the resolved run parameters
fn intro_log(config: &Config) {
    println!(
        r"
          _ _     _        _
  ___  __| | |___| |_ _ __(_)_ __
 / _ \/ _` | / __| __| '__| | '_ \
|  __/ (_| | \__ \ |_| |  | | |_) |
 \___|\__,_|_|___/\__|_|  |_| .__/
                            |_|
"
    );
    println!("Video: {}", config.video.display());
    println!("EDL: {}", config.edl.display());
    println!("vcodec: {}", config.vcodec);
    println!("acodec: {}", config.acodec);
    println!("Output: {}\n", config.out_file.display());
}
