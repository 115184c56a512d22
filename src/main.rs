//! pcjson - Vulkan SC pipeline JSON tool
//!
//! Normalizes, checks and hashes pipeline documents, and renders object
//! reservation headers from snapshots.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vksc_pipeline_json::{
    capture::ArtifactWriter,
    config::{self, Settings},
    document::{content_uuid, generate_pipeline_json, parse_pipeline_json, UuidMode},
    generate_struct_json,
    model::DeviceId,
    parse_struct_json,
    reservation::{header, ReservationSnapshot},
};

#[derive(Parser, Debug)]
#[command(name = "pcjson", version, about = "Vulkan SC pipeline JSON tool")]
struct Args {
    /// Settings file (defaults to settings.toml in the app data directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a pipeline document and write it back in canonical form
    Normalize {
        input: PathBuf,

        /// Write here instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// How PipelineUUID is filled in (defaults to the configured mode)
        #[arg(long, value_enum)]
        uuid_mode: Option<UuidArg>,

        /// Single-line output
        #[arg(long, action = clap::ArgAction::SetTrue)]
        compact: bool,
    },
    /// Print the content hash of a pipeline document
    Uuid {
        input: PathBuf,

        /// Leave shader file names out of the hash
        #[arg(long, action = clap::ArgAction::SetTrue)]
        exclude_filenames: bool,
    },
    /// Parse a pipeline document and report every diagnostic
    Check { input: PathBuf },
    /// Normalize a single structure such as a bare VkSamplerCreateInfo
    Structure { input: PathBuf },
    /// Render the object reservation header of a snapshot
    ReservationHeader {
        /// Snapshot as written by the reservation tracker
        snapshot: PathBuf,

        /// Artifact name prefix (defaults to the configured process name)
        #[arg(long)]
        process: Option<String>,

        #[arg(long, default_value_t = 0)]
        device: u64,

        /// Write into the configured output directory instead of stdout
        #[arg(long, action = clap::ArgAction::SetTrue)]
        write: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum UuidArg {
    Provided,
    ContentHash,
    ContentHashExcludingFilenames,
}

impl From<UuidArg> for UuidMode {
    fn from(arg: UuidArg) -> Self {
        match arg {
            UuidArg::Provided => UuidMode::Provided,
            UuidArg::ContentHash => UuidMode::ContentHash,
            UuidArg::ContentHashExcludingFilenames => UuidMode::ContentHashExcludingFilenames,
        }
    }
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write_output(output: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match output {
        Some(path) => std::fs::write(path, text)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}

fn run(args: Args, settings: Settings) -> anyhow::Result<()> {
    match args.command {
        Command::Normalize {
            input,
            output,
            uuid_mode,
            compact,
        } => {
            let parsed = parse_pipeline_json(&read(&input)?)
                .with_context(|| format!("Failed to parse {}", input.display()))?;
            for message in &parsed.messages {
                tracing::warn!("{}", message);
            }
            let mut options = settings.generator.clone();
            if let Some(mode) = uuid_mode {
                options.uuid_mode = mode.into();
            }
            if compact {
                options.pretty = false;
            }
            let generated = generate_pipeline_json(&parsed.value, &options)?;
            for message in &generated.messages {
                tracing::warn!("{}", message);
            }
            write_output(output.as_deref(), &generated.value)
        }
        Command::Uuid {
            input,
            exclude_filenames,
        } => {
            let tree: serde_json::Value = serde_json::from_str(&read(&input)?)
                .with_context(|| format!("{} is not JSON", input.display()))?;
            println!("{}", content_uuid(&tree, exclude_filenames)?);
            Ok(())
        }
        Command::Check { input } => {
            let parsed = match parse_pipeline_json(&read(&input)?) {
                Ok(parsed) => parsed,
                Err(e) => bail!("[ERROR] {}", e),
            };
            if !parsed.messages.is_empty() {
                println!("{}", parsed.report());
            }
            tracing::info!(
                "{}: {} pipeline, {} diagnostics",
                input.display(),
                if parsed.value.is_graphics() { "graphics" } else { "compute" },
                parsed.messages.len()
            );
            Ok(())
        }
        Command::Structure { input } => {
            let parsed = parse_struct_json(&read(&input)?)
                .with_context(|| format!("Failed to parse {}", input.display()))?;
            for message in &parsed.messages {
                tracing::warn!("{}", message);
            }
            let generated = generate_struct_json(&parsed.value)?;
            write_output(None, &generated.value)
        }
        Command::ReservationHeader {
            snapshot,
            process,
            device,
            write,
        } => {
            let snapshot: ReservationSnapshot = serde_json::from_str(&read(&snapshot)?)
                .context("Invalid reservation snapshot")?;
            let process = process.unwrap_or_else(|| settings.capture.process_name());
            if write {
                let writer = ArtifactWriter::from_settings(&settings.capture)?;
                let path = writer.write_reservation_header(&process, DeviceId(device), &snapshot)?;
                tracing::info!("Wrote {}", path.display());
            } else {
                print!("{}", header::render_header(&process, DeviceId(device), &snapshot));
            }
            Ok(())
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let settings = match args.config.clone().or_else(config::settings_path) {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };

    // Keep the guard alive so buffered file logs are flushed on exit
    let (file_layer, _guard) = match &settings.logging.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "pcjson.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&settings.logging.filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    run(args, settings)
}
