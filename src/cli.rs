use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::{
    classify::classify,
    config::Config,
    palette::{dominant_colors, extract_palette_with, ColorSample, PaletteResult},
    reader::validate,
    ECLevel, QRBuilder,
};

#[derive(Parser, Debug)]
#[command(name = "qrlens")]
#[command(about = "Classify QR payloads, extract logo palettes and render themed QR codes")]
pub struct Args {
    #[command(subcommand)]
    pub cmd: Command,

    /// Path to config TOML. If omitted, uses ./qrlens.toml if present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (trace/debug/info/warn/error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify a raw payload string.
    Classify { text: String },
    /// Decode the QR code in an image and classify its payload.
    Validate { image: PathBuf },
    /// Extract the dominant colors of an image.
    Palette { image: PathBuf },
    /// Encode text into a PNG, themed by a logo when one is given.
    Generate {
        text: String,
        #[arg(short, long)]
        output: PathBuf,
        #[arg(long)]
        logo: Option<PathBuf>,
        #[arg(long)]
        ec_level: Option<ECLevel>,
        #[arg(long)]
        module_size: Option<u32>,
    },
}

pub fn dispatch(args: Args) -> Result<()> {
    // Errors are reported through tracing, so a bad config still gets a subscriber
    let cfg = match Config::resolve(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => {
            init_logging(&args, &Config::default()).ok();
            return Err(err);
        }
    };
    init_logging(&args, &cfg)?;

    match &args.cmd {
        Command::Classify { text } => print_json(&classify(text)),
        Command::Validate { image } => validate_image(image),
        Command::Palette { image } => palette(&cfg, image),
        Command::Generate { text, output, logo, ec_level, module_size } => {
            generate(&cfg, text, output, logo.as_deref(), *ec_level, *module_size)
        }
    }
}

fn init_logging(args: &Args, cfg: &Config) -> Result<()> {
    let level = args.log_level.as_deref().unwrap_or(cfg.logging.level.as_str());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Logs go to stderr, stdout carries the JSON results
    let layer = if cfg.logging.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr).with_target(true).boxed()
    } else {
        tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(true).boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn validate_image(path: &Path) -> Result<()> {
    let img = image::open(path).with_context(|| format!("opening image: {}", path.display()))?;
    let v = validate(&img).with_context(|| format!("reading QR code: {}", path.display()))?;
    print_json(&v)
}

#[derive(Serialize)]
struct PaletteReport {
    palette: PaletteResult,
    dominant: Vec<ColorSample>,
}

fn palette(cfg: &Config, path: &Path) -> Result<()> {
    let img = image::open(path).with_context(|| format!("opening image: {}", path.display()))?.to_rgba8();
    let report = PaletteReport {
        palette: extract_palette_with(&img, &cfg.palette),
        dominant: dominant_colors(&img, &cfg.palette),
    };
    print_json(&report)
}

fn generate(
    cfg: &Config,
    text: &str,
    output: &Path,
    logo: Option<&Path>,
    ec_level: Option<ECLevel>,
    module_size: Option<u32>,
) -> Result<()> {
    if text.is_empty() {
        bail!("nothing to encode");
    }
    let render = &cfg.render;
    let module_size = module_size.unwrap_or(render.module_size);

    let logo = match logo {
        Some(p) => {
            let img = image::open(p).with_context(|| format!("opening logo: {}", p.display()))?;
            Some(img.to_rgba8())
        }
        None => None,
    };

    let mut builder = QRBuilder::new(text.as_bytes());
    builder
        .ec_level(ec_level.unwrap_or(render.ec_level))
        .quiet_zone(render.quiet_zone)
        .border(render.border);
    if let Some(l) = &logo {
        builder.palette(extract_palette_with(l, &cfg.palette));
    }
    let qr = builder.build()?;

    let img = match &logo {
        Some(l) => qr.to_image_with_logo(module_size, l, render.logo_ratio)?,
        None => qr.to_image(module_size)?,
    };
    img.save(output).with_context(|| format!("writing {}", output.display()))?;

    info!(output = %output.display(), version = qr.version(), ec_level = %qr.ec_level(), "QR saved");
    Ok(())
}
