// Copyright 2025. Command-line host for the stripe icon rasterizer.
//
// Usage:
//   icon-tool render [params...] [-o <output.bmp|png|raw>] [--zoom N] [--frame] [--copy]
//   icon-tool compare <file_a> <file_b> [-d <diff>] [-s <sidebyside>]
//   icon-tool verify <reference> [params...] [-d <diff>] [-s <sidebyside>]
//   icon-tool info [params...]

use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use icon_tool::display::{frame, zoom, MAX_ZOOM};
use icon_tool::{
    clipboard, compare_buffers, generate_diff_image, generate_sidebyside, load_image, logging,
    save_image, CompareResult, PixelBuffer,
};
use stripe_icon::corner_mask::CornerGeometry;
use stripe_icon::params::{BORDER_WIDTH, CURVE_PERCENT, ICON_SIZE, RED_WIDTH, WHITE_WIDTH};
use stripe_icon::stripes::Stripes;
use stripe_icon::{render_config, render_params, Image, RawParams, RenderConfig, Rgb8};

#[derive(Parser)]
#[command(name = "icon-tool", version, about = "Render and inspect blue-red-white stripe icons")]
struct Cli {
    /// Debug logging; RUST_LOG overrides the level when set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render an icon to an image file
    Render(RenderArgs),
    /// Compare two image files pixel-by-pixel
    Compare(CompareArgs),
    /// Render an icon and compare it against a reference image
    Verify(VerifyArgs),
    /// Print the normalized configuration, corner geometry and stripes
    Info(ParamArgs),
}

#[derive(Args, Clone, Copy)]
struct ParamArgs {
    /// Overall size in pixels (rounded down to even)
    #[arg(long, default_value_t = ICON_SIZE.default,
          value_parser = clap::value_parser!(i32).range(ICON_SIZE.bounds()))]
    size: i32,

    /// Gray border width in pixels
    #[arg(long, default_value_t = BORDER_WIDTH.default,
          value_parser = clap::value_parser!(i32).range(BORDER_WIDTH.bounds()))]
    border: i32,

    /// Corner curve as a percentage
    #[arg(long, default_value_t = CURVE_PERCENT.default,
          value_parser = clap::value_parser!(i32).range(CURVE_PERCENT.bounds()))]
    curve: i32,

    /// White separator width in pixels (rounded down to even)
    #[arg(long, default_value_t = WHITE_WIDTH.default,
          value_parser = clap::value_parser!(i32).range(WHITE_WIDTH.bounds()))]
    white: i32,

    /// Blue/red stripe width in pixels
    #[arg(long, default_value_t = RED_WIDTH.default,
          value_parser = clap::value_parser!(i32).range(RED_WIDTH.bounds()))]
    red: i32,
}

impl ParamArgs {
    fn raw(&self) -> RawParams {
        RawParams::new(self.size, self.border, self.curve, self.white, self.red)
    }
}

#[derive(Args)]
struct RenderArgs {
    #[command(flatten)]
    params: ParamArgs,

    /// Output file (.bmp, .png, .raw); defaults to icon_<size>.png
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Integer magnification for the saved file
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=MAX_ZOOM as i64))]
    zoom: u32,

    /// Draw a one-pixel gray outline around the (zoomed) icon
    #[arg(long)]
    frame: bool,

    /// Also place the unzoomed icon on the system clipboard (on Linux, waits
    /// until another application takes the clipboard over)
    #[arg(long)]
    copy: bool,
}

#[derive(Args)]
struct DiffOutputs {
    /// Write a diff image
    #[arg(short = 'd', long)]
    diff: Option<PathBuf>,

    /// Write a side-by-side [A | diff | B] image
    #[arg(short = 's', long)]
    sidebyside: Option<PathBuf>,
}

#[derive(Args)]
struct CompareArgs {
    file_a: PathBuf,
    file_b: PathBuf,

    #[command(flatten)]
    outputs: DiffOutputs,
}

#[derive(Args)]
struct VerifyArgs {
    /// Reference image rendered at zoom 1
    reference: PathBuf,

    #[command(flatten)]
    params: ParamArgs,

    #[command(flatten)]
    outputs: DiffOutputs,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let outcome = match cli.command {
        Command::Render(args) => cmd_render(&args).map(|_| true),
        Command::Compare(args) => cmd_compare(&args),
        Command::Verify(args) => cmd_verify(&args),
        Command::Info(args) => {
            cmd_info(&args);
            Ok(true)
        }
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            process::exit(2);
        }
    }
}

fn cmd_render(args: &RenderArgs) -> Result<()> {
    let icon = render_params(&args.params.raw());
    info!(config = %icon.config(), "rendered icon");

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("icon_{}.png", icon.width())));

    let base = PixelBuffer::from(&icon);
    let mut shown = zoom(&base, args.zoom);
    if args.frame {
        shown = frame(&shown);
    }
    save_image(&output, &shown).with_context(|| format!("saving {}", output.display()))?;
    info!(path = %output.display(), width = shown.width, height = shown.height, "saved");

    if args.copy {
        clipboard::copy_to_clipboard(&base).context("copying icon to clipboard")?;
        info!("copied to clipboard");
    }
    Ok(())
}

fn load(path: &Path) -> Result<PixelBuffer> {
    load_image(path).with_context(|| format!("loading {}", path.display()))
}

fn cmd_compare(args: &CompareArgs) -> Result<bool> {
    let a = load(&args.file_a)?;
    let b = load(&args.file_b)?;
    report(&a, &b, &args.outputs)
}

fn cmd_verify(args: &VerifyArgs) -> Result<bool> {
    let icon = render_params(&args.params.raw());
    info!(config = %icon.config(), "rendered icon");
    let reference = load(&args.reference)?;
    let ok = report(&PixelBuffer::from(&icon), &reference, &args.outputs)?;
    if ok {
        println!("PIXEL-PERFECT MATCH!");
    }
    Ok(ok)
}

/// Print the comparison and write any requested diff images.
/// Returns whether the buffers are identical.
fn report(a: &PixelBuffer, b: &PixelBuffer, outputs: &DiffOutputs) -> Result<bool> {
    let result: CompareResult = compare_buffers(a, b)?;
    println!("{}", result);

    if let Some(ref dp) = outputs.diff {
        let diff = generate_diff_image(a, b)?;
        save_image(dp, &diff).with_context(|| format!("saving {}", dp.display()))?;
        info!(path = %dp.display(), "diff saved");
    }

    if let Some(ref sp) = outputs.sidebyside {
        let sbs = generate_sidebyside(a, b)?;
        save_image(sp, &sbs).with_context(|| format!("saving {}", sp.display()))?;
        info!(path = %sp.display(), "side-by-side saved");
    }

    Ok(result.identical)
}

fn cmd_info(args: &ParamArgs) {
    let cfg = RenderConfig::normalize(&args.raw());
    let geom = CornerGeometry::new(&cfg);

    println!("config:  {}", cfg);
    println!(
        "corner:  radius={} center={} squared_radius={}",
        geom.radius, geom.center, geom.squared_radius
    );
    println!("stripes:");
    for (n, s) in Stripes::new(&cfg).enumerate() {
        println!("  {:>3}: offset {:>4} {}", n, s.offset, color_name(s.color));
    }

    let icon: Image = render_config(&cfg);
    println!("pixels:");
    for c in Rgb8::PALETTE {
        println!("  {:>5}: {}", color_name(c), icon.count(c));
    }
}

fn color_name(c: Rgb8) -> &'static str {
    match c {
        Rgb8::WHITE => "white",
        Rgb8::BLUE => "blue",
        Rgb8::RED => "red",
        Rgb8::GRAY => "gray",
        _ => "other",
    }
}
