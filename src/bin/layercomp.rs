use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use layercomp::{
    Alignment, DEFAULT_JPEG_QUALITY, OutputFormat, Point, Rect, Scene, Size, VerticalAlignment,
};

#[derive(Parser, Debug)]
#[command(name = "layercomp", version)]
struct Cli {
    /// Log placement and encoding details to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a scene description to a PNG or JPEG file.
    Render(RenderArgs),
    /// Print where a source rectangle lands inside a parent for the given alignments.
    Place(PlaceArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,

    /// Output format. Inferred from the output extension when omitted.
    #[arg(long, value_enum)]
    format: Option<FormatChoice>,

    /// JPEG quality (1-100).
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY)]
    quality: u8,
}

#[derive(Parser, Debug)]
struct PlaceArgs {
    /// Parent size as WxH.
    #[arg(long, value_parser = parse_size)]
    parent: Size,

    /// Source rectangle as X,Y,WxH.
    #[arg(long, value_parser = parse_source)]
    source: Rect,

    /// default | left | center | right
    #[arg(long, default_value = "default")]
    align: Alignment,

    /// default | top | middle | bottom
    #[arg(long, default_value = "default")]
    valign: VerticalAlignment,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Png,
    Jpeg,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Place(args) => cmd_place(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let scene = Scene::from_path(&args.in_path)
        .with_context(|| format!("load scene '{}'", args.in_path.display()))?;

    let assets_root = args.in_path.parent().unwrap_or_else(|| Path::new("."));
    let root = scene.build(assets_root)?;

    let format = match args.format {
        Some(FormatChoice::Png) => OutputFormat::Png,
        Some(FormatChoice::Jpeg) => OutputFormat::Jpeg {
            quality: args.quality,
        },
        None => layercomp::format_for_path(&args.out, args.quality),
    };

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    layercomp::write_image(&root.render(), &args.out, format)
        .with_context(|| format!("write image '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_place(args: PlaceArgs) -> anyhow::Result<()> {
    let parent = Rect::from_origin_size(Point::ZERO, args.parent);
    let dest = layercomp::compute_rect(parent, args.source, args.align, args.valign);
    println!(
        "min=({},{}) max=({},{}) size={}x{}",
        dest.min.x,
        dest.min.y,
        dest.max.x,
        dest.max.y,
        dest.width(),
        dest.height()
    );
    Ok(())
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let w = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    Ok(Size::new(w, h))
}

fn parse_source(s: &str) -> Result<Rect, String> {
    let mut parts = s.splitn(3, ',');
    let (Some(x), Some(y), Some(size)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected X,Y,WxH, got '{s}'"));
    };
    let x = x.trim().parse().map_err(|e| format!("bad x '{x}': {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("bad y '{y}': {e}"))?;
    Ok(Rect::from_origin_size(Point::new(x, y), parse_size(size)?))
}
