use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use gnomon::{
    CpuSurface, FrameStyle, PngDirSink, PresentSurface as _, RenderLoop, RenderLoopOpts, SceneDef,
    paint_frame,
};

#[derive(Parser, Debug)]
#[command(name = "gnomon", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a frame sequence as numbered PNGs.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input scene JSON (defaults apply when omitted).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Override the scene canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Override the scene canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input scene JSON (defaults apply when omitted).
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Output directory for numbered frames.
    #[arg(long)]
    out_dir: PathBuf,

    /// Number of frames to render.
    #[arg(long, default_value_t = 60)]
    frames: u64,

    /// Override the scene canvas width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Override the scene canvas height in pixels.
    #[arg(long)]
    height: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn load_scene(
    path: Option<&PathBuf>,
    width: Option<u32>,
    height: Option<u32>,
) -> anyhow::Result<SceneDef> {
    let mut def = match path {
        Some(p) => {
            SceneDef::from_path(p).with_context(|| format!("load scene '{}'", p.display()))?
        }
        None => SceneDef::default(),
    };
    if let Some(w) = width {
        def.canvas.width = w;
    }
    if let Some(h) = height {
        def.canvas.height = h;
    }
    Ok(def)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let def = load_scene(args.in_path.as_ref(), args.width, args.height)?;
    let mut palette = def.build_palette()?;
    let mut surface = CpuSurface::new(def.canvas);

    paint_frame(&mut surface, FrameStyle::from(&def), &mut palette);
    let frame = surface.present();

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let def = load_scene(args.in_path.as_ref(), args.width, args.height)?;
    let palette = def.build_palette()?;
    let surface = CpuSurface::new(def.canvas);
    let sink = PngDirSink::new(&args.out_dir);

    let opts = RenderLoopOpts {
        max_frames: Some(args.frames),
    };
    let run = RenderLoop::start(surface, FrameStyle::from(&def), palette, sink, opts)?;
    let (stats, _sink) = run.join()?;

    eprintln!(
        "wrote {} frames to {}",
        stats.frames_presented,
        args.out_dir.display()
    );
    Ok(())
}
