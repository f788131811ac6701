//! Render a short bounded run into a temp directory with tracing output.
//!
//! ```sh
//! cargo run --example animate
//! ```

use gnomon::{CpuSurface, FrameStyle, PngDirSink, RenderLoop, RenderLoopOpts, SceneDef};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let def = SceneDef::default();
    let palette = def.build_palette()?;
    let surface = CpuSurface::new(def.canvas);
    let out = std::env::temp_dir().join("gnomon_demo");
    let sink = PngDirSink::new(&out);

    let run = RenderLoop::start(
        surface,
        FrameStyle::from(&def),
        palette,
        sink,
        RenderLoopOpts {
            max_frames: Some(24),
        },
    )?;
    let (stats, _sink) = run.join()?;

    eprintln!("wrote {} frames to {}", stats.frames_presented, out.display());
    Ok(())
}
