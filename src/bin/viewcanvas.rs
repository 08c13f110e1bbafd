use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use viewcanvas::{Argb, Canvas, Config, Corner, MoveOp, ScaleOp};

#[derive(Parser, Debug)]
#[command(name = "viewcanvas", version)]
struct Cli {
    /// Log viewport changes.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one viewer frame of an image as a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input image (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Window width in pixels.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Window height in pixels.
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Window scale factor (HiDPI).
    #[arg(long, default_value_t = 1)]
    window_scale: u32,

    /// Initial scale; defaults to the config's `initial_scale`.
    #[arg(long, value_enum)]
    scale: Option<ScaleChoice>,

    /// Number of zoom-in steps applied after loading.
    #[arg(long, default_value_t = 0)]
    zoom_in: u32,

    /// Number of zoom-out steps applied after loading.
    #[arg(long, default_value_t = 0)]
    zoom_out: u32,

    /// Viewport moves applied in order (repeatable).
    #[arg(long = "move", value_enum)]
    moves: Vec<MoveChoice>,

    /// Rotate the image 90 degrees clockwise before drawing.
    #[arg(long)]
    rotate: bool,

    /// Ignore the image alpha channel.
    #[arg(long)]
    no_alpha: bool,

    /// Print the image info block (needs a font).
    #[arg(long)]
    info: bool,

    /// JSON config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Font file for overlay text, overrides the config.
    #[arg(long)]
    font: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScaleChoice {
    FitOr100,
    FitWindow,
    FillWindow,
    RealSize,
}

impl From<ScaleChoice> for ScaleOp {
    fn from(v: ScaleChoice) -> Self {
        match v {
            ScaleChoice::FitOr100 => ScaleOp::FitOr100,
            ScaleChoice::FitWindow => ScaleOp::FitWindow,
            ScaleChoice::FillWindow => ScaleOp::FillWindow,
            ScaleChoice::RealSize => ScaleOp::RealSize,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MoveChoice {
    Center,
    CenterHorizontal,
    CenterVertical,
    Left,
    Right,
    Up,
    Down,
}

impl From<MoveChoice> for MoveOp {
    fn from(v: MoveChoice) -> Self {
        match v {
            MoveChoice::Center => MoveOp::Center,
            MoveChoice::CenterHorizontal => MoveOp::CenterHorizontal,
            MoveChoice::CenterVertical => MoveOp::CenterVertical,
            MoveChoice::Left => MoveOp::StepLeft,
            MoveChoice::Right => MoveOp::StepRight,
            MoveChoice::Up => MoveOp::StepUp,
            MoveChoice::Down => MoveOp::StepDown,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
    }
}

fn load_config(args: &FrameArgs) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if let Some(font) = &args.font {
        config.text.font.path = Some(font.clone());
    }
    Ok(config)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let config = load_config(&args)?;
    let mut canvas = Canvas::new(&config)?;

    let decoded = image::open(&args.in_path)
        .with_context(|| format!("decode image '{}'", args.in_path.display()))?;
    let mut rgba = decoded.to_rgba8();

    canvas.resize(args.width, args.height, args.window_scale)?;
    let op = args.scale.map_or(canvas.initial_scale(), ScaleOp::from);
    canvas.reset_image(rgba.width(), rgba.height(), op)?;

    if args.rotate {
        rgba = image::imageops::rotate90(&rgba);
        canvas.swap_image_size();
    }
    for _ in 0..args.zoom_in {
        canvas.set_scale(ScaleOp::ZoomIn);
    }
    for _ in 0..args.zoom_out {
        canvas.set_scale(ScaleOp::ZoomOut);
    }
    for mv in &args.moves {
        if !canvas.move_viewport(MoveOp::from(*mv)) {
            tracing::debug!(?mv, "move had no visible effect");
        }
    }

    let pixels = rgba_to_argb(rgba.as_raw());
    let mut window = vec![0; canvas.window_size().area()];
    canvas.clear(&mut window)?;
    canvas.draw_image(!args.no_alpha, &pixels, &mut window)?;

    let label = format!("{:.0}%", canvas.get_scale() * 100.0);
    canvas.print_line(&mut window, Corner::BottomRight, &label)?;

    if args.info {
        let info = image_info(&args.in_path, rgba.width(), rgba.height());
        canvas.print_info(&mut window, info.len(), &info)?;
    }

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let size = canvas.window_size();
    image::save_buffer_with_format(
        &args.out,
        &argb_to_rgba(&window),
        size.width,
        size.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn image_info(path: &Path, width: u32, height: u32) -> Vec<(String, String)> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let format = image::ImageFormat::from_path(path)
        .map(|f| format!("{f:?}"))
        .unwrap_or_else(|_| "unknown".to_owned());
    vec![
        ("File".to_owned(), name),
        ("Format".to_owned(), format),
        ("Size".to_owned(), format!("{width}x{height}")),
    ]
}

fn rgba_to_argb(rgba: &[u8]) -> Vec<Argb> {
    rgba.chunks_exact(4)
        .map(|p| viewcanvas::argb(p[3], p[0], p[1], p[2]))
        .collect()
}

fn argb_to_rgba(pixels: &[Argb]) -> Vec<u8> {
    let mut out = Vec::with_capacity(pixels.len() * 4);
    for &px in pixels {
        out.extend_from_slice(&[
            viewcanvas::red(px),
            viewcanvas::green(px),
            viewcanvas::blue(px),
            viewcanvas::alpha(px),
        ]);
    }
    out
}
