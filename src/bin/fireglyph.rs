use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fireglyph", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the flame for an identifier as a PNG.
    Render(RenderArgs),
    /// Print the tier and palette for a counter as JSON.
    Tier(TierArgs),
    /// Print the composition plan for an identifier as JSON.
    Trace(TraceArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Hex identifier seeding the flame (`0x` prefix optional).
    #[arg(long)]
    address: String,

    /// Usage counter selecting the palette tier.
    #[arg(long, default_value_t = 0)]
    counter: u128,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Canvas width; overrides the config file.
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height; overrides the config file.
    #[arg(long)]
    height: Option<u32>,

    /// Render settings JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overlay every placement's source and destination quadrilaterals.
    #[arg(long)]
    debug_placements: bool,
}

#[derive(Parser, Debug)]
struct TierArgs {
    #[arg(long)]
    counter: u128,
}

#[derive(Parser, Debug)]
struct TraceArgs {
    #[arg(long)]
    address: String,

    #[arg(long, default_value_t = 0)]
    counter: u128,

    /// Canvas width bounding the placements.
    #[arg(long, default_value_t = 512)]
    width: u32,
}

const OVERLAY_COLOR: fireglyph::Rgba8 = fireglyph::Rgba8::rgb(0x00, 0xff, 0x66);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Tier(args) => cmd_tier(args),
        Command::Trace(args) => cmd_trace(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mut settings = match &args.config {
        Some(path) => fireglyph::RenderSettings::from_path(path)?,
        None => fireglyph::RenderSettings::default(),
    };
    if let Some(w) = args.width {
        settings.width = w;
    }
    if let Some(h) = args.height {
        settings.height = h;
    }
    settings.validate()?;

    let frame = if args.debug_placements {
        let comp = fireglyph::plan_composition(settings.width, &args.address, args.counter)?;
        let mut surface =
            fireglyph::CpuSurface::new(settings.width, settings.height, settings.background)?;
        fireglyph::draw_composition(&mut surface, &comp);
        fireglyph::draw_placements(&mut surface, &comp, OVERLAY_COLOR);
        surface.finish()
    } else {
        fireglyph::render_frame(&settings, &args.address, args.counter)?
    };

    fireglyph::write_png(&frame, &args.out)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_tier(args: TierArgs) -> anyhow::Result<()> {
    let tier = fireglyph::tier_of(args.counter);
    let out = serde_json::json!({
        "counter": args.counter.to_string(),
        "tier": tier,
        "palette": fireglyph::palette_of(tier),
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&out).context("serialize tier")?
    );
    Ok(())
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let comp = fireglyph::plan_composition(args.width, &args.address, args.counter)?;
    println!(
        "{}",
        serde_json::to_string_pretty(&comp).context("serialize composition plan")?
    );
    Ok(())
}
