//! cvdsim - color vision deficiency simulator
//!
//! Simulates how an image looks to people with color vision deficiencies,
//! builds before/after comparisons and scores accessibility.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use cvdsim_rs::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cvdsim")]
#[command(author, version, about = "Color vision deficiency simulator")]
#[command(long_about = "
Simulates protanopia, deuteranopia, tritanopia and achromatopsia on images.

Examples:
  cvdsim simulate photo.png --variant protanopia --severity 80
  cvdsim compare photo.png -o compare.png --variant deuteranopia --split 0.3
  cvdsim score chart.png --variant deuteranopia
  cvdsim contrast '#767676' '#ffffff'
  cvdsim contrast page.png --fg 10,12 --bg 0,0
  cvdsim palette --variant tritanopia
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Debug output, overrides RUST_LOG
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a deficiency on the whole image
    #[command(visible_alias = "s")]
    Simulate(SimulateArgs),

    /// Original and simulated image in one picture
    #[command(visible_alias = "c")]
    Compare(CompareArgs),

    /// Accessibility score of the simulated image
    Score(ScoreArgs),

    /// WCAG contrast of two colors
    Contrast(ContrastArgs),

    /// Preset palettes as seen with a deficiency
    Palette(PaletteArgs),
}

#[derive(Args)]
struct VisionArgs {
    /// normal, protanopia, deuteranopia, tritanopia or achromatopsia
    #[arg(long, default_value = "protanopia", value_parser = parse_variant)]
    variant: CvdVariant,

    /// Severity in percent, clamped to [0, 100]
    #[arg(long, default_value = "100")]
    severity: f32,
}

#[derive(Args)]
struct SimulateArgs {
    /// Input image
    input: PathBuf,

    /// Output image, `color-sight-<variant>-<severity>%.png` when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    vision: VisionArgs,
}

#[derive(Args)]
struct CompareArgs {
    /// Input image
    input: PathBuf,

    /// Output image, `color-sight-<variant>-<severity>%.png` when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    vision: VisionArgs,

    /// Divider position as fraction of width
    #[arg(long, default_value = "0.5")]
    split: f32,

    /// Draw only the divider line
    #[arg(long)]
    no_handle: bool,

    /// Place images next to each other instead of the slider view
    #[arg(long, conflicts_with_all = ["split", "no_handle"])]
    side_by_side: bool,

    /// Gap in pixels for side by side layout
    #[arg(long, default_value = "16", requires = "side_by_side")]
    gap: u32,
}

#[derive(Args)]
struct ScoreArgs {
    /// Input image
    input: PathBuf,

    #[command(flatten)]
    vision: VisionArgs,
}

#[derive(Args)]
struct ContrastArgs {
    /// Foreground hex color, or an image when --fg/--bg are given
    first: String,

    /// Background hex color
    second: Option<String>,

    /// Foreground pixel as `x,y`
    #[arg(long, value_parser = parse_point, requires = "bg")]
    fg: Option<(u32, u32)>,

    /// Background pixel as `x,y`
    #[arg(long, value_parser = parse_point, requires = "fg")]
    bg: Option<(u32, u32)>,
}

#[derive(Args)]
struct PaletteArgs {
    /// Only this palette, by key or name
    #[arg(long)]
    name: Option<String>,

    #[command(flatten)]
    vision: VisionArgs,
}

fn parse_variant(value: &str) -> std::result::Result<CvdVariant, String> {
    CvdVariant::from_name(value).ok_or_else(|| {
        let names: Vec<&str> = CvdVariant::ALL.iter().map(|v| v.name()).collect();
        format!("unknown variant '{}', expected one of {}", value, names.join(", "))
    })
}

fn parse_point(value: &str) -> std::result::Result<(u32, u32), String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{}'", value))?;
    let x = x.trim().parse::<u32>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<u32>().map_err(|e| e.to_string())?;
    Ok((x, y))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn load_buffer(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    debug!(width, height, path = %path.display(), "decoded");
    Ok(PixelBuffer::from_raw(width, height, img.into_raw())?)
}

fn save_buffer(buffer: PixelBuffer, path: &Path) -> Result<()> {
    let (width, height) = (buffer.width(), buffer.height());
    let img = image::RgbaImage::from_raw(width, height, buffer.into_raw())
        .context("Pixel buffer does not match its dimensions")?;
    img.save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Saved {} ({}x{})", path.display(), width, height);
    Ok(())
}

fn default_output(vision: &VisionArgs) -> PathBuf {
    let severity = clamp_severity(vision.severity).round() as u32;
    PathBuf::from(format!("color-sight-{}-{}%.png", vision.variant.name(), severity))
}

fn run_simulate(args: SimulateArgs) -> Result<()> {
    let src = load_buffer(&args.input)?;
    let vision = &args.vision;
    info!(
        "{}: {}",
        vision.variant.label(),
        SeverityLevel::from_percent(vision.severity).describe(vision.variant)
    );
    let dst = simulate_cvd(&src, vision.variant, vision.severity);
    let output = args.output.unwrap_or_else(|| default_output(vision));
    save_buffer(dst, &output)
}

fn run_compare(args: CompareArgs) -> Result<()> {
    let src = load_buffer(&args.input)?;
    let vision = &args.vision;
    let simulated = simulate_cvd(&src, vision.variant, vision.severity);
    let composed = if args.side_by_side {
        compose_side_by_side(&src, &simulated, args.gap)?
    } else {
        let style = if args.no_handle {
            SplitStyle::plain()
        } else {
            SplitStyle::default()
        };
        compose_split(&src, &simulated, args.split, &style)?
    };
    let output = args.output.unwrap_or_else(|| default_output(vision));
    save_buffer(composed, &output)
}

fn run_score(args: ScoreArgs) -> Result<()> {
    let src = load_buffer(&args.input)?;
    let vision = &args.vision;
    let simulated = simulate_cvd(&src, vision.variant, vision.severity);
    let score = analyze(&simulated, vision.variant, vision.severity);

    println!("{} at {}%", vision.variant.label(), clamp_severity(vision.severity));
    println!("Score:            {}/100", score.overall);
    println!("Grade:            {}", score.grade);
    println!("WCAG:             {}", score.wcag_level);
    println!("Contrast issues:  {:.1}%", score.contrast_issues);
    println!("Color dependency: {:.1}%", score.color_dependency);
    println!("Average contrast: {:.2}:1", score.average_contrast);
    println!("Color variety:    {}", score.color_variety);
    println!("Samples:          {}", score.sample_count);
    println!("Recommendations:");
    for recommendation in score.recommendations.iter() {
        println!("  - {}", recommendation);
    }
    Ok(())
}

fn run_contrast(args: ContrastArgs) -> Result<()> {
    let result = match (args.fg, args.bg) {
        (Some(fg), Some(bg)) => {
            if args.second.is_some() {
                bail!("Pass either two colors or an image with --fg and --bg");
            }
            let buffer = load_buffer(Path::new(&args.first))?;
            check_points(&buffer, fg, bg)?
        }
        _ => {
            let Some(second) = args.second.as_deref() else {
                bail!("Background color is required");
            };
            check(Rgb::<u8>::from_hex(&args.first)?, Rgb::<u8>::from_hex(second)?)
        }
    };

    let verdict = |pass: bool| if pass { "pass" } else { "fail" };
    println!(
        "{} on {}: {:.2}:1",
        result.foreground.to_hex(),
        result.background.to_hex(),
        result.ratio
    );
    println!("AA normal:  {}", verdict(result.aa_pass));
    println!("AAA normal: {}", verdict(result.aaa_pass));
    println!("AA large:   {}", verdict(result.aa_large_pass));
    println!("AAA large:  {}", verdict(result.aaa_large_pass));
    Ok(())
}

fn run_palette(args: PaletteArgs) -> Result<()> {
    let palettes: Vec<&Palette> = match args.name.as_deref() {
        Some(name) => match find_palette(name) {
            Some(palette) => vec![palette],
            None => bail!("Unknown palette '{}'", name),
        },
        None => PRESET_PALETTES.iter().collect(),
    };
    let vision = &args.vision;
    for palette in palettes {
        println!("{} - {}", palette.name, palette.description);
        for swatch in palette.simulate(vision.variant, vision.severity)? {
            println!(
                "  {:<16} {} -> {}  {:>6.1}{}",
                swatch.swatch.name,
                swatch.original.to_hex(),
                swatch.simulated.to_hex(),
                swatch.distance,
                if swatch.is_changed() { "" } else { "  (unchanged)" }
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Simulate(args) => run_simulate(args),
        Commands::Compare(args) => run_compare(args),
        Commands::Score(args) => run_score(args),
        Commands::Contrast(args) => run_contrast(args),
        Commands::Palette(args) => run_palette(args),
    }
}
