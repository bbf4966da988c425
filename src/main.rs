use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use map_dither::{Color, PixelGrid};
use poster_wall::models::{record, AppConfig, Compass, Orientation, PosterGrid, PosterMeta, CONFIG_ENV};
use poster_wall::services::{ImportService, PlacementPlan};

#[derive(Parser)]
#[command(name = "poster-wall")]
#[command(about = "Dither images to the map palette and lay them out as wall, floor or ceiling posters")]
struct Cli {
    /// YAML config file (falls back to $POSTER_WALL_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the active palette as hex colors
    Palette,
    /// Show the layout of a poster record
    Inspect {
        /// Poster record (.json, .yml or .yaml)
        record: PathBuf,
    },
    /// Print which tile goes into which frame, and its rotation
    Layout {
        /// Poster record (.json, .yml or .yaml)
        record: PathBuf,

        /// Mounting surface: north, east, south, west, floor or ceiling
        #[arg(short, long, default_value = "north")]
        orientation: Orientation,

        /// Direction the person placing the frames looks toward
        #[arg(short, long, default_value = "north")]
        facing: Compass,

        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Run a synthetic gradient through the import pipeline and save the record
    Demo {
        /// Image width in pixels
        #[arg(long, default_value_t = 256)]
        width: usize,

        /// Image height in pixels
        #[arg(long, default_value_t = 128)]
        height: usize,

        /// First tile id to allocate
        #[arg(long, default_value_t = 0)]
        first_id: i32,

        /// Output record path
        #[arg(short, long)]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli
        .config
        .clone()
        .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));
    let config = AppConfig::load(config_path.as_deref());

    match cli.command {
        Some(Commands::Palette) => run_palette_command(&config),
        Some(Commands::Inspect { record }) => run_inspect_command(&record),
        Some(Commands::Layout {
            record,
            orientation,
            facing,
            json,
        }) => run_layout_command(&record, orientation, facing, json),
        Some(Commands::Demo {
            width,
            height,
            first_id,
            out,
        }) => run_demo_command(&config, width, height, first_id, &out),
        None => {
            run_status_command(&config, config_path.as_deref());
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "poster_wall=debug"
    } else {
        "poster_wall=warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

fn run_palette_command(config: &AppConfig) -> anyhow::Result<()> {
    let palette = config.palette().context("Invalid palette in config")?;
    for (index, color) in palette.colors().iter().enumerate() {
        println!("{index:3}  {color}");
    }
    Ok(())
}

fn load_record(path: &Path) -> anyhow::Result<PosterGrid> {
    record::load(path).with_context(|| format!("Failed to load poster record {}", path.display()))
}

fn run_inspect_command(path: &Path) -> anyhow::Result<()> {
    let grid = load_record(path)?;
    let meta = grid.meta();

    println!("Record:  {}", path.display());
    if let Some(name) = &meta.name {
        println!("Name:    {name}");
    }
    if let Some(owner) = &meta.owner {
        println!("Owner:   {owner}");
    }
    if let Some(id) = &meta.id {
        println!("Id:      {id}");
    }
    println!("Tiles:   {}", grid.tile_count());

    if !grid.has_layout() {
        println!("Layout:  none (unstructured tile list)");
        println!("Ids:     {:?}", grid.tiles());
        return Ok(());
    }

    println!("Layout:  {} columns x {} rows", grid.columns(), grid.rows());
    println!();
    for row in 0..grid.rows() {
        let line: Vec<String> = (0..grid.columns())
            .map(|column| grid.tile_at_cell(column, row).map(|id| format!("{id:>6}")))
            .collect::<Result<_, _>>()?;
        println!("{}", line.join(" "));
    }
    Ok(())
}

fn run_layout_command(
    path: &Path,
    orientation: Orientation,
    facing: Compass,
    json: bool,
) -> anyhow::Result<()> {
    let grid = load_record(path)?;
    let plan = PlacementPlan::new(&grid, orientation, facing)
        .with_context(|| format!("Cannot lay out {}", path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(plan.placements())?);
        return Ok(());
    }

    println!(
        "{} frames on {} surface, placed facing {}",
        plan.len(),
        plan.orientation(),
        plan.viewer()
    );
    println!();
    println!("{:>5}  {:>8}  rotation", "slot", "tile");
    for placement in plan.placements() {
        println!(
            "{:>5}  {:>8}  {}",
            placement.slot, placement.tile, placement.rotation
        );
    }
    Ok(())
}

fn run_demo_command(
    config: &AppConfig,
    width: usize,
    height: usize,
    first_id: i32,
    out: &Path,
) -> anyhow::Result<()> {
    let service = ImportService::from_config(config).context("Invalid configuration")?;

    let image = PixelGrid::from_fn(width, height, |x, y| {
        Color::new(
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) * 255 / (width + height).max(1)) as u8,
        )
    });

    let meta = PosterMeta {
        name: Some("demo gradient".to_string()),
        ..Default::default()
    };
    let imported = service
        .import(image, first_id, meta)
        .context("Failed to import demo image")?;

    record::save(&imported.poster, out)
        .with_context(|| format!("Failed to write {}", out.display()))?;

    println!(
        "Wrote {} ({}x{} tiles of {}px, ids {:?})",
        out.display(),
        imported.poster.columns(),
        imported.poster.rows(),
        service.tile_size(),
        imported.poster.tiles()
    );
    Ok(())
}

/// Display version and configuration information
fn run_status_command(config: &AppConfig, config_path: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Poster Wall v{VERSION}\n");

    println!("Configuration:");
    println!(
        "  {CONFIG_ENV} = {}",
        config_path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );
    println!(
        "  palette   = {}",
        match &config.palette {
            Some(colors) => format!("{} custom colors", colors.len()),
            None => "reference map colors".to_string(),
        }
    );
    println!("  tile_size = {}", config.tile_size);
    println!("  fill      = {}", config.fill);

    println!("\nRun 'poster-wall --help' for commands.");
}
