use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use marquee::config::{ConfigError, SelectorConfig};
use marquee::consts::FIT_PADDING_PX;
use marquee::scene::{Scene, SceneError};
use marquee::transform::{CanvasRect, Point, ViewTransform};
use marquee::universal::MarqueeSelector;
use marquee::zoom::{ZoomConfig, ZoomManager};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("scene has nothing with extent to fit")]
    EmptyScene,
    #[error("scale must be a positive number, got {0}")]
    InvalidScale(f64),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "dxf-marquee", about = "Marquee selection and view fitting for DXF viewer scenes")]
struct Cli {
    /// Canvas size in CSS pixels, as `W,H`.
    #[arg(long, global = true, env = "MARQUEE_CANVAS", default_value = "800,600", value_parser = parse_point)]
    canvas: Point,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a marquee selection and print the result as JSON.
    Select(SelectCommand),
    /// Print the view transform that fits the whole scene.
    Fit(FitCommand),
    /// Print the world extents of the scene.
    Bounds(SceneArg),
}

#[derive(Args, Debug)]
struct SceneArg {
    /// Scene JSON file.
    #[arg(long)]
    scene: PathBuf,
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// Screen pixels per world unit.
    #[arg(long, default_value_t = 1.0)]
    scale: f64,

    /// Screen offset of the world origin, as `X,Y` (Y measured up from the bottom edge).
    #[arg(long, default_value = "0,0", value_parser = parse_point)]
    offset: Point,
}

impl ViewArgs {
    fn transform(&self) -> Result<ViewTransform, CliError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(CliError::InvalidScale(self.scale));
        }
        Ok(ViewTransform::new(self.scale, self.offset.x, self.offset.y))
    }
}

#[derive(Args, Debug)]
struct SelectCommand {
    #[command(flatten)]
    scene: SceneArg,

    #[command(flatten)]
    view: ViewArgs,

    /// Drag start in canvas pixels, as `X,Y`.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    start: Point,

    /// Drag end in canvas pixels, as `X,Y`.
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    end: Point,

    /// Selection tolerance in pixels. Overrides `MARQUEE_TOLERANCE_PX`.
    #[arg(long)]
    tolerance: Option<f64>,

    /// Include debug info in the result. Overrides `MARQUEE_DEBUG`.
    #[arg(long)]
    debug: bool,

    /// Print selected ids one per line instead of JSON.
    #[arg(long)]
    ids: bool,
}

#[derive(Args, Debug)]
struct FitCommand {
    #[command(flatten)]
    scene: SceneArg,

    /// Screen padding around the fitted scene, in pixels.
    #[arg(long, default_value_t = FIT_PADDING_PX)]
    padding: f64,
}

fn parse_point(raw: &str) -> Result<Point, String> {
    let (x, y) = raw.split_once(',').ok_or_else(|| format!("expected `X,Y`, got `{raw}`"))?;
    let parse = |s: &str| s.trim().parse::<f64>().map_err(|e| format!("invalid coordinate `{s}`: {e}"));
    Ok(Point::new(parse(x)?, parse(y)?))
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let canvas = CanvasRect { left: 0.0, top: 0.0, width: cli.canvas.x, height: cli.canvas.y };

    match cli.command {
        Command::Select(cmd) => run_select(&canvas, cmd),
        Command::Fit(cmd) => run_fit(&canvas, &cmd),
        Command::Bounds(cmd) => run_bounds(&cmd),
    }
}

fn run_select(canvas: &CanvasRect, cmd: SelectCommand) -> Result<(), CliError> {
    let mut config = SelectorConfig::from_env()?;
    if let Some(tolerance) = cmd.tolerance {
        config = config.with_tolerance(tolerance);
    }
    if cmd.debug {
        config = config.with_debug(true);
    }

    let scene = Scene::from_path(&cmd.scene.scene)?;
    let transform = cmd.view.transform()?;
    let selector = MarqueeSelector::new(config);
    let input = scene.as_input();

    if cmd.ids {
        let mut print_id = |id: &str, _: Point| println!("{id}");
        let performed = selector.perform_selection(
            cmd.start,
            cmd.end,
            &transform,
            canvas,
            &input,
            Some(cmd.end),
            Some(&mut print_id),
        );
        info!(selected = performed.callbacks_executed, "selection listed");
        return Ok(());
    }

    let result = selector.select(cmd.start, cmd.end, &transform, canvas, &input);
    info!(selected = result.selected_ids.len(), mode = result.selection_type.as_str(), "selection done");
    print_json(&result)
}

fn run_fit(canvas: &CanvasRect, cmd: &FitCommand) -> Result<(), CliError> {
    let scene = Scene::from_path(&cmd.scene.scene)?;
    let bounds = scene.bounds().ok_or(CliError::EmptyScene)?;
    let mut zoom = ZoomManager::new(ViewTransform::default(), ZoomConfig::default());
    zoom.fit_to_bounds(&bounds, canvas.viewport(), cmd.padding);
    print_json(&zoom.transform())
}

fn run_bounds(cmd: &SceneArg) -> Result<(), CliError> {
    let scene = Scene::from_path(&cmd.scene)?;
    print_json(&scene.bounds())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
