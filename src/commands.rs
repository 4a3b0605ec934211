//! Command-line surface: argument definitions and the command runners.
//!
//! Every runner builds an [`EngineCore`] from the effective config, drives it
//! the way the browser would, and returns the text to print.

use clap::{Args, Parser, Subcommand};
use radius::coords::{Point, PointerSample, Rect};
use radius::engine::{Action, EngineCore};
use radius::input::Key;
use radius::preset::{Preset, find_preset, presets_for_mode};
use radius::{ControlMode, HandleId, RadiusState, Unit};

use crate::CliError;
use crate::config::StudioConfig;

#[derive(Parser, Debug)]
#[command(name = "radius-studio", about = "Border-radius shape editor driver")]
pub struct Cli {
    /// Control mode; overrides `RADIUS_MODE`.
    #[arg(long, global = true)]
    pub mode: Option<ControlMode>,

    /// Basic-mode unit; overrides `RADIUS_UNIT`.
    #[arg(long, global = true)]
    pub unit: Option<Unit>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the presets of the active mode with their CSS.
    Presets {
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Print the `border-radius` declaration.
    Css {
        #[arg(long)]
        preset: Option<String>,
    },
    /// Press a handle, move the pointer through each `--at`, then release.
    Drag(DragArgs),
    /// Send arrow keys to a focused handle.
    Key(KeyArgs),
    /// Dump the radius state as JSON.
    State {
        #[arg(long)]
        preset: Option<String>,
    },
    /// Print the inline style of the preview element.
    Preview {
        #[arg(long)]
        background: Option<String>,
        #[arg(long)]
        preset: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct DragArgs {
    /// Handle key, e.g. `top` or `topRight-horizontal`.
    #[arg(long)]
    pub handle: String,

    /// Pointer position in client coordinates, as `X,Y`.
    #[arg(long = "at", required = true)]
    pub at: Vec<String>,

    /// Preview bounds as `LEFT,TOP,WIDTH,HEIGHT`; defaults to the configured
    /// preview size at the origin.
    #[arg(long)]
    pub rect: Option<String>,

    #[arg(long)]
    pub preset: Option<String>,
}

#[derive(Args, Debug)]
pub struct KeyArgs {
    #[arg(long)]
    pub handle: String,

    /// Browser key name, e.g. `ArrowUp`.
    #[arg(long)]
    pub key: String,

    #[arg(long, default_value_t = 1)]
    pub repeat: u32,

    #[arg(long)]
    pub preset: Option<String>,
}

/// Layer command-line overrides on top of the environment config.
#[must_use]
pub fn settings(cli: &Cli, mut config: StudioConfig) -> StudioConfig {
    if let Some(mode) = cli.mode {
        config.mode = mode;
    }
    if let Some(unit) = cli.unit {
        config.unit = unit;
    }
    config
}

pub fn run(command: &Command, config: &StudioConfig) -> Result<String, CliError> {
    match command {
        Command::Presets { json } => run_presets(config, *json),
        Command::Css { preset } => {
            let core = initial_core(config, preset.as_deref())?;
            Ok(core.css_declaration())
        }
        Command::Drag(args) => run_drag(config, args),
        Command::Key(args) => run_key(config, args),
        Command::State { preset } => {
            let core = initial_core(config, preset.as_deref())?;
            Ok(serde_json::to_string_pretty(&core.state)?)
        }
        Command::Preview { background, preset } => {
            let mut core = initial_core(config, preset.as_deref())?;
            core.appearance.background_url.clone_from(background);
            Ok(core.preview_css())
        }
    }
}

fn run_presets(config: &StudioConfig, json: bool) -> Result<String, CliError> {
    let presets = presets_for_mode(config.mode);
    if json {
        return Ok(serde_json::to_string_pretty(presets)?);
    }
    let width = presets.iter().map(|p| p.name.len()).max().unwrap_or(0);
    let lines: Vec<String> = presets
        .iter()
        .map(|preset| {
            let mut state = RadiusState { mode: config.mode, unit: config.unit, ..RadiusState::default() };
            state.apply_preset(preset);
            format!("{:<width$}  {}", preset.name, state.compute_css_value())
        })
        .collect();
    Ok(lines.join("\n"))
}

fn run_drag(config: &StudioConfig, args: &DragArgs) -> Result<String, CliError> {
    let handle: HandleId = args.handle.parse()?;
    let mut core = initial_core(config, args.preset.as_deref())?;
    core.set_mode(handle.mode());
    if let Some(raw) = &args.rect {
        let [left, top, width, height] = parse_tuple(raw)?;
        core.set_bounds(Rect::new(left, top, width, height));
    }
    let points = args
        .at
        .iter()
        .map(|raw| parse_tuple(raw).map(|[x, y]| Point::new(x, y)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut actions = core.on_pointer_down(handle);
    for point in points {
        actions.extend(core.on_pointer_move(&PointerSample::Mouse(point)));
    }
    actions.extend(core.on_pointer_up());
    tracing::debug!(changes = count_changes(&actions), "drag replayed");

    Ok(report(&core, handle))
}

fn run_key(config: &StudioConfig, args: &KeyArgs) -> Result<String, CliError> {
    let handle: HandleId = args.handle.parse()?;
    let mut core = initial_core(config, args.preset.as_deref())?;
    core.set_mode(handle.mode());
    let key = Key::new(args.key.as_str());
    if key.step().is_none() {
        tracing::warn!(key = %args.key, "key has no effect on handles");
    }
    let mut changes = 0;
    for _ in 0..args.repeat {
        changes += count_changes(&core.on_key_down(handle, &key));
    }
    tracing::debug!(changes, "keys replayed");

    Ok(report(&core, handle))
}

/// Engine for the effective config, with `preset` applied if named.
///
/// A preset switches the mode to its own, so `--preset Leaf` shows the Leaf
/// shape whatever the configured mode is.
fn initial_core(config: &StudioConfig, preset: Option<&str>) -> Result<EngineCore, CliError> {
    let mut core = EngineCore::new();
    core.set_mode(config.mode);
    core.set_unit(config.unit);
    core.appearance.width = config.preview_width;
    core.appearance.height = config.preview_height;
    core.set_bounds(core.appearance.rect());
    if let Some(name) = preset {
        let preset = lookup_preset(config.mode, name).ok_or_else(|| CliError::UnknownPreset(name.to_string()))?;
        core.apply_preset(preset);
        core.set_mode(preset.mode());
    }
    Ok(core)
}

/// Search `preferred` first, then every catalog.
fn lookup_preset(preferred: ControlMode, name: &str) -> Option<&'static Preset> {
    std::iter::once(preferred)
        .chain(ControlMode::ALL)
        .find_map(|mode| find_preset(mode, name))
}

fn report(core: &EngineCore, handle: HandleId) -> String {
    format!("{handle} = {}\n{}", core.state.handle_value(handle), core.css_declaration())
}

fn count_changes(actions: &[Action]) -> usize {
    actions.iter().filter(|a| matches!(a, Action::ValueChanged { .. })).count()
}

/// Parse exactly `N` comma-separated numbers.
fn parse_tuple<const N: usize>(raw: &str) -> Result<[f64; N], CliError> {
    let invalid = || CliError::InvalidTuple { expected: N, value: raw.to_string() };
    let values = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| invalid())?;
    <[f64; N]>::try_from(values).map_err(|_| invalid())
}

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;
