//! colbar - Entry Point

use clap::Parser;
use colbar::config::{RejectedOverride, ResolvedConfig};
use colbar::model::{Align, Catalogue};
use colbar::state::AppState;
use colbar::view::{ColorConfig, MenuStyles};
use std::path::PathBuf;
use tracing::info;

/// colbar - menu bar with a multi-column popover
#[derive(Parser, Debug)]
#[command(name = "colbar")]
#[command(version)]
#[command(about = "Terminal menu bar whose popover packs items into columns")]
pub struct Args {
    /// Number of menu items to show
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u16).range(0..=200))]
    pub items: Option<u16>,

    /// Bar alignment
    #[arg(long, value_parser = ["left", "center", "right"])]
    pub align: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to a JSON menu file
    #[arg(long)]
    pub menu: Option<PathBuf>,

    /// Open the popover on startup
    #[arg(long)]
    pub open: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

/// Resolve configuration: Defaults → Config File → Env Vars → CLI Args.
///
/// Runs before logging exists, so rejected environment overrides are
/// returned for the caller to report once a subscriber is installed.
fn resolve_config(
    args: &Args,
) -> Result<(ResolvedConfig, Vec<RejectedOverride>), Box<dyn std::error::Error>> {
    let config_file = colbar::config::load_config_with_precedence(args.config.clone())?;
    let merged = colbar::config::merge_config(config_file)?;
    let (with_env, rejected) = colbar::config::apply_env_overrides(merged);

    let align_override = args.align.as_deref().map(str::parse::<Align>).transpose()?;
    let open_override = if args.open { Some(true) } else { None };

    let config = colbar::config::apply_cli_overrides(
        with_env,
        args.items.map(usize::from),
        align_override,
        args.menu.clone(),
        open_override,
    );
    Ok((config, rejected))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let (config, rejected) = resolve_config(&args)?;

    colbar::logging::init(&config.log_file_path)?;
    colbar::config::report_rejected_overrides(&rejected);

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let catalogue = match &config.menu_file {
        Some(path) => Catalogue::from_file(path)?,
        None => Catalogue::Generated,
    };

    let mut app_state = AppState::new(
        catalogue,
        config.items_count,
        config.align,
        config.budget_policy(),
        config.column_width,
    );
    if config.open_on_start {
        app_state.open_panel();
    }

    let styles = MenuStyles::with_color_config(ColorConfig::from_env_and_args(args.no_color));
    colbar::view::run(app_state, styles)?;

    Ok(())
}
