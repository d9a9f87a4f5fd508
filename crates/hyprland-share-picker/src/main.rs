//! hyprland-share-picker
//!
//! Lets the user choose a monitor, a window or a screen region to share and
//! prints the choice as a single line on stdout for the capture pipeline.

mod hyprland_ipc;
mod portal;
mod region;
mod selection;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use gtk::prelude::*;
use hyprland_share_picker_config::{Config, LogLevel};
use tracing::error;
use tracing_subscriber::EnvFilter;

use region::SelectorCommand;
use selection::{Outcome, OutputFormat, SelectionSlot, Termination};
use ui::PickerContext;

const APP_ID: &str = "hyprland.share.picker";

const DEFAULT_CONFIG_PATH: &str = "~/.config/hyprland-share-picker/config.kdl";

#[derive(Parser, Debug)]
#[command(name = "hyprland-share-picker")]
#[command(about = "Pick a screen, window or region to share on Hyprland")]
#[command(version)]
struct Args {
    /// Path to configuration file [default: ~/.config/hyprland-share-picker/config.kdl]
    #[arg(short, long)]
    config: Option<String>,

    /// Region selection program, replacing the configured command
    #[arg(long)]
    selector: Option<String>,

    /// Answer xdg-desktop-portal-hyprland: `[SELECTION]<flags>/<selection>`,
    /// windows from XDPH_WINDOW_SHARING_LIST, monitor-relative regions
    #[arg(long)]
    portal_format: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long)]
    log_level: Option<LogLevel>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = load_config(args.config.as_deref());

    // Logs go to stderr: stdout carries the result line
    let level = args
        .log_level
        .or_else(|| config.as_ref().ok().map(|c| c.log_level))
        .unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = config.and_then(|config| run(args, config));
    match result {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Load the configuration file
///
/// A missing file at the default location means defaults; a missing file
/// passed with `--config` is an error.
fn load_config(explicit: Option<&str>) -> Result<Config> {
    let raw = explicit.unwrap_or(DEFAULT_CONFIG_PATH);
    let path: PathBuf = shellexpand::tilde(raw).into_owned().into();

    if explicit.is_none() && !path.exists() {
        return Ok(Config::default());
    }

    hyprland_share_picker_config::parse_config(&path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

fn selector_command(args: &Args, config: &Config) -> SelectorCommand {
    match &args.selector {
        Some(program) => SelectorCommand {
            program: shellexpand::tilde(program).into_owned(),
            args: Vec::new(),
        },
        None => SelectorCommand::from(config.region_selector.clone()),
    }
}

fn run(args: Args, config: Config) -> Result<ExitCode> {
    let format = if args.portal_format {
        OutputFormat::Portal
    } else {
        OutputFormat::Plain
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let context = Rc::new(PickerContext {
        runtime,
        slot: SelectionSlot::new(),
        selector: selector_command(&args, &config),
        format,
        window: config.window,
    });

    tracing::info!(selector = %context.selector.program, ?format, "Starting picker");

    // NON_UNIQUE: a second picker must not hand its activation to a running one
    let app = gtk::Application::builder()
        .application_id(APP_ID)
        .flags(gtk::gio::ApplicationFlags::NON_UNIQUE)
        .build();

    let activate_context = Rc::clone(&context);
    app.connect_activate(move |app| {
        ui::build_window(app, Rc::clone(&activate_context));
    });

    // clap already consumed the command line
    let runtime_code = app.run_with_args::<&str>(&[]);

    let outcome = context.slot.take();
    match &outcome {
        Some(Outcome::Failed(e)) => error!(error = %e, "Region selection failed"),
        None => tracing::info!("Picker closed without a selection"),
        Some(Outcome::Selected { .. }) => {}
    }

    let termination = Termination::resolve(
        outcome,
        format,
        u8::try_from(runtime_code.value()).unwrap_or(1),
    );

    if let Some(line) = &termination.line {
        println!("{}", line);
    }

    Ok(ExitCode::from(termination.exit_code))
}
