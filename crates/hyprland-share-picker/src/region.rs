//! Interactive region selection
//!
//! Runs an external selector (`slurp` by default), parses the rectangle it
//! prints and works out which monitor the rectangle starts on. The result is
//! reported either in global compositor coordinates or relative to that
//! monitor, see [`Coordinates`].

use std::process::{ExitStatus, Stdio};
use std::sync::OnceLock;

use hyprland_share_picker_config::SelectorConfig;
use regex::Regex;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::hyprland_ipc::{HyprlandClient, HyprlandError, Monitor};

/// Errors from running the selector or reading its output
///
/// All of these end the picker with a non-zero exit code.
#[derive(Debug, Error)]
pub enum RegionError {
    /// The selector program could not be started
    #[error("Failed to run region selector `{program}`: {source}")]
    SelectorFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The selector exited unsuccessfully (slurp does this on cancel)
    #[error("Region selection cancelled or failed ({status}): {stderr}")]
    SelectorExited { status: ExitStatus, stderr: String },

    /// The output did not look like `<x>,<y> <width>x<height>`
    #[error("Malformed region selector output: {output:?}")]
    MalformedOutput { output: String },

    /// Monitor-relative coordinates were requested but no monitor holds the origin
    #[error("Selected region at {x},{y} is not on any monitor")]
    OffMonitor { x: i32, y: i32 },
}

/// Coordinate space a [`Region`] is reported in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Coordinates {
    /// As the selector printed them; the screen name may be empty
    #[default]
    Global,
    /// Relative to the monitor holding the origin, which must exist
    MonitorLocal,
}

/// The program and arguments used to select a region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl From<SelectorConfig> for SelectorCommand {
    fn from(config: SelectorConfig) -> Self {
        Self {
            program: config.program,
            args: config.args,
        }
    }
}

/// Rectangle reported by the selector, in global compositor coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// A selected rectangle and the monitor it starts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    /// Name of the monitor containing the top-left corner, empty if none does
    pub screen: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// Attach a geometry to the first monitor that strictly contains its origin
    ///
    /// Coordinates stay global.
    pub fn locate(geometry: Geometry, monitors: &[Monitor]) -> Self {
        let screen = monitor_at(monitors, geometry.x, geometry.y)
            .map(|m| m.name.clone())
            .unwrap_or_default();

        Self {
            screen,
            x: geometry.x,
            y: geometry.y,
            width: geometry.width,
            height: geometry.height,
        }
    }

    /// Translate a geometry into the coordinates of the monitor it starts on
    ///
    /// The monitor's own top-left corner counts as on the monitor, so a
    /// selection of a whole output maps to `0,0`.
    pub fn locate_local(geometry: Geometry, monitors: &[Monitor]) -> Result<Self, RegionError> {
        let monitor = monitors
            .iter()
            .find(|m| m.covers(geometry.x, geometry.y))
            .ok_or(RegionError::OffMonitor {
                x: geometry.x,
                y: geometry.y,
            })?;

        Ok(Self {
            screen: monitor.name.clone(),
            x: geometry.x.saturating_sub(monitor.x),
            y: geometry.y.saturating_sub(monitor.y),
            width: geometry.width,
            height: geometry.height,
        })
    }
}

/// First monitor, in enumeration order, strictly containing `(x, y)`
pub fn monitor_at(monitors: &[Monitor], x: i32, y: i32) -> Option<&Monitor> {
    monitors.iter().find(|m| m.contains(x, y))
}

fn geometry_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*(-?\d+),(-?\d+) (\d+)x(\d+)\s*$").expect("geometry pattern is valid")
    })
}

/// Parse selector output of the form `<x>,<y> <width>x<height>`
pub fn parse_geometry(output: &str) -> Result<Geometry, RegionError> {
    let malformed = || RegionError::MalformedOutput {
        output: output.to_string(),
    };

    let caps = geometry_pattern().captures(output).ok_or_else(malformed)?;
    let field = |i: usize| caps[i].parse::<i32>().map_err(|_| malformed());

    Ok(Geometry {
        x: field(1)?,
        y: field(2)?,
        width: field(3)?,
        height: field(4)?,
    })
}

/// Run the selector and return what it printed on stdout
///
/// Blocks (from the caller's point of view) until the user finishes or
/// cancels the selection.
pub async fn run_selector(selector: &SelectorCommand) -> Result<String, RegionError> {
    debug!(program = %selector.program, args = ?selector.args, "Starting region selector");

    let output = Command::new(&selector.program)
        .args(&selector.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| RegionError::SelectorFailed {
            program: selector.program.clone(),
            source: e,
        })?;

    if !output.status.success() {
        return Err(RegionError::SelectorExited {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Let the user pick a region and resolve the monitor it starts on
///
/// Talks to the Hyprland instance of the current session.
pub async fn select_region(
    selector: &SelectorCommand,
    coordinates: Coordinates,
) -> Result<Region, RegionError> {
    select_region_with(selector, HyprlandClient::from_env(), coordinates).await
}

/// [`select_region`] against an explicit client
///
/// The monitor list is queried fresh after the selection. If Hyprland cannot
/// be reached no monitor matches: in global coordinates the region is still
/// returned with an empty screen name, monitor-relative coordinates fail with
/// [`RegionError::OffMonitor`].
pub async fn select_region_with(
    selector: &SelectorCommand,
    client: Result<HyprlandClient, HyprlandError>,
    coordinates: Coordinates,
) -> Result<Region, RegionError> {
    let output = run_selector(selector).await?;
    let geometry = parse_geometry(&output)?;
    debug!(?geometry, ?coordinates, "Region selected");

    let monitors = match client {
        Ok(client) => client.monitors().await,
        Err(e) => Err(e),
    }
    .unwrap_or_else(|e| {
        warn!(error = %e, "Could not list monitors for region lookup");
        Vec::new()
    });

    match coordinates {
        Coordinates::Global => {
            let region = Region::locate(geometry, &monitors);
            if region.screen.is_empty() {
                warn!(x = region.x, y = region.y, "Selected region is not inside any monitor");
            }
            Ok(region)
        }
        Coordinates::MonitorLocal => Region::locate_local(geometry, &monitors),
    }
}
