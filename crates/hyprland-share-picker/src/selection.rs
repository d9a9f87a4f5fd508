//! The picker's result and how it leaves the process
//!
//! UI callbacks never print or exit. They offer an [`Outcome`] to the
//! [`SelectionSlot`], which keeps the first one; once the event loop has
//! stopped, `main` turns it into a [`Termination`].

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::region::{Coordinates, Region, RegionError};

/// What the user chose to share
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A whole monitor, by connector name
    Screen { name: String },
    /// A single window, by client address or the portal's window handle
    Window { address: String },
    /// A rectangle on a monitor
    Region(Region),
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Screen { name } => write!(f, "screen:{}", name),
            Self::Window { address } => write!(f, "window:{}", address),
            Self::Region(region) => write!(
                f,
                "region:{}@{},{},{},{}",
                region.screen, region.x, region.y, region.width, region.height
            ),
        }
    }
}

/// How the line is framed on stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Just the selection, e.g. `screen:DP-1`
    #[default]
    Plain,
    /// `[SELECTION]<flags>/<selection>` as read by xdg-desktop-portal-hyprland
    ///
    /// Windows are identified by the portal's handles and regions are
    /// relative to their monitor.
    Portal,
}

impl OutputFormat {
    /// Coordinate space region selections are reported in
    pub fn coordinates(self) -> Coordinates {
        match self {
            Self::Plain => Coordinates::Global,
            Self::Portal => Coordinates::MonitorLocal,
        }
    }
}

/// Final state reached by the picker
#[derive(Debug)]
pub enum Outcome {
    Selected {
        selection: Selection,
        /// The user allowed the portal to hand out a restore token
        allow_restore_token: bool,
    },
    Failed(RegionError),
}

/// Single-slot result channel shared by every button callback
///
/// Only the first offered outcome is kept, so at most one result line can
/// ever be produced.
#[derive(Debug, Clone, Default)]
pub struct SelectionSlot {
    inner: Rc<RefCell<Option<Outcome>>>,
}

impl SelectionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `outcome` unless one is already present; returns whether it was stored
    pub fn offer(&self, outcome: Outcome) -> bool {
        let mut slot = self.inner.borrow_mut();
        if slot.is_some() {
            return false;
        }
        *slot = Some(outcome);
        true
    }

    pub fn is_filled(&self) -> bool {
        self.inner.borrow().is_some()
    }

    pub fn take(&self) -> Option<Outcome> {
        self.inner.borrow_mut().take()
    }
}

/// What `main` writes to stdout and the code it exits with
#[derive(Debug, PartialEq, Eq)]
pub struct Termination {
    pub line: Option<String>,
    pub exit_code: u8,
}

impl Termination {
    /// Resolve the slot's content after the event loop returned
    ///
    /// `runtime_code` is the GUI runtime's own exit status, used when the
    /// window was closed without a choice.
    pub fn resolve(outcome: Option<Outcome>, format: OutputFormat, runtime_code: u8) -> Self {
        match outcome {
            Some(Outcome::Selected {
                selection,
                allow_restore_token,
            }) => Self {
                line: Some(format_line(&selection, format, allow_restore_token)),
                exit_code: 0,
            },
            Some(Outcome::Failed(_)) => Self {
                line: None,
                exit_code: 1,
            },
            None => Self {
                line: None,
                exit_code: runtime_code,
            },
        }
    }
}

fn format_line(selection: &Selection, format: OutputFormat, allow_restore_token: bool) -> String {
    match format {
        OutputFormat::Plain => selection.to_string(),
        OutputFormat::Portal => {
            let flags = if allow_restore_token { "r" } else { "" };
            format!("[SELECTION]{}/{}", flags, selection)
        }
    }
}
