//! Picker window
//!
//! A notebook with Screen, Window and Region pages. Every button carries a
//! [`PickTarget`] and hands it to the shared [`PickHandler`], which records
//! the outcome in the [`SelectionSlot`] and stops the application. Nothing
//! here prints or exits.

mod pages;
mod widgets;

use std::rc::Rc;

use gtk::glib;
use gtk::prelude::*;
use hyprland_share_picker_config::WindowConfig;
use tracing::{debug, info};

use crate::hyprland_ipc::{HyprlandClient, HyprlandError, Monitor, Window};
use crate::portal;
use crate::region::{self, SelectorCommand};
use crate::selection::{Outcome, OutputFormat, Selection, SelectionSlot};

const WINDOW_TITLE: &str = "Select what to share";
const RESTORE_TOKEN_LABEL: &str = "Allow a restore token";

/// Everything the picker needs while the event loop runs
pub struct PickerContext {
    /// Drives IPC and the selector subprocess from the GTK thread
    pub runtime: tokio::runtime::Runtime,
    pub slot: SelectionSlot,
    pub selector: SelectorCommand,
    pub format: OutputFormat,
    pub window: WindowConfig,
}

impl PickerContext {
    fn monitors(&self) -> Result<Vec<Monitor>, HyprlandError> {
        let client = HyprlandClient::from_env()?;
        self.runtime.block_on(client.monitors())
    }

    /// Windows to offer; the portal's own list when framing for the portal
    fn windows(&self) -> Result<Vec<Window>, HyprlandError> {
        match self.format {
            OutputFormat::Portal => Ok(portal::shared_windows()
                .into_iter()
                .map(Window::from)
                .collect()),
            OutputFormat::Plain => {
                let client = HyprlandClient::from_env()?;
                self.runtime.block_on(client.windows())
            }
        }
    }
}

/// What a button picks when clicked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickTarget {
    /// A selection known when the page was built
    Fixed(Selection),
    /// Ask the region selector at click time
    Region,
}

/// Shared click handler, cloned into every button
#[derive(Clone)]
pub struct PickHandler {
    context: Rc<PickerContext>,
    app: glib::WeakRef<gtk::Application>,
    restore_token: Option<gtk::CheckButton>,
}

impl PickHandler {
    fn allow_restore_token(&self) -> bool {
        self.restore_token
            .as_ref()
            .map(|check| check.is_active())
            .unwrap_or(false)
    }

    /// Resolve `target`, record the outcome and quit the application
    pub fn pick(&self, target: &PickTarget) {
        if self.context.slot.is_filled() {
            return;
        }

        let outcome = match target {
            PickTarget::Fixed(selection) => Outcome::Selected {
                selection: selection.clone(),
                allow_restore_token: self.allow_restore_token(),
            },
            PickTarget::Region => {
                let selector = &self.context.selector;
                let coordinates = self.context.format.coordinates();
                match self
                    .context
                    .runtime
                    .block_on(region::select_region(selector, coordinates))
                {
                    Ok(region) => Outcome::Selected {
                        selection: Selection::Region(region),
                        allow_restore_token: self.allow_restore_token(),
                    },
                    Err(e) => Outcome::Failed(e),
                }
            }
        };

        debug!(?outcome, "Picker finished");
        self.context.slot.offer(outcome);

        if let Some(app) = self.app.upgrade() {
            app.quit();
        }
    }
}

/// Build and show the picker window for `app`
pub fn build_window(app: &gtk::Application, context: Rc<PickerContext>) {
    let restore_token = match context.format {
        OutputFormat::Portal => Some(
            gtk::CheckButton::builder()
                .label(RESTORE_TOKEN_LABEL)
                .margin_start(widgets::MARGIN)
                .margin_end(widgets::MARGIN)
                .margin_top(widgets::MARGIN)
                .margin_bottom(widgets::MARGIN)
                .build(),
        ),
        OutputFormat::Plain => None,
    };

    let handler = PickHandler {
        context: Rc::clone(&context),
        app: app.downgrade(),
        restore_token: restore_token.clone(),
    };

    let monitors = context.monitors();
    let windows = context.windows();
    info!(
        monitors = ?monitors.as_ref().map(Vec::len).ok(),
        windows = ?windows.as_ref().map(Vec::len).ok(),
        "Queried Hyprland"
    );

    let notebook = gtk::Notebook::builder().vexpand(true).build();
    notebook.append_page(
        &pages::screen_page(monitors, &handler),
        Some(&gtk::Label::new(Some("Screen"))),
    );
    notebook.append_page(
        &pages::window_page(windows, &handler),
        Some(&gtk::Label::new(Some("Window"))),
    );
    notebook.append_page(
        &pages::region_page(&handler),
        Some(&gtk::Label::new(Some("Region"))),
    );

    let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
    root.append(&notebook);
    if let Some(check) = &restore_token {
        root.append(check);
    }

    let window = gtk::ApplicationWindow::builder()
        .application(app)
        .title(WINDOW_TITLE)
        .default_width(context.window.width)
        .default_height(context.window.height)
        .child(&root)
        .build();

    window.present();
}
