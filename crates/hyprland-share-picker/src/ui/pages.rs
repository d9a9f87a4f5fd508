//! Screen, Window and Region pages
//!
//! Each page is described first as a list of [`PageEntry`] values (label
//! plus what clicking it picks), then turned into buttons. Keeping the
//! description separate from the widgets lets the labels and ordering be
//! checked without a display.

use gtk::prelude::*;
use tracing::warn;

use super::widgets::{create_button, scrollable, status_label};
use super::{PickHandler, PickTarget};
use crate::hyprland_ipc::{HyprlandError, Monitor, Window};
use crate::selection::Selection;

pub const REGION_BUTTON_LABEL: &str = "Select region...";

/// One button on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub label: String,
    pub target: PickTarget,
}

/// One entry per monitor, in enumeration order
pub fn screen_entries(monitors: &[Monitor]) -> Vec<PageEntry> {
    monitors
        .iter()
        .map(|monitor| PageEntry {
            label: format!(
                "Screen {} at {},{} ({}x{}) ({})",
                monitor.id, monitor.x, monitor.y, monitor.width, monitor.height, monitor.name
            ),
            target: PickTarget::Fixed(Selection::Screen {
                name: monitor.name.clone(),
            }),
        })
        .collect()
}

/// One entry per client window, in enumeration order
pub fn window_entries(windows: &[Window]) -> Vec<PageEntry> {
    windows
        .iter()
        .map(|window| PageEntry {
            label: format!("{}: {}", window.class, window.title),
            target: PickTarget::Fixed(Selection::Window {
                address: window.address.clone(),
            }),
        })
        .collect()
}

pub fn region_entries() -> Vec<PageEntry> {
    vec![PageEntry {
        label: REGION_BUTTON_LABEL.to_string(),
        target: PickTarget::Region,
    }]
}

/// Text shown instead of buttons when a list page has nothing to offer
pub fn status_message(entries: &Result<Vec<PageEntry>, HyprlandError>, noun: &str) -> Option<String> {
    match entries {
        Err(e) => Some(format!("Could not list {} from Hyprland: {}", noun, e)),
        Ok(list) if list.is_empty() => Some(format!("No {} found", noun)),
        Ok(_) => None,
    }
}

fn entries_box(entries: &[PageEntry], handler: &PickHandler) -> gtk::Box {
    let page = gtk::Box::new(gtk::Orientation::Vertical, 0);

    for entry in entries {
        let button = create_button(&entry.label);
        let handler = handler.clone();
        let target = entry.target.clone();
        button.connect_clicked(move |_| handler.pick(&target));
        page.append(&button);
    }

    page
}

/// Build a scrollable list page from a query result
///
/// A failed query is logged and explained on the page; the rest of the
/// picker keeps working.
fn list_page(
    entries: Result<Vec<PageEntry>, HyprlandError>,
    noun: &str,
    handler: &PickHandler,
) -> gtk::ScrolledWindow {
    if let Err(e) = &entries {
        warn!(error = %e, "Failed to list {}", noun);
    }

    let page = match status_message(&entries, noun) {
        Some(message) => {
            let page = gtk::Box::new(gtk::Orientation::Vertical, 0);
            page.append(&status_label(&message));
            page
        }
        None => entries_box(&entries.unwrap_or_default(), handler),
    };

    scrollable(&page)
}

pub fn screen_page(
    monitors: Result<Vec<Monitor>, HyprlandError>,
    handler: &PickHandler,
) -> gtk::ScrolledWindow {
    list_page(monitors.map(|m| screen_entries(&m)), "monitors", handler)
}

pub fn window_page(
    windows: Result<Vec<Window>, HyprlandError>,
    handler: &PickHandler,
) -> gtk::ScrolledWindow {
    list_page(windows.map(|w| window_entries(&w)), "windows", handler)
}

pub fn region_page(handler: &PickHandler) -> gtk::Box {
    entries_box(&region_entries(), handler)
}
