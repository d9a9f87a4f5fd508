//! Internal types for Hyprland IPC data
//!
//! Hyprland's JSON replies carry far more than the picker needs. The reply
//! structs here decode only the fields we use, and the `From` implementations
//! turn them into the `Monitor` and `Window` views the rest of the picker
//! works with.

use serde::Deserialize;

/// A monitor as reported by `j/monitors`
#[derive(Debug, Deserialize)]
pub(super) struct MonitorReply {
    id: i64,
    name: String,
    #[serde(default)]
    description: String,
    x: i32,
    y: i32,
    width: i32,
    height: i32,
    #[serde(default)]
    focused: bool,
}

/// A client window as reported by `j/clients`
#[derive(Debug, Deserialize)]
pub(super) struct ClientReply {
    address: String,
    #[serde(default)]
    class: String,
    #[serde(default)]
    title: String,
    at: [i32; 2],
    size: [i32; 2],
}

/// A display in the compositor's layout
///
/// Position and size are in Hyprland's global coordinate space, the same
/// space the region selector reports in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Monitor {
    /// Numeric identifier assigned by Hyprland
    pub id: i64,

    /// Connector name (e.g., "DP-1", "eDP-1")
    ///
    /// This is the identifier written to the result line.
    pub name: String,

    /// Human-readable make and model
    pub description: String,

    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,

    /// Whether the monitor has keyboard focus; informational only
    pub focused: bool,
}

impl Monitor {
    /// Whether `(x, y)` lies strictly inside this monitor's bounds
    ///
    /// Points on any edge are outside.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x > self.x
            && x < self.x.saturating_add(self.width)
            && y > self.y
            && y < self.y.saturating_add(self.height)
    }

    /// Whether `(x, y)` lies on this monitor, counting its top and left edges
    pub fn covers(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

/// A client window managed by Hyprland
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Window {
    /// Unique client address (e.g., "0x55d0c4a0f1e0")
    ///
    /// This is the identifier written to the result line. Windows listed by
    /// the portal carry its numeric handle here instead.
    pub address: String,

    /// Window class (the Wayland app_id or X11 WM_CLASS)
    pub class: String,

    pub title: String,

    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl From<MonitorReply> for Monitor {
    fn from(reply: MonitorReply) -> Self {
        Self {
            id: reply.id,
            name: reply.name,
            description: reply.description,
            x: reply.x,
            y: reply.y,
            width: reply.width,
            height: reply.height,
            focused: reply.focused,
        }
    }
}

impl From<ClientReply> for Window {
    fn from(reply: ClientReply) -> Self {
        Self {
            address: reply.address,
            class: reply.class,
            title: reply.title,
            x: reply.at[0],
            y: reply.at[1],
            width: reply.size[0],
            height: reply.size[1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MONITOR_JSON: &str = r#"{
        "id": 1,
        "name": "DP-1",
        "description": "Dell Inc. DELL U2720Q",
        "make": "Dell Inc.",
        "model": "DELL U2720Q",
        "width": 3840,
        "height": 2160,
        "refreshRate": 59.997,
        "x": 1920,
        "y": 0,
        "activeWorkspace": { "id": 2, "name": "2" },
        "scale": 1.5,
        "transform": 0,
        "focused": true,
        "dpmsStatus": true,
        "vrr": false
    }"#;

    const CLIENT_JSON: &str = r#"{
        "address": "0x55d0c4a0f1e0",
        "mapped": true,
        "hidden": false,
        "at": [10, 40],
        "size": [1260, 1380],
        "workspace": { "id": 1, "name": "1" },
        "floating": false,
        "monitor": 0,
        "class": "kitty",
        "title": "nvim src/main.rs",
        "initialClass": "kitty",
        "initialTitle": "kitty",
        "pid": 4242,
        "xwayland": false
    }"#;

    #[test]
    fn smoke_monitor_from_full_reply() {
        let reply: MonitorReply = serde_json::from_str(MONITOR_JSON).unwrap();
        let monitor = Monitor::from(reply);

        assert_eq!(monitor.id, 1);
        assert_eq!(monitor.name, "DP-1");
        assert_eq!(monitor.description, "Dell Inc. DELL U2720Q");
        assert_eq!((monitor.x, monitor.y), (1920, 0));
        assert_eq!((monitor.width, monitor.height), (3840, 2160));
        assert!(monitor.focused);
    }

    #[test]
    fn smoke_monitor_without_optional_fields() {
        let json = r#"{"id":0,"name":"eDP-1","x":0,"y":0,"width":1920,"height":1080}"#;
        let monitor = Monitor::from(serde_json::from_str::<MonitorReply>(json).unwrap());

        assert_eq!(monitor.name, "eDP-1");
        assert!(monitor.description.is_empty());
        assert!(!monitor.focused);
    }

    #[test]
    fn smoke_monitor_missing_geometry_rejected() {
        let json = r#"{"id":0,"name":"eDP-1"}"#;
        assert!(serde_json::from_str::<MonitorReply>(json).is_err());
    }

    #[test]
    fn smoke_window_from_full_reply() {
        let reply: ClientReply = serde_json::from_str(CLIENT_JSON).unwrap();
        let window = Window::from(reply);

        assert_eq!(window.address, "0x55d0c4a0f1e0");
        assert_eq!(window.class, "kitty");
        assert_eq!(window.title, "nvim src/main.rs");
        assert_eq!((window.x, window.y), (10, 40));
        assert_eq!((window.width, window.height), (1260, 1380));
    }

    #[test]
    fn smoke_window_with_empty_class_and_title() {
        let json = r#"{"address":"0x1","class":"","title":"","at":[0,0],"size":[0,0]}"#;
        let window = Window::from(serde_json::from_str::<ClientReply>(json).unwrap());

        assert_eq!(window.class, "");
        assert_eq!(window.title, "");
    }

    fn monitor(x: i32, y: i32, width: i32, height: i32) -> Monitor {
        Monitor {
            id: 0,
            name: "M".to_string(),
            description: String::new(),
            x,
            y,
            width,
            height,
            focused: false,
        }
    }

    #[test]
    fn test_contains_interior_point() {
        assert!(monitor(0, 0, 1000, 1000).contains(500, 500));
        assert!(monitor(-1920, 0, 1920, 1080).contains(-100, 10));
    }

    #[test]
    fn test_contains_excludes_edges() {
        let m = monitor(0, 0, 1000, 1000);
        assert!(!m.contains(0, 500), "left edge is outside");
        assert!(!m.contains(500, 0), "top edge is outside");
        assert!(!m.contains(1000, 500), "right edge is outside");
        assert!(!m.contains(500, 1000), "bottom edge is outside");
    }

    #[test]
    fn test_covers_is_half_open() {
        let m = monitor(1920, 0, 2560, 1440);
        assert!(m.covers(1920, 0), "origin is covered");
        assert!(m.covers(4479, 1439));
        assert!(!m.covers(4480, 10), "right edge belongs to the next monitor");
        assert!(!m.covers(1919, 10));
    }
}
