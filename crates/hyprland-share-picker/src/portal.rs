//! Window list handed over by xdg-desktop-portal-hyprland
//!
//! When the picker runs on behalf of the portal, the shareable windows come
//! from `XDPH_WINDOW_SHARING_LIST` as a run of
//! `<handle>[HC>]<class>[HT>]<title>[HE>]` records. The portal expects its own
//! numeric handle back, not the Hyprland client address.

use tracing::{debug, warn};

use crate::hyprland_ipc::Window;

const SHARING_LIST_ENV: &str = "XDPH_WINDOW_SHARING_LIST";

const CLASS_SEPARATOR: &str = "[HC>]";
const TITLE_SEPARATOR: &str = "[HT>]";
const RECORD_END: &str = "[HE>]";

/// A window the portal offers for sharing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedWindow {
    pub handle: u64,
    pub class: String,
    pub title: String,
}

impl From<SharedWindow> for Window {
    /// The portal reports no geometry, so position and size are zero
    fn from(shared: SharedWindow) -> Self {
        Self {
            address: shared.handle.to_string(),
            class: shared.class,
            title: shared.title,
            x: 0,
            y: 0,
            width: 0,
            height: 0,
        }
    }
}

/// Parse the portal's window list
///
/// Records whose handle is not a number are skipped.
pub fn parse_sharing_list(list: &str) -> Vec<SharedWindow> {
    list.split(RECORD_END)
        .filter(|record| !record.is_empty())
        .filter_map(|record| {
            let parsed = parse_record(record);
            if parsed.is_none() {
                warn!(record, "Skipping malformed window sharing record");
            }
            parsed
        })
        .collect()
}

fn parse_record(record: &str) -> Option<SharedWindow> {
    let (handle, rest) = record.split_once(CLASS_SEPARATOR)?;
    let (class, title) = rest.split_once(TITLE_SEPARATOR)?;

    Some(SharedWindow {
        handle: handle.trim().parse().ok()?,
        class: class.to_string(),
        title: title.to_string(),
    })
}

/// Windows offered by the portal; empty when the variable is unset
pub fn shared_windows() -> Vec<SharedWindow> {
    match std::env::var(SHARING_LIST_ENV) {
        Ok(list) => parse_sharing_list(&list),
        Err(e) => {
            debug!(error = %e, "{} not available", SHARING_LIST_ENV);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_records() {
        let list = "94558394017472[HC>]firefox[HT>]Mozilla Firefox[HE>]\
                    94558394099712[HC>]kitty[HT>]~[HE>]";

        assert_eq!(
            parse_sharing_list(list),
            vec![
                SharedWindow {
                    handle: 94558394017472,
                    class: "firefox".to_string(),
                    title: "Mozilla Firefox".to_string(),
                },
                SharedWindow {
                    handle: 94558394099712,
                    class: "kitty".to_string(),
                    title: "~".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_empty_list() {
        assert!(parse_sharing_list("").is_empty());
    }

    #[test]
    fn test_empty_class_and_title() {
        let windows = parse_sharing_list("7[HC>][HT>][HE>]");
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].class, "");
        assert_eq!(windows[0].title, "");
    }

    #[test]
    fn test_bad_handle_is_skipped() {
        let windows = parse_sharing_list("0xabc[HC>]kitty[HT>]~[HE>]12[HC>]foot[HT>]shell[HE>]");
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].handle, 12);
    }

    #[test]
    fn test_truncated_record_is_skipped() {
        let windows = parse_sharing_list("12[HC>]foot[HT>]shell[HE>]13[HC>]kitty");
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].class, "foot");
    }

    #[test]
    fn test_window_from_shared_uses_handle() {
        let window = Window::from(SharedWindow {
            handle: 42,
            class: "kitty".to_string(),
            title: "~".to_string(),
        });
        assert_eq!(window.address, "42");
        assert_eq!((window.class.as_str(), window.title.as_str()), ("kitty", "~"));
    }
}
