//! Small widget helpers shared by the picker pages

use gtk::prelude::*;

/// Margin around every button and status label, in pixels
pub const MARGIN: i32 = 6;

/// A button whose label ellipsizes instead of widening the window
///
/// The full text stays available as the label text and as a tooltip.
pub fn create_button(text: &str) -> gtk::Button {
    let label = gtk::Label::new(Some(text));
    label.set_ellipsize(gtk::pango::EllipsizeMode::End);

    gtk::Button::builder()
        .child(&label)
        .tooltip_text(text)
        .margin_start(MARGIN)
        .margin_end(MARGIN)
        .margin_top(MARGIN)
        .margin_bottom(MARGIN)
        .build()
}

/// A wrapped, dimmed label used when a page has nothing to pick
pub fn status_label(text: &str) -> gtk::Label {
    let label = gtk::Label::builder()
        .label(text)
        .wrap(true)
        .margin_start(MARGIN)
        .margin_end(MARGIN)
        .margin_top(MARGIN)
        .margin_bottom(MARGIN)
        .build();
    label.add_css_class("dim-label");
    label
}

/// Wrap a page in a vertically scrolling container
pub fn scrollable(content: &gtk::Box) -> gtk::ScrolledWindow {
    let viewport = gtk::Viewport::new(None::<&gtk::Adjustment>, None::<&gtk::Adjustment>);
    viewport.set_scroll_to_focus(true);
    viewport.set_child(Some(content));

    gtk::ScrolledWindow::builder()
        .hscrollbar_policy(gtk::PolicyType::Never)
        .vscrollbar_policy(gtk::PolicyType::Automatic)
        .propagate_natural_height(true)
        .vexpand(true)
        .child(&viewport)
        .build()
}
