//! Stable class hooks for the widget chrome.
//!
//! Every class the widgets emit is deterministic given configuration, so
//! embedding applications can restyle the chrome or target it from tests
//! with plain selectors.

use yew::{Classes, classes};

/// Outer frame element.
pub const FRAME_CLASS: &str = "lbtn";
/// Frame body (the `tbody` of the grid).
pub const FRAME_BODY_CLASS: &str = "lbtn-body";
/// Modifier present on the outer frame while the widget is disabled.
pub const FRAME_DISABLED_CLASS: &str = "lbtn-disabled";
/// Emphasis wrapper around the anchor in the centre cell.
pub const EMPHASIS_CLASS: &str = "lbtn-em";
/// The anchor itself.
pub const ANCHOR_CLASS: &str = "lbtn-text";

/// Class list for the outer frame in the given state, plus caller extras.
#[must_use]
pub fn frame_classes(disabled: bool, extra: &Classes) -> Classes {
    let mut frame = classes!(FRAME_CLASS);
    if disabled {
        frame.push(FRAME_DISABLED_CLASS);
    }
    frame.push(extra.clone());
    frame
}
