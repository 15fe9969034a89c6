//! Click-gating policy for button-like widgets.
//!
//! The policy is a pure decision, so the whole truth table is testable
//! without a DOM: non-primary clicks are ignored, a disabled widget
//! suppresses the event entirely, and an un-vetoed notification activates
//! the configured handler.

/// Button index the DOM reports for the primary input action.
pub const PRIMARY_BUTTON: i16 = 0;

/// Answer returned by the cancellable pre-click notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClickVerdict {
    /// Let the configured handler run.
    #[default]
    Proceed,
    /// Cancel the click: listeners saw it, the handler must stay silent.
    Veto,
}

/// What the widget must do with an incoming click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Non-primary input action: no effect and no suppression.
    Ignored,
    /// Disabled widget: cancel the default action and stop propagation.
    /// Nobody is notified.
    Suppressed,
    /// The notification vetoed the click; the handler stays silent.
    Vetoed,
    /// The notification passed; run the configured handler.
    Activated,
}

/// Decide what to do with a click on the widget.
///
/// `notify` raises the cancellable pre-click notification. It is invoked at
/// most once, and only for primary-button clicks on an enabled widget.
#[must_use]
pub fn decide_click(
    button: i16,
    disabled: bool,
    notify: impl FnOnce() -> ClickVerdict,
) -> ClickOutcome {
    if button != PRIMARY_BUTTON {
        return ClickOutcome::Ignored;
    }
    if disabled {
        return ClickOutcome::Suppressed;
    }
    match notify() {
        ClickVerdict::Proceed => ClickOutcome::Activated,
        ClickVerdict::Veto => ClickOutcome::Vetoed,
    }
}
