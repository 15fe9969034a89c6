#![forbid(unsafe_code)]
//! A button-styled hyperlink widget for Yew.
//!
//! [`LinkButton`] renders a real anchor inside ordinary button chrome, keeps
//! its URL in sync with layered query parameters, and gates clicks the way a
//! button would: non-primary clicks are ignored, disabled widgets swallow
//! the event, and a cancellable notification runs before the configured
//! handler. Widgets can also be instantiated declaratively from JSON
//! descriptors through [`WidgetRegistry`].

pub mod foundation;
pub mod frame;
pub mod link_button;
pub mod registry;

// Re-export commonly used types
pub use link_button::{LinkButton, LinkButtonError, LinkButtonHandle, LinkButtonProps};
pub use registry::{
    LINK_BUTTON_TYPE, RegistryError, WIDGET_ERROR_CLASS, WidgetRegistry, link_button_builder,
};

// Core vocabulary, re-exported so embedders can depend on this crate alone.
pub use linkbutton_core::{
    ClickOutcome, ClickVerdict, LinkButtonConfig, Params, compute_href, decide_click,
};
