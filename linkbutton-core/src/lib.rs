//! Linkbutton Core
//!
//! Platform-agnostic logic for the linkbutton widget kit: layered query
//! parameter maps, computed-href rules, the click-gating policy, and the
//! declarative configuration model. No UI or browser dependencies.

pub mod click;
pub mod config;
pub mod href;
pub mod params;

// Re-export commonly used types
pub use click::{ClickOutcome, ClickVerdict, PRIMARY_BUTTON, decide_click};
pub use config::LinkButtonConfig;
pub use href::compute_href;
pub use params::Params;
