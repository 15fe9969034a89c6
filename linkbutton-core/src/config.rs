//! Declarative widget descriptors.

use serde::{Deserialize, Serialize};

use crate::params::Params;

/// Configuration for a link button as carried by server-driven UI
/// descriptors.
///
/// Field names follow the descriptor form (`camelCase`). Every field is
/// optional in the descriptor and unknown keys are ignored, so embedding
/// applications can extend descriptors without breaking older widgets.
/// Handlers are not part of the data model; the embedding application wires
/// callbacks in code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkButtonConfig {
    /// Base URL the anchor points at. Not validated; a missing href yields
    /// a button pointing nowhere useful.
    pub href: String,
    /// Anchor `target` attribute, omitted from the DOM when `None`.
    pub target: Option<String>,
    /// Parameters always included in the computed URL.
    pub base_params: Params,
    /// Parameters layered over `base_params`, winning on key collisions.
    pub params: Params,
    /// Visible label text.
    pub text: String,
    /// Initial disabled state.
    pub disabled: bool,
    /// Extra CSS class(es) appended to the widget frame.
    pub cls: Option<String>,
}
