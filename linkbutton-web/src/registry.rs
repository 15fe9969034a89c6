//! Declarative widget instantiation.
//!
//! Server-driven UI descriptors name a widget type and carry its
//! configuration as JSON; a [`WidgetRegistry`] maps symbolic type names to
//! builder functions. The registry is an owned value scoped to the embedding
//! application's wiring code, not a process-wide mutable table.

use std::collections::HashMap;

use linkbutton_core::LinkButtonConfig;
use serde_json::Value;
use thiserror::Error;
use yew::prelude::*;

use crate::link_button::{LinkButton, LinkButtonProps};

/// Symbolic type name the link button registers under.
pub const LINK_BUTTON_TYPE: &str = "link-button";

/// Class of the inline chip rendered when a descriptor cannot be built.
pub const WIDGET_ERROR_CLASS: &str = "widget-error";

/// Errors raised while building widgets from descriptors.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No builder is registered under the requested type name.
    #[error("unknown widget type `{0}`")]
    UnknownType(String),
    /// The descriptor did not deserialize into the widget's configuration.
    #[error("invalid config for widget type `{kind}`: {source}")]
    InvalidConfig {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

type BuildFn = Box<dyn Fn(&Value) -> Result<Html, RegistryError>>;

/// Mapping from symbolic widget type names to builder functions.
#[derive(Default)]
pub struct WidgetRegistry {
    builders: HashMap<String, BuildFn>,
}

impl WidgetRegistry {
    /// Empty registry with nothing registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with this crate's widgets pre-registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(LINK_BUTTON_TYPE, link_button_builder);
        registry
    }

    /// Register `builder` under `name`, replacing any previous entry.
    pub fn register<F>(&mut self, name: impl Into<String>, builder: F)
    where
        F: Fn(&Value) -> Result<Html, RegistryError> + 'static,
    {
        self.builders.insert(name.into(), Box::new(builder));
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.builders.contains_key(name)
    }

    /// Registered type names, sorted for stable output.
    #[must_use]
    pub fn types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.builders.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    /// Build the widget registered under `name` from its descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownType`] when nothing is registered
    /// under `name`, or whatever error the builder itself raises.
    pub fn build(&self, name: &str, config: &Value) -> Result<Html, RegistryError> {
        let builder = self
            .builders
            .get(name)
            .ok_or_else(|| RegistryError::UnknownType(name.to_owned()))?;
        builder(config)
    }

    /// Like [`build`](Self::build), but renders failures as an inline error
    /// chip instead of propagating them, logging the cause.
    #[must_use]
    pub fn build_or_fallback(&self, name: &str, config: &Value) -> Html {
        match self.build(name, config) {
            Ok(html) => html,
            Err(e) => {
                log::error!("failed to build widget `{name}`: {e}");
                html! {
                    <span class={WIDGET_ERROR_CLASS} role="alert">
                        { format!("widget `{name}` failed to render") }
                    </span>
                }
            }
        }
    }
}

/// Build a [`LinkButton`] from a JSON descriptor.
///
/// # Errors
///
/// Returns [`RegistryError::InvalidConfig`] when the descriptor does not
/// deserialize into a [`LinkButtonConfig`].
pub fn link_button_builder(config: &Value) -> Result<Html, RegistryError> {
    let config: LinkButtonConfig =
        serde_json::from_value(config.clone()).map_err(|source| RegistryError::InvalidConfig {
            kind: LINK_BUTTON_TYPE.to_owned(),
            source,
        })?;
    let props = LinkButtonProps::from(&config);
    Ok(html! { <LinkButton ..props /> })
}
