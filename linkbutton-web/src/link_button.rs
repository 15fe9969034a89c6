//! The link button widget: a real hyperlink wearing button chrome.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use linkbutton_core::{
    ClickOutcome, ClickVerdict, LinkButtonConfig, Params, compute_href, decide_click,
};
use thiserror::Error;
use web_sys::{HtmlAnchorElement, MouseEvent};
use yew::prelude::*;

use crate::foundation::ANCHOR_CLASS;
use crate::frame::button_frame;

/// Errors surfaced by [`LinkButtonHandle`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkButtonError {
    /// The widget has no live anchor: it has not been mounted into a
    /// browser DOM yet, or was rendered server-side.
    #[error("link button has not been rendered; there is no live anchor to patch")]
    NotRendered,
}

/// State shared between a mounted [`LinkButton`] and its handles.
///
/// The component and every clone of its handle alias one cell, so parameter
/// patches made through a handle survive later prop-driven renders.
#[derive(Default)]
struct LinkState {
    href: String,
    base_params: Params,
    params: Params,
    disabled: bool,
    anchor: NodeRef,
}

/// Cloneable imperative handle onto a [`LinkButton`].
///
/// Pass one through [`LinkButtonProps::handle`]; once the widget is mounted,
/// [`set_params`](Self::set_params) patches the live anchor in place and
/// [`set_disabled`](Self::set_disabled) gates clicks without a re-render.
#[derive(Clone, Default)]
pub struct LinkButtonHandle {
    state: Rc<RefCell<LinkState>>,
}

impl PartialEq for LinkButtonHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for LinkButtonHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkButtonHandle")
            .field("href", &self.current_href())
            .field("disabled", &self.is_disabled())
            .finish()
    }
}

impl LinkButtonHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole parameter overlay and synchronously patch the live
    /// anchor's `href`. Earlier overlay entries are discarded, not merged;
    /// the widget's base parameters always remain in effect.
    ///
    /// # Errors
    ///
    /// Returns [`LinkButtonError::NotRendered`] when the widget has no live
    /// anchor to patch. The stored overlay is left untouched in that case.
    pub fn set_params(&self, params: Params) -> Result<(), LinkButtonError> {
        let mut state = self.state.borrow_mut();
        let anchor: HtmlAnchorElement =
            state.anchor.cast().ok_or(LinkButtonError::NotRendered)?;
        state.params = params;
        let href = compute_href(&state.href, &state.base_params, &state.params);
        log::debug!("link button href patched to {href}");
        anchor.set_href(&href);
        Ok(())
    }

    /// Gate or un-gate clicks. The transition affects click handling only;
    /// disabled styling follows on the widget's next render.
    pub fn set_disabled(&self, disabled: bool) {
        self.state.borrow_mut().disabled = disabled;
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.state.borrow().disabled
    }

    /// Current parameter overlay, as a copy.
    #[must_use]
    pub fn params(&self) -> Params {
        self.state.borrow().params.clone()
    }

    /// The URL the widget currently computes for its anchor.
    #[must_use]
    pub fn current_href(&self) -> String {
        let state = self.state.borrow();
        compute_href(&state.href, &state.base_params, &state.params)
    }

    fn seed(&self, props: &LinkButtonProps) {
        let mut state = self.state.borrow_mut();
        state.href = props.href.to_string();
        state.base_params = props.base_params.clone();
        state.params = props.params.clone();
        state.disabled = props.disabled;
    }

    /// Carry changed props into the shared state, field by field, so that
    /// handle-made patches survive unrelated prop updates.
    fn sync(&self, old: &LinkButtonProps, new: &LinkButtonProps) {
        let mut state = self.state.borrow_mut();
        if old.href != new.href {
            state.href = new.href.to_string();
        }
        if old.base_params != new.base_params {
            state.base_params = new.base_params.clone();
        }
        if old.params != new.params {
            state.params = new.params.clone();
        }
        if old.disabled != new.disabled {
            state.disabled = new.disabled;
        }
    }

    fn anchor_ref(&self) -> NodeRef {
        self.state.borrow().anchor.clone()
    }
}

#[derive(Properties, PartialEq, Clone, Debug)]
pub struct LinkButtonProps {
    /// Base URL for the anchor. Treated as opaque text, never validated.
    pub href: AttrValue,
    /// Anchor `target`; `_blank` additionally gets a hardened `rel`.
    #[prop_or_default]
    pub target: Option<AttrValue>,
    /// Parameters always included in the computed URL.
    #[prop_or_default]
    pub base_params: Params,
    /// Parameters layered over `base_params`, winning on key collisions.
    #[prop_or_default]
    pub params: Params,
    /// Visible label.
    #[prop_or_default]
    pub label: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes appended to the widget frame.
    #[prop_or_default]
    pub class: Classes,
    /// Cancellable notification raised before the handler. Return
    /// [`ClickVerdict::Veto`] to keep `on_click` silent for this click.
    #[prop_or_default]
    pub on_before_click: Option<Callback<MouseEvent, ClickVerdict>>,
    /// Configured handler; runs for enabled, un-vetoed primary clicks.
    #[prop_or_default]
    pub on_click: Callback<MouseEvent>,
    /// Imperative handle kept alive by the caller for live patching.
    #[prop_or_default]
    pub handle: Option<LinkButtonHandle>,
}

impl From<&LinkButtonConfig> for LinkButtonProps {
    fn from(config: &LinkButtonConfig) -> Self {
        Self {
            href: AttrValue::from(config.href.clone()),
            target: config.target.clone().map(AttrValue::from),
            base_params: config.base_params.clone(),
            params: config.params.clone(),
            label: AttrValue::from(config.text.clone()),
            disabled: config.disabled,
            class: config.cls.clone().map(Classes::from).unwrap_or_default(),
            on_before_click: None,
            on_click: Callback::noop(),
            handle: None,
        }
    }
}

/// A hyperlink rendered with button chrome.
///
/// The anchor is real, so middle-click, copy-link-address, and other native
/// link affordances keep working. Clicks are gated by the shared policy in
/// `linkbutton-core`; the widget holds no pressed or toggled state of its
/// own. Click handling never triggers a re-render.
pub struct LinkButton {
    handle: LinkButtonHandle,
}

impl Component for LinkButton {
    type Message = ();
    type Properties = LinkButtonProps;

    fn create(ctx: &Context<Self>) -> Self {
        let handle = ctx.props().handle.clone().unwrap_or_default();
        handle.seed(ctx.props());
        Self { handle }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if let Some(handle) = &ctx.props().handle {
            if *handle != self.handle {
                // The caller swapped handles; adopt the new one wholesale.
                self.handle = handle.clone();
                self.handle.seed(ctx.props());
                return true;
            }
        }
        self.handle.sync(old_props, ctx.props());
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let (href, disabled) = {
            let state = self.handle.state.borrow();
            (
                compute_href(&state.href, &state.base_params, &state.params),
                state.disabled,
            )
        };
        let rel = matches!(props.target.as_deref(), Some("_blank"))
            .then(|| AttrValue::from("noopener noreferrer"));
        let anchor = html! {
            <a
                ref={self.handle.anchor_ref()}
                class={ANCHOR_CLASS}
                href={href}
                target={props.target.clone()}
                rel={rel}
                aria-disabled={disabled.then(|| AttrValue::from("true"))}
                onclick={self.click_callback(ctx)}
            >
                { props.label.clone() }
            </a>
        };
        button_frame(&props.class, disabled, anchor)
    }
}

impl LinkButton {
    /// Build the anchor's click listener.
    ///
    /// The whole policy runs inside the listener so that suppression
    /// happens while the event is still being dispatched. Disabled state is
    /// read from the shared cell at click time, which lets
    /// [`LinkButtonHandle::set_disabled`] take effect without a render.
    fn click_callback(&self, ctx: &Context<Self>) -> Callback<MouseEvent> {
        let handle = self.handle.clone();
        let on_before_click = ctx.props().on_before_click.clone();
        let on_click = ctx.props().on_click.clone();
        Callback::from(move |event: MouseEvent| {
            let outcome = decide_click(event.button(), handle.is_disabled(), || {
                on_before_click
                    .as_ref()
                    .map_or(ClickVerdict::Proceed, |cb| cb.emit(event.clone()))
            });
            match outcome {
                ClickOutcome::Suppressed => {
                    event.prevent_default();
                    event.stop_propagation();
                }
                ClickOutcome::Activated => on_click.emit(event.clone()),
                ClickOutcome::Ignored | ClickOutcome::Vetoed => {}
            }
        })
    }
}
