//! Live-DOM behavior: anchor patching and click gating.
//!
//! Run with a wasm test runner against a browser, for example
//! `wasm-pack test --headless --firefox linkbutton-web`.

#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use linkbutton_core::{ClickVerdict, Params};
use linkbutton_web::foundation::ANCHOR_CLASS;
use linkbutton_web::{LinkButton, LinkButtonHandle, LinkButtonProps};
use wasm_bindgen_test::*;
use web_sys::{Element, EventTarget, MouseEvent, MouseEventInit};
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window()
        .expect("window")
        .document()
        .expect("document")
}

fn mount(props: LinkButtonProps) -> Element {
    let root = document().create_element("div").expect("create mount root");
    document()
        .body()
        .expect("body")
        .append_child(&root)
        .expect("attach mount root");
    yew::Renderer::<LinkButton>::with_root_and_props(root.clone(), props).render();
    root
}

fn anchor_in(root: &Element) -> Element {
    root.query_selector(&format!("a.{ANCHOR_CLASS}"))
        .expect("selector parses")
        .expect("anchor rendered")
}

fn click(target: &Element, button: i16) -> MouseEvent {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_button(button);
    let event = MouseEvent::new_with_mouse_event_init_dict("click", &init).expect("mouse event");
    let target: &EventTarget = target.as_ref();
    target.dispatch_event(&event).expect("dispatch");
    event
}

fn props(href: &str) -> LinkButtonProps {
    LinkButtonProps {
        href: AttrValue::from(href.to_owned()),
        target: None,
        base_params: Params::new(),
        params: Params::new(),
        label: AttrValue::from("Browse"),
        disabled: false,
        class: Classes::new(),
        on_before_click: None,
        on_click: Callback::noop(),
        handle: None,
    }
}

fn pairs(entries: &[(&str, &str)]) -> Params {
    entries.iter().copied().collect()
}

#[wasm_bindgen_test]
fn mount_renders_the_computed_href() {
    let mut p = props("/console/index");
    p.base_params = pairs(&[("tab", "artifacts")]);
    let root = mount(p);
    let anchor = anchor_in(&root);
    assert_eq!(
        anchor.get_attribute("href").unwrap(),
        "/console/index?tab=artifacts"
    );
}

#[wasm_bindgen_test]
fn set_params_patches_the_live_anchor() {
    let handle = LinkButtonHandle::new();
    let mut p = props("/console/index");
    p.base_params = pairs(&[("tab", "artifacts")]);
    p.handle = Some(handle.clone());
    let root = mount(p);
    let anchor = anchor_in(&root);

    handle
        .set_params(pairs(&[("q", "core"), ("tab", "search")]))
        .expect("anchor is live");
    assert_eq!(
        anchor.get_attribute("href").unwrap(),
        "/console/index?q=core&tab=search"
    );
}

#[wasm_bindgen_test]
fn second_patch_discards_the_first_overlay() {
    let handle = LinkButtonHandle::new();
    let mut p = props("/console/index");
    p.base_params = pairs(&[("tab", "artifacts")]);
    p.handle = Some(handle.clone());
    let root = mount(p);
    let anchor = anchor_in(&root);

    handle.set_params(pairs(&[("id", "1")])).expect("first patch");
    handle.set_params(pairs(&[("page", "2")])).expect("second patch");
    let href = anchor.get_attribute("href").unwrap();
    assert_eq!(href, "/console/index?page=2&tab=artifacts");
    assert!(!href.contains("id=1"));
}

#[wasm_bindgen_test]
fn notification_runs_before_the_handler() {
    let order: Rc<RefCell<Vec<&'static str>>> = Rc::default();
    let mut p = props("#probe");
    p.on_before_click = Some({
        let order = order.clone();
        Callback::from(move |_: MouseEvent| {
            order.borrow_mut().push("notify");
            ClickVerdict::Proceed
        })
    });
    p.on_click = {
        let order = order.clone();
        Callback::from(move |_: MouseEvent| order.borrow_mut().push("handler"))
    };
    let root = mount(p);

    click(&anchor_in(&root), 0);
    assert_eq!(*order.borrow(), vec!["notify", "handler"]);
}

#[wasm_bindgen_test]
fn veto_keeps_the_handler_silent() {
    let order: Rc<RefCell<Vec<&'static str>>> = Rc::default();
    let mut p = props("#probe");
    p.on_before_click = Some({
        let order = order.clone();
        Callback::from(move |_: MouseEvent| {
            order.borrow_mut().push("notify");
            ClickVerdict::Veto
        })
    });
    p.on_click = {
        let order = order.clone();
        Callback::from(move |_: MouseEvent| order.borrow_mut().push("handler"))
    };
    let root = mount(p);

    let event = click(&anchor_in(&root), 0);
    assert_eq!(*order.borrow(), vec!["notify"]);
    // A veto silences the handler but does not cancel the event.
    assert!(!event.default_prevented());
}

#[wasm_bindgen_test]
fn disabled_click_is_fully_suppressed() {
    let order: Rc<RefCell<Vec<&'static str>>> = Rc::default();
    let mut p = props("#probe");
    p.disabled = true;
    p.on_before_click = Some({
        let order = order.clone();
        Callback::from(move |_: MouseEvent| {
            order.borrow_mut().push("notify");
            ClickVerdict::Proceed
        })
    });
    p.on_click = {
        let order = order.clone();
        Callback::from(move |_: MouseEvent| order.borrow_mut().push("handler"))
    };
    let root = mount(p);

    let event = click(&anchor_in(&root), 0);
    assert!(event.default_prevented());
    assert!(order.borrow().is_empty());
}

#[wasm_bindgen_test]
fn non_primary_click_is_ignored() {
    let order: Rc<RefCell<Vec<&'static str>>> = Rc::default();
    let mut p = props("#probe");
    p.on_click = {
        let order = order.clone();
        Callback::from(move |_: MouseEvent| order.borrow_mut().push("handler"))
    };
    let root = mount(p);

    let event = click(&anchor_in(&root), 2);
    assert!(!event.default_prevented());
    assert!(order.borrow().is_empty());
}

#[wasm_bindgen_test]
fn live_disable_gates_clicks_without_a_render() {
    let order: Rc<RefCell<Vec<&'static str>>> = Rc::default();
    let handle = LinkButtonHandle::new();
    let mut p = props("#probe");
    p.handle = Some(handle.clone());
    p.on_click = {
        let order = order.clone();
        Callback::from(move |_: MouseEvent| order.borrow_mut().push("handler"))
    };
    let root = mount(p);
    let anchor = anchor_in(&root);

    click(&anchor, 0);
    assert_eq!(order.borrow().len(), 1);

    handle.set_disabled(true);
    let event = click(&anchor, 0);
    assert_eq!(order.borrow().len(), 1);
    assert!(event.default_prevented());

    handle.set_disabled(false);
    click(&anchor, 0);
    assert_eq!(order.borrow().len(), 2);
}
