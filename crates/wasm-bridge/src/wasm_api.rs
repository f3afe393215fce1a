//! WASM entry points for the activity page.
//!
//! This module is only compiled for the `wasm32` target. `boot` reads the
//! `src` query parameter, fetches the config and wires the page; hosts
//! that drive the activity themselves use `process_message` instead.

use std::cell::RefCell;

use activity_config::{config_url_from_query, LoadError};
use activity_engine::{Action, ActivityView, MAX_STUDENT_POINTS};
use graph_render::panels::instructions_card;
use graph_render::CANVAS_SIZE;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, HtmlElement, MouseEvent, Request, RequestCache, RequestInit, Response};

use crate::dispatch::process_json;
use crate::session::{load_failure_panel, missing_source_content, BridgeError, Header, Session};

const INSTRUCTIONS_CARD_ID: &str = "instructionsCard";

// Single-threaded; one activity per page.
thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session::new());
}

/// Install the panic hook. Call once before anything else.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Process a JSON `UiToActivity` message and return a JSON `ActivityToUi`.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    SESSION.with(|cell| process_json(&mut cell.borrow_mut(), json_input))
}

/// Load the config named by `?src=` and render the activity into the page.
#[wasm_bindgen]
pub fn boot() -> Result<(), JsValue> {
    init();
    let document = document()?;
    let search = window()?.location().search()?;

    let Some(src) = config_url_from_query(&search) else {
        let content = missing_source_content();
        set_header(&document, &content.header);
        ensure_instructions_card(&document, content.interactive)?;
        set_inner_html(&document, "app", &content.panel_html);
        return Ok(());
    };

    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = load_and_render(&src).await {
            web_sys::console::error_1(&e);
        }
    });
    Ok(())
}

async fn load_and_render(src: &str) -> Result<(), JsValue> {
    let document = document()?;
    let loaded = match fetch_text(src).await {
        Ok(json) => SESSION.with(|cell| cell.borrow_mut().load(&json, src)),
        Err(err) => Err(BridgeError::Load(err)),
    };

    match loaded {
        Ok(view) => {
            ensure_instructions_card(&document, true)?;
            render(&document, &view)
        }
        Err(BridgeError::Load(err)) => {
            show_load_failure(&document, &err, src);
            Ok(())
        }
        Err(e) => Err(JsValue::from_str(&e.to_string())),
    }
}

/// GET `url` with caching disabled and return the body text.
async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let network = |e: JsValue| LoadError::Network {
        url: url.to_string(),
        reason: e.as_string().unwrap_or_else(|| format!("{:?}", e)),
    };

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_cache(RequestCache::NoStore);
    let request = Request::new_with_str_and_init(url, &init).map_err(network)?;

    let response: Response = JsFuture::from(window().map_err(network)?.fetch_with_request(&request))
        .await
        .map_err(network)?
        .dyn_into()
        .map_err(network)?;

    if !response.ok() {
        return Err(LoadError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let text = JsFuture::from(response.text().map_err(network)?)
        .await
        .map_err(network)?;
    Ok(text.as_string().unwrap_or_default())
}

fn show_load_failure(document: &Document, err: &LoadError, src: &str) {
    web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
    set_header(document, &Header::load_failed(err, src));
    set_inner_html(document, "app", &load_failure_panel(err));
}

// ── Rendering ────────────────────────────────────────────────────────────

fn render(document: &Document, view: &ActivityView) -> Result<(), JsValue> {
    set_header(
        document,
        &Header {
            title: view.title.clone(),
            subtitle: view.subtitle.clone(),
        },
    );

    if let Some(prompt) = document.get_element_by_id("prompt") {
        prompt.set_text_content(Some(&view.prompt));
    }
    set_inner_html(document, "howto", &view.howto_html);
    set_inner_html(document, "app", &view.graph_svg);
    set_inner_html(document, "feedback", &view.feedback_html);

    if let Some(button) = element_as::<HtmlElement>(document, "btnSeeSolution") {
        let display = if view.see_solution_visible { "inline-block" } else { "none" };
        button.style().set_property("display", display)?;
    }
    Ok(())
}

fn set_header(document: &Document, header: &Header) {
    if let Some(title) = document.get_element_by_id("title") {
        title.set_text_content(Some(&header.title));
    }
    if let Some(subtitle) = document.get_element_by_id("subtitle") {
        subtitle.set_text_content(Some(&header.subtitle));
    }
}

fn set_inner_html(document: &Document, id: &str, html: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_inner_html(html);
    }
}

/// Insert the instructions card before the graph container, binding its
/// controls when `interactive`. Does nothing if the card is already present.
fn ensure_instructions_card(document: &Document, interactive: bool) -> Result<(), JsValue> {
    if document.get_element_by_id(INSTRUCTIONS_CARD_ID).is_some() {
        return Ok(());
    }
    let Some(app) = document.get_element_by_id("app") else {
        return Ok(());
    };

    let card = document.create_element("div")?;
    card.set_id(INSTRUCTIONS_CARD_ID);
    card.set_class_name("card");
    card.set_attribute("style", "margin-bottom:16px;")?;
    card.set_inner_html(&instructions_card(MAX_STUDENT_POINTS));
    if let Some(parent) = app.parent_node() {
        parent.insert_before(&card, Some(&app))?;
    }
    if !interactive {
        return Ok(());
    }

    bind_button(document, "btnUndo", Action::Undo)?;
    bind_button(document, "btnReset", Action::Reset)?;
    bind_button(document, "btnSubmit", Action::Submit)?;
    bind_button(document, "btnSeeSolution", Action::SeeSolution)?;
    bind_graph_clicks(&app)
}

// ── Events ───────────────────────────────────────────────────────────────

fn bind_button(document: &Document, id: &str, action: Action) -> Result<(), JsValue> {
    let Some(button) = document.get_element_by_id(id) else {
        return Ok(());
    };
    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |_event: MouseEvent| {
        apply(action.clone());
    });
    button.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

/// The SVG is replaced on every render, so clicks are caught on its
/// container and located against the current SVG's bounding box.
fn bind_graph_clicks(app: &Element) -> Result<(), JsValue> {
    let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
        let Ok(document) = document() else {
            return;
        };
        let Some(svg) = document.get_element_by_id(graph_render::graph::GRAPH_ELEMENT_ID) else {
            return;
        };
        let rect = svg.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let x = (f64::from(event.client_x()) - rect.left()) * (CANVAS_SIZE / rect.width());
        let y = (f64::from(event.client_y()) - rect.top()) * (CANVAS_SIZE / rect.height());
        apply(Action::PlotClick { x, y });
    });
    app.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();
    Ok(())
}

fn apply(action: Action) {
    let result = SESSION.with(|cell| cell.borrow_mut().apply(action));
    let outcome = match result {
        Ok(view) => document().and_then(|document| render(&document, &view)),
        Err(e) => Err(JsValue::from_str(&e.to_string())),
    };
    if let Err(e) = outcome {
        web_sys::console::error_1(&e);
    }
}

// ── Helpers ──────────────────────────────────────────────────────────────

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

fn element_as<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}
