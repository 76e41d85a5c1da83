//! Typed lookups and listeners over server-rendered markup

use super::error::FormError;
use std::fmt;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget};

pub fn document() -> Result<Document, FormError> {
    let window = web_sys::window().ok_or(FormError::NoWindow)?;
    window.document().ok_or(FormError::NoDocument)
}

/// Narrow a located element to the type its role needs
pub fn cast<T: JsCast>(element: Element, name: impl fmt::Display) -> Result<T, FormError> {
    element.dyn_into::<T>().map_err(|_| FormError::WrongElement {
        selector: name.to_string(),
        expected: std::any::type_name::<T>(),
    })
}

/// All matches of a CSS selector; an empty page yields an empty list
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, FormError> {
    let nodes = document.query_selector_all(selector).map_err(FormError::dom)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

/// `data-<name>` attribute of a row trigger
pub fn data_attr(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(&format!("data-{name}"))
}

/// Attach a listener for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), FormError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref::<js_sys::Function>())
        .map_err(FormError::dom)?;
    // Слушатель живёт до перезагрузки страницы
    closure.forget();
    Ok(())
}

/// Run `f` once the document is parsed
pub fn on_ready<F>(document: &Document, f: F) -> Result<(), FormError>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let mut f = Some(f);
    listen(document, "DOMContentLoaded", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    })
}
