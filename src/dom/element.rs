// ============================================================================
// ELEMENT HELPERS - Acceso al DOM del navegador por data-testid
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn test_id_selector(test_id: &str) -> String {
    format!("[data-testid=\"{}\"]", test_id)
}

/// Primer elemento con ese data-testid
pub fn query_test_id(test_id: &str) -> Option<Element> {
    document()?
        .query_selector(&test_id_selector(test_id))
        .ok()
        .flatten()
}

/// Todos los elementos con ese data-testid
pub fn query_all_test_id(test_id: &str) -> Vec<Element> {
    let Some(doc) = document() else {
        return Vec::new();
    };
    let Ok(nodes) = doc.query_selector_all(&test_id_selector(test_id)) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Establecer inner HTML
pub fn set_inner_html(element: &Element, html: &str) {
    element.set_inner_html(html);
}

/// Mostrar / ocultar vía style.display
pub fn set_display(element: &Element, visible: bool) -> Result<(), JsValue> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| JsValue::from_str("Element is not an HtmlElement"))?;
    html.style()
        .set_property("display", if visible { "block" } else { "none" })
}

/// Atributos del elemento como pares (nombre, valor)
pub fn attributes(element: &Element) -> Vec<(String, String)> {
    element
        .get_attribute_names()
        .iter()
        .filter_map(|name| name.as_string())
        .filter_map(|name| element.get_attribute(&name).map(|value| (name, value)))
        .collect()
}
