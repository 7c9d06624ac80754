// ============================================================================
// EVENT HANDLING - Listeners sobre elementos del DOM
// ============================================================================
// Los listeners viven en elementos del subárbol de la pantalla: cuando el
// subárbol se reemplaza, el navegador los libera con él, así que
// closure.forget() no acumula listeners.
// Los listeners globales (popstate) se registran una sola vez en lib.rs.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use crate::dom::document::{DomEvent, EventTarget, Handler};
use crate::dom::element::attributes;

/// Enlaza `handler` al evento del elemento. Los submit cancelan el envío.
pub fn listen(element: &Element, test_id: &str, event: DomEvent, handler: Handler) -> Result<(), JsValue> {
    let target_element = element.clone();
    let test_id = test_id.to_string();
    let closure = Closure::wrap(Box::new(move |e: Event| {
        if event == DomEvent::Submit {
            e.prevent_default();
        }
        let mut target = EventTarget::new(test_id.clone());
        for (name, value) in attributes(&target_element) {
            target = target.with_attr(name, value);
        }
        handler(&target);
    }) as Box<dyn FnMut(Event)>);

    element.add_event_listener_with_callback(event.name(), closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
