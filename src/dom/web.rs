// ============================================================================
// WEB DOCUMENT / HISTORY - Implementaciones sobre web-sys
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::dom::document::{Document, DomEvent, Handler};
use crate::dom::element::{self, get_element_by_id, query_all_test_id, query_test_id, set_display, set_inner_html};
use crate::dom::events::listen;
use crate::dom::history::History;
use crate::error::AppError;
use crate::models::SelectedFile;

/// Documento del navegador montado sobre el contenedor raíz
pub struct WebDocument {
    root: Element,
}

impl WebDocument {
    pub fn mount(root_id: &str) -> Result<Self, AppError> {
        let root = get_element_by_id(root_id)
            .ok_or_else(|| AppError::MissingRoot(root_id.to_string()))?;
        Ok(Self { root })
    }
}

impl Document for WebDocument {
    fn replace_root(&self, markup: &str) {
        set_inner_html(&self.root, markup);
    }

    fn bind(&self, test_id: &str, event: DomEvent, handler: Handler) -> usize {
        let mut bound = 0;
        for el in query_all_test_id(test_id) {
            match listen(&el, test_id, event, handler.clone()) {
                Ok(()) => bound += 1,
                Err(e) => log::error!("❌ [DOM] No se pudo enlazar {} en {}: {:?}", event.name(), test_id, e),
            }
        }
        bound
    }

    fn value(&self, test_id: &str) -> Option<String> {
        let el = query_test_id(test_id)?;
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            return Some(select.value());
        }
        if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            return Some(area.value());
        }
        el.text_content()
    }

    fn set_value(&self, test_id: &str, value: &str) {
        let Some(el) = query_test_id(test_id) else {
            return;
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn selected_file(&self, test_id: &str) -> Option<SelectedFile> {
        let input = query_test_id(test_id)?.dyn_into::<HtmlInputElement>().ok()?;
        let file = input.files()?.get(0)?;
        Some(SelectedFile {
            name: file.name(),
            handle: file,
        })
    }

    fn set_content(&self, test_id: &str, markup: &str) {
        if let Some(el) = query_test_id(test_id) {
            set_inner_html(&el, markup);
        }
    }

    fn set_visible(&self, test_id: &str, visible: bool) {
        if let Some(el) = query_test_id(test_id) {
            if let Err(e) = set_display(&el, visible) {
                log::warn!("⚠️ [DOM] No se pudo cambiar visibilidad de {}: {:?}", test_id, e);
            }
        }
    }

    fn append_message(&self, text: &str) {
        let Some(doc) = element::document() else {
            return;
        };
        let (Ok(div), Some(body)) = (doc.create_element("div"), doc.body()) else {
            return;
        };
        div.set_text_content(Some(text));
        if let Err(e) = body.append_child(&div) {
            log::error!("❌ [DOM] No se pudo mostrar el mensaje: {:?}", e);
        }
    }
}

/// Historial del navegador; los paths de la app viven en el hash
pub struct WebHistory;

impl History for WebHistory {
    fn push_state(&self, path: &str) {
        let Some(win) = element::window() else {
            return;
        };
        let origin = win.location().origin().unwrap_or_default();
        let url = format!("{}{}", origin, path);
        if let Ok(history) = win.history() {
            if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(&url)) {
                log::error!("❌ [HISTORY] pushState falló para {}: {:?}", path, e);
            }
        }
    }

    fn current_path(&self) -> String {
        let Some(win) = element::window() else {
            return "/".to_string();
        };
        let location = win.location();
        match location.hash() {
            Ok(hash) if !hash.is_empty() => hash,
            _ => location.pathname().unwrap_or_else(|_| "/".to_string()),
        }
    }
}
