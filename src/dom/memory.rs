// ============================================================================
// MEMORY DOCUMENT - Documento en memoria (tests / entornos sin navegador)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;

use crate::dom::document::{Document, DomEvent, EventTarget, Handler};
use crate::models::SelectedFile;

/// Documento que guarda el markup como texto y los listeners en una tabla.
/// Un elemento "existe" si su `data-testid` aparece en el markup actual.
#[derive(Default)]
pub struct MemoryDocument {
    root: RefCell<String>,
    renders: RefCell<Vec<String>>,
    contents: RefCell<HashMap<String, String>>,
    visibility: RefCell<HashMap<String, bool>>,
    values: RefCell<HashMap<String, String>>,
    files: RefCell<HashMap<String, SelectedFile>>,
    messages: RefCell<Vec<String>>,
    listeners: RefCell<Vec<(String, DomEvent, Handler)>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup actual del contenedor raíz
    pub fn root(&self) -> String {
        self.root.borrow().clone()
    }

    /// Todos los markups raíz renderizados, en orden
    pub fn renders(&self) -> Vec<String> {
        self.renders.borrow().clone()
    }

    pub fn contains_test_id(&self, test_id: &str) -> bool {
        let needle = test_id_attr(test_id);
        self.root.borrow().contains(&needle)
            || self.contents.borrow().values().any(|markup| markup.contains(&needle))
    }

    pub fn content(&self, test_id: &str) -> Option<String> {
        self.contents.borrow().get(test_id).cloned()
    }

    pub fn is_visible(&self, test_id: &str) -> Option<bool> {
        self.visibility.borrow().get(test_id).copied()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Todo el texto visible: raíz, contenidos insertados y mensajes
    pub fn body_text(&self) -> String {
        let mut text = self.root();
        for markup in self.contents.borrow().values() {
            text.push_str(markup);
        }
        for message in self.messages.borrow().iter() {
            text.push_str(message);
        }
        text
    }

    /// Simula que el usuario elige un archivo
    pub fn select_file(&self, test_id: &str, file: SelectedFile) {
        self.values.borrow_mut().insert(test_id.to_string(), file.name.clone());
        self.files.borrow_mut().insert(test_id.to_string(), file);
    }

    pub fn listener_count(&self, test_id: &str, event: DomEvent) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(id, ev, _)| id == test_id && *ev == event)
            .count()
    }

    /// Dispara el evento sobre el elemento; devuelve cuántos handlers corrieron
    pub fn fire(&self, test_id: &str, event: DomEvent) -> usize {
        self.fire_with(EventTarget::new(test_id), event)
    }

    pub fn fire_with(&self, target: EventTarget, event: DomEvent) -> usize {
        // Copiar los handlers: un handler puede re-renderizar el documento
        let handlers: Vec<Handler> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(id, ev, _)| *id == target.test_id && *ev == event)
            .map(|(_, _, handler)| handler.clone())
            .collect();
        for handler in &handlers {
            handler(&target);
        }
        handlers.len()
    }
}

fn test_id_attr(test_id: &str) -> String {
    format!("data-testid=\"{}\"", test_id)
}

impl Document for MemoryDocument {
    fn replace_root(&self, markup: &str) {
        *self.root.borrow_mut() = markup.to_string();
        self.renders.borrow_mut().push(markup.to_string());
        // El subárbol anterior desaparece con su estado y sus listeners
        self.contents.borrow_mut().clear();
        self.visibility.borrow_mut().clear();
        self.values.borrow_mut().clear();
        self.files.borrow_mut().clear();
        self.listeners.borrow_mut().clear();
    }

    fn bind(&self, test_id: &str, event: DomEvent, handler: Handler) -> usize {
        if !self.contains_test_id(test_id) {
            return 0;
        }
        self.listeners
            .borrow_mut()
            .push((test_id.to_string(), event, handler));
        1
    }

    fn value(&self, test_id: &str) -> Option<String> {
        if let Some(value) = self.values.borrow().get(test_id) {
            return Some(value.clone());
        }
        self.contains_test_id(test_id).then(String::new)
    }

    fn set_value(&self, test_id: &str, value: &str) {
        if value.is_empty() {
            self.files.borrow_mut().remove(test_id);
        }
        self.values
            .borrow_mut()
            .insert(test_id.to_string(), value.to_string());
    }

    fn selected_file(&self, test_id: &str) -> Option<SelectedFile> {
        self.files.borrow().get(test_id).cloned()
    }

    fn set_content(&self, test_id: &str, markup: &str) {
        if self.contains_test_id(test_id) {
            // Los elementos del contenido anterior se van con sus listeners
            if let Some(old) = self.contents.borrow().get(test_id) {
                self.listeners
                    .borrow_mut()
                    .retain(|(id, _, _)| !old.contains(&test_id_attr(id)));
            }
            self.contents
                .borrow_mut()
                .insert(test_id.to_string(), markup.to_string());
        }
    }

    fn set_visible(&self, test_id: &str, visible: bool) {
        if self.contains_test_id(test_id) {
            self.visibility
                .borrow_mut()
                .insert(test_id.to_string(), visible);
        }
    }

    fn append_message(&self, text: &str) {
        self.messages.borrow_mut().push(text.to_string());
    }
}
