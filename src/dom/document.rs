use std::collections::HashMap;
use std::rc::Rc;

use crate::models::SelectedFile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomEvent {
    Click,
    Submit,
    Change,
}

impl DomEvent {
    pub fn name(self) -> &'static str {
        match self {
            DomEvent::Click => "click",
            DomEvent::Submit => "submit",
            DomEvent::Change => "change",
        }
    }
}

/// Elemento que disparó el evento, con sus atributos leídos en ese momento
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventTarget {
    pub test_id: String,
    attributes: HashMap<String, String>,
}

impl EventTarget {
    pub fn new(test_id: impl Into<String>) -> Self {
        Self {
            test_id: test_id.into(),
            attributes: HashMap::new(),
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

pub type Handler = Rc<dyn Fn(&EventTarget)>;

/// Documento direccionado por `data-testid`.
///
/// `replace_root` sustituye el subárbol completo de la pantalla: los
/// listeners del subárbol anterior desaparecen con él, así que reconstruir
/// un controller sobre un render nuevo nunca duplica handlers.
pub trait Document {
    fn replace_root(&self, markup: &str);

    /// Enlaza `handler` a todos los elementos con ese test-id.
    /// Devuelve cuántos elementos quedaron enlazados (0 si no existen).
    /// Los `submit` siempre cancelan el envío por defecto.
    fn bind(&self, test_id: &str, event: DomEvent, handler: Handler) -> usize;

    /// Valor de un campo de formulario; None si el elemento no existe
    fn value(&self, test_id: &str) -> Option<String>;

    fn set_value(&self, test_id: &str, value: &str);

    fn selected_file(&self, test_id: &str) -> Option<SelectedFile>;

    /// Reemplaza el contenido interno de un elemento
    fn set_content(&self, test_id: &str, markup: &str);

    fn set_visible(&self, test_id: &str, visible: bool);

    /// Añade un mensaje visible al final del body
    fn append_message(&self, text: &str);
}
