use std::cell::{Cell, RefCell};

/// Historial del navegador. Solo el Navigator escribe entradas.
pub trait History {
    fn push_state(&self, path: &str);
    fn current_path(&self) -> String;
}

/// Historial en memoria con soporte de "atrás"
pub struct MemoryHistory {
    entries: RefCell<Vec<String>>,
    index: Cell<usize>,
}

impl MemoryHistory {
    pub fn new(initial: &str) -> Self {
        Self {
            entries: RefCell::new(vec![initial.to_string()]),
            index: Cell::new(0),
        }
    }

    /// Simula el botón atrás; devuelve el path al que se vuelve
    pub fn back(&self) -> Option<String> {
        let index = self.index.get();
        if index == 0 {
            return None;
        }
        self.index.set(index - 1);
        Some(self.current_path())
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}

impl History for MemoryHistory {
    fn push_state(&self, path: &str) {
        let mut entries = self.entries.borrow_mut();
        let index = self.index.get();
        // Un push descarta las entradas "adelante"
        entries.truncate(index + 1);
        entries.push(path.to_string());
        self.index.set(entries.len() - 1);
    }

    fn current_path(&self) -> String {
        self.entries
            .borrow()
            .get(self.index.get())
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_then_push_drops_forward_entries() {
        let history = MemoryHistory::new("/");
        history.push_state("#employee/bills");
        history.push_state("#employee/bill/new");
        assert_eq!(history.back().as_deref(), Some("#employee/bills"));
        history.push_state("#admin/dashboard");
        assert_eq!(history.entries(), vec!["/", "#employee/bills", "#admin/dashboard"]);
        assert_eq!(history.current_path(), "#admin/dashboard");
    }

    #[test]
    fn back_on_first_entry_is_none() {
        let history = MemoryHistory::new("/");
        assert_eq!(history.back(), None);
        assert_eq!(history.current_path(), "/");
    }
}
