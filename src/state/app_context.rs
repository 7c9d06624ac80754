// ============================================================================
// APP CONTEXT - Dependencias explícitas de los controllers
// ============================================================================
// Sustituye a los globals del navegador: documento, store, sesión y
// validador viajan juntos y se clonan baratos (todo detrás de Rc).
// ============================================================================

use std::future::Future;
use std::rc::Rc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;

use crate::config::CONFIG;
use crate::dom::Document;
use crate::services::Store;
use crate::state::SessionState;
use crate::utils::{ExtensionValidator, FileValidator};

/// Lanza un future en el executor del hilo de UI
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

#[derive(Clone)]
pub struct AppContext {
    pub document: Rc<dyn Document>,
    /// Sin store las operaciones remotas son no-ops
    pub store: Option<Rc<dyn Store>>,
    pub session: SessionState,
    pub validator: Rc<dyn FileValidator>,
    pub default_vat_pct: u32,
    spawner: Spawner,
}

impl AppContext {
    pub fn new(
        document: Rc<dyn Document>,
        store: Option<Rc<dyn Store>>,
        session: SessionState,
        spawner: Spawner,
    ) -> Self {
        Self {
            document,
            store,
            session,
            validator: Rc::new(ExtensionValidator::from_config(&CONFIG)),
            default_vat_pct: CONFIG.default_vat_pct,
            spawner,
        }
    }

    pub fn with_validator(mut self, validator: Rc<dyn FileValidator>) -> Self {
        self.validator = validator;
        self
    }

    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + 'static,
    {
        (self.spawner)(future.boxed_local());
    }
}
