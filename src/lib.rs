// ============================================================================
// BILLED - FRONTEND SPA (RUST PURO)
// ============================================================================
// - Views: funciones que producen markup (sin lógica)
// - Controllers: un controller por pantalla, enlazan listeners
// - Navigator: máquina de estados de pantallas + historial
// - Services: contrato del store y cliente HTTP
// - State: sesión persistente + contexto explícito
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod config;
pub mod controllers;
pub mod dom;
pub mod error;
pub mod models;
pub mod navigator;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

#[cfg(target_arch = "wasm32")]
mod app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::future::LocalBoxFuture;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::config::CONFIG;
    use crate::dom::{WebDocument, WebHistory};
    use crate::navigator::Navigator;
    use crate::services::{ApiClient, Store};
    use crate::state::{AppContext, SessionState};
    use crate::utils::storage::BrowserStorage;
    use crate::utils::{SessionStorage, ROOT_ID};

    // Instancia global del navigator (la app vive mientras viva la página)
    thread_local! {
        static NAVIGATOR: RefCell<Option<Navigator>> = RefCell::new(None);
    }

    fn current_navigator() -> Option<Navigator> {
        NAVIGATOR.with(|cell| cell.borrow().clone())
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        if CONFIG.is_logging_enabled() {
            wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
        }
        log::info!("🚀 Billed - backend {}", CONFIG.backend_url());

        let document = Rc::new(WebDocument::mount(ROOT_ID)?);
        let storage: Rc<dyn SessionStorage> = Rc::new(BrowserStorage);
        let store: Rc<dyn Store> = Rc::new(ApiClient::new(CONFIG.backend_url(), storage.clone()));
        let ctx = AppContext::new(
            document,
            Some(store),
            SessionState::new(storage),
            Rc::new(|future: LocalBoxFuture<'static, ()>| wasm_bindgen_futures::spawn_local(future)),
        );
        let navigator = Navigator::new(ctx.clone(), Rc::new(WebHistory));

        NAVIGATOR.with(|cell| {
            *cell.borrow_mut() = Some(navigator.clone());
        });

        // Listener global de popstate: se registra una sola vez aquí
        if let Some(win) = web_sys::window() {
            let spawn_ctx = ctx.clone();
            let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                if let Some(navigator) = current_navigator() {
                    spawn_ctx.spawn(async move { navigator.on_pop_state().await });
                }
            }) as Box<dyn FnMut(web_sys::Event)>);
            win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        ctx.spawn(async move { navigator.boot().await });
        Ok(())
    }

    /// Navegación desde JS (enlaces externos, devtools)
    #[wasm_bindgen]
    pub fn navigate_to(path: String) {
        let Some(navigator) = current_navigator() else {
            log::warn!("⚠️ [NAV] App no inicializada, se ignora {}", path);
            return;
        };
        wasm_bindgen_futures::spawn_local(async move { navigator.navigate(&path).await });
    }
}
