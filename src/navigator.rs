// ============================================================================
// NAVIGATOR - Máquina de estados de pantallas + historial
// ============================================================================
// Único escritor del historial y del subárbol raíz. Cada despacho toma un
// token de generación: un fetch que termina después de un despacho más
// nuevo se descarta sin tocar el documento.
// ============================================================================

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::controllers::{Bills, Dashboard, Login, NewBill};
use crate::dom::History;
use crate::models::{Role, Route, Session};
use crate::state::AppContext;
use crate::views::{render_bills, render_dashboard, render_error, render_loading, render_login, render_new_bill};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Antes del arranque
    Unauthenticated,
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl From<Route> for Screen {
    fn from(route: Route) -> Self {
        match route {
            Route::Login => Screen::Login,
            Route::Bills => Screen::Bills,
            Route::NewBill => Screen::NewBill,
            Route::Dashboard => Screen::Dashboard,
        }
    }
}

impl Screen {
    pub fn route(self) -> Option<Route> {
        match self {
            Screen::Unauthenticated => None,
            Screen::Login => Some(Route::Login),
            Screen::Bills => Some(Route::Bills),
            Screen::NewBill => Some(Route::NewBill),
            Screen::Dashboard => Some(Route::Dashboard),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Navegación pedida por un controller o por la app. None = path desconocido
    Request(Option<Route>),
    /// Botón atrás/adelante del navegador
    Back(Option<Route>),
    Boot(Option<Route>),
}

/// Guard de atrás/arranque: el rol decide a dónde se puede volver
fn guarded(requested: Option<Route>, session: Option<&Session>) -> Route {
    match session {
        None => Route::Login,
        Some(session) => match session.role {
            Role::Admin => Route::Dashboard,
            Role::Employee if requested == Some(Route::NewBill) => Route::NewBill,
            Role::Employee => Route::Bills,
        },
    }
}

/// Tabla de transiciones. None = sin transición (la pantalla actual se queda).
pub fn transition(current: Screen, event: NavEvent, session: Option<&Session>) -> Option<Screen> {
    let target = match event {
        NavEvent::Request(None) => return None,
        // Una petición antes del arranque pasa por el mismo guard que el arranque
        NavEvent::Request(requested) if current == Screen::Unauthenticated => guarded(requested, session),
        NavEvent::Request(Some(route)) => match session {
            Some(_) => route,
            None => Route::Login,
        },
        NavEvent::Back(requested) | NavEvent::Boot(requested) => guarded(requested, session),
    };
    Some(target.into())
}

/// Capacidad de navegar que reciben los controllers.
/// No mantiene vivo al Navigator.
#[derive(Clone)]
pub struct NavigationHandle {
    request: Rc<dyn Fn(Route)>,
}

impl NavigationHandle {
    pub fn from_fn(request: impl Fn(Route) + 'static) -> Self {
        Self {
            request: Rc::new(request),
        }
    }

    pub fn request(&self, route: Route) {
        (self.request)(route)
    }
}

struct Inner {
    ctx: AppContext,
    history: Rc<dyn History>,
    screen: Cell<Screen>,
    generation: Cell<u64>,
}

#[derive(Clone)]
pub struct Navigator {
    inner: Rc<Inner>,
}

impl Navigator {
    pub fn new(ctx: AppContext, history: Rc<dyn History>) -> Self {
        Self {
            inner: Rc::new(Inner {
                ctx,
                history,
                screen: Cell::new(Screen::Unauthenticated),
                generation: Cell::new(0),
            }),
        }
    }

    pub fn current(&self) -> Screen {
        self.inner.screen.get()
    }

    pub fn handle(&self) -> NavigationHandle {
        let weak: Weak<Inner> = Rc::downgrade(&self.inner);
        NavigationHandle::from_fn(move |route| {
            let Some(inner) = weak.upgrade() else {
                log::warn!("⚠️ [NAV] Navigator liberado, se ignora {:?}", route);
                return;
            };
            let navigator = Navigator { inner };
            let ctx = navigator.inner.ctx.clone();
            ctx.spawn(async move {
                navigator.navigate(route.path()).await;
            });
        })
    }

    /// Primera pantalla según sesión y path actual
    pub async fn boot(&self) {
        let path = self.inner.history.current_path();
        let session = self.inner.ctx.session.current();
        let Some(screen) = transition(self.current(), NavEvent::Boot(Route::from_path(&path)), session.as_ref()) else {
            return;
        };
        log::info!("🚀 [NAV] Arranque en {} -> {:?}", path, screen);
        if let Some(route) = screen.route() {
            if route.path() != path {
                self.inner.history.push_state(route.path());
            }
        }
        self.show(screen).await;
    }

    pub async fn navigate(&self, path: &str) {
        self.inner.history.push_state(path);
        let requested = Route::from_path(path);
        if requested.is_none() {
            log::warn!("⚠️ [NAV] Path desconocido: {}", path);
            return;
        }

        let session = self.inner.ctx.session.current();
        let Some(screen) = transition(self.current(), NavEvent::Request(requested), session.as_ref()) else {
            return;
        };
        if let Some(route) = screen.route() {
            if Some(route) != requested {
                log::info!("🔒 [NAV] {} redirigido a {}", path, route.path());
                self.inner.history.push_state(route.path());
            }
        }
        self.show(screen).await;
    }

    /// Atrás/adelante: aplica el guard y re-entra en `navigate`
    pub async fn on_pop_state(&self) {
        let path = self.inner.history.current_path();
        let session = self.inner.ctx.session.current();
        let Some(screen) = transition(self.current(), NavEvent::Back(Route::from_path(&path)), session.as_ref()) else {
            return;
        };
        if let Some(route) = screen.route() {
            self.navigate(route.path()).await;
        }
    }

    fn begin(&self) -> u64 {
        let token = self.inner.generation.get() + 1;
        self.inner.generation.set(token);
        token
    }

    fn is_current(&self, token: u64) -> bool {
        self.inner.generation.get() == token
    }

    async fn show(&self, screen: Screen) {
        let token = self.begin();
        self.inner.screen.set(screen);
        let ctx = &self.inner.ctx;
        let doc = &ctx.document;

        match screen {
            Screen::Unauthenticated => {}
            Screen::Login => {
                doc.replace_root(&render_login());
                Login::new(ctx.clone(), self.handle());
            }
            Screen::NewBill => {
                doc.replace_root(&render_new_bill());
                NewBill::new(ctx.clone(), self.handle());
            }
            Screen::Bills => {
                doc.replace_root(&render_loading());
                let result = Bills::new(ctx.clone(), self.handle()).get_bills().await;
                if !self.is_current(token) {
                    log::warn!("⚠️ [NAV] Respuesta obsoleta de Bills descartada");
                    return;
                }
                match result {
                    Ok(bills) => {
                        doc.replace_root(&render_bills(&bills));
                        Bills::new(ctx.clone(), self.handle());
                    }
                    Err(e) => {
                        log::error!("❌ [NAV] Error cargando notas: {}", e);
                        doc.replace_root(&render_error(&e.to_string()));
                    }
                }
            }
            Screen::Dashboard => {
                doc.replace_root(&render_loading());
                let result = Dashboard::new(ctx.clone(), self.handle(), Vec::new())
                    .get_bills_all_users()
                    .await;
                if !self.is_current(token) {
                    log::warn!("⚠️ [NAV] Respuesta obsoleta de Dashboard descartada");
                    return;
                }
                match result {
                    Ok(bills) => {
                        doc.replace_root(&render_dashboard(&bills));
                        Dashboard::new(ctx.clone(), self.handle(), bills);
                    }
                    Err(e) => {
                        log::error!("❌ [NAV] Error cargando notas: {}", e);
                        doc.replace_root(&render_error(&e.to_string()));
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: Role) -> Session {
        Session {
            role,
            identity: "someone@test.tld".to_string(),
            auth_token: String::new(),
        }
    }

    #[test]
    fn request_without_session_lands_on_login() {
        for route in Route::ALL {
            assert_eq!(
                transition(Screen::Bills, NavEvent::Request(Some(route)), None),
                Some(Screen::Login)
            );
        }
    }

    #[test]
    fn request_with_session_goes_where_asked() {
        let employee = session(Role::Employee);
        assert_eq!(
            transition(Screen::Bills, NavEvent::Request(Some(Route::NewBill)), Some(&employee)),
            Some(Screen::NewBill)
        );
    }

    #[test]
    fn unknown_path_keeps_current_screen() {
        let admin = session(Role::Admin);
        assert_eq!(transition(Screen::Dashboard, NavEvent::Request(None), Some(&admin)), None);
    }

    #[test]
    fn back_guard_depends_on_role() {
        let admin = session(Role::Admin);
        let employee = session(Role::Employee);

        assert_eq!(
            transition(Screen::Dashboard, NavEvent::Back(Some(Route::Bills)), Some(&admin)),
            Some(Screen::Dashboard)
        );
        assert_eq!(
            transition(Screen::Bills, NavEvent::Back(Some(Route::NewBill)), Some(&employee)),
            Some(Screen::NewBill)
        );
        assert_eq!(
            transition(Screen::NewBill, NavEvent::Back(Some(Route::Dashboard)), Some(&employee)),
            Some(Screen::Bills)
        );
        assert_eq!(
            transition(Screen::Bills, NavEvent::Back(Some(Route::Login)), Some(&employee)),
            Some(Screen::Bills)
        );
        assert_eq!(transition(Screen::Bills, NavEvent::Back(None), None), Some(Screen::Login));
    }

    #[test]
    fn boot_uses_the_back_guard() {
        let admin = session(Role::Admin);
        assert_eq!(
            transition(Screen::Unauthenticated, NavEvent::Boot(Some(Route::Bills)), Some(&admin)),
            Some(Screen::Dashboard)
        );
        assert_eq!(
            transition(Screen::Unauthenticated, NavEvent::Boot(None), None),
            Some(Screen::Login)
        );
    }

    #[test]
    fn request_before_boot_is_guarded() {
        let employee = session(Role::Employee);
        assert_eq!(
            transition(Screen::Unauthenticated, NavEvent::Request(Some(Route::Dashboard)), Some(&employee)),
            Some(Screen::Bills)
        );
    }
}
