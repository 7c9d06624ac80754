// ============================================================================
// LOGIN CONTROLLER
// ============================================================================

use std::rc::Rc;

use crate::dom::DomEvent;
use crate::error::{AppError, StoreError};
use crate::models::{AuthToken, Credentials, NewUser, Role, Session};
use crate::navigator::NavigationHandle;
use crate::state::AppContext;

#[derive(Clone)]
pub struct Login {
    ctx: AppContext,
    nav: NavigationHandle,
}

fn prefix(role: Role) -> &'static str {
    match role {
        Role::Employee => "employee",
        Role::Admin => "admin",
    }
}

impl Login {
    pub fn new(ctx: AppContext, nav: NavigationHandle) -> Self {
        let login = Self { ctx, nav };
        login.bind();
        login
    }

    fn bind(&self) {
        for role in [Role::Employee, Role::Admin] {
            let this = self.clone();
            self.ctx.document.bind(
                &format!("form-{}", prefix(role)),
                DomEvent::Submit,
                Rc::new(move |_| {
                    let controller = this.clone();
                    this.ctx.spawn(async move {
                        if let Err(e) = controller.handle_submit(role).await {
                            log::error!("❌ [LOGIN] {}", e);
                        }
                    });
                }),
            );
        }
    }

    /// Email y contraseña del formulario del rol
    pub fn credentials(&self, role: Role) -> Credentials {
        let field = |name: &str| {
            self.ctx
                .document
                .value(&format!("{}-{}-input", prefix(role), name))
                .unwrap_or_default()
        };
        Credentials {
            email: field("email"),
            password: field("password"),
        }
    }

    /// Envío del formulario. Ok(None) si no hay store: la pantalla no cambia.
    pub async fn handle_submit(&self, role: Role) -> Result<Option<Session>, AppError> {
        let credentials = self.credentials(role);

        let token = match self.login(credentials.clone()).await {
            Ok(Some(token)) => token,
            Ok(None) => return Ok(None),
            Err(e) => {
                log::warn!("⚠️ [LOGIN] Login rechazado ({}), creando usuario", e);
                match self.create_user(role, &credentials).await {
                    Ok(Some(token)) => token,
                    Ok(None) => return Ok(None),
                    Err(e) => {
                        self.ctx.document.append_message(&e.to_string());
                        return Err(e.into());
                    }
                }
            }
        };

        let session = Session {
            role,
            identity: credentials.email,
            auth_token: token.jwt,
        };
        self.ctx.session.sign_in(&session)?;
        self.nav.request(role.landing());
        Ok(Some(session))
    }

    pub async fn login(&self, credentials: Credentials) -> Result<Option<AuthToken>, StoreError> {
        match &self.ctx.store {
            Some(store) => store.authenticate(credentials).await.map(Some),
            None => Ok(None),
        }
    }

    /// Alta del usuario y segundo intento de login
    pub async fn create_user(&self, role: Role, credentials: &Credentials) -> Result<Option<AuthToken>, StoreError> {
        let Some(store) = &self.ctx.store else {
            return Ok(None);
        };
        store.create_user(NewUser::from_credentials(role, credentials)).await?;
        log::info!("👤 [LOGIN] Usuario {} creado", credentials.email);
        self.login(credentials.clone()).await
    }
}
