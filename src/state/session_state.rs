// ============================================================================
// SESSION STATE - Sesión del usuario sobre el storage persistente
// ============================================================================

use std::rc::Rc;

use crate::error::StorageError;
use crate::models::{Role, Session, StoredUser};
use crate::utils::{load_json, save_json, SessionStorage, JWT_KEY, USER_KEY};

/// Vista tipada de la sesión guardada en `user` + `jwt`.
/// Un solo escritor (el login); el resto solo lee.
#[derive(Clone)]
pub struct SessionState {
    storage: Rc<dyn SessionStorage>,
}

impl SessionState {
    pub fn new(storage: Rc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Sesión actual; `user` ausente o corrupto => None
    pub fn current(&self) -> Option<Session> {
        let user: StoredUser = load_json(self.storage.as_ref(), USER_KEY)?;
        Some(Session {
            role: user.role,
            identity: user.email,
            auth_token: self.storage.get_item(JWT_KEY).unwrap_or_default(),
        })
    }

    pub fn role(&self) -> Option<Role> {
        self.current().map(|session| session.role)
    }

    pub fn identity(&self) -> Option<String> {
        self.current().map(|session| session.identity)
    }

    /// Guardar sesión tras un login correcto
    pub fn sign_in(&self, session: &Session) -> Result<(), StorageError> {
        save_json(
            self.storage.as_ref(),
            USER_KEY,
            &StoredUser::new(session.role, session.identity.clone()),
        )?;
        self.storage.set_item(JWT_KEY, &session.auth_token)?;
        log::info!("🔐 [SESSION] Sesión iniciada: {} ({:?})", session.identity, session.role);
        Ok(())
    }

    /// Logout - limpiar todo el storage
    pub fn logout(&self) {
        self.storage.clear();
        log::info!("👋 [SESSION] Sesión cerrada");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::MemoryStorage;

    fn state() -> (Rc<MemoryStorage>, SessionState) {
        let storage = Rc::new(MemoryStorage::new());
        (storage.clone(), SessionState::new(storage))
    }

    #[test]
    fn sign_in_writes_user_and_jwt() {
        let (storage, state) = state();
        state
            .sign_in(&Session {
                role: Role::Employee,
                identity: "employee@test.tld".to_string(),
                auth_token: "12345".to_string(),
            })
            .unwrap();
        assert_eq!(
            storage.get_item(USER_KEY).as_deref(),
            Some(r#"{"type":"Employee","email":"employee@test.tld","status":"connected"}"#)
        );
        assert_eq!(storage.get_item(JWT_KEY).as_deref(), Some("12345"));
        assert_eq!(state.role(), Some(Role::Employee));
    }

    #[test]
    fn session_without_jwt_has_empty_token() {
        let (storage, state) = state();
        storage.set_item(USER_KEY, r#"{"type":"Admin","email":"a@a"}"#).unwrap();
        let session = state.current().unwrap();
        assert_eq!(session.role, Role::Admin);
        assert_eq!(session.auth_token, "");
    }

    #[test]
    fn corrupt_user_means_no_session() {
        let (storage, state) = state();
        storage.set_item(USER_KEY, r#"{"type":"Visitor"}"#).unwrap();
        assert_eq!(state.current(), None);
    }

    #[test]
    fn logout_clears_everything() {
        let (storage, state) = state();
        storage.set_item(USER_KEY, r#"{"type":"Admin","email":"a@a"}"#).unwrap();
        storage.set_item(JWT_KEY, "tok").unwrap();
        state.logout();
        assert!(storage.is_empty());
        assert_eq!(state.current(), None);
    }
}
