// ============================================================================
// ERRORES - Errores del store y de arranque de la app
// ============================================================================

use thiserror::Error;

/// Error devuelto por cualquier operación del store.
/// El `Display` es el mensaje que se muestra al usuario tal cual.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Rechazo con mensaje legible (p.ej. "Erreur 404")
    #[error("{0}")]
    Rejected(String),

    #[error("Erreur {status}")]
    Http { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl StoreError {
    pub fn rejected(message: impl Into<String>) -> Self {
        StoreError::Rejected(message.into())
    }
}

/// Fallo al escribir la sesión en el storage persistente
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("Storage write failed for '{key}': {reason}")]
    Write { key: String, reason: String },

    #[error("Could not serialize '{key}': {reason}")]
    Serialize { key: String, reason: String },
}

/// Errores de arranque y de sesión (montaje del DOM, storage del navegador)
#[derive(Debug, Error)]
pub enum AppError {
    #[error("No #{0} element found")]
    MissingRoot(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(target_arch = "wasm32")]
impl From<AppError> for wasm_bindgen::JsValue {
    fn from(err: AppError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_as_french_message() {
        assert_eq!(StoreError::Http { status: 404 }.to_string(), "Erreur 404");
        assert_eq!(StoreError::rejected("Erreur 500").to_string(), "Erreur 500");
    }

    #[test]
    fn storage_error_converts_into_app_error() {
        let err: AppError = StorageError::Write {
            key: "jwt".to_string(),
            reason: "quota".to_string(),
        }
        .into();
        assert!(matches!(err, AppError::Storage(StorageError::Write { .. })));
        assert_eq!(err.to_string(), "Storage write failed for 'jwt': quota");
    }
}
