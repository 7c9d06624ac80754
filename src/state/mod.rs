// ============================================================================
// STATE MODULE - Sesión persistente + contexto explícito de la app
// ============================================================================

pub mod app_context;
pub mod session_state;

pub use app_context::*;
pub use session_state::*;
