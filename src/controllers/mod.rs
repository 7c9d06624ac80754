// ============================================================================
// CONTROLLERS - Un controller por pantalla
// ============================================================================
// Cada controller se construye sobre el subárbol recién renderizado y enlaza
// solo los listeners de su pantalla. Navegar se hace siempre a través del
// `NavigationHandle`, nunca tocando el historial directamente.
// ============================================================================

pub mod bills;
pub mod dashboard;
pub mod login;
pub mod logout;
pub mod new_bill;

pub use bills::Bills;
pub use dashboard::Dashboard;
pub use login::Login;
pub use logout::bind_logout;
pub use new_bill::{NewBill, UploadState};

use crate::error::StoreError;
use crate::models::Bill;
use crate::services::BillsLoader;
use crate::state::AppContext;

/// Carga de notas compartida por Bills y Dashboard; sin store => lista vacía
async fn load_bills(ctx: &AppContext) -> Result<Vec<Bill>, StoreError> {
    match &ctx.store {
        Some(store) => BillsLoader::new(store.clone()).load().await,
        None => {
            log::warn!("⚠️ [BILLS] Sin store configurado, lista vacía");
            Ok(Vec::new())
        }
    }
}
