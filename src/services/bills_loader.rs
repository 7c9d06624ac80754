// ============================================================================
// BILLS LOADER - fetch + formato + orden de las notas de frais
// ============================================================================

use std::cmp::Reverse;
use std::rc::Rc;

use crate::error::StoreError;
use crate::models::{Bill, RawBill};
use crate::services::Store;

pub struct BillsLoader {
    store: Rc<dyn Store>,
}

impl BillsLoader {
    pub fn new(store: Rc<dyn Store>) -> Self {
        Self { store }
    }

    /// Notas listas para renderizar, la más reciente primero.
    /// Un rechazo del store se propaga sin tocar.
    pub async fn load(&self) -> Result<Vec<Bill>, StoreError> {
        let raw = match self.store.bills().list().await {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("❌ [LOADER] Error obteniendo notas: {}", e);
                return Err(e);
            }
        };
        let bills = prepare_bills(raw);
        log::info!("📋 [LOADER] {} notas cargadas", bills.len());
        Ok(bills)
    }
}

/// Formatea cada registro y ordena por fecha cruda descendente.
/// Orden estable; las fechas ilegibles van al final en orden de llegada.
pub fn prepare_bills(raw: Vec<RawBill>) -> Vec<Bill> {
    let mut bills: Vec<Bill> = raw.into_iter().map(Bill::from_raw).collect();
    bills.sort_by_key(|bill| Reverse(bill.date_key()));
    bills
}
