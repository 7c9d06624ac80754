// ============================================================================
// NEW BILL CONTROLLER - Upload del justificante + envío de la nota
// ============================================================================
// El upload crea la nota en el store y devuelve su clave; el submit la
// completa con `update`. Sin upload previo no hay nada que actualizar.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::dom::DomEvent;
use crate::error::StoreError;
use crate::models::{whole_amount, BillPayload, BillStatus, Route, UploadReceipt, UploadRequest};
use crate::navigator::NavigationHandle;
use crate::state::AppContext;
use crate::views::escape;

use super::bind_logout;

const MISSING_PROOF: &str = "Veuillez joindre un justificatif avant d'envoyer la note de frais.";

/// Resultado del último upload correcto
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub bill_id: Option<String>,
}

#[derive(Clone)]
pub struct NewBill {
    ctx: AppContext,
    nav: NavigationHandle,
    upload: Rc<RefCell<UploadState>>,
}

impl NewBill {
    pub fn new(ctx: AppContext, nav: NavigationHandle) -> Self {
        let new_bill = Self {
            ctx,
            nav,
            upload: Rc::new(RefCell::new(UploadState::default())),
        };
        new_bill.bind();
        new_bill
    }

    fn bind(&self) {
        let doc = &self.ctx.document;

        let this = self.clone();
        doc.bind(
            "file",
            DomEvent::Change,
            Rc::new(move |_| {
                let controller = this.clone();
                this.ctx.spawn(async move {
                    if let Err(e) = controller.handle_change_file().await {
                        log::error!("❌ [NEW BILL] Upload fallido: {}", e);
                    }
                });
            }),
        );

        let this = self.clone();
        doc.bind(
            "form-new-bill",
            DomEvent::Submit,
            Rc::new(move |_| {
                let controller = this.clone();
                this.ctx.spawn(async move {
                    if let Err(e) = controller.handle_submit().await {
                        log::error!("❌ [NEW BILL] Envío fallido: {}", e);
                    }
                });
            }),
        );

        bind_logout(&self.ctx, &self.nav);
    }

    pub fn upload_state(&self) -> UploadState {
        self.upload.borrow().clone()
    }

    /// Valida y sube el archivo elegido. Ok(None) si no hubo upload.
    pub async fn handle_change_file(&self) -> Result<Option<UploadReceipt>, StoreError> {
        let doc = &self.ctx.document;
        let Some(file) = doc.selected_file("file") else {
            return Ok(None);
        };

        if let Err(message) = self.ctx.validator.validate(&file.name) {
            log::warn!("⚠️ [NEW BILL] Archivo rechazado: {}", file.name);
            doc.set_value("file", "");
            doc.set_content("file-error", &escape(&message));
            doc.set_visible("file-error", true);
            return Ok(None);
        }
        doc.set_content("file-error", "");
        doc.set_visible("file-error", false);

        let Some(store) = &self.ctx.store else {
            return Ok(None);
        };
        let file_name = file.base_name().to_string();
        let email = self.ctx.session.identity().unwrap_or_default();
        let receipt = match store.bills().create(UploadRequest { file, email }).await {
            Ok(receipt) => receipt,
            Err(e) => {
                doc.append_message(&e.to_string());
                return Err(e);
            }
        };

        log::info!("📎 [NEW BILL] Justificante subido: {}", receipt.file_url);
        *self.upload.borrow_mut() = UploadState {
            file_url: Some(receipt.file_url.clone()),
            file_name: Some(file_name),
            bill_id: Some(receipt.key.clone()),
        };
        Ok(Some(receipt))
    }

    /// Nota armada con los campos del formulario y el último upload
    pub fn form_payload(&self) -> BillPayload {
        let field = |test_id: &str| self.ctx.document.value(test_id).unwrap_or_default();
        let upload = self.upload.borrow();
        BillPayload {
            email: self.ctx.session.identity().unwrap_or_default(),
            expense_type: field("expense-type"),
            name: field("expense-name"),
            amount: field("amount")
                .trim()
                .parse::<f64>()
                .ok()
                .map(whole_amount),
            date: field("datepicker"),
            vat: field("vat"),
            pct: field("pct")
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|pct| *pct > 0)
                .unwrap_or(self.ctx.default_vat_pct),
            commentary: field("commentary"),
            file_url: upload.file_url.clone(),
            file_name: upload.file_name.clone(),
            status: BillStatus::Pending.as_code().to_string(),
            comment_admin: None,
        }
    }

    pub async fn handle_submit(&self) -> Result<(), StoreError> {
        let doc = &self.ctx.document;
        let Some(store) = &self.ctx.store else {
            log::warn!("⚠️ [NEW BILL] Sin store configurado, envío ignorado");
            return Ok(());
        };
        let Some(bill_id) = self.upload.borrow().bill_id.clone() else {
            doc.append_message(MISSING_PROOF);
            return Ok(());
        };

        let payload = self.form_payload();
        match store.bills().update(payload, bill_id).await {
            Ok(()) => {
                log::info!("✅ [NEW BILL] Nota enviada");
                self.nav.request(Route::Bills);
                Ok(())
            }
            Err(e) => {
                doc.append_message(&e.to_string());
                Err(e)
            }
        }
    }
}
