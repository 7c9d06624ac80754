// ============================================================================
// DASHBOARD CONTROLLER - Validación de notas por el admin
// ============================================================================

use std::rc::Rc;

use crate::dom::{DomEvent, EventTarget};
use crate::error::StoreError;
use crate::models::{Bill, BillPayload, BillStatus, Route};
use crate::navigator::NavigationHandle;
use crate::state::AppContext;
use crate::views::bills::render_preview;
use crate::views::dashboard::render_bill_form;

use super::{bind_logout, load_bills};

#[derive(Clone)]
pub struct Dashboard {
    ctx: AppContext,
    nav: NavigationHandle,
    bills: Rc<Vec<Bill>>,
}

impl Dashboard {
    pub fn new(ctx: AppContext, nav: NavigationHandle, bills: Vec<Bill>) -> Self {
        let dashboard = Self {
            ctx,
            nav,
            bills: Rc::new(bills),
        };
        dashboard.bind();
        dashboard
    }

    fn bind(&self) {
        let this = self.clone();
        self.ctx.document.bind(
            "open-bill",
            DomEvent::Click,
            Rc::new(move |target| {
                this.handle_edit_ticket(target);
            }),
        );
        bind_logout(&self.ctx, &self.nav);
    }

    pub async fn get_bills_all_users(&self) -> Result<Vec<Bill>, StoreError> {
        load_bills(&self.ctx).await
    }

    /// Abre el formulario de decisión de la nota clicada
    pub fn handle_edit_ticket(&self, target: &EventTarget) -> Option<Bill> {
        let id = target.attr("data-bill-id")?;
        let Some(bill) = self.bills.iter().find(|bill| bill.id == id).cloned() else {
            log::warn!("⚠️ [DASHBOARD] Nota {} no encontrada", id);
            return None;
        };

        let doc = &self.ctx.document;
        doc.set_content("dashboard-form", &render_bill_form(&bill));

        for (test_id, status) in [
            ("btn-accept-bill", BillStatus::Accepted),
            ("btn-refuse-bill", BillStatus::Refused),
        ] {
            let this = self.clone();
            let decided = bill.clone();
            doc.bind(
                test_id,
                DomEvent::Click,
                Rc::new(move |_| {
                    let controller = this.clone();
                    let bill = decided.clone();
                    this.ctx.spawn(async move {
                        if let Err(e) = controller.handle_decision(&bill, status).await {
                            log::error!("❌ [DASHBOARD] Decisión fallida: {}", e);
                        }
                    });
                }),
            );
        }

        let this = self.clone();
        doc.bind(
            "icon-eye-d",
            DomEvent::Click,
            Rc::new(move |target| this.handle_click_icon_eye(target)),
        );

        Some(bill)
    }

    pub fn handle_click_icon_eye(&self, target: &EventTarget) {
        let url = target.attr("data-bill-url").unwrap_or_default();
        let doc = &self.ctx.document;
        doc.set_content("modal-file-admin-body", &render_preview(url));
        doc.set_visible("modaleFileAdmin", true);
    }

    /// Acepta o rechaza la nota con el comentario del admin
    pub async fn handle_decision(&self, bill: &Bill, status: BillStatus) -> Result<(), StoreError> {
        let doc = &self.ctx.document;
        let Some(store) = &self.ctx.store else {
            return Ok(());
        };
        let comment = doc.value("commentary2").unwrap_or_default();
        let payload = BillPayload::decided(bill, status, comment, self.ctx.default_vat_pct);

        match store.bills().update(payload, bill.id.clone()).await {
            Ok(()) => {
                log::info!("✅ [DASHBOARD] Nota {} -> {}", bill.id, status.as_code());
                self.nav.request(Route::Dashboard);
                Ok(())
            }
            Err(e) => {
                doc.append_message(&e.to_string());
                Err(e)
            }
        }
    }
}
