// ============================================================================
// BILLS CONTROLLER - Lista de notas del empleado
// ============================================================================

use std::rc::Rc;

use crate::dom::{DomEvent, EventTarget};
use crate::error::StoreError;
use crate::models::{Bill, Route};
use crate::navigator::NavigationHandle;
use crate::state::AppContext;
use crate::views::bills::render_preview;

use super::{bind_logout, load_bills};

#[derive(Clone)]
pub struct Bills {
    ctx: AppContext,
    nav: NavigationHandle,
}

impl Bills {
    pub fn new(ctx: AppContext, nav: NavigationHandle) -> Self {
        let bills = Self { ctx, nav };
        bills.bind();
        bills
    }

    fn bind(&self) {
        let doc = &self.ctx.document;

        let this = self.clone();
        doc.bind(
            "btn-new-bill",
            DomEvent::Click,
            Rc::new(move |_| this.handle_click_new_bill()),
        );

        let this = self.clone();
        doc.bind(
            "icon-eye",
            DomEvent::Click,
            Rc::new(move |target| this.handle_click_icon_eye(target)),
        );

        bind_logout(&self.ctx, &self.nav);
    }

    pub fn handle_click_new_bill(&self) {
        self.nav.request(Route::NewBill);
    }

    /// Muestra el justificante de la fila en el modal, sin navegar
    pub fn handle_click_icon_eye(&self, target: &EventTarget) {
        let url = target.attr("data-bill-url").unwrap_or_default();
        let doc = &self.ctx.document;
        doc.set_content("modal-file-body", &render_preview(url));
        doc.set_visible("modaleFile", true);
    }

    pub async fn get_bills(&self) -> Result<Vec<Bill>, StoreError> {
        load_bills(&self.ctx).await
    }
}
