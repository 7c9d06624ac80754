use super::{escape, format_amount, render_layout};
use crate::models::{Bill, BillStatus};

fn render_card(bill: &Bill) -> String {
    format!(
        r#"<div class="bill-card" data-testid="open-bill" data-bill-id="{id}">
      <div class="bill-card-name">{email}</div>
      <div>{name}</div>
      <div>{amount}</div>
      <div>{date}</div>
      <div>{kind}</div>
    </div>"#,
        id = escape(&bill.id),
        email = escape(bill.email.as_deref().unwrap_or_default()),
        name = escape(&bill.name),
        amount = format_amount(bill.amount),
        date = escape(&bill.display_date),
        kind = escape(&bill.expense_type),
    )
}

fn render_section(status: BillStatus, bills: &[Bill]) -> String {
    let cards: String = bills
        .iter()
        .filter(|bill| bill.status() == Some(status))
        .map(render_card)
        .collect();
    let count = bills.iter().filter(|bill| bill.status() == Some(status)).count();
    format!(
        r#"<div class="status-bills" data-testid="status-bills-{code}">
    <div class="status-bills-header"><h3>{label}</h3><span data-testid="status-count-{code}">{count}</span></div>
    <div class="status-bills-container">{cards}</div>
  </div>"#,
        code = status.as_code(),
        label = status.label(),
        count = count,
        cards = cards,
    )
}

/// Dashboard del admin: notas agrupadas por estado + panel de decisión
pub fn render_dashboard(bills: &[Bill]) -> String {
    let sections: String = BillStatus::ALL
        .iter()
        .map(|status| render_section(*status, bills))
        .collect();
    let content = format!(
        r#"<div class="dashboard-page" data-testid="dashboard-page">
  <div class="content-title">Validations</div>
  <div class="dashboard-content">
    <div class="dashboard-left-container">{sections}</div>
    <div class="dashboard-right-container" data-testid="dashboard-form">
      <div class="big-billed-icon">Billed</div>
    </div>
  </div>
  <div class="modal" data-testid="modaleFileAdmin" style="display: none">
    <div class="modal-title">Justificatif</div>
    <div class="modal-body" data-testid="modal-file-admin-body"></div>
  </div>
</div>"#,
        sections = sections
    );
    render_layout(true, true, &content)
}

/// Formulario de decisión para una nota concreta
pub fn render_bill_form(bill: &Bill) -> String {
    let actions = if bill.status() == Some(BillStatus::Pending) {
        r#"<label>Ajouter un commentaire</label>
    <textarea data-testid="commentary2"></textarea>
    <button type="button" data-testid="btn-accept-bill" class="btn btn-primary">Accepter</button>
    <button type="button" data-testid="btn-refuse-bill" class="btn btn-secondary">Refuser</button>"#
            .to_string()
    } else {
        format!(
            r#"<div class="comment-admin">{}</div>"#,
            escape(&bill.comment_admin)
        )
    };
    format!(
        r#"<div class="bill-form" data-testid="bill-form" data-bill-id="{id}">
    <div>{kind} - {name}</div>
    <div>{date} - {amount}</div>
    <div>TVA {vat} ({pct}%)</div>
    <div>{commentary}</div>
    <div>{status}</div>
    <div data-testid="icon-eye-d" data-bill-url="{url}" class="icon-eye">👁</div>
    {actions}
  </div>"#,
        id = escape(&bill.id),
        kind = escape(&bill.expense_type),
        name = escape(&bill.name),
        date = escape(&bill.display_date),
        amount = format_amount(bill.amount),
        vat = escape(&bill.vat),
        pct = bill.pct.map(|p| p.to_string()).unwrap_or_default(),
        commentary = escape(&bill.commentary),
        status = escape(&bill.display_status),
        url = escape(bill.file_url.as_deref().unwrap_or_default()),
        actions = actions,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RawBill;

    fn bill(id: &str, status: &str) -> Bill {
        Bill::from_raw(RawBill {
            id: id.to_string(),
            status: status.to_string(),
            date: "2022-02-02".to_string(),
            ..RawBill::default()
        })
    }

    #[test]
    fn groups_bills_by_status() {
        let markup = render_dashboard(&[bill("a", "pending"), bill("b", "accepted"), bill("c", "pending")]);
        assert!(markup.contains(r#"<span data-testid="status-count-pending">2</span>"#));
        assert!(markup.contains(r#"<span data-testid="status-count-accepted">1</span>"#));
        assert!(markup.contains(r#"<span data-testid="status-count-refused">0</span>"#));
    }

    #[test]
    fn only_pending_bills_get_decision_buttons() {
        assert!(render_bill_form(&bill("a", "pending")).contains("btn-accept-bill"));
        assert!(!render_bill_form(&bill("b", "refused")).contains("btn-accept-bill"));
    }
}
