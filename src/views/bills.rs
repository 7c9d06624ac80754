use super::{escape, format_amount, render_layout};
use crate::models::Bill;

fn render_row(bill: &Bill) -> String {
    let url = bill.file_url.as_deref().unwrap_or_default();
    format!(
        r#"<tr>
        <td>{kind}</td>
        <td>{name}</td>
        <td>{date}</td>
        <td>{amount}</td>
        <td>{status}</td>
        <td><div data-testid="icon-eye" data-bill-url="{url}" class="icon-eye">👁</div></td>
      </tr>"#,
        kind = escape(&bill.expense_type),
        name = escape(&bill.name),
        date = escape(&bill.display_date),
        amount = format_amount(bill.amount),
        status = escape(&bill.display_status),
        url = escape(url),
    )
}

pub fn render_bills(bills: &[Bill]) -> String {
    let rows: String = bills.iter().map(render_row).collect();
    let content = format!(
        r#"<div class="bills-page" data-testid="bills-page">
  <div class="content-header">
    <div class="content-title">Mes notes de frais</div>
    <button type="button" data-testid="btn-new-bill" class="btn btn-primary">Nouvelle note de frais</button>
  </div>
  <table id="bills-table" class="table">
    <thead><tr><th>Type</th><th>Nom</th><th>Date</th><th>Montant</th><th>Statut</th><th>Actions</th></tr></thead>
    <tbody data-testid="tbody">{rows}</tbody>
  </table>
  <div class="modal" data-testid="modaleFile" style="display: none">
    <div class="modal-title">Justificatif</div>
    <div class="modal-body" data-testid="modal-file-body"></div>
  </div>
</div>"#,
        rows = rows
    );
    render_layout(true, false, &content)
}

/// Vista previa del justificante dentro del modal
pub fn render_preview(file_url: &str) -> String {
    if file_url.is_empty() || file_url == "null" {
        return r#"<p class="no-file">Aucun justificatif</p>"#.to_string();
    }
    format!(
        r#"<div class="bill-proof-container"><img src="{}" alt="Bill" /></div>"#,
        escape(file_url)
    )
}
