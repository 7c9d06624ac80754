use super::render_layout;

const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

pub fn render_new_bill() -> String {
    let options: String = EXPENSE_TYPES
        .iter()
        .map(|kind| format!("<option>{}</option>", kind))
        .collect();
    let content = format!(
        r#"<div class="new-bill-page" data-testid="new-bill-page">
  <div class="content-title">Envoyer une note de frais</div>
  <form data-testid="form-new-bill" class="form-newbill-container">
    <label>Type de dépense</label>
    <select required data-testid="expense-type">{options}</select>
    <label>Nom de la dépense</label>
    <input type="text" data-testid="expense-name" placeholder="Vol Paris Londres" />
    <label>Date</label>
    <input required type="date" data-testid="datepicker" />
    <label>Montant TTC</label>
    <input required type="number" data-testid="amount" placeholder="348" />
    <label>TVA</label>
    <input type="number" data-testid="vat" placeholder="70" />
    <input type="number" data-testid="pct" placeholder="20" />
    <label>Commentaire</label>
    <textarea data-testid="commentary"></textarea>
    <label>Justificatif</label>
    <input required type="file" data-testid="file" />
    <div data-testid="file-error" class="file-error" style="display: none"></div>
    <button type="submit" id="btn-send-bill" class="btn btn-primary">Envoyer</button>
  </form>
</div>"#,
        options = options
    );
    render_layout(false, true, &content)
}
