// ============================================================================
// VIEWS - Funciones puras que devuelven markup (sin lógica ni listeners)
// ============================================================================
// Cada elemento interactivo lleva un data-testid; los controllers enlazan
// sus listeners sobre esos ids después de cada render.
// ============================================================================

pub mod bills;
pub mod dashboard;
pub mod layout;
pub mod login;
pub mod new_bill;
pub mod status;

pub use bills::render_bills;
pub use dashboard::render_dashboard;
pub use layout::render_layout;
pub use login::render_login;
pub use new_bill::render_new_bill;
pub use status::{render_error, render_loading};

/// Escapa texto para insertarlo en markup
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Importe en euros; vacío si no hay importe
pub fn format_amount(amount: Option<f64>) -> String {
    match amount {
        Some(a) if a.fract() == 0.0 => format!("{} €", a as i64),
        Some(a) => format!("{:.2} €", a),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape(r#"<b>"Hôtel" & 'co'</b>"#), "&lt;b&gt;&quot;Hôtel&quot; &amp; &#39;co&#39;&lt;/b&gt;");
    }

    #[test]
    fn amounts() {
        assert_eq!(format_amount(Some(400.0)), "400 €");
        assert_eq!(format_amount(Some(12.5)), "12.50 €");
        assert_eq!(format_amount(None), "");
    }
}
