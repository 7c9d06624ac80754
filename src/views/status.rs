use super::escape;

pub fn render_loading() -> String {
    r#"<div id="loading" data-testid="loading">Loading...</div>"#.to_string()
}

/// Pantalla de error con el mensaje del fallo
pub fn render_error(message: &str) -> String {
    format!(
        r#"<div class="error-page" data-testid="error-message">
  <div class="error-title">Erreur</div>
  <div class="error-text">{}</div>
</div>"#,
        escape(message)
    )
}
