/// Barra vertical + contenido. `window_active` resalta la lista de notas,
/// `mail_active` la nueva nota; el dashboard resalta ambas.
pub fn render_layout(window_active: bool, mail_active: bool, content: &str) -> String {
    let class = |active: bool| if active { "layout-icon active-icon" } else { "layout-icon" };
    format!(
        r#"<div class="layout">
  <div class="vertical-navbar">
    <div class="layout-title">Billed</div>
    <div id="layout-icon1" data-testid="icon-window" class="{window}">🗂️</div>
    <div id="layout-icon2" data-testid="icon-mail" class="{mail}">✉️</div>
    <div id="layout-disconnect" data-testid="layout-disconnect" class="layout-icon">⏻</div>
  </div>
  <div class="content">{content}</div>
</div>"#,
        window = class(window_active),
        mail = class(mail_active),
        content = content,
    )
}
