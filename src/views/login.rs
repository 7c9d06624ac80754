fn login_form(role: &str, title: &str) -> String {
    format!(
        r#"<div class="login-card">
    <h2>{title}</h2>
    <form data-testid="form-{role}">
      <label>Votre email</label>
      <input type="email" data-testid="{role}-email-input" placeholder="johndoe@email.com" required />
      <label>Mot de passe</label>
      <input type="password" data-testid="{role}-password-input" placeholder="******" required />
      <button type="submit" class="btn btn-primary" data-testid="{role}-login-button">Se connecter</button>
    </form>
  </div>"#,
        role = role,
        title = title,
    )
}

pub fn render_login() -> String {
    format!(
        r#"<div class="login-page" data-testid="login-page">
  <h1>Billed</h1>
  {employee}
  {admin}
</div>"#,
        employee = login_form("employee", "Employé"),
        admin = login_form("admin", "Administration"),
    )
}
