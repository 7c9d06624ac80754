use std::rc::Rc;

use billed_front::dom::MemoryHistory;
use billed_front::error::StoreError;
use billed_front::models::{Role, Route};
use billed_front::navigator::{Navigator, Screen};
use billed_front::utils::MemoryStorage;

mod common;
use common::{context, raw_bill, FakeStore, Harness};

#[test]
fn boot_without_session_shows_login() {
    let mut h = Harness::new(Some(FakeStore::default()), "#employee/bills");
    h.boot();

    assert!(h.root().contains(r#"data-testid="login-page""#));
    assert_eq!(h.current_path(), "/");
    assert_eq!(h.navigator.current(), Screen::Login);
    assert_eq!(h.store().list_calls.get(), 0);
}

#[test]
fn boot_with_admin_session_lands_on_dashboard() {
    let mut h = Harness::new(Some(FakeStore::default()), "/");
    h.sign_in(Role::Admin, "admin@test.tld");
    h.boot();

    assert!(h.root().contains(r#"data-testid="dashboard-page""#));
    assert_eq!(h.current_path(), "#admin/dashboard");
}

#[test]
fn boot_keeps_employee_on_new_bill() {
    let mut h = Harness::new(Some(FakeStore::default()), "#employee/bill/new");
    h.sign_in(Role::Employee, "employee@test.tld");
    h.boot();

    assert!(h.root().contains(r#"data-testid="new-bill-page""#));
    assert_eq!(h.current_path(), "#employee/bill/new");
}

#[test]
fn navigating_without_session_redirects_to_login() {
    let mut h = Harness::new(Some(FakeStore::default()), "/");
    h.navigate("#employee/bills");

    assert!(h.root().contains(r#"data-testid="login-page""#));
    assert_eq!(h.current_path(), "/");
    assert_eq!(h.store().list_calls.get(), 0);
}

#[test]
fn loading_placeholder_is_shown_before_the_fetch_settles() {
    let mut h = Harness::new(Some(FakeStore::with_bills(vec![raw_bill("a", "2004-04-04", "pending")])), "/");
    h.sign_in(Role::Employee, "employee@test.tld");
    let gate = h.store().gate_next_list();

    h.navigate("#employee/bills");
    assert!(h.root().contains(r#"data-testid="loading""#));
    assert_eq!(h.store().list_calls.get(), 1);

    gate.send(()).unwrap();
    h.run();
    assert!(h.root().contains(r#"data-testid="bills-page""#));
    assert!(h.root().contains("04/04/2004"));
    assert_eq!(h.doc.renders().len(), 2);
}

#[test]
fn rejected_fetch_renders_the_error_message() {
    let store = FakeStore::default();
    *store.bills.borrow_mut() = Err(StoreError::Http { status: 404 });
    let mut h = Harness::new(Some(store), "/");
    h.sign_in(Role::Employee, "employee@test.tld");

    h.navigate("#employee/bills");
    assert!(h.root().contains(r#"data-testid="error-message""#));
    assert!(h.root().contains("Erreur 404"));
    assert_eq!(h.store().list_calls.get(), 1);
}

#[test]
fn server_message_is_shown_as_is() {
    let store = FakeStore::default();
    *store.bills.borrow_mut() = Err(StoreError::rejected("Erreur 500"));
    let mut h = Harness::new(Some(store), "/");
    h.sign_in(Role::Admin, "admin@test.tld");

    h.navigate("#admin/dashboard");
    assert!(h.root().contains("Erreur 500"));
}

#[test]
fn stale_fetch_does_not_overwrite_a_newer_screen() {
    let mut h = Harness::new(Some(FakeStore::with_bills(vec![raw_bill("a", "2004-04-04", "pending")])), "/");
    h.sign_in(Role::Employee, "employee@test.tld");
    let gate = h.store().gate_next_list();

    h.navigate("#employee/bills");
    h.navigate("#employee/bill/new");
    assert!(h.root().contains(r#"data-testid="new-bill-page""#));

    gate.send(()).unwrap();
    h.run();
    assert!(h.root().contains(r#"data-testid="new-bill-page""#));
    assert!(!h.root().contains(r#"data-testid="bills-page""#));
    assert_eq!(h.navigator.current(), Screen::NewBill);
}

#[test]
fn unknown_path_changes_nothing() {
    let mut h = Harness::new(Some(FakeStore::default()), "/");
    h.sign_in(Role::Employee, "employee@test.tld");
    h.navigate("#employee/bills");
    let renders = h.doc.renders().len();

    h.navigate("#employee/nowhere");
    assert_eq!(h.doc.renders().len(), renders);
    assert_eq!(h.navigator.current(), Screen::Bills);
    assert!(h.root().contains(r#"data-testid="bills-page""#));
}

#[test]
fn back_as_employee_never_leaves_employee_screens() {
    let mut h = Harness::new(Some(FakeStore::default()), "/");
    h.sign_in(Role::Employee, "employee@test.tld");
    h.navigate("#employee/bills");

    // "/" queda detrás de la lista de notas
    h.back();
    assert!(h.root().contains(r#"data-testid="bills-page""#));
    assert_eq!(h.current_path(), "#employee/bills");
}

#[test]
fn back_as_employee_to_new_bill_stays_on_new_bill() {
    let mut h = Harness::new(Some(FakeStore::default()), "/");
    h.sign_in(Role::Employee, "employee@test.tld");
    h.navigate("#employee/bill/new");
    h.navigate("#employee/bills");

    h.back();
    assert!(h.root().contains(r#"data-testid="new-bill-page""#));
}

#[test]
fn back_as_admin_always_returns_to_dashboard() {
    let mut h = Harness::new(Some(FakeStore::default()), "/");
    h.sign_in(Role::Admin, "admin@test.tld");
    h.navigate("#employee/bills");
    h.navigate("#admin/dashboard");

    h.back();
    assert!(h.root().contains(r#"data-testid="dashboard-page""#));
    assert_eq!(h.current_path(), "#admin/dashboard");
}

#[test]
fn layout_highlights_the_active_screen() {
    let mut h = Harness::new(Some(FakeStore::default()), "/");
    h.sign_in(Role::Employee, "employee@test.tld");

    h.navigate("#employee/bill/new");
    assert!(h.root().contains(r#"data-testid="icon-mail" class="layout-icon active-icon""#));
    assert!(h.root().contains(r#"data-testid="icon-window" class="layout-icon""#));

    h.navigate("#employee/bills");
    assert!(h.root().contains(r#"data-testid="icon-window" class="layout-icon active-icon""#));
    assert!(h.root().contains(r#"data-testid="icon-mail" class="layout-icon""#));
}

#[test]
fn handle_outliving_the_navigator_is_inert() {
    let doc = Rc::new(billed_front::dom::MemoryDocument::new());
    let ctx = context(doc.clone(), None, Rc::new(MemoryStorage::new()));
    let navigator = Navigator::new(ctx, Rc::new(MemoryHistory::new("/")));
    let handle = navigator.handle();
    drop(navigator);

    handle.request(Route::Login);
    assert!(doc.renders().is_empty());
}
