use std::rc::Rc;

use crate::dom::DomEvent;
use crate::models::Route;
use crate::navigator::NavigationHandle;
use crate::state::AppContext;

/// Enlaza el icono de desconexión del layout: limpia la sesión y vuelve al login
pub fn bind_logout(ctx: &AppContext, nav: &NavigationHandle) -> usize {
    let session = ctx.session.clone();
    let nav = nav.clone();
    ctx.document.bind(
        "layout-disconnect",
        DomEvent::Click,
        Rc::new(move |_| {
            session.logout();
            nav.request(Route::Login);
        }),
    )
}
