//! Route guard for authenticated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected route. Renders exactly one of: a loading indicator
//! while the session check runs, the child view, or a redirect to `/login`.
//! The decision itself lives in `util::auth::guard_outcome`.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::components::status::LoadingIndicator;
use crate::state::session::SessionContext;
use crate::util::auth::{GuardOutcome, guard_outcome};

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>().state;
    let outcome = Memo::new(move |_| guard_outcome(&session.get()));

    move || match outcome.get() {
        GuardOutcome::Pending => view! { <LoadingIndicator/> }.into_any(),
        GuardOutcome::Allow => children().into_any(),
        GuardOutcome::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
    }
}
