//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::route_guard::RequireAuth;
use crate::config::ClientConfig;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, prompts::PromptsPage};
use crate::services::AppServices;
use crate::state::layout::LayoutState;
use crate::state::session::SessionContext;
use crate::util::breakpoint::track_breakpoint;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Composes the services once, provides them with the session, layout, and
/// viewport signals, and kicks off the one-time session check.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let services = AppServices::for_browser(&ClientConfig::from_build());
    let session = SessionContext::new(Arc::clone(&services.session));
    let breakpoint = track_breakpoint();
    let layout = RwSignal::new(LayoutState::new(breakpoint.get_untracked().is_wide()));

    // Permanent drawer when wide, closed otherwise.
    Effect::new(move || {
        let wide = breakpoint.get().is_wide();
        layout.update(|state| state.sidebar_open = wide);
    });

    let store = Arc::clone(&services.session);
    Effect::new(move || {
        let store = Arc::clone(&store);
        leptos::task::spawn_local(async move {
            store.initialize().await;
        });
    });

    provide_context(services);
    provide_context(session);
    provide_context(breakpoint);
    provide_context(layout);

    view! {
        <Stylesheet id="leptos" href="/pkg/brics.css"/>
        <Title text="DataIdea BRICS"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <RequireAuth><DashboardPage/></RequireAuth> }
                />
                <Route
                    path=StaticSegment("prompts")
                    view=|| view! { <RequireAuth><PromptsPage/></RequireAuth> }
                />
            </Routes>
        </Router>
    }
}
