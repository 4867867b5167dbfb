//! Dashboard shell: navbar, sidebar, and the page content region.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::state::layout::{DRAWER_WIDTH, LayoutState};
use crate::util::breakpoint::Breakpoint;

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let layout = expect_context::<RwSignal<LayoutState>>();
    let breakpoint = expect_context::<RwSignal<Breakpoint>>();

    let content_style = move || {
        let state = layout.get();
        if breakpoint.get().is_wide() && state.sidebar_open {
            format!("margin-left: {DRAWER_WIDTH}px")
        } else {
            String::new()
        }
    };

    view! {
        <div class="shell">
            <Navbar/>
            <Sidebar/>
            <main class="shell__content" style=content_style>
                {children()}
            </main>
        </div>
    }
}
