//! Top application bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts the sidebar toggle, brand link, notifications, and the account menu.
//! Logging out goes straight through the session store; the route guard then
//! sends the user to `/login`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::layout::{BRAND, BRAND_SHORT, LayoutState, NOTIFICATIONS};
use crate::state::session::SessionContext;
use crate::util::breakpoint::Breakpoint;
use crate::util::format::avatar_initial;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let layout = expect_context::<RwSignal<LayoutState>>();
    let breakpoint = expect_context::<RwSignal<Breakpoint>>();
    let state = session.state;
    let store = session.store.clone();

    let mobile = move || breakpoint.get().is_mobile();
    let initial = move || avatar_initial(state.get().user.as_ref());
    let on_logout = move |_| {
        layout.update(LayoutState::close_menus);
        store.logout();
    };

    view! {
        <header class="navbar">
            <button
                class="navbar__icon-button"
                type="button"
                aria-label="Toggle navigation"
                on:click=move |_| layout.update(LayoutState::toggle_sidebar)
            >
                <span class="icon icon--menu"></span>
            </button>
            <A href="/" attr:class="navbar__brand">
                {move || if mobile() { BRAND_SHORT } else { BRAND }}
            </A>
            <div class="navbar__spacer"></div>
            <Show when=move || !mobile()>
                <button class="navbar__icon-button" type="button" title="Help">
                    <span class="icon icon--help"></span>
                </button>
            </Show>
            <div class="navbar__menu">
                <button
                    class="navbar__icon-button"
                    type="button"
                    title="Notifications"
                    on:click=move |_| layout.update(LayoutState::toggle_notifications)
                >
                    <span class="icon icon--bell"></span>
                    <span class="badge">{NOTIFICATIONS.len()}</span>
                </button>
                <Show when=move || layout.get().notifications_open>
                    <ul class="menu" role="menu">
                        {NOTIFICATIONS
                            .iter()
                            .map(|notice| {
                                view! {
                                    <li
                                        class="menu__item"
                                        role="menuitem"
                                        on:click=move |_| layout.update(LayoutState::close_menus)
                                    >
                                        {*notice}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </Show>
            </div>
            <div class="navbar__menu">
                <button
                    class="navbar__avatar"
                    type="button"
                    title="Account settings"
                    on:click=move |_| layout.update(LayoutState::toggle_account)
                >
                    {initial}
                </button>
                <Show when=move || layout.get().account_open>
                    <ul class="menu" role="menu">
                        <li class="menu__item" role="menuitem" on:click=move |_| layout.update(LayoutState::close_menus)>
                            "Profile"
                        </li>
                        <li class="menu__item" role="menuitem" on:click=move |_| layout.update(LayoutState::close_menus)>
                            "Settings"
                        </li>
                        <li class="menu__divider"></li>
                        <li class="menu__item" role="menuitem" on:click=on_logout.clone()>
                            "Logout"
                        </li>
                    </ul>
                </Show>
            </div>
        </header>
    }
}
