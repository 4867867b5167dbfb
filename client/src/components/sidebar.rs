//! Side navigation drawer.
//!
//! Permanent from the `md` breakpoint up; below that it overlays the content
//! and closes after each navigation.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::state::layout::{BRAND, DRAWER_WIDTH, HELP_LINK, LayoutState, NAV_MENU, NavEntry, NavLink, is_active};
use crate::state::session::SessionContext;
use crate::util::breakpoint::Breakpoint;
use crate::util::format::{display_name, role_label};

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<SessionContext>().state;
    let layout = expect_context::<RwSignal<LayoutState>>();
    let breakpoint = expect_context::<RwSignal<Breakpoint>>();

    let wide = move || breakpoint.get().is_wide();
    let open = move || layout.get().sidebar_open;
    let role = move || role_label(session.get().user.as_ref());
    let name = move || display_name(session.get().user.as_ref()).to_owned();

    let entries = NAV_MENU
        .iter()
        .map(|entry| match *entry {
            NavEntry::Link(link) => view! { <SidebarLink link=link/> }.into_any(),
            NavEntry::Group { label, icon, children } => view! {
                <li class="sidebar__group">
                    <button
                        class="sidebar__item"
                        type="button"
                        on:click=move |_| layout.update(LayoutState::toggle_analytics)
                    >
                        <span class=format!("nav-icon nav-icon--{icon}")></span>
                        <span class="sidebar__label">{label}</span>
                        <span class="sidebar__chevron">
                            {move || if layout.get().analytics_open { "\u{25b4}" } else { "\u{25be}" }}
                        </span>
                    </button>
                    <Show when=move || layout.get().analytics_open>
                        <ul class="sidebar__submenu">
                            {children
                                .iter()
                                .map(|link| view! { <SidebarLink link=*link nested=true/> })
                                .collect_view()}
                        </ul>
                    </Show>
                </li>
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <Show when=move || !wide() && open()>
            <div class="sidebar-backdrop" on:click=move |_| layout.update(LayoutState::toggle_sidebar)></div>
        </Show>
        <nav
            class="sidebar"
            class:sidebar--open=open
            class:sidebar--temporary=move || !wide()
            style=format!("width: {DRAWER_WIDTH}px")
        >
            <div class="sidebar__header">
                <div class="sidebar__brand">{BRAND}</div>
                <div class="sidebar__role">{role}</div>
                <div class="sidebar__user">{name}</div>
            </div>
            <ul class="sidebar__list">{entries}</ul>
            <ul class="sidebar__list sidebar__list--footer">
                <SidebarLink link=HELP_LINK/>
            </ul>
        </nav>
    }
}

#[component]
fn SidebarLink(link: NavLink, #[prop(optional)] nested: bool) -> impl IntoView {
    let layout = expect_context::<RwSignal<LayoutState>>();
    let breakpoint = expect_context::<RwSignal<Breakpoint>>();
    let location = use_location();
    let active = move || is_active(link.path, &location.pathname.get());

    view! {
        <li>
            <A
                href=link.path
                attr:class=move || {
                    let mut class = String::from("sidebar__item");
                    if nested {
                        class.push_str(" sidebar__item--nested");
                    }
                    if active() {
                        class.push_str(" sidebar__item--active");
                    }
                    class
                }
                on:click=move |_| {
                    let wide = breakpoint.get_untracked().is_wide();
                    layout.update(|state| state.navigated(wide));
                }
            >
                <span class=format!("nav-icon nav-icon--{}", link.icon)></span>
                <span class="sidebar__label">{link.label}</span>
            </A>
        </li>
    }
}
