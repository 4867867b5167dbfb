//! Prompt browser page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lists prompts page by page with server-side search. A memo over
//! `PromptsState::query` drives the list fetch, so pager, page-size, and
//! search changes each produce exactly one request, and result writes (which
//! leave the query unchanged) never refetch.
//!
//! TRADE-OFFS
//! ==========
//! Search fires on every keystroke. Out-of-order responses are harmless
//! because only the newest generation applies.

use leptos::prelude::*;

use crate::components::layout::DashboardLayout;
use crate::components::prompt_table::{Pagination, PromptCards, PromptDetail, PromptTable};
use crate::components::status::{ErrorBanner, LoadingIndicator};
use crate::services::AppServices;
use crate::state::fetch::ViewPhase;
use crate::state::prompts::{PromptsState, page_size_options};
use crate::util::breakpoint::{Breakpoint, visible_columns};

#[component]
pub fn PromptsPage() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let breakpoint = expect_context::<RwSignal<Breakpoint>>();
    let state = RwSignal::new(PromptsState::default());
    let query = Memo::new(move |_| state.with(PromptsState::query));

    let analytics = services.analytics.clone();
    Effect::new(move || {
        let query = query.get();
        let generation = state.try_update(|s| s.list.begin()).unwrap_or_default();
        let analytics = analytics.clone();
        leptos::task::spawn_local(async move {
            let result = analytics.prompts(&query).await;
            state.update(|s| {
                s.apply(generation, result);
            });
        });
    });

    let analytics = services.analytics.clone();
    let on_select = Callback::new(move |id: u64| {
        let generation = state.try_update(|s| s.select(id)).unwrap_or_default();
        let analytics = analytics.clone();
        leptos::task::spawn_local(async move {
            let result = analytics.prompt(id).await;
            state.update(|s| {
                s.apply_detail(generation, result);
            });
        });
    });

    let mobile = Signal::derive(move || breakpoint.get().is_mobile());
    // Phones do not offer 50 rows per page.
    Effect::new(move || {
        let mobile = mobile.get();
        if state.with_untracked(|s| !page_size_options(mobile).contains(&s.page_size)) {
            state.update(|s| {
                s.fit_page_size(mobile);
            });
        }
    });

    let phase = move || state.with(|s| s.list.phase());
    let error = Signal::derive(move || state.with(|s| s.list.error.clone().unwrap_or_default()));
    let on_dismiss = Callback::new(move |()| state.update(|s| s.list.dismiss_error()));

    let rows = move || {
        let rows = state.with(|s| s.rows().to_vec());
        if mobile.get() {
            view! { <PromptCards rows=rows on_select=on_select/> }.into_any()
        } else {
            let columns = visible_columns(breakpoint.get());
            view! { <PromptTable rows=rows columns=columns on_select=on_select/> }.into_any()
        }
    };

    view! {
        <DashboardLayout>
            <div class="page-header">
                <h1>"Prompts"</h1>
                <p class="page-header__subtitle">"Browse and search every recorded prompt"</p>
            </div>
            <div class="card toolbar">
                <input
                    class="field__input toolbar__search"
                    type="search"
                    placeholder="Search prompts..."
                    prop:value=move || state.with(|s| s.search.clone())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        state.update(|s| s.set_search(&text));
                    }
                />
                <button class="navbar__icon-button" type="button" title="Filter">
                    <span class="icon icon--filter"></span>
                </button>
            </div>
            <Show when=move || phase() == ViewPhase::Failed>
                <ErrorBanner message=error on_dismiss=on_dismiss/>
            </Show>
            <div class="card">
                {move || match phase() {
                    ViewPhase::Loading => view! { <LoadingIndicator/> }.into_any(),
                    ViewPhase::Failed | ViewPhase::Ready | ViewPhase::Empty => rows().into_any(),
                }}
                <Pagination state=state mobile=mobile/>
            </div>
            <PromptDetail state=state/>
        </DashboardLayout>
    }
}
