//! Dashboard page: headline stats and usage charts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route. Fetches the stats snapshot once on mount; the
//! time-range selector re-slices the series locally.

use leptos::prelude::*;

use crate::components::charts::{CategoryBars, ModelUsagePie, PromptsLineChart};
use crate::components::layout::DashboardLayout;
use crate::components::stat_card::StatCard;
use crate::components::status::{ErrorBanner, LoadingIndicator};
use crate::net::types::TimeRange;
use crate::services::AppServices;
use crate::state::dashboard::{DashboardState, stat_cards};
use crate::state::fetch::ViewPhase;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let state = RwSignal::new(DashboardState::default());

    let analytics = services.analytics.clone();
    Effect::new(move || {
        let generation = state.try_update(|s| s.stats.begin()).unwrap_or_default();
        let analytics = analytics.clone();
        leptos::task::spawn_local(async move {
            let result = analytics.dashboard_stats().await;
            state.update(|s| {
                s.stats.finish(generation, result);
            });
        });
    });

    let phase = move || state.with(|s| s.stats.phase());
    let error = Signal::derive(move || state.with(|s| s.stats.error.clone().unwrap_or_default()));
    let on_dismiss = Callback::new(move |()| state.update(|s| s.stats.dismiss_error()));
    let series = Signal::derive(move || state.with(DashboardState::visible_series));
    let range_label = move || state.with(|s| s.time_range.label());

    let on_range = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        if let Some(range) = TimeRange::ALL.into_iter().find(|r| r.label() == value) {
            state.update(|s| s.time_range = range);
        }
    };

    let content = move || {
        let Some(stats) = state.with(|s| s.stats.data.clone()) else {
            return ().into_any();
        };
        let cards = stat_cards(&stats)
            .into_iter()
            .map(|card| view! { <StatCard card=card/> })
            .collect_view();
        view! {
            <div class="grid grid--stats">{cards}</div>
            <div class="grid grid--charts">
                <section class="card panel panel--wide">
                    <div class="panel__header">
                        <h2>"Prompts Over Time"</h2>
                        <select class="panel__select" on:change=on_range prop:value=range_label>
                            {TimeRange::ALL
                                .into_iter()
                                .map(|range| view! { <option value=range.label()>{range.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <PromptsLineChart series=series/>
                </section>
                <section class="card panel">
                    <div class="panel__header">
                        <h2>"Model Usage"</h2>
                    </div>
                    <ModelUsagePie usage=stats.model_usage.clone()/>
                </section>
                <section class="card panel">
                    <div class="panel__header">
                        <h2>"Top Categories"</h2>
                    </div>
                    <CategoryBars categories=stats.top_categories.clone()/>
                </section>
            </div>
        }
        .into_any()
    };

    view! {
        <DashboardLayout>
            <div class="page-header">
                <h1>"Dashboard"</h1>
                <p class="page-header__subtitle">"Overview of your LLM analytics data"</p>
            </div>
            {move || match phase() {
                ViewPhase::Loading => view! { <LoadingIndicator/> }.into_any(),
                ViewPhase::Failed => view! { <ErrorBanner message=error on_dismiss=on_dismiss/> }.into_any(),
                ViewPhase::Ready => content().into_any(),
                ViewPhase::Empty => ().into_any(),
            }}
        </DashboardLayout>
    }
}
