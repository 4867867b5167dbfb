//! Headline metric card for the dashboard grid.

use leptos::prelude::*;

use crate::state::dashboard::StatCard as StatCardData;
use crate::util::format::format_trend;

#[component]
pub fn StatCard(card: StatCardData) -> impl IntoView {
    let trend = card.trend.map(|value| {
        let class = if value >= 0.0 {
            "stat-card__trend stat-card__trend--up"
        } else {
            "stat-card__trend stat-card__trend--down"
        };
        view! { <span class=class>{format_trend(value)}</span> }
    });

    view! {
        <div class="card stat-card">
            <div class="stat-card__body">
                <div>
                    <div class="stat-card__title">{card.title}</div>
                    <div class="stat-card__value">{card.value}</div>
                    {trend}
                </div>
                <div class="stat-card__icon" style=format!("background-color: {}", card.color)></div>
            </div>
        </div>
    }
}
