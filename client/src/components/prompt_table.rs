//! Prompt browser building blocks: table, phone cards, pager, detail panel.
//!
//! DESIGN
//! ======
//! These components render `PromptsState` but never fetch. Pager and row
//! clicks write to the state signal; the page's query memo and detail
//! handler issue the requests.

use leptos::prelude::*;

use crate::components::status::LoadingIndicator;
use crate::net::types::Prompt;
use crate::state::fetch::ViewPhase;
use crate::state::prompts::{PromptsState, page_size_options};
use crate::util::breakpoint::PromptColumn;
use crate::util::format::{
    CARD_PREVIEW_CHARS, TABLE_PREVIEW_CHARS, format_count, format_latency, format_timestamp, format_token_split,
    model_color, truncate_text,
};

#[component]
fn ModelChip(model: String) -> impl IntoView {
    let style = format!("background-color: {}", model_color(&model));
    view! { <span class="chip" style=style>{model}</span> }
}

fn cell(column: PromptColumn, prompt: &Prompt) -> AnyView {
    match column {
        PromptColumn::Id => view! { <td>{prompt.id}</td> }.into_any(),
        PromptColumn::Model => view! { <td><ModelChip model=prompt.model_id.clone()/></td> }.into_any(),
        PromptColumn::Prompt => {
            view! { <td>{truncate_text(&prompt.prompt_text, TABLE_PREVIEW_CHARS)}</td> }.into_any()
        }
        PromptColumn::Response => {
            view! { <td>{truncate_text(&prompt.response_text, TABLE_PREVIEW_CHARS)}</td> }.into_any()
        }
        PromptColumn::Tokens => {
            view! { <td>{format_token_split(prompt.prompt_tokens, prompt.response_tokens)}</td> }.into_any()
        }
        PromptColumn::Latency => view! { <td>{format_latency(prompt.latency)}</td> }.into_any(),
        PromptColumn::Timestamp => view! { <td>{format_timestamp(&prompt.timestamp)}</td> }.into_any(),
    }
}

/// Table view for tablet and desktop widths.
#[component]
pub fn PromptTable(rows: Vec<Prompt>, columns: &'static [PromptColumn], on_select: Callback<u64>) -> impl IntoView {
    let header = columns
        .iter()
        .map(|column| view! { <th>{column.label()}</th> })
        .collect_view();
    let body = if rows.is_empty() {
        view! {
            <tr>
                <td class="table__empty" colspan=columns.len()>"No prompts found"</td>
            </tr>
        }
        .into_any()
    } else {
        rows.into_iter()
            .map(|prompt| {
                let id = prompt.id;
                let cells = columns.iter().map(|column| cell(*column, &prompt)).collect_view();
                view! {
                    <tr class="table__row" on:click=move |_| on_select.run(id)>
                        {cells}
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="table-container">
            <table class="table">
                <thead>
                    <tr>{header}</tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}

/// Card list for phone widths.
#[component]
pub fn PromptCards(rows: Vec<Prompt>, on_select: Callback<u64>) -> impl IntoView {
    if rows.is_empty() {
        return view! { <p class="table__empty">"No prompts found"</p> }.into_any();
    }
    rows.into_iter()
        .map(|prompt| {
            let id = prompt.id;
            view! {
                <div class="card prompt-card" on:click=move |_| on_select.run(id)>
                    <div class="prompt-card__header">
                        <ModelChip model=prompt.model_id.clone()/>
                        <span class="prompt-card__time">{format_timestamp(&prompt.timestamp)}</span>
                    </div>
                    <p class="prompt-card__text">{truncate_text(&prompt.prompt_text, CARD_PREVIEW_CHARS)}</p>
                    <div class="prompt-card__meta">
                        <span>{format!("ID: {}", prompt.id)}</span>
                        <span>{format!("Tokens: {}", format_count(prompt.total_tokens()))}</span>
                    </div>
                </div>
            }
        })
        .collect_view()
        .into_any()
}

/// Rows-per-page selector, range caption, and previous/next buttons.
#[component]
pub fn Pagination(state: RwSignal<PromptsState>, #[prop(into)] mobile: Signal<bool>) -> impl IntoView {
    let options = move || {
        let current = state.with(|s| s.page_size);
        page_size_options(mobile.get())
            .iter()
            .map(|size| {
                let size = *size;
                view! {
                    <option value=size.to_string() selected={size == current}>
                        {size}
                    </option>
                }
            })
            .collect_view()
    };
    let on_size = move |ev: leptos::ev::Event| {
        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
            state.update(|s| s.set_page_size(size));
        }
    };

    view! {
        <div class="pagination">
            <label class="pagination__size">
                <span>{move || if mobile.get() { "Rows:" } else { "Rows per page:" }}</span>
                <select
                    on:change=on_size
                    prop:value=move || state.with(|s| s.page_size.to_string())
                >
                    {options}
                </select>
            </label>
            <span class="pagination__range">{move || state.with(PromptsState::range_label)}</span>
            <button
                class="pagination__button"
                type="button"
                aria-label="Previous page"
                disabled=move || !state.with(PromptsState::has_previous)
                on:click=move |_| state.update(|s| s.set_page(s.page.saturating_sub(1)))
            >
                "\u{2039}"
            </button>
            <button
                class="pagination__button"
                type="button"
                aria-label="Next page"
                disabled=move || !state.with(PromptsState::has_next)
                on:click=move |_| state.update(|s| s.set_page(s.page + 1))
            >
                "\u{203a}"
            </button>
        </div>
    }
}

/// Side panel with the full prompt, response, and metadata of the selected row.
#[component]
pub fn PromptDetail(state: RwSignal<PromptsState>) -> impl IntoView {
    let close = move |_| state.update(PromptsState::close_detail);
    let body = move || {
        let detail = state.with(|s| s.detail.clone());
        match detail.phase() {
            ViewPhase::Loading => view! { <LoadingIndicator/> }.into_any(),
            ViewPhase::Failed => view! {
                <p class="alert alert--error">{detail.error.unwrap_or_default()}</p>
            }
            .into_any(),
            ViewPhase::Empty => ().into_any(),
            ViewPhase::Ready => match detail.data {
                Some(prompt) => detail_body(prompt).into_any(),
                None => ().into_any(),
            },
        }
    };

    view! {
        <Show when=move || state.with(|s| s.selected.is_some())>
            <aside class="detail-panel" aria-label="Prompt details">
                <div class="detail-panel__header">
                    <h2>{move || format!("Prompt #{}", state.with(|s| s.selected.unwrap_or_default()))}</h2>
                    <button class="alert__close" type="button" aria-label="Close" on:click=close>
                        "\u{00d7}"
                    </button>
                </div>
                {body}
            </aside>
        </Show>
    }
}

fn detail_body(prompt: Prompt) -> impl IntoView {
    let metadata = prompt
        .metadata
        .iter()
        .map(|(key, value)| {
            let value = value.as_str().map_or_else(|| value.to_string(), str::to_owned);
            view! {
                <dt>{key.clone()}</dt>
                <dd>{value}</dd>
            }
        })
        .collect_view();
    let user = prompt
        .user_id
        .map_or_else(|| "anonymous".to_owned(), |id| id.to_string());

    view! {
        <div class="detail-panel__body">
            <ModelChip model=prompt.model_id.clone()/>
            <h3>"Prompt"</h3>
            <pre class="detail-panel__text">{prompt.prompt_text.clone()}</pre>
            <h3>"Response"</h3>
            <pre class="detail-panel__text">{prompt.response_text.clone()}</pre>
            <dl class="detail-panel__facts">
                <dt>"Prompt tokens"</dt>
                <dd>{format_count(u64::from(prompt.prompt_tokens))}</dd>
                <dt>"Response tokens"</dt>
                <dd>{format_count(u64::from(prompt.response_tokens))}</dd>
                <dt>"Latency"</dt>
                <dd>{format_latency(prompt.latency)}</dd>
                <dt>"Timestamp"</dt>
                <dd>{format_timestamp(&prompt.timestamp)}</dd>
                <dt>"Session"</dt>
                <dd>{prompt.session_id.clone()}</dd>
                <dt>"User"</dt>
                <dd>{user}</dd>
                <dt>"Project"</dt>
                <dd>{prompt.project_id}</dd>
                {metadata}
            </dl>
        </div>
    }
}
