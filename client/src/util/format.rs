//! Display formatting for counters, text, timestamps, and identity.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::{DateTime, Utc};

use crate::net::types::User;

/// Prompt/response preview length in the table.
pub const TABLE_PREVIEW_CHARS: usize = 50;
/// Prompt/response preview length on mobile cards.
pub const CARD_PREVIEW_CHARS: usize = 100;

/// Cut `text` to `max` characters, appending `...` when shortened.
pub fn truncate_text(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => text.to_owned(),
    }
}

/// `1356789` -> `1,356,789`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Signed percentage with one decimal, e.g. `+12.5%`.
pub fn format_trend(value: f64) -> String {
    format!("{value:+.1}%")
}

/// `YYYY-MM-DD HH:MM` in UTC.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M").to_string()
}

/// Prompt and response token counts as `prompt / response`.
pub fn format_token_split(prompt_tokens: u32, response_tokens: u32) -> String {
    format!("{prompt_tokens} / {response_tokens}")
}

pub fn format_latency(ms: u32) -> String {
    format!("{} ms", format_count(u64::from(ms)))
}

/// Chip colour for a model id.
pub fn model_color(model: &str) -> &'static str {
    match model {
        "gpt-4" => "#3498db",
        "claude-3" => "#9b59b6",
        "llama-3" => "#2ecc71",
        "gemini" => "#e67e22",
        _ => "#95a5a6",
    }
}

/// Upper-cased first character of the username, or `?`.
pub fn avatar_initial(user: Option<&User>) -> String {
    user.and_then(|u| u.username.chars().next())
        .map_or_else(|| "?".to_owned(), |ch| ch.to_uppercase().collect())
}

pub fn role_label(user: Option<&User>) -> &'static str {
    if user.is_some_and(User::is_admin) {
        "Administrator"
    } else {
        "User"
    }
}

pub fn display_name(user: Option<&User>) -> &str {
    user.map_or("Guest", |u| u.username.as_str())
}
