//! Responsive breakpoints and the prompt columns shown at each.
//!
//! Widths follow the usual 600/900/1200/1536 px steps. Browser builds track
//! `window.innerWidth`; server rendering assumes a desktop viewport.

#[cfg(test)]
#[path = "breakpoint_test.rs"]
mod breakpoint_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    pub fn from_width(width: f64) -> Self {
        if width < 600.0 {
            Self::Xs
        } else if width < 900.0 {
            Self::Sm
        } else if width < 1200.0 {
            Self::Md
        } else if width < 1536.0 {
            Self::Lg
        } else {
            Self::Xl
        }
    }

    /// Phone layout.
    pub fn is_mobile(self) -> bool {
        self == Self::Xs
    }

    /// Wide enough for a permanent sidebar.
    pub fn is_wide(self) -> bool {
        self >= Self::Md
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptColumn {
    Id,
    Model,
    Prompt,
    Response,
    Tokens,
    Latency,
    Timestamp,
}

impl PromptColumn {
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Model => "Model",
            Self::Prompt => "Prompt",
            Self::Response => "Response",
            Self::Tokens => "Tokens",
            Self::Latency => "Latency",
            Self::Timestamp => "Timestamp",
        }
    }
}

const XS_COLUMNS: [PromptColumn; 3] = [PromptColumn::Model, PromptColumn::Prompt, PromptColumn::Timestamp];
const SM_COLUMNS: [PromptColumn; 5] = [
    PromptColumn::Id,
    PromptColumn::Model,
    PromptColumn::Prompt,
    PromptColumn::Tokens,
    PromptColumn::Timestamp,
];
const ALL_COLUMNS: [PromptColumn; 7] = [
    PromptColumn::Id,
    PromptColumn::Model,
    PromptColumn::Prompt,
    PromptColumn::Response,
    PromptColumn::Tokens,
    PromptColumn::Latency,
    PromptColumn::Timestamp,
];

pub fn visible_columns(breakpoint: Breakpoint) -> &'static [PromptColumn] {
    match breakpoint {
        Breakpoint::Xs => &XS_COLUMNS,
        Breakpoint::Sm => &SM_COLUMNS,
        Breakpoint::Md | Breakpoint::Lg | Breakpoint::Xl => &ALL_COLUMNS,
    }
}

/// Current viewport width in CSS pixels, when running in a browser.
pub fn viewport_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

#[cfg(feature = "hydrate")]
fn current_breakpoint() -> Breakpoint {
    viewport_width().map_or(Breakpoint::Lg, Breakpoint::from_width)
}

/// Signal tracking the viewport breakpoint. Starts at the server-rendered
/// desktop value, syncs to the real width after hydration, then follows
/// window resizes. Created once for the app, so the listener is never removed.
pub fn track_breakpoint() -> RwSignal<Breakpoint> {
    let breakpoint = RwSignal::new(Breakpoint::Lg);

    #[cfg(feature = "hydrate")]
    {
        let sync = move || {
            let next = current_breakpoint();
            if breakpoint.get_untracked() != next {
                breakpoint.set(next);
            }
        };
        Effect::new(move || sync());
        let _ = window_event_listener(leptos::ev::resize, move |_| sync());
    }

    breakpoint
}
