//! Prompt browser view-model: pagination, search, and row detail.
//!
//! DESIGN
//! ======
//! The page derives a `PromptQuery` memo from this state and fetches whenever
//! the memo changes. Changing the search text or the page size resets the
//! page index first, so each user action yields exactly one new query.

#[cfg(test)]
#[path = "prompts_test.rs"]
mod prompts_test;

use super::fetch::{FetchState, Generation};
use crate::error::ApiError;
use crate::net::types::{Paginated, Prompt, PromptQuery};

pub const PROMPTS_FAILURE: &str = "Failed to fetch prompts. Please try again later.";
pub const DETAIL_FAILURE: &str = "Failed to load prompt details. Please try again later.";
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];
pub const MOBILE_PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];
pub const DEFAULT_PAGE_SIZE: usize = 10;

pub fn page_size_options(mobile: bool) -> &'static [usize] {
    if mobile {
        &MOBILE_PAGE_SIZE_OPTIONS
    } else {
        &PAGE_SIZE_OPTIONS
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PromptsState {
    /// 0-based page index.
    pub page: usize,
    pub page_size: usize,
    /// Raw text from the search box.
    pub search: String,
    /// Unpaged match count from the last successful fetch.
    pub total: u64,
    pub list: FetchState<Vec<Prompt>>,
    pub selected: Option<u64>,
    pub detail: FetchState<Prompt>,
}

impl Default for PromptsState {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
            total: 0,
            list: FetchState::new(PROMPTS_FAILURE),
            selected: None,
            detail: FetchState::idle(DETAIL_FAILURE),
        }
    }
}

impl PromptsState {
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 0;
    }

    /// Snap the page size onto the options offered at this width, keeping
    /// the largest one that does not exceed it. Returns whether it changed.
    pub fn fit_page_size(&mut self, mobile: bool) -> bool {
        let options = page_size_options(mobile);
        if options.contains(&self.page_size) {
            return false;
        }
        let fitted = options
            .iter()
            .copied()
            .filter(|size| *size <= self.page_size)
            .max()
            .unwrap_or(options[0]);
        self.set_page_size(fitted);
        true
    }

    pub fn set_search(&mut self, text: &str) {
        text.clone_into(&mut self.search);
        self.page = 0;
    }

    /// The request this state asks for. Blank search text is omitted.
    pub fn query(&self) -> PromptQuery {
        PromptQuery {
            page: self.page,
            page_size: self.page_size,
            search: (!self.search.trim().is_empty()).then(|| self.search.clone()),
        }
    }

    /// Apply a page result; `total` only moves on success.
    pub fn apply(&mut self, generation: Generation, result: Result<Paginated<Prompt>, ApiError>) -> bool {
        match result {
            Ok(page) => {
                let total = page.total;
                let applied = self.list.finish(generation, Ok(page.data));
                if applied {
                    self.total = total;
                }
                applied
            }
            Err(err) => self.list.finish(generation, Err(err)),
        }
    }

    pub fn rows(&self) -> &[Prompt] {
        self.list.data.as_deref().unwrap_or_default()
    }

    pub fn total_pages(&self) -> usize {
        usize::try_from(self.total)
            .unwrap_or(usize::MAX)
            .div_ceil(self.page_size.max(1))
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages()
    }

    /// Pagination caption such as `11-20 of 50`.
    pub fn range_label(&self) -> String {
        if self.total == 0 {
            return "0-0 of 0".to_owned();
        }
        let total = usize::try_from(self.total).unwrap_or(usize::MAX);
        let from = (self.page * self.page_size + 1).min(total);
        let to = ((self.page + 1) * self.page_size).min(total);
        format!("{from}-{to} of {total}")
    }

    /// Open the detail panel for `id` and start its fetch.
    pub fn select(&mut self, id: u64) -> Generation {
        self.selected = Some(id);
        self.detail.data = None;
        self.detail.begin()
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
        self.detail.clear();
    }

    /// Apply a detail result unless the panel was closed meanwhile.
    pub fn apply_detail(&mut self, generation: Generation, result: Result<Prompt, ApiError>) -> bool {
        if self.selected.is_none() {
            return false;
        }
        self.detail.finish(generation, result)
    }
}
