//! Paged table state with stale-response protection.

use serde_json::Value;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::error;

use labroster_types::{PageEnvelope, Pagination};

use crate::error::{Error, Result};

/// Message shown when a failure carries nothing more specific.
pub const DEFAULT_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

// Shared by every view so a ticket never matches a view that did not issue
// it, even one rebuilt for the same screen.
static REQUEST_SEQ: AtomicU64 = AtomicU64::new(0);

/// Next process-wide request sequence number. Never returns 0.
pub fn next_request_seq() -> u64 {
    REQUEST_SEQ.fetch_add(1, Ordering::Relaxed) + 1
}

const FIELD_ERROR_KEYS: [&str; 4] = ["email", "username", "learner_email", "learner_name"];

/// Identifies one issued page request. Only the latest ticket of a view is
/// allowed to update it; sequence numbers are unique across views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
    page: u32,
}

impl RequestTicket {
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// What [`PagedView::complete`] did with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    Loaded { rows: usize },
    Failed { message: String },
    /// A newer request was issued meanwhile; the response was dropped.
    Stale,
}

#[derive(Debug, Clone)]
pub struct PagedView<Row> {
    rows: Vec<Row>,
    pagination: Pagination,
    loading: bool,
    error: Option<String>,
    issued: u64,
}

impl<Row> PagedView<Row> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            pagination: Pagination::new(),
            loading: false,
            error: None,
            issued: 0,
        }
    }

    pub fn starting_at(pagination: Pagination) -> Self {
        Self {
            pagination,
            ..Self::new()
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn current_page(&self) -> u32 {
        self.pagination.current_page()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Select a page (clamped). Returns whether a fetch is needed.
    pub fn select_page(&mut self, page: u32) -> bool {
        self.pagination.select_page(page)
    }

    /// Back to page 1 with an unknown page count, e.g. when the filter changes.
    pub fn reset_pagination(&mut self) {
        self.pagination.reset();
    }

    /// Start a request for `page` (made current). Any earlier in-flight
    /// request becomes stale.
    pub fn begin(&mut self, page: u32) -> RequestTicket {
        self.pagination.select_page(page);
        self.issued = next_request_seq();
        self.loading = true;
        self.error = None;
        RequestTicket {
            seq: self.issued,
            page: self.pagination.current_page(),
        }
    }

    /// Start a request for the current page.
    pub fn begin_current(&mut self) -> RequestTicket {
        self.begin(self.pagination.current_page())
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        ticket.seq == self.issued
    }

    pub fn complete<Raw>(
        &mut self,
        ticket: RequestTicket,
        result: Result<PageEnvelope<Raw>>,
        map: impl FnMut(Raw) -> Row,
    ) -> Applied {
        if !self.is_latest(ticket) {
            return Applied::Stale;
        }
        self.loading = false;

        match result {
            Ok(envelope) => {
                self.pagination.apply(&envelope);
                self.rows = envelope.results.into_iter().map(map).collect();
                Applied::Loaded {
                    rows: self.rows.len(),
                }
            }
            Err(e) => {
                error!(page = ticket.page, error = %e, "page request failed");
                self.rows.clear();
                let message = filter_error_message(&e);
                self.error = Some(message.clone());
                Applied::Failed { message }
            }
        }
    }

    /// `begin` + await + `complete` in one step, for callers that own the
    /// view across the await (the CLI commands).
    pub async fn fetch_page<Raw, F, Fut>(
        &mut self,
        page: u32,
        fetch: F,
        map: impl FnMut(Raw) -> Row,
    ) -> Applied
    where
        F: FnOnce(u32) -> Fut,
        Fut: Future<Output = Result<PageEnvelope<Raw>>>,
    {
        let ticket = self.begin(page);
        let result = fetch(ticket.page()).await;
        self.complete(ticket, result, map)
    }
}

impl<Row> Default for PagedView<Row> {
    fn default() -> Self {
        Self::new()
    }
}

/// User-facing message for a failed (filtered) fetch.
///
/// A plain-string error body is shown as-is. A JSON object body yields the
/// first message of the first field error present. Anything else falls back
/// to [`DEFAULT_ERROR_MESSAGE`].
pub fn filter_error_message(error: &Error) -> String {
    let message = match error.response_body() {
        Some(Value::String(text)) => Some(text.trim().to_string()).filter(|t| !t.is_empty()),
        Some(Value::Object(fields)) => FIELD_ERROR_KEYS
            .iter()
            .find_map(|key| first_message(fields.get(*key)?)),
        _ => None,
    };
    message.unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string())
}

fn first_message(value: &Value) -> Option<String> {
    let first = match value {
        Value::Array(items) => items.first()?,
        other => other,
    };
    match first {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Null | Value::String(_) => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope(items: &[&str], count: u64, next: bool) -> PageEnvelope<String> {
        PageEnvelope {
            results: items.iter().map(|s| s.to_string()).collect(),
            count,
            next: next.then(|| "next".to_string()),
            prev: None,
        }
    }

    fn status(body: Value) -> Error {
        Error::status("https://lms.example.com", 400, body)
    }

    #[test]
    fn test_success_maps_rows_and_page_count() {
        let mut view: PagedView<usize> = PagedView::new();
        let ticket = view.begin(1);
        assert!(view.is_loading());

        let applied = view.complete(ticket, Ok(envelope(&["a", "bb"], 5, true)), |s| s.len());

        assert_eq!(applied, Applied::Loaded { rows: 2 });
        assert_eq!(view.rows(), &[1, 2]);
        assert_eq!(view.pagination().page_count(), 3);
        assert!(!view.is_loading());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut view: PagedView<String> = PagedView::new();
        let first = view.begin(1);
        let second = view.begin(1);

        assert_eq!(
            view.complete(first, Ok(envelope(&["old"], 1, false)), |s| s),
            Applied::Stale
        );
        assert!(view.is_loading());
        assert!(view.rows().is_empty());

        view.complete(second, Ok(envelope(&["new"], 1, false)), |s| s);
        assert_eq!(view.rows(), &["new".to_string()]);
    }

    #[test]
    fn test_ticket_from_another_view_is_stale() {
        let mut previous: PagedView<String> = PagedView::new();
        let old = previous.begin(1);

        let mut rebuilt: PagedView<String> = PagedView::new();
        let current = rebuilt.begin(1);

        assert!(!rebuilt.is_latest(old));
        assert_eq!(
            rebuilt.complete(old, Ok(envelope(&["other learner"], 1, false)), |s| s),
            Applied::Stale
        );
        assert!(rebuilt.is_loading());

        rebuilt.complete(current, Ok(envelope(&["mine"], 1, false)), |s| s);
        assert_eq!(rebuilt.rows(), &["mine".to_string()]);
    }

    #[test]
    fn test_failure_clears_rows_and_stores_message() {
        let mut view: PagedView<String> = PagedView::new();
        let ticket = view.begin(1);
        view.complete(ticket, Ok(envelope(&["a"], 1, false)), |s| s);

        let ticket = view.begin(1);
        let applied = view.complete(
            ticket,
            Err(status(json!({"email": ["Enter a valid email address."]}))),
            |s: String| s,
        );

        assert_eq!(
            applied,
            Applied::Failed {
                message: "Enter a valid email address.".to_string()
            }
        );
        assert!(view.rows().is_empty());
        assert_eq!(view.error(), Some("Enter a valid email address."));

        view.begin(1);
        assert_eq!(view.error(), None);
    }

    #[test]
    fn test_filter_error_message_precedence() {
        assert_eq!(filter_error_message(&status(json!("No such learner"))), "No such learner");
        assert_eq!(
            filter_error_message(&status(json!({
                "username": ["Unknown username."],
                "email": ["Bad email."]
            }))),
            "Bad email."
        );
        assert_eq!(
            filter_error_message(&status(json!({"username": ["Unknown username."]}))),
            "Unknown username."
        );
        assert_eq!(
            filter_error_message(&status(json!({"learner_email": ["Invalid."]}))),
            "Invalid."
        );
        assert_eq!(
            filter_error_message(&status(json!({"detail": "nope"}))),
            DEFAULT_ERROR_MESSAGE
        );
        assert_eq!(
            filter_error_message(&Error::config("offline")),
            DEFAULT_ERROR_MESSAGE
        );
    }

    #[tokio::test]
    async fn test_fetch_page_requests_clamped_page() {
        let mut view: PagedView<String> = PagedView::new();
        view.fetch_page(1, |_| async { Ok(envelope(&["a", "b"], 6, true)) }, |s| s)
            .await;

        let mut requested = 0;
        view.fetch_page(
            9,
            |page| {
                requested = page;
                async { Ok(envelope(&["e", "f"], 6, false)) }
            },
            |s| s,
        )
        .await;

        assert_eq!(requested, 3);
        assert_eq!(view.current_page(), 3);
    }
}
