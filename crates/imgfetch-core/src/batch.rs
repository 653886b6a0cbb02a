//! Sequential batch driver: feed URLs through one session and tally results.

use serde::Serialize;

use crate::session::{FetchResult, FetchSession, SavedImage};
use crate::transport::Transport;

/// Progress notifications emitted while a batch runs.
#[derive(Debug)]
pub enum BatchEvent<'a> {
    /// About to fetch URL `index` (1-based) of `total`.
    Started {
        index: usize,
        total: usize,
        url: &'a str,
    },
    /// URL `index` finished.
    Finished {
        index: usize,
        total: usize,
        url: &'a str,
        result: &'a FetchResult,
    },
}

/// Result of one URL, flattened for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct UrlOutcome {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved: Option<SavedImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_kind: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl UrlOutcome {
    pub fn new(url: &str, result: &FetchResult) -> Self {
        match result {
            Ok(saved) => UrlOutcome {
                url: url.to_string(),
                saved: Some(saved.clone()),
                failure_kind: None,
                failure: None,
            },
            Err(failure) => UrlOutcome {
                url: url.to_string(),
                saved: None,
                failure_kind: Some(failure.kind()),
                failure: Some(failure.to_string()),
            },
        }
    }

    pub fn succeeded(&self) -> bool {
        self.saved.is_some()
    }
}

/// Success count over total, plus each URL's outcome in input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub outcomes: Vec<UrlOutcome>,
}

impl BatchSummary {
    pub fn record(&mut self, url: &str, result: &FetchResult) {
        let outcome = UrlOutcome::new(url, result);
        self.total += 1;
        if outcome.succeeded() {
            self.succeeded += 1;
        }
        self.outcomes.push(outcome);
    }

    pub fn any_succeeded(&self) -> bool {
        self.succeeded > 0
    }
}

/// Fetch every URL in order, one at a time. URLs are trimmed before use;
/// failures are recorded and the batch moves on.
pub fn run_batch<T, S>(
    session: &mut FetchSession<T>,
    urls: &[S],
    mut on_event: impl FnMut(BatchEvent<'_>),
) -> BatchSummary
where
    T: Transport,
    S: AsRef<str>,
{
    let total = urls.len();
    let mut summary = BatchSummary::default();
    tracing::info!(total, "processing batch");

    for (i, url) in urls.iter().enumerate() {
        let url = url.as_ref().trim();
        let index = i + 1;
        on_event(BatchEvent::Started { index, total, url });
        let result = session.fetch(url);
        on_event(BatchEvent::Finished {
            index,
            total,
            url,
            result: &result,
        });
        summary.record(url, &result);
    }

    tracing::info!(succeeded = summary.succeeded, total, "batch finished");
    summary
}
