//! Submission of the chosen groups.
//!
//! `SubmitAction::Remote` posts the selection as JSON and reports where to go
//! next on success. `SubmitAction::Simulated` performs no I/O and only holds
//! the submitting state for a fixed delay.

use std::time::Duration;

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::error::{GroupError, GroupResult};
use crate::groups::GroupItem;
use crate::http;
use crate::log;

/// Location shown after a successful remote submit when none is configured
pub const DEFAULT_NEXT: &str = "/loading";

/// Delay used by the simulated submit when none is configured
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 2000;

fn default_next() -> String {
    DEFAULT_NEXT.to_string()
}

fn default_delay_ms() -> u64 {
    DEFAULT_SIMULATED_DELAY_MS
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubmitAction {
    /// POST the selection to `url`, then continue at `next`
    Remote {
        url: String,
        #[serde(default = "default_next")]
        next: String,
    },
    /// Pretend to submit for `delay_ms`
    Simulated {
        #[serde(default = "default_delay_ms")]
        delay_ms: u64,
    },
}

impl Default for SubmitAction {
    fn default() -> Self {
        SubmitAction::Simulated {
            delay_ms: DEFAULT_SIMULATED_DELAY_MS,
        }
    }
}

/// What a successful submit asks the UI to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Move on to the given location
    Navigate(String),
    /// Nothing was sent; `count` groups would have been
    Simulated { count: usize },
}

impl SubmitAction {
    pub fn describe(&self) -> String {
        match self {
            SubmitAction::Remote { url, .. } => url.clone(),
            SubmitAction::Simulated { delay_ms } => format!("simulated ({}ms)", delay_ms),
        }
    }

    /// Submit `selection`. An empty selection is rejected before any I/O.
    pub async fn submit(
        &self,
        client: &Client,
        selection: &[GroupItem],
        timeout: Duration,
    ) -> GroupResult<SubmitOutcome> {
        if selection.is_empty() {
            return Err(GroupError::EmptySelection);
        }

        match self {
            SubmitAction::Remote { url, next } => {
                post_selection(client, url, selection, timeout).await?;
                Ok(SubmitOutcome::Navigate(next.clone()))
            }
            SubmitAction::Simulated { delay_ms } => {
                tokio::time::sleep(Duration::from_millis(*delay_ms)).await;
                Ok(SubmitOutcome::Simulated {
                    count: selection.len(),
                })
            }
        }
    }
}

async fn post_selection(
    client: &Client,
    url: &str,
    selection: &[GroupItem],
    timeout: Duration,
) -> GroupResult<()> {
    let body = serde_json::to_string(selection)
        .map_err(|e| GroupError::SubmitFailed(format!("could not encode selection: {}", e)))?;
    log::log_request("POST", url, Some(&body));

    let response = client
        .post(url)
        .timeout(timeout)
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| GroupError::SubmitFailed(http::describe_error(&e, timeout)))?;

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    log::log_response(url, status.as_u16(), &text);

    if status.is_success() {
        Ok(())
    } else {
        Err(GroupError::SubmitFailed(format!("server returned {}", status)))
    }
}

/// Run `action` on a background task and deliver the outcome on `tx`.
pub fn spawn_submit(
    action: SubmitAction,
    client: Client,
    selection: Vec<GroupItem>,
    timeout: Duration,
    tx: mpsc::Sender<GroupResult<SubmitOutcome>>,
) -> JoinHandle<()> {
    log::log_event(&format!(
        "submitting {} groups via {}",
        selection.len(),
        action.describe()
    ));

    tokio::spawn(async move {
        let result = action.submit(&client, &selection, timeout).await;
        match &result {
            Ok(outcome) => log::log_event(&format!("submit finished: {:?}", outcome)),
            Err(e) => log::log_event(&format!("submit failed: {}", e)),
        }
        let _ = tx.send(result).await;
    })
}
