//! What gets shared for a day, the order share paths are tried in, and the
//! share button's transient state.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::ShareError;
use crate::reading_plan::long_label;

pub const SHARE_TITLE: &str = "Today Is Enough";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: Option<String>,
}

impl SharePayload {
    pub fn for_day(date: NaiveDate, reference: &str) -> Self {
        Self {
            title: SHARE_TITLE.to_string(),
            text: share_text(date, reference),
            url: None,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

pub fn share_text(date: NaiveDate, reference: &str) -> String {
    format!(
        "Today is enough. One verse, one breath.\n{} \u{2014} {}",
        long_label(date),
        reference
    )
}

/// The two ways a device can pass the day along.
///
/// Each method reports [`ShareError::Unsupported`] when the capability is
/// missing and [`ShareError::Rejected`] when it exists but fails.
#[async_trait(?Send)]
pub trait ShareTarget {
    async fn native_share(&self, payload: &SharePayload) -> Result<(), ShareError>;
    async fn copy_text(&self, text: &str) -> Result<(), ShareError>;
}

/// Native share first; if it is missing or fails, copy the text instead.
pub async fn share_with<T: ShareTarget + ?Sized>(
    target: &T,
    payload: &SharePayload,
) -> Result<ShareOutcome, ShareError> {
    match target.native_share(payload).await {
        Ok(()) => return Ok(ShareOutcome::Shared),
        Err(err) => log::debug!("Native share unavailable, copying instead: {}", err),
    }

    target.copy_text(&payload.text).await?;
    Ok(ShareOutcome::Copied)
}

/// How a successful share attempt completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareStatus {
    #[default]
    Idle,
    Copied,
}

impl ShareStatus {
    /// Status to show once an attempt finishes
    pub fn after(outcome: ShareOutcome) -> Self {
        match outcome {
            ShareOutcome::Shared => ShareStatus::Idle,
            ShareOutcome::Copied => ShareStatus::Copied,
        }
    }

    /// Like [`ShareStatus::after`], with a failed attempt leaving the button idle
    pub fn settle(result: &Result<ShareOutcome, ShareError>) -> Self {
        match result {
            Ok(outcome) => Self::after(*outcome),
            Err(_) => ShareStatus::Idle,
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            ShareStatus::Idle => "Share today",
            ShareStatus::Copied => "Copied",
        }
    }
}

/// Tokens for share attempts. Only the latest attempt's "Copied" reset may
/// return the button to idle.
#[derive(Debug, Default)]
pub struct AckGeneration {
    current: u64,
}

impl AckGeneration {
    /// Start an attempt, superseding every earlier one
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.current == token
    }
}
