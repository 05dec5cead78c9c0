//! AI progress overview with a same-day local cache.
//!
//! At most one overview is kept, stamped with the local date it was fetched.
//! A stamp from any other day is treated as absent and dropped.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::models::{AiOverviewPayload, LogEntry};
use crate::storage::LocalStore;

pub const CACHE_KEY: &str = "ai_overview";
pub const START_LOGGING: &str = "Start logging";
pub const LOAD_FAILED: &str = "Failed to load AI overview. Please try again later.";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// What the overview panel shows once loading settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiOverviewResult {
    Empty { message: String },
    Ai(AiOverviewPayload),
}

impl AiOverviewResult {
    pub fn empty(message: &str) -> Self {
        AiOverviewResult::Empty {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedOverview {
    timestamp: String,
    response: AiOverviewPayload,
}

/// Same-day cache entry in the local store.
#[derive(Debug, Clone)]
pub struct OverviewCache {
    store: LocalStore,
}

impl OverviewCache {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Returns the cached payload if it was stored on `today`.
    /// Entries from other days are removed.
    pub fn load(&self, today: NaiveDate) -> Option<AiOverviewPayload> {
        let cached: CachedOverview = self.store.get(CACHE_KEY)?;
        let stamped = NaiveDate::parse_from_str(&cached.timestamp, DATE_FORMAT).ok();
        if stamped == Some(today) {
            return Some(cached.response);
        }
        tracing::debug!(timestamp = %cached.timestamp, %today, "discarding stale ai overview");
        self.clear();
        None
    }

    pub fn save(&self, today: NaiveDate, payload: &AiOverviewPayload) {
        let entry = CachedOverview {
            timestamp: today.format(DATE_FORMAT).to_string(),
            response: payload.clone(),
        };
        if let Err(err) = self.store.set(CACHE_KEY, &entry) {
            tracing::warn!(error = %err, "failed to cache ai overview");
        }
    }

    pub fn clear(&self) {
        if let Err(err) = self.store.remove(CACHE_KEY) {
            tracing::warn!(error = %err, "failed to clear ai overview cache");
        }
    }
}

/// Resolves the overview for today's log.
///
/// `latest` is the newest entry of today's bundle. Without one nothing is
/// requested regardless of the cache. Otherwise a same-day cache entry wins
/// unless `force` is set, and a latest entry from another day means there is
/// nothing to summarize yet.
///
/// A fetched payload is not written to the cache here. The caller saves it
/// once it knows the answer is still wanted.
pub async fn get_ai_overview(
    api: &ApiClient,
    cache: &OverviewCache,
    latest: Option<&LogEntry>,
    force: bool,
    today: NaiveDate,
) -> AiOverviewResult {
    let Some(latest) = latest else {
        cache.clear();
        return AiOverviewResult::empty(START_LOGGING);
    };

    if !force && let Some(cached) = cache.load(today) {
        tracing::debug!("using cached ai overview");
        return AiOverviewResult::Ai(cached);
    }

    if latest.local_date() != Some(today) {
        tracing::debug!(datetime = %latest.datetime, %today, "latest log is not from today");
        cache.clear();
        return AiOverviewResult::empty(START_LOGGING);
    }

    match api.chat_overview().await {
        Ok(payload) => AiOverviewResult::Ai(payload),
        Err(err) => {
            tracing::warn!(error = %err, status = ?err.status(), "ai overview request failed");
            cache.clear();
            AiOverviewResult::empty(LOAD_FAILED)
        }
    }
}
