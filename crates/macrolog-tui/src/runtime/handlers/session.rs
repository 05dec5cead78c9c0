//! Session handlers: initialization, profile writes, account deletion.

use macrolog_core::api::{ApiClient, ApiResult};
use macrolog_core::models::{DailyLogBundle, ProfileInput, UserProfile};
use macrolog_core::overview::OverviewCache;

use crate::effects::InitReason;
use crate::events::{InitOutcome, UiEvent};

/// Loads the profile and, when one exists, today's log.
pub async fn initialize(api: ApiClient, reason: InitReason) -> UiEvent {
    tracing::debug!(?reason, "initializing session");
    let outcome = match load_session(&api).await {
        Ok(Some((profile, daily_log))) => InitOutcome::Ready { profile, daily_log },
        Ok(None) => InitOutcome::NoProfile,
        Err(err) => InitOutcome::Failed {
            error: err.to_string(),
        },
    };
    UiEvent::Initialized { reason, outcome }
}

async fn load_session(api: &ApiClient) -> ApiResult<Option<(UserProfile, DailyLogBundle)>> {
    let Some(profile) = api.get_profile().await? else {
        return Ok(None);
    };
    let daily_log = api.today_log().await?;
    Ok(Some((profile, daily_log)))
}

/// Creates or replaces the profile.
pub async fn save_profile(api: ApiClient, profile: ProfileInput, reason: InitReason) -> UiEvent {
    match api.save_profile(&profile).await {
        Ok(profile) => UiEvent::ProfileSaved { reason, profile },
        Err(err) => UiEvent::ProfileSaveFailed {
            error: err.to_string(),
        },
    }
}

/// Deletes the account and forgets the cached overview that belonged to it.
pub async fn delete_account(api: ApiClient, cache: OverviewCache) -> UiEvent {
    match api.delete_profile().await {
        Ok(()) => {
            cache.clear();
            UiEvent::AccountDeleted
        }
        Err(err) => UiEvent::AccountDeleteFailed {
            error: err.to_string(),
        },
    }
}
