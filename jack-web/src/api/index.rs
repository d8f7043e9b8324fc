//! Channel list and channel registration
//!
//! GET  /  lists registered channels
//! POST /  registers a channel after validating its id

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Form,
};
use jack_common::db::{channels, Channel};
use serde::Deserialize;
use tracing::info;

use super::{found, ui, SubmitOutcome};
use crate::error::ApiResult;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ChannelForm {
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub channel_nm: String,
}

/// GET /
pub async fn list_channels(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let channels = channels::list_channels(&state.db).await?;
    Ok(Html(ui::render_index_page(&channels, None)))
}

/// POST /
pub async fn add_channel(
    State(state): State<AppState>,
    Form(form): Form<ChannelForm>,
) -> ApiResult<Response> {
    match submit_channel(&state, form).await? {
        SubmitOutcome::Redirect(location) => Ok(found(&location)),
        SubmitOutcome::Rejected { listing, message } => {
            Ok(Html(ui::render_index_page(&listing, Some(message))).into_response())
        }
    }
}

/// Validate and store a submitted channel
pub async fn submit_channel(
    state: &AppState,
    form: ChannelForm,
) -> ApiResult<SubmitOutcome<Vec<Channel>>> {
    let valid = match state.validator.validate_channel(&form.channel_id).await {
        Ok(valid) => valid,
        Err(rejected) => {
            let listing = channels::list_channels(&state.db).await?;
            return Ok(SubmitOutcome::Rejected {
                listing,
                message: rejected.message(),
            });
        }
    };

    // Submitted name first, then the directory's, then the id itself
    let submitted_nm = form.channel_nm.trim();
    let channel_nm = if !submitted_nm.is_empty() {
        submitted_nm.to_string()
    } else {
        valid.channel_nm.unwrap_or_else(|| valid.channel_id.clone())
    };

    let channel = Channel::new(valid.channel_id, channel_nm);
    if channels::insert_channel(&state.db, &channel).await? {
        info!(channel_id = %channel.channel_id, "Registered channel");
    } else {
        info!(channel_id = %channel.channel_id, "Channel already registered");
    }

    Ok(SubmitOutcome::Redirect("/".to_string()))
}
