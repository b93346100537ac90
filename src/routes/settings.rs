//! Settings endpoints. The public read collapses the settings table into a
//! flat `{key: value}` object; the admin write is a keyed upsert.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::{
    core::settings::{self, SettingUpsert},
    entities::setting,
    errors::Error,
    middleware::auth::AdminSession,
    state::AppState,
};

/// `GET /api/settings` - all settings as a flat key-value object, public.
pub async fn list_settings(
    State(state): State<AppState>,
) -> Result<Json<BTreeMap<String, String>>, Error> {
    let rows = settings::get_settings(&state.db)
        .await
        .map_err(|e| e.public("Failed to fetch settings"))?;
    Ok(Json(rows.into_iter().map(|s| (s.key, s.value)).collect()))
}

/// `POST /api/settings` - upsert one key, admin only.
pub async fn save_setting(
    State(state): State<AppState>,
    _session: AdminSession,
    payload: Result<Json<SettingUpsert>, JsonRejection>,
) -> Result<Json<setting::Model>, Error> {
    let Json(body) = payload.map_err(|_| Error::validation("Failed to save setting"))?;
    let saved = settings::upsert_setting(&state.db, &body.key, &body.value)
        .await
        .map_err(|e| e.public("Failed to save setting"))?;
    Ok(Json(saved))
}
