//! Admin view handlers
//!
//! Each view re-reads the whole collection; nothing is cached between page
//! loads. A store failure aborts before any aggregate is built.

use std::collections::BTreeMap;

use axum::{Json, extract::State};
use serde::Serialize;
use serde_json::Value;
use shared::models::{Rsvp, Setting};

use crate::aggregate::{FoodTally, filter_volunteers, partition_attendance, tally_food};
use crate::core::ServerState;
use crate::utils::AppResult;

#[derive(Debug, Serialize)]
pub struct RsvpListing {
    pub rsvps: Vec<Rsvp>,
    pub attendees: Vec<Rsvp>,
}

#[derive(Debug, Serialize)]
pub struct DeclinesView {
    pub declines: Vec<Rsvp>,
}

#[derive(Debug, Serialize)]
pub struct VolunteersView {
    pub volunteers: Vec<Rsvp>,
}

#[derive(Debug, Serialize)]
pub struct SettingsView {
    pub settings: BTreeMap<String, Setting>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessView {
    pub settings: BTreeMap<String, Setting>,
    pub access_setting: Value,
}

/// Full records plus the attending subset
pub async fn rsvps(State(state): State<ServerState>) -> AppResult<Json<RsvpListing>> {
    let rsvps = state.rsvps.all().await?;
    let attendees = partition_attendance(&rsvps)
        .attendees
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(RsvpListing { rsvps, attendees }))
}

pub async fn declines(State(state): State<ServerState>) -> AppResult<Json<DeclinesView>> {
    let rsvps = state.rsvps.all().await?;
    let declines = partition_attendance(&rsvps)
        .declines
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(DeclinesView { declines }))
}

pub async fn volunteers(State(state): State<ServerState>) -> AppResult<Json<VolunteersView>> {
    let rsvps = state.rsvps.all().await?;
    let volunteers = filter_volunteers(&rsvps).into_iter().cloned().collect();
    Ok(Json(VolunteersView { volunteers }))
}

pub async fn food(State(state): State<ServerState>) -> AppResult<Json<FoodTally>> {
    let rsvps = state.rsvps.all().await?;
    Ok(Json(tally_food(&rsvps)))
}

pub async fn settings(State(state): State<ServerState>) -> AppResult<Json<SettingsView>> {
    let settings = state.settings.display_settings().await?;
    Ok(Json(SettingsView { settings }))
}

pub async fn access(State(state): State<ServerState>) -> AppResult<Json<AccessView>> {
    let (settings, access_setting) = state.settings.access_view().await?;
    Ok(Json(AccessView {
        settings,
        access_setting,
    }))
}

/// Guard check: reaching the handler means the guard passed
pub async fn protected() -> &'static str {
    "Ok!"
}
