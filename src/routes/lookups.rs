use axum::{extract::State, Json};
use diesel::prelude::*;

use crate::{
    error::AppResult,
    models::{CaseStatusRow, PartyType},
    schema::{case_statuses, party_types},
    state::AppState,
};

pub async fn list_party_types(State(state): State<AppState>) -> AppResult<Json<Vec<PartyType>>> {
    let mut conn = state.db()?;
    let rows: Vec<PartyType> = party_types::table
        .order(party_types::id.asc())
        .load(&mut conn)?;
    Ok(Json(rows))
}

pub async fn list_case_statuses(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CaseStatusRow>>> {
    let mut conn = state.db()?;
    let rows: Vec<CaseStatusRow> = case_statuses::table
        .order(case_statuses::id.asc())
        .load(&mut conn)?;
    Ok(Json(rows))
}
