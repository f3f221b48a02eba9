use std::collections::HashMap;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use diesel::{prelude::*, PgConnection};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use super::filers::{load_filer_summary, FILER_SUMMARY_COLUMNS};
use crate::access::DocketScope;
use crate::auth::AuthenticatedUser;
use crate::error::{AppError, AppResult};
use crate::models::{
    CaseStatus, CaseStatusRow, Docket, FilerSummary, NewDocketManager, NewDocketParty, PartyType,
};
use crate::schema::{
    case_statuses, docket_managers, docket_parties, dockets, filers, party_types, users,
};
use crate::state::AppState;
use crate::utils::json::required_id;
use crate::utils::sql::contains_pattern;

#[derive(Deserialize)]
pub struct DocketListQuery {
    pub filer: Option<i32>,
    /// Presence-only flag; the value is ignored.
    pub open: Option<String>,
    pub num: Option<String>,
}

#[derive(Serialize)]
pub struct DocketResponse {
    pub id: i32,
    pub case_num: String,
    pub status: CaseStatusRow,
    pub closed_on: Option<String>,
    pub created_at: String,
    pub managers: Vec<FilerSummary>,
    pub parties: Vec<DocketPartyResponse>,
}

#[derive(Serialize)]
pub struct DocketPartyResponse {
    pub id: i32,
    pub party: FilerSummary,
    pub party_type: PartyType,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

fn created(message: &'static str) -> (StatusCode, Json<MessageResponse>) {
    (StatusCode::CREATED, Json(MessageResponse { message }))
}

pub async fn list_dockets(
    State(state): State<AppState>,
    Query(params): Query<DocketListQuery>,
) -> AppResult<Json<Vec<DocketResponse>>> {
    let mut conn = state.db()?;

    let DocketListQuery { filer, open, num } = params;

    let mut query = dockets::table.order(dockets::id.asc()).into_boxed();

    if let Some(filer_id) = filer {
        let filer = load_filer_summary(&mut conn, filer_id)?;
        let scope = DocketScope::resolve(&filer);
        debug!(filer_id, ?scope, "scoping docket list to filer");
        let docket_ids = scope.docket_ids(&mut conn)?;
        query = query.filter(dockets::id.eq_any(docket_ids));
    }

    if open.is_some() {
        query = query.filter(dockets::status_id.eq(CaseStatus::Open.id()));
    }

    if let Some(case_num) = num.as_deref() {
        query = query.filter(dockets::case_num.like(contains_pattern(case_num)));
    }

    let docket_list: Vec<Docket> = query.load(&mut conn)?;
    let response = build_docket_responses(&mut conn, docket_list)?;
    Ok(Json(response))
}

pub async fn get_docket(
    State(state): State<AppState>,
    Path(docket_id): Path<i32>,
) -> AppResult<Json<DocketResponse>> {
    let mut conn = state.db()?;
    let docket: Docket = dockets::table.find(docket_id).first(&mut conn)?;
    let response = build_docket_responses(&mut conn, vec![docket])?
        .pop()
        .ok_or_else(AppError::not_found)?;
    Ok(Json(response))
}

pub async fn close_docket(
    State(state): State<AppState>,
    Path(docket_id): Path<i32>,
    user: AuthenticatedUser,
) -> AppResult<StatusCode> {
    let mut conn = state.db()?;
    let docket: Docket = dockets::table.find(docket_id).first(&mut conn)?;

    let now = Utc::now().naive_utc();
    diesel::update(dockets::table.find(docket_id))
        .set((
            dockets::status_id.eq(CaseStatus::Closed.id()),
            dockets::closed_on.eq(Some(now)),
        ))
        .execute(&mut conn)?;

    info!(
        docket_id,
        case_num = %docket.case_num,
        previous_status = ?CaseStatus::from_id(docket.status_id),
        closed_by = %user.username,
        "docket closed"
    );

    Ok(StatusCode::OK)
}

pub async fn assign_manager(
    State(state): State<AppState>,
    Path(docket_id): Path<i32>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let Json(body) = payload?;
    let mut conn = state.db()?;
    let docket: Docket = dockets::table.find(docket_id).first(&mut conn)?;
    let manager = load_filer_summary(&mut conn, required_id(&body, "manager_id")?)?;

    if !manager.is_staff {
        warn!(docket_id, manager_id = manager.id, "assigning non-staff filer as manager");
    }

    let inserted = diesel::insert_into(docket_managers::table)
        .values(&NewDocketManager {
            docket_id: docket.id,
            filer_id: manager.id,
        })
        .on_conflict_do_nothing()
        .execute(&mut conn)?;

    info!(docket_id, manager_id = manager.id, inserted, "manager assigned");
    Ok(created("Manager Added"))
}

pub async fn unassign_manager(
    State(state): State<AppState>,
    Path(docket_id): Path<i32>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let Json(body) = payload?;
    let mut conn = state.db()?;
    let docket: Docket = dockets::table.find(docket_id).first(&mut conn)?;
    let manager = load_filer_summary(&mut conn, required_id(&body, "manager_id")?)?;

    let removed = diesel::delete(
        docket_managers::table
            .filter(docket_managers::docket_id.eq(docket.id))
            .filter(docket_managers::filer_id.eq(manager.id)),
    )
    .execute(&mut conn)?;

    info!(docket_id, manager_id = manager.id, removed, "manager unassigned");
    Ok(created("Manager Removed"))
}

pub async fn assign_party(
    State(state): State<AppState>,
    Path(docket_id): Path<i32>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let Json(body) = payload?;
    let mut conn = state.db()?;
    let docket: Docket = dockets::table.find(docket_id).first(&mut conn)?;
    let filer = load_filer_summary(&mut conn, required_id(&body, "filer_id")?)?;
    let party_type: PartyType = party_types::table
        .find(required_id(&body, "party_type_id")?)
        .first(&mut conn)?;

    let row_id: i32 = diesel::insert_into(docket_parties::table)
        .values(&NewDocketParty {
            docket_id: docket.id,
            party_id: filer.id,
            party_type_id: party_type.id,
        })
        .returning(docket_parties::id)
        .get_result(&mut conn)?;

    info!(
        docket_id,
        filer_id = filer.id,
        party_type = %party_type.label,
        docket_party_id = row_id,
        "party assigned"
    );
    Ok(created("party added"))
}

/// Removes the filer from the docket in every role it holds.
pub async fn unassign_party(
    State(state): State<AppState>,
    Path(docket_id): Path<i32>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let Json(body) = payload?;
    let mut conn = state.db()?;
    let docket: Docket = dockets::table.find(docket_id).first(&mut conn)?;
    let filer = load_filer_summary(&mut conn, required_id(&body, "filer_id")?)?;

    let removed = diesel::delete(
        docket_parties::table
            .filter(docket_parties::docket_id.eq(docket.id))
            .filter(docket_parties::party_id.eq(filer.id)),
    )
    .execute(&mut conn)?;

    info!(docket_id, filer_id = filer.id, removed, "party unassigned");
    Ok(created("party deleted"))
}

fn build_docket_responses(
    conn: &mut PgConnection,
    docket_list: Vec<Docket>,
) -> AppResult<Vec<DocketResponse>> {
    if docket_list.is_empty() {
        return Ok(Vec::new());
    }

    let docket_ids: Vec<i32> = docket_list.iter().map(|docket| docket.id).collect();

    let statuses: HashMap<i32, CaseStatusRow> = case_statuses::table
        .load::<CaseStatusRow>(conn)?
        .into_iter()
        .map(|status| (status.id, status))
        .collect();

    let manager_rows: Vec<(i32, FilerSummary)> = docket_managers::table
        .inner_join(filers::table.inner_join(users::table))
        .filter(docket_managers::docket_id.eq_any(&docket_ids))
        .select((docket_managers::docket_id, FILER_SUMMARY_COLUMNS))
        .order(filers::id.asc())
        .load(conn)?;

    let mut managers_by_docket: HashMap<i32, Vec<FilerSummary>> = HashMap::new();
    for (docket_id, manager) in manager_rows {
        managers_by_docket.entry(docket_id).or_default().push(manager);
    }

    let party_rows: Vec<(i32, i32, FilerSummary, PartyType)> = docket_parties::table
        .inner_join(filers::table.inner_join(users::table))
        .inner_join(party_types::table)
        .filter(docket_parties::docket_id.eq_any(&docket_ids))
        .select((
            docket_parties::id,
            docket_parties::docket_id,
            FILER_SUMMARY_COLUMNS,
            party_types::all_columns,
        ))
        .order(docket_parties::id.asc())
        .load(conn)?;

    let mut parties_by_docket: HashMap<i32, Vec<DocketPartyResponse>> = HashMap::new();
    for (id, docket_id, party, party_type) in party_rows {
        parties_by_docket
            .entry(docket_id)
            .or_default()
            .push(DocketPartyResponse {
                id,
                party,
                party_type,
            });
    }

    docket_list
        .into_iter()
        .map(|docket| {
            let status = statuses.get(&docket.status_id).cloned().ok_or_else(|| {
                AppError::internal(format!(
                    "docket {} references unknown status {}",
                    docket.id, docket.status_id
                ))
            })?;
            Ok(DocketResponse {
                id: docket.id,
                case_num: docket.case_num,
                status,
                closed_on: docket.closed_on.map(to_iso),
                created_at: to_iso(docket.created_at),
                managers: managers_by_docket.remove(&docket.id).unwrap_or_default(),
                parties: parties_by_docket.remove(&docket.id).unwrap_or_default(),
            })
        })
        .collect()
}

pub(crate) fn to_iso(dt: NaiveDateTime) -> String {
    DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc).to_rfc3339()
}
