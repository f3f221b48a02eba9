use axum::{
    extract::{Path, Query, State},
    Json,
};
use diesel::{prelude::*, PgConnection};
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::FilerSummary,
    schema::{filers, users},
    state::AppState,
};

/// Column set backing [`FilerSummary`]; queries selecting it must join
/// `filers` with `users`.
pub(crate) const FILER_SUMMARY_COLUMNS: (
    filers::id,
    filers::first_name,
    filers::last_name,
    users::username,
    users::is_staff,
) = (
    filers::id,
    filers::first_name,
    filers::last_name,
    users::username,
    users::is_staff,
);

#[derive(Deserialize)]
pub struct FilerListQuery {
    pub staff: Option<bool>,
}

pub async fn list_filers(
    State(state): State<AppState>,
    Query(params): Query<FilerListQuery>,
) -> AppResult<Json<Vec<FilerSummary>>> {
    let mut conn = state.db()?;

    let mut query = filers::table
        .inner_join(users::table)
        .select(FILER_SUMMARY_COLUMNS)
        .order(filers::id.asc())
        .into_boxed();

    if let Some(staff) = params.staff {
        query = query.filter(users::is_staff.eq(staff));
    }

    let filer_list: Vec<FilerSummary> = query.load(&mut conn)?;
    Ok(Json(filer_list))
}

pub async fn get_filer(
    State(state): State<AppState>,
    Path(filer_id): Path<i32>,
) -> AppResult<Json<FilerSummary>> {
    let mut conn = state.db()?;
    let filer = load_filer_summary(&mut conn, filer_id)?;
    Ok(Json(filer))
}

pub(crate) fn load_filer_summary(
    conn: &mut PgConnection,
    filer_id: i32,
) -> QueryResult<FilerSummary> {
    filers::table
        .inner_join(users::table)
        .filter(filers::id.eq(filer_id))
        .select(FILER_SUMMARY_COLUMNS)
        .first(conn)
}
