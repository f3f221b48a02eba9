use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Serialize;

use crate::schema::*;

/// Lifecycle state of a docket. The discriminants are the seeded
/// `case_statuses` ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStatus {
    Open = 1,
    Closed = 2,
}

impl CaseStatus {
    pub const ALL: [CaseStatus; 2] = [CaseStatus::Open, CaseStatus::Closed];

    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn label(self) -> &'static str {
        match self {
            CaseStatus::Open => "open",
            CaseStatus::Closed => "closed",
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.id() == id)
    }
}

#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = users)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub is_staff: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub is_staff: bool,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = filers)]
pub struct NewFiler {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// Filer joined with the staff flag of its user record.
#[derive(Debug, Clone, Queryable, Serialize)]
pub struct FilerSummary {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub is_staff: bool,
}

#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = case_statuses)]
pub struct CaseStatusRow {
    pub id: i32,
    pub label: String,
}

#[derive(Debug, Clone, Queryable, Identifiable, Serialize)]
#[diesel(table_name = party_types)]
pub struct PartyType {
    pub id: i32,
    pub label: String,
}

#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = dockets)]
pub struct Docket {
    pub id: i32,
    pub case_num: String,
    pub status_id: i32,
    pub closed_on: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = dockets)]
pub struct NewDocket {
    pub case_num: String,
    pub status_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = docket_managers)]
pub struct NewDocketManager {
    pub docket_id: i32,
    pub filer_id: i32,
}

#[derive(Debug, Clone, Queryable)]
pub struct DocketParty {
    pub id: i32,
    pub docket_id: i32,
    pub party_id: i32,
    pub party_type_id: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = docket_parties)]
pub struct NewDocketParty {
    pub docket_id: i32,
    pub party_id: i32,
    pub party_type_id: i32,
}
