//! Resolution of which dockets a filer is attached to.
//!
//! Staff filers oversee dockets through the manager set; everyone else is
//! attached through docket party rows. Handlers ask this module instead of
//! inspecting the staff flag themselves.

use diesel::prelude::*;
use diesel::PgConnection;

use crate::models::FilerSummary;
use crate::schema::{docket_managers, docket_parties};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocketScope {
    /// Dockets whose manager set contains the filer.
    Managed { filer_id: i32 },
    /// Dockets where the filer holds at least one party role.
    Party { filer_id: i32 },
}

impl DocketScope {
    pub fn resolve(filer: &FilerSummary) -> Self {
        if filer.is_staff {
            DocketScope::Managed { filer_id: filer.id }
        } else {
            DocketScope::Party { filer_id: filer.id }
        }
    }

    /// Distinct ids of the dockets in scope.
    pub fn docket_ids(self, conn: &mut PgConnection) -> QueryResult<Vec<i32>> {
        match self {
            DocketScope::Managed { filer_id } => docket_managers::table
                .filter(docket_managers::filer_id.eq(filer_id))
                .select(docket_managers::docket_id)
                .distinct()
                .load(conn),
            DocketScope::Party { filer_id } => docket_parties::table
                .filter(docket_parties::party_id.eq(filer_id))
                .select(docket_parties::docket_id)
                .distinct()
                .load(conn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DocketScope;
    use crate::models::FilerSummary;

    fn filer(id: i32, is_staff: bool) -> FilerSummary {
        FilerSummary {
            id,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            username: format!("filer{id}"),
            is_staff,
        }
    }

    #[test]
    fn staff_filers_are_scoped_to_managed_dockets() {
        assert_eq!(
            DocketScope::resolve(&filer(3, true)),
            DocketScope::Managed { filer_id: 3 }
        );
    }

    #[test]
    fn other_filers_are_scoped_to_party_dockets() {
        assert_eq!(
            DocketScope::resolve(&filer(8, false)),
            DocketScope::Party { filer_id: 8 }
        );
    }
}
