//! Rows of the many-to-many join tables.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::schema::Table;

macro_rules! association {
    ($(#[$meta:meta])* $name:ident, $table:literal, $left:ident, $right:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
        pub struct $name {
            pub $left: i32,
            pub $right: i32,
        }

        impl Table for $name {
            const NAME: &'static str = $table;
        }
    };
}

association!(DistrictContact, "district_contacts", district_id, contact_id);
association!(ClubFee, "club_fees", club_id, fee_id);
association!(
    /// Club membership of a lifter.
    LifterClub,
    "lifter_clubs",
    lifter_id,
    club_id
);
association!(
    /// Result counted towards a series team result.
    SeriesTeamResultEntry,
    "series_team_result_results",
    series_team_result_id,
    result_id
);
association!(InvitationCategory, "invitation_categories", invitation_id, category_id);
association!(InvitationDocument, "invitation_documents", invitation_id, document_id);
association!(
    InvitationQualificationLevel,
    "invitation_qualification_levels",
    invitation_id,
    qualification_level_id
);
association!(CompetitionResult, "competition_results", competition_id, result_id);
