//! Table registry for the relational schema.
//!
//! The DDL itself lives in `migrations/`; this module names every table it
//! creates so the schema can be verified at startup and so models can be read
//! generically through [`crate::repository::table::TableRepository`].

use crate::models::{
    AgeBracket, Category, Club, CollectedResult, Competition, Contact, ContactInformation,
    District, Division, Document, Fee, Invitation, JudgeLicense, License, Lifter,
    LiftResult, QualificationLevel, Role, Round, SeriesTeamResult, Team, User, WeightClass,
    associations::{
        ClubFee, CompetitionResult, DistrictContact, InvitationCategory, InvitationDocument,
        InvitationQualificationLevel, LifterClub, SeriesTeamResultEntry,
    },
};

/// A model persisted in its own table.
pub trait Table {
    const NAME: &'static str;
}

/// A table keyed by a surrogate `id` column.
pub trait Entity: Table {}

macro_rules! entities {
    ($($model:ty),+ $(,)?) => {
        $(impl Entity for $model {})+

        /// Entity tables, in creation order.
        pub const ENTITY_TABLES: &[&str] = &[$(<$model as Table>::NAME),+];
    };
}

entities![
    ContactInformation,
    Contact,
    District,
    Fee,
    Club,
    Lifter,
    License,
    JudgeLicense,
    Role,
    WeightClass,
    AgeBracket,
    Category,
    CollectedResult,
    LiftResult,
    Division,
    Team,
    Round,
    SeriesTeamResult,
    QualificationLevel,
    Document,
    Invitation,
    Competition,
    User,
];

/// Many-to-many join tables.
pub const JOIN_TABLES: &[&str] = &[
    DistrictContact::NAME,
    ClubFee::NAME,
    LifterClub::NAME,
    SeriesTeamResultEntry::NAME,
    InvitationCategory::NAME,
    InvitationDocument::NAME,
    InvitationQualificationLevel::NAME,
    CompetitionResult::NAME,
];

pub const TABLES: &[&[&str]] = &[ENTITY_TABLES, JOIN_TABLES];

/// Tables from the registry that are absent from `existing`.
pub fn missing_tables<S: AsRef<str>>(existing: &[S]) -> Vec<&'static str> {
    TABLES
        .iter()
        .flat_map(|group| group.iter().copied())
        .filter(|table| !existing.iter().any(|e| e.as_ref() == *table))
        .collect()
}
