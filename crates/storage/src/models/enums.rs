//! Fixed value sets stored as PostgreSQL enum types.
//!
//! The short code is what travels over the wire and into the database; the
//! Swedish federation wording is available through `label()`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "gender")]
pub enum Gender {
    M,
    F,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Self::M => "Man",
            Self::F => "Kvinna",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "license_status")]
pub enum LicenseStatus {
    #[serde(rename = "LI")]
    #[sqlx(rename = "LI")]
    Licensed,
    #[serde(rename = "EL")]
    #[sqlx(rename = "EL")]
    Unlicensed,
}

impl LicenseStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Licensed => "Licensierad",
            Self::Unlicensed => "Ej licensierad",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "judge_level")]
pub enum JudgeLevel {
    #[serde(rename = "DD")]
    #[sqlx(rename = "DD")]
    District,
    #[serde(rename = "FD")]
    #[sqlx(rename = "FD")]
    Federation,
}

impl JudgeLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::District => "Distriktsdomare",
            Self::Federation => "Förbundsdomare",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "discipline")]
pub enum Discipline {
    #[serde(rename = "SQ")]
    #[sqlx(rename = "SQ")]
    Squat,
    #[serde(rename = "BP")]
    #[sqlx(rename = "BP")]
    BenchPress,
    #[serde(rename = "DL")]
    #[sqlx(rename = "DL")]
    Deadlift,
    #[serde(rename = "PB")]
    #[sqlx(rename = "PB")]
    ParalympicBenchPress,
}

impl Discipline {
    pub fn label(self) -> &'static str {
        match self {
            Self::Squat => "Knäböj",
            Self::BenchPress => "Bänkpress",
            Self::Deadlift => "Marklyft",
            Self::ParalympicBenchPress => "Paralympisk Bänkpress",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "competition_type")]
pub enum CompetitionType {
    #[serde(rename = "EBP")]
    #[sqlx(rename = "EBP")]
    EquippedBenchPress,
    #[serde(rename = "CPL")]
    #[sqlx(rename = "CPL")]
    ClassicPowerlifting,
    #[serde(rename = "EPL")]
    #[sqlx(rename = "EPL")]
    EquippedPowerlifting,
    #[serde(rename = "CBP")]
    #[sqlx(rename = "CBP")]
    ClassicBenchPress,
    #[serde(rename = "PBP")]
    #[sqlx(rename = "PBP")]
    ParalympicBenchPress,
}

impl CompetitionType {
    pub fn label(self) -> &'static str {
        match self {
            Self::EquippedBenchPress => "Utrustad Bänkpress",
            Self::ClassicPowerlifting => "Klassiskt Styrkelyft",
            Self::EquippedPowerlifting => "Utrustat Styrkelyft",
            Self::ClassicBenchPress => "Klassisk Bänkpress",
            Self::ParalympicBenchPress => "Paralympisk Bänkpress",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "point_system")]
pub enum PointSystem {
    #[serde(rename = "IPF")]
    #[sqlx(rename = "IPF")]
    Ipf,
    #[serde(rename = "WLK")]
    #[sqlx(rename = "WLK")]
    Wilks,
}

impl PointSystem {
    pub fn label(self) -> &'static str {
        match self {
            Self::Ipf => "IPF-poäng",
            Self::Wilks => "Wilks-poäng",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "role_type")]
pub enum RoleType {
    #[serde(rename = "CLA")]
    #[sqlx(rename = "CLA")]
    ClubAdmin,
    #[serde(rename = "DIA")]
    #[sqlx(rename = "DIA")]
    DistrictAdmin,
    #[serde(rename = "NAA")]
    #[sqlx(rename = "NAA")]
    NationalAdmin,
    #[serde(rename = "COA")]
    #[sqlx(rename = "COA")]
    CompetitionAdmin,
    #[serde(rename = "COO")]
    #[sqlx(rename = "COO")]
    CompetitionOrganizer,
    #[serde(rename = "SUA")]
    #[sqlx(rename = "SUA")]
    SuperAdmin,
}

impl RoleType {
    pub fn label(self) -> &'static str {
        match self {
            Self::ClubAdmin => "ClubAdmin",
            Self::DistrictAdmin => "DistrictAdmin",
            Self::NationalAdmin => "NationalAdmin",
            Self::CompetitionAdmin => "CompetitionAdmin",
            Self::CompetitionOrganizer => "CompetitionOrganizer",
            Self::SuperAdmin => "SuperAdmin",
        }
    }
}
