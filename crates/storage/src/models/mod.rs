pub mod age_bracket;
pub mod associations;
pub mod category;
pub mod club;
pub mod collected_result;
pub mod competition;
pub mod contact;
pub mod contact_information;
pub mod district;
pub mod division;
pub mod document;
pub mod enums;
pub mod fee;
pub mod invitation;
pub mod judge_license;
pub mod license;
pub mod lift_result;
pub mod lifter;
pub mod qualification_level;
pub mod role;
pub mod round;
pub mod series_team_result;
pub mod team;
pub mod user;
pub mod weight_class;

pub use age_bracket::AgeBracket;
pub use category::Category;
pub use club::Club;
pub use collected_result::CollectedResult;
pub use competition::Competition;
pub use contact::Contact;
pub use contact_information::ContactInformation;
pub use district::District;
pub use division::Division;
pub use document::{Document, MAX_DOCUMENT_BYTES};
pub use enums::{
    CompetitionType, Discipline, Gender, JudgeLevel, LicenseStatus, PointSystem, RoleType,
};
pub use fee::Fee;
pub use invitation::Invitation;
pub use judge_license::JudgeLicense;
pub use license::License;
pub use lift_result::LiftResult;
pub use lifter::{Lifter, LifterWithContact};
pub use qualification_level::QualificationLevel;
pub use role::Role;
pub use round::Round;
pub use series_team_result::SeriesTeamResult;
pub use team::Team;
pub use user::User;
pub use weight_class::WeightClass;
