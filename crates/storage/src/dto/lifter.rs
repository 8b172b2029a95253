use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{ContactInformation, Gender, LifterWithContact};

/// Flat request body carrying both lifter and contact information fields.
///
/// Used for create and for full replacement on update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LifterRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "First name must be between 1 and 50 characters"
    ))]
    pub first_name: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Family name must be between 1 and 100 characters"
    ))]
    pub family_name: String,

    pub gender: Gender,

    #[validate(length(
        min = 1,
        max = 12,
        message = "ID number must be between 1 and 12 characters"
    ))]
    pub id_number: String,

    #[validate(length(min = 1, max = 200, message = "Address is required"))]
    pub address: String,

    #[validate(length(max = 5, message = "Postal code must be at most 5 characters"))]
    pub postal_code: String,

    #[validate(length(max = 50))]
    pub postal_city: String,

    #[validate(length(max = 50))]
    pub phone: String,

    #[validate(length(max = 255))]
    pub email: String,
}

impl LifterRequest {
    /// Overwrites every lifter and contact field of `record` with this request.
    pub fn apply_to(&self, record: &mut LifterWithContact) {
        let lifter = &mut record.lifter;
        lifter.first_name = self.first_name.clone();
        lifter.family_name = self.family_name.clone();
        lifter.gender = self.gender;
        lifter.id_number = self.id_number.clone();

        let contact = &mut record.contact_information;
        contact.address = self.address.clone();
        contact.postal_code = Some(self.postal_code.clone());
        contact.postal_city = Some(self.postal_city.clone());
        contact.phone = Some(self.phone.clone());
        contact.email = Some(self.email.clone());
    }
}

/// Lifter with its contact information embedded
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LifterResponse {
    pub id: i32,
    pub first_name: String,
    pub family_name: String,
    pub gender: Gender,
    pub id_number: String,
    pub created_at: NaiveDateTime,
    pub contact_information: ContactInformation,
}

impl From<LifterWithContact> for LifterResponse {
    fn from(record: LifterWithContact) -> Self {
        let LifterWithContact {
            lifter,
            contact_information,
        } = record;

        Self {
            id: lifter.id,
            first_name: lifter.first_name,
            family_name: lifter.family_name,
            gender: lifter.gender,
            id_number: lifter.id_number,
            created_at: lifter.created_at,
            contact_information,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Lifter;

    fn anna() -> LifterRequest {
        LifterRequest {
            first_name: "Anna".to_string(),
            family_name: "Svensson".to_string(),
            gender: Gender::F,
            id_number: "199001011234".to_string(),
            address: "Mainst 1".to_string(),
            postal_code: "12345".to_string(),
            postal_city: "Stockholm".to_string(),
            phone: "0701234567".to_string(),
            email: "a@x.se".to_string(),
        }
    }

    fn stored() -> LifterWithContact {
        LifterWithContact {
            lifter: Lifter {
                id: 7,
                first_name: "Erik".to_string(),
                family_name: "Berg".to_string(),
                contact_information_id: 3,
                gender: Gender::M,
                id_number: "198502021111".to_string(),
                created_at: chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
                    .unwrap()
                    .and_hms_opt(12, 0, 0)
                    .unwrap(),
            },
            contact_information: ContactInformation {
                id: 3,
                address: "Old road 2".to_string(),
                postal_code: None,
                postal_city: None,
                phone: None,
                email: None,
            },
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(anna().validate().is_ok());
    }

    #[test]
    fn test_deserializes_flat_body() {
        let body = r#"{
            "first_name": "Anna", "family_name": "Svensson", "gender": "F",
            "id_number": "199001011234", "address": "Mainst 1", "postal_code": "12345",
            "postal_city": "Stockholm", "phone": "0701234567", "email": "a@x.se"
        }"#;
        let req: LifterRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.gender, Gender::F);
        assert_eq!(req.postal_city, "Stockholm");
    }

    #[test]
    fn test_rejects_unknown_gender() {
        let body = r#"{
            "first_name": "Anna", "family_name": "Svensson", "gender": "X",
            "id_number": "1", "address": "a", "postal_code": "1",
            "postal_city": "c", "phone": "p", "email": "e"
        }"#;
        assert!(serde_json::from_str::<LifterRequest>(body).is_err());
    }

    #[test]
    fn test_column_limits_are_enforced() {
        let mut req = anna();
        req.postal_code = "123456".to_string();
        req.id_number = "1234567890123".to_string();

        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("postal_code"));
        assert!(fields.contains_key("id_number"));
        assert!(!fields.contains_key("first_name"));
    }

    #[test]
    fn test_empty_names_are_rejected() {
        let mut req = anna();
        req.first_name = String::new();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_apply_to_overwrites_both_records() {
        let mut record = stored();
        anna().apply_to(&mut record);

        assert_eq!(record.lifter.id, 7);
        assert_eq!(record.lifter.first_name, "Anna");
        assert_eq!(record.lifter.gender, Gender::F);
        assert_eq!(record.lifter.contact_information_id, 3);
        assert_eq!(record.contact_information.id, 3);
        assert_eq!(record.contact_information.address, "Mainst 1");
        assert_eq!(record.contact_information.email.as_deref(), Some("a@x.se"));
    }

    #[test]
    fn test_response_embeds_contact_information() {
        let response = LifterResponse::from(stored());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["gender"], "M");
        assert_eq!(json["contact_information"]["address"], "Old road 2");
        assert!(json["contact_information"]["email"].is_null());
    }
}
