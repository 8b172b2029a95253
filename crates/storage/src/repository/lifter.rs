use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};

use crate::dto::lifter::LifterRequest;
use crate::error::{Result, StorageError};
use crate::models::{ContactInformation, Gender, Lifter, LifterWithContact};

const SELECT_LIFTER_WITH_CONTACT: &str = r#"
    SELECT l.id, l.first_name, l.family_name, l.contact_information_id, l.gender,
           l.id_number, l.created_at,
           c.address, c.postal_code, c.postal_city, c.phone, c.email
    FROM lifters l
    JOIN contact_information c ON c.id = l.contact_information_id
"#;

#[derive(FromRow)]
struct LifterRow {
    id: i32,
    first_name: String,
    family_name: String,
    contact_information_id: i32,
    gender: Gender,
    id_number: String,
    created_at: NaiveDateTime,
    address: String,
    postal_code: Option<String>,
    postal_city: Option<String>,
    phone: Option<String>,
    email: Option<String>,
}

impl From<LifterRow> for LifterWithContact {
    fn from(row: LifterRow) -> Self {
        Self {
            lifter: Lifter {
                id: row.id,
                first_name: row.first_name,
                family_name: row.family_name,
                contact_information_id: row.contact_information_id,
                gender: row.gender,
                id_number: row.id_number,
                created_at: row.created_at,
            },
            contact_information: ContactInformation {
                id: row.contact_information_id,
                address: row.address,
                postal_code: row.postal_code,
                postal_city: row.postal_city,
                phone: row.phone,
                email: row.email,
            },
        }
    }
}

pub struct LifterRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> LifterRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all lifters
    pub async fn list(&self) -> Result<Vec<LifterWithContact>> {
        let rows = sqlx::query_as::<_, LifterRow>(&format!(
            "{SELECT_LIFTER_WITH_CONTACT} ORDER BY l.id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(LifterWithContact::from).collect())
    }

    /// Find lifter by ID together with its contact information
    pub async fn find_by_id(&self, id: i32) -> Result<LifterWithContact> {
        let row = sqlx::query_as::<_, LifterRow>(&format!(
            "{SELECT_LIFTER_WITH_CONTACT} WHERE l.id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(row.into())
    }

    /// Create the contact information, then the lifter referencing it.
    ///
    /// The two inserts are not wrapped in a transaction: when the lifter insert
    /// fails, the contact information row stays behind.
    pub async fn create(&self, req: &LifterRequest) -> Result<LifterWithContact> {
        let contact_information = sqlx::query_as::<_, ContactInformation>(
            r#"
            INSERT INTO contact_information (address, postal_code, postal_city, phone, email)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, address, postal_code, postal_city, phone, email
            "#,
        )
        .bind(&req.address)
        .bind(&req.postal_code)
        .bind(&req.postal_city)
        .bind(&req.phone)
        .bind(&req.email)
        .fetch_one(self.pool)
        .await?;

        let lifter = sqlx::query_as::<_, Lifter>(
            r#"
            INSERT INTO lifters (first_name, family_name, gender, id_number, contact_information_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, first_name, family_name, contact_information_id, gender,
                      id_number, created_at
            "#,
        )
        .bind(&req.first_name)
        .bind(&req.family_name)
        .bind(req.gender)
        .bind(&req.id_number)
        .bind(contact_information.id)
        .fetch_one(self.pool)
        .await?;

        Ok(LifterWithContact {
            lifter,
            contact_information,
        })
    }

    /// Replace every field of a lifter and its contact information
    pub async fn update(&self, id: i32, req: &LifterRequest) -> Result<LifterWithContact> {
        let mut record = self.find_by_id(id).await?;
        req.apply_to(&mut record);
        self.persist(&record).await?;

        Ok(record)
    }

    /// Write both halves of `record` in one transaction.
    ///
    /// Either both rows are updated or neither is: any error drops the
    /// transaction before commit, which rolls it back.
    pub async fn persist(&self, record: &LifterWithContact) -> Result<()> {
        let lifter = &record.lifter;
        let contact = &record.contact_information;

        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE lifters
            SET first_name = $2,
                family_name = $3,
                gender = $4,
                id_number = $5
            WHERE id = $1
            "#,
        )
        .bind(lifter.id)
        .bind(&lifter.first_name)
        .bind(&lifter.family_name)
        .bind(lifter.gender)
        .bind(&lifter.id_number)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        sqlx::query(
            r#"
            UPDATE contact_information
            SET address = $2,
                postal_code = $3,
                postal_city = $4,
                phone = $5,
                email = $6
            WHERE id = $1
            "#,
        )
        .bind(contact.id)
        .bind(&contact.address)
        .bind(&contact.postal_code)
        .bind(&contact.postal_city)
        .bind(&contact.phone)
        .bind(&contact.email)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(lifter_id = lifter.id, "Lifter and contact information updated");

        Ok(())
    }

    /// Delete a lifter by ID. Its contact information is left in place.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM lifters WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
