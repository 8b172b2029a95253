//! Lifter repository behaviour against a real PostgreSQL database.
//!
//! Run with `DATABASE_URL=postgres://... cargo test -- --ignored`.

use std::collections::HashSet;

use sqlx::PgPool;
use storage::{
    dto::lifter::LifterRequest,
    error::StorageError,
    models::{ContactInformation, Gender},
    repository::{lifter::LifterRepository, table::TableRepository},
};

type TestResult = Result<(), StorageError>;

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

fn erik() -> LifterRequest {
    LifterRequest {
        first_name: "Erik".to_string(),
        family_name: "Berg".to_string(),
        gender: Gender::M,
        id_number: "198502021111".to_string(),
        address: "Storgatan 5".to_string(),
        postal_code: "41101".to_string(),
        postal_city: "Göteborg".to_string(),
        phone: "0739876543".to_string(),
        email: "erik@berg.se".to_string(),
    }
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_create_then_find_round_trip(pool: PgPool) -> TestResult {
    let repo = LifterRepository::new(&pool);

    let created = repo.create(&anna()).await?;
    let found = repo.find_by_id(created.lifter.id).await?;

    assert_eq!(found.lifter.first_name, "Anna");
    assert_eq!(found.lifter.family_name, "Svensson");
    assert_eq!(found.lifter.gender, Gender::F);
    assert_eq!(found.lifter.id_number, "199001011234");
    assert_eq!(found.lifter.created_at, created.lifter.created_at);
    assert_eq!(found.contact_information.id, created.contact_information.id);
    assert_eq!(found.contact_information.address, "Mainst 1");
    assert_eq!(found.contact_information.postal_code.as_deref(), Some("12345"));
    assert_eq!(found.contact_information.postal_city.as_deref(), Some("Stockholm"));
    assert_eq!(found.contact_information.phone.as_deref(), Some("0701234567"));
    assert_eq!(found.contact_information.email.as_deref(), Some("a@x.se"));

    Ok(())
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_find_missing_lifter_is_not_found(pool: PgPool) -> TestResult {
    let repo = LifterRepository::new(&pool);

    let err = repo.find_by_id(4242).await.unwrap_err();
    assert!(err.is_not_found());

    Ok(())
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_update_writes_lifter_and_contact(pool: PgPool) -> TestResult {
    let repo = LifterRepository::new(&pool);
    let created = repo.create(&anna()).await?;

    let updated = repo.update(created.lifter.id, &erik()).await?;
    assert_eq!(updated.lifter.id, created.lifter.id);

    let found = repo.find_by_id(created.lifter.id).await?;
    assert_eq!(found.lifter.first_name, "Erik");
    assert_eq!(found.lifter.gender, Gender::M);
    assert_eq!(found.contact_information.id, created.contact_information.id);
    assert_eq!(found.contact_information.address, "Storgatan 5");
    assert_eq!(found.contact_information.postal_city.as_deref(), Some("Göteborg"));

    Ok(())
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_update_missing_lifter_is_not_found(pool: PgPool) -> TestResult {
    let repo = LifterRepository::new(&pool);

    let err = repo.update(4242, &anna()).await.unwrap_err();
    assert!(err.is_not_found());

    Ok(())
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_persist_rolls_back_when_contact_write_fails(pool: PgPool) -> TestResult {
    let repo = LifterRepository::new(&pool);
    let created = repo.create(&anna()).await?;

    let mut record = repo.find_by_id(created.lifter.id).await?;
    record.lifter.first_name = "Changed".to_string();
    // The lifter row is written first; the contact row then overflows VARCHAR(5).
    record.contact_information.postal_code = Some("1234567".to_string());

    let err = repo.persist(&record).await.unwrap_err();
    assert_eq!(err.sql_state().as_deref(), Some("22001"));

    let found = repo.find_by_id(created.lifter.id).await?;
    assert_eq!(found.lifter.first_name, "Anna");
    assert_eq!(found.contact_information.postal_code.as_deref(), Some("12345"));

    Ok(())
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_failed_create_leaves_contact_information(pool: PgPool) -> TestResult {
    let repo = LifterRepository::new(&pool);

    let mut req = anna();
    req.id_number = "1990010112345".to_string();

    let err = repo.create(&req).await.unwrap_err();
    assert_eq!(err.sql_state().as_deref(), Some("22001"));

    assert!(repo.list().await?.is_empty());
    let contacts = TableRepository::<ContactInformation>::new(&pool).list().await?;
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].address, "Mainst 1");

    Ok(())
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_delete_keeps_contact_information(pool: PgPool) -> TestResult {
    let repo = LifterRepository::new(&pool);
    let created = repo.create(&anna()).await?;

    repo.delete(created.lifter.id).await?;

    assert!(repo.find_by_id(created.lifter.id).await.unwrap_err().is_not_found());
    let contact = TableRepository::<ContactInformation>::new(&pool)
        .find_by_id(created.contact_information.id)
        .await?;
    assert_eq!(contact.address, "Mainst 1");

    assert!(repo.delete(created.lifter.id).await.unwrap_err().is_not_found());

    Ok(())
}

#[sqlx::test]
#[ignore = "requires a PostgreSQL DATABASE_URL"]
async fn test_list_returns_lifters_not_deleted(pool: PgPool) -> TestResult {
    let repo = LifterRepository::new(&pool);

    let first = repo.create(&anna()).await?;
    let second = repo.create(&erik()).await?;
    let third = repo.create(&anna()).await?;
    repo.delete(second.lifter.id).await?;

    let listed: HashSet<i32> = repo
        .list()
        .await?
        .into_iter()
        .map(|record| record.lifter.id)
        .collect();

    assert_eq!(listed, HashSet::from([first.lifter.id, third.lifter.id]));

    Ok(())
}
