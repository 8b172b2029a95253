use sqlx::PgPool;
use storage::{
    dto::lifter::LifterRequest, error::Result, models::LifterWithContact,
    repository::lifter::LifterRepository,
};

/// List all lifters
pub async fn list_lifters(pool: &PgPool) -> Result<Vec<LifterWithContact>> {
    let repo = LifterRepository::new(pool);
    repo.list().await
}

/// Get lifter by ID
pub async fn get_lifter(pool: &PgPool, id: i32) -> Result<LifterWithContact> {
    let repo = LifterRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new lifter and its contact information
pub async fn create_lifter(pool: &PgPool, request: &LifterRequest) -> Result<LifterWithContact> {
    let repo = LifterRepository::new(pool);
    let created = repo.create(request).await?;

    tracing::info!(lifter_id = created.lifter.id, "Lifter created");
    Ok(created)
}

/// Update a lifter and its contact information atomically
pub async fn update_lifter(
    pool: &PgPool,
    id: i32,
    request: &LifterRequest,
) -> Result<LifterWithContact> {
    let repo = LifterRepository::new(pool);
    repo.update(id, request).await
}

/// Delete a lifter
pub async fn delete_lifter(pool: &PgPool, id: i32) -> Result<()> {
    let repo = LifterRepository::new(pool);
    repo.delete(id).await?;

    tracing::info!(lifter_id = id, "Lifter deleted");
    Ok(())
}
