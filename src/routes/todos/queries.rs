use chrono::Utc;
use sqlx::{Result, SqlitePool};
use uuid::Uuid;
use super::model::Todo;

pub async fn create_todo(
    pool: &SqlitePool,
    title: &str,
    description: &str,
    completed: bool,
) -> Result<Todo> {
    let now = Utc::now();

    let rec = sqlx::query_as::<_, Todo>(
        r#"
        INSERT INTO todos (id, title, description, completed, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, title, description, completed, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(title)
    .bind(description)
    .bind(completed)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(rec)
}

pub async fn list_todos(pool: &SqlitePool) -> Result<Vec<Todo>> {
    let rec = sqlx::query_as::<_, Todo>(
        r#"
        SELECT id, title, description, completed, created_at, updated_at
        FROM todos
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rec)
}

pub async fn get_todo(pool: &SqlitePool, id: Uuid) -> Result<Option<Todo>> {
    let rec = sqlx::query_as::<_, Todo>(
        r#"
        SELECT id, title, description, completed, created_at, updated_at
        FROM todos
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(rec)
}

pub async fn update_todo(
    pool: &SqlitePool,
    id: Uuid,
    title: &str,
    description: &str,
    completed: bool,
) -> Result<Option<Todo>> {
    let rec = sqlx::query_as::<_, Todo>(
        r#"
        UPDATE todos
        SET
            title = ?,
            description = ?,
            completed = ?,
            updated_at = ?
        WHERE id = ?
        RETURNING id, title, description, completed, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(completed)
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(rec)
}

pub async fn toggle_todo(pool: &SqlitePool, id: Uuid) -> Result<Option<Todo>> {
    let rec = sqlx::query_as::<_, Todo>(
        r#"
        UPDATE todos
        SET completed = NOT completed, updated_at = ?
        WHERE id = ?
        RETURNING id, title, description, completed, created_at, updated_at
        "#,
    )
    .bind(Utc::now())
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(rec)
}

pub async fn delete_todo(pool: &SqlitePool, id: Uuid) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM todos
        WHERE id = ?
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
