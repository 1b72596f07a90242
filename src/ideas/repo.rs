use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqlitePool};
use time::OffsetDateTime;

/// Lifecycle stage of an idea. Stored as TEXT under the display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum IdeaStatus {
    Concept,
    #[serde(rename = "In Progress")]
    #[sqlx(rename = "In Progress")]
    InProgress,
    Completed,
    #[serde(rename = "On Hold")]
    #[sqlx(rename = "On Hold")]
    OnHold,
}

impl IdeaStatus {
    pub const ALL: [IdeaStatus; 4] = [
        IdeaStatus::Concept,
        IdeaStatus::InProgress,
        IdeaStatus::Completed,
        IdeaStatus::OnHold,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IdeaStatus::Concept => "Concept",
            IdeaStatus::InProgress => "In Progress",
            IdeaStatus::Completed => "Completed",
            IdeaStatus::OnHold => "On Hold",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.as_str() == s)
    }

    /// Allowed values in enumeration order, comma-joined for error messages.
    pub fn allowed_list() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: IdeaStatus,
    #[sqlx(rename = "userId")]
    pub user_id: Option<i64>,
    #[sqlx(rename = "createdAt")]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Idea {
    /// Insert a new idea. Status falls back to Concept when the caller did
    /// not supply one.
    pub async fn create(
        db: &SqlitePool,
        title: &str,
        description: Option<&str>,
        status: Option<IdeaStatus>,
        user_id: Option<i64>,
    ) -> anyhow::Result<Idea> {
        let idea = sqlx::query_as::<_, Idea>(
            r#"
            INSERT INTO ideas (title, description, status, userId, createdAt)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, title, description, status, userId, createdAt
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(status.unwrap_or(IdeaStatus::Concept))
        .bind(user_id)
        .bind(OffsetDateTime::now_utc())
        .fetch_one(db)
        .await?;
        Ok(idea)
    }

    /// Every idea, in storage order.
    pub async fn find_all(db: &SqlitePool) -> anyhow::Result<Vec<Idea>> {
        let rows = sqlx::query_as::<_, Idea>(
            r#"
            SELECT id, title, description, status, userId, createdAt
            FROM ideas
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &SqlitePool, id: i64) -> anyhow::Result<Option<Idea>> {
        let idea = sqlx::query_as::<_, Idea>(
            r#"
            SELECT id, title, description, status, userId, createdAt
            FROM ideas
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(idea)
    }

    /// Replace the title and, where supplied, description and status. Omitted
    /// fields keep their stored value. Returns the updated row, or None when
    /// no row matched the id.
    pub async fn update(
        db: &SqlitePool,
        id: i64,
        title: &str,
        description: Option<&str>,
        status: Option<IdeaStatus>,
    ) -> anyhow::Result<Option<Idea>> {
        let affected = sqlx::query(
            r#"
            UPDATE ideas
            SET title = ?,
                description = COALESCE(?, description),
                status = COALESCE(?, status)
            WHERE id = ?
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(status)
        .bind(id)
        .execute(db)
        .await?
        .rows_affected();

        if affected == 0 {
            return Ok(None);
        }
        Self::find_by_id(db, id).await
    }

    /// Remove the row. False means nothing matched the id.
    pub async fn delete(db: &SqlitePool, id: i64) -> anyhow::Result<bool> {
        let affected = sqlx::query("DELETE FROM ideas WHERE id = ?")
            .bind(id)
            .execute(db)
            .await?
            .rows_affected();
        Ok(affected > 0)
    }
}
