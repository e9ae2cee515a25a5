//! `SQLite` implementation of [`AdvertRepository`].

use std::future::Future;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use advert_app::ports::AdvertRepository;
use advert_domain::advert::{Advert, AdvertDraft, AdvertStatus};
use advert_domain::error::{AdvertError, NotFoundError};
use advert_domain::id::AdvertId;
use advert_domain::time::now;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Advert`].
struct Wrapper(Advert);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Advert> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let title: String = row.try_get("title")?;
        let description: Option<String> = row.try_get("description")?;
        let status: String = row.try_get("status")?;
        let created_at: String = row.try_get("created_at")?;

        let id = AdvertId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let status = match status.as_str() {
            "pending" => AdvertStatus::Pending,
            "confirmed" => AdvertStatus::Confirmed,
            other => {
                return Err(sqlx::Error::Decode(
                    format!("unknown advert status {other:?}").into(),
                ));
            }
        };
        let created_at = DateTime::parse_from_rfc3339(&created_at)
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?
            .with_timezone(&Utc);

        Ok(Self(Advert {
            id,
            title,
            description,
            status,
            created_at,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO adverts (id, title, description, status, created_at) VALUES (?, ?, ?, ?, ?)";
const CONFIRM: &str = "UPDATE adverts SET status = ? WHERE id = ?";
const SELECT_BY_ID: &str = "SELECT * FROM adverts WHERE id = ?";

/// `SQLite`-backed advert repository.
pub struct SqliteAdvertRepository {
    pool: SqlitePool,
}

impl SqliteAdvertRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AdvertRepository for SqliteAdvertRepository {
    fn add(&self, draft: AdvertDraft) -> impl Future<Output = Result<AdvertId, AdvertError>> + Send {
        let pool = self.pool.clone();
        async move {
            // Structural validation lives here, not in the service.
            draft.validate()?;

            let id = AdvertId::new();
            sqlx::query(INSERT)
                .bind(id.to_string())
                .bind(&draft.title)
                .bind(&draft.description)
                .bind(AdvertStatus::Pending.as_str())
                .bind(now().to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(id)
        }
    }

    fn confirm(&self, id: AdvertId) -> impl Future<Output = Result<(), AdvertError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(CONFIRM)
                .bind(AdvertStatus::Confirmed.as_str())
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError {
                    entity: "Advert",
                    id: id.to_string(),
                }
                .into());
            }

            Ok(())
        }
    }

    fn get_by_id(
        &self,
        id: AdvertId,
    ) -> impl Future<Output = Result<Option<Advert>, AdvertError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteAdvertRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteAdvertRepository::new(db.pool().clone())
    }

    fn test_draft() -> AdvertDraft {
        AdvertDraft {
            title: "Vintage bicycle".to_string(),
            description: Some("Three-speed, rides fine".to_string()),
        }
    }

    #[tokio::test]
    async fn should_add_and_retrieve_advert_when_valid() {
        let repo = setup().await;

        let id = repo.add(test_draft()).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.id, id);
        assert_eq!(fetched.title, "Vintage bicycle");
        assert_eq!(fetched.description.as_deref(), Some("Three-speed, rides fine"));
        assert_eq!(fetched.status, AdvertStatus::Pending);
    }

    #[tokio::test]
    async fn should_reject_draft_with_empty_title() {
        let repo = setup().await;
        let draft = AdvertDraft {
            title: String::new(),
            description: None,
        };

        let result = repo.add(draft).await;
        assert!(matches!(result, Err(AdvertError::Validation(_))));
    }

    #[tokio::test]
    async fn should_return_none_when_advert_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(AdvertId::new()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_mark_advert_confirmed_when_exists() {
        let repo = setup().await;
        let id = repo.add(test_draft()).await.unwrap();

        repo.confirm(id).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.status, AdvertStatus::Confirmed);
    }

    #[tokio::test]
    async fn should_return_not_found_when_confirming_missing_advert() {
        let repo = setup().await;
        let result = repo.confirm(AdvertId::new()).await;
        assert!(matches!(result, Err(AdvertError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_keep_confirmed_status_when_confirming_twice() {
        let repo = setup().await;
        let id = repo.add(test_draft()).await.unwrap();

        repo.confirm(id).await.unwrap();
        repo.confirm(id).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched.status, AdvertStatus::Confirmed);
    }

    #[tokio::test]
    async fn should_preserve_created_at_through_roundtrip() {
        let repo = setup().await;
        let before = now();
        let id = repo.add(test_draft()).await.unwrap();
        let after = now();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert!(fetched.created_at >= before - chrono::Duration::seconds(1));
        assert!(fetched.created_at <= after + chrono::Duration::seconds(1));
    }
}
