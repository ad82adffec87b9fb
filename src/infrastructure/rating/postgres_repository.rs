//! PostgreSQL rating repository and transaction

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Row, Transaction};

use crate::domain::rating::{Rating, RatingId, RatingRepository, RatingTxn, RatingValue};
use crate::domain::store::StoreId;
use crate::domain::user::UserId;
use crate::domain::DomainError;

const RATING_COLUMNS: &str = "id, user_id, store_id, value, created_at, updated_at";

/// PostgreSQL implementation of RatingRepository
#[derive(Debug, Clone)]
pub struct PostgresRatingRepository {
    pool: PgPool,
}

impl PostgresRatingRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RatingRepository for PostgresRatingRepository {
    async fn get(
        &self,
        user_id: &UserId,
        store_id: &StoreId,
    ) -> Result<Option<Rating>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM ratings WHERE user_id = $1 AND store_id = $2",
            RATING_COLUMNS
        ))
        .bind(user_id.as_str())
        .bind(store_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get rating: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_rating(&row)?)),
            None => Ok(None),
        }
    }

    async fn list_for_store(&self, store_id: &StoreId) -> Result<Vec<Rating>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM ratings WHERE store_id = $1 ORDER BY created_at",
            RATING_COLUMNS
        ))
        .bind(store_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list ratings: {}", e)))?;

        let mut ratings = Vec::with_capacity(rows.len());

        for row in rows {
            ratings.push(row_to_rating(&row)?);
        }

        Ok(ratings)
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Rating>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM ratings WHERE user_id = $1 ORDER BY created_at",
            RATING_COLUMNS
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list ratings by user: {}", e)))?;

        let mut ratings = Vec::with_capacity(rows.len());

        for row in rows {
            ratings.push(row_to_rating(&row)?);
        }

        Ok(ratings)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ratings")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count ratings: {}", e)))?;

        Ok(count as u64)
    }

    async fn begin(&self, store_id: &StoreId) -> Result<Box<dyn RatingTxn>, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to begin transaction: {}", e)))?;

        // Row lock on the store serializes concurrent submissions for it and
        // doubles as the existence check.
        let store_row = sqlx::query("SELECT id FROM stores WHERE id = $1 FOR UPDATE")
            .bind(store_id.as_str())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to lock store: {}", e)))?;

        if store_row.is_none() {
            return Err(DomainError::not_found(format!(
                "Store '{}' not found",
                store_id.as_str()
            )));
        }

        Ok(Box::new(PostgresRatingTxn {
            tx,
            store_id: store_id.clone(),
        }))
    }
}

/// Transaction over one store's ratings.
///
/// Wraps a database transaction holding a row lock on the store; dropping it
/// without commit rolls everything back (sqlx rollback-on-drop).
struct PostgresRatingTxn {
    tx: Transaction<'static, Postgres>,
    store_id: StoreId,
}

#[async_trait]
impl RatingTxn for PostgresRatingTxn {
    async fn existing(&mut self, user_id: &UserId) -> Result<Option<Rating>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM ratings WHERE user_id = $1 AND store_id = $2",
            RATING_COLUMNS
        ))
        .bind(user_id.as_str())
        .bind(self.store_id.as_str())
        .fetch_optional(&mut *self.tx)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get rating: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_rating(&row)?)),
            None => Ok(None),
        }
    }

    async fn save(&mut self, rating: &Rating) -> Result<(), DomainError> {
        if rating.store_id() != &self.store_id {
            return Err(DomainError::internal(format!(
                "Rating for store '{}' saved in a transaction scoped to store '{}'",
                rating.store_id().as_str(),
                self.store_id.as_str()
            )));
        }

        sqlx::query(
            r#"
            INSERT INTO ratings (id, user_id, store_id, value, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id, store_id) DO UPDATE SET
                value = EXCLUDED.value,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(rating.id().as_str())
        .bind(rating.user_id().as_str())
        .bind(rating.store_id().as_str())
        .bind(rating.value().get())
        .bind(rating.created_at())
        .bind(rating.updated_at())
        .execute(&mut *self.tx)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!(
                    "User '{}' already rated store '{}'",
                    rating.user_id().as_str(),
                    rating.store_id().as_str()
                ))
            } else {
                DomainError::storage(format!("Failed to save rating: {}", e))
            }
        })?;

        Ok(())
    }

    async fn recompute_store_aggregate(&mut self) -> Result<Option<f64>, DomainError> {
        let aggregate: Option<f64> =
            sqlx::query_scalar("SELECT AVG(value)::float8 FROM ratings WHERE store_id = $1")
                .bind(self.store_id.as_str())
                .fetch_one(&mut *self.tx)
                .await
                .map_err(|e| {
                    DomainError::storage(format!("Failed to compute aggregate: {}", e))
                })?;

        sqlx::query("UPDATE stores SET aggregate_rating = $2, updated_at = NOW() WHERE id = $1")
            .bind(self.store_id.as_str())
            .bind(aggregate)
            .execute(&mut *self.tx)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to store aggregate: {}", e)))?;

        Ok(aggregate)
    }

    async fn commit(self: Box<Self>) -> Result<(), DomainError> {
        self.tx
            .commit()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to commit transaction: {}", e)))
    }
}

fn row_to_rating(row: &sqlx::postgres::PgRow) -> Result<Rating, DomainError> {
    let id: String = row.get("id");
    let user_id: String = row.get("user_id");
    let store_id: String = row.get("store_id");
    let value: i16 = row.get("value");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

    let id = RatingId::new(&id)
        .map_err(|e| DomainError::storage(format!("Invalid rating ID in database: {}", e)))?;
    let user_id = UserId::new(&user_id)
        .map_err(|e| DomainError::storage(format!("Invalid user ID in database: {}", e)))?;
    let store_id = StoreId::new(&store_id)
        .map_err(|e| DomainError::storage(format!("Invalid store ID in database: {}", e)))?;
    let value = RatingValue::new(value)
        .map_err(|e| DomainError::storage(format!("Invalid rating value in database: {}", e)))?;

    Ok(Rating::restore(
        id, user_id, store_id, value, created_at, updated_at,
    ))
}
