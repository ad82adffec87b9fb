//! PostgreSQL store repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::store::{Store, StoreFilter, StoreId, StoreRepository};
use crate::domain::user::UserId;
use crate::domain::DomainError;

const STORE_COLUMNS: &str = "id, name, address, owner_id, aggregate_rating, created_at, updated_at";

/// PostgreSQL implementation of StoreRepository
///
/// Rating rows carry an `ON DELETE CASCADE` foreign key to stores, so
/// deleting a store row removes its ratings in the same statement.
#[derive(Debug, Clone)]
pub struct PostgresStoreRepository {
    pool: PgPool,
}

impl PostgresStoreRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreRepository for PostgresStoreRepository {
    async fn get(&self, id: &StoreId) -> Result<Option<Store>, DomainError> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM stores WHERE id = $1",
            STORE_COLUMNS
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get store: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_store(&row)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, store: Store) -> Result<Store, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO stores (id, name, address, owner_id, aggregate_rating, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(store.id().as_str())
        .bind(store.name())
        .bind(store.address())
        .bind(store.owner_id().as_str())
        .bind(store.aggregate_rating())
        .bind(store.created_at())
        .bind(store.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            let msg = e.to_string();

            if msg.contains("duplicate key") || msg.contains("unique constraint") {
                DomainError::conflict(format!(
                    "Store with ID '{}' already exists",
                    store.id().as_str()
                ))
            } else {
                DomainError::storage(format!("Failed to create store: {}", e))
            }
        })?;

        Ok(store)
    }

    async fn update(&self, store: &Store) -> Result<Store, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE stores
            SET name = $2, address = $3, updated_at = $4
            WHERE id = $1
            "#,
        )
        .bind(store.id().as_str())
        .bind(store.name())
        .bind(store.address())
        .bind(store.updated_at())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update store: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "Store '{}' not found",
                store.id().as_str()
            )));
        }

        Ok(store.clone())
    }

    async fn delete(&self, id: &StoreId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM stores WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete store: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, filter: &StoreFilter) -> Result<Vec<Store>, DomainError> {
        let mut sql = format!("SELECT {} FROM stores", STORE_COLUMNS);

        if filter.search.is_some() {
            sql.push_str(" WHERE (name ILIKE $1 OR address ILIKE $1)");
        }
        sql.push_str(" ORDER BY created_at");

        let mut query = sqlx::query(&sql);

        if let Some(search) = &filter.search {
            query = query.bind(format!("%{}%", search));
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list stores: {}", e)))?;

        let mut stores = Vec::with_capacity(rows.len());

        for row in rows {
            stores.push(row_to_store(&row)?);
        }

        Ok(stores)
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Store>, DomainError> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM stores WHERE owner_id = $1 ORDER BY created_at",
            STORE_COLUMNS
        ))
        .bind(owner_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list stores by owner: {}", e)))?;

        let mut stores = Vec::with_capacity(rows.len());

        for row in rows {
            stores.push(row_to_store(&row)?);
        }

        Ok(stores)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stores")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count stores: {}", e)))?;

        Ok(count as u64)
    }
}

pub(crate) fn row_to_store(row: &sqlx::postgres::PgRow) -> Result<Store, DomainError> {
    let id: String = row.get("id");
    let name: String = row.get("name");
    let address: String = row.get("address");
    let owner_id: String = row.get("owner_id");
    let aggregate_rating: Option<f64> = row.get("aggregate_rating");
    let created_at: chrono::DateTime<chrono::Utc> = row.get("created_at");
    let updated_at: chrono::DateTime<chrono::Utc> = row.get("updated_at");

    let id = StoreId::new(&id)
        .map_err(|e| DomainError::storage(format!("Invalid store ID in database: {}", e)))?;
    let owner_id = UserId::new(&owner_id)
        .map_err(|e| DomainError::storage(format!("Invalid owner ID in database: {}", e)))?;

    Ok(Store::restore(
        id,
        name,
        address,
        owner_id,
        aggregate_rating,
        created_at,
        updated_at,
    ))
}
