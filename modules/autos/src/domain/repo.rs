use crate::contract::model::{Automobile, NewAutomobile};
use async_trait::async_trait;

/// Port for the domain layer: the persistence operations the service needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait AutosRepository: Send + Sync {
    /// All records, ordered by generated id.
    async fn find_all(&self) -> anyhow::Result<Vec<Automobile>>;
    /// Load a record by its generated id.
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Automobile>>;
    /// Load a record by VIN.
    async fn find_by_vin(&self, vin: &str) -> anyhow::Result<Option<Automobile>>;
    /// Records whose color contains `color` AND whose make contains `make`.
    /// A `None` criterion matches everything. `%` and `_` match literally;
    /// letter case follows the store's `LIKE` (ASCII-insensitive on SQLite).
    async fn find_by_filter(
        &self,
        color: Option<&str>,
        make: Option<&str>,
    ) -> anyhow::Result<Vec<Automobile>>;
    /// Check uniqueness by VIN.
    async fn vin_exists(&self, vin: &str) -> anyhow::Result<bool>;
    /// Insert a new record; the store assigns the id. A VIN collision is
    /// reported as a `DomainError::VinAlreadyExists` carried by the error.
    async fn insert(&self, auto: NewAutomobile) -> anyhow::Result<Automobile>;
    /// Update an existing record (by primary key in `auto.id`).
    async fn update(&self, auto: Automobile) -> anyhow::Result<()>;
    /// Delete by VIN. Returns true if a row was deleted.
    async fn delete_by_vin(&self, vin: &str) -> anyhow::Result<bool>;
}
