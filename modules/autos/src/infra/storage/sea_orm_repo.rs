//! SeaORM-backed repository implementation for the domain port.
//!
//! Generic over `C: ConnectionTrait`, so it works with a `DatabaseConnection`
//! or a transaction.

use anyhow::Context;
use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set, SqlErr,
};

use crate::contract::model::{Automobile, NewAutomobile};
use crate::domain::error::DomainError;
use crate::domain::repo::AutosRepository;
use crate::infra::storage::entity::{ActiveModel as AutoAM, Column, Entity as AutoEntity};

const LIKE_ESCAPE: char = '\\';

/// `LIKE` pattern matching `fragment` literally anywhere in the column.
fn contains_pattern(fragment: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(fragment.len() + 2);
    escaped.push('%');
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped.push('%');
    LikeExpr::new(escaped).escape(LIKE_ESCAPE)
}

/// SeaORM repository impl.
/// Holds a connection object; its lifetime/ownership is up to the caller.
pub struct SeaOrmAutosRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmAutosRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> AutosRepository for SeaOrmAutosRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn find_all(&self) -> anyhow::Result<Vec<Automobile>> {
        let rows = AutoEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await
            .context("find_all failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<Automobile>> {
        let found = AutoEntity::find_by_id(id)
            .one(&self.conn)
            .await
            .context("find_by_id failed")?;
        Ok(found.map(Into::into))
    }

    async fn find_by_vin(&self, vin: &str) -> anyhow::Result<Option<Automobile>> {
        let found = AutoEntity::find()
            .filter(Column::Vin.eq(vin))
            .one(&self.conn)
            .await
            .context("find_by_vin failed")?;
        Ok(found.map(Into::into))
    }

    async fn find_by_filter(
        &self,
        color: Option<&str>,
        make: Option<&str>,
    ) -> anyhow::Result<Vec<Automobile>> {
        let mut query = AutoEntity::find();
        if let Some(color) = color {
            query = query.filter(Column::Color.like(contains_pattern(color)));
        }
        if let Some(make) = make {
            query = query.filter(Column::Make.like(contains_pattern(make)));
        }

        let rows = query
            .order_by_asc(Column::Id)
            .all(&self.conn)
            .await
            .context("find_by_filter failed")?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn vin_exists(&self, vin: &str) -> anyhow::Result<bool> {
        let count = AutoEntity::find()
            .filter(Column::Vin.eq(vin))
            .count(&self.conn)
            .await
            .context("vin_exists failed")?;
        Ok(count > 0)
    }

    async fn insert(&self, auto: NewAutomobile) -> anyhow::Result<Automobile> {
        let vin = auto.vin.clone();
        let m = AutoAM {
            id: NotSet,
            year: Set(auto.year),
            make: Set(auto.make),
            model: Set(auto.model),
            color: Set(auto.color),
            owner: Set(auto.owner),
            purchase_date: Set(auto.purchase_date),
            vin: Set(auto.vin),
        };
        match m.insert(&self.conn).await {
            Ok(stored) => Ok(stored.into()),
            // lost a race against a concurrent insert of the same VIN
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(DomainError::vin_already_exists(vin).into())
            }
            Err(e) => Err(anyhow::Error::new(e).context("insert failed")),
        }
    }

    async fn update(&self, auto: Automobile) -> anyhow::Result<()> {
        let m = AutoAM {
            id: Set(auto.id),
            year: Set(auto.year),
            make: Set(auto.make),
            model: Set(auto.model),
            color: Set(auto.color),
            owner: Set(auto.owner),
            purchase_date: Set(auto.purchase_date),
            vin: Set(auto.vin),
        };
        let _ = m.update(&self.conn).await.context("update failed")?;
        Ok(())
    }

    async fn delete_by_vin(&self, vin: &str) -> anyhow::Result<bool> {
        let res = AutoEntity::delete_many()
            .filter(Column::Vin.eq(vin))
            .exec(&self.conn)
            .await
            .context("delete_by_vin failed")?;
        Ok(res.rows_affected > 0)
    }
}
