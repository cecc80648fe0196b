use sea_orm::entity::prelude::*;

use crate::contract::model::Automobile;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "automobiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_name = "model_year")]
    pub year: i32,
    pub make: String,
    pub model: String,
    pub color: Option<String>,
    #[sea_orm(column_name = "owner_name")]
    pub owner: Option<String>,
    pub purchase_date: Option<Date>,
    #[sea_orm(unique)]
    pub vin: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Automobile {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            year: m.year,
            make: m.make,
            model: m.model,
            color: m.color,
            owner: m.owner,
            purchase_date: m.purchase_date,
            vin: m.vin,
        }
    }
}
