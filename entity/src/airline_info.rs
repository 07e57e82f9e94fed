use sea_orm::entity::prelude::*;

/// Financial and operational figures of an airline, one row per airline.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "airline_info")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub airline: i32,
    pub balance: i64,
    pub reputation: f64,
    pub service_quality: f64,
    pub country_code: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
