use sea_orm::entity::prelude::*;

/// Game event log row. Older game deployments do not have this table.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "log")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub airline: i32,
    pub message: String,
    pub category: i32,
    pub severity: i32,
    pub cycle: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
