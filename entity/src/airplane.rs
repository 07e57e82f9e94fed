use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "airplane")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Owning airline id.
    pub owner: i32,
    /// Airplane model id.
    pub model: i32,
    pub constructed_cycle: i32,
    /// Remaining airframe condition, 0-100.
    pub condition: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
