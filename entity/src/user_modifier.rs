use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_modifier")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub modifier_name: String,
    /// Cycle the modifier was applied in.
    pub creation: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
