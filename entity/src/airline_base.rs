use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "airline_base")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub airline: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub airport: i32,
    pub scale: i32,
    pub headquarter: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
