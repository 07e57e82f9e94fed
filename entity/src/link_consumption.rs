use sea_orm::entity::prelude::*;

/// Historical passenger figures for a link in a given cycle.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "link_consumption")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub link: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub cycle: i32,
    pub airline: i32,
    pub sold_seats: i32,
    pub capacity: i32,
    pub revenue: i64,
    pub profit: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
