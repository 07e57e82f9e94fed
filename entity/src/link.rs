use sea_orm::entity::prelude::*;

/// A scheduled route flown by an airline between two airports.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "link")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub airline: i32,
    pub from_airport: i32,
    pub to_airport: i32,
    pub distance: i32,
    /// Total seats offered per cycle.
    pub capacity: i32,
    pub frequency: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
