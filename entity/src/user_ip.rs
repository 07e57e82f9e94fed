use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_ip")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub ip: String,
    pub occurrence: i32,
    pub last_update: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
