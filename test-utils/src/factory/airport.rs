use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an airport with a unique IATA-like code.
pub async fn create_airport(db: &DatabaseConnection) -> Result<entity::airport::Model, DbErr> {
    create_airport_with_size(db, 5).await
}

/// Creates an airport of the given size.
pub async fn create_airport_with_size(
    db: &DatabaseConnection,
    size: i32,
) -> Result<entity::airport::Model, DbErr> {
    let id = next_id();
    entity::airport::ActiveModel {
        iata: ActiveValue::Set(format!("A{:02}", id % 100)),
        name: ActiveValue::Set(format!("Airport {}", id)),
        country_code: ActiveValue::Set("US".to_string()),
        size: ActiveValue::Set(size),
        ..Default::default()
    }
    .insert(db)
    .await
}
