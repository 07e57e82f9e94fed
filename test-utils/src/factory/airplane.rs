use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an airplane model with the given name and seat capacity.
pub async fn create_airplane_model(
    db: &DatabaseConnection,
    name: &str,
    capacity: i32,
) -> Result<entity::airplane_model::Model, DbErr> {
    entity::airplane_model::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        capacity: ActiveValue::Set(capacity),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates an airplane owned by `owner` with the given condition.
pub async fn create_airplane(
    db: &DatabaseConnection,
    owner: i32,
    model: i32,
    condition: f64,
) -> Result<entity::airplane::Model, DbErr> {
    entity::airplane::ActiveModel {
        owner: ActiveValue::Set(owner),
        model: ActiveValue::Set(model),
        constructed_cycle: ActiveValue::Set(1),
        condition: ActiveValue::Set(condition),
        ..Default::default()
    }
    .insert(db)
    .await
}
