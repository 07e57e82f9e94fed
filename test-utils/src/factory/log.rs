use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a log row for `airline` in `cycle`.
pub async fn create_log(
    db: &DatabaseConnection,
    airline: i32,
    message: &str,
    cycle: i32,
) -> Result<entity::log::Model, DbErr> {
    entity::log::ActiveModel {
        airline: ActiveValue::Set(airline),
        message: ActiveValue::Set(message.to_string()),
        category: ActiveValue::Set(0),
        severity: ActiveValue::Set(1),
        cycle: ActiveValue::Set(cycle),
        ..Default::default()
    }
    .insert(db)
    .await
}
