//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates two airports and a link between them owned by `airline_id`.
///
/// # Arguments
/// - `db` - Database connection
/// - `airline_id` - Airline that flies the route
///
/// # Returns
/// - `Ok((from, to, link))` - Created airports and link
/// - `Err(DbErr)` - Database error during creation
pub async fn create_route_for_airline(
    db: &DatabaseConnection,
    airline_id: i32,
) -> Result<
    (
        entity::airport::Model,
        entity::airport::Model,
        entity::link::Model,
    ),
    DbErr,
> {
    let from = crate::factory::airport::create_airport(db).await?;
    let to = crate::factory::airport::create_airport(db).await?;
    let link = crate::factory::link::create_link(db, airline_id, from.id, to.id).await?;

    Ok((from, to, link))
}
