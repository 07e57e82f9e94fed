//! Link (route) and per-cycle consumption factories.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for links with adjustable capacity and frequency.
pub struct LinkFactory<'a> {
    db: &'a DatabaseConnection,
    airline: i32,
    from_airport: i32,
    to_airport: i32,
    distance: i32,
    capacity: i32,
    frequency: i32,
}

impl<'a> LinkFactory<'a> {
    /// Creates a new LinkFactory.
    ///
    /// Defaults: distance `1000`, capacity `1000`, frequency `7`.
    pub fn new(db: &'a DatabaseConnection, airline: i32, from_airport: i32, to_airport: i32) -> Self {
        Self {
            db,
            airline,
            from_airport,
            to_airport,
            distance: 1000,
            capacity: 1000,
            frequency: 7,
        }
    }

    pub fn distance(mut self, distance: i32) -> Self {
        self.distance = distance;
        self
    }

    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn frequency(mut self, frequency: i32) -> Self {
        self.frequency = frequency;
        self
    }

    pub async fn build(self) -> Result<entity::link::Model, DbErr> {
        entity::link::ActiveModel {
            airline: ActiveValue::Set(self.airline),
            from_airport: ActiveValue::Set(self.from_airport),
            to_airport: ActiveValue::Set(self.to_airport),
            distance: ActiveValue::Set(self.distance),
            capacity: ActiveValue::Set(self.capacity),
            frequency: ActiveValue::Set(self.frequency),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a link with default capacity and frequency.
pub async fn create_link(
    db: &DatabaseConnection,
    airline: i32,
    from_airport: i32,
    to_airport: i32,
) -> Result<entity::link::Model, DbErr> {
    LinkFactory::new(db, airline, from_airport, to_airport)
        .build()
        .await
}

/// Records consumption for a link in a cycle.
///
/// Revenue is derived as `sold_seats * 100` and profit as a tenth of revenue.
///
/// # Arguments
/// - `db` - Database connection
/// - `link` - Link the consumption belongs to
/// - `cycle` - Cycle number
/// - `sold_seats` - Seats sold in the cycle
/// - `capacity` - Seats offered in the cycle
pub async fn create_link_consumption(
    db: &DatabaseConnection,
    link: &entity::link::Model,
    cycle: i32,
    sold_seats: i32,
    capacity: i32,
) -> Result<entity::link_consumption::Model, DbErr> {
    let revenue = sold_seats as i64 * 100;
    entity::link_consumption::ActiveModel {
        link: ActiveValue::Set(link.id),
        cycle: ActiveValue::Set(cycle),
        airline: ActiveValue::Set(link.airline),
        sold_seats: ActiveValue::Set(sold_seats),
        capacity: ActiveValue::Set(capacity),
        revenue: ActiveValue::Set(revenue),
        profit: ActiveValue::Set(revenue / 10),
    }
    .insert(db)
    .await
}
