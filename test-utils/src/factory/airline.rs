//! Airline factory creating `airline` rows together with their `airline_info` row.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Airline type the game assigns to computer-controlled airlines.
pub const BOT_AIRLINE_TYPE: i32 = 2;

/// Factory for creating airlines with financial figures.
///
/// # Example
///
/// ```rust,ignore
/// let bot = AirlineFactory::new(&db)
///     .bot()
///     .balance(1_000_000_000)
///     .build()
///     .await?;
/// ```
pub struct AirlineFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    airline_type: i32,
    balance: i64,
    reputation: f64,
    service_quality: f64,
}

impl<'a> AirlineFactory<'a> {
    /// Creates a new AirlineFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Airline {id}"`, player airline type `0`
    /// - balance: `100_000_000`, reputation: `50.0`, service quality: `50.0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Airline {}", id),
            airline_type: 0,
            balance: 100_000_000,
            reputation: 50.0,
            service_quality: 50.0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Marks the airline as a non-player (bot) airline.
    pub fn bot(mut self) -> Self {
        self.airline_type = BOT_AIRLINE_TYPE;
        self
    }

    pub fn airline_type(mut self, airline_type: i32) -> Self {
        self.airline_type = airline_type;
        self
    }

    pub fn balance(mut self, balance: i64) -> Self {
        self.balance = balance;
        self
    }

    pub fn reputation(mut self, reputation: f64) -> Self {
        self.reputation = reputation;
        self
    }

    pub fn service_quality(mut self, service_quality: f64) -> Self {
        self.service_quality = service_quality;
        self
    }

    /// Inserts the airline and its info row.
    ///
    /// # Returns
    /// - `Ok(entity::airline::Model)` - Created airline row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::airline::Model, DbErr> {
        let airline = entity::airline::ActiveModel {
            name: ActiveValue::Set(self.name),
            airline_type: ActiveValue::Set(self.airline_type),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::airline_info::ActiveModel {
            airline: ActiveValue::Set(airline.id),
            balance: ActiveValue::Set(self.balance),
            reputation: ActiveValue::Set(self.reputation),
            service_quality: ActiveValue::Set(self.service_quality),
            country_code: ActiveValue::Set(Some("US".to_string())),
        }
        .insert(self.db)
        .await?;

        Ok(airline)
    }
}

/// Creates a player airline with default values.
pub async fn create_airline(db: &DatabaseConnection) -> Result<entity::airline::Model, DbErr> {
    AirlineFactory::new(db).build().await
}

/// Creates a bot airline with default values.
pub async fn create_bot_airline(db: &DatabaseConnection) -> Result<entity::airline::Model, DbErr> {
    AirlineFactory::new(db).bot().build().await
}

/// Creates a base for `airline_id` at `airport_id`.
pub async fn create_airline_base(
    db: &DatabaseConnection,
    airline_id: i32,
    airport_id: i32,
) -> Result<entity::airline_base::Model, DbErr> {
    entity::airline_base::ActiveModel {
        airline: ActiveValue::Set(airline_id),
        airport: ActiveValue::Set(airport_id),
        scale: ActiveValue::Set(1),
        headquarter: ActiveValue::Set(false),
    }
    .insert(db)
    .await
}
