//! Factory methods for creating game rows in tests.
//!
//! Each factory inserts a row with sensible defaults so tests only spell out the fields
//! they assert on. Builders are provided for the tables whose fields drive dashboard
//! logic (users, airlines, links); the remaining tables get plain `create_*` functions.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//! let bot = factory::airline::AirlineFactory::new(&db)
//!     .bot()
//!     .service_quality(85.0)
//!     .build()
//!     .await?;
//! let (from, to, link) = factory::helpers::create_route_for_airline(&db, bot.id).await?;
//! ```

pub mod airline;
pub mod airplane;
pub mod airport;
pub mod helpers;
pub mod link;
pub mod log;
pub mod user;

pub use airline::{create_airline, create_airline_base, create_bot_airline};
pub use airplane::{create_airplane, create_airplane_model};
pub use airport::create_airport;
pub use link::{create_link, create_link_consumption};
pub use log::create_log;
pub use user::{create_user, create_user_airline, create_user_ip};
