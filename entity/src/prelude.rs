pub use super::airline::Entity as Airline;
pub use super::airline_base::Entity as AirlineBase;
pub use super::airline_info::Entity as AirlineInfo;
pub use super::airplane::Entity as Airplane;
pub use super::airplane_model::Entity as AirplaneModel;
pub use super::airport::Entity as Airport;
pub use super::link::Entity as Link;
pub use super::link_consumption::Entity as LinkConsumption;
pub use super::log::Entity as Log;
pub use super::user::Entity as User;
pub use super::user_airline::Entity as UserAirline;
pub use super::user_ip::Entity as UserIp;
pub use super::user_modifier::Entity as UserModifier;
pub use super::user_uuid::Entity as UserUuid;
