//! Server-side API backend and reporting logic.
//!
//! This module contains the complete backend of the admin dashboard: API endpoints,
//! reporting logic, data access and host monitoring. The backend uses Axum as the web
//! framework, SeaORM for reading the game database and `sysinfo` for host metrics.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, parameter extraction and DTO conversion
//! - **Service Layer** (`service/`) - Report assembly between controllers and the data layer
//! - **Data Layer** (`data/`) - Read-only database queries and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, parameter types and pure derivations
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, container runtime)
//! - **Startup** (`startup`) - Tracing and database initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Util** (`util/`) - Helpers shared across layers
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** extracts parameters, calls a service
//! 3. **Service** runs one or more repository reads and derives the report
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns JSON

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
