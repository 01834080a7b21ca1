pub mod consent_record;
pub mod database;
pub mod errors;
pub mod server;
pub mod services;
pub mod user_record;

#[cfg(feature = "graphql")]
pub mod graphql;
