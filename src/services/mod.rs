pub mod catalog_service;
pub mod consent_service;

pub use catalog_service::*;
pub use consent_service::*;
