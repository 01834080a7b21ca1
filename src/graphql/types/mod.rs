pub mod consent;
pub mod user;

pub use consent::*;
pub use user::*;
