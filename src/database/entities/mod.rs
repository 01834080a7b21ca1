pub mod consents;
pub mod users;

pub use consents::Entity as Consents;
pub use users::Entity as Users;
