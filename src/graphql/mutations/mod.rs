// Mutation root, one submodule per area
mod catalog;
mod consent;
mod user;

use async_graphql::*;

pub use catalog::CatalogMutation;
pub use consent::ConsentMutation;
pub use user::UserMutation;

/// Every mutation field the schema exposes
#[derive(Default, MergedObject)]
pub struct Mutation(pub UserMutation, pub ConsentMutation, pub CatalogMutation);
