use async_graphql::*;

use crate::errors::ToGraphQLError;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::{Consent, User};

pub struct Query;

#[Object]
impl Query {
    /// Get a user by id
    async fn user(&self, ctx: &Context<'_>, id: String) -> Result<Option<User>> {
        let context = ctx.data::<GraphQLContext>()?;
        let user = context
            .consent_service
            .get_user(&id)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(user.map(User::from))
    }

    /// Get all users, oldest first
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let context = ctx.data::<GraphQLContext>()?;
        let users = context
            .consent_service
            .list_users()
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(users.into_iter().map(User::from).collect())
    }

    /// The consent catalogue, in creation order
    async fn consents(&self, ctx: &Context<'_>) -> Result<Vec<Consent>> {
        let context = ctx.data::<GraphQLContext>()?;
        let consents = context
            .catalog_service
            .list_consents()
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(consents.into_iter().map(Consent::from).collect())
    }
}
