use async_graphql::*;

use crate::errors::ToGraphQLError;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::UserPayload;
use crate::services::CreateUserInput;
use crate::user_record::UserUpdate;

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// Create a user with empty consent lists.
    ///
    /// `date_of_birth` is epoch milliseconds; it is stored as the UTC date.
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        email: String,
        first_name: String,
        last_name: String,
        date_of_birth: String,
    ) -> Result<UserPayload> {
        let context = ctx.data::<GraphQLContext>()?;

        let user = context
            .consent_service
            .create_user(CreateUserInput {
                email,
                first_name,
                last_name,
                date_of_birth,
            })
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(UserPayload::from(user))
    }

    /// Update profile fields. Omitted or empty arguments leave the field unchanged.
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: String,
        email: Option<String>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<UserPayload> {
        let context = ctx.data::<GraphQLContext>()?;

        let update = UserUpdate {
            email,
            first_name,
            last_name,
        };
        let user = context
            .consent_service
            .update_user(&id, update)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(UserPayload::from(user))
    }

    /// Delete a user, returning its last stored state
    async fn delete_user(&self, ctx: &Context<'_>, id: String) -> Result<UserPayload> {
        let context = ctx.data::<GraphQLContext>()?;

        let user = context
            .consent_service
            .delete_user(&id)
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(UserPayload::from(user))
    }
}
