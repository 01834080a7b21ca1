use async_graphql::*;

use crate::errors::{ConsentResult, ToGraphQLError};
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::UserPayload;
use crate::user_record::UserRecord;

#[derive(Default)]
pub struct ConsentMutation;

fn into_payload(result: ConsentResult<UserRecord>) -> Result<UserPayload> {
    result
        .map(UserPayload::from)
        .map_err(|e| e.to_graphql_error())
}

#[Object]
impl ConsentMutation {
    /// Append organization ids to the user's consent list
    async fn add_consent_orgs(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        consent_ids: Vec<i32>,
    ) -> Result<UserPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        into_payload(
            context
                .consent_service
                .add_consent_orgs(&user_id, &consent_ids)
                .await,
        )
    }

    /// Remove organization ids; fails without saving if any id is absent
    async fn revoke_consent_orgs(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        consent_ids: Vec<i32>,
    ) -> Result<UserPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        into_payload(
            context
                .consent_service
                .revoke_consent_orgs(&user_id, &consent_ids)
                .await,
        )
    }

    async fn add_consent_purposes(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        consent_ids: Vec<String>,
    ) -> Result<UserPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        into_payload(
            context
                .consent_service
                .add_consent_purposes(&user_id, &consent_ids)
                .await,
        )
    }

    async fn revoke_consent_purposes(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        consent_ids: Vec<String>,
    ) -> Result<UserPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        into_payload(
            context
                .consent_service
                .revoke_consent_purposes(&user_id, &consent_ids)
                .await,
        )
    }

    /// Append health provider organization codes
    async fn add_consent_hpos(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        consent_ids: Vec<String>,
    ) -> Result<UserPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        into_payload(
            context
                .consent_service
                .add_consent_hpos(&user_id, &consent_ids)
                .await,
        )
    }

    async fn revoke_consent_hpos(
        &self,
        ctx: &Context<'_>,
        user_id: String,
        consent_ids: Vec<String>,
    ) -> Result<UserPayload> {
        let context = ctx.data::<GraphQLContext>()?;
        into_payload(
            context
                .consent_service
                .revoke_consent_hpos(&user_id, &consent_ids)
                .await,
        )
    }
}
