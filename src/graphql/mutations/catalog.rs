use async_graphql::*;

use crate::consent_record::NewConsent;
use crate::errors::ToGraphQLError;
use crate::graphql::context::GraphQLContext;
use crate::graphql::types::Consent;

#[derive(Default)]
pub struct CatalogMutation;

#[Object]
impl CatalogMutation {
    /// Add an entry to the consent catalogue
    async fn create_consent(
        &self,
        ctx: &Context<'_>,
        name: String,
        purpose: String,
        #[graphql(default = false)] commercial: bool,
    ) -> Result<Consent> {
        let context = ctx.data::<GraphQLContext>()?;
        let consent = context
            .catalog_service
            .create_consent(NewConsent {
                name,
                purpose,
                commercial,
            })
            .await
            .map_err(|e| e.to_graphql_error())?;

        Ok(Consent::from(consent))
    }
}
