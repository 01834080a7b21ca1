use anyhow::{anyhow, Result};
use axum::{routing::get, Router};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

#[cfg(feature = "graphql")]
use crate::graphql::{build_schema, GraphQLContext, GraphQLSchema};
#[cfg(feature = "graphql")]
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
#[cfg(feature = "graphql")]
use axum::extract::State;

use super::handlers::health;

#[derive(Clone)]
pub struct AppState {
    #[cfg(feature = "graphql")]
    pub graphql_schema: GraphQLSchema,
}

pub async fn create_app(db: DatabaseConnection, cors_origin: Option<&str>) -> Result<Router> {
    #[cfg(feature = "graphql")]
    let state = AppState {
        graphql_schema: build_schema(GraphQLContext::new(db)),
    };
    #[cfg(not(feature = "graphql"))]
    let state = {
        drop(db);
        AppState {}
    };

    let methods = [
        axum::http::Method::GET,
        axum::http::Method::POST,
        axum::http::Method::OPTIONS,
    ];
    let cors = match cors_origin {
        Some("*") | None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any),
        Some(origin) => CorsLayer::new()
            .allow_origin(
                origin
                    .parse::<axum::http::HeaderValue>()
                    .map_err(|e| anyhow!("Invalid CORS origin: {}", e))?,
            )
            .allow_methods(methods)
            .allow_headers(Any),
    };

    let mut app = Router::new().route("/health", get(health::health_check));

    #[cfg(feature = "graphql")]
    {
        app = app.route(
            "/graphql",
            get(graphql_playground)
                .post(graphql_handler)
                .options(|| async { axum::http::StatusCode::OK }),
        );
    }

    let app = app
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state);

    Ok(app)
}

#[cfg(feature = "graphql")]
async fn graphql_handler(
    State(state): State<AppState>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    tracing::debug!("GraphQL request received");
    let response = state.graphql_schema.execute(request.into_inner()).await;
    if response.is_err() {
        tracing::debug!("GraphQL request completed with {} errors", response.errors.len());
    }
    response.into()
}

#[cfg(feature = "graphql")]
async fn graphql_playground() -> impl axum::response::IntoResponse {
    axum::response::Html(async_graphql::http::playground_source(
        async_graphql::http::GraphQLPlaygroundConfig::new("/graphql"),
    ))
}
