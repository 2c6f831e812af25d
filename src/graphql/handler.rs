use async_graphql::http::GraphiQLSource;
use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::Json;
use crate::graphql::UsuariosSchema;

pub async fn graphql_handler(
    State(schema): State<UsuariosSchema>,
    Json(request): Json<async_graphql::Request>,
) -> Json<async_graphql::Response> {
    Json(schema.execute(request).await)
}

pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}
