pub mod config;
pub mod db;
pub mod graphql;
pub mod models {
    pub mod user;
}
pub mod routes {
    pub mod criar;
    pub mod listar;
    pub mod buscar;
    pub mod editar;
    pub mod excluir;
}
pub mod utils {
    pub mod logging;
}

use axum::{
    routing::get,
    Router,
};
use sqlx::SqlitePool;
use crate::graphql::build_schema;
use crate::graphql::handler::{graphiql, graphql_handler};

/// Monta o router HTTP: `POST /graphql` executa, `GET /graphql` abre o GraphiQL.
pub fn app(pool: SqlitePool) -> Router {
    Router::new()
        .route("/graphql", get(graphiql).post(graphql_handler))
        .with_state(build_schema(pool))
}
