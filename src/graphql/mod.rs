pub mod error;
pub mod handler;
pub mod mutation;
pub mod query;

use async_graphql::{EmptySubscription, Schema};
use sqlx::SqlitePool;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type UsuariosSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(pool: SqlitePool) -> UsuariosSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(pool)
        .finish()
}
