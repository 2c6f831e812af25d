use async_graphql::{Context, ErrorExtensions, Object, Result};
use sqlx::SqlitePool;
use crate::graphql::error::ApiError;
use crate::models::user::UserType;
use crate::routes::buscar::buscar_usuario;
use crate::routes::listar::listar_usuarios;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Todos os usuários cadastrados.
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<UserType>> {
        let pool = ctx.data::<SqlitePool>()?;
        listar(pool).await.map_err(|e| e.extend())
    }

    /// Usuário pelo id, ou `null` se não existir.
    async fn user(&self, ctx: &Context<'_>, id: i64) -> Result<Option<UserType>> {
        let pool = ctx.data::<SqlitePool>()?;
        buscar(pool, id).await.map_err(|e| e.extend())
    }
}

async fn listar(pool: &SqlitePool) -> Result<Vec<UserType>, ApiError> {
    let mut tx = pool.begin().await?;
    let usuarios = listar_usuarios(&mut tx).await?;
    tx.commit().await?;
    Ok(usuarios.into_iter().map(UserType::from).collect())
}

async fn buscar(pool: &SqlitePool, id: i64) -> Result<Option<UserType>, ApiError> {
    let mut tx = pool.begin().await?;
    let usuario = buscar_usuario(&mut tx, id).await?;
    tx.commit().await?;
    Ok(usuario.map(UserType::from))
}
