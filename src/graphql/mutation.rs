use async_graphql::{Context, ErrorExtensions, Object, Result};
use sqlx::SqlitePool;
use crate::graphql::error::ApiError;
use crate::models::user::{NovoUsuario, UserType};
use crate::routes::criar::criar_usuario;
use crate::routes::editar::editar_usuario;
use crate::routes::excluir::excluir_usuario;

pub struct MutationRoot;

// Cada resolver abre a própria transação. Se ela não chegar ao commit,
// o drop faz rollback e devolve a conexão ao pool.
#[Object]
impl MutationRoot {
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        nome: String,
        email: String,
        senha: String,
    ) -> Result<UserType> {
        let pool = ctx.data::<SqlitePool>()?;
        criar(pool, NovoUsuario { nome, email, senha })
            .await
            .map_err(|e| e.extend())
    }

    /// Falha com `NOT_FOUND` se o id não existir.
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: i64,
        nome: String,
        email: String,
        senha: String,
    ) -> Result<UserType> {
        let pool = ctx.data::<SqlitePool>()?;
        editar(pool, id, NovoUsuario { nome, email, senha })
            .await
            .map_err(|e| e.extend())
    }

    /// Falha com `NOT_FOUND` se o id não existir.
    async fn delete_user(&self, ctx: &Context<'_>, id: i64) -> Result<UserType> {
        let pool = ctx.data::<SqlitePool>()?;
        excluir(pool, id).await.map_err(|e| e.extend())
    }
}

async fn criar(pool: &SqlitePool, novo: NovoUsuario) -> Result<UserType, ApiError> {
    let mut tx = pool.begin().await?;
    let usuario = criar_usuario(&mut tx, &novo).await?;
    tx.commit().await?;
    Ok(usuario.into())
}

async fn editar(pool: &SqlitePool, id: i64, dados: NovoUsuario) -> Result<UserType, ApiError> {
    let mut tx = pool.begin().await?;
    let usuario = editar_usuario(&mut tx, id, &dados)
        .await?
        .ok_or(ApiError::NaoEncontrado { id })?;
    tx.commit().await?;
    Ok(usuario.into())
}

async fn excluir(pool: &SqlitePool, id: i64) -> Result<UserType, ApiError> {
    let mut tx = pool.begin().await?;
    let usuario = excluir_usuario(&mut tx, id)
        .await?
        .ok_or(ApiError::NaoEncontrado { id })?;
    tx.commit().await?;
    Ok(usuario.into())
}
