use crate::models::user::Usuario;
use crate::utils::logging::log_usuarios_listados;
use sqlx::SqliteConnection;

/// Todos os usuários, na ordem natural da tabela.
pub async fn listar_usuarios(conn: &mut SqliteConnection) -> Result<Vec<Usuario>, sqlx::Error> {
    let usuarios = sqlx::query_as::<_, Usuario>("SELECT id, nome, email, senha FROM users")
        .fetch_all(conn)
        .await?;

    log_usuarios_listados(usuarios.len());
    Ok(usuarios)
}
