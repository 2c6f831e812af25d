use crate::models::user::Usuario;
use crate::utils::logging::{log_usuario_excluido, log_usuario_nao_encontrado};
use sqlx::SqliteConnection;

/// Remove o usuário `id` e devolve a linha como estava antes da exclusão.
/// Retorna `None` quando o id não existe.
pub async fn excluir_usuario(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Usuario>, sqlx::Error> {
    let usuario = sqlx::query_as::<_, Usuario>(
        "DELETE FROM users WHERE id = ? RETURNING id, nome, email, senha"
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;

    match &usuario {
        Some(u) => log_usuario_excluido(u.id),
        None => log_usuario_nao_encontrado(id),
    }
    Ok(usuario)
}
