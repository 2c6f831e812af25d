use crate::models::user::Usuario;
use sqlx::SqliteConnection;

pub async fn buscar_usuario(
    conn: &mut SqliteConnection,
    id: i64,
) -> Result<Option<Usuario>, sqlx::Error> {
    sqlx::query_as::<_, Usuario>("SELECT id, nome, email, senha FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(conn)
        .await
}
