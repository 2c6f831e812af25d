use crate::models::user::{NovoUsuario, Usuario};
use crate::utils::logging::log_usuario_criado;
use sqlx::SqliteConnection;

/// Insere o usuário e devolve a linha gravada, já com o `id` atribuído pelo banco.
/// Nomes e emails repetidos são aceitos.
pub async fn criar_usuario(
    conn: &mut SqliteConnection,
    novo: &NovoUsuario,
) -> Result<Usuario, sqlx::Error> {
    let usuario = sqlx::query_as::<_, Usuario>(
        "INSERT INTO users (nome, email, senha) VALUES (?, ?, ?) RETURNING id, nome, email, senha"
    )
    .bind(&novo.nome)
    .bind(&novo.email)
    .bind(&novo.senha)
    .fetch_one(conn)
    .await?;

    log_usuario_criado(usuario.id);
    Ok(usuario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool_em_memoria;

    fn novo(nome: &str, email: &str, senha: &str) -> NovoUsuario {
        NovoUsuario {
            nome: nome.to_string(),
            email: email.to_string(),
            senha: senha.to_string(),
        }
    }

    #[tokio::test]
    async fn primeiro_usuario_recebe_id_1() {
        let pool = pool_em_memoria().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        let usuario = criar_usuario(&mut conn, &novo("Ana", "ana@x.com", "pw1")).await.unwrap();
        assert_eq!(
            usuario,
            Usuario {
                id: 1,
                nome: "Ana".to_string(),
                email: "ana@x.com".to_string(),
                senha: "pw1".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn duplicados_recebem_ids_distintos() {
        let pool = pool_em_memoria().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        let dados = novo("Ana", "ana@x.com", "pw1");
        let a = criar_usuario(&mut conn, &dados).await.unwrap();
        let b = criar_usuario(&mut conn, &dados).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.email, b.email);
    }
}
