use crate::models::user::{NovoUsuario, Usuario};
use crate::utils::logging::{log_usuario_editado, log_usuario_nao_encontrado};
use sqlx::SqliteConnection;

/// Sobrescreve nome, email e senha do usuário `id`.
/// Retorna `None` sem gravar nada quando o id não existe.
pub async fn editar_usuario(
    conn: &mut SqliteConnection,
    id: i64,
    dados: &NovoUsuario,
) -> Result<Option<Usuario>, sqlx::Error> {
    let usuario = sqlx::query_as::<_, Usuario>(
        "UPDATE users SET nome = ?, email = ?, senha = ? WHERE id = ? RETURNING id, nome, email, senha"
    )
    .bind(&dados.nome)
    .bind(&dados.email)
    .bind(&dados.senha)
    .bind(id)
    .fetch_optional(conn)
    .await?;

    match &usuario {
        Some(u) => log_usuario_editado(u.id),
        None => log_usuario_nao_encontrado(id),
    }
    Ok(usuario)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool_em_memoria;
    use crate::routes::buscar::buscar_usuario;
    use crate::routes::criar::criar_usuario;
    use crate::routes::listar::listar_usuarios;

    fn dados(nome: &str, email: &str, senha: &str) -> NovoUsuario {
        NovoUsuario {
            nome: nome.to_string(),
            email: email.to_string(),
            senha: senha.to_string(),
        }
    }

    #[tokio::test]
    async fn edita_todos_os_campos_e_mantem_id() {
        let pool = pool_em_memoria().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        let criado = criar_usuario(&mut conn, &dados("Ana", "ana@x.com", "pw1")).await.unwrap();
        let editado = editar_usuario(&mut conn, criado.id, &dados("Ana B", "anab@x.com", "pw2"))
            .await
            .unwrap()
            .expect("usuário deveria existir");

        assert_eq!(editado.id, criado.id);
        let salvo = buscar_usuario(&mut conn, criado.id).await.unwrap().unwrap();
        assert_eq!(salvo, editado);
        assert_eq!(salvo.nome, "Ana B");
        assert_eq!(salvo.email, "anab@x.com");
        assert_eq!(salvo.senha, "pw2");
    }

    #[tokio::test]
    async fn id_inexistente_nao_grava() {
        let pool = pool_em_memoria().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        let resultado = editar_usuario(&mut conn, 999, &dados("X", "x@x.com", "x")).await.unwrap();
        assert!(resultado.is_none());
        assert!(buscar_usuario(&mut conn, 999).await.unwrap().is_none());
        assert!(listar_usuarios(&mut conn).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn id_inexistente_preserva_registros_existentes() {
        let pool = pool_em_memoria().await.unwrap();
        let mut conn = pool.acquire().await.unwrap();

        let criado = criar_usuario(&mut conn, &dados("Ana", "ana@x.com", "pw1")).await.unwrap();

        let resultado = editar_usuario(&mut conn, criado.id + 100, &dados("X", "x@x.com", "x"))
            .await
            .unwrap();
        assert!(resultado.is_none());
        assert_eq!(listar_usuarios(&mut conn).await.unwrap(), vec![criado]);
    }
}
