use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use crate::config::Config;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use log::info;

pub async fn initialize_db(config: &Config) -> Result<Pool<Sqlite>, sqlx::Error> {
    let database_url = &config.database_url;

    // Criar diretório se não existir
    if let Some(db_dir) = diretorio_do_banco(database_url) {
        if !db_dir.exists() {
            fs::create_dir_all(db_dir)?;
        }
    }

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_conexoes.max(1))
        .connect_with(options)
        .await?;

    criar_tabela(&pool).await?;
    info!("Banco de dados pronto em {}", database_url);

    Ok(pool)
}

/// Cria a tabela de usuários, se não existir. Não há migrações.
pub async fn criar_tabela(pool: &Pool<Sqlite>) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nome TEXT NOT NULL,
            email TEXT NOT NULL,
            senha TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Pool em memória com uma única conexão, que nunca é reciclada.
pub async fn pool_em_memoria() -> Result<Pool<Sqlite>, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await?;

    criar_tabela(&pool).await?;
    Ok(pool)
}

fn diretorio_do_banco(database_url: &str) -> Option<&Path> {
    let caminho = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url);
    let caminho = caminho.split('?').next().unwrap_or(caminho);

    if caminho.is_empty() || caminho == ":memory:" {
        return None;
    }

    Path::new(caminho)
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extrai_diretorio_da_url() {
        assert_eq!(diretorio_do_banco("sqlite://db/usuarios.db"), Some(Path::new("db")));
        assert_eq!(diretorio_do_banco("sqlite:dados/a.db?mode=rwc"), Some(Path::new("dados")));
        assert_eq!(diretorio_do_banco("sqlite://usuarios.db"), None);
        assert_eq!(diretorio_do_banco("sqlite::memory:"), None);
    }

    #[tokio::test]
    async fn criar_tabela_e_idempotente() {
        let pool = pool_em_memoria().await.unwrap();
        criar_tabela(&pool).await.unwrap();

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(total, 0);
    }
}
