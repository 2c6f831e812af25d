use async_graphql::{Error, ErrorExtensions};
use thiserror::Error;
use crate::utils::logging::log_erro_banco;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Usuário {id} não encontrado")]
    NaoEncontrado { id: i64 },
    #[error("Erro no banco de dados: {0}")]
    Banco(#[from] sqlx::Error),
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> Error {
        match self {
            ApiError::NaoEncontrado { id } => {
                let id = *id;
                Error::new(self.to_string()).extend_with(|_, e| {
                    e.set("code", "NOT_FOUND");
                    e.set("id", id);
                })
            }
            // Detalhes do banco ficam só no log.
            ApiError::Banco(err) => {
                log_erro_banco(&err.to_string());
                Error::new("Erro interno ao acessar o banco de dados")
                    .extend_with(|_, e| e.set("code", "INTERNAL"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::Value;

    fn codigo(err: &Error) -> Option<Value> {
        err.extensions.as_ref().and_then(|ext| ext.get("code").cloned())
    }

    #[test]
    fn nao_encontrado_tem_codigo_not_found() {
        let err = ApiError::NaoEncontrado { id: 999 }.extend();
        assert_eq!(err.message, "Usuário 999 não encontrado");
        assert_eq!(codigo(&err), Some(Value::from("NOT_FOUND")));
    }

    #[test]
    fn erro_de_banco_nao_vaza_detalhes() {
        let err = ApiError::from(sqlx::Error::RowNotFound).extend();
        assert_eq!(err.message, "Erro interno ao acessar o banco de dados");
        assert_eq!(codigo(&err), Some(Value::from("INTERNAL")));
    }
}
