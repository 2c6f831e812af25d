use async_graphql::SimpleObject;
use sqlx::FromRow;

/// Linha da tabela `users`.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Usuario {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub senha: String,
}

/// Campos graváveis de um usuário; o `id` fica a cargo do banco.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NovoUsuario {
    pub nome: String,
    pub email: String,
    pub senha: String,
}

/// Representação exposta no schema GraphQL.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub struct UserType {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub senha: String,
}

impl From<Usuario> for UserType {
    fn from(usuario: Usuario) -> Self {
        let Usuario { id, nome, email, senha } = usuario;
        UserType { id, nome, email, senha }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversao_preserva_todos_os_campos() {
        let usuario = Usuario {
            id: 7,
            nome: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            senha: "pw1".to_string(),
        };
        let wire = UserType::from(usuario.clone());
        assert_eq!(wire.id, usuario.id);
        assert_eq!(wire.nome, usuario.nome);
        assert_eq!(wire.email, usuario.email);
        assert_eq!(wire.senha, usuario.senha);
    }
}
