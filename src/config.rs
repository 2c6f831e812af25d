use serde::Deserialize;
use std::env;
use std::fs;
use std::io;
use std::path::Path;
use once_cell::sync::OnceCell;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Falha ao ler {path}: {source}")]
    Leitura { path: String, source: io::Error },
    #[error("Falha ao parsear {path}: {source}")]
    Parse { path: String, source: serde_json::Error },
    #[error("Valor inválido para {var}: {valor}")]
    Variavel { var: &'static str, valor: String },
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_max_conexoes")]
    pub max_conexoes: u32,
    pub logs_enabled: Option<bool>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_database_url() -> String {
    "sqlite://db/usuarios.db".to_string()
}

fn default_max_conexoes() -> u32 {
    5
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: default_host(),
            port: default_port(),
            database_url: default_database_url(),
            max_conexoes: default_max_conexoes(),
            logs_enabled: None,
        }
    }
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    pub fn get() -> &'static Config {
        CONFIG.get_or_init(Config::default)
    }

    /// Guarda a configuração do processo. Retorna a que já estava registrada, se houver.
    pub fn init(config: Config) -> &'static Config {
        CONFIG.get_or_init(|| config)
    }

    /// Lê o config.json (se existir) e aplica as variáveis de ambiente por cima.
    pub fn load_from_file(path: &str) -> Result<Config, ConfigError> {
        let mut config = if Path::new(path).exists() {
            let content = fs::read_to_string(path).map_err(|source| ConfigError::Leitura {
                path: path.to_string(),
                source,
            })?;
            Self::from_json(path, &content)?
        } else {
            Config::default()
        };
        config.apply_env(|var| env::var(var).ok())?;
        Ok(config)
    }

    fn from_json(path: &str, content: &str) -> Result<Config, ConfigError> {
        serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(valor) = lookup("PORT") {
            self.port = valor
                .parse()
                .map_err(|_| ConfigError::Variavel { var: "PORT", valor })?;
        }
        if let Some(valor) = lookup("MAX_CONEXOES") {
            self.max_conexoes = valor
                .parse()
                .map_err(|_| ConfigError::Variavel { var: "MAX_CONEXOES", valor })?;
        }
        if let Some(valor) = lookup("LOGS_ENABLED") {
            let enabled = valor
                .parse()
                .map_err(|_| ConfigError::Variavel { var: "LOGS_ENABLED", valor })?;
            self.logs_enabled = Some(enabled);
        }
        Ok(())
    }

    pub fn logs_habilitados(&self) -> bool {
        self.logs_enabled.unwrap_or(true)
    }

    pub fn endereco(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
