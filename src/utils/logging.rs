use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;
use env_logger::Env;
use log::{info, warn, error};

static LOG_ENABLED: AtomicBool = AtomicBool::new(true);
static INIT: Once = Once::new();

/// Inicializa o logger, se ainda não foi inicializado.
pub fn init_logging() {
    INIT.call_once(|| {
        if LOG_ENABLED.load(Ordering::Relaxed) {
            env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
        }
    });
}

/// Ativa os logs (chame antes de init_logging).
pub fn enable_logs() {
    LOG_ENABLED.store(true, Ordering::Relaxed);
}

/// Desativa os logs (chame antes de init_logging).
pub fn disable_logs() {
    LOG_ENABLED.store(false, Ordering::Relaxed);
}

/// Liga ou desliga os logs conforme a configuração (chame antes de init_logging).
pub fn configurar_logs(habilitado: bool) {
    if habilitado {
        enable_logs();
    } else {
        disable_logs();
    }
}

pub fn logs_habilitados() -> bool {
    LOG_ENABLED.load(Ordering::Relaxed)
}

pub fn log_usuario_criado(id: i64) {
    info!("[USUARIOS] Usuário {} criado", id);
}

pub fn log_usuarios_listados(total: usize) {
    info!("[USUARIOS] {} usuário(s) listado(s)", total);
}

pub fn log_usuario_editado(id: i64) {
    info!("[USUARIOS] Usuário {} editado", id);
}

pub fn log_usuario_excluido(id: i64) {
    info!("[USUARIOS] Usuário {} excluído", id);
}

pub fn log_usuario_nao_encontrado(id: i64) {
    warn!("[USUARIOS] Usuário {} não encontrado", id);
}

pub fn log_erro_banco(erro: &str) {
    error!("[USUARIOS] Erro no banco de dados: {}", erro);
}
