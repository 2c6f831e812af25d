use tokio::net::TcpListener;
use usuarios_graphql::app;
use usuarios_graphql::config::Config;
use usuarios_graphql::db::initialize_db;
use usuarios_graphql::utils::logging::{configurar_logs, init_logging};
use log::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    Config::init(Config::load_from_file("config.json")?);
    let config = Config::get();
    configurar_logs(config.logs_habilitados());
    init_logging();

    let pool = initialize_db(config).await?;
    let app = app(pool.clone());

    let endereco = config.endereco();
    let listener = TcpListener::bind(&endereco).await?;
    info!("Servidor GraphQL rodando em http://{}/graphql", endereco);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Servidor encerrado");
    Ok(())
}

/// Aguarda SIGINT (Ctrl+C) ou SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Falha ao instalar handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sinal) => {
                sinal.recv().await;
            }
            Err(e) => {
                log::error!("Falha ao instalar handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("SIGINT recebido, encerrando"),
        () = terminate => info!("SIGTERM recebido, encerrando"),
    }
}
