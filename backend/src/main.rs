use std::sync::Arc;

use clap::Parser;
use memo_backend::config::Config;
use memo_backend::manager::MemoManager;
use memo_backend::store::{MemoStore, MemoryStore, PgMemoStore};

async fn open_store(config: &Config) -> std::io::Result<Arc<dyn MemoStore>> {
    match &config.database_url {
        Some(database_url) => {
            let store = PgMemoStore::connect(database_url, config.max_connections)
                .await
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            store
                .migrate()
                .await
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
            log::info!("connected to PostgreSQL");
            Ok(Arc::new(store))
        }
        None => {
            log::warn!("no DATABASE_URL configured, memos are kept in memory");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    let store = open_store(&config).await?;

    let app_state = actix_web::web::Data::new(memo_backend::AppState::new(MemoManager::new(
        store,
    )));

    log::info!("listening on {}:{}", config.host, config.port);
    actix_web::HttpServer::new(move || {
        actix_web::App::new()
            .app_data(app_state.clone())
            .wrap(actix_web::middleware::Logger::default())
            .wrap(actix_cors::Cors::permissive())
            .configure(memo_backend::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
