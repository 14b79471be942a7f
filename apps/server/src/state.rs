//! Shared application state

use crate::{
    config::{Config, StoreKind},
    db::{ConsultorioRepository, InMemoryConsultorioRepository, PostgresConsultorioRepository},
    services::CrudService,
    Result,
};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct AppStateOptions {
    pub run_migrations: bool,
    /// Overrides `database.store` when set (tests pick the in-memory store).
    pub store: Option<StoreKind>,
}

impl Default for AppStateOptions {
    fn default() -> Self {
        Self {
            run_migrations: true,
            store: None,
        }
    }
}

/// Shared application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Present only for the PostgreSQL store.
    pub db_pool: Option<PgPool>,
    pub repository: Arc<dyn ConsultorioRepository>,
    pub crud_service: Arc<CrudService>,
}

impl AppState {
    /// Initialize the application state
    pub async fn new(config: Config) -> Result<Self> {
        let options = AppStateOptions {
            run_migrations: config.database.run_migrations,
            store: None,
        };
        Self::new_with_options(config, options).await
    }

    pub async fn new_with_options(config: Config, options: AppStateOptions) -> Result<Self> {
        tracing::info!("Initializing application state...");

        let config_arc = Arc::new(config);
        let store = options.store.unwrap_or(config_arc.database.store);

        let (db_pool, repository): (Option<PgPool>, Arc<dyn ConsultorioRepository>) = match store
        {
            StoreKind::Postgres => {
                let db_pool = create_db_pool(config_arc.as_ref()).await?;

                if options.run_migrations {
                    tracing::info!("Running database migrations...");
                    sqlx::migrate!("./migrations").run(&db_pool).await?;
                }

                let repository: Arc<dyn ConsultorioRepository> =
                    Arc::new(PostgresConsultorioRepository::new(db_pool.clone()));
                (Some(db_pool), repository)
            }
            StoreKind::Memory => {
                tracing::warn!("Using in-memory store; data is not persisted across restarts");
                let repository: Arc<dyn ConsultorioRepository> =
                    Arc::new(InMemoryConsultorioRepository::new());
                (None, repository)
            }
        };

        Ok(Self::from_repository(config_arc, db_pool, repository))
    }

    /// Assemble state around an already-built repository.
    pub fn from_repository(
        config: Arc<Config>,
        db_pool: Option<PgPool>,
        repository: Arc<dyn ConsultorioRepository>,
    ) -> Self {
        let crud_service = Arc::new(CrudService::new(repository.clone()));

        tracing::info!("Application state initialized successfully");

        Self {
            config,
            db_pool,
            repository,
            crud_service,
        }
    }
}

async fn create_db_pool(config: &Config) -> Result<PgPool> {
    tracing::info!("Creating database connection pool...");

    let statement_timeout = config.database.statement_timeout_seconds;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .min_connections(config.database.pool_min_size)
        .max_connections(config.database.pool_max_size)
        .acquire_timeout(std::time::Duration::from_secs(
            config.database.pool_timeout_seconds,
        ))
        .after_connect(move |conn, _meta| {
            Box::pin(async move {
                // Set statement timeout (max query execution time)
                sqlx::query(&format!("SET statement_timeout = '{}s'", statement_timeout))
                    .execute(&mut *conn)
                    .await?;
                Ok(())
            })
        })
        .connect(&config.database.url)
        .await?;

    tracing::info!(
        "Database pool created (min: {}, max: {})",
        config.database.pool_min_size,
        config.database.pool_max_size
    );

    Ok(pool)
}
