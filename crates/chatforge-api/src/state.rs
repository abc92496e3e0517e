//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST API.
//! Services are generic over repository/authorizer traits, but AppState pins
//! them to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use chatforge_core::service::bot::BotService;
use chatforge_core::service::capture::CaptureService;
use chatforge_infra::auth::PermissiveAuthorizer;
use chatforge_infra::config::load_service_config;
use chatforge_infra::data_dir::resolve_data_dir;
use chatforge_infra::sqlite::bot::SqliteBotRepository;
use chatforge_infra::sqlite::lead::SqliteLeadRepository;
use chatforge_infra::sqlite::message::SqliteMessageRepository;
use chatforge_infra::sqlite::pool::DatabasePool;
use chatforge_types::config::ServiceConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteBotService = BotService<SqliteBotRepository, PermissiveAuthorizer>;

pub type ConcreteCaptureService = CaptureService<
    SqliteBotRepository,
    SqliteLeadRepository,
    SqliteMessageRepository,
    PermissiveAuthorizer,
>;

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub bot_service: Arc<ConcreteBotService>,
    pub capture_service: Arc<ConcreteCaptureService>,
    pub config: ServiceConfig,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state from the default data directory.
    pub async fn init() -> anyhow::Result<Self> {
        Self::init_at(resolve_data_dir()).await
    }

    /// Initialize the application state rooted at an explicit data directory.
    ///
    /// Connects the database, loads `config.toml`, and wires services.
    pub async fn init_at(data_dir: PathBuf) -> anyhow::Result<Self> {
        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_service_config(&data_dir).await;

        // Initialize database
        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("chatforge.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;

        // Wire bot service
        let bot_service = BotService::new(
            SqliteBotRepository::new(db_pool.clone()),
            PermissiveAuthorizer::new(),
        );

        // Wire capture service with its own repository instances
        let capture_service = CaptureService::new(
            SqliteBotRepository::new(db_pool.clone()),
            SqliteLeadRepository::new(db_pool.clone()),
            SqliteMessageRepository::new(db_pool.clone()),
            PermissiveAuthorizer::new(),
        );

        Ok(Self {
            bot_service: Arc::new(bot_service),
            capture_service: Arc::new(capture_service),
            config,
            data_dir,
            db_pool,
        })
    }
}
