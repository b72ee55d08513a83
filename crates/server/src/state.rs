use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    cache::SessionStore,
    config::{Config, ConnectionPool, Hashing, JwtConfig, RedisClient, RedisConfig},
    di::{DependenciesInject, DependenciesInjectDeps},
    utils::{Metrics, SystemMetrics, run_metrics_collector},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub jwt_config: DynJwtService,
    pub session_store: Arc<SessionStore>,
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Arc<Mutex<Metrics>>,
    pub system_metrics: Arc<SystemMetrics>,
    pub redis: Arc<RedisClient>,
}

impl AppState {
    pub async fn new(config: Config, pool: ConnectionPool) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let hash = Arc::new(Hashing::new()) as DynHashing;
        let registry = Arc::new(Mutex::new(Registry::default()));
        let metrics = Arc::new(Mutex::new(Metrics::new()));
        let system_metrics = Arc::new(SystemMetrics::new());

        info!("Initializing Redis connection");
        let redis_config = RedisConfig::from_env().context("Failed to load Redis configuration")?;
        let redis = RedisClient::new(&redis_config)
            .await
            .context("Failed to connect to Redis")?;

        redis.ping().await.context("Failed to ping Redis server")?;

        let session_store = Arc::new(SessionStore::new(redis.pool.clone()));

        let di_container = DependenciesInject::new(DependenciesInjectDeps {
            pool,
            hash,
            jwt_config: jwt_config.clone(),
            redis: redis.clone(),
            config: config.clone(),
        })
        .context("Failed to initialize dependency injection container")?;

        {
            let mut registry = registry.lock().await;
            let http_metrics = metrics.lock().await;
            registry.register_metrics(&system_metrics, &http_metrics);
        }

        tokio::spawn(run_metrics_collector(system_metrics.clone()));

        Ok(Self {
            config,
            jwt_config,
            session_store,
            di_container,
            registry,
            metrics,
            system_metrics,
            redis: Arc::new(redis),
        })
    }
}

trait MetricsRegister {
    fn register_metrics(&mut self, system: &SystemMetrics, http: &Metrics);
}

impl MetricsRegister for Registry {
    fn register_metrics(&mut self, system: &SystemMetrics, http: &Metrics) {
        system.register(self);
        http.register(self);
    }
}
