use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_pass: String,
    pub smtp_from: String,
}

impl EmailConfig {
    pub fn init() -> Result<Self> {
        let smtp_username =
            std::env::var("SMTP_USERNAME").context("Missing environment variable: SMTP_USERNAME")?;
        let smtp_password =
            std::env::var("SMTP_PASSWORD").context("Missing environment variable: SMTP_PASSWORD")?;
        let smtp_host =
            std::env::var("SMTP_HOST").context("Missing environment variable: SMTP_HOST")?;
        let smtp_port: u16 = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| "587".to_string())
            .parse()
            .context("Invalid SMTP_PORT")?;
        let smtp_from = std::env::var("SMTP_FROM").unwrap_or_else(|_| smtp_username.clone());

        Ok(Self {
            smtp_server: smtp_host,
            smtp_port,
            smtp_user: smtp_username,
            smtp_pass: smtp_password,
            smtp_from,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_min_connections: u32,
    pub db_max_connections: u32,
    pub jwt_secret: String,
    pub run_migrations: bool,
    pub port: u16,
    pub session_ttl_secs: u64,
    pub upload_dir: String,
    pub pickup_timeout_ms: i64,
    pub sweep_interval_secs: u64,
    pub sweep_enabled: bool,
    pub email_config: EmailConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let jwt_secret =
            std::env::var("JWT_SECRET").context("Missing environment variable: JWT_SECRET")?;
        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let db_min_connections = std::env::var("DB_MIN_CONN")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<u32>()
            .context("DB_MIN_CONN must be a valid u32 integer")?;

        let db_max_connections = std::env::var("DB_MAX_CONN")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONN must be a valid u32 integer")?;

        let session_ttl_secs = std::env::var("SESSION_TTL_SECS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse::<u64>()
            .context("SESSION_TTL_SECS must be a valid u64 integer")?;

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string());

        // Reservations hold their pickup slot for a day unless overridden.
        let pickup_timeout_ms = std::env::var("PICKUP_TIMEOUT_MS")
            .unwrap_or_else(|_| "86400000".to_string())
            .parse::<i64>()
            .context("PICKUP_TIMEOUT_MS must be a valid i64 integer")?;

        let sweep_interval_secs = std::env::var("SWEEP_INTERVAL_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .context("SWEEP_INTERVAL_SECS must be a valid u64 integer")?;

        let sweep_enabled = match std::env::var("SWEEP_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .as_str()
        {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "SWEEP_ENABLED must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let email_config = EmailConfig::init().context("failed email config")?;

        Ok(Self {
            database_url,
            db_min_connections,
            db_max_connections,
            jwt_secret,
            run_migrations,
            port,
            session_ttl_secs,
            upload_dir,
            pickup_timeout_ms,
            sweep_interval_secs,
            sweep_enabled,
            email_config,
        })
    }
}
