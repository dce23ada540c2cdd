//! Application state for admin-server

use std::sync::Arc;

use aws_sdk_sesv2::Client as SesClient;
use sqlx::PgPool;

use crate::config::Config;
use crate::email::{Mailer, SesMailer};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
///
/// The pool and the mailer are the process-wide collaborators. Both are
/// injected so the order-update core can be driven with test doubles
/// instead of module-level globals.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// Email channel (SES in production, a double in tests)
    pub mailer: Arc<dyn Mailer>,
}

impl AppState {
    /// Create a new AppState
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPool::connect(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let ses = if let Ok(ses_region) = std::env::var("SES_REGION") {
            let ses_config = aws_config
                .to_builder()
                .region(aws_config::Region::new(ses_region))
                .build();
            SesClient::new(&ses_config)
        } else {
            SesClient::new(&aws_config)
        };

        let mailer: Arc<dyn Mailer> =
            Arc::new(SesMailer::new(ses, config.ses_from_email.clone()));

        tracing::info!("Database pool ready, SES sender: {}", config.ses_from_email);

        Ok(Self { pool, mailer })
    }
}
