use anyhow::Result;
use newsroom::application::{
    ports::{ClockPort, MailerPort, NotificationQueuePort, PostCachePort, TokenManagerPort},
    services::{ApplicationServices, ServiceDependencies},
};
use newsroom::config::{AppConfig, CacheDriver};
use newsroom::domain::censor::ProfanityFilter;
use newsroom::infrastructure::{
    cache::{MokaPostCache, RedisPostCache},
    database,
    notifications::{
        LogMailer, NotificationWorker, SmtpMailer, TeraNotificationRenderer,
        TokioNotificationQueue,
    },
    repositories::{
        SqliteAuthorRepository, SqliteCategoryRepository, SqlitePostReadRepository,
        SqlitePostWriteRepository, SqliteSubscriptionRepository,
    },
    security::BiscuitTokenManager,
    time::SystemClock,
};
use newsroom::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const WORKER_DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    // Loads `.env` before the subscriber reads RUST_LOG.
    let config = AppConfig::from_env()?;
    init_tracing();

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!("database ready");

    let post_cache: Arc<PostCachePort> = match config.cache() {
        CacheDriver::Memory => {
            tracing::info!(capacity = config.cache_max_capacity(), "using in-process post cache");
            Arc::new(MokaPostCache::new(config.cache_max_capacity()))
        }
        CacheDriver::Redis { url } => {
            tracing::info!("using redis post cache");
            Arc::new(RedisPostCache::from_url(url)?)
        }
    };

    let censor = Arc::new(ProfanityFilter::new(config.censored_words().iter().cloned()));

    let mailer: Arc<MailerPort> = match config.smtp() {
        Some(settings) => {
            tracing::info!(host = %settings.host, port = settings.port, "sending notifications over SMTP");
            Arc::new(SmtpMailer::new(settings)?)
        }
        None => {
            tracing::warn!("SMTP_HOST not set; notifications will only be logged");
            Arc::new(LogMailer)
        }
    };
    let (queue, receiver) = TokioNotificationQueue::channel(config.notification_queue_capacity());
    let worker = NotificationWorker::spawn(receiver, mailer);
    let notifications: Arc<NotificationQueuePort> = Arc::new(queue);

    let renderer = Arc::new(TeraNotificationRenderer::new(
        Arc::clone(&censor),
        config.public_base_url(),
    )?);
    let token_manager: Arc<TokenManagerPort> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<ClockPort> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(ServiceDependencies {
        post_write_repo: Arc::new(SqlitePostWriteRepository::new(pool.clone())),
        post_read_repo: Arc::new(SqlitePostReadRepository::new(pool.clone())),
        author_repo: Arc::new(SqliteAuthorRepository::new(pool.clone())),
        category_repo: Arc::new(SqliteCategoryRepository::new(pool.clone())),
        subscription_repo: Arc::new(SqliteSubscriptionRepository::new(pool.clone())),
        post_cache,
        notifications,
        renderer,
        token_manager,
        censor,
        clock,
    }));

    let app = build_router(HttpState { services }, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    // The router held the last queue sender; the worker stops once the backlog is sent.
    if tokio::time::timeout(WORKER_DRAIN_TIMEOUT, worker).await.is_err() {
        tracing::warn!("notification worker did not drain in time");
    }
    pool.close().await;
    tracing::info!("shutdown complete");

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
