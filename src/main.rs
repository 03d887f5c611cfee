use anyhow::Result;
use newsroom_core::application::{
    ports::{
        ClockPort, MailerPort, PasswordHasherPort, TokenManagerPort,
        session_revocation::SessionRevocationStore,
    },
    services::ApplicationServices,
};
use newsroom_core::config::AppConfig;
use newsroom_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    publisher::PublisherRepository,
    subscription::SubscriptionRepository,
    user::UserRepository,
};
use newsroom_core::infrastructure::{
    database,
    mail::{LogMailer, SmtpMailer},
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqlitePublisherRepository,
        SqliteSubscriptionRepository, SqliteUserRepository,
    },
    security::{
        password::Argon2PasswordHasher, session_store::InMemorySessionRevocationStore,
        token::BiscuitTokenManager,
    },
    time::SystemClock,
};
use newsroom_core::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let user_repo: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool.clone()));
    let publisher_repo: Arc<dyn PublisherRepository> =
        Arc::new(SqlitePublisherRepository::new(pool.clone()));
    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(pool.clone()));
    let subscription_repo: Arc<dyn SubscriptionRepository> =
        Arc::new(SqliteSubscriptionRepository::new(pool.clone()));

    let password_hasher: Arc<PasswordHasherPort> = Arc::new(Argon2PasswordHasher);
    let token_manager: Arc<TokenManagerPort> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let session_store: Arc<dyn SessionRevocationStore> =
        Arc::new(InMemorySessionRevocationStore::new());
    let clock: Arc<ClockPort> = Arc::new(SystemClock);

    let mailer: Arc<MailerPort> = match config.smtp() {
        Some(smtp) => {
            tracing::info!(host = %smtp.host, port = smtp.port, "using SMTP relay for notifications");
            Arc::new(SmtpMailer::new(smtp)?)
        }
        None => {
            tracing::warn!("SMTP_HOST not set; notification mail will only be logged");
            Arc::new(LogMailer)
        }
    };

    let services = Arc::new(ApplicationServices::new(
        user_repo,
        publisher_repo,
        article_write_repo,
        article_read_repo,
        subscription_repo,
        password_hasher,
        token_manager,
        session_store,
        mailer,
        clock,
        config.mail_from(),
    ));

    let state = HttpState { services };
    let app = build_router(
        state,
        RouterOptions {
            rate_limit: config.rate_limit_enabled(),
            allowed_origins: config.allowed_origins().to_vec(),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

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
