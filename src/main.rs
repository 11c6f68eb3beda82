// src/main.rs
use anyhow::{Context, Result, bail};
use scribe_core::application::{
    dto::TokenSubject,
    ports::{security::TokenManager, time::Clock},
    services::ApplicationServices,
};
use scribe_core::config::{AppConfig, StorageBackend};
use scribe_core::domain::{
    post::{PostReadRepository, PostWriteRepository},
    user::{Role, UserId},
};
use scribe_core::infrastructure::{
    database,
    repositories::{
        InMemoryPostRepository, PostgresPostReadRepository, PostgresPostWriteRepository,
    },
    security::BiscuitTokenManager,
    time::SystemClock,
};
use scribe_core::presentation::http::{
    openapi,
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILTER: &str = "info,tower_http=info,sqlx=warn";

enum Command {
    Serve,
    OpenApiSnapshot,
    IssueToken {
        user_id: i64,
        username: String,
        role: Role,
    },
}

fn parse_command(mut args: impl Iterator<Item = String>) -> Result<Command> {
    match args.next().as_deref() {
        None | Some("serve") => Ok(Command::Serve),
        Some("openapi-snapshot") => Ok(Command::OpenApiSnapshot),
        Some("issue-token") => {
            let usage = "usage: issue-token <user_id> <username> <role>";
            let user_id = args
                .next()
                .context(usage)?
                .parse::<i64>()
                .context("user_id must be an integer")?;
            let username = args.next().context(usage)?;
            let role = args.next().context(usage)?.parse::<Role>()?;
            Ok(Command::IssueToken {
                user_id,
                username,
                role,
            })
        }
        Some(other) => bail!("unknown command '{other}' (expected serve, openapi-snapshot or issue-token)"),
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    match parse_command(std::env::args().skip(1))? {
        Command::Serve => serve().await,
        Command::OpenApiSnapshot => {
            let path = openapi::write_openapi_snapshot()?;
            println!("OpenAPI snapshot written to {path}");
            Ok(())
        }
        Command::IssueToken {
            user_id,
            username,
            role,
        } => issue_token(user_id, username, role).await,
    }
}

async fn issue_token(user_id: i64, username: String, role: Role) -> Result<()> {
    let config = AppConfig::from_env()?;
    let tokens = BiscuitTokenManager::new(config.biscuit_private_key(), config.token_ttl())?;
    let subject = TokenSubject::new(UserId::new(user_id)?, username, role);
    let issued = tokens.issue(subject).await?;
    println!("{}", serde_json::to_string_pretty(&issued)?);
    Ok(())
}

async fn build_repositories(
    config: &AppConfig,
) -> Result<(Arc<dyn PostWriteRepository>, Arc<dyn PostReadRepository>)> {
    match config.storage_backend() {
        StorageBackend::Postgres => {
            let pool = database::init_pool(config.database_url())
                .await
                .context("connecting to postgres")?;
            database::run_migrations(&pool)
                .await
                .context("running migrations")?;
            let write: Arc<dyn PostWriteRepository> =
                Arc::new(PostgresPostWriteRepository::new(pool.clone()));
            let read: Arc<dyn PostReadRepository> =
                Arc::new(PostgresPostReadRepository::new(pool));
            Ok((write, read))
        }
        StorageBackend::Memory => {
            tracing::warn!("using in-memory post storage; data is lost on restart");
            let store = Arc::new(InMemoryPostRepository::new());
            let write: Arc<dyn PostWriteRepository> = store.clone();
            let read: Arc<dyn PostReadRepository> = store;
            Ok((write, read))
        }
    }
}

async fn serve() -> Result<()> {
    let config = AppConfig::from_env()?;
    let (write_repo, read_repo) = build_repositories(&config).await?;

    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let services = Arc::new(ApplicationServices::new(
        write_repo,
        read_repo,
        token_manager,
        clock,
        config.slug_write_retries(),
    ));

    let options = RouterOptions {
        allowed_origins: config.allowed_origins().to_vec(),
        rate_limit: config.rate_limit_enabled(),
    };
    let app = build_router(HttpState { services }, &options);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(%address, backend = ?config.storage_backend(), "listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("server stopped");
    Ok(())
}

fn init_tracing() {
    let env_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

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
            tracing::error!(error = %err, "failed to listen for ctrl-c");
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
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
