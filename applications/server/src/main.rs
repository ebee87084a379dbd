/// Birthday Reminder Server - records birthdays and emails daily reminders
use axum::{
    http::HeaderValue,
    routing::{delete, get, post},
    Router,
};
use bday_server::{
    api,
    config::ServerConfig,
    jobs::BirthdayScanner,
    services::{Mailer, SmtpMailer},
    state::AppState,
};
use bday_storage::RecordStore;
use chrono::Local;
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bday-server")]
#[command(about = "Birthday reminder server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server and daily scanner
    Serve,
    /// Run one birthday scan immediately against today's date
    CheckBirthdays,
    /// List all stored birthday records
    ListBirthdays,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bday_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => serve().await?,
        Commands::CheckBirthdays => check_birthdays().await?,
        Commands::ListBirthdays => list_birthdays().await?,
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Birthday Reminder Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = bday_storage::create_pool(&config.storage.database_url).await?;
    bday_storage::run_migrations(&pool).await?;
    let store = Arc::new(RecordStore::new(pool));
    tracing::info!("Database connected");

    // Initialize mailer
    let mailer: Arc<dyn Mailer> = Arc::new(SmtpMailer::new(&config.mail)?);
    tracing::info!("Mailer initialized for relay {}", config.mail.host);

    // Start the daily scanner
    if config.scanner.enabled {
        let scanner = Arc::new(BirthdayScanner::new(
            Arc::clone(&store),
            Arc::clone(&mailer),
            config.mail.signature.clone(),
        ));
        scanner.start(config.scanner.hour, config.scanner.minute);
    }

    // Build application state
    let app_state = AppState::new(store, mailer, config.mail.signature.clone());

    // Build router
    let app = create_router(app_state, config.server.origin.as_deref())?;

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(app_state: AppState, cors_origin: Option<&str>) -> anyhow::Result<Router> {
    let routes = Router::new()
        .route("/health", get(api::health::health))
        .route("/add-birthday", post(api::birthdays::add_birthday))
        .route(
            "/delete-birthday/:id",
            delete(api::birthdays::delete_birthday),
        )
        .route("/get-birthdays", get(api::birthdays::get_birthdays));

    // Restrict cross-origin access to the one configured origin
    let cors = match cors_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_methods(Any)
            .allow_headers(Any),
        None => CorsLayer::permissive(),
    };

    Ok(Router::new()
        .nest("/api", routes)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(cors)
        .with_state(app_state))
}

async fn check_birthdays() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    config.validate()?;

    let pool = bday_storage::create_pool(&config.storage.database_url).await?;
    bday_storage::run_migrations(&pool).await?;
    let store = Arc::new(RecordStore::new(pool));

    let mailer: Arc<dyn Mailer> = Arc::new(SmtpMailer::new(&config.mail)?);

    let scanner = BirthdayScanner::new(store, mailer, config.mail.signature.clone());
    scanner.run_scan(Local::now().date_naive()).await;

    Ok(())
}

async fn list_birthdays() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;

    let pool = bday_storage::create_pool(&config.storage.database_url).await?;
    bday_storage::run_migrations(&pool).await?;

    let records = bday_storage::records::get_all(&pool).await?;

    println!("Birthdays:");
    for record in records {
        println!(
            "  {} - {} ({}) <{}>",
            record.id, record.name, record.date_of_birth, record.email
        );
    }

    Ok(())
}
