use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use nightout_finder::config::{LoggingSettings, Settings};
use nightout_finder::core::{Catalog, Matcher};
use nightout_finder::routes::{self, assets, venues::AppState};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match logging.format.as_str() {
        "pretty" => subscriber.pretty().init(),
        "compact" => subscriber.compact().init(),
        _ => subscriber.init(),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_tracing(&settings.logging);

    info!("Starting Nightout Finder...");

    let asset_dir = assets::describe_asset_dir(&settings.assets.dir);
    info!("Static files path: {}", asset_dir.display());

    if let Err(e) = assets::ensure_asset_dir(&settings.assets.dir) {
        error!("{}", e);
        return Err(e);
    }

    let catalog = Catalog::load(settings.catalog.path.as_deref()).map_err(|e| {
        error!("Failed to load venue catalog: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;

    info!("Venue catalog loaded ({} venues)", catalog.len());

    let matcher = Matcher::new(settings.results.featured_count);

    let app_state = AppState { catalog, matcher };

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(2);
    let asset_settings = settings.assets.clone();

    info!("Starting HTTP server on {}:{}", host, port);
    info!("Serving static files from: {}", asset_dir.display());

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
            .service(assets::static_files(&asset_settings))
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
