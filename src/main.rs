mod api;
mod config;
mod errors;
mod services;
mod stores;
mod types;

use std::sync::Arc;

use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;
use sea_orm::{Database, DatabaseConnection};
use tracing::info;

use api::{AuthApi, BookingApi, ChambreApi, HealthApi, HotelApi, ImageApi, UserApi};
use config::{init_logging, Settings};
use migration::{Migrator, MigratorTrait};
use services::TokenService;
use stores::{BookingStore, ChambreStore, HotelStore, ImageStore, UserStore};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let settings = Settings::from_env().expect("Failed to load settings");

    let db: DatabaseConnection = Database::connect(&settings.database_url)
        .await
        .expect("Failed to connect to database");

    info!(database_url = %settings.database_url, "Connected to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    info!("Database migrations completed");

    let tokens = Arc::new(TokenService::new(settings.jwt_secret));

    let users = Arc::new(UserStore::new(db.clone()));
    let hotels = Arc::new(HotelStore::new(db.clone()));
    let chambres = Arc::new(ChambreStore::new(db.clone()));
    let images = Arc::new(ImageStore::new(db.clone()));
    let bookings = Arc::new(BookingStore::new(db));

    let api_service = OpenApiService::new(
        (
            HealthApi,
            AuthApi::new(users.clone(), tokens.clone()),
            UserApi::new(users.clone(), tokens.clone()),
            HotelApi::new(hotels, tokens.clone()),
            ChambreApi::new(chambres, tokens.clone()),
            ImageApi::new(images, tokens.clone()),
            BookingApi::new(bookings, users, tokens),
        ),
        "Hotel Booking API",
        env!("CARGO_PKG_VERSION"),
    )
    .server("http://localhost:3000");

    let ui = api_service.swagger_ui();

    let app = Route::new()
        .nest("/api/docs", ui)
        .nest("/", api_service);

    info!(bind_addr = %settings.bind_addr, "Starting server");
    info!("Swagger UI available at /api/docs");

    Server::new(TcpListener::bind(settings.bind_addr))
        .run(app)
        .await
}
