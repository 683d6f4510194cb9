use actix_web::{App, HttpServer, web};
use nutridash::application::auth_service::AuthService;
use nutridash::application::nutrition_service::NutritionService;
use nutridash::data::food_catalog::StaticFoodCatalog;
use nutridash::data::user_repository::InMemoryUserRepository;
use nutridash::infrastructure::config::AppConfig;
use nutridash::infrastructure::logging::init_logging;
use nutridash::presentation::handlers::{
    AppState, auth_page, dashboard, health_check, home, login, logout, nutrition, register,
};
use nutridash::presentation::middleware::RequestTraceMiddleware;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_logging();

    let config = AppConfig::from_env();
    info!(bind_addr = %config.bind_addr, "Configuration loaded");

    let user_repository = InMemoryUserRepository::new();
    let catalog = StaticFoodCatalog::sample();
    info!("In-memory user store and food catalog created");

    let auth = AuthService::new(Arc::new(user_repository), config.session_secret.clone());
    let nutrition_service = NutritionService::new(Arc::new(catalog));
    let state = web::Data::new(AppState {
        auth,
        nutrition: nutrition_service,
    });
    info!("Application state initialized");

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(RequestTraceMiddleware)
            .route("/", web::get().to(home))
            .route("/login", web::get().to(auth_page))
            .route("/login", web::post().to(login))
            .route("/register", web::get().to(auth_page))
            .route("/register", web::post().to(register))
            .route("/logout", web::get().to(logout))
            .route("/dashboard", web::get().to(dashboard))
            .service(
                web::scope("/api")
                    .route("/health", web::get().to(health_check))
                    .route("/nutrition", web::get().to(nutrition)),
            )
    });

    let server = server.bind(config.bind_addr.as_str())?;
    info!(address = %config.bind_addr, "Starting HTTP server");
    server.run().await
}
