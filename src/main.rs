use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use agrimitra_backend::config::Config;
use agrimitra_backend::database::Database;
use agrimitra_backend::diagnose::provider::{
    DiagnosisChain, GeminiDiagnosisProvider, MlServiceProvider,
};
use agrimitra_backend::forum::service::ForumService;
use agrimitra_backend::market::service::MarketService;
use agrimitra_backend::middleware::not_found::not_found;
use agrimitra_backend::router::index::routes;
use agrimitra_backend::schemes::service::SchemesService;
use agrimitra_backend::utils::gemini::GeminiClient;
use agrimitra_backend::weather::service::WeatherService;

// Chat images arrive base64-encoded inside the JSON body.
const JSON_PAYLOAD_LIMIT: usize = 10 * 1024 * 1024;

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok().body("Agri Mitra API is running")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logger with environment variable support
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env();

    // The driver connects lazily, so a missing deployment only degrades the
    // forum and test-db routes instead of stopping the process.
    let database = match Database::init(&config.mongodb_uri).await {
        Ok(database) => {
            match database.ping().await {
                Ok(()) => info!("Connected successfully to MongoDB"),
                Err(e) => warn!("MongoDB is not reachable yet: {e}"),
            }
            Some(database)
        }
        Err(e) => {
            error!("Invalid MongoDB configuration, forum routes will be unavailable: {e}");
            None
        }
    };

    let gemini = GeminiClient::new(config.gemini_api_key.clone(), config.gemini_model.clone());
    if !gemini.is_configured() {
        warn!("GEMINI_API_KEY is not set; AI-backed routes will return errors");
    }

    let diagnosis_chain = DiagnosisChain::new(vec![
        Box::new(MlServiceProvider::new(config.ml_service_url.clone())),
        Box::new(GeminiDiagnosisProvider::new(gemini.clone())),
    ]);

    let schemes = match SchemesService::load() {
        Ok(schemes) => schemes,
        Err(e) => {
            // The dataset ships inside the binary, so this is a build defect.
            error!("Failed to parse bundled schemes dataset: {e}");
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e));
        }
    };

    let gemini = web::Data::new(gemini);
    let diagnosis_chain = web::Data::new(diagnosis_chain);
    let market = web::Data::new(MarketService::new(config.data_gov_api_key.clone()));
    let weather = web::Data::new(WeatherService::new());
    let schemes = web::Data::new(schemes);
    let database_data = database.as_ref().map(|db| web::Data::new(db.clone()));
    let forum = database
        .as_ref()
        .map(|db| web::Data::new(ForumService::new(db)));

    let port = config.port;
    info!("Starting server on http://localhost:{port}");

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::JsonConfig::default().limit(JSON_PAYLOAD_LIMIT))
            .app_data(gemini.clone())
            .app_data(diagnosis_chain.clone())
            .app_data(market.clone())
            .app_data(weather.clone())
            .app_data(schemes.clone());

        if let Some(database) = &database_data {
            app = app.app_data(database.clone());
        }
        if let Some(forum) = &forum {
            app = app.app_data(forum.clone());
        }

        app.wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(routes)
            .service(index)
            .default_service(web::route().to(not_found))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await?;

    info!("Server has stopped");

    Ok(())
}
