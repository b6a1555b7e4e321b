use actix_web::{web, App, HttpServer};
use backend::infra::state::build_state;
use backend::middleware::cors::cors_middleware;
use backend::middleware::host_guard::HostGuard;
use backend::middleware::request_trace::RequestTrace;
use backend::middleware::session_migrator::SessionMigrator;
use backend::middleware::session_reader::SessionReader;
use backend::middleware::tenant_resolver::TenantResolver;
use backend::routes;
use backend::state::security_config::SecurityConfig;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g., set -a; . ./.env; set +a)
    let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("BACKEND_PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ BACKEND_PORT must be a valid port number");
            std::process::exit(1);
        });

    let jwt_secret = match std::env::var("APP_JWT_SECRET") {
        Ok(secret) => secret,
        Err(_) => {
            eprintln!("❌ APP_JWT_SECRET must be set");
            std::process::exit(1);
        }
    };
    let security_config = SecurityConfig::new(jwt_secret.as_bytes());

    // Operational endpoints are confined to this host; per-tenant domains
    // never serve them.
    let base_url = match std::env::var("APP_BASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("❌ APP_BASE_URL must be set");
            std::process::exit(1);
        }
    };
    let host_guard = match HostGuard::new(&base_url) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("❌ Invalid APP_BASE_URL: {e}");
            std::process::exit(1);
        }
    };

    let db_url = match backend::config::db::db_url() {
        Ok(url) => url,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let app_state = match build_state()
        .with_db_url(db_url)
        .with_security(security_config)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    println!("🚀 Starting Opine Backend on http://{}:{}", host, port);
    println!("✅ Database connected");

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(RequestTrace)
            .app_data(data.clone())
            .service(
                web::scope("/health")
                    .wrap(host_guard.clone())
                    .configure(routes::health::configure_routes),
            )
            .service(
                // actix runs the most recently registered wrap first, so the
                // identity pipeline executes TenantResolver →
                // SessionMigrator → SessionReader. Migrator before Reader is
                // deliberate: a token arriving in the query becomes a cookie
                // and a redirect, and only the follow-up request is read.
                web::scope("")
                    .wrap(SessionReader)
                    .wrap(SessionMigrator)
                    .wrap(TenantResolver)
                    .configure(routes::configure),
            )
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
