use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};
use std::path::{Path, PathBuf};

use ideahub::auth::middleware::{require_auth, require_json_content_type};
use ideahub::auth::password;
use ideahub::db;
use ideahub::handlers::file_handlers::UploadDir;
use ideahub::handlers::{
    auth_handlers, file_handlers, idea_handlers, stats_handlers, user_handlers,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let database_path =
        std::env::var("DATABASE_PATH").unwrap_or_else(|_| "data/app.db".to_string());
    let upload_dir = PathBuf::from(
        std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "data/uploads".to_string()),
    );
    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());

    if let Some(parent) = Path::new(&database_path).parent() {
        std::fs::create_dir_all(parent).expect("Failed to create data directory");
    }
    std::fs::create_dir_all(&upload_dir).expect("Failed to create upload directory");

    // Initialize database
    let pool = db::init_pool(&database_path);
    db::run_migrations(&pool);

    // Seed default admin account if the users table is empty
    let admin_hash =
        password::hash_password("admin123").expect("Failed to hash default password");
    db::seed_admin(&pool, &admin_hash);

    // Session encryption key — load from SESSION_KEY env var for persistent sessions across restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+) — generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        let session_mw =
            SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                .cookie_secure(false)
                .cookie_http_only(true)
                .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(UploadDir(upload_dir.clone())))
            // Uploaded bytes are also served statically
            .service(actix_files::Files::new("/uploads", upload_dir.clone()))
            .service(
                web::scope("/api/users")
                    .wrap(actix_web::middleware::from_fn(require_json_content_type))
                    // Public: signup and login
                    .route("", web::post().to(user_handlers::create))
                    .route("/login", web::post().to(auth_handlers::login))
                    .service(
                        web::scope("")
                            .wrap(actix_web::middleware::from_fn(require_auth))
                            // /profile and /logout BEFORE /{id} to avoid routing conflict
                            .route("/profile", web::get().to(auth_handlers::profile))
                            .route("/logout", web::get().to(auth_handlers::logout))
                            .route("", web::get().to(user_handlers::list))
                            .route("/{id}", web::get().to(user_handlers::read))
                            .route("/{id}", web::put().to(user_handlers::update))
                            .route("/{id}", web::delete().to(user_handlers::delete))
                            .route("/{id}/status", web::put().to(user_handlers::set_status)),
                    ),
            )
            .service(
                web::scope("/api/ideas")
                    .wrap(actix_web::middleware::from_fn(require_json_content_type))
                    .wrap(actix_web::middleware::from_fn(require_auth))
                    // /stats and /detailed BEFORE /{id} to avoid routing conflict
                    .route("/stats", web::get().to(stats_handlers::all_idea_count))
                    .route("/detailed", web::get().to(idea_handlers::list::detailed))
                    .route("", web::post().to(idea_handlers::crud::create))
                    .route("", web::get().to(idea_handlers::list::list))
                    .route("/{id}/user", web::get().to(idea_handlers::list::by_user))
                    .route("/{id}/status", web::put().to(idea_handlers::lifecycle::update_status))
                    .route("/{id}/reward", web::patch().to(idea_handlers::lifecycle::grant_reward))
                    .route("/{id}/like", web::post().to(idea_handlers::social::like))
                    .route("/{id}/unlike", web::post().to(idea_handlers::social::unlike))
                    .route("/{id}/comment", web::post().to(idea_handlers::social::add_comment))
                    .route("/{id}", web::get().to(idea_handlers::crud::read))
                    .route("/{id}", web::put().to(idea_handlers::crud::update))
                    .route("/{id}", web::delete().to(idea_handlers::crud::delete)),
            )
            .service(
                web::scope("/api/employees")
                    .wrap(actix_web::middleware::from_fn(require_auth))
                    .route("/{id}/stats", web::get().to(stats_handlers::employee_stats)),
            )
            .service(
                web::scope("/api/files")
                    .wrap(actix_web::middleware::from_fn(require_auth))
                    .route("/upload", web::post().to(file_handlers::upload))
                    .route("/file/{id}", web::get().to(file_handlers::get_by_id))
                    .route("/name/{filename}", web::get().to(file_handlers::get_by_name)),
            )
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                actix_web::HttpResponse::NotFound()
                    .json(serde_json::json!({ "message": "Not found" }))
            }))
    })
    .bind(bind_addr.as_str())?
    .run()
    .await
}
