use std::io;

use dotenvy::dotenv;
use sample_api::{build_server, create_pool, run_migrations, Repositories, Settings};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let settings = Settings::from_env().map_err(io::Error::other)?;
    log::debug!("Loaded configuration: {:?}", settings);

    let pool = create_pool(&settings.database).map_err(io::Error::other)?;
    if settings.database.run_migrations {
        run_migrations(&pool).map_err(io::Error::other)?;
        log::info!("Database migrations applied");
    }

    log::info!(
        "Starting server at http://{}:{}",
        settings.server.host,
        settings.server.port
    );

    build_server(Repositories::diesel(pool), &settings.server)?.await?;

    log::info!("Server stopped, connection pool released");
    Ok(())
}
