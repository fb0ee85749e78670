pub mod config;
pub mod db;
pub mod docs;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;
pub mod middleware;
pub mod schema;
pub mod validation;

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{from_fn, Logger};
use actix_web::{web, App, HttpServer};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use config::{ServerConfig, Settings};
pub use db::{create_pool, DbPool};

use crate::docs::ApiDoc;
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crate::infrastructure::{
    DieselCustomerRepository, DieselOrderRepository, DieselProductRepository,
};
use crate::middleware::DOCS_PREFIX;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Create the tables if they do not exist yet.
pub fn run_migrations(pool: &DbPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)?;
    Ok(())
}

/// The storage seams handed to every request.
#[derive(Clone)]
pub struct Repositories {
    pub customers: Arc<dyn CustomerRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub products: Arc<dyn ProductRepository>,
}

impl Repositories {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        orders: Arc<dyn OrderRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            customers,
            orders,
            products,
        }
    }

    /// Diesel repositories sharing one connection pool.
    pub fn diesel(pool: DbPool) -> Self {
        Self::new(
            Arc::new(DieselCustomerRepository::new(pool.clone())),
            Arc::new(DieselOrderRepository::new(pool.clone())),
            Arc::new(DieselProductRepository::new(pool)),
        )
    }
}

/// Build the application: routes, documentation, JSON enforcement and access log.
pub fn build_app(
    repos: Repositories,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::from(repos.customers))
        .app_data(web::Data::from(repos.orders))
        .app_data(web::Data::from(repos.products))
        .app_data(handlers::json_config())
        .app_data(handlers::path_config())
        .wrap(from_fn(middleware::require_json))
        .wrap(Logger::default())
        .route("/", web::get().to(handlers::index::index))
        .service(
            web::scope("/customers")
                .route("", web::get().to(handlers::customers::list_customers))
                .route("", web::post().to(handlers::customers::create_customer))
                .route("/{cust_code}", web::get().to(handlers::customers::get_customer))
                .route("/{cust_code}", web::patch().to(handlers::customers::patch_customer))
                .route("/{cust_code}", web::put().to(handlers::customers::replace_customer))
                .route("/{cust_code}", web::delete().to(handlers::customers::delete_customer))
                .route(
                    "/{cust_code}/orders",
                    web::get().to(handlers::customers::get_customer_orders),
                ),
        )
        .service(
            web::scope("/orders")
                .route("", web::post().to(handlers::orders::create_order))
                .route("/{ord_num}", web::get().to(handlers::orders::get_order)),
        )
        .service(
            web::scope("/products")
                .route("", web::get().to(handlers::products::list_products))
                .route("", web::post().to(handlers::products::create_product)),
        )
        .route(
            "/product-types",
            web::get().to(handlers::products::list_product_types),
        )
        .service(web::redirect(DOCS_PREFIX, format!("{}/", DOCS_PREFIX)))
        .service(
            SwaggerUi::new(format!("{}/{{_:.*}}", DOCS_PREFIX))
                .url(format!("{}/openapi.json", DOCS_PREFIX), ApiDoc::openapi()),
        )
}

/// Build and return an actix-web `Server` bound to the configured address.
///
/// The caller is responsible for `.await`-ing (or `tokio::spawn`-ing) the
/// returned server. On SIGINT/SIGTERM it stops accepting connections and
/// drains in-flight requests before resolving.
pub fn build_server(
    repos: Repositories,
    config: &ServerConfig,
) -> std::io::Result<actix_web::dev::Server> {
    let mut server = HttpServer::new(move || build_app(repos.clone()));
    if let Some(secs) = config.shutdown_timeout {
        server = server.shutdown_timeout(secs);
    }
    Ok(server.bind((config.host.as_str(), config.port))?.run())
}
