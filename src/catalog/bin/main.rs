use lambda_http::{run, Error};
use albums::albums::factory::create_album_repository;
use albums::catalog::controller::router;
use albums::core::controller::AppState;
use albums::core::domain::{Configuration, ServerRuntime};
use albums::utils::logs::setup_tracing;

// See https://docs.aws.amazon.com/lambda/latest/dg/lambda-rust.html
// https://docs.aws.amazon.com/lambda/latest/dg/rust-http-events.html

#[tokio::main]
async fn main() -> Result<(), Error> {
    setup_tracing();

    let config = Configuration::from_env()?;
    let state = AppState::new(config.clone(), create_album_repository(config.seed_catalog));

    match config.runtime {
        ServerRuntime::Local => {
            let addr = config.socket_addr();
            tracing::info!(%addr, seeded = config.seed_catalog, "album catalog listening");
            axum::Server::bind(&addr)
                .serve(router::<axum::body::Body>(state).into_make_service())
                .await?;
            Ok(())
        }
        ServerRuntime::Lambda => {
            tracing::info!(seeded = config.seed_catalog, "album catalog starting on lambda runtime");
            run(router::<lambda_http::Body>(state)).await
        }
    }
}
