use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use hbnb_front::{
    api::{HttpLodgingApi, LodgingApi},
    config::Config,
    pages,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_ansi(true)
        .with_file(false)
        .pretty()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let api: Arc<dyn LodgingApi> = Arc::new(HttpLodgingApi::new(config.api_url.clone())?);
    let api = web::Data::from(api);

    tracing::info!(
        "serving on {}:{} against {}",
        config.bind_addr,
        config.port,
        config.api_url
    );
    HttpServer::new(move || App::new().app_data(api.clone()).configure(pages::configure))
        .bind((config.bind_addr.as_str(), config.port))?
        .run()
        .await?;
    Ok(())
}
