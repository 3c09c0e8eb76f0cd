#[tokio::main]
async fn main() -> nightfury::error::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("nightfury=info,serenity=warn"),
    )
    .init();
    log::info!("Starting nightfury Discord bot");

    match nightfury::run().await {
        Ok(_) => {
            log::info!("Bot shut down successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("Bot encountered an error: {}", e);
            Err(e)
        }
    }
}
