use guest_hub::{Config, Server, init_logger_with_file, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_environment();

    let config = Config::from_env();

    init_logger_with_file(&config.log_level, config.is_production(), config.log_dir.as_deref())?;

    print_banner();
    tracing::info!("Starting guest hub (env: {})", config.environment);

    if config.hotels.default_sources().is_none_or(|s| s.settings_url.is_empty()) {
        tracing::warn!(
            slug = %config.hotels.default_slug(),
            "Default hotel has no settings table; set SHEET_CONFIG_URL"
        );
    }

    let server = Server::new(config);
    server.run().await?;

    Ok(())
}
