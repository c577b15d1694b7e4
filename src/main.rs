use sitekit::configuration::get_configuration;
use sitekit::startup::Application;
use sitekit::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("sitekit".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");
    let application = Application::build(configuration.clone()).await?;
    tracing::info!(
        "Serving on http://{}:{}",
        configuration.application.host,
        application.port()
    );
    application.run_until_stopped(configuration).await?;
    Ok(())
}
