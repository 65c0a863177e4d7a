use contact_relay::configuration::get_configuration;
use contact_relay::domain::contact::service::ContactRelay;
use contact_relay::inbound::http::Application;
use contact_relay::outbound::directory::StaticDirectory;
use contact_relay::outbound::notifier::email_client::EmailClient;
use contact_relay::outbound::telemetry::init_logger;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let configuration = get_configuration().expect("Failed to read configuration");
    init_logger("contact_relay", &configuration.log_level(), std::io::stdout);

    let directory = StaticDirectory::from_settings(&configuration.accounts)
        .expect("Invalid account configuration");
    let mailer = EmailClient::from_settings(&configuration.email_client);
    if mailer.is_none() {
        tracing::warn!("Email transport is not configured; submissions will be rejected");
    }

    let contact_service = ContactRelay::new(directory, mailer);
    let application = Application::build(contact_service, configuration.application).await?;

    application.run_until_stopped().await?;
    Ok(())
}
