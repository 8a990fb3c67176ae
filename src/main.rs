use reservation_form_ddd::{
    adapters::http::ReservationService as HttpReservationService,
    adapters::terminal::{
        FrontEnd, navigator::Navigator as TerminalNavigator,
        notification_service::NotificationService as TerminalNotificationService,
    },
    application::reservation_form::{FormDependencies, ReservationForm},
    config::AppConfig,
    domain::Navigation,
};
use std::sync::Arc;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reservation_form_ddd=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    tracing::info!("Reservation API: {}", config.api_base_url);

    // Initialize adapters
    let reservation_service = Arc::new(
        HttpReservationService::new(&config.api_base_url).expect("Failed to build HTTP client"),
    );
    let notification_service = Arc::new(TerminalNotificationService::new());
    let navigator = Arc::new(TerminalNavigator::new());

    let deps = FormDependencies {
        reservation_service,
        notification_service,
        navigator: navigator.clone(),
    };

    let form = match ReservationForm::new(deps, &config.session, config.room_state) {
        Ok(form) => form,
        Err(e) => {
            tracing::error!("Cannot open reservation form: {}", e);
            std::process::exit(1);
        }
    };

    let mut front_end = FrontEnd::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    front_end.run(&form).await.expect("Terminal I/O failed");

    match navigator.destination() {
        Some(Navigation::ToReservations(state)) => {
            tracing::info!("Reservation {} created", state.reservation.id.value());
        }
        Some(Navigation::ToRooms) => tracing::info!("Reservation cancelled"),
        None => tracing::info!("Input closed before the form was completed"),
    }
}
