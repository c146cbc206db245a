use crate::{
    adapters::{
        http::{app_state::AppState, session::derive_cookie_key},
        notification::RedisTopicPublisher,
    },
    infra::{config::AppConfig, redis_persistence},
    use_cases::{
        account::{AccountUseCases, UserRepo},
        appointment::{AppointmentNotifier, AppointmentRepo, AppointmentUseCases},
    },
};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let persistence = Arc::new(redis_persistence(&config.redis_url).await?);

    let notifier = config.notify_topic.as_ref().map(|topic| {
        tracing::info!(topic = %topic, "Appointment notifications enabled");
        Arc::new(RedisTopicPublisher::new(persistence.manager(), topic.clone()))
            as Arc<dyn AppointmentNotifier>
    });
    if notifier.is_none() {
        tracing::warn!("NOTIFY_TOPIC not set, appointment notifications disabled");
    }

    let account_use_cases = AccountUseCases::new(persistence.clone() as Arc<dyn UserRepo>);
    let appointment_use_cases =
        AppointmentUseCases::new(persistence.clone() as Arc<dyn AppointmentRepo>, notifier);

    let cookie_key = derive_cookie_key(&config.session_secret);

    Ok(AppState {
        config: Arc::new(config),
        account_use_cases: Arc::new(account_use_cases),
        appointment_use_cases: Arc::new(appointment_use_cases),
        cookie_key,
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "medtrack=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), skipped when the file can't be created
    let json_layer = File::create("app.log").ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(file)
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
