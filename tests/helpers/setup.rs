use bursdag_api::Application;
use bursdag_infra::{setup_context_inmemory, Config};
use bursdag_sdk::BursdagSDK;

pub struct TestApp {
    pub config: Config,
}

// Launch the application as a background task
pub async fn spawn_app() -> (TestApp, BursdagSDK, String) {
    let mut ctx = setup_context_inmemory();
    ctx.config.port = 0; // Random port

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp { config };
    let sdk = BursdagSDK::new(address.clone(), "");
    (app, sdk, address)
}
