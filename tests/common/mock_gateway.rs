use aquadash::error::AppError;
use aquadash::gateway::SubmissionGateway;
use aquadash::settings::ds::DashboardSettings;
use async_trait::async_trait;
use mockall::mock;
use reqwest::StatusCode;
use std::sync::{Arc, Mutex};

mock! {
    pub SubmissionGateway {}

    #[async_trait]
    impl SubmissionGateway for SubmissionGateway {
        async fn submit(&self, settings: DashboardSettings) -> Result<(), AppError>;
    }
}

/// Gateway that accepts every snapshot and records what it was given.
pub fn accepting_gateway(seen: Arc<Mutex<Vec<DashboardSettings>>>) -> Arc<MockSubmissionGateway> {
    let mut gateway = MockSubmissionGateway::new();
    gateway.expect_submit().times(0..).returning(move |settings| {
        seen.lock().unwrap().push(settings);
        Ok(())
    });
    Arc::new(gateway)
}

/// Gateway whose backend answers every submission with the given status.
pub fn rejecting_gateway(status: u16, calls: Arc<Mutex<usize>>) -> Arc<MockSubmissionGateway> {
    let mut gateway = MockSubmissionGateway::new();
    gateway.expect_submit().times(0..).returning(move |_| {
        *calls.lock().unwrap() += 1;
        Err(AppError::Rejected(StatusCode::from_u16(status).unwrap()))
    });
    Arc::new(gateway)
}
