use std::sync::Arc;

use super::RecordingNavigator;
use crate::controller::SubmissionController;
use crate::form::FormFields;
use crate::transport::HttpClient;
use crate::transport::TransportAdapter;

pub const TEST_BASE_URL: &str = "http://shashin.test";

/// Test fixtures for building controllers around fake collaborators
pub struct TestFixtures;

impl TestFixtures {
    pub fn adapter(client: Arc<dyn HttpClient>) -> TransportAdapter {
        TransportAdapter::new(client, TEST_BASE_URL)
    }

    pub fn controller<F: FormFields>(
        fields: F,
        client: Arc<dyn HttpClient>,
    ) -> (SubmissionController<F>, Arc<RecordingNavigator>) {
        let navigator = RecordingNavigator::new();
        let controller = SubmissionController::new(fields, Self::adapter(client), navigator.clone());
        (controller, navigator)
    }

    pub fn url(path: &str) -> String {
        format!("{}{}", TEST_BASE_URL, path)
    }

    pub const VALID_PASSWORD: &'static str = "Passw0rd";
    pub const VALID_EMAIL: &'static str = "test@example.com";
}
