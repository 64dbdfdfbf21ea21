//! Fakes for the injected collaborators. Enabled by the `testing` feature.

mod fixtures;
mod mocks;

pub use fixtures::TestFixtures;
pub use mocks::Gate;
pub use mocks::GatedGeolocation;
pub use mocks::GatedHttpClient;
pub use mocks::GeolocationGate;
pub use mocks::RecordingNavigator;
pub use mocks::StaticGeolocation;
pub use mocks::StubHttpClient;
