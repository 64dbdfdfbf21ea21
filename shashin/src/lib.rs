pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod form;
pub mod location;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod model;
pub mod transport;
pub mod validator;

pub use controller::Navigator;
pub use controller::SubmissionController;
pub use controller::SubmitOutcome;
pub use error::Result;
pub use model::FormMessage;
pub use model::ServerOutcome;
pub use model::SubmissionState;

// Fakes shared by the unit tests and the integration tests under tests/
#[cfg(any(test, feature = "testing"))]
pub mod testing;
