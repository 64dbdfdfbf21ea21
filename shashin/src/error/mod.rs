pub mod config;
pub mod location;
pub mod transport;
pub mod validation;

pub use anyhow::anyhow;
pub use anyhow::Context;
pub use anyhow::Error;
pub use anyhow::Result;
pub use config::ConfigError;
pub use location::CoordinateError;
pub use location::GeolocationError;
pub use transport::TransportError;
pub use validation::ValidationError;

// For consistent error handling with location info
#[macro_export]
macro_rules! err_with_loc {
    ($err:expr) => {
        anyhow::anyhow!($err).context(format!("at {}:{}", file!(), line!()))
    };
}
