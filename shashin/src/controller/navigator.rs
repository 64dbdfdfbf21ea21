use std::time::Duration;

use tracing::info;

/// Performs the follow-up navigation of a successful submission.
///
/// Implementations own the timer: the controller calls this once and moves on.
pub trait Navigator: Send + Sync {
    fn navigate_after(&self, target: &str, delay: Duration);
}

/// Navigator for hosts without a page to move, such as the smoke CLI.
#[derive(Debug, Clone, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate_after(&self, target: &str, delay: Duration) {
        info!("navigator::navigate_after::{}::{}ms", target, delay.as_millis());
    }
}
