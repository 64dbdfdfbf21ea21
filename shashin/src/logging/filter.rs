use tracing::Level;
use tracing::Metadata;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::Filter;
use tracing_subscriber::registry::LookupSpan;

/// What goes to the error file: warn and error from our crates, and errors from
/// any dependency (reqwest and hyper report failed connections there).
pub struct ErrorFileFilter;

impl ErrorFileFilter {
    pub fn keeps(level: &Level, target: &str) -> bool {
        match *level {
            Level::ERROR => true,
            Level::WARN => target.starts_with("shashin"),
            _ => false,
        }
    }
}

impl<S> Filter<S> for ErrorFileFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        Self::keeps(meta.level(), meta.target())
    }
}
