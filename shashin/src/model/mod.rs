pub mod location;
pub mod outcome;
pub mod submission;

pub use location::Coordinate;
pub use outcome::ServerOutcome;
pub use submission::FormMessage;
pub use submission::SubmissionState;
