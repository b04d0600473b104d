mod outcome;
mod profile;

pub use outcome::FetchOutcome;
pub use profile::UserProfile;
