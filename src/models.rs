pub mod credentials;
pub mod ping_outcome;
pub mod select_query;

pub use credentials::{Credentials, CredentialsError};
pub use ping_outcome::PingOutcome;
pub use select_query::SelectQuery;
