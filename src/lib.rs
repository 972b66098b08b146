//! Keeps a Supabase project from being paused for inactivity.
//!
//! One invocation reads `SUPABASE_URL` and `SUPABASE_KEY`, asks the project's
//! PostgREST API for the first row of the `neighbor` table, and reports the
//! result as a single line.
//!
//! Example:
//!
//! ```no_run
//! use supabase_keepalive::{Credentials, SupabaseClient, keep_alive};
//!
//! # async fn run() {
//! let outcome = keep_alive(Credentials::from_env(), SupabaseClient::new).await;
//! println!("{}", outcome);
//! # }
//! ```

pub mod clients;
pub mod models;
pub mod pinger;
pub mod utils;

pub use clients::{SupabaseClient, TableClient};
pub use models::{Credentials, CredentialsError, PingOutcome, SelectQuery};
pub use pinger::keep_alive;
pub use utils::init_tracing;
