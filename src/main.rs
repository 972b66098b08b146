use supabase_keepalive::{Credentials, SupabaseClient, init_tracing, keep_alive};
use tracing::debug;

// Always exits 0: failures are reported on stdout, not through the exit status.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_tracing();
    debug!(version = env!("CARGO_PKG_VERSION"), "starting keep-alive ping");

    let credentials = Credentials::from_env();
    let outcome = keep_alive(credentials, SupabaseClient::new).await;

    println!("{}", outcome);
}
