use std::fmt;

/// What a single keep-alive attempt ended as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PingOutcome {
    /// One or both credentials were absent; no request was made.
    MissingCredentials,
    /// The read completed without error.
    Active,
    /// Client construction, transport, auth or the query itself failed.
    Failed(String),
}

impl PingOutcome {
    pub fn is_active(&self) -> bool {
        matches!(self, PingOutcome::Active)
    }

    /// The status line printed to stdout.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PingOutcome::MissingCredentials => {
                write!(f, "Error: Supabase URL or Key could not be found.")
            }
            PingOutcome::Active => write!(f, "Success! Supabase remains active."),
            PingOutcome::Failed(reason) => write!(f, "An error occurred: {}", reason),
        }
    }
}
