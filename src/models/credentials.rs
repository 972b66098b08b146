use secrecy::SecretString;
use thiserror::Error;

pub const URL_VAR: &str = "SUPABASE_URL";
pub const KEY_VAR: &str = "SUPABASE_KEY";

/// Represents authentication credentials for a Supabase project.
///
/// # Fields
///
/// * `endpoint` - The project base URL, e.g. `https://xyz.supabase.co`.
/// * `api_key` - The project API key. Kept as a secret so it never shows up in
///   `Debug` output or logs.
#[derive(Clone, Debug)]
pub struct Credentials {
    pub endpoint: String,
    pub api_key: SecretString,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("missing or empty environment variable(s): {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

impl Credentials {
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: SecretString::from(api_key.into()),
        }
    }

    /// Loads `SUPABASE_URL` and `SUPABASE_KEY` from the process environment.
    pub fn from_env() -> Result<Self, CredentialsError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same rule as [`Credentials::from_env`] against an arbitrary lookup.
    /// Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CredentialsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        match (read(URL_VAR), read(KEY_VAR)) {
            (Some(endpoint), Some(api_key)) => Ok(Self::new(endpoint.trim(), api_key.trim())),
            (endpoint, api_key) => {
                let mut missing = Vec::new();
                if endpoint.is_none() {
                    missing.push(URL_VAR);
                }
                if api_key.is_none() {
                    missing.push(KEY_VAR);
                }
                Err(CredentialsError::Missing(missing))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn loads_both_values() {
        let creds = Credentials::from_lookup(lookup_from(&[
            (URL_VAR, "https://abc.supabase.co"),
            (KEY_VAR, "secret-key"),
        ]))
        .unwrap();

        assert_eq!(creds.endpoint, "https://abc.supabase.co");
        assert_eq!(creds.api_key.expose_secret(), "secret-key");
    }

    #[test]
    fn both_unset_reports_both_names() {
        let err = Credentials::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(err, CredentialsError::Missing(vec![URL_VAR, KEY_VAR]));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let err = Credentials::from_lookup(lookup_from(&[
            (URL_VAR, "https://abc.supabase.co"),
            (KEY_VAR, "   "),
        ]))
        .unwrap_err();

        assert_eq!(err, CredentialsError::Missing(vec![KEY_VAR]));
        assert!(err.to_string().contains(KEY_VAR));
    }

    #[test]
    fn debug_output_hides_the_key() {
        let creds = Credentials::new("https://abc.supabase.co", "super-secret");
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("abc.supabase.co"));
    }
}
