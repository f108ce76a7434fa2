//! Authentication settings.

use secrecy::SecretString;

/// Jenkins user and API token, sent as HTTP Basic credentials.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub username: String,
    pub api_token: SecretString,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let auth = AuthConfig {
            username: "admin".to_string(),
            api_token: SecretString::new("super-secret".into()),
        };
        let debug = format!("{:?}", auth);
        assert!(debug.contains("admin"));
        assert!(!debug.contains("super-secret"));
    }
}
