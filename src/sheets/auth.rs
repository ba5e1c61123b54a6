// src/sheets/auth.rs
use crate::sheets::SheetsError;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;

const SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";
const GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// The fields of a Google service-account key file that we use.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: i64,
    exp: i64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl ServiceAccountKey {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SheetsError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SheetsError::Config(format!("Failed to read key file {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, SheetsError> {
        let key: ServiceAccountKey = serde_json::from_str(raw)
            .map_err(|e| SheetsError::Config(format!("Invalid service-account key: {e}")))?;
        // Fail at startup rather than on the first request.
        EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .map_err(|e| SheetsError::Config(format!("Invalid private key: {e}")))?;
        Ok(key)
    }

    /// Signed JWT assertion for the OAuth token exchange.
    fn assertion(&self, now: i64) -> Result<String, SheetsError> {
        let claims = AssertionClaims {
            iss: &self.client_email,
            scope: SCOPE,
            aud: &self.token_uri,
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };
        let key = EncodingKey::from_rsa_pem(self.private_key.as_bytes())?;
        Ok(encode(&Header::new(Algorithm::RS256), &claims, &key)?)
    }

    /// Exchange a fresh assertion for a short-lived access token.
    pub fn access_token(&self, client: &Client) -> Result<String, SheetsError> {
        let assertion = self.assertion(chrono::Utc::now().timestamp())?;

        let resp = client
            .post(&self.token_uri)
            .form(&[("grant_type", GRANT_TYPE), ("assertion", assertion.as_str())])
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(SheetsError::Auth(format!("token exchange HTTP {status}: {body}")));
        }

        let token: TokenResponse = resp.json()?;
        Ok(token.access_token)
    }
}
