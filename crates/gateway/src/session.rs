//! Session tokens.
//!
//! Tokens are HS256 JWTs carrying the login user and their workspace.
//! The SSO layer is expected to issue them; `issue` exists for local
//! development and tests.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use common::{AppResult, JwtConfig};
use domain::Workspace;

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Login username
    pub sub: String,
    pub workspace_id: i64,
    pub workspace_name: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn workspace(&self) -> Workspace {
        Workspace::new(self.workspace_id, self.workspace_name.clone())
    }
}

/// Signs and verifies session tokens with a shared secret.
#[derive(Clone)]
pub struct SessionTokens {
    encoding: EncodingKey,
    decoding: DecodingKey,
    expiration_hours: i64,
}

impl SessionTokens {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
            expiration_hours: config.expiration_hours,
        }
    }

    /// Sign a token for `username` in `workspace`.
    pub fn issue(&self, username: &str, workspace: &Workspace) -> AppResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: username.to_string(),
            workspace_id: workspace.workspace_id,
            workspace_name: workspace.workspace_name.clone(),
            exp: (now + Duration::hours(self.expiration_hours)).timestamp(),
            iat: now.timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }
}
