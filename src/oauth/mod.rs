//! OAuth2 authorization-code flow with PKCE.
//!
//! [`EtsyOAuthClient`] produces the consent URL and exchanges the returned
//! code (or a refresh token) for an access token. Rejections from the token
//! endpoint surface as [`Error::TokenExchange`](crate::Error::TokenExchange)
//! carrying an [`OAuthError`].

mod client;
pub mod pkce;
mod token;

pub use client::{AUTHORIZATION_URL, EtsyOAuthClient, TOKEN_URL};
pub use token::{OAuthError, OAuthErrorKind, TokenResponse};
