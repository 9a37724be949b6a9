// ABOUTME: Structured error types for activity feed provider operations
// ABOUTME: Distinguishes the unauthorized redirect signal from generic fetch failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stride Dashboard

use thiserror::Error;

/// Errors surfaced by activity feed providers.
///
/// `Unauthorized` is a distinct signal: the caller should send the user back
/// to the unauthenticated landing view rather than show a generic error. Any
/// other non-success response or transport failure is a plain fetch failure
/// with no retry.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The feed rejected the session; redirect to the landing view
    #[error("{provider} session is no longer authorized")]
    Unauthorized {
        /// Provider that rejected the request
        provider: String,
    },

    /// The configured feed base URL could not be turned into a request URL
    #[error("invalid feed base URL: {0}")]
    InvalidBaseUrl(String),

    /// The feed answered with a non-success status
    #[error("{provider} request failed with status {status}: {message}")]
    ApiError {
        /// Provider that answered
        provider: String,
        /// HTTP status code of the response
        status: u16,
        /// Response body or status text
        message: String,
    },

    /// The request never produced a usable response
    #[error("network error talking to activity feed: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// The response body could not be decoded into an activity page
    #[error("failed to decode activity feed response: {0}")]
    DecodeError(#[from] serde_json::Error),
}

impl ProviderError {
    /// Whether this error is the unauthorized redirect signal
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
