use crate::{AccountOverview, SessionState};
use serde::{Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest {
    /// The response type returned by this request.
    type Response: Serialize + DeserializeOwned;
    /// The URL path (or suffix).
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

// =========================================================
// Request Definitions
// =========================================================

/// Current session of the visitor (cookie based)
#[derive(Debug)]
pub struct SessionRequest;

impl ApiRequest for SessionRequest {
    type Response = SessionState;
    const PATH: &'static str = "/api/auth/session";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// Balance and recent transactions for the dashboard
#[derive(Debug)]
pub struct OverviewRequest;

impl ApiRequest for OverviewRequest {
    type Response = AccountOverview;
    const PATH: &'static str = "/api/accounts/overview";
    const METHOD: HttpMethod = HttpMethod::Get;
}
