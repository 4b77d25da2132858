use finboard_shared::protocol::{ApiRequest, OverviewRequest, SessionRequest};
use finboard_shared::{AccountOverview, SessionState};

use crate::web::{HttpClient, HttpError};

#[derive(Clone, Debug, PartialEq)]
pub struct BankApi {
    pub base_url: String,
}

impl BankApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    async fn call<R: ApiRequest>(&self) -> Result<R::Response, HttpError> {
        HttpClient::request(R::METHOD, &self.url(R::PATH))
            .header("Accept", "application/json")
            .send()
            .await?
            .json::<R::Response>()
            .await
    }

    /// 查询当前会话
    pub async fn fetch_session(&self) -> Result<SessionState, HttpError> {
        self.call::<SessionRequest>().await
    }

    /// 获取余额与最近交易
    pub async fn fetch_overview(&self) -> Result<AccountOverview, HttpError> {
        self.call::<OverviewRequest>().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_paths_without_double_slash() {
        let api = BankApi::new("https://api.bank.test/");
        assert_eq!(
            api.url(SessionRequest::PATH),
            "https://api.bank.test/api/auth/session"
        );
        assert_eq!(api.url("health"), "https://api.bank.test/health");
        assert_eq!(BankApi::new("").url(OverviewRequest::PATH), "/api/accounts/overview");
    }
}
