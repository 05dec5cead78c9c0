//! HTTP transport and typed calls for the nutrition API.
//!
//! `ApiClient::request` is the only place that talks HTTP. It has no state
//! and no retries: a 204 yields `None`, any other 2xx is decoded as JSON, and
//! every non-2xx status becomes `ApiError::Status`. The status is kept for
//! logging; callers never branch on it.

use std::time::Duration;

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::models::{
    AiOverviewPayload, DailyLogBundle, Food, LogRequest, MenuAnalysis, ProfileInput, UserProfile,
};

/// Transport failure.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{method} {endpoint} failed with status {status}")]
    Status {
        method: Method,
        endpoint: String,
        status: u16,
    },
    #[error("{method} {endpoint} failed: {source}")]
    Network {
        method: Method,
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to decode response of {method} {endpoint}: {source}")]
    Decode {
        method: Method,
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Invalid(String),
}

impl ApiError {
    /// HTTP status for logging, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Client for the nutrition API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for `base_url` (trailing slashes are ignored).
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ApiResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| ApiError::Invalid(format!("failed to build HTTP client: {err}")))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> ApiResult<Self> {
        Self::new(&config.api_base_url, config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues one request. `None` means the server answered 204.
    pub async fn request<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> ApiResult<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request_with_query(method, endpoint, &[], body).await
    }

    /// Same as [`ApiClient::request`], with `query` pairs appended to the URL.
    pub async fn request_with_query<T, B>(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, &str)],
        body: Option<&B>,
    ) -> ApiResult<Option<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        tracing::debug!(%method, endpoint, "api request");
        let url = format!("{}{}", self.base_url, endpoint);
        let mut request = self.http.request(method.clone(), url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send().await.map_err(|source| ApiError::Network {
            method: method.clone(),
            endpoint: endpoint.to_string(),
            source,
        })?;
        self.decode(method, endpoint, response).await
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        response: reqwest::Response,
    ) -> ApiResult<Option<T>> {
        let status = response.status();
        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }
        if !status.is_success() {
            tracing::warn!(%method, endpoint, status = status.as_u16(), "api error status");
            return Err(ApiError::Status {
                method,
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }
        // FastAPI returns a JSON `null` body for "no profile yet".
        let value: Option<T> = response.json().await.map_err(|source| ApiError::Decode {
            method: method.clone(),
            endpoint: endpoint.to_string(),
            source,
        })?;
        Ok(value)
    }

    async fn required<T, B>(&self, method: Method, endpoint: &str, body: Option<&B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(method.clone(), endpoint, body)
            .await?
            .ok_or_else(|| ApiError::Invalid(format!("{method} {endpoint} returned no content")))
    }

    async fn discard<B>(&self, method: Method, endpoint: &str, body: Option<&B>) -> ApiResult<()>
    where
        B: Serialize + ?Sized,
    {
        let _: Option<serde_json::Value> = self.request(method, endpoint, body).await?;
        Ok(())
    }

    // ========================================================================
    // Profile
    // ========================================================================

    /// Fetches the profile. `None` is the legitimate "not set up yet" state.
    pub async fn get_profile(&self) -> ApiResult<Option<UserProfile>> {
        self.request::<UserProfile, ()>(Method::GET, "/user/profile", None)
            .await
    }

    /// Creates or replaces the profile and returns the server's copy.
    pub async fn save_profile(&self, profile: &ProfileInput) -> ApiResult<UserProfile> {
        self.required(Method::POST, "/user/profile", Some(profile))
            .await
    }

    pub async fn delete_profile(&self) -> ApiResult<()> {
        self.discard::<()>(Method::DELETE, "/user/profile", None)
            .await
    }

    // ========================================================================
    // Log
    // ========================================================================

    pub async fn today_log(&self) -> ApiResult<DailyLogBundle> {
        let bundle = self
            .request::<DailyLogBundle, ()>(Method::GET, "/log/today", None)
            .await?;
        Ok(bundle.unwrap_or_default())
    }

    pub async fn add_log(&self, request: &LogRequest) -> ApiResult<()> {
        self.discard(Method::POST, "/log/add", Some(request)).await
    }

    pub async fn update_log(&self, id: i64, request: &LogRequest) -> ApiResult<()> {
        self.discard(Method::PUT, &format!("/log/{id}"), Some(request))
            .await
    }

    pub async fn delete_log(&self, id: i64) -> ApiResult<()> {
        self.discard::<()>(Method::DELETE, &format!("/log/{id}"), None)
            .await
    }

    // ========================================================================
    // Foods
    // ========================================================================

    pub async fn get_food(&self, id: i64) -> ApiResult<Food> {
        self.required::<Food, ()>(Method::GET, &format!("/foods/{id}"), None)
            .await
    }

    pub async fn search_foods(&self, query: &str) -> ApiResult<Vec<Food>> {
        let foods = self
            .request_with_query::<Vec<Food>, ()>(
                Method::GET,
                "/foods/search",
                &[("q", query)],
                None,
            )
            .await?;
        Ok(foods.unwrap_or_default())
    }

    // ========================================================================
    // Enrichment
    // ========================================================================

    pub async fn chat_overview(&self) -> ApiResult<AiOverviewPayload> {
        self.required::<AiOverviewPayload, ()>(Method::POST, "/chat", None)
            .await
    }

    /// Uploads a menu photo as the multipart field `image`.
    pub async fn analyze_menu(
        &self,
        bytes: Vec<u8>,
        file_name: String,
        mime: &str,
    ) -> ApiResult<MenuAnalysis> {
        let endpoint = "/menu/analyze";
        let method = Method::POST;
        tracing::debug!(%method, endpoint, file_name, mime, "api upload");
        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime)
            .map_err(|err| ApiError::Invalid(format!("invalid mime type {mime}: {err}")))?;
        let form = Form::new().part("image", part);
        let response = self
            .http
            .post(format!("{}{}", self.base_url, endpoint))
            .multipart(form)
            .send()
            .await
            .map_err(|source| ApiError::Network {
                method: method.clone(),
                endpoint: endpoint.to_string(),
                source,
            })?;
        self.decode::<MenuAnalysis>(method, endpoint, response)
            .await?
            .ok_or_else(|| ApiError::Invalid("menu analysis returned no content".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::models::{Goal, Sex};

    fn client(server: &MockServer) -> ApiClient {
        ApiClient::new(&server.uri(), None).unwrap()
    }

    #[tokio::test]
    async fn test_null_profile_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/user/profile"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::Value::Null))
            .expect(1)
            .mount(&server)
            .await;

        let profile = client(&server).get_profile().await.unwrap();
        assert!(profile.is_none());
    }

    #[tokio::test]
    async fn test_no_content_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/log/5"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        client(&server).delete_log(5).await.unwrap();
    }

    #[tokio::test]
    async fn test_error_status_keeps_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/log/today"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client(&server).today_log().await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("/log/today"));
    }

    #[tokio::test]
    async fn test_update_log_puts_body() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/log/9"))
            .and(body_json(json!({"food_id": 3, "grams": 150.0})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9})))
            .expect(1)
            .mount(&server)
            .await;

        client(&server)
            .update_log(
                9,
                &LogRequest {
                    food_id: 3,
                    grams: 150.0,
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_search_encodes_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/foods/search"))
            .and(query_param("q", "greek yogurt & honey"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": 1,
                "name": "Greek yogurt",
                "calories_per_100g": 59.0,
                "protein_per_100g": 10.0,
                "carbs_per_100g": 3.6,
                "fat_per_100g": 0.4
            }])))
            .expect(1)
            .mount(&server)
            .await;

        let foods = client(&server).search_foods("greek yogurt & honey").await.unwrap();
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].name, "Greek yogurt");
    }

    #[tokio::test]
    async fn test_save_profile_returns_server_copy() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/profile"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1,
                "name": "Sam",
                "height_cm": 180.0,
                "weight_kg": 80.0,
                "age": 30,
                "sex": "male",
                "goal": "build_muscle",
                "calorie_target": 2510.0,
                "protein_target": 180.0
            })))
            .expect(1)
            .mount(&server)
            .await;

        let input = ProfileInput {
            name: "Sam".to_string(),
            age: 30,
            height_cm: 180.0,
            weight_kg: 80.0,
            sex: Sex::Male,
            goal: Goal::BuildMuscle,
        };
        let saved = client(&server).save_profile(&input).await.unwrap();
        assert!((saved.calorie_target - 2510.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:8000/", None).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
