use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize};
use url::Url;

use crate::data::{AccessToken, Credentials, NewReview, PlaceDetail, PlaceSummary, Review};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("could not reach the API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("{}", status_message(.error, .reason))]
    Status {
        status: u16,
        /// `error` field of the response body, if any
        error: Option<String>,
        /// canonical reason phrase of `status`
        reason: String,
    },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid API url: {0}")]
    Url(#[from] url::ParseError),
}

fn status_message<'a>(error: &'a Option<String>, reason: &'a str) -> &'a str {
    error.as_deref().unwrap_or(reason)
}

impl ApiError {
    pub fn server_error(&self) -> Option<&str> {
        match self {
            Self::Status { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[async_trait]
pub trait LodgingApi: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken, ApiError>;

    async fn places(&self, token: &str) -> Result<Vec<PlaceSummary>, ApiError>;

    async fn place(&self, token: &str, place_id: &str) -> Result<PlaceDetail, ApiError>;

    async fn place_reviews(&self, token: &str, place_id: &str) -> Result<Vec<Review>, ApiError>;

    async fn submit_review(
        &self,
        token: &str,
        place_id: &str,
        review: &NewReview,
    ) -> Result<(), ApiError>;
}

pub struct HttpLodgingApi {
    client: Client,
    base: Url,
}

impl HttpLodgingApi {
    pub fn new(base: Url) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(["api", "v1"])
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url, token: Option<&str>) -> RequestBuilder {
        let builder = self.client.request(method, url);
        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// The reviews route answers `{"message": ...}` instead of `[]` when a
/// place has no reviews yet.
#[derive(Deserialize)]
#[serde(untagged)]
enum ReviewsBody {
    List(Vec<Review>),
    Message {
        #[allow(dead_code)]
        message: String,
    },
}

async fn checked(response: Response) -> Result<Vec<u8>, ApiError> {
    let status = response.status();
    let body = response.bytes().await?;
    if status.is_success() {
        return Ok(body.to_vec());
    }

    let error = serde_json::from_slice::<ErrorBody>(&body)
        .ok()
        .and_then(|body| body.error);
    Err(ApiError::Status {
        status: status.as_u16(),
        error,
        reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = checked(response).await?;
    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl LodgingApi for HttpLodgingApi {
    async fn login(&self, credentials: &Credentials) -> Result<AccessToken, ApiError> {
        let url = self.endpoint(&["auth", "login"])?;
        let response = self
            .request(Method::POST, url, None)
            .json(credentials)
            .send()
            .await?;
        decode(response).await
    }

    async fn places(&self, token: &str) -> Result<Vec<PlaceSummary>, ApiError> {
        let url = self.endpoint(&["places"])?;
        let response = self.request(Method::GET, url, Some(token)).send().await?;
        decode(response).await
    }

    async fn place(&self, token: &str, place_id: &str) -> Result<PlaceDetail, ApiError> {
        let url = self.endpoint(&["places", place_id])?;
        let response = self.request(Method::GET, url, Some(token)).send().await?;
        decode(response).await
    }

    async fn place_reviews(&self, token: &str, place_id: &str) -> Result<Vec<Review>, ApiError> {
        let url = self.endpoint(&["places", "reviews", place_id])?;
        let response = self.request(Method::GET, url, Some(token)).send().await?;
        let body: ReviewsBody = decode(response).await?;
        match body {
            ReviewsBody::List(reviews) => Ok(reviews),
            ReviewsBody::Message { .. } => Ok(Vec::new()),
        }
    }

    async fn submit_review(
        &self,
        token: &str,
        place_id: &str,
        review: &NewReview,
    ) -> Result<(), ApiError> {
        let url = self.endpoint(&["places", "reviews", place_id])?;
        let response = self
            .request(Method::POST, url, Some(token))
            .json(review)
            .send()
            .await?;
        checked(response).await?;
        Ok(())
    }
}
