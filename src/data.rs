use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSummary {
    pub id: String,
    pub title: String,
    pub price: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetail {
    pub id: String,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    /// name of the host, only sent by newer API versions
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub amenities: Option<Vec<Amenity>>,
    /// `None` when the API does not embed reviews in the place payload
    #[serde(default)]
    pub reviews: Option<Vec<Review>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Amenity {
    Name(String),
    Record { name: String },
}

impl Amenity {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Record { name } => name,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub user: Option<Reviewer>,
    pub text: String,
    /// 0 to 5 in practice, clamped when rendered
    pub rating: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Reviewer {
    #[serde(default)]
    pub name: Option<String>,
}

impl Review {
    pub fn author(&self) -> Option<&str> {
        self.user_name
            .as_deref()
            .or_else(|| self.user.as_ref().and_then(|user| user.name.as_deref()))
            .filter(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_string(),
            password: password.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewReview {
    pub text: String,
    pub rating: u8,
}
