use std::future::{ready, Ready};

use actix_web::{
    cookie::Cookie,
    dev::Payload,
    http::header::COOKIE,
    FromRequest, HttpRequest,
};

pub const TOKEN_COOKIE: &str = "token";
pub const FLASH_COOKIE: &str = "flash";

// first exact match wins, pairs without `=` are skipped
pub fn get_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    PlaceIdMissing,
    ReviewSubmitted,
}

impl Notice {
    pub fn code(self) -> &'static str {
        match self {
            Self::PlaceIdMissing => "place-id-missing",
            Self::ReviewSubmitted => "review-submitted",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "place-id-missing" => Some(Self::PlaceIdMissing),
            "review-submitted" => Some(Self::ReviewSubmitted),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::PlaceIdMissing => "Place ID not found.",
            Self::ReviewSubmitted => "Review submitted successfully!",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    notice: Option<Notice>,
}

impl Session {
    pub fn from_cookie_header(header: &str) -> Self {
        let token = get_cookie(header, TOKEN_COOKIE).filter(|token| !token.is_empty());
        let notice = get_cookie(header, FLASH_COOKIE).and_then(|code| Notice::from_code(&code));
        Self { token, notice }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    pub fn login_cookie(token: &str) -> Cookie<'static> {
        Cookie::build(TOKEN_COOKIE, token.to_string())
            .path("/")
            .finish()
    }

    pub fn logout_cookie() -> Cookie<'static> {
        removal(TOKEN_COOKIE)
    }

    pub fn flash_cookie(notice: Notice) -> Cookie<'static> {
        Cookie::build(FLASH_COOKIE, notice.code()).path("/").finish()
    }

    pub fn clear_flash_cookie() -> Cookie<'static> {
        removal(FLASH_COOKIE)
    }
}

fn removal(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::build(name, "").path("/").finish();
    cookie.make_removal();
    cookie
}

impl FromRequest for Session {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        // HTTP/2 clients may split cookies over several headers
        let header = req
            .headers()
            .get_all(COOKIE)
            .filter_map(|value| value.to_str().ok())
            .collect::<Vec<_>>()
            .join("; ");
        ready(Ok(Self::from_cookie_header(&header)))
    }
}
