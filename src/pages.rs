use actix_web::{
    http::header::{ContentType, LOCATION},
    web, HttpResponse, Responder,
};
use serde::Deserialize;

use crate::{
    api::{ApiError, LodgingApi},
    data::{Credentials, NewReview},
    filter::PriceFilter,
    render,
    session::{Notice, Session},
};

const LOGIN_UNREACHABLE: &str = "Login failed: Could not connect to server.";
const REVIEW_EMPTY: &str = "Please enter a review before submitting.";
const REVIEW_BAD_RATING: &str = "Please choose a rating between 0 and 5.";
const REVIEW_FAILED: &str = "Failed to submit review. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    Login,
    PlaceDetails,
    Listing,
}

impl PageMode {
    pub fn marker(self) -> &'static str {
        match self {
            Self::Login => "login-form",
            Self::PlaceDetails => "place-details",
            Self::Listing => "places-list",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::PlaceDetails => "Place Details",
            Self::Listing => "Places",
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(login_page)
        .service(login)
        .service(logout)
        .service(place_page)
        .service(submit_review)
        .service(place_alias);
}

fn page(mode: PageMode, session: &Session, mut alerts: Vec<String>, main: &str) -> HttpResponse {
    let mut builder = HttpResponse::Ok();
    if let Some(notice) = session.notice() {
        alerts.insert(0, notice.message().to_string());
        builder.cookie(Session::clear_flash_cookie());
    }
    tracing::debug!(page = mode.marker(), alerts = alerts.len(), "render page");

    builder.content_type(ContentType::html()).body(render::document(
        mode.title(),
        session.is_authenticated(),
        &alerts,
        main,
    ))
}

fn redirect(to: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, to))
        .finish()
}

fn redirect_with_notice(to: &str, notice: Notice) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, to))
        .cookie(Session::flash_cookie(notice))
        .finish()
}

#[derive(Deserialize)]
pub(crate) struct ListingQuery {
    price: Option<String>,
}

#[actix_web::get("/")]
pub(crate) async fn index(
    api: web::Data<dyn LodgingApi>,
    session: Session,
    query: web::Query<ListingQuery>,
) -> impl Responder {
    let filter = PriceFilter::parse(query.price.as_deref());

    let places = match session.token() {
        None => None,
        Some(token) => match api.places(token).await {
            Ok(places) => Some(places),
            Err(err) => {
                tracing::error!("fail to fetch places: {err}");
                None
            }
        },
    };

    let main = format!(
        "{}\n{}",
        render::price_filter(filter),
        render::places_list(places.as_deref(), filter)
    );
    page(PageMode::Listing, &session, Vec::new(), &main)
}

#[derive(Deserialize)]
pub(crate) struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[actix_web::get("/login")]
pub(crate) async fn login_page(session: Session) -> impl Responder {
    page(PageMode::Login, &session, Vec::new(), &render::login_form(""))
}

#[actix_web::post("/login")]
pub(crate) async fn login(
    api: web::Data<dyn LodgingApi>,
    session: Session,
    form: web::Form<LoginForm>,
) -> impl Responder {
    let credentials = Credentials::new(&form.email, &form.password);

    match api.login(&credentials).await {
        Ok(token) => {
            tracing::info!("login succeeded");
            tracing::debug!("logged in as {}", credentials.email);
            let mut response = redirect("/");
            if let Err(err) = response.add_cookie(&Session::login_cookie(&token.access_token)) {
                tracing::error!("fail to set token cookie: {err}");
            }
            response
        }
        Err(err) => {
            let message = match &err {
                ApiError::Status { .. } => {
                    tracing::warn!("login rejected: {err}");
                    format!("Login failed: {err}")
                }
                _ => {
                    tracing::error!("error during login: {err}");
                    LOGIN_UNREACHABLE.to_string()
                }
            };
            page(
                PageMode::Login,
                &session,
                vec![message],
                &render::login_form(&credentials.email),
            )
        }
    }
}

#[actix_web::get("/logout")]
pub(crate) async fn logout() -> impl Responder {
    tracing::info!("logging out");
    let mut response = redirect("/login");
    if let Err(err) = response.add_cookie(&Session::logout_cookie()) {
        tracing::error!("fail to clear token cookie: {err}");
    }
    response
}

#[derive(Deserialize)]
pub(crate) struct PlaceQuery {
    place_id: Option<String>,
}

fn place_target<'a>(
    session: &'a Session,
    query: &'a PlaceQuery,
) -> Result<(&'a str, &'a str), HttpResponse> {
    let Some(token) = session.token() else {
        return Err(redirect("/login"));
    };
    let Some(place_id) = query.place_id.as_deref().filter(|id| !id.is_empty()) else {
        return Err(redirect_with_notice("/", Notice::PlaceIdMissing));
    };
    Ok((token, place_id))
}

async fn place_view(api: &dyn LodgingApi, token: &str, place_id: &str, draft: &str) -> String {
    let form = render::review_form(place_id, draft);

    let place = match api.place(token, place_id).await {
        Ok(place) => place,
        Err(err) => {
            tracing::error!("fail to load place {place_id}: {err}");
            return format!("{}\n{form}", render::place_details_error());
        }
    };

    let reviews = match place.reviews.clone() {
        Some(reviews) => Some(reviews),
        None => match api.place_reviews(token, place_id).await {
            Ok(reviews) => Some(reviews),
            Err(err) => {
                tracing::error!("fail to load reviews of {place_id}: {err}");
                None
            }
        },
    };

    format!(
        "{}\n{}\n{form}",
        render::place_details(&place),
        render::review_list(reviews.as_deref())
    )
}

#[actix_web::get("/place.html")]
pub(crate) async fn place_page(
    api: web::Data<dyn LodgingApi>,
    session: Session,
    query: web::Query<PlaceQuery>,
) -> impl Responder {
    let (token, place_id) = match place_target(&session, &query) {
        Ok(target) => target,
        Err(response) => return response,
    };

    let main = place_view(api.get_ref(), token, place_id, "").await;
    page(PageMode::PlaceDetails, &session, Vec::new(), &main)
}

#[derive(Deserialize)]
pub(crate) struct ReviewForm {
    #[serde(rename = "review-text", default)]
    text: String,
    #[serde(default)]
    rating: String,
}

impl ReviewForm {
    fn validate(&self) -> Result<NewReview, &'static str> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(REVIEW_EMPTY);
        }
        let rating = self
            .rating
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|rating| i64::from(*rating) <= render::MAX_RATING)
            .ok_or(REVIEW_BAD_RATING)?;
        Ok(NewReview {
            text: text.to_string(),
            rating,
        })
    }
}

#[actix_web::post("/place.html")]
pub(crate) async fn submit_review(
    api: web::Data<dyn LodgingApi>,
    session: Session,
    query: web::Query<PlaceQuery>,
    form: web::Form<ReviewForm>,
) -> impl Responder {
    let (token, place_id) = match place_target(&session, &query) {
        Ok(target) => target,
        Err(response) => return response,
    };

    let review = match form.validate() {
        Ok(review) => review,
        Err(hint) => {
            let main = place_view(api.get_ref(), token, place_id, &form.text).await;
            return page(PageMode::PlaceDetails, &session, vec![hint.to_string()], &main);
        }
    };

    match api.submit_review(token, place_id, &review).await {
        Ok(()) => {
            tracing::info!("review submitted for place {place_id}");
            redirect_with_notice(&render::place_href(place_id), Notice::ReviewSubmitted)
        }
        Err(err) => {
            tracing::warn!("fail to submit review for place {place_id}: {err}");
            let message = err.server_error().unwrap_or(REVIEW_FAILED).to_string();
            let main = place_view(api.get_ref(), token, place_id, &form.text).await;
            page(PageMode::PlaceDetails, &session, vec![message], &main)
        }
    }
}

#[actix_web::get("/places/{place_id}")]
pub(crate) async fn place_alias(path: web::Path<String>) -> impl Responder {
    redirect(&render::place_href(&path))
}
