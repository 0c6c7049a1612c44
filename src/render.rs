use std::fmt::Write;

use crate::{
    data::{PlaceDetail, PlaceSummary, Review},
    filter::PriceFilter,
};

pub const PRICE_OPTIONS: [&str; 4] = ["10", "50", "100", "All"];
pub const MAX_RATING: i64 = 5;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

fn hidden(is_hidden: bool) -> &'static str {
    if is_hidden {
        " hidden"
    } else {
        ""
    }
}

pub fn document(title: &str, authenticated: bool, alerts: &[String], main: &str) -> String {
    let mut alert_html = String::new();
    for message in alerts {
        let _ = write!(
            alert_html,
            r#"<div class="alert" role="alert">{}</div>"#,
            escape(message)
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<header>
<nav>
<a href="/" class="logo">HBnB</a>
<a href="/login" class="login-button"{login_hidden}>Login</a>
<a href="/logout" id="logout-button"{logout_hidden}>Logout</a>
</nav>
</header>
{alert_html}
<main>
{main}
</main>
</body>
</html>
"#,
        title = escape(title),
        login_hidden = hidden(authenticated),
        logout_hidden = hidden(!authenticated),
    )
}

pub fn login_form(email: &str) -> String {
    format!(
        r#"<form id="login-form" method="post" action="/login">
<label for="email">Email</label>
<input type="email" id="email" name="email" value="{}" required>
<label for="password">Password</label>
<input type="password" id="password" name="password" required>
<button type="submit" class="login-button">Login</button>
</form>"#,
        escape(email)
    )
}

pub fn price_filter(filter: PriceFilter) -> String {
    let mut options = String::new();
    for option in PRICE_OPTIONS {
        let selected = if filter.selected(option) { " selected" } else { "" };
        let _ = write!(options, r#"<option value="{option}"{selected}>{option}</option>"#);
    }
    format!(
        r#"<form id="filter" method="get" action="/">
<label for="price-filter">Max price</label>
<select id="price-filter" name="price">{options}</select>
<button type="submit">Filter</button>
</form>"#
    )
}

pub fn place_card(place: &PlaceSummary, filter: PriceFilter) -> String {
    format!(
        r#"<div class="place-card" data-price="{price}"{hidden}>
<h2>{title}</h2>
<p>Price per night: ${price}</p>
<a href="{href}" class="details-button">View Details</a>
</div>"#,
        price = place.price,
        hidden = hidden(!filter.shows(place.price)),
        title = escape(&place.title),
        href = escape(&place_href(&place.id)),
    )
}

pub fn place_href(place_id: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(place_id.as_bytes()).collect();
    format!("/place.html?place_id={encoded}")
}

/// `None` leaves the list empty, which is what a failed fetch shows.
pub fn places_list(places: Option<&[PlaceSummary]>, filter: PriceFilter) -> String {
    let body = match places {
        None => String::new(),
        Some([]) => {
            "<h2>No hay lugares disponibles</h2><p>¡Intenta más tarde o añade uno!</p>".to_string()
        }
        Some(places) => places
            .iter()
            .map(|place| place_card(place, filter))
            .collect::<Vec<_>>()
            .join("\n"),
    };
    format!(r#"<section id="places-list">{body}</section>"#)
}

pub fn stars(rating: i64) -> String {
    let filled = rating.clamp(0, MAX_RATING) as usize;
    let empty = MAX_RATING as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

pub fn place_details(place: &PlaceDetail) -> String {
    let amenities = match place.amenities.as_deref() {
        Some(amenities) if !amenities.is_empty() => amenities
            .iter()
            .map(|amenity| escape(amenity.name()))
            .collect::<Vec<_>>()
            .join(", "),
        _ => "None".to_string(),
    };

    format!(
        r#"<section id="place-details">
<h1>{title}</h1>
<div class="place-card">
<p><strong>Host:</strong> {host}</p>
<p><strong>Price per night:</strong> ${price}</p>
<p><strong>Description:</strong> {description}</p>
<p><strong>Amenities:</strong> {amenities}</p>
</div>
</section>"#,
        title = escape(&place.title),
        host = escape(place.user_name.as_deref().unwrap_or("Unknown")),
        price = place.price,
        description = escape(place.description.as_deref().unwrap_or("")),
    )
}

pub fn place_details_error() -> String {
    r#"<section id="place-details"><p>Error loading place details.</p></section>"#.to_string()
}

pub fn review_card(review: &Review) -> String {
    format!(
        r#"<div class="review-card">
<p><strong>{author}:</strong></p>
<p>{text}</p>
<p>Rating: {stars}</p>
</div>"#,
        author = escape(review.author().unwrap_or("Anonymous")),
        text = escape(&review.text),
        stars = stars(review.rating),
    )
}

/// `None` renders the load error.
pub fn review_list(reviews: Option<&[Review]>) -> String {
    let body = match reviews {
        None => "<p>Error loading reviews.</p>".to_string(),
        Some([]) => "<p>No reviews yet. Be the first to review!</p>".to_string(),
        Some(reviews) => reviews
            .iter()
            .map(review_card)
            .collect::<Vec<_>>()
            .join("\n"),
    };
    format!(r#"<section id="reviews-list"><h2>Reviews</h2>{body}</section>"#)
}

pub fn review_form(place_id: &str, text: &str) -> String {
    let mut ratings = String::new();
    for rating in (1..=MAX_RATING).rev() {
        let _ = write!(ratings, r#"<option value="{rating}">{}</option>"#, stars(rating));
    }
    format!(
        r#"<section id="add-review">
<h2>Add a Review</h2>
<form id="review-form" method="post" action="{action}">
<label for="review-text">Your review</label>
<textarea id="review-text" name="review-text">{text}</textarea>
<label for="rating">Rating</label>
<select id="rating" name="rating">{ratings}</select>
<button type="submit">Submit Review</button>
</form>
</section>"#,
        action = escape(&place_href(place_id)),
        text = escape(text),
    )
}
