use rocket::http::ContentType;

/// the upload form. Posts the picture back to `/` as the `foto` field
pub static INDEX_HTML: &str = include_str!("../../static/index.html");

#[get("/")]
pub fn index() -> (ContentType, &'static str) {
    (ContentType::HTML, INDEX_HTML)
}
