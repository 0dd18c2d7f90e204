use std::path::PathBuf;
use std::sync::Arc;

use rocket::http::{Cookie, CookieJar};
use rocket::response::content::RawHtml;
use rocket::State;

use crate::config::SiteConfig;
use crate::content::ContentState;
use crate::designs::holo;
use crate::models::content::{ContentDocument, ViewerSection};

/// Session cookie carrying the project-shuffle seed. The shuffle happens
/// once per browser session; re-renders with the same seed reproduce it.
const SESSION_COOKIE: &str = "holo_session";

fn session_seed(cookies: &CookieJar<'_>) -> u64 {
    if let Some(cookie) = cookies.get(SESSION_COOKIE) {
        if let Ok(seed) = cookie.value().parse::<u64>() {
            return seed;
        }
    }
    let seed: u64 = rand::random();
    let mut cookie = Cookie::new(SESSION_COOKIE, seed.to_string());
    cookie.set_path("/");
    cookie.set_same_site(rocket::http::SameSite::Lax);
    cookies.add(cookie);
    seed
}

/// Which viewer-backed section, if any, owns this path segment.
pub fn viewer_for_path<'a>(doc: &'a ContentDocument, segment: &str) -> Option<&'a ViewerSection> {
    [&doc.sections.blog, &doc.sections.articles]
        .into_iter()
        .find(|section| {
            let base = &section.markdowns_peek.base_path;
            !base.is_empty() && base == segment && section.renderable()
        })
}

// ── Portfolio page ─────────────────────────────────────

#[get("/")]
pub fn home(
    state: &State<Arc<ContentState>>,
    config: &State<SiteConfig>,
    cookies: &CookieJar<'_>,
) -> RawHtml<String> {
    let doc = state.snapshot();
    let seed = session_seed(cookies);
    RawHtml(holo::render_home(&doc, &config.site_url, seed))
}

// ── Reader catch-all ───────────────────────────────────

/// Serves a full-page viewer when the first path segment matches a
/// configured base path; otherwise falls through to the 404 catcher.
#[get("/<path..>", rank = 20)]
pub fn reader(
    path: PathBuf,
    state: &State<Arc<ContentState>>,
    config: &State<SiteConfig>,
) -> Option<RawHtml<String>> {
    let doc = state.snapshot();
    let segment = path.iter().next()?.to_str()?.to_string();
    let section = viewer_for_path(&doc, &segment)?;
    Some(RawHtml(holo::render_reader(&doc, &config.site_url, section)))
}

// ── robots.txt ─────────────────────────────────────────

pub fn robots_body(site_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\n# {}\n",
        site_url.trim_end_matches('/')
    )
}

#[get("/robots.txt")]
pub fn robots(config: &State<SiteConfig>) -> String {
    robots_body(&config.site_url)
}

pub fn routes() -> Vec<rocket::Route> {
    routes![home, reader, robots]
}
