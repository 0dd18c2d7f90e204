//! Holo design: the portfolio page, the full-page reader, and the 404 page.
//! Pure functions from a content snapshot (plus per-request randomness) to
//! HTML strings.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::models::content::{ContentDocument, Photo, Project, ViewerSection};
use crate::render::{
    html_escape, page_shell, script_json, FONT_GATE_JS, PHOTO_ROTATE_JS, SCROLL_TOP_JS,
};
use crate::viewer::{self, EmbedOptions};

/// Photos shown in the grid at once.
const PHOTO_GRID_SIZE: usize = 4;

/// Project ordering for one browser session: an unbiased Fisher–Yates
/// shuffle over a seeded RNG, so re-renders with the same session seed keep
/// the order stable. The order carries no meaning.
pub fn shuffled_projects(projects: &[Project], seed: u64) -> Vec<&Project> {
    let mut out: Vec<&Project> = projects.iter().collect();
    let mut rng = StdRng::seed_from_u64(seed);
    out.shuffle(&mut rng);
    out
}

/// Initial photo subset: up to four distinct photos, tolerant of short lists.
pub fn pick_photos(photos: &[Photo]) -> Vec<&Photo> {
    photos
        .choose_multiple(&mut rand::thread_rng(), PHOTO_GRID_SIZE)
        .collect()
}

fn section_heading(first: &str, second: &str) -> String {
    format!(
        r#"<h2>{} <span class="accent">{}</span></h2>"#,
        html_escape(first),
        html_escape(second)
    )
}

fn nav_html(doc: &ContentDocument) -> String {
    let items: String = doc
        .navigation
        .iter()
        .map(|item| {
            format!(
                r#"<a href="{}">{}</a>"#,
                html_escape(&item.href),
                html_escape(&item.name)
            )
        })
        .collect();
    format!(r#"<nav class="main">{}</nav>"#, items)
}

fn header_html(doc: &ContentDocument) -> String {
    format!(
        r#"<header class="site"><div class="wrap">
<a href="/" class="site-title">{title}<div class="underline"></div></a>
{nav}
</div></header>"#,
        title = html_escape(&doc.personal_info.title),
        nav = nav_html(doc),
    )
}

fn loading_overlay_html(doc: &ContentDocument) -> String {
    format!(
        r#"<div id="loading-overlay"><div class="inner">
<div class="t">{title}</div>
<div class="bar"></div>
<div class="s">{text}</div>
</div></div>"#,
        title = html_escape(&doc.loading_screen.title),
        text = html_escape(&doc.loading_screen.text),
    )
}

fn hero_html(doc: &ContentDocument) -> String {
    let info = &doc.personal_info;
    let title = &doc.sections.hero.title;

    let bio: String = info
        .bio
        .iter()
        .map(|p| format!("<p>{}</p>", html_escape(p)))
        .collect();
    let roles: String = info
        .roles
        .iter()
        .map(|r| format!("<div>{}</div>", html_escape(r)))
        .collect();
    let socials: String = [
        &doc.social_links.github,
        &doc.social_links.linkedin,
        &doc.social_links.instagram,
    ]
    .iter()
    .filter(|link| !link.url.is_empty())
    .map(|link| {
        format!(
            r#"<a href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            html_escape(&link.url),
            html_escape(&link.display)
        )
    })
    .collect();

    format!(
        r#"<section class="hero"><div class="wrap" style="display:contents">
<div>
<h1>{first}<br><span class="accent">{second}</span></h1>
<div class="bio">{bio}</div>
<div class="roles">{roles}</div>
<div class="social-row">{socials}</div>
</div>
<div>
{photos}
</div>
</div></section>"#,
        first = html_escape(&title.first),
        second = html_escape(&title.second),
        bio = bio,
        roles = roles,
        socials = socials,
        photos = photo_grid_html(doc),
    )
}

fn photo_grid_html(doc: &ContentDocument) -> String {
    let title = &doc.sections.photos.title;
    let instagram = &doc.social_links.instagram.url;

    let cells: String = pick_photos(&doc.photos)
        .iter()
        .map(|photo| {
            format!(
                r#"<a href="{href}" target="_blank" rel="noopener noreferrer">
<img src="{url}" alt="{caption}" loading="lazy">
<span class="caption">{caption}</span>
</a>"#,
                href = html_escape(instagram),
                url = html_escape(&photo.url),
                caption = html_escape(&photo.caption),
            )
        })
        .collect();

    format!(
        r#"<div class="section-center" style="margin-bottom:24px"><h3 style="font-size:20px;font-weight:800;text-transform:uppercase">{first} <span class="accent">{second}</span></h3></div>
<div class="photo-grid" id="photo-grid">{cells}</div>"#,
        first = html_escape(&title.first),
        second = html_escape(&title.second),
        cells = cells,
    )
}

/// A viewer-backed section (blog or articles): heading, embed, subtitle and
/// a button linking into the repo on the code host.
fn viewer_section_html(doc: &ContentDocument, section: &ViewerSection, anchor: &str) -> String {
    if !section.renderable() {
        return String::new();
    }
    let github = &doc.social_links.github.url;
    format!(
        r#"<section class="block" id="{anchor}"><div class="wrap">
{heading}
<div class="viewer-slot">
{embed}
</div>
<div class="section-center">
<p class="section-note">{subtitle}</p>
<a class="section-button" href="{github}/{link}" target="_blank" rel="noopener noreferrer">{button} ↗</a>
</div>
</div></section>"#,
        anchor = html_escape(anchor),
        heading = section_heading(&section.title.first, &section.title.second),
        embed = viewer::embed(&section.markdowns_peek, &EmbedOptions::default()),
        subtitle = html_escape(&section.subtitle),
        github = html_escape(github),
        link = html_escape(&section.github_link),
        button = html_escape(&section.github_button_text),
    )
}

fn work_html(doc: &ContentDocument) -> String {
    let title = &doc.sections.work.title;
    let linkedin = &doc.social_links.linkedin.url;

    let rows: String = doc
        .work_experience
        .iter()
        .map(|job| {
            format!(
                r#"<a class="work-row" href="{href}" target="_blank" rel="noopener noreferrer">
<div class="period">{period}</div>
<div><h3>{position}</h3><div class="company">{company}</div><p class="desc">{description}</p></div>
<div class="tech">{technologies}</div>
</a>"#,
                href = html_escape(linkedin),
                period = html_escape(&job.period),
                position = html_escape(&job.position),
                company = html_escape(&job.company),
                description = html_escape(&job.description),
                technologies = html_escape(&job.technologies),
            )
        })
        .collect();

    format!(
        r#"<section class="block" id="work"><div class="wrap">
{heading}
{rows}
</div></section>"#,
        heading = section_heading(&title.first, &title.second),
        rows = rows,
    )
}

fn projects_html(doc: &ContentDocument, seed: u64) -> String {
    let section = &doc.sections.projects;
    let github = &doc.social_links.github.url;

    let cards: String = shuffled_projects(&doc.projects, seed)
        .iter()
        .map(|project| {
            format!(
                r#"<a class="project-card" href="{url}" target="_blank" rel="noopener noreferrer">
<div class="year">{year} ↗</div>
<h3>{name}</h3>
<p class="desc">{description}</p>
<div class="tech">{tech}</div>
</a>"#,
                url = html_escape(&project.url),
                year = html_escape(&project.year),
                name = html_escape(&project.name),
                description = html_escape(&project.description),
                tech = html_escape(&project.tech),
            )
        })
        .collect();

    format!(
        r#"<section class="block" id="projects"><div class="wrap">
{heading}
<div class="project-grid">{cards}</div>
<div class="section-center"><a class="section-button" href="{github}" target="_blank" rel="noopener noreferrer">{button} ↗</a></div>
</div></section>"#,
        heading = section_heading(&section.title.first, &section.title.second),
        cards = cards,
        github = html_escape(github),
        button = html_escape(&section.github_button_text),
    )
}

fn contact_html(doc: &ContentDocument) -> String {
    let info = &doc.personal_info;
    let contact = &doc.contact_info;
    let links_title = &doc.sections.social_links.title;
    let status_title = &doc.sections.current_status.title;

    let socials: String = [
        &doc.social_links.github,
        &doc.social_links.linkedin,
        &doc.social_links.instagram,
    ]
    .iter()
    .filter(|link| !link.url.is_empty())
    .map(|link| {
        format!(
            r#"<a class="contact-item" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
            html_escape(&link.url),
            html_escape(&link.display)
        )
    })
    .collect();

    format!(
        r#"<section class="block" id="contact"><div class="wrap contact-grid">
<div>
{heading}
<p class="lede">{description}</p>
<a class="contact-item" href="mailto:{email}">{email}</a>
<div class="contact-item">{location}</div>
</div>
<div>
<h3>{links_first} <span class="accent">{links_second}</span></h3>
{socials}
<h3 style="margin-top:32px">{status_first} <span class="accent">{status_second}</span></h3>
<div class="contact-item">{status}</div>
</div>
</div></section>"#,
        heading = section_heading(&doc.sections.contact.title.first, &doc.sections.contact.title.second),
        description = html_escape(&contact.description),
        email = html_escape(&info.email),
        location = html_escape(&info.location),
        links_first = html_escape(&links_title.first),
        links_second = html_escape(&links_title.second),
        socials = socials,
        status_first = html_escape(&status_title.first),
        status_second = html_escape(&status_title.second),
        status = html_escape(&info.status),
    )
}

fn footer_html(doc: &ContentDocument) -> String {
    format!(
        r#"<footer class="site"><div class="wrap">
<div>{copyright}</div>
<div>TO INFINITY AND <span class="accent">BEYOND</span></div>
</div></footer>"#,
        copyright = html_escape(&doc.contact_info.footer.copyright),
    )
}

/// The portfolio page. `seed` pins the project order for the session.
pub fn render_home(doc: &ContentDocument, site_url: &str, seed: u64) -> String {
    let body = format!(
        "{overlay}\n{header}\n{hero}\n{blog}\n{work}\n{articles}\n{projects}\n{contact}\n{footer}\n<button id=\"scroll-top\" aria-label=\"Scroll to top\">↑</button>",
        overlay = loading_overlay_html(doc),
        header = header_html(doc),
        hero = hero_html(doc),
        blog = viewer_section_html(doc, &doc.sections.blog, "blog"),
        work = work_html(doc),
        articles = viewer_section_html(doc, &doc.sections.articles, "articles"),
        projects = projects_html(doc, seed),
        contact = contact_html(doc),
        footer = footer_html(doc),
    );

    let scripts = format!(
        "<script>window.__holoPhotos={};</script>\n{}\n{}\n{}",
        script_json(&doc.photos),
        PHOTO_ROTATE_JS,
        FONT_GATE_JS,
        SCROLL_TOP_JS,
    );

    page_shell(doc, site_url, &body, &scripts)
}

/// Full-page reader for a viewer-backed section, served from the catch-all
/// route when the first path segment matches the section's base path.
pub fn render_reader(doc: &ContentDocument, site_url: &str, section: &ViewerSection) -> String {
    let base = &section.markdowns_peek.base_path;
    let opts = EmbedOptions {
        load_first_file_automatically: true,
        hide_files_on_route: true,
        height: "100%".to_string(),
    };

    let body = format!(
        r#"<div class="reader-body">
<header class="reader"><div class="wrap">
<a href="/" class="site-title">{title}<div class="underline"></div></a>
<a class="back-link" href="/#{base}">‹ {base_label}</a>
</div></header>
<div class="reader-viewer">
{embed}
</div>
</div>"#,
        title = html_escape(&doc.personal_info.title),
        base = html_escape(base),
        base_label = html_escape(&base.to_uppercase()),
        embed = viewer::embed(&section.markdowns_peek, &opts),
    );

    page_shell(doc, site_url, &body, "")
}

/// Generic 404 for paths matching no configured viewer base path.
pub fn render_not_found(doc: &ContentDocument, site_url: &str) -> String {
    let body = format!(
        r#"<div class="reader-body">
<header class="reader"><div class="wrap">
<a href="/" class="site-title">{title}<div class="underline"></div></a>
</div></header>
<div class="nf-wrap"><div class="section-center">
<h1>404</h1>
<a class="back-link" href="/">‹ BACK</a>
</div></div>
</div>"#,
        title = html_escape(&doc.personal_info.title),
    );

    page_shell(doc, site_url, &body, "")
}
