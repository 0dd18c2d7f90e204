//! Page shell and shared rendering helpers. Pages are format!-composed HTML
//! strings; there is no template engine.

use crate::models::content::ContentDocument;

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Serialize a value for embedding inside an inline `<script>` block.
/// `</` is escaped so a hostile string field cannot close the script tag.
pub fn script_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}

/// Wrap a body in the full HTML document: head metadata from the content
/// document, font links, base CSS, and any page-specific scripts.
pub fn page_shell(doc: &ContentDocument, site_url: &str, body: &str, scripts: &str) -> String {
    let meta = &doc.metadata;
    let title = if meta.title.is_empty() {
        doc.personal_info.title.clone()
    } else {
        meta.title.clone()
    };

    let description_tag = if meta.description.is_empty() {
        String::new()
    } else {
        format!(
            "    <meta name=\"description\" content=\"{}\">\n",
            html_escape(&meta.description)
        )
    };
    let keywords_tag = if meta.keywords.is_empty() {
        String::new()
    } else {
        format!(
            "    <meta name=\"keywords\" content=\"{}\">\n",
            html_escape(&meta.keywords.join(", "))
        )
    };
    let author_tags: String = meta
        .authors
        .iter()
        .map(|a| {
            format!(
                "    <meta name=\"author\" content=\"{}\">\n",
                html_escape(&a.name)
            )
        })
        .collect();
    let generator_tag = if meta.generator.is_empty() {
        String::new()
    } else {
        format!(
            "    <meta name=\"generator\" content=\"{}\">\n",
            html_escape(&meta.generator)
        )
    };
    let canonical_tag = if site_url.is_empty() {
        String::new()
    } else {
        format!(
            "    <link rel=\"canonical\" href=\"{}/\">\n",
            site_url.trim_end_matches('/')
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
{description_tag}{keywords_tag}{author_tags}{generator_tag}{canonical_tag}    <link rel="preconnect" href="https://fonts.googleapis.com">
    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
    <link href="https://fonts.googleapis.com/css2?family=JetBrains+Mono:wght@400;700;800&display=swap" rel="stylesheet">
    <style>{base_css}</style>
</head>
<body>
{body}
{scripts}
</body>
</html>"#,
        title = html_escape(&title),
        description_tag = description_tag,
        keywords_tag = keywords_tag,
        author_tags = author_tags,
        generator_tag = generator_tag,
        canonical_tag = canonical_tag,
        base_css = BASE_CSS,
        body = body,
        scripts = scripts,
    )
}

pub const BASE_CSS: &str = r#"
*{box-sizing:border-box;margin:0;padding:0}
body{font-family:'JetBrains Mono',monospace;background:#fff;color:#000;line-height:1.5}
a{color:inherit;text-decoration:none}
.wrap{max-width:1120px;margin:0 auto}
header.site{padding:32px;border-bottom:2px solid #000}
header.site .wrap{display:flex;justify-content:space-between;align-items:center}
.site-title{font-size:24px;font-weight:800;letter-spacing:-0.5px}
.site-title .underline{height:2px;background:linear-gradient(90deg,#f0f,#0ff,#ff0);margin-top:4px}
nav.main{display:flex;gap:32px;font-size:13px;font-weight:700;text-transform:uppercase;letter-spacing:1px}
nav.main a:hover{text-decoration:underline}
section.block{padding:32px;border-top:2px solid #000}
section.block h2{font-size:36px;font-weight:800;text-transform:uppercase;letter-spacing:-1px;margin-bottom:48px}
.accent{background:linear-gradient(90deg,#c0f,#09f);-webkit-background-clip:text;background-clip:text;color:transparent}
.hero{display:grid;grid-template-columns:1fr 1fr;gap:64px;padding:32px}
.hero h1{font-size:72px;font-weight:800;line-height:1;letter-spacing:-2px;margin-bottom:16px}
.hero .bio p{margin-bottom:16px;max-width:520px}
.roles{font-size:18px;font-weight:700;text-transform:uppercase;letter-spacing:1px;margin-top:24px}
.roles div{padding-left:24px;position:relative}
.roles div::before{content:'';position:absolute;left:0;top:50%;width:8px;height:8px;transform:translateY(-50%);background:linear-gradient(45deg,#f0f,#0ff)}
.social-row{display:flex;gap:24px;margin-top:24px;font-weight:700;font-size:13px;text-transform:uppercase}
.photo-grid{display:grid;grid-template-columns:1fr 1fr;gap:16px}
.photo-grid a{position:relative;display:block;transition:opacity .4s}
.photo-grid img{width:100%;height:256px;object-fit:cover;border:2px solid #000;display:block}
.photo-grid .caption{position:absolute;top:8px;left:8px;background:#000;color:#fff;padding:2px 8px;font-size:11px;font-weight:700}
.photo-grid a.fading{opacity:0}
.work-row{display:grid;grid-template-columns:1fr 2fr 1fr;gap:16px;border-bottom:1px solid #ccc;padding-bottom:32px;margin-bottom:32px}
.work-row:hover{background:#f7f7f7}
.work-row .period,.work-row .tech{font-size:13px;font-weight:700;text-transform:uppercase;letter-spacing:1px}
.work-row h3{font-size:20px;font-weight:800;margin-bottom:8px}
.work-row .company{font-size:13px;font-weight:700;text-transform:uppercase;margin-bottom:12px;opacity:.6}
.work-row .desc{font-size:14px}
.project-grid{display:grid;grid-template-columns:1fr 1fr;gap:32px}
.project-card{display:block;border:2px solid #000;padding:24px}
.project-card:hover{background:#000;color:#fff}
.project-card .year{font-size:13px;font-weight:700;text-transform:uppercase;margin-bottom:16px}
.project-card h3{font-size:20px;font-weight:800;text-transform:uppercase;margin-bottom:8px}
.project-card .desc{font-size:14px;margin-bottom:16px}
.project-card .tech{font-size:11px;font-weight:700;text-transform:uppercase;letter-spacing:1px}
.section-button{display:inline-flex;margin-top:48px;font-size:13px;font-weight:700;text-transform:uppercase;letter-spacing:1px}
.section-button:hover{text-decoration:underline}
.section-note{font-size:13px;color:#666;margin-top:32px;margin-bottom:16px;text-align:center}
.section-center{text-align:center}
.contact-grid{display:grid;grid-template-columns:1fr 1fr;gap:64px}
.contact-grid .lede{font-size:18px;margin-bottom:32px}
.contact-item{display:block;font-size:13px;font-weight:700;text-transform:uppercase;letter-spacing:1px;padding-left:24px;position:relative;margin-bottom:16px}
.contact-item::before{content:'';position:absolute;left:0;top:50%;width:8px;height:8px;transform:translateY(-50%);background:linear-gradient(45deg,#0ff,#f0f)}
.contact-grid h3{font-size:20px;font-weight:800;text-transform:uppercase;margin-bottom:16px}
footer.site{padding:32px;border-top:2px solid #000}
footer.site .wrap{display:flex;justify-content:space-between;font-size:13px;font-weight:700;text-transform:uppercase;letter-spacing:1px}
#scroll-top{display:none;position:fixed;bottom:32px;right:32px;width:48px;height:48px;background:#000;color:#fff;border:2px solid #000;cursor:pointer;font-size:18px;z-index:50}
#scroll-top:hover{background:#fff;color:#000}
#loading-overlay{position:fixed;inset:0;background:#fff;display:flex;align-items:center;justify-content:center;z-index:100}
#loading-overlay .inner{text-align:center}
#loading-overlay .t{font-size:24px;font-weight:700;text-transform:uppercase;letter-spacing:2px;margin-bottom:16px}
#loading-overlay .bar{width:96px;height:2px;background:#000;margin:0 auto 8px}
#loading-overlay .s{font-size:13px;font-weight:700;text-transform:uppercase;letter-spacing:2px;opacity:.6}
.viewer-slot{background:#fff;overflow:hidden}
.viewer-loading{display:flex;align-items:center;justify-content:center;padding:32px}
.spinner{width:32px;height:32px;border:2px solid transparent;border-bottom-color:#111;border-radius:50%;animation:spin 1s linear infinite}
@keyframes spin{to{transform:rotate(360deg)}}
.viewer-error{color:#c0392b;font-weight:700;text-transform:uppercase;font-size:13px;letter-spacing:1px;padding:32px;text-align:center}
header.reader{position:sticky;top:0;padding:16px 32px;border-bottom:2px solid #000;background:#F3F3F7;z-index:50}
header.reader .wrap{display:flex;justify-content:space-between;align-items:center}
.reader-body{background:#F3F3F7;min-height:100vh;display:flex;flex-direction:column}
.reader-viewer{flex:1;height:calc(100vh - 90px)}
.back-link{display:inline-flex;align-items:center;gap:8px;font-size:13px;font-weight:700;text-transform:uppercase;letter-spacing:1px}
.back-link:hover{opacity:.7}
.nf-wrap{display:flex;align-items:center;justify-content:center;height:calc(100vh - 90px)}
.nf-wrap h1{font-size:128px;font-weight:800;letter-spacing:-4px;color:#1C1B22;margin-bottom:32px}
@media(max-width:860px){.hero,.contact-grid,.project-grid{grid-template-columns:1fr}.work-row{grid-template-columns:1fr}nav.main{display:none}.hero h1{font-size:48px}}
"#;

/// Hides the loading overlay once webfonts are ready (1s fallback for
/// browsers without `document.fonts`).
pub const FONT_GATE_JS: &str = r#"<script>
(function(){
var overlay=document.getElementById('loading-overlay');
if(!overlay)return;
function done(){overlay.style.display='none';}
if(document.fonts&&document.fonts.ready){document.fonts.ready.then(done);}
else{setTimeout(done,1000);}
})();
</script>"#;

/// Scroll-to-top button, shown past 300px of scroll.
pub const SCROLL_TOP_JS: &str = r#"<script>
(function(){
var btn=document.getElementById('scroll-top');
if(!btn)return;
window.addEventListener('scroll',function(){btn.style.display=window.scrollY>300?'block':'none';});
btn.addEventListener('click',function(){window.scrollTo({top:0,behavior:'smooth'});});
})();
</script>"#;

/// Rotates the photo grid: every interval, swap in a fresh random subset of
/// `window.__holoPhotos` with a short cross-fade. Subsets never repeat a
/// photo, and lists shorter than the grid just show what exists.
pub const PHOTO_ROTATE_JS: &str = r#"<script>
(function(){
var grid=document.getElementById('photo-grid');
var all=window.__holoPhotos||[];
if(!grid||all.length<2)return;
var INTERVAL=6000,FADE=400;
function pick(){
  var pool=all.slice(),out=[];
  var n=Math.min(4,pool.length);
  for(var i=0;i<n;i++){out.push(pool.splice(Math.floor(Math.random()*pool.length),1)[0]);}
  return out;
}
setInterval(function(){
  var next=pick();
  var cells=grid.querySelectorAll('a');
  for(var i=0;i<cells.length;i++){cells[i].classList.add('fading');}
  setTimeout(function(){
    for(var i=0;i<cells.length&&i<next.length;i++){
      var img=cells[i].querySelector('img');
      var cap=cells[i].querySelector('.caption');
      if(img){img.src=next[i].url;img.alt=next[i].caption;}
      if(cap){cap.textContent=next[i].caption;}
      cells[i].classList.remove('fading');
    }
  },FADE);
},INTERVAL);
})();
</script>"#;
