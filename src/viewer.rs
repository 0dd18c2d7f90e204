//! Embed builder for the external markdown viewer.
//!
//! The library itself is a black box fetched from a CDN. This module only
//! emits the container markup and a bootstrap script that walks the
//! unloaded → loading → loaded/error states: instantiate immediately when
//! the library global is already present, otherwise inject the script tag
//! once and instantiate on load. A load failure swaps the spinner for an
//! inline error indicator and is never retried. The instance is released on
//! pagehide when the library exposes `destroy()`.

use serde_json::json;

use crate::models::content::ViewerConfig;
use crate::render::script_json;

pub const VIEWER_SCRIPT_URL: &str =
    "https://unpkg.com/markdowns-peek@1.0.15/dist/markdowns-peek.js";

/// Per-placement options the content document does not carry.
#[derive(Debug, Clone)]
pub struct EmbedOptions {
    pub load_first_file_automatically: bool,
    pub hide_files_on_route: bool,
    pub height: String,
}

impl Default for EmbedOptions {
    fn default() -> Self {
        EmbedOptions {
            load_first_file_automatically: false,
            hide_files_on_route: false,
            height: "600px".to_string(),
        }
    }
}

/// Build the constructor argument object passed to the library.
fn constructor_args(config: &ViewerConfig, opts: &EmbedOptions) -> serde_json::Value {
    let branch = if config.branch.is_empty() { "main" } else { &config.branch };
    let theme = if config.theme.is_empty() { "light" } else { &config.theme };
    json!({
        "containerId": config.container_id,
        "owner": config.owner,
        "repo": config.repo,
        "path": config.path,
        "branch": branch,
        "theme": theme,
        "token": config.token,
        "disableStyles": false,
        "loadFirstFileAutomatically": opts.load_first_file_automatically,
        "hideFilesOnRoute": opts.hide_files_on_route,
        "basePath": config.base_path,
        "height": opts.height,
    })
}

/// Emit the viewer placement: spinner, target container, bootstrap script.
pub fn embed(config: &ViewerConfig, opts: &EmbedOptions) -> String {
    let args = script_json(&constructor_args(config, opts));
    let container_id = crate::render::html_escape(&config.container_id);
    let class_attr = if config.class_name.is_empty() {
        String::new()
    } else {
        format!(" class=\"{}\"", crate::render::html_escape(&config.class_name))
    };

    format!(
        r#"<div id="{container_id}-loading" class="viewer-loading"><div class="spinner"></div></div>
<div id="{container_id}"{class_attr}></div>
<script>
(function(){{
var cfg={args};
var slot=document.getElementById(cfg.containerId+'-loading');
function boot(){{
  if(slot)slot.style.display='none';
  var v=new window.MarkdownsPeek(cfg);
  window.addEventListener('pagehide',function(){{
    if(v&&typeof v.destroy==='function')v.destroy();
  }});
}}
function fail(){{
  if(slot)slot.innerHTML='<p class="viewer-error">Error</p>';
}}
if(window.MarkdownsPeek){{boot();return;}}
var s=document.querySelector('script[data-markdowns-peek]');
if(!s){{
  s=document.createElement('script');
  s.src='{script_url}';
  s.async=true;
  s.setAttribute('data-markdowns-peek','');
  document.head.appendChild(s);
}}
s.addEventListener('load',boot);
s.addEventListener('error',fail);
}})();
</script>"#,
        container_id = container_id,
        class_attr = class_attr,
        args = args,
        script_url = VIEWER_SCRIPT_URL,
    )
}
