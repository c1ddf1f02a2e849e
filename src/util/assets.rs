use std::sync::OnceLock;

use rust_embed::RustEmbed;

/// Embed the `assets/` directory into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();

/// Returns the contents of `assets/main.css` as a static string.
pub fn main_css() -> &'static str {
    MAIN_CSS
        .get_or_init(|| {
            EmbeddedAssets::get("main.css")
                .map(|file| String::from_utf8_lossy(file.data.as_ref()).into_owned())
                .unwrap_or_default()
        })
        .as_str()
}
