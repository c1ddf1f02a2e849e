//! Fire-and-forget browser-tab side effect.

/// Opens `url` in the default browser. Nothing downstream consumes the
/// result; failures are logged and otherwise ignored.
pub fn open_url(url: &str) {
    if let Err(error) = webbrowser::open(url) {
        println!("[browser] failed to open {url}: {error}");
    }
}
