use std::{borrow::Cow, sync::OnceLock};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rust_embed::RustEmbed;

/// Everything under `assets/` is compiled into the binary.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static FAVICON_DATA_URI: OnceLock<String> = OnceLock::new();

/// Contents of `assets/main.css`.
pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| load_text("main.css")).as_str()
}

pub fn favicon_data_uri() -> &'static str {
    FAVICON_DATA_URI
        .get_or_init(|| data_uri("image/svg+xml", &load_asset("favicon.svg")))
        .as_str()
}

fn load_text(name: &str) -> String {
    String::from_utf8(load_asset(name).into_owned())
        .unwrap_or_else(|_| panic!("Embedded asset {name} is not valid UTF-8"))
}

fn load_asset(name: &str) -> Cow<'static, [u8]> {
    EmbeddedAssets::get(name)
        .map(|file| file.data)
        .unwrap_or_else(|| panic!("Failed to locate embedded asset: {name}"))
}

fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_carries_mime_and_payload() {
        assert_eq!(data_uri("text/plain", b"foo"), "data:text/plain;base64,Zm9v");
    }

    #[test]
    fn stylesheet_defines_both_themes() {
        let css = main_css();
        assert!(css.contains(".theme-light"));
        assert!(css.contains(".theme-dark"));
    }

    #[test]
    fn favicon_is_svg_data_uri() {
        assert!(favicon_data_uri().starts_with("data:image/svg+xml;base64,"));
    }
}
