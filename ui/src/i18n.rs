//! Localized labels for `lostcloud-ui`.
//!
//! Message files are embedded at compile time from `i18n/<lang-id>/lostcloud_ui.ftl`;
//! `en-US` is the fallback every other locale must cover (see `tests/locales.rs`).
//! The browser build picks the locale from `navigator.languages`, native builds from
//! the OS.
//!
//! Call [`init`] before the first lookup (the navbar does this on render), then use
//! `t!("nav-forum")` anywhere in the crate.
use std::sync::Once;

use dioxus::logger::tracing::warn;
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// `fl!` bound to the shared [`LOADER`]. Keys are checked against the fallback file at
/// compile time.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// `fl!` checks keys against `i18n/en-US/<domain>.ftl`, where the domain is the package
/// name with `-` replaced by `_`. The runtime loader must use the same file.
const DOMAIN: &str = "lostcloud_ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Select the user's preferred embedded locale. Later calls are no-ops.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
