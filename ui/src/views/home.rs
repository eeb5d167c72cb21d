use dioxus::prelude::*;

use crate::core::routes::NavRoute;
use crate::t;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { {t!("home-title")} }
            p { {t!("home-intro")} }
            p { class: "page-home__cta",
                Link { class: "navbar__cta", to: NavRoute::Forum.path(), {t!("home-cta")} }
            }
        }
    }
}
