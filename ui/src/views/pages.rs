use dioxus::prelude::*;

use crate::t;

#[component]
fn PageShell(class: &'static str, title: String, intro: String) -> Element {
    rsx! {
        section { class: "page {class}",
            h1 { "{title}" }
            p { "{intro}" }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        PageShell {
            class: "page-dashboard",
            title: t!("dashboard-title"),
            intro: t!("dashboard-intro"),
        }
    }
}

#[component]
pub fn Forum() -> Element {
    rsx! {
        PageShell { class: "page-forum", title: t!("forum-title"), intro: t!("forum-intro") }
    }
}

#[component]
pub fn NewPost() -> Element {
    rsx! {
        PageShell {
            class: "page-new-post",
            title: t!("new-post-title"),
            intro: t!("new-post-intro"),
        }
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! {
        PageShell {
            class: "page-profile",
            title: t!("profile-title"),
            intro: t!("profile-intro"),
        }
    }
}

#[component]
pub fn CreateBot() -> Element {
    rsx! {
        PageShell {
            class: "page-create-bot",
            title: t!("create-bot-title"),
            intro: t!("create-bot-intro"),
        }
    }
}
