use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::core::routes::NavRoute;
use crate::t;

#[component]
pub fn Login() -> Element {
    rsx! {
        SessionForm { title: t!("login-title"), submit_label: t!("login-submit") }
    }
}

#[component]
pub fn Register() -> Element {
    rsx! {
        SessionForm { title: t!("register-title"), submit_label: t!("register-submit") }
    }
}

/// Username form that opens a session and lands on the dashboard.
#[component]
fn SessionForm(title: String, submit_label: String) -> Element {
    let auth = use_auth();
    let navigator = use_navigator();
    let mut username = use_signal(String::new);
    let busy = use_signal(|| false);
    let last_error = use_signal(|| Option::<String>::None);

    let on_submit = {
        let mut busy = busy;
        let mut last_error = last_error;
        move |evt: FormEvent| {
            evt.prevent_default();
            if busy() {
                return;
            }
            busy.set(true);
            let name = username();
            let navigator = navigator.clone();
            spawn(async move {
                match auth.sign_in(name).await {
                    Ok(()) => {
                        last_error.set(None);
                        navigator.push(NavRoute::Dashboard.path());
                    }
                    Err(err) => {
                        warn!(%err, "sign-in failed");
                        last_error.set(Some(err.to_string()));
                    }
                }
                busy.set(false);
            });
        }
    };

    rsx! {
        section { class: "page page-session",
            h1 { "{title}" }
            form { class: "page-session__form", onsubmit: on_submit,
                label { r#for: "session-username", {t!("session-username-label")} }
                input {
                    id: "session-username",
                    name: "username",
                    autocomplete: "username",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                button { r#type: "submit", class: "navbar__cta", disabled: busy(), "{submit_label}" }
            }
            if let Some(err) = last_error() {
                p { class: "page-session__error", role: "alert", {t!("session-failed", reason = err)} }
            }
        }
    }
}
