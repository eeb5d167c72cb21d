use dioxus::prelude::*;

use ui::auth::AuthProvider;
use ui::components::Navbar;
use ui::config::NavConfig;
use ui::theme::{GlobalStyles, ThemeProvider};
use ui::views::{CreateBot, Dashboard, Forum, Home, Login, NewPost, Profile, Register};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/forum")]
    Forum {},
    #[route("/forum/create")]
    NewPost {},
    #[route("/profile")]
    Profile {},
    #[route("/create-bot")]
    CreateBot {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    use_context_provider(NavConfig::default);

    rsx! {
        ThemeProvider {
            AuthProvider {
                GlobalStyles {}
                Router::<Route> {}
            }
        }
    }
}

/// Web layout: the shared navbar above the routed page.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        Navbar {}
        main { class: "page-shell", Outlet::<Route> {} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ui::core::routes::NavRoute;

    #[test]
    fn every_navbar_path_resolves_to_a_route() {
        for nav in NavRoute::ALL {
            let route: Route = nav
                .path()
                .parse()
                .unwrap_or_else(|err| panic!("{} does not route: {err}", nav.path()));
            assert_eq!(route.to_string(), nav.path());
        }
    }

    #[test]
    fn new_post_is_not_swallowed_by_forum() {
        assert_eq!(
            NavRoute::NewPost.path().parse::<Route>().ok(),
            Some(Route::NewPost {})
        );
    }
}
