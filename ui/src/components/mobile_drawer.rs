//! Slide-in drawer for narrow viewports.
//!
//! The drawer and its overlay stay mounted; only their modifier classes follow the
//! open flag. CSS transitions then run from wherever the previous one stopped, so a
//! close issued mid-slide reverses smoothly and always settles on the latest state.

use dioxus::prelude::*;

use super::icons::{Icon, IconKind};
use super::menu_link::MenuLink;
use crate::auth::NavIdentity;
use crate::core::menu::{MenuOrigin, NavEvent};
use crate::core::routes::{drawer_links, NavRoute};
use crate::t;

pub(crate) fn drawer_class(open: bool) -> &'static str {
    if open {
        "mobile-drawer mobile-drawer--open"
    } else {
        "mobile-drawer"
    }
}

pub(crate) fn overlay_class(open: bool) -> &'static str {
    if open {
        "mobile-drawer__overlay mobile-drawer__overlay--visible"
    } else {
        "mobile-drawer__overlay"
    }
}

#[component]
pub fn MobileDrawer(
    identity: NavIdentity,
    open: bool,
    logout_pending: bool,
    brand_name: String,
    logo_src: String,
) -> Element {
    let events = use_coroutine_handle::<NavEvent>();
    let close_label = t!("nav-close-menu");
    let logo_alt = t!("nav-logo-alt");

    rsx! {
        div {
            class: overlay_class(open),
            aria_hidden: "true",
            onclick: move |_| events.send(NavEvent::OverlayClicked),
        }

        aside {
            id: "mobile-drawer",
            class: drawer_class(open),
            aria_hidden: !open,
            button {
                r#type: "button",
                class: "mobile-drawer__close",
                aria_label: "{close_label}",
                onclick: move |_| events.send(NavEvent::DrawerCloseClicked),
                Icon { kind: IconKind::Times }
            }

            Link {
                class: "navbar__brand",
                to: NavRoute::Home.path(),
                onclick: move |_| events.send(NavEvent::DrawerLinkSelected),
                img { src: "{logo_src}", alt: "{logo_alt}" }
                span { "{brand_name}" }
            }

            nav { class: "mobile-drawer__links",
                for item in drawer_links(&identity).iter().copied() {
                    MenuLink {
                        key: "{item.route.path()}",
                        item,
                        class: "navbar__link",
                        on_select: move |_| events.send(NavEvent::DrawerLinkSelected),
                    }
                }
                if let NavIdentity::Authenticated(_) = &identity {
                    button {
                        r#type: "button",
                        class: "profile-menu__button mobile-drawer__logout",
                        disabled: logout_pending,
                        onclick: move |_| {
                            events.send(NavEvent::LogoutRequested(MenuOrigin::MobileDrawer))
                        },
                        Icon { kind: IconKind::SignOut }
                        {t!("nav-logout")}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_classes_follow_open_flag() {
        assert_eq!(drawer_class(false), "mobile-drawer");
        assert!(drawer_class(true).ends_with("mobile-drawer--open"));
        assert_eq!(overlay_class(false), "mobile-drawer__overlay");
        assert!(overlay_class(true).ends_with("--visible"));
    }
}
