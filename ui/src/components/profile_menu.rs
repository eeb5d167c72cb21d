use dioxus::prelude::*;

use super::icons::{Icon, IconKind};
use super::menu_link::MenuLink;
use crate::core::menu::{MenuOrigin, NavEvent};
use crate::core::routes::profile_menu_links;
use crate::t;

/// Class bounding the avatar and its dropdown. Document clicks inside it never close
/// the dropdown.
pub const PROFILE_CONTAINER_CLASS: &str = "profile-dropdown";

/// Avatar button plus the dropdown, which only exists in the tree while `open`.
#[component]
pub fn ProfileMenu(
    username: String,
    avatar_src: String,
    open: bool,
    logout_pending: bool,
) -> Element {
    let events = use_coroutine_handle::<NavEvent>();
    let container_class = format!("navbar__profile {}", PROFILE_CONTAINER_CLASS);

    rsx! {
        div { class: "{container_class}",
            button {
                r#type: "button",
                class: "navbar__avatar",
                aria_haspopup: "menu",
                aria_expanded: open,
                onclick: move |_| events.send(NavEvent::AvatarClicked),
                img { src: "{avatar_src}", alt: "{username}" }
            }

            if open {
                div { class: "profile-menu", role: "menu",
                    for item in profile_menu_links().iter().copied() {
                        MenuLink {
                            key: "{item.route.path()}",
                            item,
                            class: "profile-menu__item",
                            on_select: move |_| events.send(NavEvent::ProfileItemSelected),
                        }
                    }
                    button {
                        r#type: "button",
                        class: "profile-menu__item profile-menu__button",
                        disabled: logout_pending,
                        onclick: move |_| {
                            events.send(NavEvent::LogoutRequested(MenuOrigin::ProfileDropdown))
                        },
                        Icon { kind: IconKind::SignOut }
                        {t!("nav-logout")}
                    }
                }
            }
        }
    }
}
