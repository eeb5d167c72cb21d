use dioxus::prelude::*;

use super::icons::Icon;
use crate::core::routes::NavItem;

/// Router link for one menu entry. Call-to-action entries ignore `class`.
#[component]
pub fn MenuLink(
    item: NavItem,
    class: &'static str,
    on_select: Option<EventHandler<()>>,
) -> Element {
    let class = if item.call_to_action {
        "navbar__cta"
    } else {
        class
    };
    let label = item.route.label();

    rsx! {
        Link {
            class,
            to: item.route.path(),
            onclick: move |_| {
                if let Some(handler) = on_select {
                    handler.call(());
                }
            },
            if let Some(kind) = item.icon {
                Icon { kind }
            }
            "{label}"
        }
    }
}
