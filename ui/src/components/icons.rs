//! Stroke icons used by the navbar menus.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Bars,
    Times,
    User,
    SignOut,
    ClipboardList,
    Plus,
    Robot,
    Comments,
}

impl IconKind {
    fn path(self) -> &'static str {
        match self {
            IconKind::Bars => "M4 6h16M4 12h16M4 18h16",
            IconKind::Times => "M6 6l12 12M18 6L6 18",
            IconKind::User => "M12 12a4 4 0 1 0 0-8 4 4 0 0 0 0 8zM4 21c0-4.4 3.6-8 8-8s8 3.6 8 8",
            IconKind::SignOut => "M15 4h4a1 1 0 0 1 1 1v14a1 1 0 0 1-1 1h-4M10 17l-5-5 5-5M5 12h11",
            IconKind::ClipboardList => "M9 3h6v3H9zM7 4H5v17h14V4h-2M9 11h6M9 15h6",
            IconKind::Plus => "M12 5v14M5 12h14",
            IconKind::Robot => "M5 9h14v10H5zM12 5v4M9 14h.01M15 14h.01M3 13v3M21 13v3",
            IconKind::Comments => "M4 5h16v10H9l-5 4z",
        }
    }
}

#[component]
pub fn Icon(kind: IconKind) -> Element {
    rsx! {
        span { class: "icon", aria_hidden: "true",
            svg {
                width: "1em",
                height: "1em",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                path { d: kind.path() }
            }
        }
    }
}
