//! Navigation destinations and the link sets the navbar renders for each identity.
//!
//! `ui` never sees a platform's `Routable` enum. Links are rendered from the path
//! strings below and the platform router resolves them.

use crate::auth::NavIdentity;
use crate::components::icons::IconKind;
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavRoute {
    Home,
    Dashboard,
    Forum,
    NewPost,
    Profile,
    CreateBot,
    Login,
    Register,
}

impl NavRoute {
    pub const ALL: [NavRoute; 8] = [
        NavRoute::Home,
        NavRoute::Dashboard,
        NavRoute::Forum,
        NavRoute::NewPost,
        NavRoute::Profile,
        NavRoute::CreateBot,
        NavRoute::Login,
        NavRoute::Register,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            NavRoute::Home => "/",
            NavRoute::Dashboard => "/dashboard",
            NavRoute::Forum => "/forum",
            NavRoute::NewPost => "/forum/create",
            NavRoute::Profile => "/profile",
            NavRoute::CreateBot => "/create-bot",
            NavRoute::Login => "/login",
            NavRoute::Register => "/register",
        }
    }

    /// Localized link text.
    pub fn label(self) -> String {
        match self {
            NavRoute::Home => t!("nav-home"),
            NavRoute::Dashboard => t!("nav-dashboard"),
            NavRoute::Forum => t!("nav-forum"),
            NavRoute::NewPost => t!("nav-new-post"),
            NavRoute::Profile => t!("nav-profile"),
            NavRoute::CreateBot => t!("nav-create-bot"),
            NavRoute::Login => t!("nav-login"),
            NavRoute::Register => t!("nav-sign-up"),
        }
    }
}

/// One entry of a rendered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub route: NavRoute,
    pub icon: Option<IconKind>,
    /// Rendered as the filled call-to-action button instead of a plain link.
    pub call_to_action: bool,
}

impl NavItem {
    const fn plain(route: NavRoute) -> Self {
        Self {
            route,
            icon: None,
            call_to_action: false,
        }
    }

    const fn with_icon(route: NavRoute, icon: IconKind) -> Self {
        Self {
            route,
            icon: Some(icon),
            call_to_action: false,
        }
    }

    const fn cta(route: NavRoute) -> Self {
        Self {
            route,
            icon: None,
            call_to_action: true,
        }
    }
}

const DESKTOP_SIGNED_IN: &[NavItem] = &[
    NavItem::with_icon(NavRoute::Dashboard, IconKind::ClipboardList),
    NavItem::with_icon(NavRoute::Forum, IconKind::Comments),
];

const DESKTOP_SIGNED_OUT: &[NavItem] = &[
    NavItem::plain(NavRoute::Forum),
    NavItem::plain(NavRoute::Login),
    NavItem::cta(NavRoute::Register),
];

const PROFILE_MENU: &[NavItem] = &[
    NavItem::with_icon(NavRoute::Profile, IconKind::User),
    NavItem::with_icon(NavRoute::CreateBot, IconKind::Robot),
    NavItem::with_icon(NavRoute::NewPost, IconKind::Plus),
];

const DRAWER_SIGNED_IN: &[NavItem] = &[
    NavItem::with_icon(NavRoute::Dashboard, IconKind::ClipboardList),
    NavItem::with_icon(NavRoute::CreateBot, IconKind::Robot),
    NavItem::with_icon(NavRoute::Forum, IconKind::Comments),
    NavItem::with_icon(NavRoute::NewPost, IconKind::Plus),
    NavItem::with_icon(NavRoute::Profile, IconKind::User),
];

// The drawer shows Sign Up as a regular link, not the CTA button.
const DRAWER_SIGNED_OUT: &[NavItem] = &[
    NavItem::plain(NavRoute::Forum),
    NavItem::plain(NavRoute::Login),
    NavItem::plain(NavRoute::Register),
];

/// Inline links shown on wide viewports. The avatar is rendered separately.
pub fn desktop_links(identity: &NavIdentity) -> &'static [NavItem] {
    match identity {
        NavIdentity::Authenticated(_) => DESKTOP_SIGNED_IN,
        NavIdentity::Anonymous => DESKTOP_SIGNED_OUT,
    }
}

/// Items above the Logout button in the profile dropdown.
pub fn profile_menu_links() -> &'static [NavItem] {
    PROFILE_MENU
}

/// Links inside the mobile drawer. Signed-in users also get a Logout button after these.
pub fn drawer_links(identity: &NavIdentity) -> &'static [NavItem] {
    match identity {
        NavIdentity::Authenticated(_) => DRAWER_SIGNED_IN,
        NavIdentity::Anonymous => DRAWER_SIGNED_OUT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::User;

    fn routes(items: &[NavItem]) -> Vec<NavRoute> {
        items.iter().map(|item| item.route).collect()
    }

    #[test]
    fn signed_in_link_sets() {
        let identity = NavIdentity::Authenticated(User::new("ada"));
        assert_eq!(
            routes(desktop_links(&identity)),
            [NavRoute::Dashboard, NavRoute::Forum]
        );
        assert_eq!(
            routes(drawer_links(&identity)),
            [
                NavRoute::Dashboard,
                NavRoute::CreateBot,
                NavRoute::Forum,
                NavRoute::NewPost,
                NavRoute::Profile,
            ]
        );
        assert_eq!(
            routes(profile_menu_links()),
            [NavRoute::Profile, NavRoute::CreateBot, NavRoute::NewPost]
        );
    }

    #[test]
    fn signed_out_link_sets() {
        let desktop = desktop_links(&NavIdentity::Anonymous);
        assert_eq!(
            routes(desktop),
            [NavRoute::Forum, NavRoute::Login, NavRoute::Register]
        );
        assert!(desktop[2].call_to_action);
        assert!(desktop.iter().all(|item| item.icon.is_none()));

        let drawer = drawer_links(&NavIdentity::Anonymous);
        assert_eq!(routes(drawer), routes(desktop));
        assert!(drawer.iter().all(|item| !item.call_to_action));
    }

    #[test]
    fn paths_are_distinct_and_rooted() {
        let mut paths: Vec<_> = NavRoute::ALL.iter().map(|r| r.path()).collect();
        assert!(paths.iter().all(|p| p.starts_with('/')));
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), NavRoute::ALL.len());
    }

    #[test]
    fn labels_come_from_the_fallback_locale() {
        crate::i18n::init();
        assert_eq!(NavRoute::Register.label(), "Sign Up");
        assert_eq!(NavRoute::NewPost.label(), "New Post");
    }
}
