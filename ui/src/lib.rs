//! Shared UI crate for LostCloud: the site navbar, its menu state machine, the auth
//! context it reads from and the theme-driven global styles.

pub mod auth;
pub mod config;
pub mod core;
pub mod i18n;
pub mod theme;
pub mod views;

pub mod components {
    pub mod icons;
    mod menu_link;
    mod mobile_drawer;
    mod profile_menu;

    // Site header with profile dropdown and mobile drawer (components/navbar.rs)
    mod navbar;
    pub use navbar::Navbar;
    pub use profile_menu::PROFILE_CONTAINER_CLASS;
}
