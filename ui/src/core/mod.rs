pub mod menu;
pub mod outside_click;
pub mod routes;
