//! Theme tokens, responsive breakpoints and the global stylesheet built from them.

mod breakpoints;
pub use breakpoints::{media, Breakpoint};

mod tokens;
pub use tokens::ThemeTokens;

mod global;
pub use global::{global_stylesheet, GlobalStyles, ThemeProvider};
