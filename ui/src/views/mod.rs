//! Route targets for the navbar links. Page bodies are intentionally thin; the
//! interesting behaviour lives in the navbar.

mod home;
pub use home::Home;

mod pages;
pub use pages::{CreateBot, Dashboard, Forum, NewPost, Profile};

mod session;
pub use session::{Login, Register};
