//! Scoped document click listener used to close the profile dropdown.
//!
//! A listener is attached only while the dropdown is open. [`OutsideClickGuard`] owns
//! the registration and detaches it when dropped, so closing the dropdown, unmounting
//! the navbar and unwinding all release it the same way.

use std::cell::RefCell;
use std::rc::Rc;

/// Callback receiving `true` when the click target sits inside the watched container.
pub type ClickCallback = Rc<dyn Fn(bool)>;

/// Something that can deliver document-level clicks.
pub trait ClickHost {
    type Token;

    /// Start reporting clicks, classified against elements carrying `container_class`.
    fn attach(&self, container_class: &'static str, on_click: ClickCallback) -> Self::Token;

    fn detach(&self, token: Self::Token);
}

pub struct OutsideClickGuard<H: ClickHost> {
    host: H,
    token: Option<H::Token>,
}

impl<H: ClickHost> OutsideClickGuard<H> {
    pub fn acquire(
        host: H,
        container_class: &'static str,
        on_click: impl Fn(bool) + 'static,
    ) -> Self {
        let token = host.attach(container_class, Rc::new(on_click));
        Self {
            host,
            token: Some(token),
        }
    }
}

impl<H: ClickHost> Drop for OutsideClickGuard<H> {
    fn drop(&mut self) {
        if let Some(token) = self.token.take() {
            self.host.detach(token);
        }
    }
}

/// Holds at most one guard and follows the dropdown's open flag.
pub struct OutsideClickSlot<H: ClickHost + Clone> {
    host: H,
    container_class: &'static str,
    guard: RefCell<Option<OutsideClickGuard<H>>>,
}

impl<H: ClickHost + Clone> OutsideClickSlot<H> {
    pub fn new(host: H, container_class: &'static str) -> Self {
        Self {
            host,
            container_class,
            guard: RefCell::new(None),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.guard.borrow().is_some()
    }

    /// Attach when `open` and nothing is attached yet; release when closed.
    pub fn sync(&self, open: bool, on_click: impl Fn(bool) + 'static) {
        let mut guard = self.guard.borrow_mut();
        if open && guard.is_none() {
            *guard = Some(OutsideClickGuard::acquire(
                self.host.clone(),
                self.container_class,
                on_click,
            ));
        } else if !open {
            guard.take();
        }
    }
}

/// The browser document. Outside a browser there is no document to listen on and
/// attaching is a no-op.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentClickHost;

#[cfg(target_arch = "wasm32")]
mod browser {
    use dioxus::logger::tracing::warn;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    use super::{ClickCallback, ClickHost, DocumentClickHost};

    type Listener = Closure<dyn FnMut(web_sys::Event)>;

    fn document() -> Option<web_sys::Document> {
        web_sys::window().and_then(|window| window.document())
    }

    impl ClickHost for DocumentClickHost {
        type Token = Option<Listener>;

        fn attach(&self, container_class: &'static str, on_click: ClickCallback) -> Self::Token {
            let document = document()?;
            let selector = format!(".{container_class}");

            let listener = Closure::wrap(Box::new(move |event: web_sys::Event| {
                let inside = event
                    .target()
                    .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
                    .and_then(|element| element.closest(&selector).ok().flatten())
                    .is_some();
                on_click(inside);
            }) as Box<dyn FnMut(web_sys::Event)>);

            if let Err(err) = document
                .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            {
                warn!(?err, "could not attach outside-click listener");
                return None;
            }
            Some(listener)
        }

        fn detach(&self, token: Self::Token) {
            let (Some(listener), Some(document)) = (token, document()) else {
                return;
            };
            if let Err(err) = document
                .remove_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            {
                warn!(?err, "could not detach outside-click listener");
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ClickHost for DocumentClickHost {
    type Token = ();

    fn attach(&self, _container_class: &'static str, _on_click: ClickCallback) -> Self::Token {}

    fn detach(&self, _token: Self::Token) {}
}
