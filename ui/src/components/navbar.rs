use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use futures_channel::mpsc::UnboundedSender;
use futures_util::StreamExt;

use super::icons::{Icon, IconKind};
use super::menu_link::MenuLink;
use super::mobile_drawer::MobileDrawer;
use super::profile_menu::{ProfileMenu, PROFILE_CONTAINER_CLASS};
use crate::auth::{use_auth, AuthContext, NavIdentity};
use crate::config::NavConfig;
use crate::core::menu::{MenuState, NavEffect, NavEvent};
use crate::core::outside_click::{DocumentClickHost, OutsideClickSlot};
use crate::core::routes::{desktop_links, NavRoute};
use crate::i18n;
use crate::t;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

type SenderSlot = Rc<RefCell<Option<UnboundedSender<NavEvent>>>>;

/// Site header: brand, inline links or avatar menu on wide screens, drawer on narrow ones.
///
/// Every interaction is sent to one coroutine which applies it to [`MenuState`] and runs
/// the returned effects. The coroutine also keeps the document click listener attached
/// exactly while the profile dropdown is open; the listener slot lives in a hook, so
/// unmounting the navbar drops it together with the listener.
#[component]
pub fn Navbar() -> Element {
    i18n::init();

    let auth = use_auth();
    let config = try_use_context::<NavConfig>().unwrap_or_default();
    let (menu, events) = use_nav_events(auth);

    navbar_body(menu(), auth.identity(), &config, events)
}

/// Menu state and the coroutine that owns it. Components below the caller reach the
/// coroutine through `use_coroutine_handle::<NavEvent>()`.
fn use_nav_events(auth: AuthContext) -> (Signal<MenuState>, Coroutine<NavEvent>) {
    let navigator = use_navigator();
    let menu = use_signal(MenuState::default);

    let sender_slot: SenderSlot = use_hook(|| Rc::new(RefCell::new(None)));
    let listener_slot =
        use_hook(|| Rc::new(OutsideClickSlot::new(DocumentClickHost, PROFILE_CONTAINER_CLASS)));

    let events = {
        let sender_slot = sender_slot.clone();
        use_coroutine(move |mut rx: UnboundedReceiver<NavEvent>| {
            let sender_slot = sender_slot.clone();
            let listener_slot = listener_slot.clone();
            let navigator = navigator.clone();
            let mut menu = menu;

            async move {
                while let Some(event) = rx.next().await {
                    let effects = menu.write().apply(event);

                    let open = menu.peek().profile_dropdown.is_open();
                    if let Some(sender) = sender_slot.borrow().clone() {
                        listener_slot.sync(open, move |inside_dropdown| {
                            let _ = sender
                                .unbounded_send(NavEvent::DocumentClicked { inside_dropdown });
                        });
                    }

                    for effect in effects {
                        match effect {
                            NavEffect::EndSession => end_session(auth, sender_slot.clone()),
                            NavEffect::Navigate(route) => {
                                navigator.push(route.path());
                            }
                        }
                    }
                }
            }
        })
    };

    sender_slot.borrow_mut().get_or_insert_with(|| events.tx());

    (menu, events)
}

fn navbar_body(
    state: MenuState,
    identity: NavIdentity,
    config: &NavConfig,
    events: Coroutine<NavEvent>,
) -> Element {
    let logout_pending = state.logout_pending();
    let logo_alt = t!("nav-logo-alt");
    let open_label = t!("nav-open-menu");
    let nav_label = t!("nav-main-label");

    let profile = match &identity {
        NavIdentity::Authenticated(user) => rsx! {
            ProfileMenu {
                username: user.username.clone(),
                avatar_src: user.avatar_src(config),
                open: state.profile_dropdown.is_open(),
                logout_pending,
            }
        },
        NavIdentity::Anonymous => rsx! {},
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                Link { class: "navbar__brand", to: NavRoute::Home.path(),
                    img { src: "{config.logo_src}", alt: "{logo_alt}" }
                    span { "{config.brand_name}" }
                }

                nav { class: "navbar__links", aria_label: "{nav_label}",
                    for item in desktop_links(&identity).iter().copied() {
                        MenuLink { key: "{item.route.path()}", item, class: "navbar__link" }
                    }
                    {profile}
                }

                button {
                    r#type: "button",
                    class: "navbar__hamburger",
                    aria_label: "{open_label}",
                    aria_controls: "mobile-drawer",
                    aria_expanded: state.mobile_menu.is_open(),
                    onclick: move |_| events.send(NavEvent::HamburgerClicked),
                    Icon { kind: IconKind::Bars }
                }

                MobileDrawer {
                    identity: identity.clone(),
                    open: state.mobile_menu.is_open(),
                    logout_pending,
                    brand_name: config.brand_name.clone(),
                    logo_src: config.logo_src.clone(),
                }
            }

            if let Some(message) = state.logout_failure() {
                div { class: "navbar__notice", role: "alert", title: "{message}",
                    span { {t!("nav-logout-failed")} }
                    button {
                        r#type: "button",
                        class: "navbar__notice-dismiss",
                        onclick: move |_| events.send(NavEvent::NoticeDismissed),
                        {t!("nav-dismiss")}
                    }
                }
            }
        }
    }
}

/// Run the auth collaborator's logout off the event loop and report back when it settles.
fn end_session(auth: AuthContext, sender_slot: SenderSlot) {
    spawn(async move {
        let outcome = auth.logout().await.map_err(|err| {
            warn!(%err, "logout failed; continuing signed out");
            err.to_string()
        });

        if let Some(sender) = sender_slot.borrow().as_ref() {
            let _ = sender.unbounded_send(NavEvent::LogoutSettled(outcome));
        }
    });
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use dioxus::dioxus_core::NoOpMutations;

    use super::*;
    use crate::auth::{AuthProvider, Session};

    const DROPDOWN: &str = r#"class="profile-menu""#;
    const CLOSED_DRAWER: &str = r#"class="mobile-drawer""#;
    const OPEN_DRAWER: &str = r#"class="mobile-drawer mobile-drawer--open""#;

    fn ada() -> Session {
        Session::from(api::SessionGrant {
            token: "t-ada".into(),
            username: "ada".into(),
            profile_picture: None,
        })
    }

    /// Events sent through the navbar coroutine on its first render.
    #[derive(Clone)]
    struct Script(Vec<NavEvent>);

    #[derive(Debug, Clone, PartialEq, Routable)]
    #[rustfmt::skip]
    enum Scripted {
        #[layout(ScriptedNavbar)]
        #[route("/")]
        Landing {},
    }

    #[derive(Debug, Clone, PartialEq, Routable)]
    #[rustfmt::skip]
    enum Site {
        #[layout(SiteLayout)]
        #[route("/")]
        Landing {},
    }

    #[component]
    fn Landing() -> Element {
        rsx! { p { "landing" } }
    }

    #[component]
    fn SiteLayout() -> Element {
        rsx! {
            Navbar {}
            Outlet::<Site> {}
        }
    }

    /// Same hooks and markup as [`Navbar`], with a scripted event sequence.
    #[component]
    fn ScriptedNavbar() -> Element {
        i18n::init();

        let auth = use_auth();
        let Script(script) = use_context::<Script>();
        let (menu, events) = use_nav_events(auth);
        use_hook(move || script.into_iter().for_each(|event| events.send(event)));

        navbar_body(menu(), auth.identity(), &NavConfig::default(), events)
    }

    #[component]
    fn SignedIn(script: Vec<NavEvent>) -> Element {
        use_context_provider(|| Script(script.clone()));

        rsx! {
            AuthProvider { session: ada(),
                Router::<Scripted> {}
            }
        }
    }

    fn signed_out_site() -> Element {
        rsx! {
            AuthProvider {
                Router::<Site> {}
            }
        }
    }

    async fn settle(dom: &mut VirtualDom) -> String {
        dom.rebuild_in_place();
        for _ in 0..8 {
            let work = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work());
            if work.await.is_err() {
                break;
            }
            dom.render_immediate(&mut NoOpMutations);
        }
        dioxus_ssr::render(dom)
    }

    async fn render_signed_in(script: Vec<NavEvent>) -> String {
        let mut dom = VirtualDom::new_with_props(SignedIn, SignedInProps { script });
        settle(&mut dom).await
    }

    #[tokio::test]
    async fn dropdown_is_mounted_only_while_open() {
        let initial = render_signed_in(vec![]).await;
        assert!(initial.contains("navbar__profile profile-dropdown"), "{initial}");
        assert!(!initial.contains(DROPDOWN), "{initial}");

        let opened = render_signed_in(vec![NavEvent::AvatarClicked]).await;
        assert!(opened.contains(DROPDOWN), "{opened}");

        let dismissed = render_signed_in(vec![
            NavEvent::AvatarClicked,
            NavEvent::DocumentClicked {
                inside_dropdown: false,
            },
        ])
        .await;
        assert!(!dismissed.contains(DROPDOWN), "{dismissed}");
    }

    #[tokio::test]
    async fn drawer_class_follows_hamburger_and_overlay() {
        let initial = render_signed_in(vec![]).await;
        assert!(initial.contains(CLOSED_DRAWER), "{initial}");
        assert!(!initial.contains(OPEN_DRAWER), "{initial}");

        let opened = render_signed_in(vec![NavEvent::HamburgerClicked]).await;
        assert!(opened.contains(OPEN_DRAWER), "{opened}");
        assert!(!opened.contains(DROPDOWN), "{opened}");

        let closed =
            render_signed_in(vec![NavEvent::HamburgerClicked, NavEvent::OverlayClicked]).await;
        assert!(closed.contains(CLOSED_DRAWER), "{closed}");
    }

    #[tokio::test]
    async fn signed_out_navbar_has_no_avatar() {
        let mut dom = VirtualDom::new(signed_out_site);
        let html = settle(&mut dom).await;

        assert!(html.contains(r#"href="/login""#), "{html}");
        assert!(!html.contains(PROFILE_CONTAINER_CLASS), "{html}");
        assert!(html.contains(CLOSED_DRAWER), "{html}");
        assert!(html.contains(r#"class="icon" aria-hidden="true""#), "{html}");
    }
}
