//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::config::AuthConfig;
use crate::net::api::HttpAuthClient;
use crate::pages::{
    google_callback::GoogleCallbackPage, landing::LandingPage, login::LoginPage,
    signup::SignUpPage,
};
use crate::state::{auth::AuthState, session::SessionManager, session_store::LocalSessionStore};

/// Context handle for the session manager.
///
/// The manager is single-threaded (`Rc`), so it is stored with local storage
/// and views fetch it with [`use_session`].
pub type SessionHandle = StoredValue<Rc<SessionManager>, LocalStorage>;

/// Fetch the session handle provided by [`App`].
pub fn use_session() -> SessionHandle {
    expect_context::<SessionHandle>()
}

/// Root application component.
///
/// Builds the session manager, mirrors its state into an `RwSignal<AuthState>`
/// for reactive views, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AuthConfig::from_env();
    let auth = RwSignal::new(AuthState::Loading);

    let manager = Rc::new(SessionManager::new(
        Box::new(HttpAuthClient::new(&config)),
        Box::new(LocalSessionStore::default()),
    ));
    manager.subscribe(move |state| auth.set(state.clone()));
    manager.restore();

    provide_context(config);
    provide_context(auth);
    provide_context::<SessionHandle>(StoredValue::new_local(manager));

    view! {
        <Title text="Pulse"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LandingPage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignUpPage/>
                    <Route
                        path=(
                            StaticSegment("auth"),
                            StaticSegment("google"),
                            StaticSegment("callback"),
                        )
                        view=GoogleCallbackPage
                    />
                </Routes>
            </main>
        </Router>
    }
}
