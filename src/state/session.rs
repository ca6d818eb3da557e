//! Session manager: the single source of truth for who is signed in.
//!
//! DESIGN
//! ======
//! The manager owns the in-memory [`AuthState`] and writes every transition
//! through to its [`SessionStore`] before publishing it. Views never mutate
//! auth state themselves; they call one of the transition methods and react
//! to the notification.
//!
//! ```text
//! Loading ──restore()──▶ Authenticated | Unauthenticated
//!    *    ──sign_up() / sign_in_with_google()──▶ Authenticated
//!    *    ──logout()──▶ Unauthenticated
//! ```
//!
//! Execution is single-threaded: state lives in `RefCell`s and no borrow is
//! held across an `.await` or while listeners run, so listeners may call back
//! into the manager.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::auth::AuthState;
use super::session_store::SessionStore;
use crate::error::AuthError;
use crate::net::api::AuthClient;
use crate::net::types::{Session, SignUpRequest};

/// Handle returned by [`SessionManager::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&AuthState)>;

pub struct SessionManager {
    client: Box<dyn AuthClient>,
    store: Box<dyn SessionStore>,
    state: RefCell<AuthState>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_subscription: Cell<u64>,
}

impl SessionManager {
    /// Create a manager in the `Loading` state. Call [`Self::restore`] once
    /// listeners are attached.
    pub fn new(client: Box<dyn AuthClient>, store: Box<dyn SessionStore>) -> Self {
        Self {
            client,
            store,
            state: RefCell::new(AuthState::Loading),
            listeners: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }

    /// Resolve `Loading` from the persisted slot.
    ///
    /// Only the first call while `Loading` reads the store; later calls (or
    /// calls after a sign-in already happened) return the current state
    /// untouched. Absent or unparseable data means signed out.
    pub fn restore(&self) -> AuthState {
        if !self.state.borrow().is_loading() {
            return self.state();
        }
        let next = match self.store.load() {
            Some(raw) => match serde_json::from_str::<Session>(&raw) {
                Ok(session) => {
                    log::info!("restored session for {}", session.username);
                    AuthState::Authenticated(session)
                }
                Err(e) => {
                    log::warn!("ignoring malformed persisted session: {e}");
                    AuthState::Unauthenticated
                }
            },
            None => AuthState::Unauthenticated,
        };
        self.transition(next);
        self.state()
    }

    /// Register a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Remote`] if the auth service rejects or cannot
    /// complete the request. State and store are left unchanged.
    pub async fn sign_up(&self, request: SignUpRequest) -> Result<Session, AuthError> {
        let session = self.client.sign_up(&request).await?;
        log::info!("signed up as {}", session.username);
        self.establish(session.clone());
        Ok(session)
    }

    /// Sign in with a Google ID token.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::sign_up`].
    pub async fn sign_in_with_google(&self, token: &str) -> Result<Session, AuthError> {
        let session = self.client.google_login(token).await?;
        log::info!("signed in with Google as {}", session.username);
        self.establish(session.clone());
        Ok(session)
    }

    /// Forget the current user. Never fails; repeated calls are harmless.
    pub fn logout(&self) {
        self.store.clear();
        self.transition(AuthState::Unauthenticated);
    }

    /// Invoke `listener` after every state transition.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&AuthState) + 'static,
    {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Stop notifying a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(sid, _)| *sid != id);
        listeners.len() != before
    }

    fn establish(&self, session: Session) {
        match serde_json::to_string(&session) {
            Ok(raw) => self.store.save(&raw),
            Err(e) => log::warn!("failed to persist session: {e}"),
        }
        self.transition(AuthState::Authenticated(session));
    }

    fn transition(&self, next: AuthState) {
        *self.state.borrow_mut() = next.clone();
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(&next);
        }
    }
}
