//! Federated sign-in popup plumbing.
//!
//! The opener opens the provider's consent page in a named popup. The provider
//! redirects back to `CALLBACK_PATH` on our origin; that page posts its full
//! URL to the opener and closes itself. The opener hands the URL to
//! `accounts:signInWithIdp`.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

use super::identity::{AuthError, AuthErrorCode};

pub const CALLBACK_PATH: &str = "/auth/callback";
pub const POPUP_NAME: &str = "menosense-federated";
pub const POPUP_FEATURES: &str = "popup,width=500,height=600";
#[cfg(feature = "hydrate")]
const POLL_INTERVAL_MS: u32 = 250;

/// Absolute callback URL for `origin`.
#[must_use]
pub fn callback_url(origin: &str) -> String {
    format!("{}{CALLBACK_PATH}", origin.trim_end_matches('/'))
}

/// Whether a posted message is a callback URL from our own origin.
#[must_use]
pub fn is_callback_url(url: &str, origin: &str) -> bool {
    let expected = callback_url(origin);
    url == expected || url.starts_with(&format!("{expected}?")) || url.starts_with(&format!("{expected}#"))
}

/// Origin of the current page.
///
/// # Errors
///
/// Returns `auth/internal-error` outside the browser.
pub fn current_origin() -> Result<String, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .ok_or_else(|| AuthError::new(AuthErrorCode::Internal, "no window origin"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(AuthError::new(AuthErrorCode::Internal, "popup sign-in requires a browser"))
    }
}

/// Open `auth_uri` in a popup and wait for the callback URL.
///
/// # Errors
///
/// `auth/popup-blocked` when the browser refuses the window,
/// `auth/popup-closed-by-user` when it closes before reporting back.
pub async fn run(auth_uri: &str) -> Result<String, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let window = web_sys::window().ok_or_else(|| AuthError::new(AuthErrorCode::Internal, "no window"))?;
        let origin = current_origin()?;
        let popup = window
            .open_with_url_and_target_and_features(auth_uri, POPUP_NAME, POPUP_FEATURES)
            .ok()
            .flatten()
            .ok_or_else(|| AuthError::new(AuthErrorCode::PopupBlocked, "popup blocked by the browser"))?;

        let received: Rc<RefCell<Option<String>>> = Rc::default();
        let sink = received.clone();
        let expected_origin = origin.clone();
        let on_message = Closure::<dyn FnMut(web_sys::MessageEvent)>::new(move |ev: web_sys::MessageEvent| {
            if ev.origin() != expected_origin {
                return;
            }
            if let Some(url) = ev.data().as_string() {
                if is_callback_url(&url, &expected_origin) {
                    *sink.borrow_mut() = Some(url);
                }
            }
        });
        window
            .add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref())
            .map_err(|_| AuthError::new(AuthErrorCode::Internal, "cannot listen for popup messages"))?;

        let mut closed_seen = false;
        let outcome = loop {
            gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;
            if let Some(url) = received.borrow_mut().take() {
                break Ok(url);
            }
            if closed_seen {
                break Err(AuthError::new(AuthErrorCode::PopupClosedByUser, "popup closed before completing sign-in"));
            }
            // One extra tick after close lets a message posted just before it land.
            closed_seen = popup.closed().unwrap_or(true);
        };

        let _ = window.remove_event_listener_with_callback("message", on_message.as_ref().unchecked_ref());
        let _ = popup.close();
        outcome
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth_uri;
        Err(AuthError::new(AuthErrorCode::Internal, "popup sign-in requires a browser"))
    }
}

/// Called from the callback page inside the popup: report our URL to the
/// opener and close.
pub fn report_to_opener() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::{JsCast, JsValue};

        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        if let (Ok(href), Ok(origin)) = (location.href(), location.origin()) {
            match window.opener().ok().and_then(|o| o.dyn_into::<web_sys::Window>().ok()) {
                Some(opener) => {
                    if opener.post_message(&JsValue::from_str(&href), &origin).is_err() {
                        log::warn!("could not report sign-in result to opener");
                    }
                }
                None => log::warn!("auth callback opened without an opener"),
            }
        }
        let _ = window.close();
    }
}
