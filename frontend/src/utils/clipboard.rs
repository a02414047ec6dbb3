use std::cell::RefCell;

use futures::future::{FutureExt, LocalBoxFuture};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::Reflect;
use web_sys::Clipboard;

use crate::config::COPY_CONFIRMATION_MS;
use crate::state::LandingAction;
use crate::utils::profile::SAMPLE_PROFILE;
use crate::utils::timer::{GenerationTimer, Scheduler};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

pub trait ClipboardWriter {
    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), ClipboardError>>;
}

/// `navigator.clipboard` of the current window.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserClipboard;

impl BrowserClipboard {
    fn clipboard() -> Result<Clipboard, ClipboardError> {
        let window = web_sys::window()
            .ok_or_else(|| ClipboardError::Unavailable("no window".to_string()))?;
        // The API is missing outside secure contexts.
        let clipboard = Reflect::get(&window.navigator(), &JsValue::from_str("clipboard"))
            .map_err(|e| ClipboardError::Unavailable(format!("{:?}", e)))?;
        if clipboard.is_undefined() || clipboard.is_null() {
            return Err(ClipboardError::Unavailable(
                "navigator.clipboard is not available".to_string(),
            ));
        }
        Ok(clipboard.unchecked_into::<Clipboard>())
    }
}

impl ClipboardWriter for BrowserClipboard {
    fn write_text<'a>(&'a self, text: &'a str) -> LocalBoxFuture<'a, Result<(), ClipboardError>> {
        async move {
            let clipboard = Self::clipboard()?;
            JsFuture::from(clipboard.write_text(text))
                .await
                .map(|_| ())
                .map_err(|e| ClipboardError::Unavailable(format!("{:?}", e)))
        }
        .boxed_local()
    }
}

/// Copies the sample profile and drives the confirmation flag.
///
/// On success the confirmation timer is restarted, so a second copy inside the window
/// extends it instead of stacking a second reset. Failures are not retried.
pub async fn copy_configuration<C, S, D>(
    clipboard: &C,
    timer: &RefCell<GenerationTimer<S>>,
    dispatch: D,
) -> Result<u64, ClipboardError>
where
    C: ClipboardWriter + ?Sized,
    S: Scheduler,
    D: Fn(LandingAction) + Clone + 'static,
{
    if let Err(err) = clipboard.write_text(SAMPLE_PROFILE).await {
        log::warn!("copy failed: {}", err);
        dispatch(LandingAction::CopyFailed);
        return Err(err);
    }

    let on_expire = dispatch.clone();
    let generation = timer.borrow_mut().restart(COPY_CONFIRMATION_MS, move |generation| {
        on_expire(LandingAction::CopyConfirmationExpired { generation });
    });
    dispatch(LandingAction::CopySucceeded { generation });
    log::info!("configuration copied (generation {})", generation);
    Ok(generation)
}
