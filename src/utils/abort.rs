//! Abortable request handles.

use fsbrowse_core::CancelToken;
use web_sys::{AbortController, AbortSignal};

/// Pairs a [`CancelToken`] with an `AbortController` so cancelling both
/// drops the result and aborts the underlying `fetch`.
pub struct InFlight {
    token: CancelToken,
    controller: Option<AbortController>,
}

impl InFlight {
    pub fn new(token: CancelToken) -> Self {
        let controller = AbortController::new()
            .map_err(|err| log::warn!("AbortController unavailable: {:?}", err))
            .ok();
        Self { token, controller }
    }

    pub fn signal(&self) -> Option<AbortSignal> {
        self.controller.as_ref().map(AbortController::signal)
    }

    pub fn cancel(&self) {
        self.token.cancel();
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.cancel();
    }
}
