use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use shared::{share_with, AckGeneration, AppConfig, SharePayload, ShareStatus};
use crate::services::date_utils;
use crate::services::share::BrowserShare;

pub struct UseShareResult {
    pub status: ShareStatus,
    pub share: Callback<MouseEvent>,
}

/// Share button state. Failures end the attempt quietly.
#[hook]
pub fn use_share(payload: SharePayload) -> UseShareResult {
    let ack_ms = use_context::<AppConfig>().unwrap_or_default().copied_ack_ms;
    let status = use_state(ShareStatus::default);
    let generation = use_mut_ref(AckGeneration::default);

    let share = {
        let status = status.clone();
        Callback::from(move |_: MouseEvent| {
            let status = status.clone();
            let generation = generation.clone();
            let token = generation.borrow_mut().begin();
            let mut payload = payload.clone();
            if let Some(href) = date_utils::current_href() {
                payload = payload.with_url(href);
            }

            spawn_local(async move {
                let result = share_with(&BrowserShare::new(), &payload).await;
                if let Err(err) = &result {
                    log::debug!("Share ended without sharing: {}", err);
                }

                let next = ShareStatus::settle(&result);
                status.set(next);
                if next == ShareStatus::Copied {
                    TimeoutFuture::new(ack_ms).await;
                    // A later click owns the button now
                    if generation.borrow().is_current(token) {
                        status.set(ShareStatus::Idle);
                    }
                }
            });
        })
    };

    UseShareResult {
        status: *status,
        share,
    }
}
