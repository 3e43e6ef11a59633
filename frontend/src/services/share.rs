//! Native share sheet and clipboard as a [`ShareTarget`].
//!
//! Both browser APIs are looked up at runtime: either may be missing
//! depending on the browser and on whether the page is served securely.

use async_trait::async_trait;
use js_sys::{Function, Object, Promise, Reflect};
use shared::{ShareError, SharePayload, ShareTarget};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::browser_storage::js_message;

/// `navigator.share` and `navigator.clipboard.writeText` of the current window
pub struct BrowserShare {
    navigator: Option<JsValue>,
}

impl BrowserShare {
    pub fn new() -> Self {
        Self {
            navigator: web_sys::window().map(|window| window.navigator().into()),
        }
    }

    fn navigator(&self) -> Result<&JsValue, ShareError> {
        self.navigator.as_ref().ok_or(ShareError::Unsupported)
    }
}

#[async_trait(?Send)]
impl ShareTarget for BrowserShare {
    async fn native_share(&self, payload: &SharePayload) -> Result<(), ShareError> {
        let navigator = self.navigator()?;
        let share_fn = method(navigator, "share").ok_or(ShareError::Unsupported)?;
        let data = share_data(payload)?;
        call_and_wait(&share_fn, navigator, &data).await
    }

    async fn copy_text(&self, text: &str) -> Result<(), ShareError> {
        let clipboard = Reflect::get(self.navigator()?, &JsValue::from_str("clipboard"))
            .ok()
            .filter(|value| !value.is_undefined() && !value.is_null())
            .ok_or(ShareError::Unsupported)?;
        let write_text = method(&clipboard, "writeText").ok_or(ShareError::Unsupported)?;
        call_and_wait(&write_text, &clipboard, &JsValue::from_str(text)).await
    }
}

fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
}

fn share_data(payload: &SharePayload) -> Result<JsValue, ShareError> {
    let data = Object::new();
    let mut fields = vec![("title", payload.title.as_str()), ("text", payload.text.as_str())];
    if let Some(url) = payload.url.as_deref() {
        fields.push(("url", url));
    }
    for (name, value) in fields {
        Reflect::set(&data, &JsValue::from_str(name), &JsValue::from_str(value))
            .map_err(|err| ShareError::Rejected(js_message(&err)))?;
    }
    Ok(data.into())
}

async fn call_and_wait(function: &Function, this: &JsValue, arg: &JsValue) -> Result<(), ShareError> {
    let promise = function
        .call1(this, arg)
        .map_err(|err| ShareError::Rejected(js_message(&err)))?;
    JsFuture::from(Promise::resolve(&promise))
        .await
        .map(|_| ())
        .map_err(|err| ShareError::Rejected(js_message(&err)))
}
