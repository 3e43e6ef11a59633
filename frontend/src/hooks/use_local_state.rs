use std::rc::Rc;
use yew::prelude::*;
use shared::{AppConfig, LocalState};
use crate::services::browser_storage::BrowserStorage;

pub type BrowserState = LocalState<BrowserStorage>;

/// Device storage for the lifetime of the calling component
#[hook]
pub fn use_local_state() -> Rc<BrowserState> {
    let config = use_context::<AppConfig>().unwrap_or_default();
    use_memo(config.namespace, |namespace| {
        LocalState::with_namespace(BrowserStorage::open(), namespace.clone())
    })
}
