use yew::prelude::*;
use yew_router::prelude::*;
use shared::Theme;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub long_label: String,
    pub theme: Theme,
    pub on_toggle_theme: Callback<MouseEvent>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="page-header">
            <div>
                <p class="eyebrow">{"Today Is Enough"}</p>
                <h1 class="page-title">{props.long_label.clone()}</h1>
                <p class="muted">{"One short passage each day. No streaks. Just grace."}</p>
                <Link<Route> to={Route::Why} classes={classes!("accent-link")}>{"Why this exists"}</Link<Route>>
            </div>
            <button
                type="button"
                class="pill-button"
                aria-label="Toggle dark mode"
                onclick={props.on_toggle_theme.clone()}
            >
                {props.theme.toggle_label()}
            </button>
        </header>
    }
}
