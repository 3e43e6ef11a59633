use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component(WhyPage)]
pub fn why_page() -> Html {
    html! {
        <div class="page narrow">
            <main class="card why-card">
                <p class="eyebrow">{"Why this exists"}</p>
                <h1 class="card-title">{"Grace for today."}</h1>
                <p class="muted lead">
                    {"This space is here for the days when the heart feels heavy and the \
                      calendar feels full. It\u{2019}s a quiet invitation to meet God in the \
                      ordinary \u{2014} one verse, one breath at a time."}
                </p>
                <p class="muted lead">
                    {"There are no streaks to keep, no backlog to chase, no pressure to \
                      prove. Only a gentle step of faith for today."}
                </p>
                <p class="muted small">{"You\u{2019}re welcome here, even if today is all you can bring."}</p>
                <Link<Route> to={Route::Today} classes={classes!("pill-button")}>{"Back to today"}</Link<Route>>
            </main>
        </div>
    }
}
