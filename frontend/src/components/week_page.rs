use yew::prelude::*;
use yew_router::prelude::*;
use shared::reading_plan::long_label;
use crate::hooks::use_week::use_week;
use crate::services::date_utils;
use crate::Route;

#[function_component(WeekPage)]
pub fn week_page() -> Html {
    let today = use_memo((), |_| date_utils::today());
    let days = use_week(*today);

    html! {
        <div class="page narrow">
            <header class="page-header">
                <div>
                    <p class="eyebrow">{"Weekly view"}</p>
                    <h1 class="page-title">{long_label(*today)}</h1>
                </div>
                <Link<Route> to={Route::Today} classes={classes!("pill-button")}>{"Back to today"}</Link<Route>>
            </header>

            <main class="card week-card">
                <p class="muted small">{"A gentle glance at this week \u{2014} just checkmarks, no metrics."}</p>
                <div class="week-list">
                    {for days.iter().map(|day| html! {
                        <div key={day.date_key.to_string()} class="week-row">
                            <div>
                                <p class="week-label">{day.label.clone()}</p>
                                <p class="week-reference">{day.reference}</p>
                            </div>
                            <div class="week-mark" aria-label={day.aria_label()}>
                                {day.mark()}
                            </div>
                        </div>
                    })}
                </div>
            </main>
        </div>
    }
}
