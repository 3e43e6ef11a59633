mod components;
mod hooks;
mod services;

use yew::prelude::*;
use yew_router::prelude::*;
use shared::AppConfig;
use components::today_page::TodayPage;
use components::week_page::WeekPage;
use components::why_page::WhyPage;
use services::logging::Logger;

/// Pages of the app. Hash routing keeps every page reachable from a plain
/// static file host.
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Today,
    #[at("/week")]
    Week,
    #[at("/why")]
    Why,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Today | Route::NotFound => html! { <TodayPage /> },
        Route::Week => html! { <WeekPage /> },
        Route::Why => html! { <WhyPage /> },
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<AppConfig> context={props.config.clone()}>
            <HashRouter>
                <Switch<Route> render={switch} />
            </HashRouter>
        </ContextProvider<AppConfig>>
    }
}

fn main() {
    let config = AppConfig::default();
    Logger::init(config.log_level);
    log::info!("Starting Today Is Enough");

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Today.to_path(), "/");
        assert_eq!(Route::Week.to_path(), "/week");
        assert_eq!(Route::Why.to_path(), "/why");
    }

    #[test]
    fn test_known_paths_are_recognized() {
        assert_eq!(Route::recognize("/why"), Some(Route::Why));
        assert_eq!(Route::recognize("/week"), Some(Route::Week));
    }
}
