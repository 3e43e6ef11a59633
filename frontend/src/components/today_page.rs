use chrono::Local;
use yew::prelude::*;
use shared::AppConfig;
use super::header::Header;
use super::notes_panel::NotesPanel;
use super::reading_card::ReadingCard;
use super::settings_panel::SettingsPanel;
use crate::hooks::use_day::use_day;
use crate::hooks::use_preferences::use_preferences;
use crate::hooks::use_share::use_share;
use crate::services::date_utils;

#[function_component(TodayPage)]
pub fn today_page() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    // Pinned for the page lifetime so a visit across midnight keeps its day
    let today = use_memo((), |_| date_utils::today());
    let day = use_day(*today);
    let preferences = use_preferences();
    let share = use_share(day.state.share_payload());

    let long_label = day.state.long_label();
    let passage_url = config.passage_url(day.state.reference, preferences.state.translation);

    html! {
        <div class="page">
            <Header
                long_label={long_label.clone()}
                theme={preferences.state.theme}
                on_toggle_theme={preferences.actions.toggle_theme.clone()}
            />

            <main class="today-grid">
                <ReadingCard
                    reference={day.state.reference}
                    passage_url={passage_url}
                    read_label={day.state.read_button_label()}
                    share_label={share.status.button_label()}
                    marked_at={day.state.marked_at_label(&Local)}
                    on_toggle_read={day.actions.toggle_read.clone()}
                    on_share={share.share.clone()}
                />

                <section class="side-column">
                    <NotesPanel
                        note={day.state.note().to_string()}
                        long_label={long_label}
                        on_change={day.actions.update_note.clone()}
                    />
                    <SettingsPanel
                        translation={preferences.state.translation}
                        on_select={preferences.actions.select_translation.clone()}
                    />
                </section>
            </main>

            <footer class="page-footer muted">
                <p>{"No streaks. No backlog. Just grace for today and the next gentle step forward."}</p>
            </footer>
        </div>
    }
}
