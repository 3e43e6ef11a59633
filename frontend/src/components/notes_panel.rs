use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlTextAreaElement;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct NotesPanelProps {
    pub note: AttrValue,
    pub long_label: AttrValue,
    pub on_change: Callback<String>,
}

#[function_component(NotesPanel)]
pub fn notes_panel(props: &NotesPanelProps) -> Html {
    // Every keystroke is saved, so listen to `input` rather than `change`
    let on_input = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            on_change.emit(textarea.value());
        })
    };

    html! {
        <div class="card notes-card">
            <div class="row">
                <h3 class="card-title">{"Notes"}</h3>
                <Link<Route> to={Route::Week} classes={classes!("accent-link")}>{"Weekly view"}</Link<Route>>
            </div>
            <label for="notes" class="field-label">
                {"What stood out today?"}
                <span class="optional">{"Optional"}</span>
            </label>
            <textarea
                id="notes"
                rows="8"
                value={props.note.clone()}
                oninput={on_input}
                placeholder="A word, a comfort, a question..."
            />
            <p class="muted tiny">{format!("Saved locally for {}.", props.long_label)}</p>
        </div>
    }
}
