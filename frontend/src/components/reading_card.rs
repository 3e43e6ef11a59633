use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReadingCardProps {
    pub reference: AttrValue,
    pub passage_url: AttrValue,
    pub read_label: AttrValue,
    pub share_label: AttrValue,
    pub marked_at: Option<String>,
    pub on_toggle_read: Callback<MouseEvent>,
    pub on_share: Callback<MouseEvent>,
}

/// Today's reference with the open, mark-read and share actions
#[function_component(ReadingCard)]
pub fn reading_card(props: &ReadingCardProps) -> Html {
    html! {
        <section class="card reading-card">
            <p class="eyebrow">{"Today\u{2019}s reading"}</p>
            <h2 class="reference">{props.reference.clone()}</h2>
            <p class="muted lead">{"Today is enough."}</p>
            <p class="muted small">{"One verse, one breath. Rest, not rush."}</p>

            <div class="actions">
                <a
                    class="primary-button"
                    href={props.passage_url.clone()}
                    target="_blank"
                    rel="noreferrer"
                >
                    {"Open passage"}
                </a>
                <button type="button" class="outline-button" onclick={props.on_toggle_read.clone()}>
                    {props.read_label.clone()}
                </button>
                <button type="button" class="quiet-button" onclick={props.on_share.clone()}>
                    {props.share_label.clone()}
                </button>
            </div>
            <p class="muted small">{"Open the passage, read at your pace, then mark it if you want."}</p>
            {if let Some(marked_at) = &props.marked_at {
                html! { <p class="muted small">{marked_at.clone()}</p> }
            } else {
                html! {}
            }}
        </section>
    }
}
