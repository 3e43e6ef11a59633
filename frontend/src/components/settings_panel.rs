use yew::prelude::*;
use web_sys::HtmlSelectElement;
use shared::Translation;

#[derive(Properties, PartialEq)]
pub struct SettingsPanelProps {
    pub translation: Translation,
    pub on_select: Callback<Translation>,
}

#[function_component(SettingsPanel)]
pub fn settings_panel(props: &SettingsPanelProps) -> Html {
    let on_change = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            match select.value().parse::<Translation>() {
                Ok(translation) => on_select.emit(translation),
                Err(err) => log::warn!("Ignoring translation choice: {}", err),
            }
        })
    };

    html! {
        <div class="card settings-card">
            <h3 class="card-title">{"Settings"}</h3>
            <label for="translation" class="field-label">{"Bible translation"}</label>
            <select id="translation" onchange={on_change}>
                {for Translation::ALL.iter().map(|option| html! {
                    <option
                        key={option.code()}
                        value={option.code()}
                        selected={*option == props.translation}
                    >
                        {option.label()}
                    </option>
                })}
            </select>
            <p class="muted tiny">{"Used when opening passages on BibleGateway."}</p>
        </div>
    }
}
