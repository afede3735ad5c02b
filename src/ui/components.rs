/// Reusable UI components

use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AnswerPanelProps {
    pub text: String,
    #[prop_or(false)]
    pub failed: bool,
}

/// Displayed answer, or the failure line styled as an alert
#[function_component(AnswerPanel)]
pub fn answer_panel(props: &AnswerPanelProps) -> Html {
    if props.failed {
        html! {
            <div class="message-top-margin">
                <Alert r#type={AlertType::Danger} title={"Could not get an answer"} inline={true}>
                    {props.text.clone()}
                </Alert>
            </div>
        }
    } else {
        html! {
            <div class="answer-box">
                <p class="answer-text">{&props.text}</p>
            </div>
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CopyButtonProps {
    pub label: String,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(CopyButton)]
pub fn copy_button(props: &CopyButtonProps) -> Html {
    html! {
        <Button onclick={props.onclick.clone()} variant={ButtonVariant::Secondary} block={true}>
            {props.label.clone()}
        </Button>
    }
}
