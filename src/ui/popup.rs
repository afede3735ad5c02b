/// Popup UI for the video question extension

use yew::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use patternfly_yew::prelude::*;
use crate::answer::AnswerClient;
use crate::bridge::{ChromeTabSource, FetchTransport, copy_to_clipboard, sleep};
use crate::config::Config;
use crate::error::AskError;
use crate::interaction::{ask_about_active_tab, Phase, PopupAction, PopupModel};
use crate::ui::components::{AnswerPanel, CopyButton};

#[function_component(App)]
pub fn app() -> Html {
    let model = use_reducer(PopupModel::new);
    // Guards against a second click landing before the re-render disables Ask
    let in_flight = use_mut_ref(|| false);

    // Question input handler
    let on_input = {
        let model = model.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                model.dispatch(PopupAction::Edit(input.value()));
            }
        })
    };

    // Ask handler
    let on_ask = {
        let model = model.clone();
        let in_flight = in_flight.clone();

        Callback::from(move |_: ()| {
            if *in_flight.borrow() {
                log::debug!("Ask ignored, a request is already pending");
                return;
            }
            let Some(question) = model.pending_question() else {
                return;
            };

            *in_flight.borrow_mut() = true;
            model.dispatch(PopupAction::Begin);

            let model = model.clone();
            let in_flight = in_flight.clone();
            spawn_local(async move {
                let result = run_ask(&question).await;
                if let Err(e) = &result {
                    log::error!("Ask failed: {}", e);
                }

                model.dispatch(PopupAction::Finish(result));
                *in_flight.borrow_mut() = false;
            });
        })
    };

    let on_ask_click = on_ask.reform(|_: MouseEvent| ());

    // Enter in the question field asks too
    let on_keydown = {
        let on_ask = on_ask.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                e.prevent_default();
                on_ask.emit(());
            }
        })
    };

    let on_clear = {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| {
            model.dispatch(PopupAction::Clear);
        })
    };

    // Copy handler
    let on_copy = {
        let model = model.clone();
        Callback::from(move |_: MouseEvent| {
            let text = model.display.clone();
            let model = model.clone();

            spawn_local(async move {
                let feedback = match copy_to_clipboard(&text).await {
                    Ok(_) => PopupAction::CopyConfirmed,
                    Err(e) => {
                        log::error!("{}", e);
                        PopupAction::CopyFailed
                    }
                };

                model.dispatch(feedback);
                sleep(Config::default().copy_confirm_ms).await;
                model.dispatch(PopupAction::CopyReset);
            });
        })
    };

    let is_busy = model.is_busy();

    html! {
        <div class="padding-20">
            <h1 class="popup-title">{"Ask This Video"}</h1>

            <div class="flex-column-gap">
                <input
                    type="text"
                    placeholder="Ask a question about this video..."
                    value={model.question.clone()}
                    oninput={on_input}
                    onkeydown={on_keydown}
                    disabled={is_busy}
                    class="question-input"
                />
                <div class="button-row">
                    <Button onclick={on_ask_click} disabled={is_busy} variant={ButtonVariant::Primary}>
                        {"Ask"}
                    </Button>
                    <Button onclick={on_clear} disabled={is_busy} variant={ButtonVariant::Secondary}>
                        {"Clear"}
                    </Button>
                </div>
            </div>

            // Status display
            if is_busy {
                <div class="loading-text-center">
                    <Spinner />
                    <p class="loading-text">{"Thinking..."}</p>
                </div>
            }

            <AnswerPanel text={model.display.clone()} failed={model.phase == Phase::Failed} />

            if model.copy_visible() {
                <CopyButton label={model.copy_label().to_string()} onclick={on_copy} />
            }

            <p class="footer-popup">
                {concat!("Video Ask v", env!("CARGO_PKG_VERSION"))}
            </p>
        </div>
    }
}

// Helper functions

async fn run_ask(question: &str) -> Result<String, AskError> {
    let client = AnswerClient::new(FetchTransport, &Config::default())?;
    ask_about_active_tab(&ChromeTabSource, &client, question).await
}
