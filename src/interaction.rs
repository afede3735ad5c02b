/// Popup state machine and the ask flow it drives
use crate::answer::{AnswerClient, Transport};
use crate::config::{ANSWER_PLACEHOLDER, COPIED_LABEL, COPY_FAILED_LABEL, COPY_LABEL};
use crate::error::AskError;
use crate::video::{TabSource, inspect_active_tab};
use std::rc::Rc;
use yew::functional::Reducible;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Answered,
    Failed,
}

/// Transient feedback on the copy button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    Ready,
    Copied,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupAction {
    Edit(String),
    Begin,
    Finish(Result<String, AskError>),
    Clear,
    CopyConfirmed,
    CopyFailed,
    CopyReset,
}

/// Everything the popup renders.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupModel {
    pub question: String,
    pub display: String,
    pub phase: Phase,
    pub copy_status: CopyStatus,
}

impl PopupModel {
    pub fn new() -> Self {
        PopupModel {
            question: String::new(),
            display: ANSWER_PLACEHOLDER.to_string(),
            phase: Phase::Idle,
            copy_status: CopyStatus::Ready,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Copy is offered only for a real answer.
    pub fn copy_visible(&self) -> bool {
        self.phase == Phase::Answered
    }

    pub fn copy_label(&self) -> &'static str {
        match self.copy_status {
            CopyStatus::Ready => COPY_LABEL,
            CopyStatus::Copied => COPIED_LABEL,
            CopyStatus::Failed => COPY_FAILED_LABEL,
        }
    }

    /// Trimmed question if an ask may start now.
    ///
    /// `None` while a request is pending or when the question is blank.
    pub fn pending_question(&self) -> Option<String> {
        if self.is_busy() {
            return None;
        }

        let question = self.question.trim();
        if question.is_empty() {
            None
        } else {
            Some(question.to_string())
        }
    }

    pub fn apply(&mut self, action: PopupAction) {
        match action {
            PopupAction::Edit(text) => {
                if !self.is_busy() {
                    self.question = text;
                }
            }
            PopupAction::Begin => {
                if self.pending_question().is_some() {
                    self.display.clear();
                    self.phase = Phase::Loading;
                    self.copy_status = CopyStatus::Ready;
                }
            }
            PopupAction::Finish(result) => {
                // A finish without a pending request is stale
                if !self.is_busy() {
                    return;
                }
                match result {
                    Ok(answer) => {
                        self.display = answer;
                        self.phase = Phase::Answered;
                    }
                    Err(e) => {
                        self.display = e.user_message();
                        self.phase = Phase::Failed;
                    }
                }
            }
            PopupAction::Clear => {
                if !self.is_busy() {
                    *self = PopupModel::new();
                }
            }
            PopupAction::CopyConfirmed => {
                if self.copy_visible() {
                    self.copy_status = CopyStatus::Copied;
                }
            }
            PopupAction::CopyFailed => {
                if self.copy_visible() {
                    self.copy_status = CopyStatus::Failed;
                }
            }
            PopupAction::CopyReset => {
                self.copy_status = CopyStatus::Ready;
            }
        }
    }
}

impl Default for PopupModel {
    fn default() -> Self {
        Self::new()
    }
}

impl Reducible for PopupModel {
    type Action = PopupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

/// Resolve the active tab's video and ask the question about it.
///
/// The transport is never touched when the tab is not a video page.
pub async fn ask_about_active_tab<S: TabSource, T: Transport>(
    tabs: &S,
    client: &AnswerClient<T>,
    question: &str,
) -> Result<String, AskError> {
    let video_id = inspect_active_tab(tabs).await?;
    client.ask(&video_id, question).await
}
