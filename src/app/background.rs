//! Background task handling for casefile
//!
//! Channel sends use `let _ =`: the receiver only goes away when the app is
//! shutting down, and then nobody is waiting for the answer.

use crate::app::messages::BackgroundMessage;
use crate::app::RuntimeContext;
use crate::assistant::DetectiveAi;
use crate::ui::{App, PendingQuestion, ToastKind};
use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::mpsc;

pub fn drain_messages(app: &mut App, rx: &mpsc::Receiver<BackgroundMessage>) {
    while let Ok(msg) = rx.try_recv() {
        apply_message(app, msg);
    }
}

pub fn apply_message(app: &mut App, msg: BackgroundMessage) {
    match msg {
        BackgroundMessage::AssistantReply { case_id, content } => {
            tracing::debug!(case_id = %case_id, "assistant reply received");
            let elsewhere = app.book.active_id() != Some(case_id.as_str());
            app.receive_reply(&case_id, content);
            if elsewhere {
                let title = app
                    .book
                    .get(&case_id)
                    .map(|c| c.title.clone())
                    .unwrap_or(case_id);
                app.show_toast_kind(
                    &format!("Detective Thorne answered on {}", title),
                    ToastKind::Info,
                );
            }
        }
        BackgroundMessage::TaskFailed { case_id, detail } => {
            tracing::error!(case_id = %case_id, "assistant task failed: {}", detail);
            app.receive_failure(&case_id);
            app.show_toast_kind("Assistant task failed", ToastKind::Error);
        }
    }
}

/// Send a question to the detective; the reply comes back on the channel
pub fn spawn_question(ctx: &RuntimeContext, pending: PendingQuestion) {
    let ai: DetectiveAi = ctx.ai.clone();
    let tx = ctx.tx.clone();
    let case_id = pending.case.id.clone();

    spawn_background(ctx.tx.clone(), case_id.clone(), "ask_detective", async move {
        let content = ai.analyze_case(&pending.case, &pending.question).await;
        let _ = tx.send(BackgroundMessage::AssistantReply { case_id, content });
    });
}

/// Spawn a task for a case. A panic inside it still ends the case's turn.
pub fn spawn_background<F>(
    tx: mpsc::Sender<BackgroundMessage>,
    case_id: String,
    task_name: &'static str,
    fut: F,
) where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(panic) = AssertUnwindSafe(fut).catch_unwind().await {
            let detail = if let Some(s) = panic.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic payload".to_string()
            };
            let _ = tx.send(BackgroundMessage::TaskFailed {
                case_id,
                detail: format!("Background task '{}' crashed unexpectedly: {}", task_name, detail),
            });
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::{persona, Role};
    use crate::case::{mock, CaseBook};
    use std::time::Duration;

    fn offline_ai() -> DetectiveAi {
        DetectiveAi::new(None, "test-model", 0.8, "http://127.0.0.1:9/")
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_offline_question_round_trips_through_channel() {
        let mut app = App::new(CaseBook::with_mock_cases(), false, "test-model");
        app.open_selected_case();
        app.chat_input = "Who had the key?".to_string();
        let pending = app.submit_chat().unwrap();
        let case_id = pending.case.id.clone();

        let (tx, rx) = mpsc::channel();
        let ai = offline_ai();
        let ctx = RuntimeContext { tx: &tx, ai: &ai };
        spawn_question(&ctx, pending);

        let msg = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        apply_message(&mut app, msg);

        let transcript = app.transcript_for(&case_id).unwrap();
        assert!(!transcript.is_typing());
        let last = transcript.messages().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert_eq!(last.content, persona::NOT_CONFIGURED);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_panicking_task_reports_failure() {
        let (tx, rx) = mpsc::channel();
        spawn_background(tx, "case-001".to_string(), "boom", async {
            panic!("lost the magnifying glass");
        });

        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            BackgroundMessage::TaskFailed { case_id, detail } => {
                assert_eq!(case_id, "case-001");
                assert!(detail.contains("lost the magnifying glass"));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_failure_ends_typing_with_apology() {
        let mut app = App::new(CaseBook::with_mock_cases(), true, "test-model");
        app.open_selected_case();
        app.chat_input = "Anything?".to_string();
        let pending = app.submit_chat().unwrap();

        apply_message(
            &mut app,
            BackgroundMessage::TaskFailed {
                case_id: pending.case.id.clone(),
                detail: "panic".to_string(),
            },
        );

        let transcript = app.transcript_for(&pending.case.id).unwrap();
        assert!(!transcript.is_typing());
        assert_eq!(
            transcript.messages().last().unwrap().content,
            persona::TASK_FAILED
        );
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_reply_for_other_case_raises_toast() {
        let mut app = App::new(CaseBook::with_mock_cases(), true, "test-model");
        app.open_selected_case();
        app.chat_input = "Anything?".to_string();
        let pending = app.submit_chat().unwrap();
        app.back_to_dashboard();

        apply_message(
            &mut app,
            BackgroundMessage::AssistantReply {
                case_id: pending.case.id.clone(),
                content: "The study key was polished.".to_string(),
            },
        );
        let toast = app.toast.as_ref().unwrap();
        assert!(toast.message.contains("Death at Harrowgate Manor"));
    }

    #[test]
    fn test_reply_toast_kind_ignores_case_title() {
        let mut cases = mock::mock_cases();
        cases[0].title = "No Exit: the failed alibi".to_string();
        let mut app = App::new(CaseBook::new(cases), true, "test-model");
        app.open_selected_case();
        app.chat_input = "Anything?".to_string();
        let pending = app.submit_chat().unwrap();
        app.back_to_dashboard();

        apply_message(
            &mut app,
            BackgroundMessage::AssistantReply {
                case_id: pending.case.id.clone(),
                content: "Nobody leaves a locked carriage.".to_string(),
            },
        );
        let toast = app.toast.as_ref().unwrap();
        assert!(toast.message.contains("No Exit: the failed alibi"));
        assert_eq!(toast.kind, ToastKind::Info);
    }
}
