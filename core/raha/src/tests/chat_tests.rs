use crate::adapter::StubChatGateway;
use crate::domain::{Record, RecordStore, Role, Transcript};
use crate::usecase::{ChatState, ChatUseCase, SubmitOutcome, CONNECTIVITY_ERROR, FALLBACK_REPLY};
use chrono::{DateTime, TimeZone, Utc};
use common::adapter::NoopLog;
use common::error::Error;
use serde_json::json;
use std::sync::Arc;

fn now() -> DateTime<Utc> {
    Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
}

fn build(gateway: StubChatGateway) -> ChatUseCase {
    ChatUseCase::new(Box::new(gateway), Arc::new(NoopLog))
}

fn context(n: usize) -> Vec<Record> {
    (0..n)
        .map(|i| Record {
            name: format!("استراحة {}", i),
            ..Default::default()
        })
        .collect()
}

#[test]
fn test_ask_appends_exactly_one_user_and_one_bot_turn() {
    let gateway = StubChatGateway::new();
    gateway.push_reply(Ok(json!({"response": "هذه استراحة النجد"})));
    let mut chat = build(gateway);
    let mut transcript = Transcript::new();

    let outcome = chat.ask(&mut transcript, "ما هي استراحة النجد؟", &context(3), now());
    assert_eq!(outcome, SubmitOutcome::Accepted);
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.messages()[0].role, Role::User);
    assert_eq!(transcript.messages()[0].content, "ما هي استراحة النجد؟");
    assert_eq!(transcript.messages()[1].role, Role::Bot);
    assert_eq!(transcript.messages()[1].content, "هذه استراحة النجد");
    assert_eq!(chat.state(), ChatState::Idle);
}

#[test]
fn test_send_failure_still_appends_one_bot_turn() {
    let gateway = StubChatGateway::new();
    gateway.push_reply(Err(Error::network("timed out".to_string())));
    let mut chat = build(gateway);
    let mut transcript = Transcript::new();

    chat.ask(&mut transcript, "سؤال", &context(1), now());
    assert_eq!(transcript.len(), 2);
    assert_eq!(transcript.last().unwrap().content, CONNECTIVITY_ERROR);
    assert_eq!(chat.state(), ChatState::Idle);
}

#[test]
fn test_reply_fallback_chain() {
    let gateway = StubChatGateway::new();
    gateway.push_reply(Ok(json!({"response": "", "message": "من حقل message"})));
    gateway.push_reply(Ok(json!({"ok": true})));
    let mut chat = build(gateway);
    let mut transcript = Transcript::new();

    chat.ask(&mut transcript, "أولاً", &[], now());
    assert_eq!(transcript.last().unwrap().content, "من حقل message");

    chat.ask(&mut transcript, "ثانياً", &[], now());
    assert_eq!(transcript.last().unwrap().content, FALLBACK_REPLY);
}

#[test]
fn test_empty_input_is_ignored_without_request() {
    let gateway = StubChatGateway::new();
    let mut chat = build(gateway);
    let mut transcript = Transcript::new();

    assert_eq!(
        chat.submit(&mut transcript, "   ", now()),
        SubmitOutcome::IgnoredEmpty
    );
    assert!(transcript.is_empty());
    assert_eq!(chat.state(), ChatState::Idle);
}

#[test]
fn test_busy_guard_rejects_second_submit() {
    let gateway = StubChatGateway::new();
    gateway.push_reply(Ok(json!({"response": "جواب"})));
    let mut chat = build(gateway);
    let mut transcript = Transcript::new();

    assert_eq!(
        chat.submit(&mut transcript, "الأول", now()),
        SubmitOutcome::Accepted
    );
    assert_eq!(chat.state(), ChatState::AwaitingReply);
    // 応答待ちの間は 2 通目を受け付けない（user メッセージも増えない）
    assert_eq!(
        chat.submit(&mut transcript, "الثاني", now()),
        SubmitOutcome::IgnoredBusy
    );
    assert_eq!(transcript.len(), 1);

    chat.resolve(&mut transcript, &[], now());
    assert_eq!(transcript.len(), 2);
    assert_eq!(chat.state(), ChatState::Idle);
}

#[test]
fn test_context_is_a_snapshot_of_the_store() {
    let gateway = Arc::new(StubChatGateway::new());
    gateway.push_reply(Ok(json!({"response": "جواب"})));
    let mut chat = ChatUseCase::new(Box::new(Arc::clone(&gateway)), Arc::new(NoopLog));
    let mut transcript = Transcript::new();

    let mut store = RecordStore::new();
    let g = store.begin_refresh();
    store.apply(g, context(15), now(), 10);
    let snapshot = store.context_slice(10);

    // スナップショット取得後にストアが入れ替わっても送信内容は変わらない
    let g = store.begin_refresh();
    store.apply(g, vec![], now(), 5);

    chat.submit(&mut transcript, "سؤال", now());
    chat.resolve(&mut transcript, &snapshot, now());

    let calls = gateway.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "سؤال");
    assert_eq!(calls[0].1, 10);
}

#[test]
fn test_busy_guard_sends_nothing_to_the_gateway() {
    let gateway = Arc::new(StubChatGateway::new());
    let mut chat = ChatUseCase::new(Box::new(Arc::clone(&gateway)), Arc::new(NoopLog));
    let mut transcript = Transcript::new();

    chat.submit(&mut transcript, "الأول", now());
    chat.submit(&mut transcript, "الثاني", now());
    // resolve 前はゲートウェイ呼び出しゼロ
    assert!(gateway.calls().is_empty());
}
