#![cfg(test)]
use lanwatch_common::{PresenceStatus, Transition};
use lanwatch_core::{Notifier, WebhookNotifier};
use serde_json::json;

use crate::utils::HttpSink;

#[tokio::test]
async fn webhook_receives_transition_as_json() {
    let mut sink = HttpSink::start().await;
    let notifier = WebhookNotifier::new(vec![sink.url("/presence")]).unwrap();

    notifier.notify_transition(Transition::new(
        PresenceStatus::Present,
        PresenceStatus::Absent,
    ));

    let body = sink.next_body().await.expect("webhook was never called");
    assert_eq!(
        body,
        json!({ "from": "present", "to": "absent", "status": "absent" })
    );
}

#[tokio::test]
async fn every_webhook_is_called() {
    let mut first = HttpSink::start().await;
    let mut second = HttpSink::start().await;
    let notifier =
        WebhookNotifier::new(vec![first.url("/a"), second.url("/b")]).unwrap();

    notifier.notify_transition(Transition::new(
        PresenceStatus::Unknown,
        PresenceStatus::Present,
    ));

    assert_eq!(first.next_body().await.unwrap()["to"], "present");
    assert_eq!(second.next_body().await.unwrap()["from"], "unknown");
}
