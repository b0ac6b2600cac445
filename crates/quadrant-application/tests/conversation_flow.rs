mod common;

use std::sync::Arc;

use common::{Behavior, FakeRemote};
use quadrant_application::conversation::{InlineButton, Keyboard};
use quadrant_application::{ChatEvent, Participant, Reply, ResultService, SurveyConversation};
use quadrant_core::locale::{CHOOSE_LANGUAGE, Locale, PRESS_START};
use quadrant_core::record::RemoteStore;
use quadrant_core::survey::{NicknamePolicy, ProfileLimits, SessionRegistry, Stage, SurveyFlow};
use quadrant_infrastructure::MemoryKeyValueStore;

const CHART: &str = "https://example.test/#chart";

struct Harness {
    conversation: SurveyConversation,
    remote: Arc<FakeRemote>,
    results: Arc<ResultService>,
}

fn harness(questions: usize, behavior: Behavior) -> Harness {
    let flow = SurveyFlow::new(questions, ProfileLimits::default(), NicknamePolicy::Truncate);
    let registry = Arc::new(SessionRegistry::init(Arc::new(flow)));
    let remote = Arc::new(FakeRemote::new(behavior));
    let results = Arc::new(ResultService::new(
        RemoteStore::Enabled(remote.clone()),
        Arc::new(MemoryKeyValueStore::new()),
    ));
    Harness {
        conversation: SurveyConversation::new(registry, results.clone()).with_chart_url(CHART),
        remote,
        results,
    }
}

fn alice() -> Participant {
    Participant::new(1, Some("en-US".to_string()))
}

async fn send(h: &Harness, p: &Participant, event: ChatEvent) -> Vec<Reply> {
    h.conversation.handle(p, event).await
}

async fn text(h: &Harness, p: &Participant, t: &str) -> Vec<Reply> {
    send(h, p, ChatEvent::from_text(t)).await
}

fn callback_data(reply: &Reply) -> Vec<String> {
    match &reply.keyboard {
        Keyboard::Inline(rows) => rows
            .iter()
            .flatten()
            .filter_map(|b| match b {
                InlineButton::Callback { data, .. } => Some(data.clone()),
                InlineButton::Link { .. } => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[tokio::test]
async fn full_survey_in_english() {
    let h = harness(2, Behavior::Healthy);
    let p = alice();

    let replies = text(&h, &p, "/start").await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].text, CHOOSE_LANGUAGE);
    assert_eq!(
        replies[0].keyboard,
        Keyboard::Choices(vec![vec!["UA".to_string(), "EN".to_string()]])
    );

    let replies = text(&h, &p, "EN").await;
    assert_eq!(replies.len(), 2);
    assert!(replies[0].text.starts_with("Scale 1–5"));
    assert_eq!(replies[0].keyboard, Keyboard::Remove);
    assert!(replies[1].text.starts_with("Question 1/2\n"));
    assert_eq!(
        callback_data(&replies[1]),
        (1..=5).map(|v| format!("answer:s1:{v}")).collect::<Vec<_>>()
    );

    let replies = send(
        &h,
        &p,
        ChatEvent::from_callback_data("answer:s1:5").unwrap(),
    )
    .await;
    assert!(replies[0].text.starts_with("Question 2/2\n"));

    // A digit typed as text answers the current question.
    let replies = text(&h, &p, "1").await;
    assert_eq!(replies[0].text, "Enter a nickname (or skip for Anonymous)");
    assert_eq!(
        replies[0].keyboard,
        Keyboard::Choices(vec![vec!["Skip ➡️".to_string()]])
    );

    let replies = text(&h, &p, "Skip ➡️").await;
    assert!(replies[0].text.starts_with("Pick an emoji"));

    let replies = text(&h, &p, "hello").await;
    assert_eq!(replies[0].text, "Send exactly one emoji (no text). E.g.: 🦊");
    assert_eq!(h.conversation.registry().stage(p.id).await, Some(Stage::Emoji));

    let replies = text(&h, &p, "🐼").await;
    assert_eq!(replies[0].text, "Your political slogan (up to 100 chars, optional):");

    let replies = text(&h, &p, "Order first").await;
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0].text, "Saved ✅");

    let summary = &replies[1].text;
    assert!(summary.contains("Nick: Anonymous"));
    assert!(summary.contains("Emoji: 🐼"));
    assert!(summary.contains("Economy (X): 0.0"));
    assert!(summary.contains("Social (Y): 50.0"));
    assert!(summary.contains("Slogan: Order first"));
    assert_eq!(
        replies[1].keyboard,
        Keyboard::Inline(vec![vec![InlineButton::Link {
            label: "Open chart".to_string(),
            url: CHART.to_string(),
        }]])
    );

    // Session is gone; the record reached the remote store.
    assert!(h.conversation.registry().is_empty().await);
    let stored = h.remote.stored();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].nickname, "Anonymous");
    assert_eq!(stored[0].slogan.as_deref(), Some("Order first"));
}

#[tokio::test]
async fn events_without_session_ask_to_start() {
    let h = harness(2, Behavior::Healthy);
    let p = alice();

    for event in [
        ChatEvent::Text("hi".to_string()),
        ChatEvent::from_text("EN"),
        ChatEvent::from_callback_data("answer:s1:3").unwrap(),
    ] {
        let replies = send(&h, &p, event).await;
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].text, PRESS_START);
    }
}

#[tokio::test]
async fn repeated_button_press_is_silent() {
    let h = harness(3, Behavior::Healthy);
    let p = alice();
    text(&h, &p, "/start").await;
    text(&h, &p, "UA").await;

    let first = send(&h, &p, ChatEvent::from_callback_data("answer:s1:2").unwrap()).await;
    assert!(first[0].text.starts_with("Питання 2/3\n"));

    let again = send(&h, &p, ChatEvent::from_callback_data("answer:s1:4").unwrap()).await;
    assert!(again.is_empty());

    let session = h.conversation.registry().get(p.id).await.unwrap();
    assert_eq!(session.step(), 1);
    assert_eq!(session.answers().get("s1").map(|v| v.get()), Some(2));
}

#[tokio::test]
async fn free_text_during_questions_points_to_buttons() {
    let h = harness(3, Behavior::Healthy);
    let p = alice();
    text(&h, &p, "/start").await;
    text(&h, &p, "EN").await;

    let replies = text(&h, &p, "what?").await;
    assert_eq!(replies[0].text, "Use buttons 1–5 to answer the questions.");

    let replies = text(&h, &p, "9").await;
    assert_eq!(replies[0].text, "The answer must be a number from 1 to 5.");
    assert!(replies[1].text.starts_with("Question 1/3\n"));
}

#[tokio::test]
async fn locale_button_after_start_only_reprompts() {
    let h = harness(1, Behavior::Healthy);
    let p = alice();
    text(&h, &p, "/start").await;
    text(&h, &p, "EN").await;
    let nickname_prompt = text(&h, &p, "3").await;

    let replies = send(&h, &p, ChatEvent::SelectLocale(Locale::Ua)).await;
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].text, nickname_prompt[0].text);
    let session = h.conversation.registry().get(p.id).await.unwrap();
    assert_eq!(session.stage(), Stage::Nickname);
    assert_eq!(session.nickname(), None);

    text(&h, &p, "neo").await;
    text(&h, &p, "🦊").await;
    let replies = send(&h, &p, ChatEvent::SelectLocale(Locale::En)).await;
    assert_eq!(replies.len(), 1);
    let session = h.conversation.registry().get(p.id).await.unwrap();
    assert_eq!(session.stage(), Stage::Slogan);
    assert!(h.remote.stored().is_empty());
}

#[tokio::test]
async fn cancel_clears_session_in_its_locale() {
    let h = harness(3, Behavior::Healthy);
    let p = alice();
    text(&h, &p, "/start").await;
    text(&h, &p, "UA").await;

    let replies = text(&h, &p, "/reset").await;
    assert_eq!(
        replies[0].text,
        "Сесію скинуто. Натисни /start, щоб почати спочатку."
    );
    assert!(h.conversation.registry().is_empty().await);

    // Without a session the client's language decides.
    let replies = text(&h, &p, "/stop").await;
    assert_eq!(replies[0].text, "Session cleared. Tap /start to begin again.");
}

#[tokio::test]
async fn restart_discards_progress() {
    let h = harness(3, Behavior::Healthy);
    let p = alice();
    text(&h, &p, "/start").await;
    text(&h, &p, "EN").await;
    text(&h, &p, "4").await;

    text(&h, &p, "/start").await;
    assert_eq!(
        h.conversation.registry().stage(p.id).await,
        Some(Stage::NotStarted)
    );
    let replies = text(&h, &p, "EN").await;
    assert!(replies[1].text.starts_with("Question 1/3\n"));
}

#[tokio::test]
async fn failing_remote_reports_local_save() {
    let h = harness(1, Behavior::Failing);
    let p = Participant::new(2, Some("uk".to_string()));
    text(&h, &p, "/start").await;
    text(&h, &p, "UA").await;
    text(&h, &p, "5").await;
    text(&h, &p, "Оксана").await;
    text(&h, &p, "🦉").await;

    let replies = text(&h, &p, "Пропустити ➡️").await;
    assert_eq!(
        replies[0].text,
        "Результат збережено локально ✅ (сервер недоступний)"
    );
    assert!(replies[1].text.starts_with("Результат:\nНік: Оксана"));
    assert!(!replies[1].text.contains("Гасло"));

    let outcome = h.results.fetch_all().await;
    assert_eq!(outcome.records.len(), 1);
    assert!(outcome.records[0].id.is_local());
}

#[tokio::test]
async fn participants_do_not_interfere() {
    let h = Arc::new(harness(2, Behavior::Healthy));
    let a = alice();
    let b = Participant::new(99, None);

    text(&h, &a, "/start").await;
    text(&h, &b, "/start").await;
    text(&h, &a, "EN").await;
    text(&h, &b, "UA").await;
    text(&h, &a, "5").await;

    let sa = h.conversation.registry().get(a.id).await.unwrap();
    let sb = h.conversation.registry().get(b.id).await.unwrap();
    assert_eq!(sa.step(), 1);
    assert_eq!(sb.step(), 0);
    assert_eq!(sb.locale(), Locale::Ua);
}
