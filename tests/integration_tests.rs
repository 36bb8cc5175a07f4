use httpmock::prelude::*;
use showcase_site::core::fallback::{fallback_portfolio, fallback_services};
use showcase_site::domain::model::{ContactForm, Notification, NotificationKind};
use showcase_site::domain::ports::Notifier;
use showcase_site::{
    CardOrigin, LoadState, RestContentSource, SitePage, Submission, SubmissionHandler,
    SubmissionMessages,
};
use std::sync::{Arc, Mutex};

const API_KEY: &str = "test-anon-key";

fn source(server: &MockServer) -> RestContentSource {
    RestContentSource::new(&server.base_url(), "rest/v1", API_KEY)
}

#[derive(Clone, Default)]
struct RecordingNotifier {
    seen: Arc<Mutex<Vec<Notification>>>,
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

fn filled_form() -> ContactForm {
    ContactForm {
        name: "Omar".to_string(),
        email: "omar@example.com".to_string(),
        phone: "01011112222".to_string(),
        subject: "متجر".to_string(),
        message: "أريد متجر إلكتروني".to_string(),
        service_type: "web_development".to_string(),
    }
}

#[tokio::test]
async fn test_portfolio_renders_remote_rows_featured_first() {
    let server = MockServer::start();
    let rows = serde_json::json!([
        {
            "id": "newer-plain",
            "category": "marketing",
            "title_ar": "حملة حديثة",
            "completion_date": "2024-09-01",
            "is_featured": false,
            "is_published": true,
            "created_at": "2024-09-02T08:00:00+00:00"
        },
        {
            "id": "older-featured",
            "category": "graphic_design",
            "title_ar": "هوية بصرية",
            "completion_date": "2022-02-01",
            "is_featured": true,
            "is_published": true,
            "created_at": "2022-02-02T08:00:00+00:00"
        }
    ]);

    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/portfolio_items")
            .query_param("select", "*")
            .query_param("is_published", "eq.true")
            .query_param("order", "is_featured.desc,created_at.desc")
            .header("apikey", API_KEY)
            .header("Authorization", format!("Bearer {}", API_KEY));
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(rows);
    });

    let page = SitePage::new(source(&server));
    assert!(page.portfolio().is_loading().await);

    page.mount_portfolio().await;

    api_mock.assert();
    let cards = page.portfolio().cards().await.unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].key, "older-featured");
    assert_eq!(cards[0].category, "تصميم جرافيكي");
    assert_eq!(cards[0].meta.as_deref(), Some("مكتمل 2022"));
    assert_eq!(cards[1].key, "newer-plain");
    assert!(cards.iter().all(|c| c.origin == CardOrigin::Remote));
}

#[tokio::test]
async fn test_empty_backend_falls_back_to_bundled_lists() {
    let server = MockServer::start();
    let services_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/rest/v1/services")
            .query_param("is_active", "eq.true");
        then.status(200).json_body(serde_json::json!([]));
    });
    let portfolio_mock = server.mock(|when, then| {
        when.method(GET).path("/rest/v1/portfolio_items");
        then.status(200).json_body(serde_json::json!([]));
    });

    let page = SitePage::new(source(&server));
    page.mount_all().await;

    services_mock.assert();
    portfolio_mock.assert();

    let services = page.services().cards().await.unwrap();
    let expected: Vec<_> = fallback_services().iter().map(|s| s.title).collect();
    let titles: Vec<_> = services.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, expected);

    let portfolio = page.portfolio().cards().await.unwrap();
    assert_eq!(portfolio.len(), fallback_portfolio().len());
    assert!(portfolio.iter().all(|c| c.origin == CardOrigin::Fallback));
}

#[tokio::test]
async fn test_backend_error_is_hidden_behind_fallback() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/rest/v1/services");
        then.status(500).body("internal error");
    });

    let page = SitePage::new(source(&server));
    page.mount_services().await;

    api_mock.assert();
    match page.services().snapshot().await {
        LoadState::Ready(resolved) => {
            assert!(resolved.is_fallback());
            assert_eq!(resolved.len(), 6);
        }
        LoadState::Loading => panic!("section should have resolved"),
    }
}

#[tokio::test]
async fn test_unreachable_backend_is_hidden_behind_fallback() {
    // Nothing listens on port 9 (discard) in the test environment.
    let page = SitePage::new(RestContentSource::new("http://127.0.0.1:9", "rest/v1", API_KEY));
    page.mount_portfolio().await;

    let cards = page.portfolio().cards().await.unwrap();
    assert_eq!(cards.len(), 3);
}

#[tokio::test]
async fn test_remount_with_unchanged_backend_is_render_equivalent() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/rest/v1/services");
        then.status(200).json_body(serde_json::json!([
            {"id": "s2", "category": "marketing", "name_ar": "إعلانات", "price_from": 350, "is_active": true},
            {"id": "s1", "category": "graphic_design", "name_ar": "تصميم", "price_from": 150, "price_to": 500, "is_active": true}
        ]));
    });

    let page = SitePage::new(source(&server));
    page.mount_services().await;
    let first = page.services().cards().await.unwrap();
    page.mount_services().await;
    let second = page.services().cards().await.unwrap();

    api_mock.assert_hits(2);
    assert_eq!(first, second);
    assert_eq!(first[0].key, "s1");
    assert_eq!(first[0].price.as_deref(), Some("150 - 500 جنيه"));
}

#[tokio::test]
async fn test_contact_submission_inserts_one_row() {
    let server = MockServer::start();
    let insert_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/rest/v1/contact_messages")
            .header("apikey", API_KEY)
            .header("Prefer", "return=minimal")
            .json_body(serde_json::json!({
                "name": "Omar",
                "email": "omar@example.com",
                "phone": "01011112222",
                "subject": "متجر",
                "message": "أريد متجر إلكتروني",
                "service_type": "web_development"
            }));
        then.status(201);
    });

    let notifier = RecordingNotifier::default();
    let handler = SubmissionHandler::new(
        source(&server),
        notifier.clone(),
        SubmissionMessages::with_whatsapp("201022679250"),
    );
    let mut form = filled_form();

    let outcome = handler.submit(&mut form).await.unwrap();

    insert_mock.assert();
    assert_eq!(outcome, Submission::Sent);
    assert_eq!(form, ContactForm::default());
    let seen = notifier.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].kind, NotificationKind::Success);
}

#[tokio::test]
async fn test_contact_rejection_preserves_form() {
    let server = MockServer::start();
    let insert_mock = server.mock(|when, then| {
        when.method(POST).path("/rest/v1/contact_messages");
        then.status(401)
            .json_body(serde_json::json!({"message": "Invalid API key"}));
    });

    let notifier = RecordingNotifier::default();
    let handler = SubmissionHandler::new(
        source(&server),
        notifier.clone(),
        SubmissionMessages::with_whatsapp("201022679250"),
    );
    let mut form = filled_form();

    let outcome = handler.submit(&mut form).await.unwrap();

    insert_mock.assert_hits(1);
    assert_eq!(outcome, Submission::Failed);
    assert_eq!(form, filled_form());
    assert!(handler.is_enabled());
    let seen = notifier.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].kind, NotificationKind::Failure);
    assert!(seen[0].message.contains("https://wa.me/201022679250"));
}

#[tokio::test]
async fn test_incomplete_form_never_reaches_backend() {
    let server = MockServer::start();
    let insert_mock = server.mock(|when, then| {
        when.method(POST).path("/rest/v1/contact_messages");
        then.status(201);
    });

    let handler = SubmissionHandler::new(
        source(&server),
        RecordingNotifier::default(),
        SubmissionMessages::with_whatsapp("201022679250"),
    );
    let mut form = filled_form();
    form.message = String::new();

    assert!(handler.submit(&mut form).await.is_err());
    insert_mock.assert_hits(0);
}
