//! Tests for `WebhookClient`.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{
    HttpClient, HttpError, HttpRequest, HttpResponse, SendError, TOKEN_HEADER, TargetError,
    WebhookClient, WebhookTarget,
};
use crate::build::{Build, BuildContext, Commit, Repo};
use crate::message::{Action, Message, ValidationError, compose};

const ENDPOINT: &str = "https://inbots.zoom.us/incoming/hook/abc";

/// Mock HTTP client that replays a sequence of results and records requests.
#[derive(Debug)]
struct MockClient {
    responses: Mutex<Vec<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
    call_count: AtomicUsize,
}

impl MockClient {
    fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
            call_count: AtomicUsize::new(0),
        }
    }

    fn status(status: http::StatusCode) -> Self {
        Self::new(vec![Ok(HttpResponse::with_status(status))])
    }

    fn calls(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn captured_requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl HttpClient for MockClient {
    async fn request(&self, req: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(req);
        self.responses.lock().unwrap().remove(0)
    }
}

fn client(mock: MockClient) -> WebhookClient<MockClient> {
    let target = WebhookTarget::new(ENDPOINT, "secret").unwrap();
    WebhookClient::from_target(target, mock)
}

fn acme() -> BuildContext {
    BuildContext {
        repo: Repo {
            owner: "acme".to_string(),
            name: "widget".to_string(),
        },
        commit: Commit {
            sha: "abcdef1234567890".to_string(),
            branch: "main".to_string(),
            author: "alice".to_string(),
            ..Commit::default()
        },
        build: Build {
            status: "success".to_string(),
            link: "http://ci/1".to_string(),
            ..Build::default()
        },
    }
}

fn message() -> Message {
    compose(&acme()).unwrap()
}

mod construction {
    use super::*;

    #[test]
    fn new_rejects_empty_token() {
        let result = WebhookClient::new(ENDPOINT, "");
        assert!(matches!(result, Err(TargetError::MissingCredential)));
    }

    #[test]
    fn new_rejects_invalid_endpoint() {
        let result = WebhookClient::new("not a url", "secret");
        assert!(matches!(result, Err(TargetError::InvalidEndpoint { .. })));
    }

    #[test]
    fn holds_fixed_headers() {
        let client = WebhookClient::new(ENDPOINT, "secret").unwrap();
        let headers = client.headers();

        assert_eq!(headers.len(), 2);
        assert_eq!(
            headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(headers.get(TOKEN_HEADER).unwrap(), "secret");
    }

    #[test]
    fn debug_does_not_leak_token() {
        let client = WebhookClient::new(ENDPOINT, "hunter2").unwrap();
        let debug = format!("{client:?}");

        assert!(!debug.contains("hunter2"));
    }
}

mod build_request {
    use super::*;

    #[test]
    fn posts_wire_json_to_endpoint() {
        let client = client(MockClient::new(vec![]));
        let request = client.build_request(&message()).unwrap();

        assert_eq!(request.method, http::Method::POST);
        assert_eq!(request.url.as_str(), ENDPOINT);

        let body: serde_json::Value = serde_json::from_slice(&request.body.unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "title": "<p><label>drone notification</label></p>",
                "summary": "<p><label>*success* [http://ci/1|acme/widget#abcdef12] (main) by alice</label></p>",
                "body": "<p><label>success acme/widget#abcdef12 (main) by alice</label></p>",
                "action": "",
            })
        );
    }

    #[test]
    fn includes_action_markup() {
        let client = client(MockClient::new(vec![]));
        let request = client
            .build_request(&message().with_action("send"))
            .unwrap();

        let body: serde_json::Value = serde_json::from_slice(&request.body.unwrap()).unwrap();
        assert_eq!(body["action"], Action::Send.markup());
    }
}

mod send {
    use super::*;

    #[tokio::test]
    async fn ok_response_is_success() {
        let mock = MockClient::status(http::StatusCode::OK);
        let client = client(mock);

        client.send(&message()).await.unwrap();

        assert_eq!(client.http_client().calls(), 1);
    }

    #[tokio::test]
    async fn sends_fixed_headers() {
        let client = client(MockClient::status(http::StatusCode::OK));

        client.send(&message()).await.unwrap();

        let requests = client.http_client().captured_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].headers.get(TOKEN_HEADER).unwrap(), "secret");
        assert_eq!(
            requests[0].headers.get(http::header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn server_error_is_delivery_error_without_retry() {
        let client = client(MockClient::status(http::StatusCode::INTERNAL_SERVER_ERROR));

        let err = client.send(&message()).await.unwrap_err();

        match &err {
            SendError::Delivery {
                status, endpoint, ..
            } => {
                assert_eq!(*status, http::StatusCode::INTERNAL_SERVER_ERROR);
                assert_eq!(endpoint.as_str(), ENDPOINT);
            }
            other => panic!("Expected delivery error, got {other:?}"),
        }
        assert_eq!(err.status(), Some(http::StatusCode::INTERNAL_SERVER_ERROR));
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains(ENDPOINT));
        assert_eq!(client.http_client().calls(), 1);
    }

    #[tokio::test]
    async fn non_200_success_status_is_delivery_error() {
        let client = client(MockClient::status(http::StatusCode::NO_CONTENT));

        let err = client.send(&message()).await.unwrap_err();

        assert_eq!(err.status(), Some(http::StatusCode::NO_CONTENT));
    }

    #[tokio::test]
    async fn delivery_error_keeps_response_body() {
        let response = HttpResponse::new(
            http::StatusCode::UNAUTHORIZED,
            http::HeaderMap::new(),
            b"Invalid token".to_vec(),
        );
        let client = client(MockClient::new(vec![Ok(response)]));

        let err = client.send(&message()).await.unwrap_err();

        assert!(matches!(
            err,
            SendError::Delivery { body: Some(ref b), .. } if b == "Invalid token"
        ));
    }

    #[tokio::test]
    async fn transport_failure_is_transport_error() {
        let client = client(MockClient::new(vec![Err(HttpError::Timeout)]));

        let err = client.send(&message()).await.unwrap_err();

        assert!(matches!(err, SendError::Transport(HttpError::Timeout)));
        assert_eq!(err.status(), None);
        assert_eq!(client.http_client().calls(), 1);
    }

    #[tokio::test]
    async fn unknown_action_fails_before_any_request() {
        let client = client(MockClient::new(vec![]));

        let err = client
            .send(&message().with_action("share"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SendError::Validation(ValidationError::UnknownAction(ref a)) if a == "share"
        ));
        assert_eq!(client.http_client().calls(), 0);
    }

    #[tokio::test]
    async fn known_actions_are_sent() {
        for action in ["", "send", "copy"] {
            let client = client(MockClient::status(http::StatusCode::OK));

            client
                .send(&message().with_action(action))
                .await
                .unwrap();

            assert_eq!(client.http_client().calls(), 1, "action {action:?}");
        }
    }
}
