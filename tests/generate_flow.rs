// End-to-end generation flow against a local mock backend

use braion::client::NameGenClient;
use braion::session::controller::{ChatSession, QuickAction, MIN_LOADING_MS, SUCCESS_LABEL};
use braion::session::preferences::{Preferences, Purpose, Tone};
use braion::session::Author;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct RecordedRequest {
	path: String,
	content_type: String,
	body: String,
}

struct MockNameServer {
	base_url: String,
	requests: Arc<Mutex<Vec<RecordedRequest>>>,
	handle: Option<thread::JoinHandle<()>>,
}

impl MockNameServer {
	/// Serve exactly `expected_requests` connections, answering each with
	/// the status and body the responder returns for the request path.
	fn start<F>(expected_requests: usize, responder: F) -> Self
	where
		F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
	{
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock server");
		let addr = listener.local_addr().expect("local addr");
		let requests = Arc::new(Mutex::new(Vec::new()));
		let requests_for_thread = Arc::clone(&requests);
		let responder = Arc::new(responder);

		let handle = thread::spawn(move || {
			for _ in 0..expected_requests {
				let (mut stream, _) = listener.accept().expect("accept");
				let mut reader = BufReader::new(stream.try_clone().expect("clone stream"));

				let mut request_line = String::new();
				reader
					.read_line(&mut request_line)
					.expect("read request line");
				let mut path = "/".to_string();
				if let Some(raw_path) = request_line.split_whitespace().nth(1) {
					path = raw_path.to_string();
				}

				let mut content_type = String::new();
				let mut content_length = 0usize;
				loop {
					let mut line = String::new();
					reader.read_line(&mut line).expect("read header");
					if line == "\r\n" || line.is_empty() {
						break;
					}
					let lower = line.to_ascii_lowercase();
					if lower.starts_with("content-type:") {
						content_type = line
							.split_once(':')
							.map(|(_, v)| v.trim().to_string())
							.unwrap_or_default();
					}
					if lower.starts_with("content-length:") {
						content_length = line
							.split_once(':')
							.map(|(_, v)| v.trim().parse::<usize>().unwrap_or(0))
							.unwrap_or(0);
					}
				}

				let mut body = vec![0_u8; content_length];
				if content_length > 0 {
					reader.read_exact(&mut body).expect("read body");
				}
				let body = String::from_utf8_lossy(&body).to_string();

				requests_for_thread
					.lock()
					.expect("lock requests")
					.push(RecordedRequest {
						path: path.clone(),
						content_type,
						body,
					});

				let (status, response_body) = responder(&path);
				let status_text = match status {
					200 => "OK",
					500 => "Internal Server Error",
					_ => "OK",
				};
				let response = format!(
					"HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
					status,
					status_text,
					response_body.len(),
					response_body
				);
				stream
					.write_all(response.as_bytes())
					.expect("write response");
			}
		});

		Self {
			base_url: format!("http://{}", addr),
			requests,
			handle: Some(handle),
		}
	}

	fn finish(mut self) -> Vec<RecordedRequest> {
		if let Some(handle) = self.handle.take() {
			handle.join().expect("join mock server");
		}
		self.requests.lock().expect("lock requests").clone()
	}
}

fn session_against(server: &MockNameServer, preferences: Preferences) -> ChatSession {
	ChatSession::new(NameGenClient::new(&server.base_url), preferences)
}

#[tokio::test]
async fn submit_sends_composed_payload_and_maps_response() {
	let server = MockNameServer::start(1, |_| {
		(
			200,
			r#"{
				"concepts": ["trading", "automation"],
				"meaningful_names": ["TradePilot", "BotDesk"],
				"creative_names": ["Nimbus"],
				"context": {"purpose": "startup"}
			}"#
			.to_string(),
		)
	});

	let mut preferences = Preferences::default();
	preferences.purpose = Purpose::Startup;
	preferences.tone = Tone::Professional;
	preferences.toggle_domain("AI");
	preferences.toggle_domain("Fintech");

	let mut session = session_against(&server, preferences);
	session.submit_user_message("we build trading bots").await;

	// Greeting, the user echo, then exactly one reply
	let transcript = session.transcript();
	assert_eq!(transcript.len(), 3);
	assert_eq!(transcript[1].author, Author::User);
	assert_eq!(transcript[1].text, "we build trading bots");

	let reply = &transcript[2];
	assert_eq!(reply.author, Author::Bot);
	assert!(!reply.is_error);
	assert_eq!(reply.text, SUCCESS_LABEL);
	assert_eq!(
		reply.meaningful_names,
		vec!["TradePilot".to_string(), "BotDesk".to_string()]
	);
	assert_eq!(reply.creative_names, vec!["Nimbus".to_string()]);
	assert_eq!(
		reply.concepts,
		vec!["trading".to_string(), "automation".to_string()]
	);
	assert!(!session.is_busy());

	let requests = server.finish();
	assert_eq!(requests.len(), 1);
	assert_eq!(requests[0].path, "/generate");
	assert_eq!(requests[0].content_type, "application/json");

	let payload: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
	assert_eq!(payload["description"], "startup team for AI and Fintech");
	assert_eq!(payload["project_description"], "we build trading bots");
	assert_eq!(payload["custom_prompt"], "we build trading bots");
	assert_eq!(payload["tone"], "professional");
	assert_eq!(payload["domain"], "AI and Fintech");
	assert_eq!(payload["purpose"], "startup");
}

#[tokio::test]
async fn quick_action_sends_instruction_without_user_entry() {
	let server = MockNameServer::start(1, |_| {
		(200, r#"{"meaningful_names": ["Suits & Code"]}"#.to_string())
	});

	let mut preferences = Preferences::default();
	preferences.toggle_domain("AI");
	preferences.toggle_domain("IoT");

	let mut session = session_against(&server, preferences);
	session.quick_action(QuickAction::Professional).await;

	// No user echo for quick actions: greeting plus the reply only
	let transcript = session.transcript();
	assert_eq!(transcript.len(), 2);
	assert_eq!(transcript[1].author, Author::Bot);
	assert!(!transcript[1].is_error);

	// The action switched the session tone before composing the payload
	assert_eq!(session.preferences().tone, Tone::Professional);

	let requests = server.finish();
	let payload: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
	assert_eq!(payload["tone"], "professional");
	assert_eq!(payload["domain"], "AI and IoT");
	assert_eq!(payload["description"], "hackathon team for AI and IoT");
	assert_eq!(
		payload["project_description"],
		"Generate professional and formal names"
	);
	assert_eq!(
		payload["custom_prompt"],
		"Generate professional and formal names"
	);
}

#[tokio::test]
async fn fast_reply_waits_for_minimum_display_time() {
	let server = MockNameServer::start(1, |_| (200, "{}".to_string()));

	let mut session = session_against(&server, Preferences::default());

	let started = Instant::now();
	session.submit_user_message("anything").await;
	let elapsed = started.elapsed();

	assert!(
		elapsed >= Duration::from_millis(MIN_LOADING_MS),
		"reply landed after only {:?}",
		elapsed
	);

	// An empty response is still a success: label entry with no names
	let reply = session.transcript().last().unwrap();
	assert!(!reply.is_error);
	assert_eq!(reply.text, SUCCESS_LABEL);
	assert!(!reply.has_names());

	server.finish();
}

#[tokio::test]
async fn http_error_becomes_connectivity_entry() {
	let server = MockNameServer::start(1, |_| (500, r#"{"detail": "model crashed"}"#.to_string()));

	let mut session = session_against(&server, Preferences::default());
	let endpoint = session.endpoint().to_string();
	session.submit_user_message("please work").await;

	let transcript = session.transcript();
	assert_eq!(transcript.len(), 3);

	let reply = &transcript[2];
	assert!(reply.is_error);
	assert!(reply.text.contains("Could not connect"));
	assert!(reply.text.contains(&endpoint));

	// A failed attempt releases the session for the next one
	assert!(!session.is_busy());

	server.finish();
}

#[tokio::test]
async fn missing_response_lists_default_to_empty() {
	let server = MockNameServer::start(1, |_| (200, r#"{"concepts": ["green"]}"#.to_string()));

	let mut session = session_against(&server, Preferences::default());
	session.submit_user_message("eco startup").await;

	let reply = session.transcript().last().unwrap();
	assert!(!reply.is_error);
	assert!(!reply.has_names());
	assert!(reply.meaningful_names.is_empty());
	assert!(reply.creative_names.is_empty());
	assert_eq!(reply.concepts, vec!["green".to_string()]);

	server.finish();
}

#[tokio::test]
async fn bare_generate_falls_back_to_draft() {
	let server = MockNameServer::start(1, |_| (200, "{}".to_string()));

	let mut session = session_against(&server, Preferences::default());
	session.set_draft("half written pitch");
	session.generate_names(None).await;

	// Direct generation appends no user entry
	let transcript = session.transcript();
	assert_eq!(transcript.len(), 2);
	assert_eq!(transcript[1].author, Author::Bot);

	let requests = server.finish();
	let payload: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
	assert_eq!(payload["project_description"], "half written pitch");
	assert_eq!(payload["custom_prompt"], "half written pitch");
}

#[tokio::test]
async fn bare_generate_synthesizes_message_from_preferences() {
	let server = MockNameServer::start(1, |_| (200, "{}".to_string()));

	let mut preferences = Preferences::default();
	preferences.toggle_domain("Gaming");
	preferences.toggle_domain("EdTech");

	let mut session = session_against(&server, preferences);
	session.generate_names(None).await;

	let requests = server.finish();
	let payload: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
	assert_eq!(
		payload["project_description"],
		"Generate names for a hackathon team in Gaming, EdTech domain with a cool tone"
	);
	assert_eq!(payload["description"], "hackathon team for Gaming and EdTech");
	assert_eq!(payload["domain"], "Gaming and EdTech");
}

#[tokio::test]
async fn stored_free_text_beats_typed_message_in_payload() {
	let server = MockNameServer::start(1, |_| (200, "{}".to_string()));

	let mut preferences = Preferences::default();
	preferences.project_description = Some("a plant watering robot".to_string());
	preferences.custom_prompt = Some("short names only".to_string());

	let mut session = session_against(&server, preferences);
	session.submit_user_message("ignore this for the payload fields").await;

	let requests = server.finish();
	let payload: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
	assert_eq!(payload["project_description"], "a plant watering robot");
	assert_eq!(payload["custom_prompt"], "short names only");
}

#[tokio::test]
async fn health_endpoint_round_trip() {
	let server = MockNameServer::start(1, |path| {
		assert_eq!(path, "/health");
		(
			200,
			r#"{"status": "healthy", "service": "braion-api"}"#.to_string(),
		)
	});

	let client = NameGenClient::new(&server.base_url);
	let status = client.health().await.unwrap();
	assert_eq!(status.status, "healthy");
	assert_eq!(status.service.as_deref(), Some("braion-api"));

	server.finish();
}
