//! End-to-end `shorten` calls against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives `ShortIoClient`
//! through the real ureq transport. Validates that request building, the
//! wire format and response parsing agree with an actual HTTP server.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener};

use shortio_core::{
    codes, ApiError, ClientConfig, ShortIoClient, ShortenParams, ShortenResult, TimeValue,
    Transport, UreqTransport,
};

fn start_mock_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

/// Answers a single request with `status` and the raw `body` bytes.
fn serve_raw_once(status: &'static str, body: &'static [u8]) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        let mut content_length = 0;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap();
                }
            }
        }
        let mut request_body = vec![0; content_length];
        reader.read_exact(&mut request_body).unwrap();

        let mut stream = reader.into_inner();
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        )
        .unwrap();
        stream.write_all(body).unwrap();
        stream.flush().unwrap();
    });

    addr
}

fn client_for(addr: SocketAddr) -> ShortIoClient {
    ShortIoClient::with_config(ClientConfig::default().with_base_url(&format!("http://{addr}")))
}

#[test]
fn shorten_lifecycle() {
    let addr = start_mock_server();
    let client = client_for(addr);

    // Step 1: create a link with a fixed path and integer ttl.
    let params = ShortenParams {
        path: Some("abc".to_string()),
        title: Some("Example".to_string()),
        tags: Some(vec!["docs".to_string()]),
        ttl: Some(TimeValue::Integer(3600)),
        ..ShortenParams::new("https://example.com")
    };
    let link = match client.shorten("sk_test", &params).unwrap() {
        ShortenResult::Success(link) => link,
        other => panic!("expected success, got {other:?}"),
    };
    assert_eq!(link.short_url.as_deref(), Some("https://x.sh/abc"));
    assert_eq!(link.original_url.as_deref(), Some("https://example.com"));
    assert_eq!(link.tags, Some(vec!["docs".to_string()]));
    assert_eq!(link.duplicate, Some(false));
    // The mock echoes ttl as received: the normalized string.
    assert_eq!(link.extra["ttl"], "3600");

    // Step 2: same path, same URL: returned as a duplicate.
    let again = client.shorten("sk_test", &params).unwrap().into_result().unwrap();
    assert_eq!(again.duplicate, Some(true));
    assert_eq!(again.id_string, link.id_string);

    // Step 3: same path, different URL: 409 with the remote error model.
    let clash = ShortenParams {
        path: Some("abc".to_string()),
        ..ShortenParams::new("https://other.example")
    };
    let err = client.shorten("sk_test", &clash).unwrap().into_result().unwrap_err();
    assert_eq!(err.status_code, 409);
    assert_eq!(err.code, "LINK_EXISTS");
    assert!(!err.success);

    // Step 4: unknown domain: body has no statusCode, the real status fills it in.
    let unknown = ShortenParams {
        domain: Some("nope.example".to_string()),
        ..ShortenParams::new("https://example.com")
    };
    let err = client.shorten("sk_test", &unknown).unwrap().into_result().unwrap_err();
    assert_eq!(err.status_code, 400);
    assert_eq!(err.code, "DOMAIN_NOT_FOUND");
    assert_eq!(err.message, "domain not found");
}

#[test]
fn missing_authorization_maps_to_unknown() {
    let addr = start_mock_server();
    let client = client_for(addr);

    // A blank key is refused before any request is sent.
    let err = client
        .shorten("   ", &ShortenParams::new("https://example.com"))
        .unwrap_err();
    assert!(matches!(err, ApiError::MissingApiKey));

    // Send a request without authorization by hand to see the raw 401.
    let mut request = client
        .build_shorten("sk_test", &ShortenParams::new("https://example.com"))
        .unwrap();
    request.headers.retain(|(k, _)| k != "authorization");
    let response = UreqTransport::default().execute(request).unwrap();
    assert_eq!(response.status, 401);
    match client.parse_shorten(response) {
        ShortenResult::Error(err) => {
            assert_eq!(err.code, codes::UNKNOWN);
            assert_eq!(err.status_code, 401);
            assert_eq!(err.message, "Unknown error");
        }
        other => panic!("expected error, got {other:?}"),
    }
}

#[test]
fn unreachable_host_is_transport_error() {
    // Bind then drop to get a port with nothing listening.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = client_for(addr);
    let err = client
        .shorten("sk_test", &ShortenParams::new("https://example.com"))
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}

#[test]
fn concurrent_callers_share_one_client() {
    let addr = start_mock_server();
    let client = client_for(addr);

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let client = &client;
                s.spawn(move || {
                    let params = ShortenParams {
                        path: Some(format!("p{i}")),
                        ..ShortenParams::new(format!("https://example.com/{i}"))
                    };
                    client.shorten("sk_test", &params).unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap().is_success());
        }
    });
}

#[test]
fn non_utf8_bodies_are_parsed_not_transport_errors() {
    let cases: [(&str, &[u8], &str, u16); 2] = [
        ("200 OK", b"\xff\xfe\x00garbage", codes::MALFORMED_SUCCESS, 200),
        ("502 Bad Gateway", b"\xc3\x28 bad gateway", codes::INVALID_JSON, 502),
    ];
    for (status, body, code, status_code) in cases {
        let client = client_for(serve_raw_once(status, body));
        let result = client
            .shorten("sk_test", &ShortenParams::new("https://example.com"))
            .unwrap();
        match result {
            ShortenResult::Error(err) => {
                assert_eq!(err.code, code);
                assert_eq!(err.status_code, status_code);
                assert!(!err.success);
            }
            other => panic!("expected error, got {other:?}"),
        }
    }
}
