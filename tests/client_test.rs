mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use common::TestServer;
use doubtnut_scraper::{
    catalog, AnswerStatus, Client, Error, FetchError, Options, RetryPolicy, VideoKind,
    DEFAULT_USER_AGENT, QUESTION_PLACEHOLDER,
};

const BOOKS_PATH: &str = "/books/class-11-all-books-download-questions-answers-solutions";

fn options(server: &TestServer) -> Options {
    Options {
        base_url: server.base_url.clone(),
        origin_domain: "127.0.0.1".to_string(),
        video_cdn: format!("{}/cdn", server.base_url),
        retry: RetryPolicy {
            max_retries: 3,
            base_delay: Duration::from_millis(5),
        },
        request_timeout: Duration::from_secs(5),
        probe_timeout: Duration::from_secs(2),
        ..Options::default()
    }
}

fn client(server: &TestServer) -> Client {
    Client::new(options(server)).expect("build client")
}

fn page(body: &str) -> (u16, String) {
    (200, format!("<!doctype html><html>{body}</html>"))
}

fn not_found() -> (u16, String) {
    (404, "not found".to_string())
}

#[test]
fn books_are_listed_and_deduplicated() {
    let server = TestServer::spawn(|_, path| match path {
        BOOKS_PATH => page(
            r#"<body>
                <a class="flex p-2" href="/books/class-11-ncert-physics"><img alt="NCERT Physics" src="/covers/phy.png"></a>
                <a class="flex p-2" href="/books/class-11-ncert-physics">NCERT Physics</a>
                <a class="flex p-2" href="/books/class-11-hc-verma"><img alt="HC Verma" data-src="//cdn.test/hcv.png"></a>
            </body>"#,
        ),
        _ => not_found(),
    });
    let client = client(&server);

    let books = client.list_books(11).expect("list books");
    assert_eq!(books.len(), 3);
    assert_eq!(
        books[0].image_url.as_deref(),
        Some(format!("{}/covers/phy.png", server.base_url).as_str())
    );
    assert_eq!(books[2].image_url.as_deref(), Some("http://cdn.test/hcv.png"));

    let unique = catalog::unique_books(books);
    let endpoints: Vec<&str> = unique.iter().map(|b| b.endpoint.as_str()).collect();
    assert_eq!(endpoints, vec!["/books/class-11-ncert-physics", "/books/class-11-hc-verma"]);
}

#[test]
fn chapters_resolve_pdf_links() {
    let server = TestServer::spawn(|_, path| match path {
        "/books/class-11-ncert-physics" => page(
            r#"<body><ol class="list-none pl-0">
                <li class="pl-0">
                  <h3>Chapter 1: Units and Measurement</h3>
                  <ol>
                    <li class="pl-0">
                      <a class="link" href="/books/class-11-ncert-physics/chapter-1-exercise">Exercise</a>
                      <a href="/pdfs/units.pdf">PDF</a>
                    </li>
                  </ol>
                </li>
            </ol></body>"#,
        ),
        _ => not_found(),
    });
    let client = client(&server);

    let chapters = client
        .list_chapters("/books/class-11-ncert-physics")
        .expect("list chapters");

    assert_eq!(chapters.len(), 1);
    assert_eq!(chapters[0].chapter_name, "Chapter 1: Units and Measurement");
    assert_eq!(
        chapters[0].pdf_link,
        Some(format!("{}/pdfs/units.pdf", server.base_url))
    );
}

#[test]
fn questions_are_listed_and_summarized() {
    let server = TestServer::spawn(|_, path| match path {
        "/books/ncert/chapter-1-exercise" => page(
            r#"<body>
                <a href="/qna/11">What is a light year? View Solution</a>
                <a href="/qna/12">Define parallax.</a>
            </body>"#,
        ),
        _ => not_found(),
    });
    let client = client(&server);

    let questions = client
        .list_questions("/books/ncert/chapter-1-exercise")
        .expect("list questions");
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].qna_id.as_deref(), Some("11"));

    let summaries = catalog::summarize_questions(&questions);
    assert_eq!(summaries[0].question, "What is a light year?");
    assert_eq!(summaries[1].question, "Define parallax.");
}

#[test]
fn description_only_answer_page() {
    let server = TestServer::spawn(|_, path| match path {
        "/qna/42" => page(r#"<head><meta name="description" content="The answer is 42."></head><body></body>"#),
        _ => not_found(),
    });
    let client = client(&server);

    let record = client.get_answer("42").expect("get answer");

    assert_eq!(record.qna_id, "42");
    assert_eq!(record.question, QUESTION_PLACEHOLDER);
    assert_eq!(record.answer, "The answer is 42.");
    assert_eq!(record.status, AnswerStatus::Success);
    assert_eq!(record.source_url, format!("{}/qna/42", server.base_url));
}

#[test]
fn persistent_503_is_a_fetch_error_not_an_empty_list() {
    let server = TestServer::spawn(|_, path| match path {
        "/broken" => (503, "unavailable".to_string()),
        "/empty" => page("<body><p>No questions in this section.</p></body>"),
        _ => not_found(),
    });
    let client = client(&server);

    let err = client.list_questions("/broken").expect_err("503 must fail");
    match &err {
        Error::Fetch { attempts, .. } => assert_eq!(*attempts, 3),
        other => panic!("expected fetch error, got {other:?}"),
    }
    assert_eq!(err.status(), Some(503));
    assert_eq!(server.hits_for("/broken"), 3);

    let empty = client.list_questions("/empty").expect("empty section");
    assert!(empty.is_empty());
}

#[test]
fn transient_503_recovers_on_retry() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let server = TestServer::spawn(move |_, path| match path {
        "/qna/7" if seen.fetch_add(1, Ordering::SeqCst) == 0 => (503, "busy".to_string()),
        "/qna/7" => page(r#"<head><meta name="description" content="Work is force times displacement."></head>"#),
        _ => not_found(),
    });
    let client = client(&server);

    let record = client.get_answer("7").expect("second attempt succeeds");

    assert_eq!(record.answer, "Work is force times displacement.");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn slow_server_is_a_timeout() {
    let server = TestServer::spawn(|_, _| {
        std::thread::sleep(Duration::from_millis(1000));
        page("<body></body>")
    });
    let client = Client::new(Options {
        retry: RetryPolicy {
            max_retries: 1,
            base_delay: Duration::ZERO,
        },
        request_timeout: Duration::from_millis(200),
        ..options(&server)
    })
    .expect("build client");

    let err = client.list_questions("/slow").expect_err("must time out");

    assert!(
        matches!(
            err,
            Error::Fetch {
                attempts: 1,
                source: FetchError::Timeout(_),
                ..
            }
        ),
        "unexpected error: {err:?}"
    );
    assert_eq!(err.status(), None);
}

#[test]
fn browser_headers_are_sent() {
    let server = TestServer::spawn(|_, _| page("<body></body>"));
    let client = client(&server);

    client.list_chapters("/books/any").expect("list chapters");

    let hits = server.hits();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].user_agent.as_deref(), Some(DEFAULT_USER_AGENT));
    assert_eq!(hits[0].accept_language.as_deref(), Some("en-US,en;q=0.5"));
}

#[test]
fn foreign_video_url_makes_no_request() {
    let server = TestServer::spawn(|_, _| page("<body></body>"));
    let client = client(&server);

    let result = client.extract_video_url("https://www.youtube.com/watch?v=abc123");

    assert!(matches!(result, Err(Error::InvalidUrl(_))));
    assert!(server.hits().is_empty());
}

#[test]
fn structured_video_payload_is_probed() {
    let server = TestServer::spawn(|method, path| match (method, path) {
        ("GET", "/qna/42") => page(
            r#"<body><script id="__NEXT_DATA__" type="application/json">{"props":{"pageProps":{"videoData":{"video_name":"lecture-42.mp4","duration":95}}}}</script></body>"#,
        ),
        ("HEAD", "/cdn/lecture-42.mp4") => (200, String::new()),
        _ => not_found(),
    });
    let client = client(&server);

    let video = client
        .extract_video_url(&format!("{}/qna/42", server.base_url))
        .expect("video found");

    assert_eq!(video.kind, VideoKind::DoubtnutVideo);
    assert_eq!(video.url, format!("{}/cdn/lecture-42.mp4", server.base_url));
    assert_eq!(video.duration, Some(serde_json::json!(95)));
    assert!(server
        .hits()
        .iter()
        .any(|h| h.method == "HEAD" && h.path == "/cdn/lecture-42.mp4"));
}

#[test]
fn video_page_is_fetched_once() {
    let server = TestServer::spawn(|_, path| match path {
        "/qna/9" => (503, "unavailable".to_string()),
        _ => not_found(),
    });
    let client = client(&server);

    let err = client
        .extract_video_url(&format!("{}/qna/9", server.base_url))
        .expect_err("503 must fail");

    assert!(matches!(err, Error::Fetch { attempts: 1, .. }));
    assert_eq!(server.hits_for("/qna/9"), 1);
}

#[test]
fn page_without_video_is_no_video_content() {
    let server = TestServer::spawn(|_, _| page("<body><p>Only text.</p></body>"));
    let client = client(&server);

    let result = client.extract_video_url(&format!("{}/qna/5", server.base_url));

    assert!(matches!(result, Err(Error::NoVideoContent)));
}

#[test]
fn answer_with_video_folds_missing_video() {
    let server = TestServer::spawn(|_, path| match path {
        "/qna/3" => page(
            r#"<head><meta property="og:title" content="Why do stars twinkle?"><meta name="description" content="Atmospheric refraction."></head>
            <body><video><source src="/media/3.mp4"></video></body>"#,
        ),
        "/qna/4" => page(r#"<head><meta name="description" content="Newton's first law."></head>"#),
        _ => not_found(),
    });
    let client = client(&server);

    let with_video = catalog::answer_with_video(&client, "3").expect("answer 3");
    assert_eq!(with_video.question, "Why do stars twinkle?");
    assert_eq!(
        with_video.video_url,
        Some(format!("{}/media/3.mp4", server.base_url))
    );

    let without = catalog::answer_with_video(&client, "4").expect("answer 4");
    assert_eq!(without.answer, "Newton's first law.");
    assert_eq!(without.video_url, None);
}
