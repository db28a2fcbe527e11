//! Performance benchmarks for doubtnut-scraper.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks cover each extractor over a synthetic page, plus a generated
//! section page of growing size for the question scan.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use doubtnut_scraper::extractor::{self, VideoContext};
use doubtnut_scraper::{dom, text, AssetProbe};
use url::Url;

const BOOK_PAGE: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head><title>Class 11 Books</title></head>
<body>
    <nav><a class="link" href="/">Home</a></nav>
    <div class="grid">
        <a class="flex p-2 gap-2 h-full" href="/books/class-11-ncert-physics">
            <img alt="NCERT Physics" src="//cdn.test/phy.webp">
        </a>
        <a class="flex p-2 gap-2 h-full" href="/books/class-11-ncert-chemistry">
            <img alt="NCERT Chemistry" data-src="/covers/chem.webp">
        </a>
    </div>
    <ol class="list-none pl-0">
        <li class="pl-0">
            <h3>Chapter 1: Units and Measurement</h3>
            <ol>
                <li class="pl-0"><a class="link" href="/books/class-11-ncert-physics/chapter-1-exercise">Exercise 1.1</a></li>
                <li class="pl-0"><a class="link" href="/books/class-11-ncert-physics/chapter-1-examples">Examples</a><a href="/pdfs/ch1.pdf">PDF</a></li>
            </ol>
        </li>
    </ol>
</body>
</html>
"#;

const ANSWER_PAGE: &str = r#"
<!DOCTYPE html>
<html>
<head>
    <meta property="og:title" content="Find the dimensional formula of torque. View Solution">
    <meta name="description" content="Text Solution: Torque = force x distance, so [ML^2T^-2]. Show More">
</head>
<body>
    <h1 id="ocr-text"><span class="math"><span>Find the dimensional formula of torque.</span></span></h1>
    <iframe src="https://www.youtube.com/embed/abc123?rel=0"></iframe>
    <script>window.cfg = {"player": "jw", "file": "https://cdn.test/clip.mp4"};</script>
</body>
</html>
"#;

struct Offline;

impl AssetProbe for Offline {
    fn exists(&self, _url: &str) -> bool {
        false
    }
}

fn section_page(questions: usize) -> String {
    let mut html = String::from("<html><body>");
    for i in 0..questions {
        html.push_str(&format!(
            "<div class=\"card\"><p>What is the value of expression number {i} when x = {i}?</p><a href=\"/qna/{i}\"><img alt=\"\"></a></div>"
        ));
    }
    html.push_str("</body></html>");
    html
}

fn base() -> Url {
    Url::parse("https://www.doubtnut.com").unwrap_or_else(|e| panic!("{e}"))
}

fn bench_books_and_chapters(c: &mut Criterion) {
    let base = base();
    c.bench_function("extract_books", |b| {
        b.iter(|| extractor::extract_books(&dom::parse(black_box(BOOK_PAGE)), 11, &base));
    });
    c.bench_function("extract_chapters", |b| {
        b.iter(|| extractor::extract_chapters(&dom::parse(black_box(BOOK_PAGE)), &base));
    });
}

fn bench_answer_and_video(c: &mut Criterion) {
    let page_url = Url::parse("https://www.doubtnut.com/qna/42").unwrap_or_else(|e| panic!("{e}"));
    let ctx = VideoContext {
        page_url: &page_url,
        video_cdn: "https://videos.doubtnut.com",
        probe: &Offline,
    };

    c.bench_function("extract_answer", |b| {
        b.iter(|| {
            extractor::extract_answer(&dom::parse(black_box(ANSWER_PAGE)), "42", page_url.as_str())
        });
    });
    c.bench_function("extract_video", |b| {
        b.iter(|| extractor::extract_video(&dom::parse(black_box(ANSWER_PAGE)), &ctx));
    });
}

fn bench_normalize(c: &mut Criterion) {
    let raw = "Match the following:<br> i) Mitochondria <br/> ii) Ribosome <br /> iii) Nucleus ".repeat(20);
    c.bench_function("normalize_enumerated", |b| {
        b.iter(|| text::normalize(black_box(&raw)));
    });
}

/// Question scan over section pages of growing size
fn bench_question_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("question_scan");

    for questions in [10, 100, 500] {
        let html = section_page(questions);
        group.throughput(Throughput::Bytes(html.len() as u64));
        group.bench_with_input(BenchmarkId::new("extract_questions", questions), &html, |b, html| {
            b.iter(|| extractor::extract_questions(&dom::parse(black_box(html))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_books_and_chapters,
    bench_answer_and_video,
    bench_normalize,
    bench_question_scan
);
criterion_main!(benches);
