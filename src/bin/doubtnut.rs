//! Command-line front end.
//!
//! Every subcommand prints a JSON envelope to stdout: `{"success": true,
//! "data": ...}` on success, `{"success": false, "error": ..., "message": ...,
//! "transport": bool}` with exit code 1 on failure. `transport` is true when
//! the site could not be reached, as opposed to a rejected input. Logs go to
//! stderr.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use url::Url;

use doubtnut_scraper::extractor::{self, VideoContext};
use doubtnut_scraper::{
    catalog, dom, encoding, logging, AnswerView, Client, Error, Options, RetryPolicy,
};

#[derive(Debug, Parser)]
#[command(name = "doubtnut", author, version, about)]
struct Cli {
    /// Site root that paths are resolved against.
    #[arg(long, global = true, default_value = "https://www.doubtnut.com")]
    base_url: String,

    /// Attempts per page fetch.
    #[arg(long, global = true, default_value_t = 3)]
    retries: u32,

    /// Delay before each request, and back-off unit between retries.
    #[arg(long, global = true, default_value_t = 1000)]
    delay_ms: u64,

    /// Timeout of each request.
    #[arg(long, global = true, default_value_t = 10)]
    timeout_secs: u64,

    /// Run the extractor on a saved page instead of fetching it.
    #[arg(long, global = true)]
    html_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the books of a class (6 to 12).
    Books {
        #[arg(long = "class", default_value_t = 11)]
        class_number: u8,
    },
    /// List the chapters of a book.
    Chapters {
        /// Book path, e.g. `/books/class-11-ncert-physics`.
        #[arg(long)]
        path: String,
    },
    /// List the questions of a chapter section.
    Questions {
        #[arg(long)]
        path: String,
    },
    /// Fetch the question and answer text of a question.
    Answer {
        #[arg(long)]
        id: String,

        /// Skip the lecture video lookup.
        #[arg(long)]
        no_video: bool,
    },
    /// Locate the lecture video of a question page.
    Video {
        #[arg(long)]
        url: String,
    },
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            base_url: self.base_url.clone(),
            retry: RetryPolicy {
                max_retries: self.retries,
                base_delay: Duration::from_millis(self.delay_ms),
            },
            request_timeout: Duration::from_secs(self.timeout_secs),
            ..Options::default()
        }
    }

    fn failure_message(&self) -> String {
        match &self.command {
            Command::Books { class_number } => format!("Failed to fetch books for class {class_number}"),
            Command::Chapters { path } => format!("Failed to fetch chapters for book: {path}"),
            Command::Questions { path } => format!("Failed to fetch questions for path: {path}"),
            Command::Answer { id, .. } => format!("Failed to fetch answer for QNA ID: {id}"),
            Command::Video { url } => format!("Failed to extract video from: {url}"),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init() {
        eprintln!("{err:#}");
    }
    tracing::debug!(?cli, "parsed cli");

    let (envelope, code) = match run(&cli) {
        Ok(envelope) => (envelope, ExitCode::SUCCESS),
        Err(err) => {
            tracing::error!("{err:#}");
            let transport = err.downcast_ref::<Error>().is_some_and(Error::is_transport);
            let envelope = json!({
                "success": false,
                "error": format!("{err:#}"),
                "message": cli.failure_message(),
                "transport": transport,
            });
            (envelope, ExitCode::FAILURE)
        }
    };

    match serde_json::to_string_pretty(&envelope) {
        Ok(text) => println!("{text}"),
        Err(err) => {
            eprintln!("serialize output: {err}");
            return ExitCode::FAILURE;
        }
    }
    code
}

fn run(cli: &Cli) -> anyhow::Result<Value> {
    let client = Client::new(cli.options()).context("build client")?;
    let saved = cli.html_file.as_deref().map(read_page).transpose()?;

    match &cli.command {
        Command::Books { class_number } => {
            let class_number = catalog::validate_class(*class_number)?;
            let books = match &saved {
                Some(html) => {
                    let base = Url::parse(&client.options().base_url)?;
                    extractor::extract_books(&dom::parse(html), class_number, &base)
                }
                None => client.list_books(class_number)?,
            };
            let books = catalog::unique_books(books);
            Ok(json!({
                "success": true,
                "data": books,
                "class": class_number,
                "count": books.len(),
            }))
        }
        Command::Chapters { path } => {
            let chapters = match &saved {
                Some(html) => {
                    let base = Url::parse(&client.options().base_url)?;
                    extractor::extract_chapters(&dom::parse(html), &base)
                }
                None => client.list_chapters(path)?,
            };
            Ok(json!({
                "success": true,
                "data": chapters,
                "book_path": path,
                "count": chapters.len(),
            }))
        }
        Command::Questions { path } => {
            let questions = match &saved {
                Some(html) => extractor::extract_questions(&dom::parse(html)),
                None => client.list_questions(path)?,
            };
            let summaries = catalog::summarize_questions(&questions);
            Ok(json!({
                "success": true,
                "data": summaries,
                "count": summaries.len(),
            }))
        }
        Command::Answer { id, no_video } => {
            let view = match &saved {
                Some(html) => saved_answer(&client, html, id, *no_video)?,
                None if *no_video => {
                    let record = client.get_answer(id)?;
                    AnswerView {
                        question: record.question,
                        answer: record.answer,
                        video_url: None,
                    }
                }
                None => catalog::answer_with_video(&client, id)?,
            };
            Ok(json!({ "success": true, "data": view }))
        }
        Command::Video { url } => {
            let video = match &saved {
                Some(html) => {
                    let page_url = Url::parse(url).with_context(|| format!("parse {url}"))?;
                    saved_video(&client, html, &page_url)?
                }
                None => client.extract_video_url(url)?,
            };
            Ok(json!({
                "success": true,
                "video_url": video.url,
                "data": video,
            }))
        }
    }
}

fn read_page(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    Ok(encoding::decode_body(None, &bytes))
}

fn saved_video(
    client: &Client,
    html: &str,
    page_url: &Url,
) -> doubtnut_scraper::Result<doubtnut_scraper::VideoInfo> {
    let fetcher = doubtnut_scraper::Fetcher::new(client.options())?;
    let ctx = VideoContext {
        page_url,
        video_cdn: &client.options().video_cdn,
        probe: &fetcher,
    };
    extractor::extract_video(&dom::parse(html), &ctx).ok_or(Error::NoVideoContent)
}

fn saved_answer(client: &Client, html: &str, id: &str, no_video: bool) -> anyhow::Result<AnswerView> {
    let source_url = client.answer_url(id);
    let record = extractor::extract_answer(&dom::parse(html), id, &source_url);

    if no_video {
        return Ok(AnswerView {
            question: record.question,
            answer: record.answer,
            video_url: None,
        });
    }

    let page_url = Url::parse(&source_url)?;
    Ok(catalog::fold_answer(record, saved_video(client, html, &page_url)))
}
