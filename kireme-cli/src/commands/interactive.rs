//! Interactive session command
//!
//! Line-oriented submission form: plain lines
//! accumulate into the text buffer, colon commands edit the language and
//! method fields, and `:go`, an empty line, or end-of-input (Ctrl-D)
//! submits. The session survives every failure; only `:quit` or Ctrl-D
//! ends it.

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, Instant};

use kireme_api::{
    ClientConfig, FormState, Language, Method, Notice, NoticeBoard, SegmentClient,
    SubmissionTracker,
};

use crate::config::CliConfig;
use crate::output::{self, OutputFormat};
use crate::progress::LoadingIndicator;

/// Arguments for the interactive command
#[derive(Debug, Args)]
pub struct InteractiveArgs {
    /// Base URL of the segmentation service
    #[arg(long, value_name = "URL", env = "KIREME_API_URL")]
    pub api_url: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl InteractiveArgs {
    /// Execute the interactive command
    pub async fn execute(&self) -> Result<()> {
        super::init_logging(false, self.verbose);

        let config = CliConfig::load(self.config.as_deref())?;
        let base_url = self
            .api_url
            .clone()
            .unwrap_or_else(|| config.service.base_url.clone());

        let mut client_config = ClientConfig::new(base_url.clone());
        if let Some(secs) = config.service.timeout_secs {
            client_config = client_config.with_timeout(Duration::from_secs(secs));
        }
        let client = SegmentClient::new(client_config)?;

        // Session-start probe, the "page load" check: advisory and logged
        // only, the session starts either way.
        client.health().await;

        let mut form = FormState::new();
        form.set_language(config.default_language()?);
        form.set_method(config.default_method()?);

        let mut session = Session::new(client, form);

        println!("kireme interactive session (service: {base_url})");
        println!("Type text, then an empty line or :go to segment. :help lists commands.");

        let stdin = io::stdin();
        loop {
            print!("kireme> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                // Ctrl-D: submit whatever is buffered, then leave.
                if !session.buffer_is_empty() {
                    session.submit().await;
                }
                println!();
                break;
            }

            if !session.handle_line(line.trim_end_matches(['\n', '\r'])).await {
                break;
            }
        }

        Ok(())
    }
}

/// State of one interactive session
struct Session {
    client: SegmentClient,
    form: FormState,
    notices: NoticeBoard,
    tracker: SubmissionTracker,
    notice_bar: Option<ProgressBar>,
    dismissal: Option<tokio::task::JoinHandle<()>>,
}

impl Session {
    fn new(client: SegmentClient, form: FormState) -> Self {
        Self {
            client,
            form,
            notices: NoticeBoard::new(),
            tracker: SubmissionTracker::new(),
            notice_bar: None,
            dismissal: None,
        }
    }

    fn buffer_is_empty(&self) -> bool {
        self.form.text().trim().is_empty()
    }

    /// Process one input line; returns false when the session should end
    async fn handle_line(&mut self, line: &str) -> bool {
        if let Some(command) = line.strip_prefix(':') {
            return self.handle_command(command).await;
        }

        if line.trim().is_empty() {
            // An empty line submits a non-empty buffer and is otherwise a no-op.
            if !self.buffer_is_empty() {
                self.submit().await;
            }
            return true;
        }

        self.form.push_line(line);
        true
    }

    async fn handle_command(&mut self, command: &str) -> bool {
        let mut parts = command.split_whitespace();
        let name = parts.next().unwrap_or("");
        let argument = parts.next();

        match name {
            "language" | "lang" | "l" => match argument.map(Language::from_str) {
                Some(Ok(language)) => {
                    match self.form.set_language(language) {
                        Some(notice) => self.show_notice(notice),
                        None => println!("Language set to {}", self.form.language().name()),
                    }
                }
                Some(Err(error)) => output::error_banner(&error.to_string()),
                None => println!("Usage: :language CODE (en, fr, de, es)"),
            },
            "method" | "m" => match argument.map(Method::from_str) {
                Some(Ok(method)) => {
                    match self.form.set_method(method) {
                        Some(notice) => self.show_notice(notice),
                        None => println!("Method set to {}", self.form.method()),
                    }
                }
                Some(Err(error)) => output::error_banner(&error.to_string()),
                None => println!("Usage: :method NAME (baseline, spacy)"),
            },
            "go" | "submit" => self.submit().await,
            "show" => self.show_form(),
            "clear" => {
                self.form.clear_text();
                println!("Text buffer cleared");
            }
            "help" | "h" => Self::show_help(),
            "quit" | "exit" | "q" => return false,
            other => println!("Unknown command ':{other}'. :help lists commands."),
        }

        true
    }

    /// Validate, submit, render. The loading spinner is released on every
    /// exit path, and a response belonging to a superseded submission is
    /// dropped unrendered.
    async fn submit(&mut self) {
        let request = match self.form.validate() {
            Ok(request) => request,
            Err(error) => {
                output::error_banner(&error.to_string());
                return;
            }
        };

        let ticket = self.tracker.begin();
        let indicator = LoadingIndicator::start(false);
        let result = self.client.segment(&request).await;
        drop(indicator);

        if !ticket.is_current() {
            log::warn!("discarding stale segmentation response");
            return;
        }

        match result {
            Ok(response) => {
                let rendered =
                    output::render(&response, OutputFormat::Text, io::stdout().lock());
                match rendered {
                    Ok(()) => self.form.clear_text(),
                    Err(error) => output::error_banner(&error.to_string()),
                }
            }
            Err(error) => output::error_banner(&error.to_string()),
        }
    }

    /// Show a transient notice, replacing any notice still on screen
    ///
    /// The dismissal timer is a cancellable task; re-triggering aborts the
    /// pending timer so notices never stack.
    fn show_notice(&mut self, notice: Notice) {
        self.notices.post(notice.clone(), Instant::now());

        if let Some(task) = self.dismissal.take() {
            task.abort();
        }
        if let Some(bar) = self.notice_bar.take() {
            bar.finish_and_clear();
        }

        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::default_spinner()
                .template("{msg}")
                .unwrap(),
        );
        bar.set_message(format!("⚠ {}", notice.message()));
        bar.enable_steady_tick(Duration::from_millis(250));

        let clear = bar.clone();
        let duration = notice.duration();
        self.notice_bar = Some(bar);
        self.dismissal = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            clear.finish_and_clear();
        }));
    }

    fn show_form(&mut self) {
        let language = self.form.language();
        println!("Language: {} ({})", language.code(), language.name());
        println!("Method:   {}", self.form.method());
        let buffered = self.form.text().trim();
        if buffered.is_empty() {
            println!("Buffer:   (empty)");
        } else {
            println!("Buffer:   {} characters", buffered.chars().count());
        }

        self.notices.expire(Instant::now());
        if let Some(notice) = self.notices.current(Instant::now()) {
            println!("Notice:   {}", notice.message());
        }
    }

    fn show_help() {
        println!("Commands:");
        println!("  :language CODE   select the language (en, fr, de, es)");
        println!("  :method NAME     select the method (baseline, spacy)");
        println!("  :show            show the current form state");
        println!("  :clear           discard the text buffer");
        println!("  :go              segment the buffered text (or press Enter on an empty line)");
        println!("  :quit            leave the session (or press Ctrl-D)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        // Unroutable address: any accidental submission fails fast as a
        // network error instead of reaching something real.
        let client = SegmentClient::new(ClientConfig::new("http://127.0.0.1:9")).unwrap();
        Session::new(client, FormState::new())
    }

    #[tokio::test]
    async fn plain_lines_accumulate_in_the_buffer() {
        let mut session = session();
        assert!(session.handle_line("First sentence.").await);
        assert!(session.handle_line("Second sentence.").await);
        assert_eq!(session.form.text(), "First sentence.\nSecond sentence.");
    }

    #[tokio::test]
    async fn quit_ends_the_session() {
        let mut session = session();
        assert!(!session.handle_line(":quit").await);
        assert!(!session.handle_line(":q").await);
    }

    #[tokio::test]
    async fn language_command_updates_the_form() {
        let mut session = session();
        assert!(session.handle_line(":language fr").await);
        assert_eq!(session.form.language(), Language::Fr);
    }

    #[tokio::test]
    async fn baseline_under_french_triggers_the_auto_correction() {
        let mut session = session();
        session.handle_line(":language fr").await;
        session.handle_line(":method baseline").await;

        assert_eq!(session.form.language(), Language::En);
        assert_eq!(session.form.method(), Method::Baseline);
        // The transient notice is live and its dismissal timer is pending.
        assert!(session.notices.current(Instant::now()).is_some());
        assert!(session.dismissal.is_some());
    }

    #[tokio::test]
    async fn retriggered_notice_replaces_the_pending_dismissal() {
        let mut session = session();
        session.handle_line(":language fr").await;
        session.handle_line(":method baseline").await;
        assert!(session.dismissal.is_some());

        session.handle_line(":language de").await;
        // Still exactly one live notice and one pending timer.
        assert!(session.notices.current(Instant::now()).is_some());
        assert!(session.dismissal.is_some());
        assert_eq!(session.form.language(), Language::En);
    }

    #[tokio::test]
    async fn unknown_identifiers_leave_the_form_untouched() {
        let mut session = session();
        session.handle_line(":language xx").await;
        session.handle_line(":method regex").await;

        assert_eq!(session.form.language(), Language::En);
        assert_eq!(session.form.method(), Method::Spacy);
    }

    #[tokio::test]
    async fn clear_discards_the_buffer() {
        let mut session = session();
        session.handle_line("Some text.").await;
        session.handle_line(":clear").await;
        assert!(session.buffer_is_empty());
    }

    #[tokio::test]
    async fn failed_submission_keeps_the_session_usable() {
        let mut session = session();
        session.handle_line("Hi. Bye.").await;
        // Submits against the unroutable address; the error is surfaced as
        // a banner and the buffered text survives for a manual retry.
        assert!(session.handle_line(":go").await);
        assert_eq!(session.form.text(), "Hi. Bye.");
        assert!(session.handle_line("More text.").await);
    }

    #[tokio::test]
    async fn empty_line_with_empty_buffer_does_nothing() {
        let mut session = session();
        assert!(session.handle_line("").await);
        assert!(session.buffer_is_empty());
    }
}
