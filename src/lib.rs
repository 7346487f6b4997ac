pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod request;
pub mod view;

use colored::*;
use tokio::sync::mpsc;
use tracing::{debug, info};

use api::AnalyzeResponse;
use client::BiasClient;
use config::ServiceConfig;
use error::AnalysisError;
use input::Trigger;
use render::DisplayModel;
use request::AnalysisRequest;
use view::{Panel, ViewState, Visibility};

// ---------------------------------------------------------------------------
// Render events
// ---------------------------------------------------------------------------

/// A completed render, bound to the panel chosen at dispatch time.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    Analysis(DisplayModel),
    SourceCheck(String),
}

// ---------------------------------------------------------------------------
// BiasSession — analysis-request orchestration engine
// ---------------------------------------------------------------------------

/// One front-end session: owns the transport client, the view state, and the
/// last rendered models. Every surface (text box, URL box, page selection)
/// funnels into [`BiasSession::submit_analysis`].
pub struct BiasSession {
    client: BiasClient,
    pub view: ViewState,
    /// Most recent successful analysis render. Error completions leave it
    /// untouched.
    pub last_analysis: Option<DisplayModel>,
    pub last_source_check: Option<String>,
    /// When set, render events are sent here instead of printed to stdout.
    pub render_tx: Option<mpsc::UnboundedSender<RenderEvent>>,
}

impl BiasSession {
    pub fn new(config: ServiceConfig) -> Self {
        BiasSession {
            client: BiasClient::new(config),
            view: ViewState::new(),
            last_analysis: None,
            last_source_check: None,
            render_tx: None,
        }
    }

    // -----------------------------------------------------------------------
    // Analysis flow
    // -----------------------------------------------------------------------

    /// Single entry point for every analysis trigger: resolve the input,
    /// validate it, call the service, render. Validation failures never
    /// reach the network.
    pub async fn submit_analysis(&mut self, trigger: &Trigger) -> Result<(), AnalysisError> {
        let resolved = input::resolve(trigger)?;
        let prepared = request::build(&resolved)?;
        info!(
            "analysis trigger accepted - source={}, mode={}",
            resolved.source,
            prepared.request.kind()
        );

        let generation = self.view.begin(Panel::Analysis);
        let submitted_text = match &prepared.request {
            AnalysisRequest::Text(text) => Some(text.clone()),
            AnalysisRequest::Url(_) => None,
        };

        let outcome = match &prepared.date_lookup {
            Some(lookup) => {
                // Primary analysis and best-effort date lookup run
                // concurrently; the date call must not block or abort it.
                let (analysis, date) = tokio::join!(
                    self.client.analyze(&prepared.request),
                    self.client.fetch_published_date(&lookup.url),
                );
                let date = match date {
                    Ok(date) => date,
                    Err(e) => {
                        debug!("date lookup failed, using fallback - {}", e);
                        None
                    }
                };
                analysis.map(|mut response| {
                    if date.is_some() {
                        response.published_date = date;
                    }
                    response
                })
            }
            None => self.client.analyze(&prepared.request).await,
        };

        self.complete_analysis(generation, submitted_text.as_deref(), outcome)
    }

    /// Apply one analysis completion. Split out from [`submit_analysis`] so
    /// overlapping completions can be exercised directly: only the newest
    /// generation may touch the rendered panel.
    pub fn complete_analysis(
        &mut self,
        generation: u64,
        submitted_text: Option<&str>,
        outcome: Result<AnalyzeResponse, AnalysisError>,
    ) -> Result<(), AnalysisError> {
        self.view.finish(Panel::Analysis);
        if !self.view.is_current(generation) {
            debug!("discarding stale analysis completion - generation={}", generation);
            return Ok(());
        }

        let response = outcome?;
        let model = render::render_analysis(&response, submitted_text);
        self.view.reset_after_render();
        self.emit(RenderEvent::Analysis(model.clone()));
        self.last_analysis = Some(model);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Source-check flow
    // -----------------------------------------------------------------------

    pub async fn submit_source_check(&mut self, raw_url: &str) -> Result<(), AnalysisError> {
        let url = request::validate_url(raw_url)?;
        self.view.begin(Panel::SourceCheck);
        let outcome = self.client.check_source(&url).await;
        self.view.finish(Panel::SourceCheck);

        let response = outcome?;
        let line = render::render_credibility(&response);
        self.emit(RenderEvent::SourceCheck(line.clone()));
        self.last_source_check = Some(line);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // View actions
    // -----------------------------------------------------------------------

    pub fn toggle_view(&mut self) {
        self.view.toggle();
    }

    pub fn flag_article(&self) -> &'static str {
        self.view.flag_article()
    }

    /// Re-print the last analysis render with the current visibility.
    pub fn print_last(&self) {
        if let Some(model) = &self.last_analysis {
            print_analysis(model, self.view.visibility());
        }
    }

    fn emit(&self, event: RenderEvent) {
        if let Some(tx) = &self.render_tx {
            let _ = tx.send(event);
        } else {
            match &event {
                RenderEvent::Analysis(model) => print_analysis(model, self.view.visibility()),
                RenderEvent::SourceCheck(line) => print_source_check(line),
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Terminal rendering
// ---------------------------------------------------------------------------

fn print_analysis(model: &DisplayModel, visibility: Visibility) {
    println!("{}", "=".repeat(50).bright_blue());
    println!(
        "{}: {}",
        "Bias Score".bright_yellow(),
        model.bias_score.bright_white().bold()
    );

    println!("\n{}", "Redline:".bright_yellow());
    if model.redline.is_empty() {
        println!("  {}", render::NO_BIASED_TERMS.green());
    } else {
        for pair in &model.redline {
            println!(
                "  {} -> {}",
                pair.biased.red().strikethrough(),
                pair.alternative.green()
            );
        }
    }

    let (label, body) = match visibility {
        Visibility::ShowingOriginal => ("Original", &model.original),
        Visibility::ShowingRewritten => ("Rewritten", &model.rewritten),
    };
    println!("\n{}:", label.bright_yellow());
    for paragraph in body {
        for line in paragraph {
            println!("  {}", line);
        }
        println!();
    }

    println!("{}", model.published.bright_blue());
}

fn print_source_check(line: &str) {
    println!("{}", line.bright_green());
}
