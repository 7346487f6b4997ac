// ---------------------------------------------------------------------------
// View state machine
// ---------------------------------------------------------------------------

/// Which response panel a network completion belongs to. Bound at dispatch
/// time so concurrent completions can never land in the wrong panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Analysis,
    SourceCheck,
}

/// Exactly one of the two body panels is visible at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    ShowingOriginal,
    ShowingRewritten,
}

/// Visibility and per-panel loading state, owned exclusively by the session.
///
/// Visibility toggles only on explicit user action; a fresh successful
/// analysis render resets it to the original panel. The generation counter
/// is bumped per analysis dispatch so stale completions can be discarded.
#[derive(Debug, Default)]
pub struct ViewState {
    visibility: Visibility,
    analysis_loading: bool,
    source_loading: bool,
    generation: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Explicit user toggle between the original and rewritten panels.
    pub fn toggle(&mut self) {
        self.visibility = match self.visibility {
            Visibility::ShowingOriginal => Visibility::ShowingRewritten,
            Visibility::ShowingRewritten => Visibility::ShowingOriginal,
        };
    }

    pub fn is_loading(&self, panel: Panel) -> bool {
        match panel {
            Panel::Analysis => self.analysis_loading,
            Panel::SourceCheck => self.source_loading,
        }
    }

    /// Mark a panel as loading. Analysis dispatches additionally take a new
    /// generation; the returned value tags the in-flight request.
    pub fn begin(&mut self, panel: Panel) -> u64 {
        match panel {
            Panel::Analysis => {
                self.analysis_loading = true;
                self.generation += 1;
            }
            Panel::SourceCheck => self.source_loading = true,
        }
        self.generation
    }

    /// Clear a panel's loading flag on completion or failure.
    pub fn finish(&mut self, panel: Panel) {
        match panel {
            Panel::Analysis => self.analysis_loading = false,
            Panel::SourceCheck => self.source_loading = false,
        }
    }

    /// Whether a tagged completion is still the newest analysis dispatch.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// A fresh successful render always lands on the original panel,
    /// regardless of prior toggle state.
    pub fn reset_after_render(&mut self) {
        self.visibility = Visibility::ShowingOriginal;
    }

    /// Client-only acknowledgment; alters no other state.
    pub fn flag_article(&self) -> &'static str {
        "Article flagged for review."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let view = ViewState::new();
        assert_eq!(view.visibility(), Visibility::ShowingOriginal);
        assert!(!view.is_loading(Panel::Analysis));
        assert!(!view.is_loading(Panel::SourceCheck));
    }

    #[test]
    fn test_toggle_flips_both_ways() {
        let mut view = ViewState::new();
        view.toggle();
        assert_eq!(view.visibility(), Visibility::ShowingRewritten);
        view.toggle();
        assert_eq!(view.visibility(), Visibility::ShowingOriginal);
    }

    #[test]
    fn test_reset_after_render_overrides_toggle() {
        let mut view = ViewState::new();
        view.toggle();
        view.reset_after_render();
        assert_eq!(view.visibility(), Visibility::ShowingOriginal);
    }

    #[test]
    fn test_loading_tracked_per_panel() {
        let mut view = ViewState::new();
        view.begin(Panel::Analysis);
        assert!(view.is_loading(Panel::Analysis));
        assert!(!view.is_loading(Panel::SourceCheck));

        view.begin(Panel::SourceCheck);
        view.finish(Panel::Analysis);
        assert!(!view.is_loading(Panel::Analysis));
        assert!(view.is_loading(Panel::SourceCheck));
    }

    #[test]
    fn test_finish_clears_loading() {
        let mut view = ViewState::new();
        view.begin(Panel::SourceCheck);
        view.finish(Panel::SourceCheck);
        assert!(!view.is_loading(Panel::SourceCheck));
    }

    #[test]
    fn test_analysis_dispatch_bumps_generation() {
        let mut view = ViewState::new();
        let first = view.begin(Panel::Analysis);
        let second = view.begin(Panel::Analysis);
        assert!(second > first);
        assert!(!view.is_current(first));
        assert!(view.is_current(second));
    }

    #[test]
    fn test_source_check_dispatch_keeps_generation() {
        let mut view = ViewState::new();
        let tagged = view.begin(Panel::Analysis);
        view.begin(Panel::SourceCheck);
        assert!(view.is_current(tagged));
    }

    #[test]
    fn test_flag_article_alters_nothing() {
        let mut view = ViewState::new();
        view.toggle();
        view.begin(Panel::Analysis);
        let ack = view.flag_article();
        assert_eq!(ack, "Article flagged for review.");
        assert_eq!(view.visibility(), Visibility::ShowingRewritten);
        assert!(view.is_loading(Panel::Analysis));
    }

    #[test]
    fn test_toggle_not_affected_by_loading_changes() {
        let mut view = ViewState::new();
        view.begin(Panel::Analysis);
        view.finish(Panel::Analysis);
        assert_eq!(view.visibility(), Visibility::ShowingOriginal);
    }
}
