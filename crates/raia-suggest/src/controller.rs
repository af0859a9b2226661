//! The suggestion controller state machine

use crate::config::SuggestConfig;
use crate::phase::SuggestionPhase;
use crate::sink::SuggestionSink;
use parking_lot::Mutex;
use raia_classify::Classifier;
use raia_core::{Classification, Department, ReportDraft};
use raia_telemetry::SuggestionMetrics;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Point-in-time view of the controller for rendering
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionSnapshot {
    pub phase: SuggestionPhase,
    pub analysis_enabled: bool,
    pub panel_visible: bool,
    pub selected_department: Option<String>,
    pub last_result: Option<Classification>,
}

/// Mutable state of one form session
struct State {
    phase: SuggestionPhase,
    analysis_enabled: bool,
    panel_visible: bool,
    current_title: String,
    current_description: String,
    last_analyzed_title: String,
    last_analyzed_description: String,
    selected_department: Option<String>,
    auto_applied_department: Option<String>,
    last_result: Option<Classification>,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl State {
    fn new() -> Self {
        Self {
            phase: SuggestionPhase::Idle,
            analysis_enabled: true,
            panel_visible: false,
            current_title: String::new(),
            current_description: String::new(),
            last_analyzed_title: String::new(),
            last_analyzed_description: String::new(),
            selected_department: None,
            auto_applied_department: None,
            last_result: None,
            generation: 0,
            pending: None,
        }
    }
}

struct Inner {
    session_id: Uuid,
    config: SuggestConfig,
    classifier: Arc<dyn Classifier>,
    sink: Arc<dyn SuggestionSink>,
    departments: Vec<Department>,
    metrics: SuggestionMetrics,
    state: Mutex<State>,
}

/// Coordinates when the classifier runs and whether its output may touch the
/// form's department field.
///
/// One instance per open report-creation form. Event methods are synchronous
/// and cheap; the only async work is the debounce task they may spawn, so
/// they must be called from within a tokio runtime. At most one debounce
/// task is live at any moment: scheduling a new one always aborts the old.
pub struct SuggestionController {
    inner: Arc<Inner>,
}

impl SuggestionController {
    /// Create a controller with the default configuration
    pub fn new(
        classifier: Arc<dyn Classifier>,
        sink: Arc<dyn SuggestionSink>,
        departments: Vec<Department>,
    ) -> Self {
        Self::with_config(SuggestConfig::default(), classifier, sink, departments)
    }

    /// Create a controller with an explicit configuration
    pub fn with_config(
        config: SuggestConfig,
        classifier: Arc<dyn Classifier>,
        sink: Arc<dyn SuggestionSink>,
        departments: Vec<Department>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                session_id: Uuid::new_v4(),
                config,
                classifier,
                sink,
                departments,
                metrics: SuggestionMetrics::new(),
                state: Mutex::new(State::new()),
            }),
        }
    }

    /// Identifier of this form session, used in log correlation
    pub fn session_id(&self) -> Uuid {
        self.inner.session_id
    }

    /// Shared handle to this session's lifecycle counters
    pub fn metrics(&self) -> SuggestionMetrics {
        self.inner.metrics.clone()
    }

    /// The user edited the title or description.
    ///
    /// Ignored while disabled. Content below the configured minimums cancels
    /// any pending analysis instead of scheduling one, and text identical to
    /// the last analyzed fingerprint is not re-analyzed. Otherwise the
    /// debounce timer is replaced (last write wins).
    pub fn input_changed(&self, title: &str, description: &str) {
        let mut state = self.inner.state.lock();
        state.current_title = title.to_string();
        state.current_description = description.to_string();

        if !state.analysis_enabled {
            return;
        }

        if !self.inner.config.qualifies(title, description) {
            Inner::invalidate_pending(&mut state);
            if matches!(
                state.phase,
                SuggestionPhase::Debouncing | SuggestionPhase::Analyzing
            ) {
                state.phase = SuggestionPhase::Idle;
                state.panel_visible = false;
            }
            return;
        }

        if title == state.last_analyzed_title && description == state.last_analyzed_description {
            return;
        }

        let delay = self.inner.config.typing_debounce();
        Inner::schedule(&self.inner, &mut state, delay);
    }

    /// The form's department selector changed.
    ///
    /// A non-empty value the controller did not itself just write counts as
    /// a manual override: analysis is disabled and the panel hidden until
    /// the selector is cleared or suggestions are explicitly re-enabled.
    pub fn department_changed(&self, selection: Option<&str>) {
        let selection = selection.filter(|id| !id.trim().is_empty());
        let mut state = self.inner.state.lock();

        match selection {
            Some(id) => {
                state.selected_department = Some(id.to_string());

                if state.auto_applied_department.as_deref() == Some(id) {
                    // Our own write echoed back by the form; not an override.
                    return;
                }

                Inner::invalidate_pending(&mut state);
                state.auto_applied_department = None;
                state.analysis_enabled = false;
                state.panel_visible = false;
                state.phase = SuggestionPhase::Disabled;
                tracing::debug!(
                    session = %self.inner.session_id,
                    department = id,
                    "manual department selection, suggestions disabled"
                );
            }
            None => {
                state.selected_department = None;
                state.auto_applied_department = None;
                if !state.analysis_enabled {
                    state.analysis_enabled = true;
                    state.phase = SuggestionPhase::Idle;
                    tracing::debug!(
                        session = %self.inner.session_id,
                        "department cleared, suggestions re-enabled"
                    );
                }
            }
        }
    }

    /// The user explicitly asked for suggestions again.
    ///
    /// If the current input already qualifies, analysis is scheduled with
    /// the short quiet period; the fingerprint is deliberately not consulted
    /// so an explicit request always produces a fresh opinion.
    pub fn enable_analysis(&self) {
        let mut state = self.inner.state.lock();
        state.analysis_enabled = true;
        if state.phase == SuggestionPhase::Disabled {
            state.phase = SuggestionPhase::Idle;
        }

        if self
            .inner
            .config
            .qualifies(&state.current_title, &state.current_description)
        {
            let delay = self.inner.config.reenable_debounce();
            Inner::schedule(&self.inner, &mut state, delay);
        }
    }

    /// The user accepted the current suggestion.
    ///
    /// Returns the resolved department for the form to write into its field,
    /// or `None` when there is no applicable suggestion (not in the
    /// suggested phase, no prediction, or the predicted name is missing from
    /// the department list). On success the session is disabled: the user
    /// has made a choice.
    pub fn apply_suggestion(&self) -> Option<Department> {
        let mut state = self.inner.state.lock();
        if state.phase != SuggestionPhase::Suggested {
            return None;
        }

        let name = state.last_result.as_ref()?.department.clone()?;
        let department = self
            .inner
            .departments
            .iter()
            .find(|d| d.name == name)?
            .clone();

        Inner::invalidate_pending(&mut state);
        state.selected_department = Some(department.id.clone());
        state.auto_applied_department = None;
        state.analysis_enabled = false;
        state.panel_visible = false;
        state.phase = SuggestionPhase::Disabled;

        self.inner.metrics.record_manually_applied();
        tracing::debug!(
            session = %self.inner.session_id,
            department = %department.name,
            "suggestion applied"
        );
        Some(department)
    }

    /// The user dismissed suggestions ("ignore and disable")
    pub fn dismiss(&self) {
        let mut state = self.inner.state.lock();
        Inner::invalidate_pending(&mut state);
        state.last_result = None;
        state.panel_visible = false;
        state.analysis_enabled = false;
        state.phase = SuggestionPhase::Disabled;

        self.inner.metrics.record_dismissed();
        tracing::debug!(session = %self.inner.session_id, "suggestions dismissed");
    }

    /// Current state for rendering
    pub fn snapshot(&self) -> SuggestionSnapshot {
        let state = self.inner.state.lock();
        SuggestionSnapshot {
            phase: state.phase,
            analysis_enabled: state.analysis_enabled,
            panel_visible: state.panel_visible,
            selected_department: state.selected_department.clone(),
            last_result: state.last_result.clone(),
        }
    }

    /// Tear the session down, cancelling any pending analysis.
    ///
    /// Also runs on drop; exposed for forms that unmount before dropping.
    pub fn dispose(&self) {
        let mut state = self.inner.state.lock();
        Inner::invalidate_pending(&mut state);
    }
}

impl Drop for SuggestionController {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl Inner {
    /// Cancel the in-flight debounce task, if any, and invalidate whatever
    /// work it may already have produced.
    fn invalidate_pending(state: &mut State) {
        state.generation = state.generation.wrapping_add(1);
        if let Some(handle) = state.pending.take() {
            handle.abort();
        }
    }

    /// Replace the debounce timer. The previous timer is always cancelled
    /// first, so at most one is ever outstanding.
    fn schedule(inner: &Arc<Inner>, state: &mut State, delay: Duration) {
        Self::invalidate_pending(state);
        state.phase = SuggestionPhase::Debouncing;

        let generation = state.generation;
        let task = tokio::spawn(Self::run_analysis(Arc::clone(inner), generation, delay));
        state.pending = Some(task);
    }

    /// The debounce task: wait out the quiet period, classify, and decide
    /// what the result is allowed to do.
    async fn run_analysis(inner: Arc<Inner>, generation: u64, delay: Duration) {
        tokio::time::sleep(delay).await;

        let draft = {
            let mut state = inner.state.lock();
            if state.generation != generation || !state.analysis_enabled {
                return;
            }
            state.phase = SuggestionPhase::Analyzing;
            state.panel_visible = true;
            ReportDraft::new(state.current_title.clone(), state.current_description.clone())
        };

        inner.metrics.record_analysis_started();
        tracing::debug!(session = %inner.session_id, "classifying report draft");

        match inner.classifier.classify(&draft).await {
            Ok(result) => {
                inner.metrics.record_analysis_completed(result.latency_us);

                // The user may have moved on while the classifier settled;
                // re-check before letting the result do anything.
                let auto_applied = {
                    let mut state = inner.state.lock();
                    if state.generation != generation || !state.analysis_enabled {
                        return;
                    }

                    state.last_analyzed_title = draft.title.clone();
                    state.last_analyzed_description = draft.description.clone();
                    state.last_result = Some(result.clone());
                    state.phase = SuggestionPhase::Suggested;
                    state.panel_visible = true;

                    Self::auto_apply_target(&inner, &mut state, &result)
                };

                inner.sink.suggestion_available(&result);
                if let Some(department) = auto_applied {
                    inner.metrics.record_auto_applied();
                    tracing::debug!(
                        session = %inner.session_id,
                        department = %department.name,
                        confidence = result.confidence,
                        "auto-applied predicted department"
                    );
                    inner.sink.auto_apply(&department);
                }
            }
            Err(e) => {
                inner.metrics.record_analysis_failed();
                tracing::warn!(
                    session = %inner.session_id,
                    error = %e,
                    "classification failed, suggestion skipped"
                );

                let mut state = inner.state.lock();
                if state.generation != generation || !state.analysis_enabled {
                    return;
                }
                state.phase = SuggestionPhase::Idle;
                state.panel_visible = false;
            }
        }
    }

    /// Decide whether the result may auto-populate the department field.
    ///
    /// Gated on confidence, an empty department field, analysis still being
    /// enabled, and the predicted name resolving in the caller-supplied
    /// catalog. The empty-field gate is what makes the write one-time: once
    /// applied (or once the user picks anything), the field is non-empty
    /// until the user clears it.
    fn auto_apply_target(
        inner: &Inner,
        state: &mut State,
        result: &Classification,
    ) -> Option<Department> {
        if result.confidence < inner.config.auto_apply_threshold {
            return None;
        }
        if state.selected_department.is_some() || !state.analysis_enabled {
            return None;
        }

        let name = result.department.as_deref()?;
        let department = match inner.departments.iter().find(|d| d.name == name) {
            Some(d) => d.clone(),
            None => {
                // Shown but never applied: the prediction names a department
                // the backend catalog does not carry.
                tracing::debug!(
                    session = %inner.session_id,
                    predicted = name,
                    "predicted department not in catalog, skipping auto-apply"
                );
                return None;
            }
        };

        state.selected_department = Some(department.id.clone());
        state.auto_applied_department = Some(department.id.clone());
        Some(department)
    }
}
