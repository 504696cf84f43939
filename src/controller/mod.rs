//! Dashboard state machine.
//!
//! A single controller owns the view state and applies every external input
//! event as a deterministic transition, pushing fresh payloads to the view
//! and chart collaborators. The controller performs no rendering itself.
//!
//! Phases: `Loading` until the one-time dataset load completes, then `Ready`
//! for the lifetime of the session, or `Error` (terminal) if the load fails.
//! Input events arriving outside `Ready` are ignored and logged.

#![allow(missing_docs)]

use crate::chart::{ChartMode, ChartSeries, build_series};
use crate::core::config::DashboardConfig;
use crate::core::errors::Result;
use crate::logger::{EventLog, EventType, LogEntry, Severity};
use crate::query::{SortKey, filter_records, paginate, sort_records, summarize};
use crate::store::{DatasetSnapshot, Record, RecordStore};
use crate::viewmodel::{PageView, StatsView};

/// Lifecycle phase of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before the initial dataset load completes.
    Loading,
    /// Normal operation; every input event transitions back to `Ready`.
    Ready,
    /// Terminal: the load failed and no retry is built into the core.
    Error,
}

/// Mutable per-session view state, owned exclusively by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub sort_key: SortKey,
    /// 1-based; always within `[1, total_pages]` of the filtered view.
    pub current_page: usize,
    pub page_size: usize,
    pub chart_mode: ChartMode,
    /// Applied to the raw count-sorted dataset, independent of the filter.
    pub chart_limit: usize,
}

impl ViewState {
    /// Session defaults, honoring configured page size and chart settings.
    #[must_use]
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            search_term: String::new(),
            sort_key: SortKey::new(config.view.sort_field, config.view.sort_direction),
            current_page: 1,
            page_size: config.view.page_size,
            chart_mode: config.chart.mode,
            chart_limit: config.chart.limit,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

/// Typed external input events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    SearchChanged(String),
    SortChanged(SortKey),
    PrevPage,
    NextPage,
    ChartSelected { mode: ChartMode, limit: usize },
    /// Container resize: the last computed series is re-issued unchanged.
    ContainerResized,
}

/// Which surfaces a transition re-rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderPlan {
    pub stats: bool,
    pub list: bool,
    pub chart: bool,
    pub error: bool,
}

impl RenderPlan {
    #[must_use]
    pub const fn none() -> Self {
        Self {
            stats: false,
            list: false,
            chart: false,
            error: false,
        }
    }

    #[must_use]
    pub const fn any(&self) -> bool {
        self.stats || self.list || self.chart || self.error
    }
}

/// External view collaborator: renders list pages, stats, and the error
/// surface. Receives already-escaped text.
pub trait ViewSink {
    fn show_list(&mut self, view: &PageView);
    fn show_stats(&mut self, stats: &StatsView);
    fn show_error(&mut self, message: &str);
}

/// External chart collaborator: draws a declarative series.
pub trait ChartSink {
    fn draw(&mut self, series: &ChartSeries);
}

/// Orchestrates the data pipeline in response to input events.
pub struct DashboardController<V, C> {
    store: RecordStore,
    /// Configured session defaults, restored on every successful load.
    defaults: ViewState,
    state: ViewState,
    phase: Phase,
    /// Derived view: subset of raw determined by `search_term`, ordered by
    /// `sort_key`. Re-derived whenever either input changes.
    filtered: Vec<Record>,
    last_series: Option<ChartSeries>,
    view: V,
    chart: C,
    log: EventLog,
}

impl<V: ViewSink, C: ChartSink> DashboardController<V, C> {
    /// Create a controller in the `Loading` phase.
    #[must_use]
    pub fn new(config: &DashboardConfig, view: V, chart: C, log: EventLog) -> Self {
        let defaults = ViewState::from_config(config);
        Self {
            store: RecordStore::new(),
            state: defaults.clone(),
            defaults,
            phase: Phase::Loading,
            filtered: Vec::new(),
            last_series: None,
            view,
            chart,
            log,
        }
    }

    /// Feed the outcome of the asynchronous dataset load.
    ///
    /// On success the snapshot replaces the store contents wholesale, the
    /// default derived view is computed, and stats, list, and chart are all
    /// pushed. On failure the controller enters the terminal `Error` phase
    /// and only the error surface is rendered — data views stay zeroed.
    pub fn complete_load(&mut self, outcome: Result<DatasetSnapshot>) -> RenderPlan {
        if self.phase == Phase::Error {
            self.log.append(
                &LogEntry::new(EventType::InputIgnored, Severity::Warning)
                    .details("load outcome ignored: controller already in terminal error phase"),
            );
            return RenderPlan::none();
        }
        match outcome {
            Ok(snapshot) => {
                self.log.append(
                    &LogEntry::new(EventType::DatasetLoaded, Severity::Info)
                        .record_count(snapshot.len()),
                );
                self.store.replace(snapshot);
                self.phase = Phase::Ready;
                self.state = self.defaults.clone();
                self.refresh_filtered();
                self.push_stats();
                self.push_list();
                self.push_chart();
                RenderPlan {
                    stats: true,
                    list: true,
                    chart: true,
                    error: false,
                }
            }
            Err(err) => {
                self.log.append(
                    &LogEntry::new(EventType::LoadFailed, Severity::Critical)
                        .error_code(err.code())
                        .details(err.to_string()),
                );
                self.phase = Phase::Error;
                self.view.show_error(&err.to_string());
                RenderPlan {
                    stats: false,
                    list: false,
                    chart: false,
                    error: true,
                }
            }
        }
    }

    /// Apply one input event. Events outside `Ready` are ignored (and
    /// logged), not queued.
    pub fn handle(&mut self, event: InputEvent) -> RenderPlan {
        if self.phase != Phase::Ready {
            self.log.append(
                &LogEntry::new(EventType::InputIgnored, Severity::Warning)
                    .details(format!("{event:?} ignored in phase {:?}", self.phase)),
            );
            return RenderPlan::none();
        }
        let mut plan = RenderPlan::none();
        match event {
            InputEvent::SearchChanged(term) => {
                self.state.search_term = term;
                self.state.current_page = 1;
                self.refresh_filtered();
                self.push_list();
                plan.list = true;
            }
            InputEvent::SortChanged(key) => {
                self.state.sort_key = key;
                self.state.current_page = 1;
                sort_records(&mut self.filtered, key);
                self.push_list();
                plan.list = true;
                // The chart ranks the raw dataset, so this recompute yields
                // the same series; the original surface re-drew here and the
                // obligation is kept.
                self.push_chart();
                plan.chart = true;
            }
            InputEvent::PrevPage => {
                if self.state.current_page > 1 {
                    self.state.current_page -= 1;
                    self.push_list();
                    plan.list = true;
                }
            }
            InputEvent::NextPage => {
                if self.state.current_page < self.total_pages() {
                    self.state.current_page += 1;
                    self.push_list();
                    plan.list = true;
                }
            }
            InputEvent::ChartSelected { mode, limit } => {
                self.state.chart_mode = mode;
                self.state.chart_limit = limit;
                self.push_chart();
                plan.chart = true;
            }
            InputEvent::ContainerResized => {
                if let Some(series) = self.last_series.clone() {
                    self.chart.draw(&series);
                    plan.chart = true;
                }
            }
        }
        plan
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn state(&self) -> &ViewState {
        &self.state
    }

    /// The current filtered/sorted derived view.
    #[must_use]
    pub fn filtered(&self) -> &[Record] {
        &self.filtered
    }

    /// The series most recently handed to the chart collaborator.
    #[must_use]
    pub const fn last_series(&self) -> Option<&ChartSeries> {
        self.last_series.as_ref()
    }

    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    #[must_use]
    pub const fn chart(&self) -> &C {
        &self.chart
    }

    #[must_use]
    pub const fn log(&self) -> &EventLog {
        &self.log
    }

    /// Re-derive the filtered view from the raw snapshot and current state.
    fn refresh_filtered(&mut self) {
        let mut filtered =
            filter_records(self.store.snapshot().records(), &self.state.search_term);
        sort_records(&mut filtered, self.state.sort_key);
        self.filtered = filtered;
    }

    fn total_pages(&self) -> usize {
        self.filtered
            .len()
            .div_ceil(self.state.page_size.max(1))
            .max(1)
    }

    fn push_stats(&mut self) {
        let summary = summarize(self.store.snapshot().records());
        self.view.show_stats(&StatsView::from_summary(&summary));
    }

    fn push_list(&mut self) {
        let page = paginate(
            &self.filtered,
            self.state.current_page,
            self.state.page_size,
        );
        // Write back the clamped page so the invariant holds even when the
        // filtered view shrank underneath the current page.
        self.state.current_page = page.page;
        let payload = PageView::from_page(&page);
        self.view.show_list(&payload);
    }

    fn push_chart(&mut self) {
        let series = build_series(
            self.store.snapshot().records(),
            self.state.chart_limit,
            self.state.chart_mode,
        );
        if series.degraded {
            self.log.append(
                &LogEntry::new(EventType::ChartFallback, Severity::Warning).details(format!(
                    "{:?} unavailable; rendering {:?} over {} records",
                    series.requested,
                    series.display,
                    series.len()
                )),
            );
        }
        self.last_series = Some(series.clone());
        self.chart.draw(&series);
    }
}

/// Drop-in sinks for callers that only need part of the surface.
pub mod null_sinks {
    use super::{ChartSeries, ChartSink, PageView, StatsView, ViewSink};

    /// Discards every view payload.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct NullView;

    impl ViewSink for NullView {
        fn show_list(&mut self, _view: &PageView) {}
        fn show_stats(&mut self, _stats: &StatsView) {}
        fn show_error(&mut self, _message: &str) {}
    }

    /// Discards every chart series.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct NullChart;

    impl ChartSink for NullChart {
        fn draw(&mut self, _series: &ChartSeries) {}
    }
}
