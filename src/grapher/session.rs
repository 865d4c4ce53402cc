//! Per-session state and the tab controller.
//!
//! The session is the single source of truth for which surface is visible
//! and for when recomputation happens: a plot cycle runs only on an explicit
//! plot request (expression or ranges changed and the user acted), never on
//! a tab switch. All three surfaces come out of one cycle, so a tab switch
//! only renders the pre-computed grid for that tab - at most once per plot
//! generation - and an early switch before any successful plot just shows an
//! empty target.

use crate::error::GrapherError;
use crate::grapher::config::GraphConfig;
use crate::grapher::domain::{PlotSurfaces, SurfaceKind};
use crate::grapher::pipeline::PlotPipeline;
use crate::render::frame::{ColorScheme, RenderFrame};
use crate::render::runtime::RenderRuntime;
use log::info;

/// The mutable inputs and the last failure of one grapher session. Created
/// empty on session start, mutated only by user input and plot attempts,
/// dropped with the session.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotState {
    pub expression_text: String,
    pub x_range_text: String,
    pub y_range_text: String,
    pub active_tab: SurfaceKind,
    pub last_error: Option<String>,
}

impl Default for PlotState {
    fn default() -> Self {
        PlotState {
            expression_text: String::new(),
            x_range_text: String::new(),
            y_range_text: String::new(),
            active_tab: SurfaceKind::Original,
            last_error: None,
        }
    }
}

pub struct GraphSession {
    state: PlotState,
    pipeline: PlotPipeline,
    runtime: RenderRuntime,
    surfaces: Option<PlotSurfaces>,
    /// kinds already drawn for the current plot generation
    drawn: Vec<SurfaceKind>,
}

impl GraphSession {
    pub fn new(config: GraphConfig) -> Self {
        let runtime = RenderRuntime::from_config(&config);
        GraphSession::with_runtime(config, runtime)
    }

    /// Session with an injected render runtime (used by the tests).
    pub fn with_runtime(config: GraphConfig, runtime: RenderRuntime) -> Self {
        GraphSession {
            state: PlotState::default(),
            pipeline: PlotPipeline::new(config),
            runtime,
            surfaces: None,
            drawn: Vec::new(),
        }
    }

    pub fn state(&self) -> &PlotState {
        &self.state
    }

    pub fn surfaces(&self) -> Option<&PlotSurfaces> {
        self.surfaces.as_ref()
    }

    pub fn set_expression(&mut self, text: &str) {
        self.state.expression_text = text.trim().to_string();
    }

    pub fn set_x_range(&mut self, text: &str) {
        self.state.x_range_text = text.trim().to_string();
    }

    pub fn set_y_range(&mut self, text: &str) {
        self.state.y_range_text = text.trim().to_string();
    }

    /// Runs one plot cycle over the current state. On success the three new
    /// surfaces replace the previous generation and the active tab is drawn
    /// eagerly; the other two wait for their first selection. On failure the
    /// previous surfaces and their rendered targets stay untouched and the
    /// error is recorded in the state.
    pub fn request_plot(&mut self) -> Result<(), GrapherError> {
        let result = self.pipeline.plot(
            &self.state.expression_text,
            &self.state.x_range_text,
            &self.state.y_range_text,
        );
        let surfaces = match result {
            Ok(surfaces) => surfaces,
            Err(e) => {
                self.state.last_error = Some(e.to_string());
                return Err(e);
            }
        };
        self.state.last_error = None;
        self.surfaces = Some(surfaces);
        self.drawn.clear();
        info!("plot cycle complete, drawing tab '{}'", self.state.active_tab);
        if let Err(e) = self.render(self.state.active_tab) {
            self.state.last_error = Some(e.to_string());
            return Err(e);
        }
        Ok(())
    }

    /// Activates a tab. Never recomputes; at most renders the cached surface
    /// for that tab if it has not been drawn in this generation yet.
    pub fn select_tab(&mut self, kind: SurfaceKind) -> Result<(), GrapherError> {
        self.state.active_tab = kind;
        self.render(kind)
    }

    fn render(&mut self, kind: SurfaceKind) -> Result<(), GrapherError> {
        let Some(surfaces) = self.surfaces.as_ref() else {
            return Ok(());
        };
        if self.drawn.contains(&kind) {
            return Ok(());
        }
        let named = surfaces.surface(kind);
        let title = match &named.derived_expression_text {
            Some(text) => format!("{}: {}", kind.title(), text),
            None => kind.title().to_string(),
        };
        let frame = RenderFrame {
            target_id: kind.target_id(),
            title,
            color: ColorScheme::for_kind(kind),
            grid: &named.grid,
            z_clip: self.pipeline.config().z_clip,
        };
        self.runtime.acquire()?.draw(&frame)?;
        self.drawn.push(kind);
        Ok(())
    }
}
