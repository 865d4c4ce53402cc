//! Lazy acquisition of a render backend.
//!
//! Acquisition creates the output directory and constructs the backend once;
//! the result is cached for the remainder of the session. Calling `acquire`
//! again returns the cached backend. A failed acquisition is not cached, so
//! a later call retries.

use crate::error::GrapherError;
use crate::grapher::config::{GraphConfig, RenderBackend};
use crate::render::frame::SurfaceRenderer;
use crate::render::gnuplot3d::GnuplotSurface;
use crate::render::plotters3d::PlottersSurface;
use log::debug;

pub type RendererFactory = Box<dyn Fn() -> Result<Box<dyn SurfaceRenderer>, GrapherError>>;

pub struct RenderRuntime {
    factory: RendererFactory,
    renderer: Option<Box<dyn SurfaceRenderer>>,
}

impl RenderRuntime {
    /// A runtime around an arbitrary factory; tests inject recording
    /// renderers this way.
    pub fn new(factory: RendererFactory) -> Self {
        RenderRuntime {
            factory,
            renderer: None,
        }
    }

    /// The runtime for the backend the configuration names.
    pub fn from_config(config: &GraphConfig) -> Self {
        let output_dir = config.output_dir.clone();
        match config.backend {
            RenderBackend::Plotters => RenderRuntime::new(Box::new(move || {
                std::fs::create_dir_all(&output_dir)
                    .map_err(|e| GrapherError::RenderFailed(e.to_string()))?;
                debug!("acquired plotters backend, output in {:?}", output_dir);
                Ok(Box::new(PlottersSurface::new(output_dir.clone())) as Box<dyn SurfaceRenderer>)
            })),
            RenderBackend::Gnuplot => RenderRuntime::new(Box::new(move || {
                std::fs::create_dir_all(&output_dir)
                    .map_err(|e| GrapherError::RenderFailed(e.to_string()))?;
                debug!("acquired gnuplot backend, output in {:?}", output_dir);
                Ok(Box::new(GnuplotSurface::new(output_dir.clone())) as Box<dyn SurfaceRenderer>)
            })),
        }
    }

    /// Returns the backend, acquiring it on first use.
    pub fn acquire(&mut self) -> Result<&dyn SurfaceRenderer, GrapherError> {
        if self.renderer.is_none() {
            self.renderer = Some((self.factory)()?);
        }
        match self.renderer.as_deref() {
            Some(renderer) => Ok(renderer),
            None => unreachable!("renderer was just stored"),
        }
    }
}
