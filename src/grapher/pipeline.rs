//! Orchestration of one plot cycle.

use crate::error::GrapherError;
use crate::grapher::config::GraphConfig;
use crate::grapher::domain::{Domain, NamedSurface, PlotSurfaces, SurfaceKind};
use crate::grapher::range_parser::parse_range;
use crate::grapher::sampler::sample;
use crate::symbolic::expression_engine::{compile, differentiate};
use log::info;

/// Turns expression text plus two range texts into the three surfaces of one
/// plot cycle. Pure computation; which surface is visible is the session's
/// business.
pub struct PlotPipeline {
    config: GraphConfig,
}

impl PlotPipeline {
    pub fn new(config: GraphConfig) -> Self {
        PlotPipeline { config }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Runs one plot cycle. Each step is a failure boundary: any error aborts
    /// the whole cycle and no partial surface set is returned.
    ///
    /// 1. both ranges are parsed and the shared domain is built, including
    ///    the cell-budget guard;
    /// 2. the user expression is compiled;
    /// 3. it is differentiated with respect to x and y;
    /// 4. both derivative texts are compiled in turn (the engine printed
    ///    them, so this should succeed, but the contract does not assume it);
    /// 5. all three evaluators are sampled over the identical grid, so the
    ///    tabs stay visually aligned.
    pub fn plot(
        &self,
        expression_text: &str,
        x_range_text: &str,
        y_range_text: &str,
    ) -> Result<PlotSurfaces, GrapherError> {
        let x = parse_range(x_range_text)?;
        let y = parse_range(y_range_text)?;
        let domain = Domain::new(x, y, self.config.step, self.config.max_cells)?;

        let original = compile(expression_text)?;
        let dx_text = differentiate(expression_text, "x")?;
        let dy_text = differentiate(expression_text, "y")?;
        let dx = compile(&dx_text)?;
        let dy = compile(&dy_text)?;
        info!("df/dx = {}", dx_text);
        info!("df/dy = {}", dy_text);

        let original_grid = sample(&original, &domain)?;
        let dx_grid = sample(&dx, &domain)?;
        let dy_grid = sample(&dy, &domain)?;

        Ok(PlotSurfaces {
            original: NamedSurface {
                kind: SurfaceKind::Original,
                grid: original_grid,
                derived_expression_text: None,
            },
            dx: NamedSurface {
                kind: SurfaceKind::Dx,
                grid: dx_grid,
                derived_expression_text: Some(dx_text),
            },
            dy: NamedSurface {
                kind: SurfaceKind::Dy,
                grid: dy_grid,
                derived_expression_text: Some(dy_text),
            },
        })
    }
}
