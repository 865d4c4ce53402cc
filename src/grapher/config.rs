//! Sampling and rendering parameters.

use crate::error::GrapherError;
use std::path::{Path, PathBuf};

/// Which render backend the session should acquire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderBackend {
    #[default]
    Plotters,
    Gnuplot,
}

/// Knobs of one grapher session. `step` is a parameter, not a constant:
/// the right resolution depends on the range width.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphConfig {
    /// sampling resolution along both axes
    pub step: f64,
    /// upper bound on Nx*Ny before sampling is refused with DomainTooLarge
    pub max_cells: usize,
    /// directory the render backends write their targets into
    pub output_dir: PathBuf,
    /// z values are clipped to this window when drawing, so a pole does not
    /// flatten the rest of the surface
    pub z_clip: (f64, f64),
    pub backend: RenderBackend,
}

impl Default for GraphConfig {
    fn default() -> Self {
        GraphConfig {
            step: 0.5,
            max_cells: 250_000,
            output_dir: PathBuf::from("plots"),
            z_clip: (-100.0, 100.0),
            backend: RenderBackend::Plotters,
        }
    }
}

impl GraphConfig {
    /// Reads overrides from a TOML document; keys not present keep their
    /// defaults. Recognized keys: step, max_cells, output_dir, z_min, z_max,
    /// backend ("plotters" or "gnuplot").
    pub fn from_toml_str(text: &str) -> Result<GraphConfig, GrapherError> {
        let table: toml::Table = text
            .parse()
            .map_err(|e: toml::de::Error| GrapherError::Config(e.to_string()))?;
        let mut config = GraphConfig::default();

        if let Some(value) = table.get("step") {
            config.step = value
                .as_float()
                .or_else(|| value.as_integer().map(|i| i as f64))
                .ok_or_else(|| GrapherError::Config("step must be a number".to_string()))?;
            if !(config.step.is_finite() && config.step > 0.0) {
                return Err(GrapherError::Config("step must be positive".to_string()));
            }
        }
        if let Some(value) = table.get("max_cells") {
            let cells = value
                .as_integer()
                .filter(|&i| i > 0)
                .ok_or_else(|| GrapherError::Config("max_cells must be a positive integer".to_string()))?;
            config.max_cells = cells as usize;
        }
        if let Some(value) = table.get("output_dir") {
            let dir = value
                .as_str()
                .ok_or_else(|| GrapherError::Config("output_dir must be a string".to_string()))?;
            config.output_dir = PathBuf::from(dir);
        }
        if let Some(value) = table.get("z_min") {
            config.z_clip.0 = value
                .as_float()
                .or_else(|| value.as_integer().map(|i| i as f64))
                .ok_or_else(|| GrapherError::Config("z_min must be a number".to_string()))?;
        }
        if let Some(value) = table.get("z_max") {
            config.z_clip.1 = value
                .as_float()
                .or_else(|| value.as_integer().map(|i| i as f64))
                .ok_or_else(|| GrapherError::Config("z_max must be a number".to_string()))?;
        }
        if config.z_clip.0 >= config.z_clip.1 {
            return Err(GrapherError::Config(
                "z_min must be below z_max".to_string(),
            ));
        }
        if let Some(value) = table.get("backend") {
            config.backend = match value.as_str() {
                Some("plotters") => RenderBackend::Plotters,
                Some("gnuplot") => RenderBackend::Gnuplot,
                _ => {
                    return Err(GrapherError::Config(
                        "backend must be 'plotters' or 'gnuplot'".to_string(),
                    ));
                }
            };
        }
        Ok(config)
    }

    pub fn from_toml_file(path: &Path) -> Result<GraphConfig, GrapherError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| GrapherError::Config(format!("{}: {}", path.display(), e)))?;
        GraphConfig::from_toml_str(&text)
    }
}
