#[cfg(test)]
mod tests {
    use crate::error::GrapherError;
    use crate::grapher::config::GraphConfig;
    use crate::grapher::pipeline::PlotPipeline;
    use approx::assert_relative_eq;

    fn pipeline() -> PlotPipeline {
        PlotPipeline::new(GraphConfig::default())
    }

    #[test]
    fn test_paraboloid_derivative_grids_match_2x_and_2y() {
        let surfaces = pipeline().plot("x^2 + y^2", "-1,1", "-1,1").unwrap();

        // identical grid across all three surfaces
        let xs = &surfaces.original.grid.xs;
        let ys = &surfaces.original.grid.ys;
        assert_eq!(xs, &vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
        for named in surfaces.iter() {
            assert_eq!(&named.grid.xs, xs);
            assert_eq!(&named.grid.ys, ys);
        }

        for (i, &x) in xs.iter().enumerate() {
            for (j, &y) in ys.iter().enumerate() {
                assert_relative_eq!(
                    surfaces.original.grid.z[(i, j)],
                    x * x + y * y,
                    epsilon = 1e-12
                );
                assert_relative_eq!(surfaces.dx.grid.z[(i, j)], 2.0 * x, epsilon = 1e-12);
                assert_relative_eq!(surfaces.dy.grid.z[(i, j)], 2.0 * y, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_derivative_texts_are_carried_for_display() {
        let surfaces = pipeline().plot("x^2 + y^2", "-1,1", "-1,1").unwrap();
        assert_eq!(surfaces.original.derived_expression_text, None);
        assert!(surfaces.dx.derived_expression_text.is_some());
        assert!(surfaces.dy.derived_expression_text.is_some());
    }

    #[test]
    fn test_pole_becomes_nan_without_aborting() {
        let surfaces = pipeline().plot("1/x", "-1,1", "-1,1").unwrap();
        // the x = 0 row cannot be evaluated
        assert!(surfaces.original.grid.nan_count() >= 1);
        assert!(surfaces.original.grid.z[(2, 0)].is_nan());
        assert!(surfaces.original.grid.z[(0, 0)].is_finite());
    }

    #[test]
    fn test_invalid_expression_aborts_the_cycle() {
        let err = pipeline().plot("x +* y", "-1,1", "-1,1").unwrap_err();
        assert!(matches!(err, GrapherError::InvalidExpression(_)));
    }

    #[test]
    fn test_bad_range_aborts_before_any_compilation() {
        let err = pipeline().plot("x^2", "1;2", "-1,1").unwrap_err();
        assert!(matches!(err, GrapherError::InvalidRangeFormat(_)));
        let err = pipeline().plot("x^2", "-1,1", "2,1").unwrap_err();
        assert!(matches!(err, GrapherError::InvalidRangeValue(_)));
    }

    #[test]
    fn test_oversized_domain_is_refused() {
        let mut config = GraphConfig::default();
        config.max_cells = 16;
        let err = PlotPipeline::new(config)
            .plot("x + y", "0,10", "0,10")
            .unwrap_err();
        assert!(matches!(err, GrapherError::DomainTooLarge { .. }));
    }

    #[test]
    fn test_step_is_configurable() {
        let mut config = GraphConfig::default();
        config.step = 0.2;
        let surfaces = PlotPipeline::new(config)
            .plot("x * y", "0,1", "0,1")
            .unwrap();
        assert_eq!(surfaces.original.grid.xs.len(), 6);
    }

    #[test]
    fn test_transcendental_surface() {
        let surfaces = pipeline().plot("sin(x) * cos(y)", "0,1", "0,1").unwrap();
        let dx = &surfaces.dx.grid;
        for (i, &x) in dx.xs.iter().enumerate() {
            for (j, &y) in dx.ys.iter().enumerate() {
                assert_relative_eq!(dx.z[(i, j)], x.cos() * y.cos(), epsilon = 1e-10);
            }
        }
    }
}
