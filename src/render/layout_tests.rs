use super::*;
use crate::ir::Meta;

fn default_plot(with_legend: bool) -> PlotArea {
    PlotArea::for_canvas(&RenderOptions::default(), with_legend).unwrap()
}

mod plot_area_tests {
    use super::*;

    #[test]
    fn default_canvas_geometry() {
        let plot = default_plot(false);
        assert!((plot.left - 60.0).abs() < f64::EPSILON);
        assert!((plot.right - 440.0).abs() < f64::EPSILON);
        assert!((plot.bottom - 240.0).abs() < f64::EPSILON);
        assert!((plot.height() - 150.0).abs() < f64::EPSILON);
    }

    #[test]
    fn legend_band_shrinks_plot() {
        let plain = default_plot(false);
        let legend = default_plot(true);
        assert!((plain.height() - legend.height() - LEGEND_BAND).abs() < f64::EPSILON);
        assert!((plain.bottom - legend.bottom).abs() < f64::EPSILON);
    }

    #[test]
    fn tiny_canvas_is_rejected() {
        let options = RenderOptions::default().with_size(100.0, 100.0);
        let err = PlotArea::for_canvas(&options, false).unwrap_err();
        assert!(matches!(err, RenderError::CanvasTooSmall { .. }));
    }

    #[test]
    fn negative_values_clamp_to_baseline() {
        let plot = default_plot(false);
        assert!((plot.y_for(-10.0, 100.0) - plot.bottom).abs() < f64::EPSILON);
        assert!((plot.y_for(100.0, 100.0) - plot.top).abs() < f64::EPSILON);
    }
}

mod validation_tests {
    use super::*;

    #[test]
    fn scale_max_requires_positive_values() {
        assert!((scale_max(ChartType::Bar, [1.0, 5.0, 3.0]).unwrap() - 5.0).abs() < f64::EPSILON);
        assert!(matches!(
            scale_max(ChartType::Bar, [0.0, -2.0]),
            Err(RenderError::NonPositiveScale { .. })
        ));
        assert!(scale_max(ChartType::Line, []).is_err());
    }

    #[test]
    fn check_lengths_detects_mismatch() {
        let ir = Ir::new(ChartType::Bar, vec!["A".into(), "B".into()], vec![1.0]);
        assert_eq!(
            check_lengths(&ir),
            Err(RenderError::MismatchedLengths {
                chart: ChartType::Bar,
                labels: 2,
                values: 1
            })
        );
    }

    #[test]
    fn check_lengths_detects_empty() {
        let ir = Ir::new(ChartType::Pie, Vec::new(), Vec::new());
        assert_eq!(
            check_lengths(&ir),
            Err(RenderError::NoData {
                chart: ChartType::Pie
            })
        );
    }

    #[test]
    fn start_document_rejects_zero_width() {
        let ir = Ir::default();
        let options = RenderOptions::default().with_size(0.0, 300.0);
        assert!(start_document(&ir, &options).is_err());
    }
}

mod frame_tests {
    use super::*;

    #[test]
    fn title_is_drawn_and_accessible() {
        let ir = Ir::default().with_title("Sales");
        let svg = start_document(&ir, &RenderOptions::default()).unwrap().build();
        assert!(svg.contains("<title>Sales</title>"));
        assert!(svg.contains(r#"font-weight="bold">Sales</text>"#));
    }

    #[test]
    fn empty_title_draws_nothing() {
        let ir = Ir::default().with_title("");
        let svg = start_document(&ir, &RenderOptions::default()).unwrap().build();
        assert!(!svg.contains("<title>"));
        assert!(!svg.contains("font-weight=\"bold\""));
    }

    #[test]
    fn gridlines_are_labelled_in_quarters() {
        let mut builder = SvgBuilder::new(500.0, 300.0);
        draw_gridlines(&mut builder, &default_plot(false), 200.0, &RenderOptions::default());
        let svg = builder.build();
        assert_eq!(svg.matches("stroke-dasharray").count(), 4);
        for tick in [">50<", ">100<", ">150<", ">200<"] {
            assert!(svg.contains(tick), "missing tick {tick}");
        }
    }

    #[test]
    fn legend_is_centred() {
        let mut builder = SvgBuilder::new(500.0, 300.0);
        let entries = [("2023", "#111"), ("2024", "#222")];
        draw_legend(&mut builder, entries.into_iter(), &RenderOptions::default());
        let svg = builder.build();
        // (500 - 2 * 80) / 2 = 170
        assert!(svg.contains(r#"x="170" y="37""#));
        assert!(svg.contains(r#"x="266""#));
        assert!(svg.contains(">2024</text>"));
    }

    #[test]
    fn axis_captions_follow_meta() {
        let ir = Ir::default().with_meta(Meta {
            x_axis: Some("Quarter".into()),
            y_axis: Some("Revenue ($)".into()),
            ..Meta::default()
        });
        let mut builder = SvgBuilder::new(500.0, 300.0);
        draw_axis_captions(&mut builder, &ir, &default_plot(false), &RenderOptions::default());
        let svg = builder.build();
        assert!(svg.contains(">Quarter</text>"));
        assert!(svg.contains("rotate(-90"));
        assert!(svg.contains(">Revenue ($)</text>"));
    }

    #[test]
    fn no_captions_without_meta() {
        let mut builder = SvgBuilder::new(500.0, 300.0);
        draw_axis_captions(&mut builder, &Ir::default(), &default_plot(false), &RenderOptions::default());
        assert!(!builder.build().contains("<text"));
    }
}
