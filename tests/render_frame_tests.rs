use solar_chart::api::{ChartConfig, ProductionChart, default_quarterly_chart_data};
use solar_chart::core::ChartDataPoint;
use solar_chart::render::{Fill, NullRenderer, Renderer, TextHAlign};

fn quarterly_chart() -> ProductionChart<NullRenderer> {
    let mut chart =
        ProductionChart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init");
    chart.set_data(default_quarterly_chart_data());
    chart
}

#[test]
fn frame_contains_grid_labels_and_series_paths() {
    let chart = quarterly_chart();
    let frame = chart.build_render_frame();
    frame.validate().expect("valid frame");

    assert_eq!(frame.viewport.width, 824.0);
    assert_eq!(frame.viewport.height, 316.0);
    assert_eq!(frame.lines.len(), 6);
    assert_eq!(frame.paths.len(), 6);
    assert!(frame.guides.is_empty());
    assert!(frame.circles.is_empty());

    let tick_labels: Vec<&str> = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Right)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(
        tick_labels,
        vec!["5,600", "4,480", "3,360", "2,240", "1,120", "0"]
    );

    let period_labels: Vec<&str> = frame
        .texts
        .iter()
        .filter(|text| text.h_align == TextHAlign::Center)
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(period_labels, vec!["Q1", "Q2", "Q3", "Q4"]);
    assert!(frame.texts.iter().all(|text| text.font_size_px == 10.0));
}

#[test]
fn grid_lines_span_plot_between_paddings() {
    let frame = quarterly_chart().build_render_frame();
    for line in &frame.lines {
        assert_eq!(line.x1, 48.0);
        assert_eq!(line.x2, 808.0);
        assert_eq!(line.y1, line.y2);
        assert_eq!(line.dash.as_slice(), &[2.0, 3.0]);
    }
    assert_eq!(frame.lines[0].y1, 16.0);
    assert_eq!(frame.lines[5].y1, 276.0);
}

#[test]
fn each_series_draws_gradient_area_under_its_line() {
    let chart = quarterly_chart();
    let frame = chart.build_render_frame();

    for (pair, descriptor) in frame.paths.chunks(2).zip(&chart.config().series) {
        let (area, line) = (&pair[0], &pair[1]);
        assert_eq!(
            area.fill,
            Some(Fill::VerticalGradient {
                color: descriptor.color,
                top_opacity: 0.25,
                bottom_opacity: 0.0,
            })
        );
        assert!(area.stroke.is_none());
        let stroke = line.stroke.expect("line stroke");
        assert_eq!(stroke.color, descriptor.color);
        assert_eq!(stroke.width, 2.0);
        assert!(line.fill.is_none());
    }
}

#[test]
fn hover_adds_guide_line_and_markers() {
    let mut chart = quarterly_chart();
    chart.pointer_move(560.0);
    let frame = chart.build_render_frame();
    frame.validate().expect("valid frame");

    assert_eq!(frame.guides.len(), 1);
    let guide = &frame.guides[0];
    let x = chart.scale().x_for_index(2);
    assert_eq!(guide.x1, x);
    assert_eq!(guide.x2, x);
    assert_eq!(guide.y1, 16.0);
    assert_eq!(guide.y2, 276.0);
    assert_eq!(guide.dash.as_slice(), &[4.0, 2.0]);
    assert_eq!(guide.opacity, 0.6);

    assert_eq!(frame.circles.len(), 3);
    let point = &chart.data()[2];
    for (circle, descriptor) in frame.circles.iter().zip(&chart.config().series) {
        assert_eq!(circle.center.x, x);
        assert_eq!(
            circle.center.y,
            chart.scale().y_for_value(descriptor.key.value_of(point))
        );
        assert_eq!(circle.radius, 6.0);
        assert_eq!(circle.stroke.color, descriptor.color);
        assert_eq!(circle.stroke.width, 3.0);
    }
}

#[test]
fn degenerate_data_still_renders() {
    let mut chart =
        ProductionChart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init");
    chart.set_data(vec![
        ChartDataPoint::new("a", 0.0, 0.0, 0.0),
        ChartDataPoint::new("", 0.0, 0.0, 0.0),
    ]);
    chart.pointer_move(10.0);

    let frame = chart.build_render_frame();
    frame.validate().expect("valid degenerate frame");
    assert_eq!(frame.lines.len(), 1);
    // One tick label plus one period label; the empty period is skipped.
    assert_eq!(frame.texts.len(), 2);
    assert_eq!(frame.paths.len(), 6);

    let mut renderer = NullRenderer::default();
    renderer.render(&frame).expect("render");
    assert_eq!(renderer.last_circle_count, 3);
}

#[test]
fn extreme_finite_values_still_render() {
    let mut chart =
        ProductionChart::new(NullRenderer::default(), ChartConfig::default()).expect("chart init");
    chart.set_data(vec![
        ChartDataPoint::new("a", 1e-300, 0.0, 0.0),
        ChartDataPoint::new("b", -1e10, 0.0, 0.0),
    ]);
    chart.pointer_move(808.0);

    for series in chart.series_paths() {
        assert!(!series.line.contains("inf"));
        assert!(!series.line.contains("NaN"));
        assert!(!series.area.contains("inf"));
        assert!(!series.area.contains("NaN"));
    }
    chart.build_render_frame().validate().expect("valid frame");
    chart.render().expect("render");
    assert_eq!(chart.renderer().render_count, 1);
    assert!(chart.tooltip().is_some_and(|tooltip| tooltip.anchor_y.is_finite()));
}
