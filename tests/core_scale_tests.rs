use approx::assert_abs_diff_eq;
use solar_chart::core::{ChartDataPoint, PlotLayout, PlotScale};

fn two_points() -> Vec<ChartDataPoint> {
    vec![
        ChartDataPoint::new("W1", 10.0, 20.0, 15.0),
        ChartDataPoint::new("W2", 30.0, 25.0, 28.0),
    ]
}

#[test]
fn default_layout_matches_logical_view_box() {
    let layout = PlotLayout::default();
    assert_eq!(layout.width(), 824.0);
    assert_eq!(layout.height(), 316.0);
    assert_eq!(layout.center_x(), 428.0);
    assert_eq!(layout.baseline_y(), 276.0);
}

#[test]
fn layout_rejects_non_positive_inner_size() {
    assert!(PlotLayout::new(48.0, 16.0, 16.0, 40.0, 0.0, 260.0).is_err());
    assert!(PlotLayout::new(48.0, 16.0, 16.0, 40.0, 760.0, f64::NAN).is_err());
    assert!(PlotLayout::new(-1.0, 16.0, 16.0, 40.0, 760.0, 260.0).is_err());
    assert!(PlotLayout::new(0.0, 0.0, 0.0, 0.0, 100.0, 50.0).is_ok());
}

#[test]
fn max_value_spans_all_series() {
    let scale = PlotScale::from_data(PlotLayout::default(), &two_points());
    assert_eq!(scale.max_value(), Some(30.0));
    assert!(!scale.is_degenerate());

    let data = vec![ChartDataPoint::new("Q1", 1.0, 2.0, 9.0)];
    let scale = PlotScale::from_data(PlotLayout::default(), &data);
    assert_eq!(scale.max_value(), Some(9.0));
}

#[test]
fn x_positions_interpolate_across_inner_width() {
    let scale = PlotScale::from_data(PlotLayout::default(), &two_points());
    assert_eq!(scale.x_for_index(0), 48.0);
    assert_eq!(scale.x_for_index(1), 808.0);
}

#[test]
fn single_point_sits_at_plot_center() {
    let data = vec![ChartDataPoint::new("Q1", 10.0, 20.0, 5.0)];
    let scale = PlotScale::from_data(PlotLayout::default(), &data);
    assert_eq!(scale.x_for_index(0), PlotLayout::default().center_x());
}

#[test]
fn y_maps_zero_to_baseline_and_max_to_top_padding() {
    let scale = PlotScale::from_data(PlotLayout::default(), &two_points());
    assert_eq!(scale.y_for_value(0.0), 276.0);
    assert_abs_diff_eq!(scale.y_for_value(30.0), 16.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.y_for_value(10.0), 276.0 - 260.0 / 3.0, epsilon = 1e-9);
}

#[test]
fn degenerate_scales_flatten_to_baseline() {
    let layout = PlotLayout::default();

    let empty = PlotScale::from_data(layout, &[]);
    assert_eq!(empty.max_value(), None);
    assert!(empty.is_degenerate());
    assert_eq!(empty.y_for_value(42.0), 276.0);

    let zeros = vec![
        ChartDataPoint::new("a", 0.0, 0.0, 0.0),
        ChartDataPoint::new("b", 0.0, 0.0, 0.0),
    ];
    let zero_scale = PlotScale::from_data(layout, &zeros);
    assert_eq!(zero_scale.max_value(), Some(0.0));
    assert!(zero_scale.is_degenerate());
    assert_eq!(zero_scale.y_for_value(0.0), 276.0);

    let negatives = vec![ChartDataPoint::new("a", -5.0, -1.0, -3.0)];
    let negative_scale = PlotScale::from_data(layout, &negatives);
    assert!(negative_scale.is_degenerate());
    assert_eq!(negative_scale.y_for_value(-5.0), 276.0);
}

#[test]
fn non_finite_values_are_ignored_for_max_and_drawn_on_baseline() {
    let data = vec![
        ChartDataPoint::new("a", f64::NAN, 10.0, f64::INFINITY),
        ChartDataPoint::new("b", 5.0, 20.0, 1.0),
    ];
    let scale = PlotScale::from_data(PlotLayout::default(), &data);
    assert_eq!(scale.max_value(), Some(20.0));
    assert_eq!(scale.y_for_value(f64::NAN), 276.0);
}

#[test]
fn nearest_index_resolves_pointer_at_first_point() {
    let scale = PlotScale::from_data(PlotLayout::default(), &two_points());
    assert_eq!(scale.nearest_index(scale.x_for_index(0)), Some(0));
    assert_eq!(scale.nearest_index(807.0), Some(1));
}

#[test]
fn nearest_index_clamps_outside_pointers_to_endpoints() {
    let scale = PlotScale::from_data(PlotLayout::default(), &two_points());
    assert_eq!(scale.nearest_index(-500.0), Some(0));
    assert_eq!(scale.nearest_index(5_000.0), Some(1));
}

#[test]
fn nearest_index_tie_prefers_lower_index() {
    let scale = PlotScale::from_data(PlotLayout::default(), &two_points());
    assert_eq!(scale.nearest_index(428.0), Some(0));
}

#[test]
fn nearest_index_on_empty_data_is_none() {
    let scale = PlotScale::from_data(PlotLayout::default(), &[]);
    assert_eq!(scale.nearest_index(100.0), None);
}

#[test]
fn tiny_max_with_large_negative_value_stays_finite() {
    let data = vec![
        ChartDataPoint::new("a", 1e-300, 0.0, 0.0),
        ChartDataPoint::new("b", -1e10, 0.0, 0.0),
    ];
    let scale = PlotScale::from_data(PlotLayout::default(), &data);
    assert!(!scale.is_degenerate());
    assert_eq!(scale.y_for_value(1e-300), 16.0);

    let y = scale.y_for_value(-1e10);
    assert!(y.is_finite());
    assert!(y > scale.baseline_y());
    assert_eq!(y, scale.y_for_value(f64::MIN));
}
