use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use solar_chart::api::{ChartConfig, ProductionChart};
use solar_chart::core::{ChartDataPoint, PlotLayout, PlotScale, project_all_series};
use solar_chart::render::{NullRenderer, svg_path_data};

fn data_strategy(max_len: usize) -> impl Strategy<Value = Vec<ChartDataPoint>> {
    triples_strategy(0.0f64..10_000.0, max_len)
}

fn signed_data_strategy(max_len: usize) -> impl Strategy<Value = Vec<ChartDataPoint>> {
    let value = prop_oneof![
        -10_000.0f64..10_000.0,
        prop::num::f64::NORMAL,
        prop::num::f64::SUBNORMAL | prop::num::f64::POSITIVE,
    ];
    triples_strategy(value, max_len)
}

fn triples_strategy<S>(value: S, max_len: usize) -> impl Strategy<Value = Vec<ChartDataPoint>>
where
    S: Strategy<Value = f64> + Clone,
{
    prop::collection::vec((value.clone(), value.clone(), value), 0..max_len).prop_map(|triples| {
        triples
            .into_iter()
            .enumerate()
            .map(|(i, (a, b, g))| ChartDataPoint::new(format!("P{i}"), a, b, g))
            .collect()
    })
}

proptest! {
    #[test]
    fn x_positions_strictly_increase(count in 2usize..200) {
        let data: Vec<ChartDataPoint> = (0..count)
            .map(|i| ChartDataPoint::new(format!("P{i}"), 1.0, 1.0, 1.0))
            .collect();
        let scale = PlotScale::from_data(PlotLayout::default(), &data);
        for i in 1..count {
            prop_assert!(scale.x_for_index(i - 1) < scale.x_for_index(i));
        }
        prop_assert!((scale.x_for_index(count - 1) - 808.0).abs() <= 1e-9);
    }

    #[test]
    fn line_paths_have_one_curve_per_gap(data in data_strategy(40)) {
        let scale = PlotScale::from_data(PlotLayout::default(), &data);
        for geometry in project_all_series(&data, scale) {
            let path = svg_path_data(&geometry.line);
            match data.len() {
                0 => prop_assert!(path.is_empty()),
                n => {
                    let first = geometry.points[0];
                    let expected_prefix = format!("M {},{}", first.x, first.y);
                    prop_assert!(path.starts_with(&expected_prefix));
                    prop_assert_eq!(path.matches(" C ").count(), n - 1);
                }
            }
        }
    }

    #[test]
    fn positive_rescaling_keeps_y_positions(
        data in data_strategy(24),
        factor in 0.001f64..1_000.0
    ) {
        let scaled: Vec<ChartDataPoint> = data.iter().map(|p| p.scaled(factor)).collect();
        let layout = PlotLayout::default();
        let original = project_all_series(&data, PlotScale::from_data(layout, &data));
        let rescaled = project_all_series(&scaled, PlotScale::from_data(layout, &scaled));

        for (left, right) in original.iter().zip(rescaled.iter()) {
            prop_assert_eq!(left.points.len(), right.points.len());
            for (a, b) in left.points.iter().zip(right.points.iter()) {
                assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-9);
                assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn nearest_index_matches_brute_force_minimum(
        data in data_strategy(32),
        pointer_x in -200.0f64..1_100.0
    ) {
        let mut chart = ProductionChart::new(NullRenderer::default(), ChartConfig::default())
            .expect("chart init");
        chart.set_data(data.clone());
        let scale = chart.scale();

        let expected = (0..data.len())
            .map(|i| (i, (scale.x_for_index(i) - pointer_x).abs()))
            .fold(None::<(usize, f64)>, |best, (i, d)| match best {
                Some((_, best_d)) if d >= best_d => best,
                _ => Some((i, d)),
            })
            .map(|(i, _)| i);

        prop_assert_eq!(chart.nearest_index(pointer_x), expected);
        chart.pointer_move(pointer_x);
        prop_assert_eq!(chart.hover_index(), expected);
        prop_assert_eq!(chart.tooltip().map(|t| t.index), expected);
    }

    #[test]
    fn every_frame_validates(data in signed_data_strategy(16), pointer_x in 0.0f64..824.0) {
        let mut chart = ProductionChart::new(NullRenderer::default(), ChartConfig::default())
            .expect("chart init");
        chart.set_data(data);
        chart.pointer_move(pointer_x);
        prop_assert!(chart.build_render_frame().validate().is_ok());
        prop_assert!(chart.render().is_ok());
    }
}
