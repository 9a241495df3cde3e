use std::collections::HashMap;
use std::fmt::Write;
use std::io::Cursor;

use proptest::prelude::*;
use svgchart::chart::{ChartGeometry, ChartKind, layout};
use svgchart::data::DataSet;
use svgchart::parse::Aggregator;

fn totals(data: &[DataSet]) -> HashMap<String, f64> {
    data.iter()
        .map(|set| (set.name().unwrap_or_default().to_string(), set.points()[0][0]))
        .collect()
}

fn render_pairs(records: &[(String, u16)]) -> String {
    let mut input = String::new();
    for (key, value) in records {
        let _ = writeln!(input, "{key},{value}");
    }
    input
}

proptest! {
    #[test]
    fn record_order_does_not_change_totals(
        records in prop::collection::vec(("[a-e]{1,3}", 0u16..1000), 1..40)
    ) {
        let aggregator = Aggregator::new();
        let forward = aggregator.aggregate(Cursor::new(render_pairs(&records))).expect("forward");

        let mut reversed = records.clone();
        reversed.reverse();
        let backward = aggregator.aggregate(Cursor::new(render_pairs(&reversed))).expect("backward");

        prop_assert_eq!(totals(&forward.y_data), totals(&backward.y_data));
    }

    #[test]
    fn single_column_counts_occurrences(keys in prop::collection::vec("[a-d]", 1..60)) {
        let input: String = keys.iter().map(|k| format!("{k}\n")).collect();
        let aggregation = Aggregator::new().aggregate(Cursor::new(input)).expect("aggregate");

        let mut expected: HashMap<String, f64> = HashMap::new();
        for key in &keys {
            *expected.entry(key.clone()).or_insert(0.0) += 1.0;
        }
        prop_assert_eq!(totals(&aggregation.y_data), expected);
    }

    #[test]
    fn datasets_follow_first_seen_order(
        records in prop::collection::vec(("[a-h]", 1u16..50), 1..30)
    ) {
        let aggregation = Aggregator::new()
            .aggregate(Cursor::new(render_pairs(&records)))
            .expect("aggregate");

        let mut first_seen: Vec<&str> = Vec::new();
        for (key, _) in &records {
            if !first_seen.contains(&key.as_str()) {
                first_seen.push(key);
            }
        }
        let names: Vec<&str> = aggregation.y_data.iter().filter_map(DataSet::name).collect();
        prop_assert_eq!(names, first_seen);
    }

    #[test]
    fn bar_rects_stay_inside_plot(
        values in prop::collection::vec(1u16..500, 1..20),
        width in 50.0f64..2000.0,
        height in 50.0f64..2000.0
    ) {
        let data: Vec<DataSet> = values
            .iter()
            .enumerate()
            .map(|(i, v)| DataSet::with_points(format!("k{i}"), vec![vec![f64::from(*v)]]).expect("dataset"))
            .collect();
        let geometry = ChartGeometry::new(width, height);
        let document = layout(ChartKind::Bar, &geometry, &data, "").expect("layout");
        let rects = document.canvas.rects();

        prop_assert_eq!(rects.len(), values.len());
        let tallest = rects.iter().map(|r| r.height).fold(0.0, f64::max);
        prop_assert!((tallest - height).abs() < 1e-6);
        for rect in rects {
            prop_assert!(rect.x >= 0.0 && rect.x + rect.width <= width + 1e-6);
            prop_assert!(rect.y >= -1e-6 && (rect.y + rect.height - height).abs() < 1e-6);
        }
    }
}
