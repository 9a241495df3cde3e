//! Tests for the chart lifecycle.

use std::io::Cursor;

use super::*;

fn bar_chart() -> Chart {
    Chart::new(ChartKind::Bar, ChartGeometry::default(), "svgchart.css").unwrap()
}

#[test]
fn new_chart_is_configured() {
    let chart = bar_chart();
    assert_eq!(chart.state(), ChartState::Configured);
    assert!(chart.y_data().is_empty());
    assert!(chart.x_data().is_none());
    assert!(chart.document().is_none());
}

#[test]
fn new_chart_rejects_invalid_geometry() {
    let geometry = ChartGeometry::new(100.0, 100.0).with_margins(Margins::new(0.0, 0.0, 80.0, 80.0));
    let err = Chart::new(ChartKind::Bar, geometry, "").unwrap_err();
    assert!(matches!(err, SvgChartError::InvalidGeometry(_)));
}

#[test]
fn full_lifecycle_produces_document() {
    let mut chart = bar_chart();
    chart
        .parse_input(Cursor::new("apple\nbanana\napple\n"))
        .unwrap();
    assert_eq!(chart.state(), ChartState::Parsed);
    assert_eq!(chart.y_data().len(), 2);

    let doc = chart.create_chart().unwrap();
    assert_eq!(doc.canvas.rects().len(), 2);
    assert_eq!(chart.state(), ChartState::LaidOut);
    assert!(chart.document().is_some());
}

#[test]
fn create_chart_before_parse_fails() {
    let mut chart = bar_chart();
    let err = chart.create_chart().unwrap_err();
    assert!(matches!(err, SvgChartError::UnconfiguredChart));
    assert_eq!(err.to_string(), "chart has no data");
}

#[test]
fn parse_twice_fails() {
    let mut chart = bar_chart();
    chart.parse_input(Cursor::new("a\n")).unwrap();
    let err = chart.parse_input(Cursor::new("b\n")).unwrap_err();
    assert!(matches!(
        err,
        SvgChartError::InvalidState {
            expected: ChartState::Configured,
            actual: ChartState::Parsed
        }
    ));
    assert_eq!(chart.y_data().len(), 1);
}

#[test]
fn create_chart_twice_fails() {
    let mut chart = bar_chart();
    chart.parse_input(Cursor::new("a\n")).unwrap();
    chart.create_chart().unwrap();
    assert!(matches!(
        chart.create_chart().unwrap_err(),
        SvgChartError::InvalidState { .. }
    ));
}

#[test]
fn failed_parse_keeps_chart_configured() {
    let mut chart = bar_chart();
    assert!(chart.parse_input(Cursor::new("a,1\nb,x\n")).is_err());
    assert_eq!(chart.state(), ChartState::Configured);
    assert!(chart.y_data().is_empty());
}

#[test]
fn empty_input_gives_empty_canvas() {
    let mut chart = Chart::new(ChartKind::Histogram, ChartGeometry::default(), "").unwrap();
    chart.parse_input(Cursor::new("")).unwrap();
    let doc = chart.create_chart().unwrap();
    assert_eq!(doc.primitive_count(), 0);
}

#[test]
fn line_and_pie_fail_to_parse() {
    for kind in [ChartKind::Line, ChartKind::Pie] {
        let mut chart = Chart::new(kind, ChartGeometry::default(), "").unwrap();
        let err = chart.parse_input(Cursor::new("a\n")).unwrap_err();
        assert!(matches!(err, SvgChartError::Unimplemented(k) if k == kind));
    }
}

#[test]
fn line_chart_with_loaded_data_fails_to_lay_out() {
    let mut chart = Chart::new(ChartKind::Line, ChartGeometry::default(), "").unwrap();
    chart.load_data(Vec::new()).unwrap();
    assert!(matches!(
        chart.create_chart().unwrap_err(),
        SvgChartError::Unimplemented(ChartKind::Line)
    ));
}

#[test]
fn loaded_data_is_laid_out_in_given_order() {
    let mut chart = bar_chart();
    chart
        .load_data(vec![
            DataSet::with_points("z", vec![vec![1.0]]).unwrap(),
            DataSet::with_points("a", vec![vec![2.0]]).unwrap(),
        ])
        .unwrap();
    let doc = chart.create_chart().unwrap();
    let classes: Vec<_> = doc.canvas.rects().iter().map(|r| r.class.clone()).collect();
    assert_eq!(classes, vec!["_z", "_a"]);
}

#[test]
fn oversized_input_fails_parse_and_keeps_chart_configured() {
    let mut chart = bar_chart();
    let input = format!("a,{}\nb,1\n", "9".repeat(400));
    let err = chart.parse_input(Cursor::new(input)).unwrap_err();
    assert!(matches!(err, SvgChartError::MalformedRecord { line_number: 1, .. }));
    assert_eq!(chart.state(), ChartState::Configured);
}

#[test]
fn loaded_infinite_value_fails_layout() {
    let mut chart = bar_chart();
    chart
        .load_data(vec![DataSet::with_points("a", vec![vec![f64::INFINITY]]).unwrap()])
        .unwrap();
    assert!(matches!(
        chart.create_chart().unwrap_err(),
        SvgChartError::NonFiniteValue(_)
    ));
    assert!(chart.document().is_none());
}

#[test]
fn state_display_names() {
    assert_eq!(ChartState::LaidOut.to_string(), "laid out");
}
