use super::common::*;
use crate::assessment::domain::{Answer, GateStatus, Polarity, Rank, RiskCategory};
use crate::assessment::evaluation::SignalInputs;
use crate::assessment::report::{build_rows, DatasetRow, HeatmapGrid};

#[test]
fn rows_cover_at_risk_items_in_stable_order() {
    let catalog = catalog_of(vec![
        entry(
            "First flagged",
            RiskCategory::Tooling,
            Polarity::NegativeIsRisk,
            Rank::Moderate,
            Rank::High,
        ),
        entry(
            "Safe",
            RiskCategory::Quality,
            Polarity::NegativeIsRisk,
            Rank::Moderate,
            Rank::Moderate,
        ),
        entry(
            "Second flagged",
            RiskCategory::Schedule,
            Polarity::NegativeIsRisk,
            Rank::High,
            Rank::High,
        ),
    ]);
    let answers = [Answer::no(), Answer::yes(), Answer::no()];
    let signals = SignalInputs {
        release_gate: Some(GateStatus::Blocked),
        ..SignalInputs::default()
    };

    let result = engine()
        .assess(&catalog, &answers, &signals, context())
        .expect("assessment succeeds");
    let rows = build_rows(&result);

    let names: Vec<&str> = rows.iter().map(|row| row.risk_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["First flagged", "Second flagged", "Release gate blocked"]
    );
    assert!(rows.iter().all(|row| row.project_name == "Atlas CMS"));
    assert!(rows.iter().all(|row| row.tab == "L10n"));
    assert!(rows.iter().all(|row| row.notes == "pre-release review"));
}

#[test]
fn row_fields_mirror_the_item_exactly() {
    let catalog = catalog_of(vec![entry(
        "Flagged",
        RiskCategory::Resources,
        Polarity::NegativeIsRisk,
        Rank::Moderate,
        Rank::High,
    )]);
    let answers = [Answer::no().with_evidence("vendor not booked")];

    let result = engine()
        .assess(&catalog, &answers, &no_signals(), context())
        .expect("assessment succeeds");
    let rows = build_rows(&result);

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.category, "Resources");
    assert_eq!(row.likelihood, 2);
    assert_eq!(row.impact, 3);
    assert_eq!(row.score, 6);
    assert_eq!(row.weighted_score, 6.0);
    assert_eq!(row.evidence, "vendor not booked");
    assert_eq!(row.assessor, "R. Vega");
}

#[test]
fn rows_round_trip_through_csv_without_loss() {
    let catalog = catalog_of(vec![entry(
        "Flagged",
        RiskCategory::Tooling,
        Polarity::NegativeIsRisk,
        Rank::High,
        Rank::Moderate,
    )]);
    let answers = [Answer::no()];

    let result = engine()
        .assess(&catalog, &answers, &no_signals(), context())
        .expect("assessment succeeds");
    let rows = build_rows(&result);

    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in &rows {
        writer.serialize(row).expect("row serializes");
    }
    let bytes = writer.into_inner().expect("writer yields buffer");

    let mut reader = csv::Reader::from_reader(bytes.as_slice());
    let parsed: Vec<DatasetRow> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("rows parse back");

    assert_eq!(parsed, rows);
}

#[test]
fn heatmap_counts_match_flagged_items() {
    let catalog = catalog_of(vec![
        entry(
            "A",
            RiskCategory::Tooling,
            Polarity::NegativeIsRisk,
            Rank::Moderate,
            Rank::High,
        ),
        entry(
            "B",
            RiskCategory::Quality,
            Polarity::NegativeIsRisk,
            Rank::Moderate,
            Rank::High,
        ),
        entry(
            "C",
            RiskCategory::Schedule,
            Polarity::NegativeIsRisk,
            Rank::High,
            Rank::High,
        ),
    ]);
    let answers = [Answer::no(), Answer::no(), Answer::no()];

    let result = engine()
        .assess(&catalog, &answers, &no_signals(), context())
        .expect("assessment succeeds");
    let grid = HeatmapGrid::from_items(&result.risk_items);

    assert_eq!(grid.count(Rank::Moderate, Rank::High), 2);
    assert_eq!(grid.count(Rank::High, Rank::High), 1);
    assert_eq!(grid.total(), result.risk_items.len() as u32);
}

#[test]
fn summary_serializes_for_the_visualization_layer() {
    let catalog = catalog_of(vec![entry(
        "Flagged",
        RiskCategory::Schedule,
        Polarity::NegativeIsRisk,
        Rank::High,
        Rank::High,
    )]);

    let result = engine()
        .assess(&catalog, &[Answer::no()], &no_signals(), context())
        .expect("assessment succeeds");
    let value = serde_json::to_value(result.summary()).expect("summary serializes");

    assert_eq!(value["rating_label"], "High");
    assert_eq!(value["heatmap"]["counts"][2][2], 1);
    assert_eq!(value["category_scores"][0]["category"], "schedule");
    assert_eq!(value["red_flags"][0]["risk_name"], "Flagged");
}

#[test]
fn summary_orders_categories_and_labels_rating() {
    let catalog = catalog_of(vec![
        entry(
            "Schedule item",
            RiskCategory::Schedule,
            Polarity::NegativeIsRisk,
            Rank::High,
            Rank::High,
        ),
        entry(
            "Tooling item",
            RiskCategory::Tooling,
            Polarity::NegativeIsRisk,
            Rank::Moderate,
            Rank::Moderate,
        ),
    ]);
    let answers = [Answer::no(), Answer::no()];

    let result = engine()
        .assess(&catalog, &answers, &no_signals(), context())
        .expect("assessment succeeds");
    let summary = result.summary();

    assert_eq!(summary.rating_label, "High");
    // Fixed category order: Tooling before Schedule.
    let labels: Vec<&str> = summary
        .category_scores
        .iter()
        .map(|entry| entry.category_label)
        .collect();
    assert_eq!(labels, vec!["Tooling", "Schedule"]);
    assert_eq!(summary.red_flags.len(), 1);
    assert_eq!(summary.red_flags[0].risk_name, "Schedule item");
    assert_eq!(summary.items_at_risk, 2);
}
