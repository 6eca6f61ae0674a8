use std::path::Path;

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use rhetor_engine::stats::{aggregate, Aggregation, CountKind, FrequencyMethod, StatAccumulator};
use rhetor_engine::taxonomy::to_display;

use super::CliError;

/// One externally tagged analysis unit.
#[derive(Debug, Deserialize)]
pub struct UnitRecord {
    pub unit: String,
    pub group: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub clusters: Vec<String>,
    #[serde(default)]
    pub dimensions: Vec<String>,
    #[serde(default)]
    pub lats: Vec<String>,
}

#[derive(Debug, Serialize)]
struct GroupReport {
    group: String,
    units: Vec<String>,
    words: usize,
    rows: Vec<RowReport>,
}

#[derive(Debug, Serialize)]
struct RowReport {
    kind: &'static str,
    name: String,
    count: u32,
    frequency: f64,
}

/// Aggregate tagged units from a JSON file into per-group statistics.
pub fn stats(path: &Path, method: FrequencyMethod, json: bool) -> Result<(), CliError> {
    let records = load_units(path)?;
    let agg = build_aggregation(records);
    let reports = build_reports(&agg, method);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).map_err(|e| CliError::Invalid(e.to_string()))?
        );
    } else {
        print_reports(&reports);
    }
    Ok(())
}

pub fn load_units(path: &Path) -> Result<Vec<UnitRecord>, CliError> {
    let json = std::fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|e| CliError::Invalid(format!("{}: {e}", path.display())))
}

pub fn build_aggregation(records: Vec<UnitRecord>) -> Aggregation {
    let mut units = Vec::with_capacity(records.len());
    let mut group_of = std::collections::HashMap::new();
    for record in records {
        let mut acc = StatAccumulator::new();
        acc.push_text(&record.text);
        for name in &record.clusters {
            acc.add_cluster(name);
        }
        for name in &record.dimensions {
            acc.add_dimension(name);
        }
        for name in &record.lats {
            acc.add_lat(name);
        }
        group_of.insert(record.unit.clone(), record.group);
        units.push((record.unit, acc));
    }
    aggregate(units, |unit| group_of.get(unit).cloned().unwrap_or_default())
}

fn build_reports(agg: &Aggregation, method: FrequencyMethod) -> Vec<GroupReport> {
    let kinds = [
        ("cluster", CountKind::Cluster),
        ("dimension", CountKind::Dimension),
        ("lat", CountKind::Lat),
    ];
    agg.iter()
        .map(|(group, acc)| {
            let mut rows = Vec::new();
            for (label, kind) in kinds {
                for (name, count) in acc.entries(kind) {
                    // Recorded names always have a frequency.
                    let frequency = acc.frequency(kind, name, method).unwrap_or(0.0);
                    rows.push(RowReport {
                        kind: label,
                        name: to_display(name),
                        count,
                        frequency,
                    });
                }
            }
            GroupReport {
                group: group.to_string(),
                units: agg.members(group).to_vec(),
                words: acc.word_count(),
                rows,
            }
        })
        .collect()
}

fn print_reports(reports: &[GroupReport]) {
    let name_width = reports
        .iter()
        .flat_map(|r| r.rows.iter())
        .map(|row| row.name.width())
        .max()
        .unwrap_or(0);

    for report in reports {
        println!(
            "{} (units: {}, words: {})",
            report.group,
            report.units.len(),
            report.words
        );
        for row in &report.rows {
            let pad = name_width.saturating_sub(row.name.width());
            println!(
                "  {:<9} {}{}  {:>5}  {:.4}",
                row.kind,
                row.name,
                " ".repeat(pad),
                row.count,
                row.frequency
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_units(json: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("units.json");
        std::fs::write(&path, json).unwrap();
        (dir, path)
    }

    #[test]
    fn test_units_aggregate_by_group() {
        let (_dir, path) = write_units(
            r#"[
                {"unit": "u1", "group": "p1", "text": "one two", "lats": ["L"]},
                {"unit": "u2", "group": "p1", "text": "three four", "lats": ["L"]},
                {"unit": "u3", "group": "p2", "lats": ["L"]}
            ]"#,
        );
        let agg = build_aggregation(load_units(&path).unwrap());
        assert_eq!(agg.len(), 2);
        assert_eq!(agg.get("p1").unwrap().count(CountKind::Lat, "L"), Some(2));
        assert_eq!(agg.get("p2").unwrap().count(CountKind::Lat, "L"), Some(1));
        assert_eq!(agg.get("p1").unwrap().word_count(), 4);
        assert_eq!(agg.members("p1"), ["u1".to_string(), "u2".to_string()]);
    }

    #[test]
    fn test_reports_use_display_names_and_doc_frequency() {
        let (_dir, path) = write_units(
            r#"[{"unit": "u1", "group": "p1", "text": "one two three four",
                 "clusters": ["Think_Positive", "Think_Positive"]}]"#,
        );
        let agg = build_aggregation(load_units(&path).unwrap());
        let reports = build_reports(&agg, FrequencyMethod::Document);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].words, 4);
        assert_eq!(reports[0].rows.len(), 1);
        assert_eq!(reports[0].rows[0].name, "Think Positive");
        assert_eq!(reports[0].rows[0].count, 2);
        assert!((reports[0].rows[0].frequency - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_malformed_units_file() {
        let (_dir, path) = write_units("{not json");
        assert!(matches!(load_units(&path), Err(CliError::Invalid(_))));
    }
}
