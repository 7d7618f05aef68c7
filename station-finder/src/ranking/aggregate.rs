//! Filtering, deduplication and ordering of measured stations.

use std::collections::HashSet;

use crate::domain::StationRecord;

use super::config::RankConfig;

/// A station paired with its road distance from the request origin.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedStation {
    pub station: StationRecord,
    pub distance_km: f64,
}

impl RankedStation {
    pub fn new(station: StationRecord, distance_km: f64) -> Self {
        Self {
            station,
            distance_km,
        }
    }
}

/// Turn measured stations into the final ranking.
///
/// In order:
/// 1. Drop stations further than `max_distance_km`
/// 2. Keep the first station seen for each name
/// 3. Sort by ascending distance (stable, so ties keep input order)
/// 4. Keep at most `max_results`
pub fn aggregate(measured: Vec<RankedStation>, config: &RankConfig) -> Vec<RankedStation> {
    let mut seen = HashSet::new();

    let mut ranked: Vec<RankedStation> = measured
        .into_iter()
        .filter(|entry| entry.distance_km <= config.max_distance_km)
        .filter(|entry| seen.insert(entry.station.name.clone()))
        .collect();

    ranked.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    ranked.truncate(config.max_results);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, distance_km: f64) -> RankedStation {
        RankedStation::new(
            StationRecord::new(name, "addr", 10.0, 76.0, "123", "agent"),
            distance_km,
        )
    }

    fn names(ranked: &[RankedStation]) -> Vec<&str> {
        ranked.iter().map(|r| r.station.name.as_str()).collect()
    }

    #[test]
    fn sorts_ascending() {
        let ranked = aggregate(
            vec![entry("C", 7.0), entry("A", 1.5), entry("B", 3.0)],
            &RankConfig::default(),
        );
        assert_eq!(names(&ranked), vec!["A", "B", "C"]);
    }

    #[test]
    fn drops_beyond_threshold_keeps_boundary() {
        let ranked = aggregate(
            vec![entry("Far", 10.001), entry("Edge", 10.0), entry("Near", 0.2)],
            &RankConfig::default(),
        );
        assert_eq!(names(&ranked), vec!["Near", "Edge"]);
    }

    #[test]
    fn drops_nan_distance() {
        let ranked = aggregate(
            vec![entry("Broken", f64::NAN), entry("Fine", 2.0)],
            &RankConfig::default(),
        );
        assert_eq!(names(&ranked), vec!["Fine"]);
    }

    #[test]
    fn dedup_keeps_first_occurrence_not_nearest() {
        let ranked = aggregate(
            vec![entry("Dup", 6.0), entry("Other", 4.0), entry("Dup", 1.0)],
            &RankConfig::default(),
        );
        assert_eq!(names(&ranked), vec!["Other", "Dup"]);
        assert_eq!(ranked[1].distance_km, 6.0);
    }

    #[test]
    fn dedup_happens_after_distance_filter() {
        // The first "Dup" is out of range, so the second one survives.
        let ranked = aggregate(
            vec![entry("Dup", 12.0), entry("Dup", 3.0)],
            &RankConfig::default(),
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].distance_km, 3.0);
    }

    #[test]
    fn truncates_to_max_results_after_sorting() {
        let measured: Vec<_> = (0..15)
            .rev()
            .map(|i| entry(&format!("S{i}"), i as f64 * 0.5))
            .collect();

        let ranked = aggregate(measured, &RankConfig::default());
        assert_eq!(ranked.len(), 10);
        assert_eq!(ranked[0].station.name, "S0");
        assert_eq!(ranked[9].station.name, "S9");
    }

    #[test]
    fn ties_keep_input_order() {
        let ranked = aggregate(
            vec![entry("First", 2.0), entry("Second", 2.0)],
            &RankConfig::default(),
        );
        assert_eq!(names(&ranked), vec!["First", "Second"]);
    }

    #[test]
    fn empty_input() {
        assert!(aggregate(Vec::new(), &RankConfig::default()).is_empty());
    }
}
