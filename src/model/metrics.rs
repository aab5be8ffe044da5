use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Scalar summaries a model can report each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum MetricKind {
    AliveDensity,
    PanicDensity,
    HealthyDensity,
    InfectedDensity,
    InfectedFraction,
    NodeCount,
    EdgeCount,
    MeanDegree,
    StateOneShare,
    Homogeneity,
}

string_enum!(MetricKind {
    AliveDensity => "alive_density",
    PanicDensity => "panic_density",
    HealthyDensity => "healthy_density",
    InfectedDensity => "infected_density",
    InfectedFraction => "infected_fraction",
    NodeCount => "node_count",
    EdgeCount => "edge_count",
    MeanDegree => "mean_degree",
    StateOneShare => "state_one_share",
    Homogeneity => "homogeneity",
});

/// One observation: the tick it was taken at and its values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub tick: u64,
    pub values: BTreeMap<MetricKind, f64>,
}

/// Append-only series of samples, one per `observe`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSeries {
    samples: Vec<MetricSample>,
}

impl MetricsSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, tick: u64, values: impl IntoIterator<Item = (MetricKind, f64)>) {
        self.samples.push(MetricSample {
            tick,
            values: values.into_iter().collect(),
        });
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[MetricSample] {
        &self.samples
    }

    pub fn latest(&self) -> Option<&MetricSample> {
        self.samples.last()
    }

    /// The history of one metric, in recording order. Samples that lack it are skipped.
    pub fn series(&self, kind: MetricKind) -> impl Iterator<Item = (u64, f64)> + '_ {
        self.samples
            .iter()
            .filter_map(move |s| s.values.get(&kind).map(|&v| (s.tick, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_kind_string_round_trip() {
        for kind in MetricKind::ALL {
            assert_eq!(kind.as_str().parse::<MetricKind>(), Ok(*kind));
        }
        assert!("bogus".parse::<MetricKind>().is_err());
    }

    #[test]
    fn series_is_append_only_and_ordered() {
        let mut series = MetricsSeries::new();
        series.record(0, [(MetricKind::AliveDensity, 0.5)]);
        series.record(0, [(MetricKind::AliveDensity, 0.5)]);
        series.record(1, [(MetricKind::AliveDensity, 0.25), (MetricKind::NodeCount, 3.0)]);

        assert_eq!(series.len(), 3);
        assert_eq!(
            series.series(MetricKind::AliveDensity).collect::<Vec<_>>(),
            vec![(0, 0.5), (0, 0.5), (1, 0.25)]
        );
        assert_eq!(
            series.series(MetricKind::NodeCount).collect::<Vec<_>>(),
            vec![(1, 3.0)]
        );
        assert_eq!(series.latest().map(|s| s.tick), Some(1));
    }
}
