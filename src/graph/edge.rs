use super::VertexId;
use crate::error::{Error, Result};

/// A directed, unweighted edge.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub source: VertexId,
    pub sink: VertexId,
}

/// Which weight a shortest-path search minimizes.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum Metric {
    #[default]
    Time,
    Cost,
}

impl Metric {
    /// Parses a metric selector leniently.
    ///
    /// Surrounding whitespaces and cases are ignored.
    /// Anything other than `time` or `cost` falls back to [Metric::Time].
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim().to_ascii_lowercase().parse() {
            Ok(metric) => metric,
            Err(err) => {
                tracing::warn!(%err, "invalid metric selector, defaulting to `time`");
                Metric::Time
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Time => "time",
            Metric::Cost => "cost",
        }
    }
}

impl std::str::FromStr for Metric {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "time" => Ok(Metric::Time),
            "cost" => Ok(Metric::Cost),
            _ => Err(Error::UnknownMetric(s.to_owned())),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Travel time and monetary cost of a weighted edge.
///
/// Both are finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    time: f64,
    cost: f64,
}

impl Weights {
    pub fn new(time: f64, cost: f64) -> Result<Self> {
        for (metric, value) in [(Metric::Time, time), (Metric::Cost, cost)] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidWeight { metric, value });
            }
        }
        Ok(Self { time, cost })
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Time => self.time,
            Metric::Cost => self.cost,
        }
    }
}

/// A directed edge with [Weights].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedEdge {
    pub source: VertexId,
    pub sink: VertexId,
    pub weights: Weights,
}

impl WeightedEdge {
    pub fn weight(&self, metric: Metric) -> f64 {
        self.weights.get(metric)
    }

    pub fn unweighted(&self) -> Edge {
        Edge {
            source: self.source,
            sink: self.sink,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_metric_parsing() {
        assert_eq!("time".parse::<Metric>(), Ok(Metric::Time));
        assert_eq!("cost".parse::<Metric>(), Ok(Metric::Cost));
        assert_eq!(
            "Cost".parse::<Metric>(),
            Err(Error::UnknownMetric("Cost".to_owned()))
        );
    }

    #[test]
    fn lenient_metric_selector() {
        assert_eq!(Metric::from_selector("  COST "), Metric::Cost);
        assert_eq!(Metric::from_selector("time"), Metric::Time);
        assert_eq!(Metric::from_selector("distance"), Metric::Time);
        assert_eq!(Metric::from_selector(""), Metric::Time);
    }

    #[test]
    fn weights_reject_negative_and_non_finite() {
        assert!(Weights::new(0.0, 0.0).is_ok());
        assert_eq!(
            Weights::new(-1.0, 3.0),
            Err(Error::InvalidWeight {
                metric: Metric::Time,
                value: -1.0
            })
        );
        assert!(matches!(
            Weights::new(1.0, f64::NAN),
            Err(Error::InvalidWeight {
                metric: Metric::Cost,
                ..
            })
        ));
        assert!(Weights::new(f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn weight_selection() {
        let w = Weights::new(50.0, 120.0).unwrap();
        let e = WeightedEdge {
            source: VertexId::new(0),
            sink: VertexId::new(1),
            weights: w,
        };
        assert_eq!(e.weight(Metric::Time), 50.0);
        assert_eq!(e.weight(Metric::Cost), 120.0);
    }
}
