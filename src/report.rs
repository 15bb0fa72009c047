//! Drill outcomes and the reports printed by the CLI.

use crate::drill::Drill;
use dsa_kernels::MaxSubarray;
use serde::Serialize;
use std::fmt;

/// What a drill produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    /// A single value, absent when the input has no answer
    Value { value: Option<i64> },
    Count { count: usize },
    Sequence {
        values: Vec<i64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        passes: Option<usize>,
    },
    /// Logical length plus the retained prefix
    Compacted { len: usize, values: Vec<i64> },
    Subarray {
        sum: i128,
        start: usize,
        values: Vec<i64>,
    },
    /// No answer for empty input
    Empty,
    Flag { value: bool },
}

impl Outcome {
    pub fn value(value: Option<i64>) -> Self {
        Outcome::Value { value }
    }

    pub fn sequence(values: Vec<i64>) -> Self {
        Outcome::Sequence {
            values,
            passes: None,
        }
    }

    pub fn subarray(found: Option<MaxSubarray<'_>>) -> Self {
        match found {
            Some(found) => Outcome::Subarray {
                sum: found.sum,
                start: found.start,
                values: found.elements.to_vec(),
            },
            None => Outcome::Empty,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value { value: Some(v) } => write!(f, "{}", v),
            Outcome::Value { value: None } => write!(f, "none"),
            Outcome::Count { count } => write!(f, "{}", count),
            Outcome::Sequence {
                values,
                passes: Some(p),
            } => write!(f, "{:?} ({} passes)", values, p),
            Outcome::Sequence { values, .. } => write!(f, "{:?}", values),
            Outcome::Compacted { len, values } => write!(f, "{} {:?}", len, values),
            Outcome::Subarray { sum, values, .. } => write!(f, "{} {:?}", sum, values),
            Outcome::Empty => write!(f, "empty"),
            Outcome::Flag { value } => write!(f, "{}", value),
        }
    }
}

/// One drill run, as printed by `dsa run` and `dsa samples`.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub drill: &'static str,
    pub input: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    pub outcome: Outcome,
}

impl Report {
    pub fn new(drill: Drill, input: Vec<i64>, offset: Option<i64>, outcome: Outcome) -> Self {
        Self {
            drill: drill.name(),
            input,
            offset,
            outcome,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?}", self.drill, self.input)?;
        if let Some(offset) = self.offset {
            write!(f, ", {}", offset)?;
        }
        write!(f, ") => {}", self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::value(Some(230)).to_string(), "230");
        assert_eq!(Outcome::value(None).to_string(), "none");
        assert_eq!(Outcome::sequence(vec![1, 2]).to_string(), "[1, 2]");
        assert_eq!(
            Outcome::Subarray {
                sum: 6,
                start: 3,
                values: vec![4, -1, 2, 1]
            }
            .to_string(),
            "6 [4, -1, 2, 1]"
        );
    }

    #[test]
    fn test_outcome_json_shape() {
        let json = serde_json::to_value(Outcome::sequence(vec![3])).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "sequence", "values": [3]}));

        let json = serde_json::to_value(Outcome::Empty).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "empty"}));
    }

    #[test]
    fn test_report_display() {
        let report = Report::new(
            Drill::Rotate,
            vec![1, 2, 3],
            Some(1),
            Outcome::sequence(vec![3, 1, 2]),
        );
        assert_eq!(report.to_string(), "rotate([1, 2, 3], 1) => [3, 1, 2]");
    }
}
