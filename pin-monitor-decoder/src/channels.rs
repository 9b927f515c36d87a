//! Channel label sets
//!
//! The probe samples eight GPIO lines and packs their levels into one byte.
//! A [`ChannelSet`] carries the labels printed in the header line. The
//! default set matches the probe firmware's wiring: port A pins 7/6/4,
//! port B pins 3/2, port C pins 3/1/0.
//!
//! Labels are documentation for whoever reads the output. The decoder cannot
//! check them against the device; position 0 corresponds to the most
//! significant bit of each sample by convention only.

use crate::types::{MonitorError, Result, Sample};
use serde::{Deserialize, Serialize};

/// Default labels, MSB first
const DEFAULT_LABELS: [&str; Sample::CHANNELS] = ["A7", "A6", "A4", "B3", "B2", "C3", "C1", "C0"];

/// Ordered labels for the eight probe channels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct ChannelSet {
    labels: Vec<String>,
}

impl ChannelSet {
    /// Create a channel set from custom labels
    ///
    /// # Arguments
    /// * `labels` - exactly one label per channel, MSB first
    ///
    /// # Returns
    /// * `Err(MonitorError::InvalidChannelSet)` if the count is not 8
    pub fn new(labels: Vec<String>) -> Result<Self> {
        if labels.len() != Sample::CHANNELS {
            return Err(MonitorError::InvalidChannelSet(format!(
                "expected {} labels, got {}",
                Sample::CHANNELS,
                labels.len()
            )));
        }
        Ok(Self { labels })
    }

    /// The header line: labels joined with commas, no trailing newline
    pub fn header(&self) -> String {
        self.labels.join(",")
    }

    /// The individual labels, MSB first
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for ChannelSet {
    type Error = MonitorError;

    fn try_from(labels: Vec<String>) -> Result<Self> {
        Self::new(labels)
    }
}

impl From<ChannelSet> for Vec<String> {
    fn from(set: ChannelSet) -> Self {
        set.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_header() {
        assert_eq!(ChannelSet::default().header(), "A7,A6,A4,B3,B2,C3,C1,C0");
    }

    #[test]
    fn test_custom_labels() {
        let labels: Vec<String> = (0..8).map(|i| format!("D{}", i)).collect();
        let set = ChannelSet::new(labels).unwrap();
        assert_eq!(set.header(), "D0,D1,D2,D3,D4,D5,D6,D7");
        assert_eq!(set.labels().len(), Sample::CHANNELS);
    }

    #[test]
    fn test_wrong_arity_rejected() {
        let too_few = vec!["A".to_string(), "B".to_string()];
        assert!(matches!(
            ChannelSet::new(too_few),
            Err(MonitorError::InvalidChannelSet(_))
        ));

        let too_many: Vec<String> = (0..9).map(|i| i.to_string()).collect();
        assert!(ChannelSet::new(too_many).is_err());
    }
}
