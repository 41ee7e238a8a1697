use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize};

use crate::classify::{Palette, palette};

/// Demographic measure used to color the map. Exactly one is active at a time.
/// Serializes as its id; deserializes through `FromStr`, aliases included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    #[default]
    ForeignBorn,
    NonWhite,
    White,
    Latino,
    Asian,
    Black,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::ForeignBorn,
        Metric::NonWhite,
        Metric::White,
        Metric::Latino,
        Metric::Asian,
        Metric::Black,
    ];

    /// Stable identifier, as accepted by `FromStr`.
    pub fn id(self) -> &'static str {
        match self {
            Metric::ForeignBorn => "foreign-born",
            Metric::NonWhite => "non-white",
            Metric::White => "white",
            Metric::Latino => "latino",
            Metric::Asian => "asian",
            Metric::Black => "black",
        }
    }

    /// Human-readable title for legends and reports.
    pub fn label(self) -> &'static str {
        match self {
            Metric::ForeignBorn => "Foreign Born",
            Metric::NonWhite => "Non-White",
            Metric::White => "White",
            Metric::Latino => "Hispanic/Latino",
            Metric::Asian => "Asian",
            Metric::Black => "Black",
        }
    }

    /// The fixed color ramp associated with this metric.
    pub fn palette(self) -> &'static Palette {
        match self {
            Metric::ForeignBorn => &palette::PURPLES,
            Metric::NonWhite => &palette::ORANGES,
            Metric::White => &palette::BLUES,
            Metric::Latino => &palette::REDS,
            Metric::Asian => &palette::GREENS,
            Metric::Black => &palette::YELLOW_ORANGE_BROWN,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric {0:?} (expected one of: foreign-born, non-white, white, latino, asian, black)")]
pub struct ParseMetricError(String);

impl FromStr for Metric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match key.as_str() {
            "foreign-born" | "foreign" => Ok(Metric::ForeignBorn),
            "non-white" | "nonwhite" => Ok(Metric::NonWhite),
            "white" => Ok(Metric::White),
            "latino" | "hispanic" | "hispanic-latino" => Ok(Metric::Latino),
            "asian" => Ok(Metric::Asian),
            "black" => Ok(Metric::Black),
            _ => Err(ParseMetricError(s.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Metric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids_and_aliases() {
        for metric in Metric::ALL {
            assert_eq!(metric.id().parse::<Metric>(), Ok(metric));
        }
        assert_eq!("foreign_born".parse::<Metric>(), Ok(Metric::ForeignBorn));
        assert_eq!("Non White".parse::<Metric>(), Ok(Metric::NonWhite));
        assert!("income".parse::<Metric>().is_err());
    }

    #[test]
    fn palettes_are_distinct_per_metric() {
        let mut seen = std::collections::HashSet::new();
        for metric in Metric::ALL {
            assert!(seen.insert(metric.palette().name()));
        }
    }
}
