use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A geographic coordinate, held only for the duration of one request.
///
/// No range checks are applied; out-of-range values are passed through
/// uninterpreted to the external service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// One successful UV observation from the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UvReading {
    /// Current UV index.
    pub uv: f64,
    /// Daily maximum UV index.
    pub uv_max: f64,
    /// Observation timestamp, when the provider supplies one.
    pub uv_time: Option<DateTime<Utc>>,
}

/// Fitzpatrick skin type, I (very fair) through VI (dark).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkinType {
    I = 0,
    II,
    III,
    IV,
    V,
    VI,
}

impl SkinType {
    pub const fn all() -> &'static [SkinType] {
        &[
            SkinType::I,
            SkinType::II,
            SkinType::III,
            SkinType::IV,
            SkinType::V,
            SkinType::VI,
        ]
    }

    /// 1-based numeral used in user-facing text.
    pub const fn numeral(self) -> u8 {
        self as u8 + 1
    }

    /// Baseline exposure constant: safe minutes at UV index 1.
    pub const fn baseline(self) -> f64 {
        match self {
            SkinType::I => 200.0,
            SkinType::II => 250.0,
            SkinType::III => 300.0,
            SkinType::IV => 400.0,
            SkinType::V => 500.0,
            SkinType::VI => 600.0,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            SkinType::I => "Very fair skin, always burns, never tans",
            SkinType::II => "Fair skin, burns easily, tans minimally",
            SkinType::III => "Medium skin, burns moderately, tans gradually",
            SkinType::IV => "Olive skin, burns minimally, tans well",
            SkinType::V => "Brown skin, rarely burns, tans deeply",
            SkinType::VI => "Dark skin, never burns, tans deeply",
        }
    }
}

/// Safe-exposure minutes per skin type, derived from one UV reading.
///
/// Entries are defined if and only if the reading was positive; a zero (or
/// malformed negative) UV index leaves every entry undefined rather than
/// reporting zero minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposureEstimate {
    pub(crate) minutes: [Option<u32>; 6],
}

impl ExposureEstimate {
    pub fn get(&self, skin: SkinType) -> Option<u32> {
        self.minutes[skin as usize]
    }

    /// Entries with a defined duration, in skin-type order.
    pub fn defined(&self) -> impl Iterator<Item = (SkinType, u32)> + '_ {
        SkinType::all()
            .iter()
            .copied()
            .filter_map(|skin| self.get(skin).map(|m| (skin, m)))
    }

    /// True when the source reading was positive and all entries exist.
    pub fn is_defined(&self) -> bool {
        self.minutes.iter().all(Option::is_some)
    }
}
