use crate::model::{ExposureEstimate, SkinType};

/// Estimate safe sun-exposure minutes for every Fitzpatrick skin type.
///
/// Each entry is `floor(baseline / current_uv)`, truncated toward zero.
/// A zero or negative UV index yields an all-undefined estimate: nothing
/// sensible can be derived from it, and "0 minutes" would be misleading.
///
/// Pure function; calling it twice with the same input yields the same
/// estimate.
pub fn safe_exposure(current_uv: f64) -> ExposureEstimate {
    let mut minutes = [None; 6];

    if current_uv > 0.0 {
        for (slot, skin) in minutes.iter_mut().zip(SkinType::all()) {
            *slot = Some((skin.baseline() / current_uv) as u32);
        }
    }

    ExposureEstimate { minutes }
}
