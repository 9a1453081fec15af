//! Tolerances for the curve-difference pipeline.

/// Calculator configuration (tolerances).
///
/// - `eps_range`: absolute slack added on both ends of a segment's range when
///   an intersection candidate is accepted. On top of it `Line::contains_eps`
///   always allows a few ulps of the coordinate magnitude, which is what
///   covers shared-vertex crossings on dated curves (x near 1.7e9).
/// - `eps_duration`: maximum difference (seconds) between the time spans of
///   the two curves before `get_relative_difference` refuses to normalize.
#[derive(Clone, Copy, Debug)]
pub struct DiffCfg {
    pub eps_range: f64,
    pub eps_duration: f64,
}

impl Default for DiffCfg {
    fn default() -> Self {
        Self {
            eps_range: 1e-9,
            eps_duration: 1e-6,
        }
    }
}

impl DiffCfg {
    /// No configured slack; only the ulp-scale range slack remains.
    pub fn exact() -> Self {
        Self {
            eps_range: 0.0,
            eps_duration: 0.0,
        }
    }
}
