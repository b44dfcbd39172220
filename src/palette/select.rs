use super::{ColorSample, PaletteConfig};

/// Hard cap on how many distinct colors a palette can hold.
pub const MAX_DISTINCT: usize = 16;

// Distinct set
//------------------------------------------------------------------------------

// Fixed capacity accumulator for the greedy selection
#[derive(Debug, Clone, Copy)]
pub(crate) struct DistinctSet {
    samples: [Option<ColorSample>; MAX_DISTINCT],
    len: usize,
    cap: usize,
    min_dist_sq: u32,
}

impl DistinctSet {
    pub(crate) fn new(cap: usize, min_dist: f32) -> Self {
        Self {
            samples: [None; MAX_DISTINCT],
            len: 0,
            cap: cap.min(MAX_DISTINCT),
            min_dist_sq: threshold_sq(min_dist),
        }
    }

    pub(crate) fn is_full(&self) -> bool {
        self.len >= self.cap
    }

    /// Accepts `s` only if it is farther than the threshold from every color
    /// already held.
    pub(crate) fn offer(&mut self, s: ColorSample) -> bool {
        if self.is_full() {
            return false;
        }
        let distinct = self.iter().all(|t| t.color.distance_sq(s.color) > self.min_dist_sq);
        if distinct {
            self.samples[self.len] = Some(s);
            self.len += 1;
        }
        distinct
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &ColorSample> {
        self.samples[..self.len].iter().filter_map(Option::as_ref)
    }
}

// Distances are compared squared. A threshold t accepts d > t, i.e. d² > floor(t²)
// for integral d².
fn threshold_sq(t: f32) -> u32 {
    if t <= 0.0 {
        return 0;
    }
    (t as f64 * t as f64).floor() as u32
}

// Selection
//------------------------------------------------------------------------------

/// Greedily picks up to `max_colors` visually distinct colors from a histogram
/// sorted by frequency.
pub fn select_distinct(hist: &[ColorSample], cfg: &PaletteConfig) -> Vec<ColorSample> {
    let mut set = DistinctSet::new(cfg.max_colors, cfg.distinct_threshold);
    for s in hist {
        if set.is_full() {
            break;
        }
        set.offer(*s);
    }
    set.iter().copied().collect()
}

/// First color after the primary that is farther than the secondary threshold.
pub fn pick_secondary(distinct: &[ColorSample], cfg: &PaletteConfig) -> Option<ColorSample> {
    let (primary, rest) = distinct.split_first()?;
    let min_sq = threshold_sq(cfg.secondary_threshold);
    rest.iter().find(|s| s.color.distance_sq(primary.color) > min_sq).copied()
}
