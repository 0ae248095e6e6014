//! Typed extremum positions and the detector output set.

/// Kind of a water-table extremum.
///
/// Water levels are stored in meters below ground surface, so the level axis
/// is inverted: a water-table maximum is the *smallest* stored value and a
/// water-table minimum is the *largest*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumKind {
    /// Water-table peak (recharge event): shallowest level of its
    /// neighborhood, i.e. a local minimum of the stored mbgs values.
    Maximum,
    /// End of a recession: deepest level of its neighborhood, i.e. a local
    /// maximum of the stored mbgs values.
    Minimum,
}

impl ExtremumKind {
    /// Returns the opposite kind.
    pub fn opposite(self) -> Self {
        match self {
            ExtremumKind::Maximum => ExtremumKind::Minimum,
            ExtremumKind::Minimum => ExtremumKind::Maximum,
        }
    }
}

/// A single detected (or externally supplied) extremum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extremum {
    /// Position in the series. For an extremum on a plateau this is the
    /// plateau midpoint.
    pub index: usize,
    /// Maximum (peak) or minimum (end of recession).
    pub kind: ExtremumKind,
}

impl Extremum {
    /// Creates an extremum at `index` with the given kind.
    pub fn new(index: usize, kind: ExtremumKind) -> Self {
        Self { index, kind }
    }
}

/// Ordered set of extrema produced by [`detect_extrema`] or supplied by an
/// external editor.
///
/// Entries are in chronological order and, after detection post-processing,
/// alternate in kind. Synthesized entries (inserted to restore alternation)
/// are identified by their ordinal position in [`ExtremaSet::added_ordinals`].
///
/// [`detect_extrema`]: crate::detect_extrema
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtremaSet {
    extrema: Vec<Extremum>,
    added: Vec<usize>,
}

impl ExtremaSet {
    /// Creates a set from pre-computed parts (crate-internal constructor).
    pub(crate) fn new(extrema: Vec<Extremum>, added: Vec<usize>) -> Self {
        Self { extrema, added }
    }

    /// Returns an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the extrema in chronological order.
    pub fn extrema(&self) -> &[Extremum] {
        &self.extrema
    }

    /// Returns ordinals (positions within [`ExtremaSet::extrema`]) of
    /// synthesized entries.
    pub fn added_ordinals(&self) -> &[usize] {
        &self.added
    }

    /// Returns the number of extrema.
    pub fn len(&self) -> usize {
        self.extrema.len()
    }

    /// Returns `true` if the set holds no extrema.
    pub fn is_empty(&self) -> bool {
        self.extrema.is_empty()
    }

    /// Returns the bare series indices, in chronological order.
    pub fn indices(&self) -> Vec<usize> {
        self.extrema.iter().map(|e| e.index).collect()
    }

    /// Returns the signed-position encoding used by external collaborators:
    /// positive for maxima (peaks), negative for minima.
    ///
    /// A minimum at index 0 cannot be encoded this way; the typed form is
    /// canonical and this encoding is interop-only.
    pub fn signed_positions(&self) -> Vec<i64> {
        self.extrema
            .iter()
            .map(|e| match e.kind {
                ExtremumKind::Maximum => e.index as i64,
                ExtremumKind::Minimum => -(e.index as i64),
            })
            .collect()
    }

    /// Builds a set from the signed-position encoding (positive = maximum,
    /// negative = minimum; zero is taken as a maximum at index 0).
    ///
    /// All entries are treated as genuine detections (no synthesized
    /// ordinals).
    pub fn from_signed(positions: &[i64]) -> Self {
        let extrema = positions
            .iter()
            .map(|&p| {
                let kind = if p >= 0 {
                    ExtremumKind::Maximum
                } else {
                    ExtremumKind::Minimum
                };
                Extremum::new(p.unsigned_abs() as usize, kind)
            })
            .collect();
        Self {
            extrema,
            added: Vec::new(),
        }
    }
}
