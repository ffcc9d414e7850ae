use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::Segment;

use super::join::{join_offset, JoinOutcome};

/// Offsets an ordered chain of lines and arcs, joining consecutive
/// offset segments.
///
/// Each segment is offset independently, then stitched to the already
/// joined previous one. Joints that cannot be resolved are left open
/// rather than failing the whole chain.
///
/// # Sign Convention
///
/// - Positive distance: right offset (relative to walking direction)
/// - Negative distance: left offset
#[derive(Debug)]
pub struct OffsetChain2D {
    segments: Vec<Segment>,
    distance: f64,
}

impl OffsetChain2D {
    /// Creates a new chain offset operation.
    #[must_use]
    pub fn new(segments: Vec<Segment>, distance: f64) -> Self {
        Self { segments, distance }
    }

    /// Executes the offset, returning one joined segment per input segment.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if the chain is empty
    /// - `OperationError::InvalidInput` if the distance is not finite
    pub fn execute(&self) -> Result<Vec<Segment>> {
        Ok(self.execute_with_outcomes()?.0)
    }

    /// Like [`Self::execute`], also reporting how each joint was resolved.
    /// The first outcome is always [`JoinOutcome::Unjoined`].
    ///
    /// # Errors
    ///
    /// Same as [`Self::execute`].
    pub fn execute_with_outcomes(&self) -> Result<(Vec<Segment>, Vec<JoinOutcome>)> {
        if self.segments.is_empty() {
            return Err(OperationError::InvalidInput(
                "at least 1 segment is required for chain offset".to_owned(),
            )
            .into());
        }
        if !self.distance.is_finite() {
            return Err(OperationError::InvalidInput(format!(
                "offset distance must be finite, got {}",
                self.distance
            ))
            .into());
        }

        let mut joined: Vec<Segment> = Vec::with_capacity(self.segments.len());
        let mut outcomes = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            let (next, outcome) = join_offset(segment, self.distance, joined.last_mut());
            joined.push(next);
            outcomes.push(outcome);
        }

        let open = outcomes
            .iter()
            .skip(1)
            .filter(|o| !o.is_connected())
            .count();
        debug!(
            segments = joined.len(),
            open_joints = open,
            distance = self.distance,
            "chain offset done"
        );
        Ok((joined, outcomes))
    }
}

/// Offsets `segments` by `offset`, joining them left to right.
///
/// An empty chain yields an empty result.
#[must_use]
pub fn offset_chain(segments: &[Segment], offset: f64) -> Vec<Segment> {
    let mut joined: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments {
        let next = segment.make_offset(offset, joined.last_mut());
        joined.push(next);
    }
    joined
}
