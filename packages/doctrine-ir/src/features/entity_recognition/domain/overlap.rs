//! Overlap resolution shared by all entity matchers

use super::entity::Entity;

/// Drop overlapping spans, keeping the longer one
///
/// Candidates are visited by ascending `start` (stable, so matcher order
/// breaks ties). A candidate that overlaps accepted spans replaces them only
/// when it is strictly longer than every one of them; equal length keeps
/// the accepted span. The result is non-overlapping, sorted by `start`, and
/// a fixed point: resolving it again returns it unchanged.
pub fn resolve_overlaps(mut candidates: Vec<Entity>) -> Vec<Entity> {
    candidates.sort_by_key(|e| e.start);

    let mut accepted: Vec<Entity> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let overlapping: Vec<usize> = accepted
            .iter()
            .enumerate()
            .filter(|(_, existing)| candidate.overlaps(existing))
            .map(|(i, _)| i)
            .collect();

        if overlapping.is_empty() {
            accepted.push(candidate);
            continue;
        }

        if overlapping
            .iter()
            .all(|&i| candidate.len() > accepted[i].len())
        {
            for i in overlapping.into_iter().rev() {
                accepted.remove(i);
            }
            accepted.push(candidate);
        }
    }

    accepted.sort_by_key(|e| e.start);
    accepted
}
