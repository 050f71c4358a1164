use crate::models::PlayerGameProjection;

/// Order projections by fantasy points, highest first.
///
/// The sort is stable, so equal scores keep the order they arrived in
/// (first-seen order from the aggregator).
pub fn rank(mut projections: Vec<PlayerGameProjection>) -> Vec<PlayerGameProjection> {
    projections.sort_by(|a, b| b.fantasy_points.total_cmp(&a.fantasy_points));
    projections
}
