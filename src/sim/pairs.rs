//! Ball-ball collision resolution
//!
//! Equal-mass approximation: overlapping balls are pushed apart along the
//! line between their centres and then trade velocities outright.
//!
//! Pairs are visited in ascending `(i, j)` order. When one ball overlaps
//! several others in the same tick the outcome depends on that order; that
//! is accepted and kept reproducible rather than made symmetric.

use glam::Vec2;

use super::state::Ball;
use crate::consts::MIN_SEPARATION_DISTANCE;

/// Separate and swap one pair if their centres are closer than `min_dist`
///
/// Returns whether the pair was in contact.
pub fn resolve_pair(a: &mut Ball, b: &mut Ball, min_dist: f32) -> bool {
    let delta = a.pos - b.pos;
    let distance_sq = delta.length_squared();
    if distance_sq >= min_dist * min_dist {
        return false;
    }

    let push = if distance_sq == 0.0 {
        // Exactly coincident: there is no offset to scale, so split the full
        // contact distance along +x.
        Vec2::X * (min_dist / 2.0)
    } else {
        // Divisor and overlap both use the floored distance
        let distance = distance_sq.sqrt().max(MIN_SEPARATION_DISTANCE);
        delta / distance * ((min_dist - distance) / 2.0)
    };

    a.pos += push;
    b.pos -= push;

    std::mem::swap(&mut a.vel, &mut b.vel);
    true
}

/// Resolve every overlapping pair in ascending index order
///
/// Returns the number of pairs that were in contact.
pub fn resolve_ball_pairs(balls: &mut [Ball], min_dist: f32) -> usize {
    let mut contacts = 0;

    for i in 0..balls.len() {
        let (head, tail) = balls.split_at_mut(i + 1);
        let a = &mut head[i];
        for (offset, b) in tail.iter_mut().enumerate() {
            if resolve_pair(a, b, min_dist) {
                contacts += 1;
                log::debug!("Balls {} and {} collided", i, i + 1 + offset);
            }
        }
    }

    contacts
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN_DIST: f32 = 15.0;

    #[test]
    fn test_coincident_balls_separate_and_swap() {
        let v1 = Vec2::new(200.0, -50.0);
        let v2 = Vec2::new(-250.0, 120.0);
        let mut balls = vec![
            Ball::new(Vec2::new(512.0, 384.0), v1),
            Ball::new(Vec2::new(512.0, 384.0), v2),
        ];

        let contacts = resolve_ball_pairs(&mut balls, MIN_DIST);
        assert_eq!(contacts, 1);
        assert!(balls[0].pos.distance(balls[1].pos) >= MIN_DIST - 1e-4);
        assert_eq!(balls[0].vel, v2);
        assert_eq!(balls[1].vel, v1);
    }

    #[test]
    fn test_overlap_split_symmetrically() {
        let mut a = Ball::new(Vec2::new(105.0, 50.0), Vec2::new(1.0, 0.0));
        let mut b = Ball::new(Vec2::new(100.0, 50.0), Vec2::new(-1.0, 0.0));

        assert!(resolve_pair(&mut a, &mut b, MIN_DIST));
        // 5 apart, 15 required: each moves 5 along x
        assert_eq!(a.pos, Vec2::new(110.0, 50.0));
        assert_eq!(b.pos, Vec2::new(95.0, 50.0));
        assert_eq!(a.vel, Vec2::new(-1.0, 0.0));
        assert_eq!(b.vel, Vec2::new(1.0, 0.0));
    }

    #[test]
    fn test_sub_unit_distance_uses_floor() {
        let mut a = Ball::new(Vec2::new(100.5, 50.0), Vec2::new(3.0, 0.0));
        let mut b = Ball::new(Vec2::new(100.0, 50.0), Vec2::new(-3.0, 0.0));

        assert!(resolve_pair(&mut a, &mut b, MIN_DIST));
        // Distance floored to 1: push is offset * (15 - 1) / 2 each way
        assert_eq!(a.pos, Vec2::new(104.0, 50.0));
        assert_eq!(b.pos, Vec2::new(96.5, 50.0));
        assert!((a.pos.distance(b.pos) - 7.5).abs() < 1e-4);
        assert_eq!(a.vel, Vec2::new(-3.0, 0.0));
    }

    #[test]
    fn test_separated_balls_untouched() {
        let before = vec![
            Ball::new(Vec2::new(100.0, 100.0), Vec2::new(10.0, 0.0)),
            Ball::new(Vec2::new(115.0, 100.0), Vec2::new(-10.0, 0.0)),
        ];
        let mut balls = before.clone();
        assert_eq!(resolve_ball_pairs(&mut balls, MIN_DIST), 0);
        assert_eq!(balls, before);
    }

    #[test]
    fn test_triple_overlap_is_reproducible() {
        let start = vec![
            Ball::new(Vec2::new(100.0, 100.0), Vec2::new(1.0, 0.0)),
            Ball::new(Vec2::new(104.0, 100.0), Vec2::new(2.0, 0.0)),
            Ball::new(Vec2::new(108.0, 100.0), Vec2::new(3.0, 0.0)),
        ];

        let mut first = start.clone();
        let mut second = start.clone();
        resolve_ball_pairs(&mut first, MIN_DIST);
        resolve_ball_pairs(&mut second, MIN_DIST);
        assert_eq!(first, second);

        // Velocities are only ever permuted, never created or lost
        let mut xs: Vec<f32> = first.iter().map(|b| b.vel.x).collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
    }
}
