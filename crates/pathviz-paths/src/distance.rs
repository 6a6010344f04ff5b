use pathviz_core::Point;

/// Manhattan (L1) distance between two points, `|r1-r2| + |c1-c2|`.
///
/// Admissible and consistent for 4-directional unit-cost moves.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
