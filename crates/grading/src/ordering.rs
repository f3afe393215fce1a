use plane_types::Point;

/// Reorder plotted points so they line up with the expected points.
///
/// Each expected point, in order, takes the nearest remaining student point
/// (ties go to the earliest). Student points left over once the expected
/// points run out keep their relative order at the end. The result is
/// always a permutation of `student`.
pub fn order_student_points(expected: &[Point], student: &[Point]) -> Vec<Point> {
    let mut pool: Vec<Point> = student.to_vec();
    let mut ordered = Vec::with_capacity(student.len());

    for exp in expected {
        if pool.is_empty() {
            break;
        }
        let mut best = 0;
        let mut best_dist = exp.distance_squared_to(&pool[0]);
        for (i, candidate) in pool.iter().enumerate().skip(1) {
            let d = exp.distance_squared_to(candidate);
            if d < best_dist {
                best = i;
                best_dist = d;
            }
        }
        ordered.push(pool.remove(best));
    }

    ordered.extend(pool);
    ordered
}
