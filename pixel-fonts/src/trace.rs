//! Tracing pixel bitmaps into closed vector contours.
//!
//! A bitmap is converted to outlines in three steps: ink pixels are grouped
//! into 4-connected regions, each region's boundary is split into directed
//! edges, and the edges are stitched into closed loops with collinear
//! points removed. Edge directions are fixed per side, so outer boundaries
//! and the boundaries of enclosed holes wind in opposite senses and a
//! nonzero-winding fill leaves holes empty without any post processing.

use std::collections::BTreeSet;

use crate::types::{Bitmap, Point};

/// A closed loop of pixel-grid corner points, y-down.
///
/// The closing segment back to the first point is implied. Under the
/// y-down shoelace sum, outer contours have positive area and holes
/// negative; the y-flip into design space reverses both.
pub type Contour = Vec<Point<i16>>;

/// Trace every filled region of `bitmap` into closed contours.
///
/// Each 4-connected region contributes one outer contour plus one contour
/// per enclosed hole. Diagonal contact does not connect regions. The
/// result is deterministic for a given bitmap.
pub fn trace_contours(bitmap: &Bitmap) -> Vec<Contour> {
    let mut contours = Vec::new();
    for group in pixel_groups(bitmap) {
        let chains = stitch(boundary_edges(bitmap, &group));
        for mut chain in chains {
            if chain.first() != chain.last() {
                panic!(
                    "boundary edges failed to close: chain runs {:?} to {:?}",
                    chain.first(),
                    chain.last()
                );
            }
            chain.remove(0);
            // The seam can leave one more collinear run across the former
            // first/last point.
            let last = chain[chain.len() - 1];
            if collinear(chain[chain.len() - 2], last, chain[0]) {
                chain.pop();
            }
            contours.push(chain);
        }
    }
    contours
}

/// Partition ink pixels into 4-connected groups.
///
/// Scans row-major; each ink pixel starts a fresh group and absorbs any
/// group holding its left or top neighbor. Ordered sets keep the eventual
/// edge emission order independent of hash seeding.
fn pixel_groups(bitmap: &Bitmap) -> Vec<BTreeSet<(i32, i32)>> {
    let mut groups: Vec<BTreeSet<(i32, i32)>> = Vec::new();
    for (y, row) in bitmap.rows().iter().enumerate() {
        for (x, value) in row.iter().enumerate() {
            if *value == 0 {
                continue;
            }
            let (x, y) = (x as i32, y as i32);
            let mut merged = BTreeSet::from([(x, y)]);
            let mut i = 0;
            while i < groups.len() {
                // Scanning right and down, only left and top can already
                // be grouped.
                if groups[i].contains(&(x - 1, y)) || groups[i].contains(&(x, y - 1)) {
                    let group = groups.remove(i);
                    merged.extend(group);
                } else {
                    i += 1;
                }
            }
            groups.push(merged);
        }
    }
    groups
}

/// Collect one directed edge per pixel side that faces blank space.
///
/// With p0..p3 the pixel corners clockwise from top-left, the sides are
/// emitted as left `[p3, p0]`, right `[p1, p2]`, top `[p0, p1]`, bottom
/// `[p2, p3]`. These orientations chain into loops that wind opposite
/// ways for outer boundaries and holes.
fn boundary_edges(bitmap: &Bitmap, group: &BTreeSet<(i32, i32)>) -> Vec<Vec<Point<i16>>> {
    let mut edges = Vec::new();
    for &(x, y) in group {
        let p0 = Point::new(x as i16, y as i16);
        let p1 = Point::new(x as i16 + 1, y as i16);
        let p2 = Point::new(x as i16 + 1, y as i16 + 1);
        let p3 = Point::new(x as i16, y as i16 + 1);
        if !bitmap.is_ink(x - 1, y) {
            edges.push(vec![p3, p0]);
        }
        if !bitmap.is_ink(x + 1, y) {
            edges.push(vec![p1, p2]);
        }
        if !bitmap.is_ink(x, y - 1) {
            edges.push(vec![p0, p1]);
        }
        if !bitmap.is_ink(x, y + 1) {
            edges.push(vec![p2, p3]);
        }
    }
    edges
}

/// Join edge chains end to start until no more joins are possible.
///
/// Takes the newest pending chain and scans solved chains newest-first,
/// merging on a shared endpoint: tail to head in either order, or tail to
/// tail after reversing the solved chain. The scan continues with the
/// grown chain. Input contours are small, so the quadratic scan is fine.
fn stitch(mut pending: Vec<Vec<Point<i16>>>) -> Vec<Vec<Point<i16>>> {
    let mut solved: Vec<Vec<Point<i16>>> = Vec::new();
    while let Some(mut chain) = pending.pop() {
        let mut i = solved.len();
        while i > 0 {
            i -= 1;
            let other = &mut solved[i];
            if chain.last() == other.first() {
                let other = solved.remove(i);
                chain = join(chain, other);
            } else if chain.last() == other.last() {
                other.reverse();
                let other = solved.remove(i);
                chain = join(chain, other);
            } else if other.last() == chain.first() {
                let other = solved.remove(i);
                chain = join(other, chain);
            }
        }
        solved.push(chain);
    }
    solved
}

/// Concatenate two chains sharing `left`'s last point as `right`'s first,
/// dropping the duplicated joint and eliminating it entirely when the
/// three points around it run straight.
fn join(mut left: Vec<Point<i16>>, mut right: Vec<Point<i16>>) -> Vec<Point<i16>> {
    right.remove(0);
    let joint = left[left.len() - 1];
    if collinear(left[left.len() - 2], joint, right[0]) {
        left.pop();
    }
    left.extend(right);
    left
}

/// Whether three consecutive grid points run straight. Only axis-aligned
/// runs occur on the pixel grid.
fn collinear(before: Point<i16>, joint: Point<i16>, after: Point<i16>) -> bool {
    (joint.x == before.x && joint.x == after.x) || (joint.y == before.y && joint.y == after.y)
}

#[cfg(test)]
mod tests {
    use super::{trace_contours, Contour};
    use crate::types::{Bitmap, Point};
    use pretty_assertions::assert_eq;

    fn points(pairs: &[(i16, i16)]) -> Contour {
        pairs.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    /// Twice the signed area under the y-down shoelace sum.
    fn area_x2(contour: &Contour) -> i64 {
        let mut sum = 0i64;
        for (i, p) in contour.iter().enumerate() {
            let q = contour[(i + 1) % contour.len()];
            sum += p.x as i64 * q.y as i64 - q.x as i64 * p.y as i64;
        }
        sum
    }

    fn total_area_x2(contours: &[Contour]) -> i64 {
        contours.iter().map(area_x2).sum()
    }

    #[test]
    fn empty_and_blank() {
        assert!(trace_contours(&Bitmap::default()).is_empty());
        assert!(trace_contours(&Bitmap::new(vec![vec![0; 3]; 2])).is_empty());
    }

    #[test]
    fn single_pixel_unit_square() {
        let contours = trace_contours(&Bitmap::new(vec![vec![1]]));
        assert_eq!(contours, vec![points(&[(0, 0), (1, 0), (1, 1), (0, 1)])]);
        assert_eq!(area_x2(&contours[0]), 2);
    }

    #[test]
    fn rectangle_collapses_to_four_points() {
        let contours = trace_contours(&Bitmap::new(vec![vec![1, 1]]));
        assert_eq!(contours, vec![points(&[(0, 0), (2, 0), (2, 1), (0, 1)])]);

        let contours = trace_contours(&Bitmap::new(vec![vec![1; 4]; 3]));
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].len(), 4);
        assert_eq!(area_x2(&contours[0]), 2 * 12);
    }

    #[test]
    fn ell_shape_has_six_corners() {
        let contours = trace_contours(&Bitmap::new(vec![vec![1, 0], vec![1, 1]]));
        assert_eq!(
            contours,
            vec![points(&[(0, 0), (1, 0), (1, 1), (2, 1), (2, 2), (0, 2)])]
        );
        assert_eq!(area_x2(&contours[0]), 2 * 3);
    }

    #[test]
    fn ring_yields_hole_with_opposite_winding() {
        let contours = trace_contours(&Bitmap::new(vec![
            vec![1, 1, 1],
            vec![1, 0, 1],
            vec![1, 1, 1],
        ]));
        assert_eq!(contours.len(), 2);
        let (outer, hole) = if area_x2(&contours[0]) > 0 {
            (&contours[0], &contours[1])
        } else {
            (&contours[1], &contours[0])
        };
        assert_eq!(outer.len(), 4);
        assert_eq!(hole.len(), 4);
        assert_eq!(area_x2(outer), 2 * 9);
        assert_eq!(area_x2(hole), -2);
        // Net area equals the ink pixel count.
        assert_eq!(total_area_x2(&contours), 2 * 8);
    }

    #[test]
    fn diagonal_pixels_stay_separate() {
        let contours = trace_contours(&Bitmap::new(vec![vec![1, 0], vec![0, 1]]));
        assert_eq!(contours.len(), 2);
        assert_eq!(contours[0].len(), 4);
        assert_eq!(contours[1].len(), 4);
        assert_eq!(total_area_x2(&contours), 2 * 2);
    }

    #[test]
    fn plus_shape_single_contour() {
        let contours = trace_contours(&Bitmap::new(vec![
            vec![0, 1, 0],
            vec![1, 1, 1],
            vec![0, 1, 0],
        ]));
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].len(), 12);
        assert_eq!(area_x2(&contours[0]), 2 * 5);
    }

    #[test]
    fn tall_column_collapses_to_four_points() {
        let contours = trace_contours(&Bitmap::new(vec![vec![1], vec![1], vec![1]]));
        assert_eq!(contours, vec![points(&[(0, 0), (1, 0), (1, 3), (0, 3)])]);
    }

    #[test]
    fn tracing_is_deterministic() {
        let bitmap = Bitmap::new(vec![
            vec![1, 0, 1, 1],
            vec![1, 1, 1, 0],
            vec![0, 1, 0, 1],
        ]);
        assert_eq!(trace_contours(&bitmap), trace_contours(&bitmap));
    }
}
