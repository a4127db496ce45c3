//! Decides whether a candidate face is hidden by the faces of the neighbouring
//! cell that point back at it.
//!
//! Both sides are compared after projecting onto the boundary plane they share.
//! Only faces lying on that plane take part: a candidate set back from the
//! boundary is always visible, and opposing faces set back from theirs (or
//! sloped) never hide anything.

use blockface_blocks::{Direction, EPSILON, Face};
use blockface_geom::Vec2;

/// Convex or simple polygon with up to four corners, in perimeter order.
#[derive(Copy, Clone, Debug)]
pub struct Polygon2 {
    pts: [Vec2; 4],
    len: usize,
}

impl Polygon2 {
    pub fn project(face: &Face, dir: Direction) -> Self {
        let axis = dir.axis();
        let mut pts = [Vec2::ZERO; 4];
        let mut len = 0;
        for c in face.outline() {
            pts[len] = axis.project(c.pos);
            len += 1;
        }
        Polygon2 { pts, len }
    }

    #[inline]
    pub fn points(&self) -> &[Vec2] {
        &self.pts[..self.len]
    }

    /// Boundary-inclusive containment.
    pub fn contains(&self, p: Vec2) -> bool {
        let pts = self.points();
        let n = pts.len();
        let mut j = n - 1;
        for i in 0..n {
            if on_segment(p, pts[j], pts[i]) {
                return true;
            }
            j = i;
        }
        // Even-odd crossing test
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let (a, b) = (pts[i], pts[j]);
            if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
                inside = !inside;
            }
            j = i;
        }
        inside
    }
}

fn on_segment(p: Vec2, a: Vec2, b: Vec2) -> bool {
    let ab = b - a;
    let ap = p - a;
    let len2 = ab.x * ab.x + ab.y * ab.y;
    if len2 <= f32::EPSILON {
        let d = ap.x * ap.x + ap.y * ap.y;
        return d <= EPSILON * EPSILON;
    }
    let t = ((ap.x * ab.x + ap.y * ab.y) / len2).clamp(0.0, 1.0);
    let dx = ap.x - ab.x * t;
    let dy = ap.y - ab.y * t;
    dx * dx + dy * dy <= EPSILON * EPSILON
}

/// True when `face`, pointing along `dir`, is hidden by `opposing`.
///
/// `opposing` are the neighbour's faces listed under `dir.opposite()`, in the
/// neighbour's own block-local space.
pub fn is_occluded(face: &Face, opposing: &[Face], dir: Direction) -> bool {
    is_occluded_with(face, opposing, dir, &mut Vec::new())
}

/// Same as [`is_occluded`], projecting occluders into `scratch` so repeated
/// calls reuse one buffer.
pub fn is_occluded_with(
    face: &Face,
    opposing: &[Face],
    dir: Direction,
    scratch: &mut Vec<Polygon2>,
) -> bool {
    if face.is_always_render() || opposing.is_empty() {
        return false;
    }
    if !face.lies_on(dir) {
        return false;
    }
    let back = dir.opposite();
    let axis = dir.axis();

    // Fast path: candidate rectangle inside some occluder rectangle
    let cb = face.bounds();
    let (cmin, cmax) = (axis.project(cb.min), axis.project(cb.max));
    let mut any_contact = false;
    for o in opposing.iter().filter(|o| o.lies_on(back)) {
        any_contact = true;
        let ob = o.bounds();
        let (omin, omax) = (axis.project(ob.min), axis.project(ob.max));
        if cmin.x >= omin.x - EPSILON
            && cmin.y >= omin.y - EPSILON
            && cmax.x <= omax.x + EPSILON
            && cmax.y <= omax.y + EPSILON
        {
            return true;
        }
    }
    if !any_contact {
        return false;
    }

    // Slow path
    let candidate = Polygon2::project(face, dir);
    scratch.clear();
    scratch.extend(
        opposing
            .iter()
            .filter(|o| o.lies_on(back))
            .map(|o| Polygon2::project(o, dir)),
    );
    let occluders: &[Polygon2] = scratch;

    // Survivor: a candidate corner outside every occluder stays visible
    for &v in candidate.points() {
        if !occluders.iter().any(|o| o.contains(v)) {
            return false;
        }
    }

    // Complementary: an occluder corner inside the candidate that no other
    // occluder covers marks a visible gap
    for (i, oi) in occluders.iter().enumerate() {
        for &v in oi.points() {
            if !candidate.contains(v) {
                continue;
            }
            let covered = occluders
                .iter()
                .enumerate()
                .any(|(j, oj)| j != i && oj.contains(v));
            if !covered {
                return false;
            }
        }
    }

    true
}

#[inline]
pub fn is_visible(face: &Face, opposing: &[Face], dir: Direction) -> bool {
    !is_occluded(face, opposing, dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon2 {
        Polygon2::project(&Face::full(Direction::PosZ), Direction::PosZ)
    }

    #[test]
    fn polygon_boundary_counts_as_inside() {
        let sq = unit_square();
        assert!(sq.contains(Vec2::new(0.0, 0.0)));
        assert!(sq.contains(Vec2::new(0.5, 0.5)));
        assert!(sq.contains(Vec2::new(-0.5, 0.1)));
        assert!(sq.contains(Vec2::new(0.1, 0.5 + EPSILON * 0.5)));
        assert!(!sq.contains(Vec2::new(0.6, 0.0)));
        assert!(!sq.contains(Vec2::new(0.0, -0.51)));
    }

    #[test]
    fn triangle_containment() {
        let t = Face::tri_at(
            Direction::PosX,
            [
                blockface_geom::Vec3::new(0.5, -0.5, 0.5),
                blockface_geom::Vec3::new(0.5, -0.5, -0.5),
                blockface_geom::Vec3::new(0.5, 0.5, -0.5),
            ],
        );
        let p = Polygon2::project(&t, Direction::PosX);
        // (y, z) projection; hypotenuse runs from (-0.5, 0.5) to (0.5, -0.5)
        assert!(p.contains(Vec2::new(-0.4, -0.4)));
        assert!(p.contains(Vec2::new(0.0, 0.0)));
        assert!(!p.contains(Vec2::new(0.3, 0.3)));
    }

    #[test]
    fn full_faces_hide_each_other() {
        for dir in Direction::ALL {
            let f = Face::full(dir);
            let o = Face::full(dir.opposite());
            assert!(is_occluded(&f, &[o], dir), "{dir:?}");
        }
    }

    #[test]
    fn nothing_opposite_means_visible() {
        assert!(is_visible(&Face::full(Direction::PosY), &[], Direction::PosY));
    }

    #[test]
    fn always_render_is_never_hidden() {
        let f = Face::full(Direction::NegX).always_render();
        assert!(!is_occluded(&f, &[Face::full(Direction::PosX)], Direction::NegX));
    }

    #[test]
    fn recessed_candidate_is_visible() {
        let f = Face::rect(Direction::PosY, 0.0, (-0.5, 0.5), (-0.5, 0.5));
        assert!(!is_occluded(&f, &[Face::full(Direction::NegY)], Direction::PosY));
    }

    #[test]
    fn reused_scratch_matches_fresh_calls() {
        let dir = Direction::PosZ;
        let cand = Face::full(dir);
        let back = dir.opposite();
        let cases = [
            vec![
                Face::rect(back, -0.5, (-0.5, 0.0), (-0.5, 0.5)),
                Face::rect(back, -0.5, (0.0, 0.5), (-0.5, 0.5)),
            ],
            vec![
                Face::rect(back, -0.5, (-0.5, 0.1), (-0.5, 0.5)),
                Face::rect(back, -0.5, (-0.1, 0.5), (-0.5, 0.5)),
            ],
            vec![Face::rect(back, -0.5, (-0.5, 0.5), (-0.5, 0.2))],
        ];
        let mut scratch = Vec::with_capacity(crate::constants::SCRATCH_FACES);
        let cap = scratch.capacity();
        for opposing in &cases {
            assert_eq!(
                is_occluded_with(&cand, opposing, dir, &mut scratch),
                is_occluded(&cand, opposing, dir),
                "{opposing:?}"
            );
        }
        assert_eq!(scratch.capacity(), cap);
    }

    #[test]
    fn recessed_occluder_is_ignored() {
        let f = Face::full(Direction::PosY);
        let sunk = Face::rect(Direction::NegY, 0.0, (-0.5, 0.5), (-0.5, 0.5));
        assert!(!is_occluded(&f, &[sunk], Direction::PosY));
    }
}
