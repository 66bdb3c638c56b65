//! Canonical prototile polygons
//!
//! Every shape is built from a reference quadrance `Q` in a fixed orientation:
//! the apex V0 sits straight above the vertex centroid, which is the origin,
//! and the boundary runs clockwise from V0 (top, right, bottom, left). Faces
//! list the boundary in reverse so their winding is counter-clockwise, giving
//! an outward +z normal.
//!
//! Diagonal ratios follow from the interior angles: a rhombus with acute angle
//! α has diagonals in ratio cot(α/2), i.e. cos36/sin36 for the thick rhombus
//! and sin72/cos72 for the thin one. The acute vertices lie on the long
//! diagonal, the short diagonal (length √Q) joins the obtuse vertices.

use crate::math::phi::RatioProvider;
use crate::spatial::point::{Point2, centroid};
use crate::spatial::tiles::TileKind;

/// Explicit polygon for one prototile
#[derive(Clone, Debug, PartialEq)]
pub struct Prototile {
    /// Shape this polygon realises
    pub kind: TileKind,
    /// Boundary vertices, clockwise from the apex
    pub vertices: Vec<Point2>,
    /// Boundary edges as index pairs `(i, i + 1 mod n)`
    pub edges: Vec<[usize; 2]>,
    /// Face indices with outward winding, when requested
    pub face: Option<Vec<usize>>,
}

impl Prototile {
    /// Wrap a vertex loop, deriving its edges and optional face
    pub fn from_vertices(kind: TileKind, vertices: Vec<Point2>, face_visible: bool) -> Self {
        let n = vertices.len();
        let edges = (0..n).map(|i| [i, (i + 1) % n]).collect();
        let face = face_visible.then(|| reversed_loop(n));

        Self {
            kind,
            vertices,
            edges,
            face,
        }
    }

    /// Build the canonical polygon for `kind` at quadrance `quadrance`
    pub fn for_kind<P: RatioProvider + ?Sized>(
        provider: &P,
        kind: TileKind,
        quadrance: f64,
        face_visible: bool,
    ) -> Self {
        Self::from_vertices(
            kind,
            template_vertices(provider, kind, quadrance),
            face_visible,
        )
    }

    /// Thick rhombus, angles 72°, 108°, 72°, 108° from V0
    pub fn thick_rhombus<P: RatioProvider + ?Sized>(
        provider: &P,
        quadrance: f64,
        face_visible: bool,
    ) -> Self {
        Self::for_kind(provider, TileKind::ThickRhombus, quadrance, face_visible)
    }

    /// Thin rhombus, angles 36°, 144°, 36°, 144° from V0
    pub fn thin_rhombus<P: RatioProvider + ?Sized>(
        provider: &P,
        quadrance: f64,
        face_visible: bool,
    ) -> Self {
        Self::for_kind(provider, TileKind::ThinRhombus, quadrance, face_visible)
    }

    /// Kite with short edge √Q and long edge φ√Q
    pub fn kite<P: RatioProvider + ?Sized>(provider: &P, quadrance: f64, face_visible: bool) -> Self {
        Self::for_kind(provider, TileKind::Kite, quadrance, face_visible)
    }

    /// Dart with short edge √Q and long edge φ√Q
    pub fn dart<P: RatioProvider + ?Sized>(provider: &P, quadrance: f64, face_visible: bool) -> Self {
        Self::for_kind(provider, TileKind::Dart, quadrance, face_visible)
    }

    /// Large Robinson triangle (golden triangle)
    pub fn robinson_large<P: RatioProvider + ?Sized>(
        provider: &P,
        quadrance: f64,
        face_visible: bool,
    ) -> Self {
        Self::for_kind(provider, TileKind::RobinsonLarge, quadrance, face_visible)
    }

    /// Small Robinson triangle (golden gnomon)
    pub fn robinson_small<P: RatioProvider + ?Sized>(
        provider: &P,
        quadrance: f64,
        face_visible: bool,
    ) -> Self {
        Self::for_kind(provider, TileKind::RobinsonSmall, quadrance, face_visible)
    }

    /// Interior angle at each vertex in degrees, reflex angles included
    pub fn interior_angles(&self) -> Vec<f64> {
        interior_angles(&self.vertices)
    }
}

/// Interior angles in degrees of a clockwise vertex loop
pub fn interior_angles(vertices: &[Point2]) -> Vec<f64> {
    let n = vertices.len();
    (0..n)
        .filter_map(|i| {
            let current = *vertices.get(i)?;
            let next = *vertices.get((i + 1) % n)?;
            let previous = *vertices.get((i + n - 1) % n)?;
            let from = (previous - current).angle_degrees();
            let to = (next - current).angle_degrees();
            Some((to - from).rem_euclid(360.0))
        })
        .collect()
}

fn reversed_loop(n: usize) -> Vec<usize> {
    std::iter::once(0).chain((1..n).rev()).collect()
}

fn centered<const N: usize>(vertices: [Point2; N]) -> [Point2; N] {
    let center = centroid(&vertices);
    vertices.map(|v| v - center)
}

/// Thick rhombus vertices `[top, right, bottom, left]`
pub fn thick_rhombus_vertices<P: RatioProvider + ?Sized>(
    provider: &P,
    quadrance: f64,
) -> [Point2; 4] {
    let half_short = quadrance.sqrt() / 2.0;
    let half_long = half_short * provider.cos36() / provider.sin36();
    rhombus(half_short, half_long)
}

/// Thin rhombus vertices `[top, right, bottom, left]`
pub fn thin_rhombus_vertices<P: RatioProvider + ?Sized>(
    provider: &P,
    quadrance: f64,
) -> [Point2; 4] {
    let half_short = quadrance.sqrt() / 2.0;
    let half_long = half_short * provider.sin72() / provider.cos72();
    rhombus(half_short, half_long)
}

const fn rhombus(half_short: f64, half_long: f64) -> [Point2; 4] {
    [
        Point2::new(0.0, half_long),
        Point2::new(half_short, 0.0),
        Point2::new(0.0, -half_long),
        Point2::new(-half_short, 0.0),
    ]
}

/// Kite vertices `[apex, right, tail, left]`, centred on the vertex centroid
///
/// The long edges leave the 72° apex at ±36° from the axis; the short edges
/// close at the 144° tail, which lands φ√Q below the apex.
pub fn kite_vertices<P: RatioProvider + ?Sized>(provider: &P, quadrance: f64) -> [Point2; 4] {
    let short = quadrance.sqrt();
    let long = provider.phi() * short;
    let wing = Point2::new(long * provider.sin36(), -long * provider.cos36());
    let tail_y = short.mul_add(-provider.cos72(), wing.y);

    centered([
        Point2::ORIGIN,
        wing,
        Point2::new(0.0, tail_y),
        Point2::new(-wing.x, wing.y),
    ])
}

/// Dart vertices `[apex, right, notch, left]`, centred on the vertex centroid
///
/// Same wings as the kite, but the short edges fold inwards to the 216° notch
/// √Q below the apex.
pub fn dart_vertices<P: RatioProvider + ?Sized>(provider: &P, quadrance: f64) -> [Point2; 4] {
    let short = quadrance.sqrt();
    let long = provider.phi() * short;
    let wing = Point2::new(long * provider.sin36(), -long * provider.cos36());
    let notch_y = short.mul_add(provider.cos72(), wing.y);

    centered([
        Point2::ORIGIN,
        wing,
        Point2::new(0.0, notch_y),
        Point2::new(-wing.x, wing.y),
    ])
}

/// Golden triangle vertices `[apex, right, left]`: base √Q, legs φ√Q
pub fn robinson_large_vertices<P: RatioProvider + ?Sized>(
    provider: &P,
    quadrance: f64,
) -> [Point2; 3] {
    let base = quadrance.sqrt();
    // cos 18° = sin 72°
    let height = provider.phi() * base * provider.sin72();
    centered([
        Point2::ORIGIN,
        Point2::new(base / 2.0, -height),
        Point2::new(-base / 2.0, -height),
    ])
}

/// Golden gnomon vertices `[apex, right, left]`: legs √Q, base φ√Q
pub fn robinson_small_vertices<P: RatioProvider + ?Sized>(
    provider: &P,
    quadrance: f64,
) -> [Point2; 3] {
    let leg = quadrance.sqrt();
    // sin 54° = cos 36°, cos 54° = sin 36°
    let half_base = leg * provider.cos36();
    let height = leg * provider.sin36();
    centered([
        Point2::ORIGIN,
        Point2::new(half_base, -height),
        Point2::new(-half_base, -height),
    ])
}

/// Canonical quadrilateral for `kind`, or `None` for the triangles
pub fn quad_template<P: RatioProvider + ?Sized>(
    provider: &P,
    kind: TileKind,
    quadrance: f64,
) -> Option<[Point2; 4]> {
    match kind {
        TileKind::ThickRhombus => Some(thick_rhombus_vertices(provider, quadrance)),
        TileKind::ThinRhombus => Some(thin_rhombus_vertices(provider, quadrance)),
        TileKind::Kite => Some(kite_vertices(provider, quadrance)),
        TileKind::Dart => Some(dart_vertices(provider, quadrance)),
        TileKind::RobinsonLarge | TileKind::RobinsonSmall => None,
    }
}

/// Canonical vertex loop for any kind
pub fn template_vertices<P: RatioProvider + ?Sized>(
    provider: &P,
    kind: TileKind,
    quadrance: f64,
) -> Vec<Point2> {
    match kind {
        TileKind::RobinsonLarge => robinson_large_vertices(provider, quadrance).to_vec(),
        TileKind::RobinsonSmall => robinson_small_vertices(provider, quadrance).to_vec(),
        TileKind::ThickRhombus | TileKind::ThinRhombus | TileKind::Kite | TileKind::Dart => {
            quad_template(provider, kind, quadrance)
                .map(|quad| quad.to_vec())
                .unwrap_or_default()
        }
    }
}
