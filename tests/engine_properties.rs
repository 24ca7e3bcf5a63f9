use pretty_assertions::assert_eq;
use ringmesh::{triangulate, MeshError, Point, Polygon, RingDefect};

/// Deterministic pseudo-random radii so failures reproduce.
struct Lcg(u64);

impl Lcg {
    fn next_unit(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Star-shaped (hence simple) polygon around the origin, counter-clockwise.
fn star(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = Lcg(seed);
    (0..n)
        .map(|i| {
            let theta = std::f64::consts::TAU * i as f64 / n as f64;
            let r = 100.0 * (0.5 + 0.5 * rng.next_unit());
            Point::new(r * theta.cos(), r * theta.sin())
        })
        .collect()
}

fn pts(coords: &[[f64; 2]]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
}

fn polygon(outer: &[Point], holes: &[Vec<Point>]) -> Polygon {
    Polygon::new(outer, holes).unwrap()
}

fn ring_area(points: &[Point]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let (a, b) = (points[i], points[(i + 1) % n]);
            a.x * b.y - b.x * a.y
        })
        .sum::<f64>()
        .abs()
        / 2.0
}

fn mesh_area(flat: &[Point], indices: &[u32]) -> f64 {
    indices
        .chunks_exact(3)
        .map(|t| {
            let (a, b, c) = (flat[t[0] as usize], flat[t[1] as usize], flat[t[2] as usize]);
            ((b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)).abs() / 2.0
        })
        .sum()
}

/// Every input index `0..n` appears in at least one triangle.
fn assert_covers_every_vertex(n: usize, indices: &[u32]) {
    let mut seen = vec![false; n];
    for &i in indices {
        seen[i as usize] = true;
    }
    let missing: Vec<usize> = (0..n).filter(|&i| !seen[i]).collect();
    assert_eq!(missing, Vec::<usize>::new());
}

/// Triangles as sorted coordinate triples, independent of index numbering.
fn canonical(flat: &[Point], indices: &[u32]) -> Vec<[(u64, u64); 3]> {
    let mut tris: Vec<[(u64, u64); 3]> = indices
        .chunks_exact(3)
        .map(|t| {
            let mut corners = [0usize, 1, 2].map(|k| {
                let p = flat[t[k] as usize];
                (p.x.to_bits(), p.y.to_bits())
            });
            corners.sort_unstable();
            corners
        })
        .collect();
    tris.sort_unstable();
    tris
}

#[test]
fn unit_triangle() {
    let tri = triangulate(&polygon(&pts(&[[0.0, 0.0], [1.0, 0.0], [0.5, 1.0]]), &[]));
    assert!(tri.is_complete());
    assert_eq!(tri.indices().as_slice(), &[0, 1, 2]);
}

#[test]
fn square_covers_its_area() {
    let square = pts(&[[0.0, 0.0], [100.0, 0.0], [100.0, 100.0], [0.0, 100.0]]);
    let tri = triangulate(&polygon(&square, &[]));
    assert_eq!(tri.indices().triangle_count(), 2);
    assert!((mesh_area(&square, tri.indices().as_slice()) - 10_000.0).abs() < 1e-9);
}

#[test]
fn star_polygons_yield_n_minus_two_triangles() {
    for n in 3..64 {
        let outer = star(n, n as u64);
        let tri = triangulate(&polygon(&outer, &[]));
        assert!(tri.is_complete(), "n = {}: {:?}", n, tri.incomplete());

        let indices = tri.indices().as_slice();
        assert_eq!(tri.indices().triangle_count(), n - 2, "n = {}", n);
        assert!(indices.iter().all(|&i| (i as usize) < n));
        assert_covers_every_vertex(n, indices);

        let expected = ring_area(&outer);
        let got = mesh_area(&outer, indices);
        assert!((got - expected).abs() <= 1e-6 * expected, "n = {}: {} vs {}", n, got, expected);
    }
}

#[test]
fn same_input_same_output() {
    let poly = polygon(&star(40, 7), &[]);
    let first = triangulate(&poly);
    for _ in 0..5 {
        assert_eq!(triangulate(&poly), first);
    }
}

#[test]
fn winding_does_not_change_the_mesh() {
    let ccw = star(24, 99);
    let mut cw = ccw.clone();
    cw.reverse();

    let a = triangulate(&polygon(&ccw, &[]));
    let b = triangulate(&polygon(&cw, &[]));
    assert!(a.is_complete() && b.is_complete());
    assert_eq!(canonical(&ccw, a.indices().as_slice()), canonical(&cw, b.indices().as_slice()));
}

#[test]
fn degenerate_input_is_rejected_not_triangulated() {
    let err = Polygon::new(&pts(&[[0.0, 0.0], [1.0, 1.0]]), &[] as &[Vec<Point>]).unwrap_err();
    assert_eq!(err, MeshError::InvalidRing { ring: 0, defect: RingDefect::TooFewDistinctPoints { distinct: 2 } });

    let err = Polygon::new(&[], &[] as &[Vec<Point>]).unwrap_err();
    assert_eq!(err, MeshError::EmptyPolygon);
}

#[test]
fn collinear_vertex_on_an_edge() {
    let outer = pts(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [1.0, 1.0]]);
    let tri = triangulate(&polygon(&outer, &[]));
    assert!(tri.is_complete());
    assert_eq!(tri.indices().triangle_count(), 2);
    assert!((mesh_area(&outer, tri.indices().as_slice()) - 1.0).abs() < 1e-12);
    assert_covers_every_vertex(outer.len(), tri.indices().as_slice());
}

/// Square of side `k` with a vertex at every unit step along each edge.
fn subdivided_square(k: usize) -> Vec<Point> {
    let s = k as f64;
    let mut ring = Vec::with_capacity(4 * k);
    ring.extend((0..k).map(|i| Point::new(i as f64, 0.0)));
    ring.extend((0..k).map(|i| Point::new(s, i as f64)));
    ring.extend((0..k).map(|i| Point::new(s - i as f64, s)));
    ring.extend((0..k).map(|i| Point::new(0.0, s - i as f64)));
    ring
}

#[test]
fn vertices_on_subdivided_edges_are_all_used() {
    for k in 1..12 {
        let outer = subdivided_square(k);
        let tri = triangulate(&polygon(&outer, &[]));
        assert!(tri.is_complete(), "k = {}: {:?}", k, tri.incomplete());

        let indices = tri.indices().as_slice();
        assert_covers_every_vertex(outer.len(), indices);
        let side = k as f64;
        assert!((mesh_area(&outer, indices) - side * side).abs() < 1e-9, "k = {}", k);
    }

    // Fan: many collinear base points under a single apex, in both rotations.
    for base in 2..20 {
        let mut outer: Vec<Point> = (0..base).map(|i| Point::new(i as f64, 0.0)).collect();
        outer.push(Point::new((base - 1) as f64 / 2.0, 5.0));
        for _ in 0..2 {
            let tri = triangulate(&polygon(&outer, &[]));
            assert!(tri.is_complete(), "base = {}", base);
            assert_covers_every_vertex(outer.len(), tri.indices().as_slice());
            outer.rotate_left(1);
        }
    }
}

#[test]
fn self_intersecting_ring_is_flagged() {
    let outer = pts(&[[0.0, 0.0], [2.0, 2.0], [2.0, 0.0], [0.0, 2.0]]);
    let tri = triangulate(&polygon(&outer, &[]));
    let signal = tri.incomplete().expect("bowtie cannot be fully clipped");
    assert!(signal.remaining_vertices > 0);
    assert!(signal.unbridged_holes.is_empty());
}

fn flatten(outer: &[Point], holes: &[Vec<Point>]) -> (Vec<Point>, Vec<f64>, Vec<usize>) {
    let mut flat = outer.to_vec();
    let mut starts = Vec::new();
    for hole in holes {
        starts.push(flat.len());
        flat.extend_from_slice(hole);
    }
    let coords = flat.iter().flat_map(|p| [p.x, p.y]).collect();
    (flat, coords, starts)
}

#[test]
fn holes_agree_with_earcutr() {
    let outer = pts(&[[0.0, 0.0], [100.0, 5.0], [95.0, 100.0], [5.0, 95.0]]);
    let cases: Vec<Vec<Vec<Point>>> = vec![
        vec![pts(&[[30.0, 30.0], [60.0, 32.0], [58.0, 61.0], [33.0, 57.0]])],
        vec![
            pts(&[[20.0, 20.0], [35.0, 22.0], [33.0, 38.0], [18.0, 35.0]]),
            pts(&[[60.0, 55.0], [78.0, 58.0], [75.0, 80.0], [58.0, 76.0]]),
        ],
        vec![
            // Clockwise on input; the engine normalizes it.
            pts(&[[47.0, 12.0], [41.0, 26.0], [56.0, 24.0]]),
            pts(&[[22.0, 61.0], [37.0, 63.0], [29.0, 79.0]]),
            pts(&[[66.0, 31.0], [83.0, 29.0], [81.0, 44.0], [70.0, 47.0]]),
        ],
    ];

    for holes in cases {
        let (flat, coords, starts) = flatten(&outer, &holes);
        let tri = triangulate(&polygon(&outer, &holes));
        assert!(tri.is_complete(), "{:?}", tri.incomplete());

        let expected_triangles = flat.len() + 2 * holes.len() - 2;
        assert_eq!(tri.indices().triangle_count(), expected_triangles);

        let reference = earcutr::earcut(&coords, &starts, 2).unwrap();
        assert_eq!(reference.len() / 3, expected_triangles);

        let reference: Vec<u32> = reference.into_iter().map(|i| i as u32).collect();
        let want = mesh_area(&flat, &reference);
        let got = mesh_area(&flat, tri.indices().as_slice());
        assert!((got - want).abs() < 1e-6, "{} vs {}", got, want);

        let holes_area: f64 = holes.iter().map(|h| ring_area(h)).sum();
        assert!((got - (ring_area(&outer) - holes_area)).abs() < 1e-6);
    }
}

#[test]
fn hole_outside_the_outer_ring_is_reported() {
    let outer = pts(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]);
    let hole = pts(&[[20.0, 20.0], [24.0, 20.0], [24.0, 24.0], [20.0, 24.0]]);
    let tri = triangulate(&polygon(&outer, &[hole]));
    let signal = tri.incomplete().cloned().expect("hole cannot be bridged");
    assert_eq!(signal.unbridged_holes, vec![0]);
    assert_eq!(tri.indices().triangle_count(), 2);
}
