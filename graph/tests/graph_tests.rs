use apsp_graph::{Error, Graph, INF};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn new_graph_has_zero_diagonal_and_no_edges() {
    let g = Graph::new(5).unwrap();
    assert_eq!(g.vertex_count(), 5);
    for i in 0..5 {
        for j in 0..5 {
            let expected = if i == j { 0 } else { INF };
            assert_eq!(g.edge(i, j).unwrap(), expected);
        }
    }
}

#[test]
fn zero_vertices_is_an_error() {
    assert!(matches!(Graph::new(0), Err(Error::EmptyGraph)));
}

#[test]
fn edges_are_directed() {
    let mut g = Graph::new(3).unwrap();
    g.set_edge(0, 1, 5).unwrap();
    assert_eq!(g.edge(0, 1).unwrap(), 5);
    assert_eq!(g.edge(1, 0).unwrap(), INF);
}

#[test]
fn out_of_range_access_is_an_error() {
    let mut g = Graph::new(3).unwrap();
    assert!(matches!(
        g.set_edge(3, 0, 5),
        Err(Error::VertexOutOfRange {
            vertex: 3,
            vertices: 3
        })
    ));
    assert!(g.set_edge(0, 3, 5).is_err());
    assert!(g.edge(3, 0).is_err());
    assert!(g.edge(0, 3).is_err());
}

#[test]
fn from_flat_validates_length() {
    assert!(matches!(
        Graph::from_flat(2, vec![0, 1, 2]),
        Err(Error::MatrixSize {
            expected: 4,
            found: 3
        })
    ));
    assert!(Graph::from_flat(2, vec![0, 1, INF, 0]).is_ok());
}

#[test]
fn random_graph_hits_requested_density() {
    let mut rng = StdRng::seed_from_u64(7);
    let size = 40;
    let density = 0.3;
    let g = Graph::random_with(&mut rng, size, density, 1..=10).unwrap();

    for i in 0..size {
        assert_eq!(g.edge(i, i).unwrap(), 0);
    }

    let mut edges = 0;
    for i in 0..size {
        for j in 0..size {
            let w = g.edge(i, j).unwrap();
            if i != j && w != INF {
                assert!((1..=10).contains(&w));
                edges += 1;
            }
        }
    }
    let actual = edges as f64 / (size * (size - 1)) as f64;
    assert!((actual - density).abs() < 0.2);
}

#[test]
fn density_outside_unit_interval_is_an_error() {
    assert!(matches!(
        Graph::random(3, 1.5, 1..=10),
        Err(Error::InvalidDensity(_))
    ));
    assert!(matches!(
        Graph::random(3, -0.1, 1..=10),
        Err(Error::InvalidDensity(_))
    ));
}

#[test]
fn save_then_load_round_trips() {
    let mut rng = StdRng::seed_from_u64(11);
    let g = Graph::random_with(&mut rng, 8, 0.4, 1..=9).unwrap();

    let path = std::env::temp_dir().join(format!("apsp-graph-{}.txt", std::process::id()));
    g.save(&path).unwrap();
    let loaded = Graph::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(g, loaded);
}

#[test]
fn load_rejects_garbage() {
    let path = std::env::temp_dir().join(format!("apsp-bad-{}.txt", std::process::id()));
    std::fs::write(&path, "2\n0 x\nINF 0\n").unwrap();
    assert!(matches!(Graph::load(&path), Err(Error::ParseWeight(_))));
    std::fs::write(&path, "2\n0 1\n").unwrap();
    assert!(matches!(Graph::load(&path), Err(Error::MatrixSize { .. })));
    std::fs::remove_file(&path).unwrap();
}
