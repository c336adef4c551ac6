use apsp_cluster::{Collective, Error};
use apsp_graph::{Graph, INF};
use apsp_solver::{sequential, threaded};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn assert_same(a: &Graph, b: &Graph) {
    let v = a.vertex_count();
    assert_eq!(v, b.vertex_count());
    for i in 0..v {
        assert_eq!(a.row(i), b.row(i), "row {} differs", i);
    }
}

#[tokio::test]
async fn cluster_solves_a_simple_chain() {
    let mut g = Graph::new(3).unwrap();
    g.set_edge(0, 1, 4).unwrap();
    g.set_edge(1, 2, 3).unwrap();

    let result = apsp_cluster::solve(&g, 2).await.unwrap();
    assert_eq!(result.edge(0, 2).unwrap(), 7);
}

#[tokio::test]
async fn cluster_keeps_unreachable_pairs_unreachable() {
    let mut g = Graph::new(3).unwrap();
    g.set_edge(0, 1, 4).unwrap();

    let result = apsp_cluster::solve(&g, 3).await.unwrap();
    assert_eq!(result.edge(0, 2).unwrap(), INF);
}

#[tokio::test]
async fn cluster_matches_sequential_on_a_cycle() {
    let mut g = Graph::new(4).unwrap();
    g.set_edge(0, 1, 3).unwrap();
    g.set_edge(1, 2, 2).unwrap();
    g.set_edge(2, 3, 1).unwrap();
    g.set_edge(3, 0, 4).unwrap();

    let result = apsp_cluster::solve(&g, 2).await.unwrap();
    assert_eq!(result.edge(0, 2).unwrap(), 5);
    assert_eq!(result.edge(1, 0).unwrap(), 7);
    assert_same(&sequential::solve(&g), &result);
}

#[tokio::test]
async fn all_three_variants_agree_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(17);
    for vertices in [1, 2, 7, 24] {
        let g = Graph::random_with(&mut rng, vertices, 0.3, 1..=15).unwrap();

        let serial = sequential::solve(&g);
        let threads = threaded::solve(&g, 4).unwrap();
        let cluster = apsp_cluster::solve(&g, 3).await.unwrap();

        assert_same(&serial, &threads);
        assert_same(&serial, &cluster);
    }
}

#[tokio::test]
async fn worker_count_never_changes_the_result() {
    let mut rng = StdRng::seed_from_u64(23);
    let g = Graph::random_with(&mut rng, 13, 0.4, 1..=10).unwrap();
    let oracle = sequential::solve(&g);

    // Includes counts above the vertex count; the trailing workers own
    // empty row ranges and only take part in the collectives.
    for workers in [1, 2, 3, 5, 13, 20] {
        let result = apsp_cluster::solve(&g, workers).await.unwrap();
        assert_same(&oracle, &result);
    }
}

#[tokio::test]
async fn cluster_matches_oracle_across_sizes_and_worker_counts() {
    let mut rng = StdRng::seed_from_u64(31);
    for vertices in [1, 3, 9, 17] {
        let g = Graph::random_with(&mut rng, vertices, 0.35, 1..=12).unwrap();
        let oracle = sequential::solve(&g);
        for workers in [1, 2, 4, vertices + 3] {
            let result = apsp_cluster::solve(&g, workers).await.unwrap();
            assert_same(&oracle, &result);
        }
    }
}

#[tokio::test]
async fn cluster_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(29);
    let g = Graph::random_with(&mut rng, 10, 0.5, 1..=8).unwrap();

    let once = apsp_cluster::solve(&g, 4).await.unwrap();
    let twice = apsp_cluster::solve(&once, 4).await.unwrap();
    assert_same(&once, &twice);
}

#[tokio::test]
async fn zero_workers_is_an_error() {
    let g = Graph::new(3).unwrap();
    assert!(matches!(
        apsp_cluster::solve(&g, 0).await,
        Err(Error::Solver(apsp_solver::Error::InvalidWorkerCount))
    ));
}

#[tokio::test]
async fn broadcast_delivers_the_root_buffer_to_all_peers() {
    let mut comms = apsp_cluster::mesh(3).into_iter();
    let mut root = comms.next().unwrap();

    let sender = tokio::spawn(async move {
        let mut buf = vec![1, 2, 3];
        root.broadcast(0, 5, &mut buf).await.unwrap();
        buf
    });
    let mut receivers = Vec::new();
    for mut comm in comms {
        receivers.push(tokio::spawn(async move {
            let mut buf = vec![0, 0, 0];
            comm.broadcast(0, 5, &mut buf).await.unwrap();
            buf
        }));
    }

    assert_eq!(sender.await.unwrap(), vec![1, 2, 3]);
    for receiver in receivers {
        assert_eq!(receiver.await.unwrap(), vec![1, 2, 3]);
    }
}

#[tokio::test]
async fn abort_unblocks_a_peer_waiting_on_broadcast() {
    let mut comms = apsp_cluster::mesh(2);
    let mut waiter = comms.pop().unwrap();
    let other = comms.pop().unwrap();

    let blocked = tokio::spawn(async move {
        let mut buf = vec![0i64; 4];
        waiter.broadcast(0, 0, &mut buf).await
    });

    // Nothing is ever broadcast; the abort signal must free the peer.
    other.abort();
    let result = blocked.await.unwrap();
    assert!(matches!(
        result,
        Err(Error::Aborted {
            worker: 1,
            iteration: 0
        })
    ));
}
