/// Every store should satisfy the same editing/query contract.
/// Instantiates the shared test-suite for a concrete store type.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, *};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            type Graph = $graph<u32>;

            /// Creates a list of at most `m_ub` random (directed) label pairs over labels `0..n`
            fn random_pairs<R: Rng>(rng: &mut R, n: u32, m_ub: u32) -> Vec<(u32, u32)> {
                let mut pairs = (0..m_ub)
                    .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
                    .collect_vec();
                pairs.sort_unstable();
                pairs.dedup();
                pairs
            }

            fn filled(n: u32) -> Graph {
                let mut graph = Graph::new();
                graph.add_vertices(0..n);
                graph
            }

            #[test]
            fn graph_new() {
                let graph = Graph::new();
                assert!(graph.is_empty());
                assert_eq!(graph.number_of_arcs(), 0);

                for n in 1..50 {
                    let graph = filled(n);
                    assert_eq!(graph.number_of_vertices(), n);
                    assert_eq!(graph.number_of_arcs(), 0);
                    assert_eq!(graph.vertices().copied().collect_vec(), (0..n).collect_vec());
                    assert_eq!(graph.positions().len(), n as usize);
                }
            }

            #[test]
            fn add_vertex_is_idempotent() {
                let mut graph = filled(10);
                for v in 0..10 {
                    assert!(!graph.add_vertex(v));
                }
                assert_eq!(graph.number_of_vertices(), 10);

                assert!(graph.add_vertex(10));
                assert!(!graph.add_vertex(10));
                assert_eq!(graph.number_of_vertices(), 11);
            }

            #[test]
            fn arcs_require_both_endpoints() {
                let mut graph = filled(3);
                assert!(!graph.add_arc(&0, &7));
                assert!(!graph.add_arc(&7, &0));
                assert!(!graph.add_edge(&7, &8));
                assert!(!graph.is_arc(&7, &0));
                assert_eq!(graph.number_of_arcs(), 0);

                assert!(graph.add_arc(&0, &1));
                assert!(!graph.add_arc(&0, &1));
                assert_eq!(graph.number_of_arcs(), 1);
            }

            #[test]
            fn test_adjacency_list() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10u32, 20, 50] {
                    for m_ub in [n * 2, n * 5] {
                        for _ in 0..5 {
                            let pairs = random_pairs(rng, n, m_ub);
                            let mut graph = filled(n);
                            let mut adj_matrix = vec![vec![false; n as usize]; n as usize];

                            for &(u, v) in &pairs {
                                assert!(graph.add_arc(&u, &v));
                                adj_matrix[u as usize][v as usize] = true;
                            }

                            assert_eq!(graph.number_of_arcs(), pairs.len() as NumArcs);
                            assert_eq!(
                                graph.arcs().map(|PosArc(u, v)| (u, v)).sorted().collect_vec(),
                                pairs
                            );

                            for u in 0..n {
                                for v in 0..n {
                                    let expected = adj_matrix[u as usize][v as usize];
                                    assert_eq!(graph.is_arc(&u, &v), expected);
                                    assert_eq!(
                                        graph.is_edge(&u, &v),
                                        expected && adj_matrix[v as usize][u as usize]
                                    );
                                }
                                assert_eq!(
                                    graph.degree_of(&u).unwrap(),
                                    adj_matrix[u as usize].iter().filter(|&&b| b).count()
                                );
                            }
                        }
                    }
                }
            }

            #[test]
            fn test_graph_edge_editing() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10u32, 20, 50] {
                    for _ in 0..5 {
                        let pairs = random_pairs(rng, n, n * 3);
                        let mut graph = filled(n);
                        for (u, v) in &pairs {
                            graph.add_edge(u, v);
                        }

                        for (u, v) in &pairs {
                            assert!(graph.is_edge(u, v));
                            assert!(graph.is_edge(v, u));
                        }

                        let rng = &mut Pcg64Mcg::seed_from_u64(4);
                        for _ in 0..n {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);
                            let was_edge = graph.is_edge(&u, &v);
                            assert_eq!(graph.remove_edge(&u, &v), was_edge);
                            assert!(!graph.is_arc(&u, &v));
                            assert!(!graph.is_arc(&v, &u));
                        }

                        let m = graph.number_of_arcs();
                        assert_eq!(graph.arcs().count() as NumArcs, m);

                        for v in 0..n {
                            graph.remove_vertex(&v);
                        }
                        assert!(graph.is_empty());
                        assert_eq!(graph.number_of_arcs(), 0);
                    }
                }
            }

            #[test]
            fn remove_absent_vertex_changes_nothing() {
                let rng = &mut Pcg64Mcg::seed_from_u64(5);
                let pairs = random_pairs(rng, 20, 60);
                let mut graph = filled(20);
                for (u, v) in &pairs {
                    graph.add_edge(u, v);
                }

                let before = graph.clone();
                assert!(!graph.remove_vertex(&1000));
                assert!(!graph.remove_arc(&1000, &0));
                assert!(!graph.remove_edge(&0, &1000));

                assert_eq!(graph.number_of_vertices(), before.number_of_vertices());
                assert_eq!(graph.number_of_arcs(), before.number_of_arcs());
                for v in before.vertices() {
                    assert_eq!(graph.neighbors_of(v).unwrap(), before.neighbors_of(v).unwrap());
                }
            }

            #[test]
            fn removal_leaves_no_dangling_labels() {
                let rng = &mut Pcg64Mcg::seed_from_u64(6);
                let pairs = random_pairs(rng, 30, 120);
                let mut graph = filled(30);
                for (u, v) in &pairs {
                    graph.add_arc(u, v);
                }

                for v in (0..30).step_by(3) {
                    assert!(graph.remove_vertex(&v));
                }

                for u in graph.vertices() {
                    for w in graph.neighbors_of(u).unwrap() {
                        assert!(graph.contains_vertex(w));
                    }
                }
                for (pos, v) in graph.vertices().enumerate() {
                    assert_eq!(graph.position_of(v), Some(pos as VertexIndex));
                }
                assert_eq!(graph.arcs().count() as NumArcs, graph.number_of_arcs());
            }
        }
    };
}

pub(crate) use test_graph_ops;

/// Creates `roles` random `(collection, participant)` pairs over labels `M0..` and `A0..`.
/// Pairs may repeat.
#[cfg(test)]
pub(crate) fn random_cast<R: rand::Rng>(
    rng: &mut R,
    collections: u32,
    participants: u32,
    roles: u32,
) -> Vec<(String, String)> {
    (0..roles)
        .map(|_| {
            (
                format!("M{}", rng.random_range(0..collections)),
                format!("A{}", rng.random_range(0..participants)),
            )
        })
        .collect()
}
