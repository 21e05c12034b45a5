use crate::maximum_flow::csr::CSR;
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::status::Status;
use num_traits::NumAssign;
use std::collections::VecDeque;

#[derive(Default)]
pub struct EdmondsKarp<Flow> {
    csr: CSR<Flow>,
}

impl<Flow> EdmondsKarp<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn solve(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Status {
        if source >= graph.num_nodes() || sink >= graph.num_nodes() || source == sink {
            return Status::BadInput;
        }
        self.csr.build(graph);
        let mut prev = vec![(usize::MAX, usize::MAX); self.csr.num_nodes];
        let mut visited = vec![false; self.csr.num_nodes];

        loop {
            prev.fill((usize::MAX, usize::MAX));
            visited.fill(false);
            visited[source] = true;

            // shortest augmenting path by edge count
            let mut que = VecDeque::from([source]);
            'bfs: while let Some(u) = que.pop_front() {
                for i in self.csr.start[u]..self.csr.start[u + 1] {
                    let edge = &self.csr.inside_edge_list[i];
                    if visited[edge.to] || edge.residual_capacity() == Flow::zero() {
                        continue;
                    }

                    visited[edge.to] = true;
                    prev[edge.to] = (u, i);
                    if edge.to == sink {
                        break 'bfs;
                    }
                    que.push_back(edge.to);
                }
            }

            if !visited[sink] {
                break;
            }

            // bottleneck along the predecessor chain
            let mut delta = self.csr.inside_edge_list[prev[sink].1].residual_capacity();
            let mut v = sink;
            while v != source {
                let (u, i) = prev[v];
                delta = delta.min(self.csr.inside_edge_list[i].residual_capacity());
                v = u;
            }

            // augment
            let mut v = sink;
            while v != source {
                let (u, i) = prev[v];
                self.csr.push_flow(i, delta);
                v = u;
            }
        }

        self.csr.set_flow(graph);
        Status::Optimal
    }
}

#[cfg(test)]
mod test {
    use crate::maximum_flow::edmonds_karp::EdmondsKarp;
    use crate::maximum_flow::graph::Graph;
    use crate::maximum_flow::status::Status;
    use crate::test_utility::{read_expected, read_instance_aoj, read_instance_libreoj, GraphInstance};
    use rstest::*;
    use std::path::PathBuf;

    #[rstest]
    fn aoj_grl_6_a(#[files("test_cases/AOJ_GRL_6_A/*.in")] path: PathBuf) {
        let mut expected_file_path = path.clone();
        expected_file_path.set_extension("out");

        let actual = execute(read_instance_aoj(&path));
        let expected = read_expected(&expected_file_path);
        assert_eq!(actual, expected);
    }

    #[rstest]
    fn libreoj_101(#[files("test_cases/LibreOJ_101/*.in")] path: PathBuf) {
        let mut expected_file_path = path.clone();
        expected_file_path.set_extension("out");

        let actual = execute(read_instance_libreoj(&path));
        let expected = read_expected(&expected_file_path);
        assert_eq!(actual, expected);
    }

    fn execute(instance: GraphInstance) -> i64 {
        let mut graph = Graph::default();
        graph.add_nodes(instance.num_nodes);
        for (from, to, capacity) in instance.edges {
            graph.add_directed_edge(from, to, capacity).unwrap();
        }

        let status = EdmondsKarp::default().solve(instance.source, instance.sink, &mut graph);
        assert_eq!(status, Status::Optimal);
        graph.maximum_flow(instance.source)
    }
}
