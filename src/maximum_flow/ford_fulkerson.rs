use crate::maximum_flow::csr::CSR;
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::status::Status;
use num_traits::NumAssign;

#[derive(Default)]
pub struct FordFulkerson<Flow> {
    csr: CSR<Flow>,
}

impl<Flow> FordFulkerson<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn solve(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Status {
        if source >= graph.num_nodes() || sink >= graph.num_nodes() || source == sink {
            return Status::BadInput;
        }
        self.csr.build(graph);
        let mut visited = vec![false; self.csr.num_nodes];

        let upper = self.csr.neighbors(source).fold(Flow::zero(), |sum, e| sum + e.capacity);
        loop {
            visited.fill(false);
            let delta = self.dfs(source, sink, upper, &mut visited);
            if delta == Flow::zero() {
                break;
            }
        }

        self.csr.set_flow(graph);
        Status::Optimal
    }

    fn dfs(&mut self, u: usize, sink: usize, flow: Flow, visited: &mut [bool]) -> Flow {
        if u == sink {
            return flow;
        }
        visited[u] = true;

        for i in self.csr.start[u]..self.csr.start[u + 1] {
            let to = self.csr.inside_edge_list[i].to;
            let residual_capacity = self.csr.inside_edge_list[i].residual_capacity();
            if visited[to] || residual_capacity == Flow::zero() {
                continue;
            }

            let delta = self.dfs(to, sink, flow.min(residual_capacity), visited);
            if delta > Flow::zero() {
                self.csr.push_flow(i, delta);
                return delta;
            }
        }

        Flow::zero()
    }
}

#[cfg(test)]
mod test {
    use crate::maximum_flow::ford_fulkerson::FordFulkerson;
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

    #[test]
    fn reroutes_through_the_reverse_edge() {
        // the greedy first path 0 -> 1 -> 3 must be partially undone
        let mut graph = Graph::default();
        graph.add_nodes(4);
        for (from, to, capacity) in [(0, 1, 1), (0, 2, 1), (1, 2, 1), (1, 3, 1), (2, 3, 1)] {
            graph.add_directed_edge(from, to, capacity).unwrap();
        }

        let status = FordFulkerson::default().solve(0, 3, &mut graph);
        assert_eq!(status, Status::Optimal);
        assert_eq!(graph.maximum_flow(0), 2);
    }

    fn execute(instance: GraphInstance) -> i64 {
        let mut graph = Graph::default();
        graph.add_nodes(instance.num_nodes);
        for (from, to, capacity) in instance.edges {
            graph.add_directed_edge(from, to, capacity).unwrap();
        }

        let status = FordFulkerson::default().solve(instance.source, instance.sink, &mut graph);
        assert_eq!(status, Status::Optimal);
        graph.maximum_flow(instance.source)
    }
}
