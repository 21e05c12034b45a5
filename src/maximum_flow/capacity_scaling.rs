use crate::maximum_flow::csr::CSR;
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::status::Status;
use num_traits::NumAssign;

#[derive(Default)]
pub struct CapacityScaling<Flow> {
    csr: CSR<Flow>,
    current_edge: Vec<usize>,
}

impl<Flow> CapacityScaling<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn solve(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Status {
        if source >= graph.num_nodes() || sink >= graph.num_nodes() || source == sink {
            return Status::BadInput;
        }
        self.csr.build(graph);
        if graph.num_edges() == 0 {
            return Status::Optimal;
        }
        self.current_edge.resize(self.csr.num_nodes, 0);
        let two = Flow::one() + Flow::one();

        // largest power of two not above the maximum capacity
        let max_capacity = self.csr.inside_edge_list.iter().map(|e| e.capacity).max().unwrap();
        let mut scaling = Flow::one();
        while scaling <= max_capacity {
            scaling *= two;
        }
        scaling /= two;

        let upper = self.csr.neighbors(source).fold(Flow::zero(), |sum, e| sum + e.capacity);
        while scaling > Flow::zero() {
            // maximum flow restricted to residual capacities of at least scaling
            while self.csr.update_levels_restricted(source, sink, scaling) {
                self.current_edge.iter_mut().enumerate().for_each(|(u, e)| *e = self.csr.start[u]);
                loop {
                    let delta = self.dfs(source, sink, upper, scaling);
                    if delta == Flow::zero() {
                        break;
                    }
                }
            }
            scaling /= two;
        }

        self.csr.set_flow(graph);
        Status::Optimal
    }

    fn dfs(&mut self, u: usize, sink: usize, upper: Flow, scaling: Flow) -> Flow {
        if u == sink {
            return upper;
        }

        for i in self.current_edge[u]..self.csr.start[u + 1] {
            self.current_edge[u] = i;
            let to = self.csr.inside_edge_list[i].to;
            let residual_capacity = self.csr.inside_edge_list[i].residual_capacity();
            if residual_capacity < scaling || self.csr.level[to] != self.csr.level[u] + 1 {
                continue;
            }

            let delta = self.dfs(to, sink, upper.min(residual_capacity), scaling);
            if delta > Flow::zero() {
                self.csr.push_flow(i, delta);
                return delta;
            }
        }
        self.current_edge[u] = self.csr.start[u + 1];

        Flow::zero()
    }
}
