use crate::maximum_flow::csr::CSR;
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::status::Status;
use num_traits::NumAssign;

#[derive(Default)]
pub struct Dinic<Flow> {
    csr: CSR<Flow>,
    current_edge: Vec<usize>,
}

impl<Flow> Dinic<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    pub fn solve(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Status {
        if source >= graph.num_nodes() || sink >= graph.num_nodes() || source == sink {
            return Status::BadInput;
        }
        self.csr.build(graph);
        self.current_edge.resize(self.csr.num_nodes, 0);

        let upper = self.csr.neighbors(source).fold(Flow::zero(), |sum, e| sum + e.capacity);
        while self.csr.update_levels(source, sink) {
            self.current_edge.iter_mut().enumerate().for_each(|(u, e)| *e = self.csr.start[u]);

            // blocking flow: augment along level-increasing paths until none is left
            loop {
                let delta = self.dfs(source, sink, upper);
                if delta == Flow::zero() {
                    break;
                }
            }
        }

        self.csr.set_flow(graph);
        Status::Optimal
    }

    fn dfs(&mut self, u: usize, sink: usize, upper: Flow) -> Flow {
        if u == sink {
            return upper;
        }

        for i in self.current_edge[u]..self.csr.start[u + 1] {
            self.current_edge[u] = i;
            if !self.csr.is_admissible_edge(u, i) {
                continue;
            }

            let to = self.csr.inside_edge_list[i].to;
            let residual_capacity = self.csr.inside_edge_list[i].residual_capacity();
            let delta = self.dfs(to, sink, upper.min(residual_capacity));
            if delta > Flow::zero() {
                self.csr.push_flow(i, delta);
                return delta;
            }
        }

        // dead end; never rescan this node within the phase
        self.current_edge[u] = self.csr.start[u + 1];

        Flow::zero()
    }
}
