use num_traits::NumAssign;
use std::collections::VecDeque;

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub capacity: Flow,
}

#[derive(Default)]
pub struct Graph<Flow> {
    num_nodes: usize,
    num_edges: usize,
    pub(crate) edges: Vec<Edge<Flow>>,
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn add_node(&mut self) -> usize {
        self.num_nodes += 1;
        self.num_nodes - 1
    }

    pub fn add_nodes(&mut self, num_nodes: usize) -> Vec<usize> {
        self.num_nodes += num_nodes;
        ((self.num_nodes - num_nodes)..self.num_nodes).collect()
    }

    // return edge index
    pub fn add_directed_edge(&mut self, from: usize, to: usize, capacity: Flow) -> Option<usize> {
        if from >= self.num_nodes || to >= self.num_nodes || capacity < Flow::zero() {
            return None;
        }

        self.edges.push(Edge { from, to, flow: Flow::zero(), capacity });

        self.num_edges += 1;
        Some(self.num_edges - 1)
    }

    pub fn get_edge(&self, edge_id: usize) -> Option<Edge<Flow>> {
        self.edges.get(edge_id).cloned()
    }

    // net flow leaving u
    pub fn maximum_flow(&self, u: usize) -> Flow {
        self.edges.iter().fold(Flow::zero(), |mut flow, edge| {
            if edge.from == u {
                flow += edge.flow;
            } else if edge.to == u {
                flow -= edge.flow;
            }
            flow
        })
    }

    // source side of a minimum cut: the nodes still reachable from source in
    // the residual network left by the final flows
    pub fn minimum_cut(&self, source: usize) -> Vec<usize> {
        let mut residual = vec![Vec::new(); self.num_nodes];
        for edge in self.edges.iter() {
            if edge.flow < edge.capacity {
                residual[edge.from].push(edge.to);
            }
            if edge.flow > Flow::zero() {
                residual[edge.to].push(edge.from);
            }
        }

        let mut cut = Vec::new();
        let mut visited = vec![false; self.num_nodes];
        let mut que = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = que.pop_front() {
            cut.push(u);
            for &to in residual[u].iter() {
                if !visited[to] {
                    visited[to] = true;
                    que.push_back(to);
                }
            }
        }

        cut
    }
}
