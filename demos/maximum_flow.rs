use flow_networks::maximum_flow::dinic::Dinic;
use flow_networks::maximum_flow::graph::Graph;
use flow_networks::maximum_flow::status::Status;

fn main() {
    let mut graph = Graph::default();
    graph.add_nodes(4);

    let edges = vec![
        graph.add_directed_edge(0, 1, 2).unwrap(),
        graph.add_directed_edge(0, 2, 1).unwrap(),
        graph.add_directed_edge(1, 2, 1).unwrap(),
        graph.add_directed_edge(1, 3, 1).unwrap(),
        graph.add_directed_edge(2, 3, 2).unwrap(),
    ];

    let status = Dinic::default().solve(0, 3, &mut graph);

    match status {
        Status::Optimal => {
            println!("maximum flow:{}", graph.maximum_flow(0));
            println!("source side of a minimum cut:{:?}", graph.minimum_cut(0));
            for edge_id in edges {
                println!("{:?}", graph.get_edge(edge_id).unwrap());
            }
        }
        _ => unreachable!(),
    }
}
