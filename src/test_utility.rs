use std::fs::read_to_string;
use std::path::Path;

pub struct GraphInstance {
    pub num_nodes: usize,
    pub source: usize,
    pub sink: usize,
    pub edges: Vec<(usize, usize, i64)>,
}

// AOJ GRL_6_A: "V E" header and E lines "u v c"; source is 0, sink is V - 1
pub fn read_instance_aoj(path: &Path) -> GraphInstance {
    let tokens = read_tokens(path);
    let num_nodes = tokens[0] as usize;
    let num_edges = tokens[1] as usize;
    let edges = (0..num_edges).map(|i| (tokens[2 + 3 * i] as usize, tokens[3 + 3 * i] as usize, tokens[4 + 3 * i])).collect();

    GraphInstance { num_nodes, source: 0, sink: num_nodes - 1, edges }
}

// LibreOJ 101: "n m s t" header and m lines "u v c"; nodes are 1-indexed
pub fn read_instance_libreoj(path: &Path) -> GraphInstance {
    let tokens = read_tokens(path);
    let num_nodes = tokens[0] as usize;
    let num_edges = tokens[1] as usize;
    let source = tokens[2] as usize - 1;
    let sink = tokens[3] as usize - 1;
    let edges = (0..num_edges).map(|i| (tokens[4 + 3 * i] as usize - 1, tokens[5 + 3 * i] as usize - 1, tokens[6 + 3 * i])).collect();

    GraphInstance { num_nodes, source, sink, edges }
}

pub fn read_expected(path: &Path) -> i64 {
    read_to_string(path).unwrap().split_whitespace().next().unwrap().parse().unwrap()
}

fn read_tokens(path: &Path) -> Vec<i64> {
    read_to_string(path).unwrap().split_whitespace().map(|token| token.parse().unwrap()).collect()
}
