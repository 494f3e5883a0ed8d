//! Basic build -> query -> mutate flow.

use directed_graph::*;

fn main() -> GraphResult<()> {
    env_logger::init();

    let home = Node::new("home");
    let office = Node::new("office");
    let gym = Node::new("gym");

    // Build the graph
    let mut builder = GraphBuilder::new();
    builder
        .edge(&home, &office, 12.5)
        .edge(&office, &gym, 3.0)
        .edge(&gym, &home, 9.0);
    let mut graph: DirectedGraph<&str, f64> = builder.build()?;

    println!(
        "Graph created with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    for (node, row) in &graph {
        for (target, km) in row {
            println!("  {} -> {} ({} km)", node.data(), target.data(), km);
        }
    }

    // Roads are one-way
    println!(
        "home -> office: {}, office -> home: {}",
        graph.is_adjacent(&home, &office)?,
        graph.is_adjacent(&office, &home)?
    );

    // A detour changes the distance
    let old = graph.set_edge_weight(&home, &office, 14.0)?;
    println!("home -> office rerouted: {} km -> {} km", old, graph.edge_weight(&home, &office)?);

    // Closing the gym drops every road into and out of it
    graph.remove_node(&gym)?;
    println!(
        "After closing the gym: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    match graph.add_edge(&home, &office, 1.0) {
        Err(GraphError::DuplicateEdge { .. }) => println!("home -> office already exists"),
        other => other?,
    }

    println!("Stats: {:?}", graph.stats());
    Ok(())
}
