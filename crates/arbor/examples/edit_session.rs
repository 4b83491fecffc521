//! Example: Driving the engine the way a diagram editor would
//!
//! Builds a small hierarchy, splices and prunes nodes, drags one node, and
//! prints the layout after each step.

use arbor::{Graph, config::LayoutConfig};

fn print_layout(title: &str, graph: &Graph) {
    println!("{title}");
    for node in graph.nodes() {
        println!(
            "  {:>3} {:<10} level={} left={:>7.1} top={:>6.1} width={:>6.1}",
            node.id(),
            node.label(),
            node.level(),
            node.left(),
            node.top(),
            node.width(),
        );
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut graph = Graph::with_config(LayoutConfig::default().with_viewport_width(800.0));
    let root = graph.root()?.id();

    let docs = graph.insert_node(root, "docs")?;
    let src = graph.insert_node(root, "src")?;
    let guides = graph.insert_node(docs, "guides")?;
    graph.insert_node(guides, "intro")?;
    graph.insert_node(src, "lib")?;
    print_layout("Initial tree", &graph);

    graph.delete_node_soft(guides)?;
    print_layout("After splicing out `guides`", &graph);

    let removed = graph.delete_node_hard(src)?;
    println!("Pruned ids: {removed:?}\n");

    graph.set_position(docs, 20.0, 20.0)?;
    print_layout("After dragging `docs`", &graph);

    Ok(())
}
