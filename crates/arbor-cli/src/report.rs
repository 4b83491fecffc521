//! Plain-text layout report.
//!
//! One line per node in storage order, tab separated:
//! `id  label  level  left  top  width  color  children`.
//! Children are listed comma separated, `-` when there are none.

use std::fmt::Write;

use arbor::Graph;
use arbor_core::palette::Palette;

const HEADER: &str = "id\tlabel\tlevel\tleft\ttop\twidth\tcolor\tchildren";

/// Renders the current layout of `graph`, coloring levels from `palette`.
pub fn render(graph: &Graph, palette: &Palette) -> String {
    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    for node in graph.nodes() {
        let children = if node.is_leaf() {
            "-".to_string()
        } else {
            node.children()
                .iter()
                .map(|child| child.to_string())
                .collect::<Vec<_>>()
                .join(",")
        };

        writeln!(
            out,
            "{}\t{}\t{}\t{:.1}\t{:.1}\t{:.1}\t{}\t{}",
            node.id(),
            node.label(),
            node.level(),
            node.left(),
            node.top(),
            node.width(),
            palette.color_for_level(node.level()),
            children,
        )
        .expect("Writing to String buffer is infallible");
    }

    out
}

#[cfg(test)]
mod tests {
    use arbor::config::LayoutConfig;
    use arbor_core::identifier::NodeId;

    use super::*;

    #[test]
    fn test_render_lone_root() {
        let graph = Graph::new();
        let report = render(&graph, &Palette::default());

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].starts_with("1\t1\t0\t462.0\t100.0\t80.0\t"));
        assert!(lines[1].ends_with("\t-"));
    }

    #[test]
    fn test_render_lists_children_and_levels() {
        let mut graph = Graph::with_config(LayoutConfig::default().with_viewport_width(160.0));
        graph.insert_node(NodeId::FIRST, "A").unwrap();
        graph.insert_node(NodeId::FIRST, "B").unwrap();
        let palette = Palette::from_strings(["red", "blue"]).unwrap();

        let report = render(&graph, &palette);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].ends_with("\t2,3"));
        assert!(lines[2].starts_with("2\tA\t1\t-10.0\t220.0\t80.0\t"));

        let root_color = palette.color_for_level(0).to_string();
        let child_color = palette.color_for_level(1).to_string();
        assert!(lines[1].contains(&root_color));
        assert!(lines[3].contains(&child_color));
    }
}
