use std::io;

use mediant::{dot::DotWriter, style::Color, style::EdgeStyle, tree::MediantTree};

fn main() -> io::Result<()> {
    // Walk the first few levels of the binary Stern-Brocot tree and print the fraction each
    // matrix encodes.
    let tree = MediantTree::new(2);

    println!("Binary Stern-Brocot tree:");
    for (depth, frontier) in tree.levels(4).enumerate() {
        let labels: Vec<String> = frontier
            .iter()
            .map(|matrix| {
                let fraction = matrix.fraction(0, 1);
                format!("{}/{}", fraction.numer(), fraction.denom())
            })
            .collect();

        println!("  depth {depth}: {}", labels.join(" "));
    }

    // The ternary analogue encodes two fractions per node, over the two adjacent row pairs.
    let ternary = MediantTree::new(3);

    println!("\nTernary tree, first expansion:");
    for matrix in ternary.frontier(1) {
        let (upper, lower) = (matrix.fraction(0, 1), matrix.fraction(1, 2));
        println!(
            "  ({}/{}, {}/{})",
            upper.numer(),
            upper.denom(),
            lower.numer(),
            lower.denom()
        );
    }

    // Capture the binary tree as a directed graph and render it to DOT on stdout; pipe the
    // output into `neato -n -Tsvg` to draw it.
    let capture = tree.capture(4);

    println!(
        "\nCaptured {} nodes and {} edges, density {:.4}:\n",
        capture.node_count(),
        capture.graph().edge_count(),
        capture.graph().density()
    );

    let writer = DotWriter::new()
        .graph_name("stern_brocot")
        .edge_style(EdgeStyle::new().with_color(Color::Gray));

    writer.write(&capture, &mut io::stdout())
}
