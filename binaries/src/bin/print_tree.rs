// SPDX-License-Identifier: MPL-2.0

use std::{env, process};

use treecodec::bt::{BinaryTree, Node};

/// Renders the tree sideways, root at the left, right subtree on top.
fn render(node: &Node<i64>, depth: usize, out: &mut String) {
    if let Some(right) = node.right.as_deref() {
        render(right, depth + 1, out);
    }
    out.push_str(&"    ".repeat(depth));
    out.push_str(&node.value.to_string());
    out.push('\n');
    if let Some(left) = node.left.as_deref() {
        render(left, depth + 1, out);
    }
}

fn main() {
    let encoding = match env::args().nth(1) {
        Some(encoding) => encoding,
        None => {
            eprintln!("usage: print_tree <level-order encoding>");
            process::exit(2);
        }
    };

    let tree: BinaryTree<i64> = match encoding.parse() {
        Ok(tree) => tree,
        Err(err) => {
            eprintln!("print_tree: {err}");
            process::exit(1);
        }
    };

    println!("{tree}");

    let mut rendered = String::new();
    if let Some(root) = tree.root.as_deref() {
        render(root, 0, &mut rendered);
    }
    print!("{rendered}");
}
