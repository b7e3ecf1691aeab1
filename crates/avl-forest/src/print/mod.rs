//! Tree-dump style text rendering.

use crate::types::BinaryNode;

/// Renders the subtree under `node`, one line per node, using `label` for
/// the node text.
///
/// Children are listed below their parent as `← left` and `→ right`,
/// indented two columns deeper than the parent's `tab`. A missing sibling of
/// an existing child prints as `∅`. Leaves have no child lines.
pub fn print_node<N, F>(node: &N, tab: &str, label: &F) -> String
where
    N: BinaryNode,
    F: Fn(&N) -> String,
{
    let mut out = String::new();
    // (text emitted before the entry, entry, indentation of its children)
    let mut stack: Vec<(String, Option<&N>, String)> =
        vec![(String::new(), Some(node), tab.to_string())];
    while let Some((prefix, entry, tab)) = stack.pop() {
        out.push_str(&prefix);
        let Some(n) = entry else {
            out.push('∅');
            continue;
        };
        out.push_str(&label(n));
        if n.left().is_none() && n.right().is_none() {
            continue;
        }
        let child_tab = format!("{tab}  ");
        stack.push((format!("\n{tab}→ "), n.right(), child_tab.clone()));
        stack.push((format!("\n{tab}← "), n.left(), child_tab));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Leaf(&'static str, Option<Box<Leaf>>, Option<Box<Leaf>>);

    impl BinaryNode for Leaf {
        type Key = &'static str;

        fn key(&self) -> &&'static str {
            &self.0
        }

        fn left(&self) -> Option<&Self> {
            self.1.as_deref()
        }

        fn right(&self) -> Option<&Self> {
            self.2.as_deref()
        }
    }

    fn leaf(k: &'static str) -> Option<Box<Leaf>> {
        Some(Box::new(Leaf(k, None, None)))
    }

    #[test]
    fn test_print_leaf() {
        let root = Leaf("a", None, None);
        assert_eq!(print_node(&root, "", &|n: &Leaf| n.0.to_string()), "a");
    }

    #[test]
    fn test_print_nested() {
        let b = Leaf("b", leaf("c"), None);
        let root = Leaf("a", Some(Box::new(b)), leaf("d"));
        let out = print_node(&root, "  ", &|n: &Leaf| n.0.to_string());
        assert_eq!(out, "a\n  ← b\n    ← c\n    → ∅\n  → d");
    }
}
