//! Patricia trie mapping byte sequences to dictionary codes.
//!
//! Nodes live in an index arena and each node is owned by exactly one parent.
//! Every edge carries a label of one or more bytes; a node's children are
//! keyed by the first byte of their label, so two siblings can never share a
//! non-empty prefix.
//!
//! ```text
//! insert "abc", then "abd":
//!
//!   root ── "abc"•            root ── "ab" ─┬─ "c"•
//!                                           └─ "d"•
//! ```
//!
//! Deletion prunes terminal-less leaves and folds a terminal-less node with a
//! single child back into one edge, so the shape after a delete is the same as
//! if the deleted sequence had never been inserted.

use std::collections::BTreeMap;

use crate::capacity::{Code, LITERAL_COUNT};

const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    /// Edge label from the parent. Empty only for the root.
    label: Vec<u8>,
    /// Code of the sequence ending at this node.
    code: Option<Code>,
    /// Children keyed by the first byte of their label.
    children: BTreeMap<u8, usize>,
}

/// Prefix tree index used by the encoder.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    free: Vec<usize>,
    len: usize,
}

impl Trie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            free: Vec::new(),
            len: 0,
        }
    }

    /// Create a trie holding the 256 single-byte literals, code = byte value.
    pub fn with_literals() -> Self {
        let mut trie = Self::new();
        for byte in 0..LITERAL_COUNT {
            trie.insert(&[byte as u8], byte as Code);
        }
        trie
    }

    /// Number of stored sequences.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no sequence is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    /// Associate `sequence` with `code`.
    ///
    /// Re-inserting a stored sequence replaces its code. The empty sequence
    /// is never an entry and is ignored.
    pub fn insert(&mut self, sequence: &[u8], code: Code) {
        let mut node = ROOT;
        let mut pos = 0;

        while pos < sequence.len() {
            let rest = &sequence[pos..];
            let Some(&child) = self.nodes[node].children.get(&rest[0]) else {
                let leaf = self.alloc(Node {
                    label: rest.to_vec(),
                    code: Some(code),
                    children: BTreeMap::new(),
                });
                self.nodes[node].children.insert(rest[0], leaf);
                self.len += 1;
                return;
            };

            let label_len = self.nodes[child].label.len();
            let common = common_prefix_len(&self.nodes[child].label, rest);
            node = if common < label_len {
                self.split(node, child, common)
            } else {
                child
            };
            pos += common;
        }

        if node != ROOT && self.nodes[node].code.replace(code).is_none() {
            self.len += 1;
        }
    }

    /// Exact lookup.
    pub fn search(&self, sequence: &[u8]) -> Option<Code> {
        if sequence.is_empty() {
            return None;
        }
        let node = self.find(sequence)?;
        self.nodes[node].code
    }

    /// Whether some stored sequence begins with `prefix`.
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        if prefix.is_empty() {
            return !self.is_empty();
        }

        let mut node = ROOT;
        let mut rest = prefix;
        loop {
            let Some(&child) = self.nodes[node].children.get(&rest[0]) else {
                return false;
            };
            let label = &self.nodes[child].label;
            // Every non-root node leads to at least one terminal.
            if rest.len() <= label.len() {
                return label.starts_with(rest);
            }
            if !rest.starts_with(label) {
                return false;
            }
            rest = &rest[label.len()..];
            node = child;
        }
    }

    /// Longest stored sequence that is a prefix of `input`.
    ///
    /// Returns its code and length.
    pub fn longest_match(&self, input: &[u8]) -> Option<(Code, usize)> {
        let mut node = ROOT;
        let mut depth = 0;
        let mut best = None;

        while depth < input.len() {
            let Some(&child) = self.nodes[node].children.get(&input[depth]) else {
                break;
            };
            let label = &self.nodes[child].label;
            if !input[depth..].starts_with(label) {
                break;
            }
            depth += label.len();
            node = child;
            if let Some(code) = self.nodes[node].code {
                best = Some((code, depth));
            }
        }

        best
    }

    /// Remove `sequence`, returning the code it had.
    pub fn delete(&mut self, sequence: &[u8]) -> Option<Code> {
        if sequence.is_empty() {
            return None;
        }

        // (parent, key of the child taken) for every edge walked
        let mut path: Vec<(usize, u8)> = Vec::new();
        let mut node = ROOT;
        let mut rest = sequence;
        while !rest.is_empty() {
            let key = rest[0];
            let &child = self.nodes[node].children.get(&key)?;
            let label = &self.nodes[child].label;
            if !rest.starts_with(label) {
                return None;
            }
            rest = &rest[label.len()..];
            path.push((node, key));
            node = child;
        }

        let removed = self.nodes[node].code.take()?;
        self.len -= 1;
        self.compact(node, &path);
        Some(removed)
    }

    /// All stored sequences with their codes, in byte order.
    pub fn entries(&self) -> Vec<(Vec<u8>, Code)> {
        let mut out = Vec::with_capacity(self.len);
        let mut stack = vec![(ROOT, Vec::new())];
        while let Some((node, prefix)) = stack.pop() {
            if let Some(code) = self.nodes[node].code {
                out.push((prefix.clone(), code));
            }
            for &child in self.nodes[node].children.values().rev() {
                let mut path = prefix.clone();
                path.extend_from_slice(&self.nodes[child].label);
                stack.push((child, path));
            }
        }
        out
    }

    /// Node whose path spells exactly `sequence`.
    fn find(&self, sequence: &[u8]) -> Option<usize> {
        let mut node = ROOT;
        let mut rest = sequence;
        while !rest.is_empty() {
            let &child = self.nodes[node].children.get(&rest[0])?;
            let label = &self.nodes[child].label;
            if !rest.starts_with(label) {
                return None;
            }
            rest = &rest[label.len()..];
            node = child;
        }
        Some(node)
    }

    /// Split `child`'s edge after `at` bytes, inserting a branching node.
    fn split(&mut self, parent: usize, child: usize, at: usize) -> usize {
        let suffix = self.nodes[child].label.split_off(at);
        let prefix = std::mem::replace(&mut self.nodes[child].label, suffix);
        let key = prefix[0];

        let mut children = BTreeMap::new();
        children.insert(self.nodes[child].label[0], child);
        let mid = self.alloc(Node {
            label: prefix,
            code: None,
            children,
        });
        self.nodes[parent].children.insert(key, mid);
        mid
    }

    /// Restore the invariants upward from a node that just lost its code.
    fn compact(&mut self, mut node: usize, path: &[(usize, u8)]) {
        let mut depth = path.len();
        while node != ROOT && self.nodes[node].code.is_none() {
            match self.nodes[node].children.len() {
                0 => {
                    let (parent, key) = path[depth - 1];
                    self.nodes[parent].children.remove(&key);
                    self.release(node);
                    node = parent;
                    depth -= 1;
                }
                1 => {
                    self.merge_with_child(node);
                    break;
                }
                _ => break,
            }
        }
    }

    /// Fold a node's only child into it, concatenating the edge labels.
    fn merge_with_child(&mut self, node: usize) {
        let Some(&child) = self.nodes[node].children.values().next() else {
            return;
        };
        let absorbed = std::mem::take(&mut self.nodes[child]);
        self.free.push(child);

        let target = &mut self.nodes[node];
        target.label.extend_from_slice(&absorbed.label);
        target.code = absorbed.code;
        target.children = absorbed.children;
    }

    fn alloc(&mut self, node: Node) -> usize {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id] = node;
                id
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, id: usize) {
        self.nodes[id] = Node::default();
        self.free.push(id);
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Structural checks: sibling keys match labels, no dead branches.
    fn assert_well_formed(trie: &Trie) {
        let mut stack = vec![ROOT];
        let mut terminals = 0;
        while let Some(node) = stack.pop() {
            let n = &trie.nodes[node];
            if n.code.is_some() {
                terminals += 1;
            }
            if node != ROOT {
                assert!(!n.label.is_empty(), "non-root node with empty label");
                assert!(
                    n.code.is_some() || n.children.len() >= 2,
                    "node {:?} should have been merged or pruned",
                    n.label
                );
            }
            for (&key, &child) in &n.children {
                assert_eq!(trie.nodes[child].label[0], key);
                stack.push(child);
            }
        }
        assert_eq!(terminals, trie.len());
    }

    #[test]
    fn test_insert_and_search() {
        let mut trie = Trie::new();
        trie.insert(b"hello", 300);
        trie.insert(b"help", 301);
        trie.insert(b"he", 302);

        assert_eq!(trie.search(b"hello"), Some(300));
        assert_eq!(trie.search(b"help"), Some(301));
        assert_eq!(trie.search(b"he"), Some(302));
        assert_eq!(trie.search(b"hel"), None);
        assert_eq!(trie.search(b"h"), None);
        assert_eq!(trie.search(b"helloo"), None);
        assert_eq!(trie.search(b""), None);
        assert_eq!(trie.len(), 3);
        assert_well_formed(&trie);
    }

    #[test]
    fn test_split_creates_branch_node() {
        let mut trie = Trie::new();
        trie.insert(b"abc", 1);
        assert_eq!(trie.node_count(), 2);

        trie.insert(b"abd", 2);
        // root, "ab", "c", "d"
        assert_eq!(trie.node_count(), 4);
        assert_eq!(trie.search(b"ab"), None);
        assert!(trie.starts_with(b"ab"));
        assert_well_formed(&trie);

        // Inserting the branch point itself only sets its code.
        trie.insert(b"ab", 3);
        assert_eq!(trie.node_count(), 4);
        assert_eq!(trie.search(b"ab"), Some(3));
        assert_well_formed(&trie);
    }

    #[test]
    fn test_insert_prefix_of_existing_edge() {
        let mut trie = Trie::new();
        trie.insert(b"abcdef", 1);
        trie.insert(b"abc", 2);

        assert_eq!(trie.search(b"abcdef"), Some(1));
        assert_eq!(trie.search(b"abc"), Some(2));
        assert_eq!(trie.node_count(), 3);
        assert_well_formed(&trie);
    }

    #[test]
    fn test_reinsert_overwrites() {
        let mut trie = Trie::new();
        trie.insert(b"xy", 10);
        trie.insert(b"xy", 11);
        assert_eq!(trie.search(b"xy"), Some(11));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_starts_with() {
        let mut trie = Trie::new();
        assert!(!trie.starts_with(b""));

        trie.insert(b"banana", 1);
        trie.insert(b"band", 2);

        assert!(trie.starts_with(b""));
        assert!(trie.starts_with(b"b"));
        assert!(trie.starts_with(b"ban"));
        assert!(trie.starts_with(b"bana"));
        assert!(trie.starts_with(b"banana"));
        assert!(trie.starts_with(b"band"));
        assert!(!trie.starts_with(b"bananas"));
        assert!(!trie.starts_with(b"bane"));
        assert!(!trie.starts_with(b"c"));
    }

    #[test]
    fn test_longest_match() {
        let mut trie = Trie::with_literals();
        trie.insert(b"TO", 256);
        trie.insert(b"TOB", 257);

        assert_eq!(trie.longest_match(b"TOBEOR"), Some((257, 3)));
        assert_eq!(trie.longest_match(b"TOX"), Some((256, 2)));
        assert_eq!(trie.longest_match(b"T"), Some((b'T' as Code, 1)));
        assert_eq!(trie.longest_match(b""), None);
    }

    #[test]
    fn test_longest_match_skips_non_terminal_branch() {
        let mut trie = Trie::new();
        trie.insert(b"abcd", 1);
        trie.insert(b"abce", 2);
        trie.insert(b"a", 3);

        // "abc" is only a branch node
        assert_eq!(trie.longest_match(b"abcx"), Some((3, 1)));
        assert_eq!(trie.longest_match(b"abce!"), Some((2, 4)));
        assert_eq!(trie.longest_match(b"zzz"), None);
    }

    #[test]
    fn test_literals_seeded() {
        let trie = Trie::with_literals();
        assert_eq!(trie.len(), LITERAL_COUNT);
        for byte in 0..=255u8 {
            assert_eq!(trie.search(&[byte]), Some(byte as Code));
        }
    }

    #[test]
    fn test_delete_leaf_merges_parent() {
        let mut trie = Trie::new();
        trie.insert(b"abc", 1);
        trie.insert(b"abd", 2);
        assert_eq!(trie.node_count(), 4);

        assert_eq!(trie.delete(b"abd"), Some(2));
        // "ab" lost a child and has no code: folded back into "abc"
        assert_eq!(trie.node_count(), 2);
        assert_eq!(trie.search(b"abc"), Some(1));
        assert_eq!(trie.search(b"abd"), None);
        assert!(!trie.starts_with(b"abd"));
        assert_well_formed(&trie);
    }

    #[test]
    fn test_delete_inner_node_merges_with_child() {
        let mut trie = Trie::new();
        trie.insert(b"ab", 1);
        trie.insert(b"abcd", 2);
        assert_eq!(trie.node_count(), 3);

        assert_eq!(trie.delete(b"ab"), Some(1));
        assert_eq!(trie.node_count(), 2);
        assert_eq!(trie.search(b"abcd"), Some(2));
        assert_eq!(trie.search(b"ab"), None);
        assert!(trie.starts_with(b"ab"));
        assert_well_formed(&trie);
    }

    #[test]
    fn test_delete_branching_node_keeps_structure() {
        let mut trie = Trie::new();
        trie.insert(b"ab", 1);
        trie.insert(b"abc", 2);
        trie.insert(b"abd", 3);

        assert_eq!(trie.delete(b"ab"), Some(1));
        assert_eq!(trie.node_count(), 4);
        assert_eq!(trie.search(b"abc"), Some(2));
        assert_eq!(trie.search(b"abd"), Some(3));
        assert_well_formed(&trie);
    }

    #[test]
    fn test_delete_missing() {
        let mut trie = Trie::new();
        trie.insert(b"abc", 1);
        trie.insert(b"abd", 2);

        assert_eq!(trie.delete(b"ab"), None);
        assert_eq!(trie.delete(b"abcd"), None);
        assert_eq!(trie.delete(b"x"), None);
        assert_eq!(trie.delete(b""), None);
        assert_eq!(trie.len(), 2);
        assert_well_formed(&trie);
    }

    #[test]
    fn test_delete_everything_then_reuse_slots() {
        let mut trie = Trie::new();
        let words: [&[u8]; 5] = [b"tea", b"ten", b"team", b"to", b"inn"];
        for (code, word) in words.iter().enumerate() {
            trie.insert(word, code as Code);
        }
        assert_well_formed(&trie);

        for word in words {
            assert!(trie.delete(word).is_some());
            assert_well_formed(&trie);
        }
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);

        let nodes_before = trie.nodes.len();
        trie.insert(b"tea", 9);
        trie.insert(b"ted", 10);
        assert_eq!(trie.nodes.len(), nodes_before);
        assert_eq!(trie.search(b"ted"), Some(10));
    }

    #[test]
    fn test_entries_in_byte_order() {
        let mut trie = Trie::new();
        trie.insert(b"b", 2);
        trie.insert(b"ab", 1);
        trie.insert(b"a", 0);

        let entries = trie.entries();
        assert_eq!(
            entries,
            vec![(b"a".to_vec(), 0), (b"ab".to_vec(), 1), (b"b".to_vec(), 2)]
        );
    }
}
