//! Arena-backed trie used as the LZ78 phrase dictionary.
//!
//! Nodes live in a flat arena and are addressed by dense `usize` ids assigned
//! in insertion order, starting at 0 for the root. The id of a node uniquely
//! identifies the phrase spelled by the symbols on the path from the root to
//! that node; the root itself stands for the empty phrase.
//!
//! Children of a node form a singly-linked sibling list with at most one
//! child per symbol value. Any given node has few actual children in
//! practice, so the linear sibling scan trades O(children) lookup for much
//! lower memory than a 256-way pointer array per node.
//!
//! All traversals are iterative; a trie built from a large or adversarial
//! input can be arbitrarily deep.

/// Id of the root node (the empty phrase).
pub const ROOT_ID: usize = 0;

/// A single trie node, addressed by its arena index.
#[derive(Debug, Clone)]
struct TrieNode {
    /// Symbol labeling the edge from the parent (unused on the root).
    symbol: u8,
    /// Parent link, `None` only for the root.
    parent: Option<usize>,
    /// Head of the sibling-linked child list.
    first_child: Option<usize>,
    /// Next sibling under the same parent.
    next_sibling: Option<usize>,
}

/// A growing symbol dictionary with dense insertion-order ids.
#[derive(Debug)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Trie {
    /// Create a trie holding only the root node (id 0, the empty phrase).
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode {
                symbol: 0,
                parent: None,
                first_child: None,
                next_sibling: None,
            }],
        }
    }

    /// Number of nodes, root included. Ids are exactly `0..len()`.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A trie always holds at least the root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Find the child of `node` labeled `symbol` by scanning its sibling
    /// list. Returns `None` if there is no such child.
    pub fn child(&self, node: usize, symbol: u8) -> Option<usize> {
        let mut next = self.nodes[node].first_child;
        while let Some(id) = next {
            if self.nodes[id].symbol == symbol {
                return Some(id);
            }
            next = self.nodes[id].next_sibling;
        }
        None
    }

    /// Insert a child of `node` labeled `symbol` and return its id.
    ///
    /// Idempotent: if such a child already exists, its id is returned and
    /// nothing is created. A new child is appended at the end of the sibling
    /// list and receives the next dense id.
    pub fn insert_child(&mut self, node: usize, symbol: u8) -> usize {
        // Scan for an existing child, remembering the list tail.
        let mut tail = None;
        let mut next = self.nodes[node].first_child;
        while let Some(id) = next {
            if self.nodes[id].symbol == symbol {
                return id;
            }
            tail = Some(id);
            next = self.nodes[id].next_sibling;
        }

        let new_id = self.nodes.len();
        self.nodes.push(TrieNode {
            symbol,
            parent: Some(node),
            first_child: None,
            next_sibling: None,
        });

        match tail {
            Some(id) => self.nodes[id].next_sibling = Some(new_id),
            None => self.nodes[node].first_child = Some(new_id),
        }

        new_id
    }

    /// Append the phrase identified by `node` to `out`, symbols in
    /// root-to-node order.
    pub fn phrase_into(&self, node: usize, out: &mut Vec<u8>) {
        let start = out.len();
        let mut current = node;
        while let Some(parent) = self.nodes[current].parent {
            out.push(self.nodes[current].symbol);
            current = parent;
        }
        out[start..].reverse();
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
