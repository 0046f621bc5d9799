//! Huffman tree construction and code assignment.
//!
//! The tree is built with the classical greedy construction: every symbol
//! with a non-zero frequency becomes a leaf in a min-heap keyed by frequency;
//! the two least-frequent trees are repeatedly merged under a fresh internal
//! node until one root remains. Merging the two least-frequent trees at every
//! step minimizes the weighted path length (Huffman's theorem), so the
//! resulting prefix code is optimal.
//!
//! # Tie-breaking
//!
//! Nodes of equal frequency are ordered by their creation sequence: leaves in
//! ascending symbol order first, then internal nodes in merge order. This
//! makes the tree a pure function of the frequency table, so an encoder and a
//! decoder built independently from the same header derive bit-identical
//! codes.

use packlab_core::error::{CodecError, Result};
use packlab_core::heap::{Heap, HeapMode};

/// Number of distinct byte symbols.
pub const SYMBOL_COUNT: usize = 256;

/// Per-symbol occurrence counts, as serialized in the stream header.
pub type FrequencyTable = [u32; SYMBOL_COUNT];

/// A single Huffman code word.
///
/// The code occupies the low `len` bits of `bits` and is written MSB-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Code {
    /// Code bits, right-aligned.
    pub bits: u64,
    /// Code length in bits (1..=64).
    pub len: u8,
}

/// Node in the tree arena. Leaves carry a symbol; internal nodes always have
/// exactly two children.
#[derive(Debug, Clone)]
struct HuffNode {
    symbol: u8,
    left: Option<usize>,
    right: Option<usize>,
}

/// Item queued during tree construction; `seq` is the node's creation order
/// and breaks frequency ties deterministically.
#[derive(Debug, Clone, Copy)]
struct HeapItem {
    freq: u64,
    seq: usize,
    node: usize,
}

/// A Huffman prefix-code tree over byte symbols.
#[derive(Debug)]
pub struct HuffmanTree {
    nodes: Vec<HuffNode>,
    root: Option<usize>,
}

/// Count symbol occurrences in `input`.
///
/// Returns an error if any single symbol occurs more than `u32::MAX` times,
/// since the header stores frequencies as 4-byte integers.
pub fn count_frequencies(input: &[u8]) -> Result<FrequencyTable> {
    let mut counts = [0u64; SYMBOL_COUNT];
    for &byte in input {
        counts[byte as usize] += 1;
    }

    let mut freq = [0u32; SYMBOL_COUNT];
    for (slot, &count) in freq.iter_mut().zip(counts.iter()) {
        *slot = u32::try_from(count).map_err(|_| {
            CodecError::invalid_header("symbol frequency exceeds 32-bit header field")
        })?;
    }
    Ok(freq)
}

/// Total number of symbols described by a frequency table.
pub fn total_symbols(freq: &FrequencyTable) -> u64 {
    freq.iter().map(|&f| f as u64).sum()
}

impl HuffmanTree {
    /// Build a tree from a frequency table.
    ///
    /// An all-zero table yields a tree without a root; callers handle the
    /// empty stream before walking the tree.
    pub fn from_frequencies(freq: &FrequencyTable) -> Result<Self> {
        let mut nodes: Vec<HuffNode> = Vec::new();
        let mut heap = Heap::new(2 * SYMBOL_COUNT, HeapMode::Min, |a: &HeapItem, b: &HeapItem| {
            (a.freq, a.seq).cmp(&(b.freq, b.seq))
        })?;

        // Leaves in ascending symbol order.
        for (symbol, &f) in freq.iter().enumerate() {
            if f > 0 {
                let id = nodes.len();
                nodes.push(HuffNode {
                    symbol: symbol as u8,
                    left: None,
                    right: None,
                });
                heap.insert(HeapItem {
                    freq: f as u64,
                    seq: id,
                    node: id,
                })?;
            }
        }

        if heap.is_empty() {
            return Ok(Self { nodes, root: None });
        }

        // Greedy pairing: merge the two minimum trees until one remains.
        while heap.len() > 1 {
            let (Some(left), Some(right)) = (heap.extract_root(), heap.extract_root()) else {
                break;
            };

            let id = nodes.len();
            nodes.push(HuffNode {
                symbol: 0,
                left: Some(left.node),
                right: Some(right.node),
            });
            heap.insert(HeapItem {
                freq: left.freq + right.freq,
                seq: id,
                node: id,
            })?;
        }

        let root = heap.extract_root().map(|item| item.node);
        Ok(Self { nodes, root })
    }

    /// Id of the root node, or `None` for an empty tree.
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    /// The symbol stored at `node`, if it is a leaf.
    pub fn leaf_symbol(&self, node: usize) -> Option<u8> {
        let n = &self.nodes[node];
        if n.left.is_none() && n.right.is_none() {
            Some(n.symbol)
        } else {
            None
        }
    }

    /// Follow one edge from `node`: `false` descends left, `true` right.
    pub fn step(&self, node: usize, bit: bool) -> Option<usize> {
        let n = &self.nodes[node];
        if bit { n.right } else { n.left }
    }

    /// Assign a code word to every leaf symbol.
    ///
    /// Depth-first from the root, appending a `0` bit when descending left
    /// and `1` when descending right. Codes are prefix-free by construction.
    /// The degenerate single-symbol tree gets the one-bit code `0`.
    pub fn codes(&self) -> [Option<Code>; SYMBOL_COUNT] {
        let mut codes = [None; SYMBOL_COUNT];
        let Some(root) = self.root else {
            return codes;
        };

        if let Some(symbol) = self.leaf_symbol(root) {
            codes[symbol as usize] = Some(Code { bits: 0, len: 1 });
            return codes;
        }

        let mut stack = vec![(root, 0u64, 0u8)];
        while let Some((id, bits, len)) = stack.pop() {
            let node = &self.nodes[id];
            if let Some(symbol) = self.leaf_symbol(id) {
                codes[symbol as usize] = Some(Code { bits, len });
                continue;
            }
            if let Some(right) = node.right {
                stack.push((right, (bits << 1) | 1, len + 1));
            }
            if let Some(left) = node.left {
                stack.push((left, bits << 1, len + 1));
            }
        }

        codes
    }
}
