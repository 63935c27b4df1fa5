use log::{debug, trace};

use super::forest::{ForestEntry, PriorityForest};
use super::frequency::FrequencyTable;
use crate::error::{Error, Result};

/// Index of a node inside a [`CodeTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Wrap a raw arena index.
    pub fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// The raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A leaf (one symbol) or an internal node (merge of two subtrees).
///
/// `label` is the concatenation of the descendant symbols and only serves as
/// the tie-break key while the tree is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTreeNode {
    weight: usize,
    label: String,
    symbol: Option<char>,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}

impl CodeTreeNode {
    fn leaf(symbol: char, weight: usize) -> Self {
        CodeTreeNode {
            weight,
            label: symbol.to_string(),
            symbol: Some(symbol),
            left: None,
            right: None,
            parent: None,
        }
    }

    fn internal(weight: usize, label: String, left: NodeId, right: NodeId) -> Self {
        CodeTreeNode {
            weight,
            label,
            symbol: None,
            left: Some(left),
            right: Some(right),
            parent: None,
        }
    }

    /// Sum of the frequencies of all leaves below this node.
    pub fn weight(&self) -> usize {
        self.weight
    }

    /// Concatenated symbols of the leaves below this node, in merge order.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The symbol of a leaf; `None` for internal nodes.
    pub fn symbol(&self) -> Option<char> {
        self.symbol
    }

    /// Left child, reached with a `'0'` bit.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// Right child, reached with a `'1'` bit.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// Parent node; `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// A node is a leaf iff it has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// A strict binary code tree stored in an arena.
///
/// Children and parents are plain indices into `nodes`; the arena owns every
/// node. Once built the tree is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTree {
    nodes: Vec<CodeTreeNode>,
    root: NodeId,
}

impl CodeTree {
    /// Build the Huffman tree for a frequency table.
    ///
    /// Leaves are seeded in symbol order, then the two smallest subtrees are
    /// merged until one remains. When the two merged subtrees have equal weight,
    /// the one with the lexicographically greater label becomes the right child;
    /// otherwise the first extracted becomes the left child.
    ///
    /// A table with a single symbol yields a one-leaf tree. An empty table is
    /// rejected with [`Error::EmptyInput`].
    ///
    /// # Examples
    /// ```
    /// use huffcode::{CodeTree, FrequencyTable};
    ///
    /// let freq = FrequencyTable::from_text("aaaabbbccd");
    /// let tree = CodeTree::build(&freq).unwrap();
    /// assert_eq!(tree.weight(), 10);
    /// assert_eq!(tree.leaf_count(), 4);
    /// ```
    pub fn build(freq: &FrequencyTable) -> Result<Self> {
        if freq.is_empty() {
            return Err(Error::EmptyInput);
        }

        let mut symbols: Vec<(char, usize)> = freq.iter().collect();
        symbols.sort_unstable();

        let mut nodes = Vec::with_capacity(2 * symbols.len() - 1);
        let mut forest = PriorityForest::with_capacity(symbols.len());
        for (symbol, count) in symbols {
            let id = NodeId(nodes.len());
            let node = CodeTreeNode::leaf(symbol, count);
            forest.insert(ForestEntry::new(id, node.weight, node.label.clone()));
            nodes.push(node);
        }

        while forest.len() > 1 {
            let (a, b) = forest.take_two_smallest()?;
            let weight = a.weight + b.weight;
            let label = format!("{}{}", a.label, b.label);
            let (left, right) = if a.weight == b.weight && a.label > b.label {
                (b.id, a.id)
            } else {
                (a.id, b.id)
            };

            let id = NodeId(nodes.len());
            trace!(
                "merge {:?}({}) + {:?}({}) -> node {} weight {}",
                a.label,
                a.weight,
                b.label,
                b.weight,
                id.0,
                weight
            );
            nodes[a.id.0].parent = Some(id);
            nodes[b.id.0].parent = Some(id);
            forest.insert(ForestEntry::new(id, weight, label.clone()));
            nodes.push(CodeTreeNode::internal(weight, label, left, right));
        }

        let root = forest
            .pop()
            .ok_or(Error::InsufficientNodes {
                needed: 1,
                available: 0,
            })?
            .id;
        debug!(
            "built code tree: {} nodes, root weight {}",
            nodes.len(),
            nodes[root.0].weight
        );
        Ok(CodeTree { nodes, root })
    }

    /// Id of the root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The root node itself.
    pub fn root_node(&self) -> &CodeTreeNode {
        self.node(self.root)
    }

    /// Returns the node for `id`, or `None` if it is not part of this tree.
    pub fn get(&self, id: NodeId) -> Option<&CodeTreeNode> {
        self.nodes.get(id.0)
    }

    /// Returns the node for an id taken from this tree's own links.
    pub(crate) fn node(&self, id: NodeId) -> &CodeTreeNode {
        &self.nodes[id.0]
    }

    /// Weight of the root, equal to the number of encoded symbols.
    pub fn weight(&self) -> usize {
        self.root_node().weight
    }

    /// Total number of nodes, leaves and internal.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a built tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of leaves, one per distinct symbol.
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|node| node.is_leaf()).count()
    }

    /// Iterate over every leaf with its id.
    pub fn leaves(&self) -> impl Iterator<Item = (NodeId, &CodeTreeNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, node)| node.is_leaf())
            .map(|(index, node)| (NodeId(index), node))
    }

    /// Number of edges between `id` and the root, or `None` if `id` is not part
    /// of this tree.
    pub fn depth(&self, id: NodeId) -> Option<usize> {
        let mut depth = 0;
        let mut current = self.get(id)?.parent;
        while let Some(parent) = current {
            depth += 1;
            current = self.get(parent)?.parent;
        }
        Some(depth)
    }
}
