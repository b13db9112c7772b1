//! A character-keyed prefix tree that counts how many inserted strings share each prefix.
//!
//! Every node is either internal, holding its children and an occurrence counter, or a terminal
//! marker left behind by [`check_prefix`](Trie::check_prefix). The counter on an internal node
//! is the number of inserted strings whose first characters spell the path from the root to
//! that node.
//!
//! # Examples
//!
//! ```
//! use dsa::trie::Trie;
//!
//! let mut trie = Trie::new();
//! for name in ["Vaibhav", "Vaibhavi", "Vaishnavi", "Vishal", "Raman"] {
//!     trie.insert(name);
//! }
//!
//! assert_eq!(trie.count_prefix("V"), 4);
//! assert_eq!(trie.count_prefix("Vai"), 3);
//! assert_eq!(trie.count_prefix("Vaibhav"), 2);
//! assert_eq!(trie.count_prefix("R"), 1);
//! assert_eq!(trie.count_prefix("Tarzan"), 0);
//! ```

use std::collections::HashMap;

use crate::arena::{Arena, NodeId};

#[derive(Debug, Clone)]
enum Node {
    /// A node other strings can continue through.
    Internal {
        children: HashMap<char, NodeId>,
        /// How many inserted strings pass through this node.
        count: usize,
    },
    /// The end of a string recorded by [`Trie::check_prefix`]. Has no children.
    Terminal,
}

impl Node {
    fn internal() -> Self {
        Node::Internal {
            children: HashMap::new(),
            count: 0,
        }
    }

    fn child(&self, c: char) -> Option<NodeId> {
        match self {
            Node::Internal { children, .. } => children.get(&c).copied(),
            Node::Terminal => None,
        }
    }
}

/// A prefix tree over `char`s. See the [module docs](self) for an overview.
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Arena<Node>,
    root: NodeId,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Generates a new, empty `Trie`.
    pub fn new() -> Self {
        let mut nodes = Arena::new();
        let root = nodes.insert(Node::internal());
        Self { nodes, root }
    }

    /// Handle of the root node. The root always exists and is never a terminal.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Whether `c` is a direct child key of `node`. Terminals and handles from elsewhere have
    /// no children.
    pub fn find(&self, node: NodeId, c: char) -> bool {
        self.child(node, c).is_some()
    }

    /// Handle of the child of `node` keyed by `c`.
    pub fn child(&self, node: NodeId, c: char) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.child(c))
    }

    /// Adds `s` to the trie, bumping the counter of every node along its path (the root
    /// included).
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("to");
    /// trie.insert("tea");
    ///
    /// assert_eq!(trie.count_prefix("t"), 2);
    /// assert_eq!(trie.count_prefix("te"), 1);
    /// assert_eq!(trie.count_prefix(""), 2);
    /// ```
    pub fn insert(&mut self, s: &str) {
        let mut current = self.root;
        self.bump(current);
        for c in s.chars() {
            current = match self.nodes[current].child(c) {
                Some(child) => child,
                None => self.add_child(current, c, Node::internal()),
            };
            self.bump(current);
        }
    }

    /// Records `s` and reports whether it clashes with a string recorded before: either an
    /// earlier string is a prefix of `s`, or `s` is a prefix of (or equal to) an existing path.
    ///
    /// Unlike [`contains_prefix`](Self::contains_prefix) this mutates the trie. Characters of
    /// `s` that are missing get added as it walks, ending in a terminal marker, so a sequence of
    /// calls can detect the first string that's a prefix of another. Counters are left alone.
    /// An empty `s` returns `false` and records nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// assert!(!trie.check_prefix("aab"));
    /// assert!(!trie.check_prefix("aac"));
    /// // "aa" is a prefix of both.
    /// assert!(trie.check_prefix("aa"));
    /// // "aab" was recorded, so "aabc" continues past its end.
    /// assert!(trie.check_prefix("aabc"));
    /// ```
    pub fn check_prefix(&mut self, s: &str) -> bool {
        let mut current = self.root;
        let mut chars = s.chars().peekable();
        while let Some(c) = chars.next() {
            let is_last = chars.peek().is_none();
            current = match self.nodes[current].child(c) {
                Some(child) => {
                    if is_last || matches!(self.nodes[child], Node::Terminal) {
                        return true;
                    }
                    child
                }
                None => {
                    let node = if is_last {
                        Node::Terminal
                    } else {
                        Node::internal()
                    };
                    self.add_child(current, c, node)
                }
            };
        }
        false
    }

    /// Whether the full path of `prefix` exists, through inserted or checked strings alike.
    /// Never changes the trie.
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// How many inserted strings start with `prefix`. Zero if the path breaks or ends on a
    /// terminal marker.
    pub fn count_prefix(&self, prefix: &str) -> usize {
        match self.walk(prefix).map(|id| &self.nodes[id]) {
            Some(Node::Internal { count, .. }) => *count,
            Some(Node::Terminal) | None => 0,
        }
    }

    fn walk(&self, s: &str) -> Option<NodeId> {
        s.chars().try_fold(self.root, |id, c| self.nodes[id].child(c))
    }

    /// Adds a new `node` under `parent` keyed by `c`, returning its handle. A terminal parent is
    /// promoted to an internal node first.
    fn add_child(&mut self, parent: NodeId, c: char, node: Node) -> NodeId {
        let id = self.nodes.insert(node);
        let parent = &mut self.nodes[parent];
        if let Node::Terminal = parent {
            *parent = Node::internal();
        }
        if let Node::Internal { children, .. } = parent {
            children.insert(c, id);
        }
        id
    }

    fn bump(&mut self, id: NodeId) {
        let node = &mut self.nodes[id];
        if let Node::Terminal = node {
            *node = Node::internal();
        }
        if let Node::Internal { count, .. } = node {
            *count += 1;
        }
    }
}
