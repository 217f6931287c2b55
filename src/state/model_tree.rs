//! Model tree state: expansion and single selection.
//!
//! Nodes are created once at startup and never removed. Whether a node is a
//! leaf is fixed when it is created; only non-leaf nodes carry expansion
//! state, and at most one node in the whole tree is selected.

use std::collections::HashSet;

/// Index of a node inside its [`ModelTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
struct TreeNode {
    label: String,
    leaf: bool,
    children: Vec<NodeId>,
}

/// Result of a click on a node header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeClick {
    pub node: NodeId,
    pub label: String,
    /// New expansion state for non-leaf nodes, `None` for leaves.
    pub expanded: Option<bool>,
}

/// A node row as laid out by the tree panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow {
    pub node: NodeId,
    pub depth: usize,
}

/// Node counts reported by [`ModelTree::stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub total: usize,
    pub foldable: usize,
    pub leaves: usize,
    pub expanded: usize,
}

/// State of the model tree widget.
///
/// Responsibilities:
/// - Owning the static node hierarchy
/// - Tracking which non-leaf nodes are expanded
/// - Enforcing the single-selection invariant
#[derive(Debug, Clone, Default)]
pub struct ModelTree {
    nodes: Vec<TreeNode>,
    roots: Vec<NodeId>,
    /// Set of expanded node IDs
    expanded_nodes: HashSet<NodeId>,
    selected: Option<NodeId>,
}

impl ModelTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the tree shown for a newly started project.
    pub fn default_project() -> Self {
        let mut tree = Self::new();

        let project = tree.add_branch(None, "海洋管道项目");

        let model = tree.add_branch(Some(project), "管道模型");
        let points = tree.add_branch(Some(model), "管点");
        for label in ["N10", "N20", "N30", "N40"] {
            tree.add_leaf(Some(points), label);
        }
        let segments = tree.add_branch(Some(model), "管段");
        for label in ["管段 10-20", "管段 20-30", "管段 30-40"] {
            tree.add_leaf(Some(segments), label);
        }
        let components = tree.add_branch(Some(model), "组件");
        for label in ["弯头", "法兰", "三通", "异径接头"] {
            tree.add_leaf(Some(components), label);
        }
        let supports = tree.add_branch(Some(model), "支架");
        for label in ["固定点", "滑动支撑", "弹簧支撑"] {
            tree.add_leaf(Some(supports), label);
        }

        let loads = tree.add_branch(Some(project), "荷载工况");
        for label in ["工作压力和温度", "波浪荷载", "地震荷载", "浮力荷载"] {
            tree.add_leaf(Some(loads), label);
        }

        let soil = tree.add_branch(Some(project), "土壤");
        tree.add_leaf(Some(soil), "土壤点");

        let analysis = tree.add_branch(Some(project), "分析");
        tree.add_leaf(Some(analysis), "静力分析组");
        tree.add_leaf(Some(analysis), "设计检查");

        let results = tree.add_branch(Some(project), "结果");
        for label in ["规范应力", "位移", "约束", "力和力矩"] {
            tree.add_leaf(Some(results), label);
        }

        tree
    }

    /// Adds a collapsible node.
    pub fn add_branch(&mut self, parent: Option<NodeId>, label: impl Into<String>) -> NodeId {
        self.push_node(parent, label.into(), false)
    }

    /// Adds a leaf node.
    pub fn add_leaf(&mut self, parent: Option<NodeId>, label: impl Into<String>) -> NodeId {
        self.push_node(parent, label.into(), true)
    }

    fn push_node(&mut self, parent: Option<NodeId>, label: String, leaf: bool) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            label,
            leaf,
            children: Vec::new(),
        });

        match parent.and_then(|p| self.nodes.get_mut(p.0)) {
            Some(parent_node) => parent_node.children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    // ===== Structure Queries =====

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.0 < self.nodes.len()
    }

    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|n| n.label.as_str())
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes.get(node.0).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    pub fn is_leaf(&self, node: NodeId) -> bool {
        self.nodes.get(node.0).is_some_and(|n| n.leaf)
    }

    /// First node (in creation order) carrying `label`.
    pub fn find(&self, label: &str) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.label == label).map(NodeId)
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    // ===== Expansion & Selection Queries =====

    /// Returns true if a non-leaf node is expanded. Leaves are never expanded.
    pub fn is_expanded(&self, node: NodeId) -> bool {
        self.expanded_nodes.contains(&node)
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn is_selected(&self, node: NodeId) -> bool {
        self.selected == Some(node)
    }

    // ===== Mutations =====

    /// Handles a click on a node header.
    ///
    /// Non-leaf nodes toggle their expansion and become selected; leaves are
    /// only selected. Unknown ids are ignored.
    pub fn click(&mut self, node: NodeId) -> Option<TreeClick> {
        let label = self.label(node)?.to_string();
        let expanded = if self.is_leaf(node) {
            None
        } else {
            Some(self.toggle(node))
        };
        self.select(node);

        log::debug!("tree click: {} (expanded: {:?})", label, expanded);
        Some(TreeClick { node, label, expanded })
    }

    /// Flips the expansion state of a non-leaf node, returning the new state.
    fn toggle(&mut self, node: NodeId) -> bool {
        if self.expanded_nodes.remove(&node) {
            false
        } else {
            self.expanded_nodes.insert(node);
            true
        }
    }

    /// Makes `node` the only selected node.
    pub fn select(&mut self, node: NodeId) {
        if self.contains(node) {
            self.selected = Some(node);
        }
    }

    /// Expands every non-leaf node.
    pub fn expand_all(&mut self) {
        let branches: Vec<NodeId> = self.node_ids().filter(|id| !self.is_leaf(*id)).collect();
        self.expanded_nodes.extend(branches);
    }

    /// Collapses every node.
    pub fn collapse_all(&mut self) {
        self.expanded_nodes.clear();
    }

    // ===== Layout =====

    /// Rows currently laid out, depth-first. Descendants of collapsed nodes
    /// are hidden but kept.
    pub fn visible_rows(&self) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        let mut stack: Vec<VisibleRow> = self
            .roots
            .iter()
            .rev()
            .map(|&node| VisibleRow { node, depth: 0 })
            .collect();

        while let Some(row) = stack.pop() {
            rows.push(row);
            if self.is_expanded(row.node) {
                for &child in self.children(row.node).iter().rev() {
                    stack.push(VisibleRow {
                        node: child,
                        depth: row.depth + 1,
                    });
                }
            }
        }
        rows
    }

    pub fn stats(&self) -> TreeStats {
        let leaves = self.nodes.iter().filter(|n| n.leaf).count();
        TreeStats {
            total: self.nodes.len(),
            foldable: self.nodes.len() - leaves,
            leaves,
            expanded: self.expanded_nodes.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_with_leaf() -> (ModelTree, NodeId, NodeId) {
        let mut tree = ModelTree::new();
        let root = tree.add_branch(None, "root");
        let leaf = tree.add_leaf(Some(root), "leaf");
        (tree, root, leaf)
    }

    #[test]
    fn test_click_branch_toggles_and_selects() {
        let (mut tree, root, _) = root_with_leaf();
        assert!(!tree.is_expanded(root));

        let click = tree.click(root).unwrap();
        assert_eq!(click.expanded, Some(true));
        assert!(tree.is_expanded(root));
        assert!(tree.is_selected(root));

        let click = tree.click(root).unwrap();
        assert_eq!(click.expanded, Some(false));
        assert!(!tree.is_expanded(root));
        assert!(tree.is_selected(root));
    }

    #[test]
    fn test_click_leaf_only_selects() {
        let (mut tree, root, leaf) = root_with_leaf();
        tree.click(root);

        let click = tree.click(leaf).unwrap();
        assert_eq!(click.expanded, None);
        assert_eq!(click.label, "leaf");
        assert!(tree.is_selected(leaf));
        assert!(!tree.is_selected(root));
        assert!(!tree.is_expanded(leaf));
        assert!(tree.is_expanded(root));
    }

    #[test]
    fn test_collapse_hides_but_keeps_subtree() {
        let (mut tree, root, leaf) = root_with_leaf();
        assert_eq!(tree.visible_rows().len(), 1);

        tree.click(root);
        let rows = tree.visible_rows();
        assert_eq!(rows, vec![
            VisibleRow { node: root, depth: 0 },
            VisibleRow { node: leaf, depth: 1 },
        ]);

        tree.click(root);
        assert_eq!(tree.visible_rows().len(), 1);
        assert_eq!(tree.children(root), &[leaf]);
    }

    #[test]
    fn test_expand_and_collapse_all() {
        let mut tree = ModelTree::default_project();
        tree.expand_all();
        let stats = tree.stats();
        assert_eq!(stats.expanded, stats.foldable);
        assert_eq!(tree.visible_rows().len(), tree.len());

        tree.collapse_all();
        assert_eq!(tree.stats().expanded, 0);
        assert_eq!(tree.visible_rows().len(), tree.roots().len());
    }

    #[test]
    fn test_default_project_stats() {
        let tree = ModelTree::default_project();
        let stats = tree.stats();
        assert_eq!(stats.total, stats.foldable + stats.leaves);
        assert!(stats.leaves > 0);
        assert_eq!(stats.expanded, 0);
        assert!(tree.selected().is_none());
    }

    #[test]
    fn test_unknown_node_is_ignored() {
        let (mut tree, _, _) = root_with_leaf();
        assert!(tree.click(NodeId(99)).is_none());
        assert!(tree.selected().is_none());
    }
}
