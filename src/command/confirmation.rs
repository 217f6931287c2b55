//! Destructive actions that wait for the user's confirmation.

use crate::state::{ModelTree, NodeId};

/// A destructive action awaiting a yes/no answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    CloseProject,
    CloseWindow,
    DeleteNode(NodeId),
}

impl Confirmation {
    /// Question shown in the confirmation dialog.
    pub fn prompt(self, tree: &ModelTree) -> String {
        match self {
            Confirmation::CloseProject => "确定要关闭当前项目吗？未保存的更改将丢失。".to_string(),
            Confirmation::CloseWindow => "确定要关闭 CIOES-SP 吗？未保存的更改将丢失。".to_string(),
            Confirmation::DeleteNode(node) => {
                format!("确定要删除节点 \"{}\" 吗？", tree.label(node).unwrap_or_default())
            }
        }
    }
}
