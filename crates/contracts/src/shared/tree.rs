//! Hierarchical reference data (ISIC codes, consulting fields).
//!
//! Two server shapes exist: tree endpoints return nodes already nested
//! (`children` arrays), list endpoints return flat rows with `parent_id`.
//! Both are turned into the same [`TreeNode`] shape consumed by tree widgets.
//! The transforms borrow their input and never reorder, merge or drop
//! siblings; the server is trusted to send acyclic data.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::language::Language;
use super::localized::LocalizedName;
use super::status::Status;

/// Denormalized fields kept next to the resolved label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TreeNodeData {
    pub code: String,
    pub status: Status,
    pub name_en: String,
    pub name_ar: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub key: i64,
    pub label: String,
    pub data: TreeNodeData,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of levels below and including this node
    pub fn depth(&self) -> usize {
        1 + forest_depth(&self.children)
    }
}

/// Node as returned by a tree endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTreeNode {
    pub key: i64,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<LocalizedName>,
    #[serde(default)]
    pub status: Status,
    /// `null` and absent both mean "leaf"
    #[serde(default)]
    pub children: Option<Vec<RawTreeNode>>,
}

impl RawTreeNode {
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .as_deref()
            .map(|c| c.iter().map(RawTreeNode::depth).max().unwrap_or(0))
            .unwrap_or(0)
    }
}

impl From<&TreeNode> for RawTreeNode {
    fn from(node: &TreeNode) -> Self {
        Self {
            key: node.key,
            code: node.data.code.clone(),
            label: Some(node.label.clone()),
            names: Some(LocalizedName::new(
                node.data.name_en.clone(),
                node.data.name_ar.clone(),
            )),
            status: node.data.status,
            children: Some(node.children.iter().map(RawTreeNode::from).collect()),
        }
    }
}

/// Row as returned by a flat list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatTreeNode {
    pub id: i64,
    #[serde(default)]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<LocalizedName>,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub parent_id: Option<i64>,
}

/// Picks the display label of a node
pub trait LabelResolver {
    fn resolve(&self, names: Option<&LocalizedName>, label: Option<&str>) -> String;
}

/// `names[lang]` when a language map is present, the raw `label` otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageResolver(pub Language);

impl LabelResolver for LanguageResolver {
    fn resolve(&self, names: Option<&LocalizedName>, label: Option<&str>) -> String {
        match names {
            Some(n) if !n.get(self.0).trim().is_empty() => n.get(self.0).to_string(),
            _ => label.unwrap_or_default().to_string(),
        }
    }
}

impl<F> LabelResolver for F
where
    F: Fn(Option<&LocalizedName>, Option<&str>) -> String,
{
    fn resolve(&self, names: Option<&LocalizedName>, label: Option<&str>) -> String {
        self(names, label)
    }
}

fn node_data(code: &str, status: Status, names: Option<&LocalizedName>) -> TreeNodeData {
    TreeNodeData {
        code: code.to_string(),
        status,
        name_en: names.map(|n| n.en.clone()).unwrap_or_default(),
        name_ar: names.map(|n| n.ar.clone()).unwrap_or_default(),
    }
}

/// Converts a server-nested payload, depth first.
pub fn build_tree<R: LabelResolver + ?Sized>(nodes: &[RawTreeNode], resolver: &R) -> Vec<TreeNode> {
    nodes
        .iter()
        .map(|node| TreeNode {
            key: node.key,
            label: resolver.resolve(node.names.as_ref(), node.label.as_deref()),
            data: node_data(&node.code, node.status, node.names.as_ref()),
            children: node
                .children
                .as_deref()
                .map(|children| build_tree(children, resolver))
                .unwrap_or_default(),
        })
        .collect()
}

/// Nests a flat `parent_id` list.
///
/// Siblings keep their input order. A row whose parent is not in the list
/// becomes a root.
pub fn build_tree_from_flat<R: LabelResolver + ?Sized>(
    nodes: &[FlatTreeNode],
    resolver: &R,
) -> Vec<TreeNode> {
    let ids: HashSet<i64> = nodes.iter().map(|n| n.id).collect();

    let mut children_map: HashMap<Option<i64>, Vec<&FlatTreeNode>> = HashMap::new();
    for node in nodes {
        let parent = node.parent_id.filter(|pid| ids.contains(pid) && *pid != node.id);
        children_map.entry(parent).or_default().push(node);
    }

    fn build_node<R: LabelResolver + ?Sized>(
        node: &FlatTreeNode,
        children_map: &HashMap<Option<i64>, Vec<&FlatTreeNode>>,
        resolver: &R,
    ) -> TreeNode {
        let children = children_map
            .get(&Some(node.id))
            .map(|kids| {
                kids.iter()
                    .map(|kid| build_node(kid, children_map, resolver))
                    .collect()
            })
            .unwrap_or_default();

        TreeNode {
            key: node.id,
            label: resolver.resolve(node.names.as_ref(), node.label.as_deref()),
            data: node_data(&node.code, node.status, node.names.as_ref()),
            children,
        }
    }

    children_map
        .get(&None)
        .map(|roots| {
            roots
                .iter()
                .map(|root| build_node(root, &children_map, resolver))
                .collect()
        })
        .unwrap_or_default()
}

/// Maximum depth of a forest, 0 for an empty one
pub fn forest_depth(nodes: &[TreeNode]) -> usize {
    nodes.iter().map(TreeNode::depth).max().unwrap_or(0)
}

pub fn count_nodes(nodes: &[TreeNode]) -> usize {
    nodes.iter().map(|n| 1 + count_nodes(&n.children)).sum()
}

pub fn find_node(nodes: &[TreeNode], key: i64) -> Option<&TreeNode> {
    nodes.iter().find_map(|n| {
        if n.key == key {
            Some(n)
        } else {
            find_node(&n.children, key)
        }
    })
}

/// Pre-order walk with the level of each node, used for indented pickers
pub fn flatten_with_depth(nodes: &[TreeNode]) -> Vec<(usize, &TreeNode)> {
    fn walk<'a>(nodes: &'a [TreeNode], level: usize, out: &mut Vec<(usize, &'a TreeNode)>) {
        for node in nodes {
            out.push((level, node));
            walk(&node.children, level + 1, out);
        }
    }
    let mut out = Vec::new();
    walk(nodes, 0, &mut out);
    out
}

/// Keys of `key` and every node below it
pub fn subtree_keys(nodes: &[TreeNode], key: i64) -> HashSet<i64> {
    fn collect(node: &TreeNode, out: &mut HashSet<i64>) {
        out.insert(node.key);
        for child in &node.children {
            collect(child, out);
        }
    }
    let mut out = HashSet::new();
    if let Some(node) = find_node(nodes, key) {
        collect(node, &mut out);
    }
    out
}

/// Keeps nodes whose label matches `predicate` plus all their ancestors.
/// Matching nodes keep their whole subtree.
pub fn filter_tree<P: Fn(&TreeNode) -> bool>(nodes: &[TreeNode], predicate: &P) -> Vec<TreeNode> {
    nodes
        .iter()
        .filter_map(|node| {
            if predicate(node) {
                Some(node.clone())
            } else {
                let children = filter_tree(&node.children, predicate);
                (!children.is_empty()).then(|| TreeNode {
                    children,
                    ..node.clone()
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vec<RawTreeNode> {
        serde_json::from_value(json!([
            {
                "key": 1, "code": "A", "status": "active",
                "names": {"en": "Agriculture", "ar": "الزراعة"},
                "children": [
                    {
                        "key": 11, "code": "A01", "status": "active",
                        "names": {"en": "Food", "ar": "طعام"},
                        "children": [
                            {"key": 111, "code": "A011", "label": "Cereals", "children": null}
                        ]
                    },
                    {"key": 12, "code": "A02", "names": {"en": "Forestry", "ar": "الغابات"}}
                ]
            },
            {"key": 2, "code": "B", "status": "inactive", "label": "Mining", "children": []}
        ]))
        .unwrap()
    }

    fn assert_same_shape(raw: &[RawTreeNode], built: &[TreeNode]) {
        assert_eq!(raw.len(), built.len());
        for (r, b) in raw.iter().zip(built) {
            assert_eq!(r.key, b.key);
            match r.children.as_deref() {
                None => assert!(b.children.is_empty()),
                Some(kids) => assert_same_shape(kids, &b.children),
            }
        }
    }

    #[test]
    fn test_structure_is_preserved() {
        let raw = sample();
        let built = build_tree(&raw, &LanguageResolver(Language::En));
        assert_same_shape(&raw, &built);
        assert_eq!(count_nodes(&built), 5);
    }

    #[test]
    fn test_depth_is_preserved() {
        let raw = sample();
        let built = build_tree(&raw, &LanguageResolver(Language::Ar));
        let raw_depth = raw.iter().map(RawTreeNode::depth).max().unwrap_or(0);
        assert_eq!(raw_depth, 3);
        assert_eq!(forest_depth(&built), raw_depth);
    }

    #[test]
    fn test_label_follows_language_without_mutating_input() {
        let raw = sample();
        let before = raw.clone();

        let ar = build_tree(&raw, &LanguageResolver(Language::Ar));
        assert_eq!(find_node(&ar, 11).unwrap().label, "طعام");

        let en = build_tree(&raw, &LanguageResolver(Language::En));
        assert_eq!(find_node(&en, 11).unwrap().label, "Food");

        assert_eq!(raw, before);
    }

    #[test]
    fn test_label_falls_back_to_raw_label() {
        let built = build_tree(&sample(), &LanguageResolver(Language::Ar));
        assert_eq!(find_node(&built, 111).unwrap().label, "Cereals");
        assert_eq!(built[1].label, "Mining");
        assert_eq!(built[1].data.status, Status::Inactive);
    }

    #[test]
    fn test_denormalized_data() {
        let built = build_tree(&sample(), &LanguageResolver(Language::En));
        let node = find_node(&built, 12).unwrap();
        assert_eq!(node.data.code, "A02");
        assert_eq!(node.data.name_en, "Forestry");
        assert_eq!(node.data.name_ar, "الغابات");
        assert!(node.is_leaf());
    }

    #[test]
    fn test_custom_resolver_closure() {
        let upper = |names: Option<&LocalizedName>, label: Option<&str>| {
            names
                .map(|n| n.en.to_uppercase())
                .or_else(|| label.map(str::to_string))
                .unwrap_or_default()
        };
        let built = build_tree(&sample(), &upper);
        assert_eq!(built[0].label, "AGRICULTURE");
    }

    fn flat(id: i64, parent_id: Option<i64>, en: &str) -> FlatTreeNode {
        FlatTreeNode {
            id,
            code: format!("C{id}"),
            label: None,
            names: Some(LocalizedName::new(en, format!("ar-{en}"))),
            status: Status::Active,
            parent_id,
        }
    }

    #[test]
    fn test_flat_list_keeps_sibling_order() {
        let rows = vec![
            flat(3, Some(1), "Zeta"),
            flat(1, None, "Root"),
            flat(2, Some(1), "Alpha"),
            flat(4, Some(2), "Leaf"),
            flat(5, None, "Second root"),
        ];
        let built = build_tree_from_flat(&rows, &LanguageResolver(Language::En));
        assert_eq!(built.iter().map(|n| n.key).collect::<Vec<_>>(), vec![1, 5]);
        assert_eq!(built[0].children.iter().map(|n| n.key).collect::<Vec<_>>(), vec![3, 2]);
        assert_eq!(built[0].children[1].children[0].label, "Leaf");
        assert_eq!(forest_depth(&built), 3);
    }

    #[test]
    fn test_flat_orphan_becomes_root() {
        let rows = vec![flat(1, None, "Root"), flat(7, Some(99), "Orphan")];
        let built = build_tree_from_flat(&rows, &LanguageResolver(Language::Ar));
        assert_eq!(built.len(), 2);
        assert_eq!(built[1].label, "ar-Orphan");
    }

    #[test]
    fn test_flatten_and_subtree() {
        let built = build_tree(&sample(), &LanguageResolver(Language::En));
        let levels: Vec<(usize, i64)> = flatten_with_depth(&built)
            .into_iter()
            .map(|(d, n)| (d, n.key))
            .collect();
        assert_eq!(levels, vec![(0, 1), (1, 11), (2, 111), (1, 12), (0, 2)]);

        let keys = subtree_keys(&built, 11);
        assert_eq!(keys, HashSet::from([11, 111]));
        assert!(subtree_keys(&built, 404).is_empty());
    }

    #[test]
    fn test_filter_keeps_ancestors() {
        let built = build_tree(&sample(), &LanguageResolver(Language::En));
        let filtered = filter_tree(&built, &|n: &TreeNode| n.label == "Cereals");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].key, 1);
        assert_eq!(filtered[0].children.len(), 1);
        assert_eq!(filtered[0].children[0].children[0].key, 111);
    }

    #[test]
    fn test_round_trip_to_raw() {
        let built = build_tree(&sample(), &LanguageResolver(Language::En));
        let raw: Vec<RawTreeNode> = built.iter().map(RawTreeNode::from).collect();
        assert_eq!(build_tree(&raw, &LanguageResolver(Language::En)), built);
    }
}
