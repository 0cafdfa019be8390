use contracts::domain::common::{ReferenceForm, TreeEntity};
use contracts::shared::search::{matches_reference, normalize_search};
use contracts::shared::tree::{filter_tree, flatten_with_depth, subtree_keys};
use contracts::shared::{ErrorMessage, Language, LocalizedName, TreeNode};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

use super::details::ReferenceDetails;
use super::service::ReferenceDataService;
use super::{issue_ticket, still_current, FetchSequence, StatusBadge};
use crate::shared::i18n::t;
use crate::shared::icons::icon;
use crate::shared::list_utils::{confirm_action, SearchInput};
use crate::shared::locale::use_locale;
use crate::shared::messages::MessageList;
use crate::shared::page_frame::{page_id, PageFrame, PAGE_CAT_TREE};

/// Edit form for a node; the parent comes from the node's position
pub fn node_form(node: &TreeNode, parent: Option<i64>) -> ReferenceForm {
    ReferenceForm {
        id: Some(node.key),
        code: node.data.code.clone(),
        names: LocalizedName::new(node.data.name_en.clone(), node.data.name_ar.clone()),
        status: node.data.status,
        parent_id: parent,
    }
}

/// Indented `(key, label)` pairs for the parent picker, without
/// `editing` and its descendants
pub fn parent_options(nodes: &[TreeNode], editing: Option<i64>) -> Vec<(i64, String)> {
    let excluded = editing.map(|key| subtree_keys(nodes, key)).unwrap_or_default();
    flatten_with_depth(nodes)
        .into_iter()
        .filter(|(_, node)| !excluded.contains(&node.key))
        .map(|(level, node)| {
            let label = if node.data.code.is_empty() {
                node.label.clone()
            } else {
                format!("{} {}", node.data.code, node.label)
            };
            (node.key, format!("{}{}", "\u{2003}".repeat(level), label))
        })
        .collect()
}

fn node_matches(node: &TreeNode, query: &str) -> bool {
    let names = LocalizedName::new(node.data.name_en.clone(), node.data.name_ar.clone());
    matches_reference(query, &names, Some(&node.data.code))
}

fn all_keys(nodes: &[TreeNode]) -> HashSet<i64> {
    flatten_with_depth(nodes).into_iter().map(|(_, n)| n.key).collect()
}

#[derive(Clone, Copy)]
struct TreeView {
    expanded: RwSignal<HashSet<i64>>,
    editing: RwSignal<Option<ReferenceForm>>,
    on_delete: Callback<i64>,
    lang: Language,
}

fn render_nodes(nodes: Vec<TreeNode>, parent: Option<i64>, tree: TreeView) -> AnyView {
    nodes
        .into_iter()
        .map(|node| {
            let key = node.key;
            let has_children = !node.children.is_empty();
            let form = node_form(&node, parent);
            let lang = tree.lang;
            let children = node.children;
            let is_expanded = move || tree.expanded.with(|e| e.contains(&key));

            view! {
                <li class="tree__node">
                    <div class="tree__row">
                        <span
                            class="tree__toggle"
                            class:tree__toggle--expanded=is_expanded
                            on:click=move |_| {
                                if has_children {
                                    tree.expanded.update(|e| {
                                        if !e.remove(&key) {
                                            e.insert(key);
                                        }
                                    });
                                }
                            }
                        >
                            {has_children.then(|| icon("chevron-right"))}
                        </span>
                        {(!node.data.code.is_empty()).then(|| view! {
                            <span class="tree__code" dir="ltr">{node.data.code.clone()}</span>
                        })}
                        <span class="tree__label">{node.label}</span>
                        <StatusBadge status=node.data.status lang=lang />
                        <span class="tree__actions">
                            <button
                                class="button button--icon"
                                title=t(lang, "new")
                                on:click=move |_| tree.editing.set(Some(ReferenceForm {
                                    parent_id: Some(key),
                                    ..Default::default()
                                }))
                            >
                                {icon("plus")}
                            </button>
                            <button
                                class="button button--icon"
                                title=t(lang, "editing")
                                on:click=move |_| tree.editing.set(Some(form.clone()))
                            >
                                {icon("edit")}
                            </button>
                            <button
                                class="button button--icon button--danger"
                                title=t(lang, "delete")
                                on:click=move |_| tree.on_delete.run(key)
                            >
                                {icon("delete")}
                            </button>
                        </span>
                    </div>
                    <Show when=is_expanded>
                        <ul class="tree__children">
                            {render_nodes(children.clone(), Some(key), tree)}
                        </ul>
                    </Show>
                </li>
            }
        })
        .collect_view()
        .into_any()
}

/// Expandable tree for hierarchical reference entities (ISIC codes,
/// consulting fields).
///
/// The tree is rebuilt from the server after every change; nodes are never
/// inserted or removed locally.
#[component]
pub fn ReferenceTreePage<E: TreeEntity>(service: StoredValue<ReferenceDataService<E>, LocalStorage>) -> impl IntoView {
    let locale = use_locale();
    let lang = move || locale.language.get();

    let nodes = RwSignal::new(Vec::<TreeNode>::new());
    let messages = RwSignal::new(Vec::<ErrorMessage>::new());
    let search = RwSignal::new(String::new());
    let expanded = RwSignal::new(HashSet::<i64>::new());
    let editing = RwSignal::new(None::<ReferenceForm>);
    let fetches = StoredValue::new(FetchSequence::default());

    let load = move || {
        let Some(ticket) = issue_ticket(fetches) else {
            return;
        };
        let lang = locale.current();
        let service = service.get_value();
        spawn_local(async move {
            let result = service.tree(lang).await;
            if !still_current(fetches, ticket) {
                log::debug!("dropping stale {} tree ({})", E::collection_name(), lang);
                return;
            }
            match result {
                Ok(tree) => {
                    let _ = nodes.try_set(tree);
                    let _ = messages.try_set(Vec::new());
                }
                Err(e) => {
                    let _ = messages.try_set(e.messages());
                }
            }
        });
    };

    Effect::new(move |_| {
        locale.language.track();
        load();
    });

    let on_delete = Callback::new(move |key: i64| {
        let lang = locale.current();
        if !confirm_action(t(lang, "confirm_delete_node")) {
            return;
        }
        let service = service.get_value();
        spawn_local(async move {
            match service.delete(key, lang).await {
                Ok(()) => load(),
                // nodes with children are refused with 422
                Err(e) => {
                    let _ = messages.try_set(e.messages());
                }
            }
        });
    });

    let visible = move || {
        let query = search.get();
        if normalize_search(&query).is_empty() {
            nodes.get()
        } else {
            nodes.with(|n| filter_tree(n, &|node: &TreeNode| node_matches(node, &query)))
        }
    };

    // a search shows every match without manual expanding
    Effect::new(move |_| {
        if !normalize_search(&search.get()).is_empty() {
            let keys = nodes.with_untracked(|n| all_keys(n));
            expanded.set(keys);
        }
    });

    view! {
        <PageFrame page_id=page_id(&E::full_name(), PAGE_CAT_TREE) category=PAGE_CAT_TREE>
            <div class="page__header">
                <h2 class="page__title">{icon("tree")} {move || E::list_name(lang())}</h2>
                <div class="page__actions">
                    <SearchInput
                        value=search
                        on_change=Callback::new(move |text: String| search.set(text))
                        placeholder=Signal::derive(move || t(lang(), "search").to_string())
                    />
                    <button class="button button--primary" on:click=move |_| editing.set(Some(ReferenceForm::default()))>
                        {icon("plus")} {move || t(lang(), "new")}
                    </button>
                    <button class="button button--secondary" on:click=move |_| load()>
                        {icon("refresh")} {move || t(lang(), "refresh")}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| expanded.set(nodes.with_untracked(|n| all_keys(n)))
                    >
                        {move || t(lang(), "expand_all")}
                    </button>
                    <button class="button button--secondary" on:click=move |_| expanded.set(HashSet::new())>
                        {move || t(lang(), "collapse_all")}
                    </button>
                </div>
            </div>

            <MessageList messages=messages />

            <div class="page__content">
                {move || {
                    let rows = visible();
                    let lang = lang();
                    if rows.is_empty() {
                        view! { <div class="tree__empty">{t(lang, "no_records")}</div> }.into_any()
                    } else {
                        let tree = TreeView { expanded, editing, on_delete, lang };
                        view! { <ul class="tree">{render_nodes(rows, None, tree)}</ul> }.into_any()
                    }
                }}
            </div>

            {move || editing.get().map(|form| {
                let options = nodes.with_untracked(|n| parent_options(n, form.id));
                view! {
                    <ReferenceDetails
                        service=service
                        form=form
                        parent_options=options
                        on_saved=Callback::new(move |_| {
                            editing.set(None);
                            load();
                        })
                        on_close=Callback::new(move |_| editing.set(None))
                    />
                }
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::{Status, TreeNodeData};

    fn node(key: i64, code: &str, en: &str, children: Vec<TreeNode>) -> TreeNode {
        TreeNode {
            key,
            label: en.to_string(),
            data: TreeNodeData {
                code: code.into(),
                status: Status::Active,
                name_en: en.into(),
                name_ar: format!("{en}-ar"),
            },
            children,
        }
    }

    fn sample() -> Vec<TreeNode> {
        vec![
            node(1, "A", "Agriculture", vec![node(2, "01", "Crops", vec![node(3, "011", "Cereals", vec![])])]),
            node(4, "B", "Mining", vec![]),
        ]
    }

    #[test]
    fn test_node_form_takes_parent_from_position() {
        let tree = sample();
        let form = node_form(&tree[0].children[0], Some(1));
        assert_eq!(form.id, Some(2));
        assert_eq!(form.code, "01");
        assert_eq!(form.names.ar, "Crops-ar");
        assert_eq!(form.parent_id, Some(1));
    }

    #[test]
    fn test_parent_options_exclude_own_subtree() {
        let tree = sample();
        let keys: Vec<i64> = parent_options(&tree, Some(2)).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![1, 4]);

        let all = parent_options(&tree, None);
        assert_eq!(all.len(), 4);
        assert_eq!(all[2].1, "\u{2003}\u{2003}011 Cereals");
    }

    #[test]
    fn test_node_matches_code_and_both_names() {
        let tree = sample();
        assert!(node_matches(&tree[1], "mining"));
        assert!(node_matches(&tree[1], "b"));
        assert!(node_matches(&tree[0], "agriculture-ar"));
        assert!(!node_matches(&tree[1], "crops"));
    }
}
