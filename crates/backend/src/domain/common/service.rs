use contracts::domain::common::{EntityMetadata, ReferenceEntity, ReferencePayload, TreeEntity};
use contracts::shared::{build_tree_from_flat, FieldErrors, Language, LanguageResolver, Paginated, RawTreeNode};

use super::{ReferenceStore, StoredReference};
use crate::shared::error::{ApiError, ApiResult};

fn not_found<E: ReferenceEntity>(id: i64) -> ApiError {
    ApiError::NotFound(format!("{} {}", E::element_name(Language::En), id))
}

/// True when walking up from `parent` reaches `id` (or loops forever)
fn creates_cycle<E: StoredReference>(items: &[E], id: i64, parent: i64) -> bool {
    let mut current = Some(parent);
    let mut steps = 0;
    while let Some(p) = current {
        if p == id || steps > items.len() {
            return true;
        }
        steps += 1;
        current = items.iter().find(|e| e.id() == p).and_then(StoredReference::parent_of);
    }
    false
}

/// Rules that need the rest of the table: unique codes and a valid parent
fn check_links<E: StoredReference>(items: &[E], candidate: &E) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if let Some(code) = candidate.code().map(str::trim).filter(|c| !c.is_empty()) {
        let taken = items
            .iter()
            .any(|e| e.id() != candidate.id() && e.code().map(str::trim) == Some(code));
        if taken {
            errors.add("code", "The code has already been taken.");
        }
    }

    if let Some(parent) = candidate.parent_of() {
        if parent == candidate.id() {
            errors.add("parent_id", "A record cannot be its own parent.");
        } else if !items.iter().any(|e| e.id() == parent) {
            errors.add("parent_id", "The selected parent does not exist.");
        } else if creates_cycle(items, candidate.id(), parent) {
            errors.add("parent_id", "The selected parent is a descendant of this record.");
        }
    }

    errors
}

pub async fn list<E: StoredReference>(store: &ReferenceStore<E>) -> Vec<E> {
    store.read().await.clone()
}

pub async fn list_page<E: StoredReference>(store: &ReferenceStore<E>, page: u32, per_page: u32) -> Paginated<E> {
    let items = store.read().await;
    Paginated::paginate(items.as_slice(), page, per_page, &E::endpoint())
}

pub async fn get<E: StoredReference>(store: &ReferenceStore<E>, id: i64) -> ApiResult<E> {
    store.get(id).await.ok_or_else(|| not_found::<E>(id))
}

pub async fn create<E: StoredReference>(store: &ReferenceStore<E>, payload: E::Payload) -> ApiResult<E> {
    payload.validate().into_result().map_err(ApiError::Validation)?;

    let mut items = store.write().await;
    // id 0 is never assigned, so the candidate cannot collide with a stored record
    let candidate = E::from_payload(0, payload.clone(), EntityMetadata::new());
    check_links(items.as_slice(), &candidate)
        .into_result()
        .map_err(ApiError::Validation)?;

    let record = E::from_payload(store.next_id(), payload, EntityMetadata::new());
    items.push(record.clone());
    tracing::info!("created {} {}", E::element_name(Language::En), record.id());
    Ok(record)
}

pub async fn update<E: StoredReference>(store: &ReferenceStore<E>, id: i64, payload: E::Payload) -> ApiResult<E> {
    payload.validate().into_result().map_err(ApiError::Validation)?;

    let mut items = store.write().await;
    let index = items
        .iter()
        .position(|e| e.id() == id)
        .ok_or_else(|| not_found::<E>(id))?;

    let mut updated = items[index].clone();
    updated.apply(payload);
    check_links(items.as_slice(), &updated)
        .into_result()
        .map_err(ApiError::Validation)?;

    items[index] = updated.clone();
    tracing::info!("updated {} {}", E::element_name(Language::En), id);
    Ok(updated)
}

/// Removes a record; a node that still has children is refused with 422
pub async fn delete<E: StoredReference>(store: &ReferenceStore<E>, id: i64) -> ApiResult<()> {
    let mut items = store.write().await;
    let index = items
        .iter()
        .position(|e| e.id() == id)
        .ok_or_else(|| not_found::<E>(id))?;

    if items.iter().any(|e| e.parent_of() == Some(id)) {
        return Err(ApiError::field(
            "parent_id",
            "The record has child records and cannot be deleted.",
        ));
    }

    items.remove(index);
    tracing::info!("deleted {} {}", E::element_name(Language::En), id);
    Ok(())
}

/// Nested view of a hierarchical resource with labels in `lang`
pub async fn tree<E: StoredReference + TreeEntity>(store: &ReferenceStore<E>, lang: Language) -> Vec<RawTreeNode> {
    let flat: Vec<_> = store.read().await.iter().map(TreeEntity::to_flat).collect();
    build_tree_from_flat(&flat, &LanguageResolver(lang))
        .iter()
        .map(RawTreeNode::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_department::aggregate::{Department, DepartmentDto};
    use contracts::domain::a005_isic_code::aggregate::{IsicCode, IsicCodeDto};
    use contracts::shared::{LocalizedName, Status};

    fn department(en: &str, ar: &str) -> DepartmentDto {
        DepartmentDto {
            names: LocalizedName::new(en, ar),
            status: Status::Active,
        }
    }

    fn isic(code: &str, en: &str, parent_id: Option<i64>) -> IsicCodeDto {
        IsicCodeDto {
            code: code.into(),
            names: LocalizedName::new(en, format!("{en} (ar)")),
            status: Status::Active,
            parent_id,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_ids_and_validates() {
        let store = ReferenceStore::<Department>::new();
        let first = create(&store, department("HR", "الموارد البشرية")).await.unwrap();
        let second = create(&store, department("IT", "تقنية المعلومات")).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        let err = create(&store, department("Legal", "")).await.unwrap_err();
        match err {
            ApiError::Validation(errors) => assert!(errors.get("names.ar").is_some()),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(list(&store).await.len(), 2);
    }

    #[tokio::test]
    async fn test_update_and_delete_missing_record() {
        let store = ReferenceStore::<Department>::new();
        let created = create(&store, department("HR", "الموارد")).await.unwrap();

        let updated = update(&store, created.id, department("People", "الأفراد")).await.unwrap();
        assert_eq!(updated.names.en, "People");
        assert_eq!(updated.metadata.created_at, created.metadata.created_at);

        assert!(matches!(update(&store, 99, department("X", "س")).await, Err(ApiError::NotFound(_))));
        assert!(matches!(delete(&store, 99).await, Err(ApiError::NotFound(_))));
        delete(&store, created.id).await.unwrap();
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_parent_must_exist_and_code_is_unique() {
        let store = ReferenceStore::<IsicCode>::new();
        create(&store, isic("A", "Agriculture", None)).await.unwrap();

        let err = create(&store, isic("01", "Crops", Some(42))).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref e) if e.get("parent_id").is_some()));

        let err = create(&store, isic("A", "Duplicate", None)).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref e) if e.get("code").is_some()));
    }

    #[tokio::test]
    async fn test_cycles_are_refused() {
        let store = ReferenceStore::<IsicCode>::new();
        let a = create(&store, isic("A", "Agriculture", None)).await.unwrap();
        let b = create(&store, isic("01", "Crops", Some(a.id))).await.unwrap();
        let c = create(&store, isic("011", "Cereals", Some(b.id))).await.unwrap();

        let err = update(&store, a.id, isic("A", "Agriculture", Some(c.id))).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref e) if e.get("parent_id").is_some()));

        let err = update(&store, a.id, isic("A", "Agriculture", Some(a.id))).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_node_with_children_is_refused() {
        let store = ReferenceStore::<IsicCode>::new();
        let a = create(&store, isic("A", "Agriculture", None)).await.unwrap();
        let b = create(&store, isic("01", "Crops", Some(a.id))).await.unwrap();

        let err = delete(&store, a.id).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref e) if e.get("parent_id").is_some()));

        delete(&store, b.id).await.unwrap();
        delete(&store, a.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_tree_resolves_labels_per_language() {
        let store = ReferenceStore::<IsicCode>::new();
        let a = create(&store, isic("A", "Agriculture", None)).await.unwrap();
        create(&store, isic("01", "Crops", Some(a.id))).await.unwrap();
        create(&store, isic("B", "Mining", None)).await.unwrap();

        let en = tree(&store, Language::En).await;
        assert_eq!(en.len(), 2);
        assert_eq!(en[0].label.as_deref(), Some("Agriculture"));
        assert_eq!(en[0].children.as_ref().map(Vec::len), Some(1));
        assert_eq!(en[1].children.as_ref().map(Vec::len), Some(0));

        let ar = tree(&store, Language::Ar).await;
        assert_eq!(ar[0].label.as_deref(), Some("Agriculture (ar)"));
    }

    #[tokio::test]
    async fn test_list_page() {
        let store = ReferenceStore::<Department>::new();
        for i in 0..5 {
            create(&store, department(&format!("D{i}"), &format!("ق{i}"))).await.unwrap();
        }
        let page = list_page(&store, 2, 2).await;
        assert_eq!(page.meta.current_page, 2);
        assert_eq!(page.meta.last_page, 3);
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].id, 3);
    }
}
