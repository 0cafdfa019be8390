use serde::{Deserialize, Serialize};

/// `{"data": ...}` wrapper used by every list/create/update response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

impl<T> DataEnvelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PageLinks {
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
    #[serde(default)]
    pub from: Option<u64>,
    #[serde(default)]
    pub to: Option<u64>,
}

/// Paginated envelope: `{data, links, meta}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub links: PageLinks,
    pub meta: PageMeta,
}

impl<T: Clone> Paginated<T> {
    /// Cuts one page out of `items`. Pages are 1-based, `page` is clamped
    /// into `1..=last_page`, `per_page` of 0 is treated as 1.
    pub fn paginate(items: &[T], page: u32, per_page: u32, base_path: &str) -> Self {
        let per_page = per_page.max(1);
        let total = items.len() as u64;
        let last_page = (total.div_ceil(per_page as u64)).max(1) as u32;
        let current_page = page.clamp(1, last_page);

        let start = ((current_page - 1) as usize) * per_page as usize;
        let end = (start + per_page as usize).min(items.len());
        let data: Vec<T> = if start < items.len() {
            items[start..end].to_vec()
        } else {
            Vec::new()
        };

        let link = |p: u32| format!("{}?page={}&per_page={}", base_path, p, per_page);
        let links = PageLinks {
            first: Some(link(1)),
            last: Some(link(last_page)),
            prev: (current_page > 1).then(|| link(current_page - 1)),
            next: (current_page < last_page).then(|| link(current_page + 1)),
        };

        let (from, to) = if data.is_empty() {
            (None, None)
        } else {
            (Some(start as u64 + 1), Some(end as u64))
        };

        Self {
            data,
            links,
            meta: PageMeta {
                current_page,
                last_page,
                per_page,
                total,
                from,
                to,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwrap_list_envelope() {
        let body = r#"{"data":[{"id":1,"name":"X"}]}"#;
        let env: DataEnvelope<Vec<serde_json::Value>> = serde_json::from_str(body).unwrap();
        assert_eq!(env.into_inner(), vec![serde_json::json!({"id": 1, "name": "X"})]);
    }

    #[test]
    fn test_paginate_middle_page() {
        let items: Vec<u32> = (1..=25).collect();
        let page = Paginated::paginate(&items, 2, 10, "/api/tags");
        assert_eq!(page.data, (11..=20).collect::<Vec<_>>());
        assert_eq!(page.meta.last_page, 3);
        assert_eq!(page.meta.total, 25);
        assert_eq!(page.meta.from, Some(11));
        assert_eq!(page.meta.to, Some(20));
        assert_eq!(page.links.prev.as_deref(), Some("/api/tags?page=1&per_page=10"));
        assert_eq!(page.links.next.as_deref(), Some("/api/tags?page=3&per_page=10"));
    }

    #[test]
    fn test_paginate_empty_and_out_of_range() {
        let empty: Vec<u32> = Vec::new();
        let page = Paginated::paginate(&empty, 5, 10, "/api/tags");
        assert!(page.data.is_empty());
        assert_eq!(page.meta.current_page, 1);
        assert_eq!(page.meta.last_page, 1);
        assert!(page.links.next.is_none());

        let items: Vec<u32> = (1..=3).collect();
        let page = Paginated::paginate(&items, 9, 2, "/api/tags");
        assert_eq!(page.meta.current_page, 2);
        assert_eq!(page.data, vec![3]);
    }
}
