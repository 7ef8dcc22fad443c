//! Saved notes (`/bookmarks/*`)

use serde::{Deserialize, Serialize};

use super::OptionSet;

pub const LIST_PATH: &str = "/bookmarks/list";
pub const ADD_PATH: &str = "/bookmarks/add";

/// Delete addresses a bookmark by its position in the list
pub fn delete_path(index: usize) -> String {
    format!("/bookmarks/delete/{}", index)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkCategory {
    #[default]
    Tips,
    Trends,
    Recommendations,
    Notes,
}

impl OptionSet for BookmarkCategory {
    const ALL: &'static [Self] = &[
        BookmarkCategory::Tips,
        BookmarkCategory::Trends,
        BookmarkCategory::Recommendations,
        BookmarkCategory::Notes,
    ];

    fn key(self) -> &'static str {
        match self {
            BookmarkCategory::Tips => "tips",
            BookmarkCategory::Trends => "trends",
            BookmarkCategory::Recommendations => "recommendations",
            BookmarkCategory::Notes => "notes",
        }
    }

    fn label(self) -> &'static str {
        match self {
            BookmarkCategory::Tips => "Tips",
            BookmarkCategory::Trends => "Trends",
            BookmarkCategory::Recommendations => "Recommendations",
            BookmarkCategory::Notes => "Notes",
        }
    }
}

/// A stored bookmark. The category stays a free string on read so
/// entries written by other clients still render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewBookmark {
    pub title: String,
    pub content: String,
    pub category: BookmarkCategory,
    pub tags: Vec<String>,
}

impl NewBookmark {
    pub fn new(title: &str, content: &str, category: BookmarkCategory) -> Self {
        Self {
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            category,
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BookmarkList {
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_path() {
        assert_eq!(delete_path(0), "/bookmarks/delete/0");
        assert_eq!(delete_path(12), "/bookmarks/delete/12");
    }

    #[test]
    fn test_new_bookmark_wire_format() {
        let bm = NewBookmark::new("  Layering  ", "Wear a denim jacket", BookmarkCategory::Notes);
        let json = serde_json::to_value(&bm).unwrap();
        assert_eq!(json["title"], "Layering");
        assert_eq!(json["category"], "notes");
        assert_eq!(json["tags"], serde_json::json!([]));
    }

    #[test]
    fn test_list_tolerates_missing_fields() {
        let body = r#"{"success": true, "bookmarks": [{"title": "a", "content": "b"}]}"#;
        let list: BookmarkList = serde_json::from_str(body).unwrap();
        assert_eq!(list.bookmarks.len(), 1);
        assert_eq!(list.bookmarks[0].category, "");
        assert!(list.bookmarks[0].tags.is_empty());
    }

    #[test]
    fn test_category_keys_round_trip() {
        for cat in BookmarkCategory::ALL {
            assert_eq!(BookmarkCategory::from_key(cat.key()), Some(*cat));
        }
        assert_eq!(BookmarkCategory::default(), BookmarkCategory::Tips);
        assert_eq!(BookmarkCategory::Recommendations.label(), "Recommendations");
    }
}
