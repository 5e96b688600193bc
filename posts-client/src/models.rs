use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Публикация в том виде, в котором её отдаёт JSONPlaceholder.
pub struct Post {
    /// Идентификатор поста; ключ списка и номер на карточке.
    pub id: i64,
    /// Идентификатор автора. Локально не разыменовывается.
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Заголовок.
    pub title: String,
    /// Текст публикации.
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_reads_camel_case_user_id() {
        let raw = r#"{"userId":7,"id":3,"title":"t","body":"b"}"#;
        let post: Post = serde_json::from_str(raw).expect("post should parse");
        assert_eq!(post.id, 3);
        assert_eq!(post.user_id, 7);
        assert_eq!(post.title, "t");
        assert_eq!(post.body, "b");
    }

    #[test]
    fn post_rejects_missing_title() {
        let raw = r#"{"userId":7,"id":3,"body":"b"}"#;
        assert!(serde_json::from_str::<Post>(raw).is_err());
    }

    #[test]
    fn post_writes_user_id_back_as_camel_case() {
        let post = Post {
            id: 1,
            user_id: 2,
            title: "t".to_string(),
            body: "b".to_string(),
        };
        let json = serde_json::to_value(&post).expect("post should serialize");
        assert_eq!(json["userId"], 2);
        assert!(json.get("user_id").is_none());
    }
}
