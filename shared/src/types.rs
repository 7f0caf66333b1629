use serde::{Deserialize, Serialize};

/// Body of the "create post" request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::NewPost;

    #[test]
    fn new_post_uses_message_field() {
        let body = serde_json::to_value(NewPost { message: "hi pals".to_owned() }).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "hi pals" }));
    }
}
