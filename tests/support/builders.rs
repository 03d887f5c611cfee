// tests/support/builders.rs
use serde_json::{Value, json};

/// Request body for `POST /api/v1/auth/register`.
pub struct RegisterBody {
    username: String,
    email: String,
    password: String,
    role: Option<&'static str>,
    bio: Option<String>,
}

impl RegisterBody {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password: "password123".to_string(),
            role: None,
            bio: None,
        }
    }

    pub fn role(mut self, role: &'static str) -> Self {
        self.role = Some(role);
        self
    }

    pub fn password(mut self, password: &str) -> Self {
        self.password = password.to_string();
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn bio(mut self, bio: &str) -> Self {
        self.bio = Some(bio.to_string());
        self
    }

    pub fn build(self) -> Value {
        let mut body = json!({
            "username": self.username,
            "email": self.email,
            "password": self.password,
        });
        if let Some(role) = self.role {
            body["role"] = json!(role);
        }
        if let Some(bio) = self.bio {
            body["bio"] = json!(bio);
        }
        body
    }
}

pub fn login_body(username: &str, password: &str) -> Value {
    json!({ "username": username, "password": password })
}

pub fn article_body(title: &str, content: &str, publisher_id: i64) -> Value {
    json!({ "title": title, "content": content, "publisher_id": publisher_id })
}
