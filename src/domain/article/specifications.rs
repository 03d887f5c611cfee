use crate::domain::article::entity::Article;
use crate::domain::user::value_objects::{Role, UserId};

/// Approved articles are public. Pending ones are visible to editors and to the
/// journalist who wrote them.
pub struct CanViewArticleSpec<'a> {
    article: &'a Article,
    viewer: Option<(UserId, Role)>,
}

impl<'a> CanViewArticleSpec<'a> {
    pub fn new(article: &'a Article, viewer: Option<(UserId, Role)>) -> Self {
        Self { article, viewer }
    }

    pub fn is_satisfied(&self) -> bool {
        if self.article.is_approved {
            return true;
        }
        match self.viewer {
            Some((_, Role::Editor)) => true,
            Some((id, Role::Journalist)) => self.article.is_authored_by(id),
            Some((_, Role::Reader)) | None => false,
        }
    }
}
