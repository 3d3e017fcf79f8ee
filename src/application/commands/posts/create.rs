// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
        ports::notification::NotificationJob,
    },
    domain::post::{NewPost, Post, PostHeader, PostText},
};

pub struct CreatePostCommand {
    pub header: String,
    pub text: String,
    pub categories: Vec<i64>,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    header: Option<String>,
    text: Option<String>,
    categories: Vec<i64>,
}

impl CreatePostCommandBuilder {
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn category(mut self, id: i64) -> Self {
        self.categories.push(id);
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            header: self.header.ok_or("header is required")?,
            text: self.text.ok_or("text is required")?,
            categories: self.categories,
        })
    }
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<PostDto> {
        ensure_capability(actor, "posts", "add")?;
        ensure_capability(actor, "posts", "change")?;

        let author = self
            .author_repo
            .find_by_user(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("author profile not found"))?;

        let header = PostHeader::new(command.header)?;
        let text = PostText::new(command.text)?;
        let categories = self.resolve_categories(&command.categories).await?;

        let new_post = NewPost::new(author.id, header, text, categories, self.clock.now());
        let category_count = new_post.categories.len();
        let created = self.write_repo.insert(new_post).await?;
        tracing::info!(
            post_id = %created.id,
            author_id = i64::from(created.author_id),
            categories = category_count,
            "post created"
        );

        self.notify_created(actor, &created).await;
        Ok(created.into())
    }

    /// Queue the "new post" e-mail for the author. Nothing here can fail the request: the
    /// post is already stored.
    async fn notify_created(&self, actor: &AuthenticatedUser, post: &Post) {
        let Some(recipient) = actor.email.as_deref().filter(|email| !email.is_empty()) else {
            tracing::info!(post_id = %post.id, user_id = %actor.id, "no e-mail address, skipping notification");
            return;
        };

        let body = match self
            .renderer
            .render_post_created(&PostDto::from(post.clone()))
        {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(post_id = %post.id, error = %err, "failed to render notification");
                return;
            }
        };

        let subject = format!(
            "{}: a new post has been published!",
            post.created_at.format("%Y-%m-%d")
        );
        let job = NotificationJob::new(subject, recipient, body);
        let job_id = job.id;

        match self.notifications.enqueue(job).await {
            Ok(()) => tracing::debug!(post_id = %post.id, %job_id, "notification enqueued"),
            Err(err) => {
                tracing::warn!(post_id = %post.id, %job_id, error = %err, "failed to enqueue notification");
            }
        }
    }
}
