// tests/support/mocks/store.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use newsroom::domain::author::{Author, AuthorId, AuthorRepository};
use newsroom::domain::category::{
    Category, CategoryId, CategoryName, CategoryRepository, CategorySubscriber, NewSubscription,
    SubscriptionRepository,
};
use newsroom::domain::errors::{DomainError, DomainResult};
use newsroom::domain::pagination::PageRequest;
use newsroom::domain::post::{
    NewPost, Post, PostFilter, PostHeader, PostId, PostReadRepository, PostText, PostUpdate,
    PostWriteRepository,
};
use newsroom::domain::user::UserId;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct Tables {
    authors: Vec<Author>,
    categories: Vec<Category>,
    posts: Vec<Post>,
    post_categories: Vec<(i64, i64)>,
    subscribers: Vec<CategorySubscriber>,
    next_post_id: i64,
    next_subscriber_id: i64,
}

/// One in-memory store behind every repository port, with read counters.
#[derive(Default)]
pub struct InMemoryNews {
    tables: Mutex<Tables>,
    post_reads: AtomicUsize,
}

impl InMemoryNews {
    pub fn with_author(self, author_id: i64, user_id: i64) -> Self {
        self.tables.lock().unwrap().authors.push(Author {
            id: AuthorId::new(author_id).unwrap(),
            user_id: UserId::new(user_id).unwrap(),
        });
        self
    }

    pub fn with_category(self, id: i64, name: &str) -> Self {
        self.tables.lock().unwrap().categories.push(Category {
            id: CategoryId::new(id).unwrap(),
            name: CategoryName::new(name).unwrap(),
        });
        self
    }

    /// Stores a post directly, bypassing the write port.
    pub fn seed_post(&self, author_id: i64, header: &str, text: &str, created_at: DateTime<Utc>) -> PostId {
        let mut tables = self.tables.lock().unwrap();
        tables.next_post_id += 1;
        let id = PostId::new(tables.next_post_id).unwrap();
        tables.posts.push(Post {
            id,
            author_id: AuthorId::new(author_id).unwrap(),
            header: PostHeader::new(header).unwrap(),
            text: PostText::new(text).unwrap(),
            created_at,
        });
        id
    }

    /// Number of `find_by_id` calls served so far.
    pub fn post_reads(&self) -> usize {
        self.post_reads.load(Ordering::SeqCst)
    }

    pub fn post_count(&self) -> usize {
        self.tables.lock().unwrap().posts.len()
    }

    pub fn post(&self, id: PostId) -> Option<Post> {
        self.tables
            .lock()
            .unwrap()
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub fn categories_of(&self, id: PostId) -> Vec<i64> {
        let post_id = i64::from(id);
        self.tables
            .lock()
            .unwrap()
            .post_categories
            .iter()
            .filter(|(p, _)| *p == post_id)
            .map(|(_, c)| *c)
            .collect()
    }

    pub fn subscriptions(&self, user_id: i64, category_id: i64) -> usize {
        self.tables
            .lock()
            .unwrap()
            .subscribers
            .iter()
            .filter(|s| i64::from(s.user_id) == user_id && i64::from(s.category_id) == category_id)
            .count()
    }
}

impl Tables {
    fn has_category(&self, id: CategoryId) -> bool {
        self.categories.iter().any(|c| c.id == id)
    }

    fn ensure_categories(&self, ids: &[CategoryId]) -> DomainResult<()> {
        match ids.iter().find(|id| !self.has_category(**id)) {
            Some(id) => Err(DomainError::NotFound(format!("category {id} not found"))),
            None => Ok(()),
        }
    }

    fn link(&mut self, post_id: PostId, categories: &[CategoryId]) {
        for category in categories {
            self.post_categories
                .push((i64::from(post_id), i64::from(*category)));
        }
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryNews {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut tables = self.tables.lock().unwrap();
        tables.ensure_categories(&post.categories)?;

        tables.next_post_id += 1;
        let stored = Post {
            id: PostId::new(tables.next_post_id)?,
            author_id: post.author_id,
            header: post.header,
            text: post.text,
            created_at: post.created_at,
        };
        tables.posts.push(stored.clone());
        tables.link(stored.id, &post.categories);
        Ok(stored)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut tables = self.tables.lock().unwrap();
        if let Some(categories) = &update.categories {
            tables.ensure_categories(categories)?;
        }
        let post = tables
            .posts
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        if let Some(header) = update.header {
            post.header = header;
        }
        if let Some(text) = update.text {
            post.text = text;
        }
        let updated = post.clone();

        if let Some(categories) = update.categories {
            let post_id = i64::from(update.id);
            tables.post_categories.retain(|(p, _)| *p != post_id);
            tables.link(update.id, &categories);
        }
        Ok(updated)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut tables = self.tables.lock().unwrap();
        let before = tables.posts.len();
        tables.posts.retain(|p| p.id != id);
        if tables.posts.len() == before {
            return Err(DomainError::NotFound("post not found".into()));
        }
        let post_id = i64::from(id);
        tables.post_categories.retain(|(p, _)| *p != post_id);
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for InMemoryNews {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        self.post_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.post(id))
    }

    async fn list_page(&self, filter: &PostFilter, page: PageRequest) -> DomainResult<(Vec<Post>, u64)> {
        let tables = self.tables.lock().unwrap();
        let mut matching: Vec<Post> = tables
            .posts
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        let total = matching.len() as u64;
        let items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.per_page() as usize)
            .collect();
        Ok((items, total))
    }
}

#[async_trait]
impl AuthorRepository for InMemoryNews {
    async fn find_by_user(&self, user_id: UserId) -> DomainResult<Option<Author>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .authors
            .iter()
            .find(|a| a.user_id == user_id)
            .cloned())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryNews {
    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn list_page(&self, page: PageRequest) -> DomainResult<(Vec<Category>, u64)> {
        let tables = self.tables.lock().unwrap();
        let mut sorted = tables.categories.clone();
        sorted.sort_by(|a, b| {
            a.name
                .as_str()
                .cmp(b.name.as_str())
                .then_with(|| i64::from(a.id).cmp(&i64::from(b.id)))
        });
        let total = sorted.len() as u64;
        let items = sorted
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.per_page() as usize)
            .collect();
        Ok((items, total))
    }
}

#[async_trait]
impl SubscriptionRepository for InMemoryNews {
    async fn insert(&self, subscription: NewSubscription) -> DomainResult<CategorySubscriber> {
        let mut tables = self.tables.lock().unwrap();
        if !tables.has_category(subscription.category_id) {
            return Err(DomainError::NotFound("category not found".into()));
        }
        tables.next_subscriber_id += 1;
        let row = CategorySubscriber {
            id: tables.next_subscriber_id,
            user_id: subscription.user_id,
            category_id: subscription.category_id,
            created_at: subscription.created_at,
        };
        tables.subscribers.push(row.clone());
        Ok(row)
    }
}
