// src/infrastructure/notifications/templates.rs
use crate::application::dto::PostDto;
use crate::application::error::ApplicationError;
use crate::application::{ApplicationResult, ports::notification::NotificationRenderer};
use crate::domain::censor::ProfanityFilter;
use std::collections::HashMap;
use std::sync::Arc;
use tera::{Context, Tera, Value};

const POST_CREATED: &str = "post_created.html";
const POST_CREATED_SOURCE: &str = include_str!("templates/post_created.html");

/// `censor` template filter: redacts banned words from a string value.
struct CensorFilter(Arc<ProfanityFilter>);

impl tera::Filter for CensorFilter {
    fn filter(&self, value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
        let text = tera::try_get_value!("censor", "value", String, value);
        Ok(Value::String(self.0.censor(&text)))
    }
}

/// Renders notification documents from templates compiled into the binary.
pub struct TeraNotificationRenderer {
    tera: Tera,
    base_url: String,
}

impl TeraNotificationRenderer {
    pub fn new(censor: Arc<ProfanityFilter>, base_url: impl Into<String>) -> ApplicationResult<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(POST_CREATED, POST_CREATED_SOURCE)
            .map_err(|err| ApplicationError::infrastructure(format!("invalid template: {err}")))?;
        tera.register_filter("censor", CensorFilter(censor));

        Ok(Self {
            tera,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }
}

impl NotificationRenderer for TeraNotificationRenderer {
    fn render_post_created(&self, post: &PostDto) -> ApplicationResult<String> {
        let mut context = Context::new();
        context.insert("post", post);
        context.insert("base_url", &self.base_url);

        self.tera
            .render(POST_CREATED, &context)
            .map_err(|err| ApplicationError::infrastructure(format!("failed to render notification: {err}")))
    }
}
