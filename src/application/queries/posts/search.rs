use super::PostQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, PostListingDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{author::AuthorId, post::PostFilter},
};
use chrono::{NaiveDate, NaiveTime};

/// Raw search parameters as they arrive from the query string. Blank values are ignored.
#[derive(Debug, Default)]
pub struct SearchPostsQuery {
    pub page: u32,
    pub header: Option<String>,
    pub author: Option<String>,
    pub created_after: Option<String>,
}

impl SearchPostsQuery {
    fn into_filter(self) -> ApplicationResult<(PostFilter, u32)> {
        let header = non_blank(self.header);

        let author = non_blank(self.author)
            .map(|raw| {
                raw.parse::<i64>()
                    .ok()
                    .and_then(|id| AuthorId::new(id).ok())
                    .ok_or_else(|| ApplicationError::validation(format!("invalid author id '{raw}'")))
            })
            .transpose()?;

        let created_after = non_blank(self.created_after)
            .map(|raw| {
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map(|date| date.and_time(NaiveTime::MIN).and_utc())
                    .map_err(|_| {
                        ApplicationError::validation(format!(
                            "invalid date '{raw}', expected YYYY-MM-DD"
                        ))
                    })
            })
            .transpose()?;

        Ok((
            PostFilter {
                header,
                author,
                created_after,
            },
            self.page,
        ))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

impl PostQueryService {
    pub async fn search_posts(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: SearchPostsQuery,
    ) -> ApplicationResult<PostListingDto> {
        let (filter, page) = query.into_filter()?;
        let posts = self.load_page(&filter, page).await?;
        Ok(Self::listing_with_filter(actor, posts, &filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn blank_parameters_are_ignored() {
        let query = SearchPostsQuery {
            page: 1,
            header: Some("  ".into()),
            author: Some(String::new()),
            created_after: None,
        };
        let (filter, page) = query.into_filter().unwrap();
        assert!(filter.is_empty());
        assert_eq!(page, 1);
    }

    #[test]
    fn date_becomes_utc_midnight() {
        let query = SearchPostsQuery {
            page: 2,
            created_after: Some("2024-05-01".into()),
            ..SearchPostsQuery::default()
        };
        let (filter, _) = query.into_filter().unwrap();
        assert_eq!(
            filter.created_after,
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn malformed_values_are_rejected() {
        let bad_author = SearchPostsQuery {
            page: 1,
            author: Some("abc".into()),
            ..SearchPostsQuery::default()
        };
        assert!(matches!(
            bad_author.into_filter().unwrap_err(),
            ApplicationError::Validation(_)
        ));

        let bad_date = SearchPostsQuery {
            page: 1,
            created_after: Some("01/05/2024".into()),
            ..SearchPostsQuery::default()
        };
        assert!(matches!(
            bad_date.into_filter().unwrap_err(),
            ApplicationError::Validation(_)
        ));
    }
}
