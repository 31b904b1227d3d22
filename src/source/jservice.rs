use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::board_engine::{
    config::BoardConfig,
    error::{BoardError, Result},
    models::CategoryId,
};
use crate::source::{QuestionSource, RawCategory, RawClue};

#[derive(Debug, Deserialize)]
struct ListedCategory {
    id: CategoryId,
}

#[derive(Debug, Deserialize)]
struct CategoryBody {
    title: String,
    clues: Vec<ClueBody>,
}

#[derive(Debug, Deserialize)]
struct ClueBody {
    question: String,
    answer: AnswerBody,
}

/// Answers are text, but some records carry a bare number instead.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswerBody {
    Text(String),
    Number(serde_json::Number),
}

impl From<AnswerBody> for String {
    fn from(answer: AnswerBody) -> Self {
        match answer {
            AnswerBody::Text(text) => text,
            AnswerBody::Number(n) => n.to_string(),
        }
    }
}

/// HTTP client for a jService-style trivia API.
///
/// `GET {base}categories?count=N` lists categories, `GET {base}category?id=ID`
/// returns one category with every clue it has.
#[derive(Debug, Clone)]
pub struct JServiceSource {
    http: Client,
    base: Url,
}

impl JServiceSource {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self> {
        let base = parse_base_url(api_url)?;
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base })
    }

    pub fn from_config(config: &BoardConfig) -> Result<Self> {
        Self::new(
            &config.api_url,
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| BoardError::InvalidConfig(format!("bad endpoint {path}: {e}")))
    }
}

/// Parse the API base, making sure relative joins land under it.
pub(crate) fn parse_base_url(api_url: &str) -> Result<Url> {
    let mut raw = api_url.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    let url = Url::parse(&raw)
        .map_err(|e| BoardError::InvalidConfig(format!("api_url {api_url:?}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(BoardError::InvalidConfig(format!(
            "api_url {api_url:?} cannot be used as a base"
        )));
    }
    Ok(url)
}

#[async_trait]
impl QuestionSource for JServiceSource {
    async fn list_category_ids(&self, min_count: usize) -> Result<Vec<CategoryId>> {
        let url = self.endpoint("categories")?;
        let res = self
            .http
            .get(url)
            .query(&[("count", min_count)])
            .send()
            .await?
            .error_for_status()?;
        let listed: Vec<ListedCategory> = res.json().await?;
        if listed.len() < min_count {
            warn!(
                requested = min_count,
                returned = listed.len(),
                "question service returned fewer categories than requested"
            );
        }
        debug!(count = listed.len(), "listed categories");
        Ok(listed.into_iter().map(|c| c.id).collect())
    }

    async fn fetch_category(&self, id: CategoryId) -> Result<RawCategory> {
        let url = self.endpoint("category")?;
        let res = self.http.get(url).query(&[("id", id)]).send().await?;
        if res.status() == StatusCode::NOT_FOUND {
            return Err(BoardError::NotFound(id));
        }
        let body: CategoryBody = res.error_for_status()?.json().await?;
        debug!(id, title = %body.title, clues = body.clues.len(), "fetched category");
        Ok(RawCategory {
            title: body.title,
            clues: body
                .clues
                .into_iter()
                .map(|c| RawClue {
                    question: c.question,
                    answer: c.answer.into(),
                })
                .collect(),
        })
    }
}
