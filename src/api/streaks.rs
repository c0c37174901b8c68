use crate::db::history::HistoryRecord;
use crate::libs::cache::{get_as, put_as, Scope, ScopedCache};
use crate::libs::config::RemoteConfig;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskId};
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

const TASKS_URL: &str = "tasks";
const HISTORY_URL: &str = "history";
pub const TASKS_KEY: &str = "tasks";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    msg: String,
}

/// Client for a remote streaks server.
///
/// The owner's task list is mirrored in the scoped cache. A successful fetch
/// replaces the cached copy; when the server cannot be reached the cached copy
/// is served instead. Nothing is retried.
pub struct StreaksClient<C: ScopedCache> {
    client: Client,
    config: RemoteConfig,
    cache: C,
}

impl<C: ScopedCache> StreaksClient<C> {
    pub fn new(config: &RemoteConfig, cache: C) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
            cache,
        }
    }

    fn scope(&self) -> Scope {
        Scope::User(self.config.owner.clone())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.config.api_url.trim_end_matches('/'), path);
        self.client.request(method, url).bearer_auth(&self.config.token)
    }

    async fn parse<T: DeserializeOwned>(res: Response) -> Result<T> {
        let status = res.status();
        if status.is_success() {
            return Ok(res.json::<T>().await?);
        }
        let msg = match res.json::<ErrorBody>().await {
            Ok(body) => body.msg,
            Err(_) => status.to_string(),
        };
        Err(msg_error_anyhow!(format!("{} ({})", msg, status)))
    }

    pub fn cached_tasks(&self) -> Result<Option<Vec<Task>>> {
        get_as(&self.cache, &self.scope(), TASKS_KEY)
    }

    fn store_tasks(&self, tasks: &[Task]) -> Result<()> {
        put_as(&self.cache, &self.scope(), TASKS_KEY, tasks)
    }

    async fn fetch_tasks(&self) -> Result<Vec<Task>> {
        let res = self.request(Method::GET, TASKS_URL).send().await?;
        Self::parse(res).await
    }

    /// Fresh task list, or the cached one when the fetch fails.
    ///
    /// The boolean is `true` when the result came from the cache.
    pub async fn list(&self) -> Result<(Vec<Task>, bool)> {
        match self.fetch_tasks().await {
            Ok(tasks) => {
                self.store_tasks(&tasks)?;
                Ok((tasks, false))
            }
            Err(err) => {
                tracing::warn!("{}", Message::RemoteFetchFailed(err.to_string()));
                match self.cached_tasks()? {
                    Some(tasks) => Ok((tasks, true)),
                    None => Err(err),
                }
            }
        }
    }

    pub async fn add(&self, text: &str) -> Result<Task> {
        let res = self.request(Method::POST, TASKS_URL).json(&json!({ "text": text })).send().await?;
        let task: Task = Self::parse(res).await?;

        let mut tasks = self.cached_tasks()?.unwrap_or_default();
        tasks.insert(0, task.clone());
        self.store_tasks(&tasks)?;

        Ok(task)
    }

    pub async fn toggle(&self, id: TaskId) -> Result<Task> {
        let res = self.request(Method::PUT, &format!("{}/{}/complete", TASKS_URL, id)).send().await?;
        let task: Task = Self::parse(res).await?;

        let mut tasks = self.cached_tasks()?.unwrap_or_default();
        match tasks.iter_mut().find(|cached| cached.id == task.id) {
            Some(cached) => *cached = task.clone(),
            None => tasks.insert(0, task.clone()),
        }
        self.store_tasks(&tasks)?;

        Ok(task)
    }

    pub async fn delete(&self, id: TaskId) -> Result<()> {
        let res = self.request(Method::DELETE, &format!("{}/{}", TASKS_URL, id)).send().await?;
        let _: serde_json::Value = Self::parse(res).await?;

        let mut tasks = self.cached_tasks()?.unwrap_or_default();
        tasks.retain(|cached| cached.id != id);
        self.store_tasks(&tasks)
    }

    pub async fn history(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<HistoryRecord>> {
        let res = self
            .request(Method::GET, HISTORY_URL)
            .query(&[("startDate", start.to_string()), ("endDate", end.to_string())])
            .send()
            .await?;
        Self::parse(res).await
    }

    /// Forgets everything cached for this owner.
    pub fn logout(&self) -> Result<()> {
        self.cache.invalidate(&self.scope())
    }
}
