// src/core/net.rs

// Blocking HTTP GET (ureq)

use std::time::Duration;

use ureq::{Agent, AgentBuilder};

use crate::config::consts::{CONNECT_TIMEOUT_SECS, READ_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

/// Anything that can turn a URL into page markup.
/// The runner only talks to pages through this, so tests can hand it canned HTML.
pub trait Fetch {
    fn get(&self, url: &str) -> Result<String>;
}

pub struct HttpFetcher {
    agent: Agent,
}

impl HttpFetcher {
    pub fn new() -> Self {
        let agent = AgentBuilder::new()
            .user_agent(USER_AGENT)
            .timeout_connect(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout_read(Duration::from_secs(READ_TIMEOUT_SECS))
            .build();
        Self { agent }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> Result<String> {
        logd!("GET {url}");
        let resp = match self.agent.get(url).call() {
            Ok(resp) => resp,
            Err(ureq::Error::Status(status, _)) => {
                return Err(Error::Status { url: s!(url), status });
            }
            Err(e) => {
                return Err(Error::Transport { url: s!(url), source: Box::new(e) });
            }
        };

        // ureq only errors on 4xx/5xx; anything else that isn't 200 is still not a page
        if resp.status() != 200 {
            return Err(Error::Status { url: s!(url), status: resp.status() });
        }

        let body = resp
            .into_string()
            .map_err(|source| Error::Body { url: s!(url), source })?;
        logd!("GET {url}: {} bytes", body.len());
        Ok(body)
    }
}
