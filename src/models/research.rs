use serde::{Deserialize, Serialize};

const SEARCH_ERROR_TITLE: &str = "Erro na pesquisa";

/// One reference returned by the web search collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub snippet: String,
    pub url: String,
}

impl SearchResult {
    pub fn new(title: impl Into<String>, snippet: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            snippet: snippet.into(),
            url: url.into(),
        }
    }

    /// Sentinel record standing in for a failed search
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self {
            title: SEARCH_ERROR_TITLE.to_string(),
            snippet: format!("Falha ao consultar a API de busca: {}", message),
            url: String::new(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.title == SEARCH_ERROR_TITLE && self.url.is_empty()
    }
}

/// Results gathered for a single research query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchEntry {
    pub query: String,
    pub results: Vec<SearchResult>,
}

impl ResearchEntry {
    pub fn new(query: impl Into<String>, results: Vec<SearchResult>) -> Self {
        Self {
            query: query.into(),
            results,
        }
    }
}
