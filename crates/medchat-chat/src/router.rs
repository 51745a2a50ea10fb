//! Query router: dispatches each message to the search-link responder or
//! the AI backend.
//!
//! Messages naming a care provider (doctor, clinic, specialist titles...)
//! get a search-engine link instead of a model answer.

use regex::Regex;

pub use medchat_common::{DEFAULT_KEYWORDS, DEFAULT_SEARCH_BASE_URL};

/// Which responder answers a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Responder {
    SearchLink(SearchLinkResponder),
    Backend,
}

/// Answers with a link to search results for the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchLinkResponder {
    url: String,
}

impl SearchLinkResponder {
    pub fn new(search_base_url: &str, query: &str) -> Self {
        Self {
            url: format!("{search_base_url}?q={}", urlencoding::encode(query)),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// A single formatter-ready line carrying the link.
    pub fn reply(&self) -> String {
        format!("Here are some top doctors based on your query: {}", self.url)
    }
}

/// Case-insensitive keyword router.
#[derive(Debug, Clone)]
pub struct QueryRouter {
    /// `None` when no keywords are configured.
    pattern: Option<Regex>,
    search_base_url: String,
}

impl QueryRouter {
    /// Build a router matching any of `keywords` as a substring.
    pub fn new<I, K>(keywords: I, search_base_url: impl Into<String>) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let alternation = keywords
            .into_iter()
            .map(|k| regex::escape(k.as_ref().trim()))
            .filter(|k| !k.is_empty())
            .collect::<Vec<_>>()
            .join("|");
        let pattern = if alternation.is_empty() {
            None
        } else {
            Some(Regex::new(&format!("(?i)(?:{alternation})"))?)
        };
        Ok(Self {
            pattern,
            search_base_url: search_base_url.into(),
        })
    }

    /// Whether `text` should be answered with a search link.
    pub fn is_provider_query(&self, text: &str) -> bool {
        self.pattern.as_ref().is_some_and(|p| p.is_match(text))
    }

    pub fn route(&self, text: &str) -> Responder {
        if self.is_provider_query(text) {
            Responder::SearchLink(SearchLinkResponder::new(&self.search_base_url, text))
        } else {
            Responder::Backend
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specialist_title_routes_to_search() {
        let router = default_router();
        assert!(matches!(
            router.route("Who is a good cardiologist near me"),
            Responder::SearchLink(_)
        ));
    }

    #[test]
    fn general_question_routes_to_backend() {
        let router = default_router();
        assert_eq!(router.route("Explain how vaccines work"), Responder::Backend);
    }

    fn default_router() -> QueryRouter {
        QueryRouter::new(DEFAULT_KEYWORDS, DEFAULT_SEARCH_BASE_URL).unwrap()
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let router = default_router();
        assert!(router.is_provider_query("Find a DOCTOR"));
        assert!(router.is_provider_query("nearest Hospitals?"));
        assert!(router.is_provider_query("best treatments for acne"));
        assert!(!router.is_provider_query("how much water should I drink"));
    }

    #[test]
    fn search_url_is_url_encoded() {
        let router = default_router();
        let Responder::SearchLink(link) = router.route("clinic & pharmacy near me?") else {
            panic!("expected search link");
        };
        assert_eq!(
            link.url(),
            "https://www.google.com/search?q=clinic%20%26%20pharmacy%20near%20me%3F"
        );
        assert!(link.reply().ends_with(link.url()));
    }

    #[test]
    fn custom_base_url() {
        let router = QueryRouter::new(["clinic"], "https://duckduckgo.com/").unwrap();
        let Responder::SearchLink(link) = router.route("clinic") else {
            panic!("expected search link");
        };
        assert_eq!(link.url(), "https://duckduckgo.com/?q=clinic");
    }

    #[test]
    fn keywords_are_escaped() {
        let router = QueryRouter::new(["a+b"], DEFAULT_SEARCH_BASE_URL).unwrap();
        assert!(router.is_provider_query("see A+B now"));
        assert!(!router.is_provider_query("aab"));
    }

    #[test]
    fn empty_keyword_list_matches_nothing() {
        let router = QueryRouter::new(Vec::<String>::new(), DEFAULT_SEARCH_BASE_URL).unwrap();
        assert_eq!(router.route("doctor"), Responder::Backend);
        assert_eq!(router.route(""), Responder::Backend);
    }
}
