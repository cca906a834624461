use axum::{
    extract::FromRequestParts,
    http::{header::ACCEPT_LANGUAGE, request::Parts},
};
use std::convert::Infallible;

pub const SUPPORTED_LANGUAGES: &[&str] = &["es", "en"];

/// Languages from the `Accept-Language` header, best quality first.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct UserLanguage(Vec<String>);

impl UserLanguage {
    pub fn parse(header: &str) -> Self {
        let mut languages: Vec<(String, f32)> = header
            .split(',')
            .filter_map(|part| {
                let mut pieces = part.trim().split(';');
                let tag = pieces.next()?.trim();
                if tag.is_empty() || tag == "*" {
                    return None;
                }

                let quality = pieces
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|q| q.parse::<f32>().ok())
                    .unwrap_or(1.0);

                Some((tag.to_lowercase(), quality))
            })
            .collect();

        // stable: equal qualities keep header order
        languages.sort_by(|a, b| b.1.total_cmp(&a.1));

        Self(languages.into_iter().map(|(tag, _)| tag).collect())
    }

    pub fn preferred_languages(&self) -> &[String] {
        &self.0
    }

    /// First preferred language we have translations for, by primary subtag.
    pub fn supported(&self) -> Option<&'static str> {
        self.0.iter().find_map(|tag| {
            let primary = tag.split_once('-').map(|(p, _)| p).unwrap_or(tag);
            SUPPORTED_LANGUAGES.iter().find(|l| **l == primary).copied()
        })
    }
}

impl<S: Send + Sync> FromRequestParts<S> for UserLanguage {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let language = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .map(UserLanguage::parse)
            .unwrap_or_default();

        Ok(language)
    }
}
