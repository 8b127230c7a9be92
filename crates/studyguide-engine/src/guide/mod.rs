//! # Guide Service Boundary
//!
//! The generative-AI service is an external collaborator. This module only
//! fixes its interface ([`GuideService`]), the failures it may report
//! ([`GenerateError`]), and the caller-side policy for turning a settled
//! response into a rendered guide ([`GuideSession`]).

pub mod session;
pub mod title;

use serde::{Deserialize, Serialize};

pub use session::{GuideSession, RenderedGuide, RequestId};
pub use title::guide_title;

/// A grounding source reported alongside a generated guide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub uri: String,
    pub title: String,
}

/// The raw result of one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedGuide {
    /// Markdown text as returned by the model.
    pub guide: String,
    #[serde(default)]
    pub sources: Vec<Source>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("Please enter a topic or URL.")]
    EmptyTopic,
    #[error("Received an empty response from the API.")]
    EmptyResponse,
    #[error("Failed to generate study guide from the service: {0}")]
    Service(String),
    #[error("A newer request superseded this one.")]
    Superseded,
}

impl GenerateError {
    /// The single message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            GenerateError::EmptyTopic | GenerateError::Superseded => self.to_string(),
            GenerateError::EmptyResponse | GenerateError::Service(_) => {
                "Failed to generate study guide. Please check your API key and try again."
                    .to_string()
            }
        }
    }
}

/// A generative-AI backend that writes a study guide for a topic.
///
/// One blocking call that settles exactly once. Implementations own prompt
/// construction, transport and authentication; retries are not expected.
pub trait GuideService {
    fn generate(&self, topic: &str) -> Result<GeneratedGuide, GenerateError>;
}

impl<F> GuideService for F
where
    F: Fn(&str) -> Result<GeneratedGuide, GenerateError>,
{
    fn generate(&self, topic: &str) -> Result<GeneratedGuide, GenerateError> {
        self(topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages() {
        assert_eq!(
            GenerateError::EmptyTopic.user_message(),
            "Please enter a topic or URL."
        );
        assert_eq!(
            GenerateError::Service("timeout".into()).user_message(),
            "Failed to generate study guide. Please check your API key and try again."
        );
        assert_eq!(
            GenerateError::EmptyResponse.user_message(),
            GenerateError::Service(String::new()).user_message()
        );
    }

    #[test]
    fn closures_are_services() {
        let service = |topic: &str| -> Result<GeneratedGuide, GenerateError> {
            Ok(GeneratedGuide {
                guide: format!("# {topic}"),
                sources: vec![],
            })
        };
        assert_eq!(service.generate("Rust").unwrap().guide, "# Rust");
    }
}
