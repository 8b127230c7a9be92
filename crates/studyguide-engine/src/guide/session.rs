use crate::parsing::{BlockNode, segment};

use super::{GenerateError, GeneratedGuide, GuideService, Source, guide_title};

/// Identifies one generation request within a [`GuideSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

/// A generated guide together with its freshly parsed render tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedGuide {
    pub title: String,
    pub topic: String,
    /// The markdown exactly as generated.
    pub markdown: String,
    pub blocks: Vec<BlockNode>,
    pub sources: Vec<Source>,
}

impl RenderedGuide {
    pub fn new(topic: &str, generated: GeneratedGuide) -> Self {
        Self {
            title: guide_title(&generated.guide, topic),
            topic: topic.to_string(),
            blocks: segment(&generated.guide),
            markdown: generated.guide,
            sources: generated.sources,
        }
    }
}

/// Caller-side state for requesting and displaying guides.
///
/// Only the most recent request may settle into the session: a response
/// for an older [`RequestId`] is discarded when it arrives. No cancellation
/// and no retries happen here.
#[derive(Debug, Default)]
pub struct GuideSession {
    next_id: u64,
    pending: Option<(RequestId, String)>,
    current: Option<RenderedGuide>,
    error: Option<String>,
}

impl GuideSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request for `topic`, superseding any request in flight.
    pub fn begin(&mut self, topic: &str) -> Result<RequestId, GenerateError> {
        if topic.trim().is_empty() {
            let err = GenerateError::EmptyTopic;
            self.error = Some(err.user_message());
            return Err(err);
        }

        self.next_id += 1;
        let id = RequestId(self.next_id);
        if let Some((old, _)) = self.pending.replace((id, topic.to_string())) {
            log::debug!("request {old:?} superseded by {id:?}");
        }
        self.error = None;
        Ok(id)
    }

    /// Settles request `id` with the service's result.
    ///
    /// A stale `id` returns [`GenerateError::Superseded`] and leaves the
    /// session untouched. Failures keep the previously displayed guide and
    /// record the user-visible message.
    pub fn settle(
        &mut self,
        id: RequestId,
        result: Result<GeneratedGuide, GenerateError>,
    ) -> Result<&RenderedGuide, GenerateError> {
        let topic = match self.pending.take() {
            Some((pending, topic)) if pending == id => topic,
            other => {
                log::debug!("discarding response for superseded request {id:?}");
                self.pending = other;
                return Err(GenerateError::Superseded);
            }
        };

        let generated = result.and_then(|g| {
            if g.guide.trim().is_empty() {
                Err(GenerateError::EmptyResponse)
            } else {
                Ok(g)
            }
        });

        match generated {
            Ok(generated) => {
                self.error = None;
                Ok(&*self.current.insert(RenderedGuide::new(&topic, generated)))
            }
            Err(err) => {
                log::warn!("guide generation for {topic:?} failed: {err}");
                self.error = Some(err.user_message());
                Err(err)
            }
        }
    }

    /// Begins a request, calls `service` and settles the result.
    pub fn request<S>(&mut self, service: &S, topic: &str) -> Result<&RenderedGuide, GenerateError>
    where
        S: GuideService + ?Sized,
    {
        let id = self.begin(topic)?;
        let result = service.generate(topic);
        self.settle(id, result)
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    pub fn current(&self) -> Option<&RenderedGuide> {
        self.current.as_ref()
    }

    /// The message to show for the last failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Clears the displayed guide and any error, as for a new guide.
    pub fn clear(&mut self) {
        self.current = None;
        self.error = None;
    }
}
