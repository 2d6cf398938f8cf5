//! Conversation controller: the submit/reset pipeline over a [`Session`]

use super::resolver::{Reply, ReplySource, Resolve, ResolveError};
use super::session::Session;
use super::validation::{Rejection, check_submission};
use crate::config::InputLimits;
use crate::domain::Message;
use std::sync::Arc;
use tracing::{debug, error, info};

/// A submission that passed the gate and awaits its reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    /// Trimmed text handed to the resolver
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Ignored by the gate; the session is unchanged
    Rejected(Rejection),
    /// A bot message was appended
    Replied(ReplySource),
    /// The error bubble was appended
    Failed,
}

/// Owns the session and is its only writer.
pub struct ConversationController {
    session: Session,
    resolver: Arc<dyn Resolve>,
    limits: InputLimits,
}

impl ConversationController {
    pub fn new(resolver: Arc<dyn Resolve>, limits: InputLimits) -> Self {
        Self {
            session: Session::new(),
            resolver,
            limits,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn messages(&self) -> &[Message] {
        self.session.messages()
    }

    pub fn is_pending(&self) -> bool {
        self.session.is_pending()
    }

    pub fn limits(&self) -> &InputLimits {
        &self.limits
    }

    /// Shared handle for running the resolver off the event loop
    pub fn resolver(&self) -> Arc<dyn Resolve> {
        Arc::clone(&self.resolver)
    }

    /// Gate the submission, append the user message and mark the session pending.
    pub fn begin(&mut self, text: &str) -> Result<PendingReply, Rejection> {
        if let Err(rejection) = check_submission(text, self.session.is_pending(), &self.limits) {
            debug!(%rejection, "Submission ignored");
            return Err(rejection);
        }

        let prompt = text.trim().to_string();
        self.session.push(Message::user(prompt.clone()));
        self.session.set_pending(true);
        debug!(messages = self.session.messages().len(), "User message appended");
        Ok(PendingReply { prompt })
    }

    /// Apply the resolver result and clear the pending flag.
    pub fn complete(&mut self, result: Result<Reply, ResolveError>) -> SubmitOutcome {
        let outcome = match result {
            Ok(reply) => {
                info!(source = ?reply.source, "Reply received");
                self.session.push(Message::bot(reply.text));
                SubmitOutcome::Replied(reply.source)
            }
            Err(err) => {
                error!(error = %err, "Reply could not be produced");
                self.session.push(Message::error());
                SubmitOutcome::Failed
            }
        };
        self.session.set_pending(false);
        outcome
    }

    /// Full pipeline: gate, append, resolve, append reply or error bubble.
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        let pending = match self.begin(text) {
            Ok(pending) => pending,
            Err(rejection) => return SubmitOutcome::Rejected(rejection),
        };
        let result = self.resolver.resolve(&pending.prompt).await;
        self.complete(result)
    }

    /// Replace the history with a single greeting. Confirmation is the caller's job.
    pub fn reset(&mut self) {
        self.session.reset();
        info!("Conversation cleared");
    }
}
