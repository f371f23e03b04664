//! AnswerPipeline: orchestrates the full query-answering flow.
//!
//! Per query: load history → reformulate → fan out retrieval passes →
//! fuse → generate with the evidence context → record the turn → assess
//! grounding. Optional collaborators degrade (keyword index, rewrite pass);
//! only generation failure and an exhausted deadline fail the request.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thalamus_core::config::ThalamusConfig;
use thalamus_core::errors::{GenerationError, RetrievalError, ThalamusError, ThalamusResult};
use thalamus_core::models::{
    Document, EvidenceMetadata, Message, QueryOutcome, RetrievalSource, Role, ScoredDocument,
};
use thalamus_core::traits::{ICorpusProvider, IEmbeddingSearch, IRetriever, ITextGenerator};
use thalamus_grounding::{quality, GroundingScorer};
use thalamus_retrieval::fusion::{fuse, SourceList};
use thalamus_retrieval::reformulate::ReformulationOutcome;
use thalamus_retrieval::{KeywordRetriever, QueryReformulator, SemanticRetriever};
use thalamus_session::SessionStore;
use tokio::time::{timeout, timeout_at, Instant};
use tracing::{debug, info, instrument, warn};

use crate::prompts;

/// One query to answer within a session.
#[derive(Debug, Clone)]
pub struct QueryRequest {
    pub session_id: String,
    pub query: String,
    /// Overrides the configured evidence count when set.
    pub top_k: Option<usize>,
    /// Absolute cut-off for the whole request; external calls never run
    /// past it.
    pub deadline: Option<Instant>,
}

impl QueryRequest {
    pub fn new(session_id: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            query: query.into(),
            top_k: None,
            deadline: None,
        }
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Operational snapshot for a stats surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStatus {
    pub active_sessions: usize,
    /// `None` while the keyword index is unavailable.
    pub keyword_documents: Option<usize>,
    pub search_backend: String,
    pub generator: String,
}

/// The main answer pipeline. Owns the retrievers, the session store, the
/// reformulator, and the grounding scorer; the embedding backend, corpus,
/// and generator are injected.
pub struct AnswerPipeline {
    semantic: SemanticRetriever,
    keyword: RwLock<Option<Arc<KeywordRetriever>>>,
    corpus: Arc<dyn ICorpusProvider>,
    generator: Arc<dyn ITextGenerator>,
    sessions: SessionStore,
    reformulator: QueryReformulator,
    scorer: GroundingScorer,
    config: ThalamusConfig,
}

impl std::fmt::Debug for AnswerPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnswerPipeline")
            .field("search_backend", &self.semantic.backend_name())
            .field("generator", &self.generator.name())
            .finish_non_exhaustive()
    }
}

impl AnswerPipeline {
    /// Build the pipeline, indexing the corpus for keyword retrieval.
    ///
    /// An empty corpus or a failed snapshot degrades to semantic-only
    /// retrieval; only an invalid config is fatal here.
    pub fn new(
        search: Arc<dyn IEmbeddingSearch>,
        corpus: Arc<dyn ICorpusProvider>,
        generator: Arc<dyn ITextGenerator>,
        config: ThalamusConfig,
    ) -> ThalamusResult<Self> {
        config.validate()?;

        let semantic =
            SemanticRetriever::new(search).with_overfetch(config.retrieval.filter_overfetch);
        let keyword = match corpus.snapshot() {
            Ok(documents) => build_keyword_index(documents),
            Err(e) => {
                warn!(error = %e, "corpus snapshot failed, starting without a keyword index");
                None
            }
        };
        let sessions = SessionStore::new(config.session.clone());
        let reformulator =
            QueryReformulator::new(Arc::clone(&generator), config.reformulation.clone());
        let scorer = GroundingScorer::new(config.grounding.clone());

        Ok(Self {
            semantic,
            keyword: RwLock::new(keyword),
            corpus,
            generator,
            sessions,
            reformulator,
            scorer,
            config,
        })
    }

    /// Answer one query.
    #[instrument(skip(self, request), fields(session_id = %request.session_id))]
    pub async fn process_query(&self, request: QueryRequest) -> ThalamusResult<QueryOutcome> {
        let top_k = request.top_k.unwrap_or(self.config.retrieval.top_k);

        // Step 1: Conversation history. An unknown session reads as empty.
        let history = self
            .sessions
            .history(&request.session_id, 2 * self.config.session.max_history);
        debug!(turns = history.len(), "loaded session history");

        // Step 2: Best-effort reformulation. A deadline expiring mid-rewrite
        // falls back like any other rewrite failure; the request itself is
        // cut off at the next stage.
        let reformulation = match request.deadline {
            Some(deadline) => {
                match timeout_at(
                    deadline,
                    self.reformulator.reformulate(&request.query, &history),
                )
                .await
                {
                    Ok(outcome) => outcome,
                    Err(_) => {
                        warn!(query = %request.query, "deadline expired during rewrite, keeping original query");
                        ReformulationOutcome {
                            text: request.query.clone(),
                            was_rewritten: false,
                        }
                    }
                }
            }
            None => {
                self.reformulator
                    .reformulate(&request.query, &history)
                    .await
            }
        };

        // Step 3: Fan out retrieval passes and fuse.
        let evidence = match request.deadline {
            Some(deadline) => timeout_at(
                deadline,
                self.retrieve_evidence(&request.query, &reformulation, top_k),
            )
            .await
            .map_err(|_| ThalamusError::DeadlineExceeded {
                stage: "retrieval".to_string(),
            })?,
            None => {
                self.retrieve_evidence(&request.query, &reformulation, top_k)
                    .await
            }
        };
        let context_used = !evidence.is_empty();

        // Step 4: Generation messages: prior turns plus the context-bearing
        // user turn.
        let context = prompts::format_context(&evidence);
        let mut messages = history;
        messages.push(Message::now(
            Role::User,
            prompts::format_user_query(&request.query, &context),
        ));

        // Step 5: Record the user turn first so it survives generation
        // failure, then generate. No session lock is held across the call.
        self.record_turn(&request.session_id, Role::User, &request.query);
        let answer = self.generate_answer(&messages, request.deadline).await?;
        self.record_turn(&request.session_id, Role::Assistant, &answer);

        // Step 6: Grounding assessment against the original query.
        let assessment = self
            .scorer
            .assess(&answer, &request.query, &evidence, context_used);
        if assessment.is_risky {
            info!(
                score = assessment.risk_score,
                "answer flagged as grounding risk"
            );
        }
        let report = quality(&answer, &evidence);
        debug!(
            words = report.word_count,
            sentences = report.sentence_count,
            mean_relevance = report.mean_relevance,
            hedged = report.has_hedging,
            "answer quality"
        );

        // Step 7: Assemble the outcome. The assessment is surfaced only
        // from the configured band upward.
        let surfaced = assessment.risk_score >= self.scorer.surface_threshold();
        let evidence_meta: Vec<EvidenceMetadata> =
            evidence.iter().map(EvidenceMetadata::from).collect();

        info!(
            evidence = evidence_meta.len(),
            rewritten = reformulation.was_rewritten,
            "query answered"
        );

        Ok(QueryOutcome {
            answer,
            session_id: request.session_id,
            evidence: evidence_meta,
            context_used,
            assessment: surfaced.then_some(assessment),
        })
    }

    /// Run the planned retrieval passes concurrently and fuse the lists.
    ///
    /// Every pass degrades to an empty list on failure; the keyword pass is
    /// skipped while the index is absent and the rewrite pass unless the
    /// query was actually rewritten.
    async fn retrieve_evidence(
        &self,
        query: &str,
        reformulation: &ReformulationOutcome,
        top_k: usize,
    ) -> Vec<ScoredDocument> {
        let weights = self.config.retrieval.fusion_weights();
        let keyword = self.keyword_retriever();

        let (semantic_hits, keyword_hits, rewrite_hits) = tokio::join!(
            self.run_pass(&self.semantic, RetrievalSource::SemanticOriginal, query, top_k),
            async {
                match keyword.as_deref() {
                    Some(retriever) => {
                        self.run_pass(retriever, RetrievalSource::Keyword, query, top_k)
                            .await
                    }
                    None => Vec::new(),
                }
            },
            async {
                if reformulation.was_rewritten {
                    self.run_pass(
                        &self.semantic,
                        RetrievalSource::SemanticReformulated,
                        &reformulation.text,
                        top_k,
                    )
                    .await
                } else {
                    Vec::new()
                }
            },
        );

        let mut lists = vec![SourceList::new(
            RetrievalSource::SemanticOriginal,
            weights.semantic_original,
            semantic_hits,
        )];
        if keyword.is_some() {
            lists.push(SourceList::new(
                RetrievalSource::Keyword,
                weights.keyword,
                keyword_hits,
            ));
        }
        if reformulation.was_rewritten {
            lists.push(SourceList::new(
                RetrievalSource::SemanticReformulated,
                weights.semantic_reformulated,
                rewrite_hits,
            ));
        }

        let fused = fuse(lists, top_k);
        debug!(fused = fused.len(), "retrieval passes fused");
        fused.into_iter().map(|f| f.hit).collect()
    }

    async fn run_pass(
        &self,
        retriever: &dyn IRetriever,
        source: RetrievalSource,
        query: &str,
        limit: usize,
    ) -> Vec<ScoredDocument> {
        match retriever.search(query, limit).await {
            Ok(hits) => {
                debug!(source = source.as_str(), hits = hits.len(), "retrieval pass complete");
                hits
            }
            Err(e) => {
                warn!(source = source.as_str(), error = %e, "retrieval pass failed, continuing without it");
                Vec::new()
            }
        }
    }

    /// Call the generator with retries, bounding each attempt by the
    /// configured timeout and whatever remains of the caller's deadline.
    async fn generate_answer(
        &self,
        messages: &[Message],
        deadline: Option<Instant>,
    ) -> ThalamusResult<String> {
        let configured = Duration::from_millis(self.config.generation.timeout_ms);
        let attempts = self.config.generation.max_retries.saturating_add(1);
        let mut failure = String::new();

        for attempt in 1..=attempts {
            let budget = generation_budget(configured, deadline)?;
            match timeout(
                budget,
                self.generator
                    .generate(prompts::ANSWER_SYSTEM_PROMPT, messages),
            )
            .await
            {
                Ok(Ok(text)) => {
                    if text.trim().is_empty() {
                        warn!(attempt, "generator returned an empty response");
                        failure = GenerationError::EmptyResponse.to_string();
                    } else {
                        return Ok(text);
                    }
                }
                Ok(Err(e)) => {
                    warn!(attempt, error = %e, "generation attempt failed");
                    // Unwrap the umbrella layer so the final reason is not
                    // double-prefixed.
                    failure = match e {
                        ThalamusError::GenerationError(inner) => inner.to_string(),
                        other => other.to_string(),
                    };
                }
                Err(_) => {
                    let waited_ms = budget.as_millis() as u64;
                    warn!(attempt, waited_ms, "generation attempt timed out");
                    failure = GenerationError::TimedOut { waited_ms }.to_string();
                }
            }
        }

        Err(GenerationError::RetriesExhausted {
            attempts,
            reason: failure,
        }
        .into())
    }

    fn record_turn(&self, session_id: &str, role: Role, content: &str) {
        if let Err(e) = self
            .sessions
            .append_message(session_id, Message::now(role, content))
        {
            warn!(session_id = %session_id, error = %e, "could not record turn");
        }
    }

    fn keyword_retriever(&self) -> Option<Arc<KeywordRetriever>> {
        match self.keyword.read() {
            Ok(slot) => slot.clone(),
            Err(e) => {
                warn!(error = %e, "keyword index lock poisoned, serving without it");
                None
            }
        }
    }

    /// Create a fresh session and return its id.
    pub fn create_session(&self) -> String {
        self.sessions.create_session()
    }

    /// Full retained transcript of a session, oldest first.
    pub fn history(&self, session_id: &str) -> Vec<Message> {
        self.sessions
            .history(session_id, 2 * self.config.session.max_history)
    }

    /// Delete a session, reporting whether one was removed.
    pub fn delete_session(&self, session_id: &str) -> bool {
        self.sessions.delete_session(session_id)
    }

    /// Drop sessions idle past their timeout; returns how many were removed.
    pub fn sweep_expired_sessions(&self) -> usize {
        self.sessions.sweep_expired()
    }

    /// Re-snapshot the corpus and rebuild the keyword index.
    ///
    /// Returns the indexed document count; an empty corpus clears the index
    /// and the pipeline continues semantic-only.
    pub fn rebuild_keyword_index(&self) -> ThalamusResult<usize> {
        let documents = self.corpus.snapshot()?;
        let rebuilt = build_keyword_index(documents);
        let count = rebuilt.as_ref().map_or(0, |r| r.doc_count());
        let mut slot = self.keyword.write().map_err(|e| {
            warn!(error = %e, "keyword index lock poisoned");
            RetrievalError::BackendUnavailable {
                name: "keyword".to_string(),
            }
        })?;
        *slot = rebuilt;
        Ok(count)
    }

    pub fn status(&self) -> PipelineStatus {
        PipelineStatus {
            active_sessions: self.sessions.session_count(),
            keyword_documents: self.keyword_retriever().map(|r| r.doc_count()),
            search_backend: self.semantic.backend_name().to_string(),
            generator: self.generator.name().to_string(),
        }
    }
}

fn build_keyword_index(documents: Vec<Document>) -> Option<Arc<KeywordRetriever>> {
    match KeywordRetriever::from_corpus(documents) {
        Some(retriever) => {
            info!(documents = retriever.doc_count(), "keyword index ready");
            Some(Arc::new(retriever))
        }
        None => {
            warn!("corpus is empty, keyword retrieval disabled");
            None
        }
    }
}

/// Per-attempt generation budget: the configured timeout, capped by the
/// remaining deadline. An already-exhausted deadline is a request error.
fn generation_budget(configured: Duration, deadline: Option<Instant>) -> ThalamusResult<Duration> {
    match deadline {
        None => Ok(configured),
        Some(deadline) => {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Err(ThalamusError::DeadlineExceeded {
                    stage: "generation".to_string(),
                });
            }
            Ok(configured.min(remaining))
        }
    }
}
