use thalamus_core::errors::*;

#[test]
fn thalamus_error_deadline_exceeded_carries_stage() {
    let err = ThalamusError::DeadlineExceeded {
        stage: "generation".into(),
    };
    assert!(err.to_string().contains("generation"));
}

#[test]
fn session_error_not_found_carries_id() {
    let err = SessionError::NotFound {
        id: "abc-123".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("abc-123"), "error should contain the session id");
}

#[test]
fn generation_error_retries_exhausted_carries_attempts_and_reason() {
    let err = GenerationError::RetriesExhausted {
        attempts: 2,
        reason: "connection reset".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("2"));
    assert!(msg.contains("connection reset"));
}

#[test]
fn generation_error_timed_out_carries_duration() {
    let err = GenerationError::TimedOut { waited_ms: 30_000 };
    assert!(err.to_string().contains("30000"));
}

#[test]
fn retrieval_error_search_failed_carries_retriever_and_reason() {
    let err = RetrievalError::SearchFailed {
        retriever: "semantic".into(),
        reason: "index offline".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("semantic"));
    assert!(msg.contains("index offline"));
}

#[test]
fn config_error_invalid_carries_field() {
    let err = ConfigError::Invalid {
        field: "retrieval.top_k".into(),
        reason: "must be at least 1".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("retrieval.top_k"));
    assert!(msg.contains("at least 1"));
}

// --- From impls ---

#[test]
fn retrieval_error_converts_to_thalamus_error() {
    let retrieval_err = RetrievalError::BackendUnavailable {
        name: "keyword".into(),
    };
    let err: ThalamusError = retrieval_err.into();
    assert!(matches!(err, ThalamusError::RetrievalError(_)));
}

#[test]
fn session_error_converts_to_thalamus_error() {
    let session_err = SessionError::NotFound { id: "x".into() };
    let err: ThalamusError = session_err.into();
    assert!(matches!(err, ThalamusError::SessionError(_)));
}

#[test]
fn generation_error_converts_to_thalamus_error() {
    let gen_err = GenerationError::EmptyResponse;
    let err: ThalamusError = gen_err.into();
    assert!(matches!(err, ThalamusError::GenerationError(_)));
}

#[test]
fn config_error_converts_to_thalamus_error() {
    let config_err = ConfigError::ParseFailed {
        reason: "bad toml".into(),
    };
    let err: ThalamusError = config_err.into();
    assert!(matches!(err, ThalamusError::ConfigError(_)));
}

#[test]
fn serialization_error_converts_to_thalamus_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: ThalamusError = json_err.into();
    assert!(matches!(err, ThalamusError::SerializationError(_)));
}
