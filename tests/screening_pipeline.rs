use std::sync::{Arc, Mutex};

use talent_ai::workflows::screening::{
    CandidateRecord, RecordSource, ResultSink, ScreenedCandidate, ScreeningConfig,
    ScreeningService, ScreeningServiceError, SinkError, SourceError, Verdict,
};

struct StaticSource {
    records: Vec<CandidateRecord>,
}

impl RecordSource for StaticSource {
    fn fetch_batch(&self) -> Result<Vec<CandidateRecord>, SourceError> {
        Ok(self.records.clone())
    }
}

struct FailingSource;

impl RecordSource for FailingSource {
    fn fetch_batch(&self) -> Result<Vec<CandidateRecord>, SourceError> {
        Err(SourceError::Unavailable("sheet export timed out".to_string()))
    }
}

#[derive(Default)]
struct RecordingSink {
    published: Mutex<Vec<Vec<ScreenedCandidate>>>,
}

impl ResultSink for RecordingSink {
    fn publish(&self, results: &[ScreenedCandidate]) -> Result<(), SinkError> {
        self.published
            .lock()
            .expect("sink mutex poisoned")
            .push(results.to_vec());
        Ok(())
    }
}

struct RejectingSink;

impl ResultSink for RejectingSink {
    fn publish(&self, _results: &[ScreenedCandidate]) -> Result<(), SinkError> {
        Err(SinkError::Unavailable("writer offline".to_string()))
    }
}

fn sourced_batch() -> Vec<CandidateRecord> {
    vec![
        CandidateRecord::from_pairs([
            ("Person_ID", "cand-101"),
            ("Role_Type", "Research Scientist"),
            (
                "Scholar_Summary",
                "First author at ICML; reward model ablations",
            ),
            ("GitHub_Summary", "Maintainer of a DeepSpeed integration"),
        ]),
        CandidateRecord::from_pairs([
            ("Person_ID", "cand-102"),
            ("Role_Type", "Developer Advocate"),
            (
                "Background_Notes",
                "Keynote speaker; runs a workshop series on agentic tool use",
            ),
        ]),
        CandidateRecord::from_pairs([("Person_ID", "cand-103"), ("Role_Type", "Unknown Role")]),
    ]
}

#[test]
fn service_screens_and_publishes_a_batch() {
    let sink = Arc::new(RecordingSink::default());
    let service = ScreeningService::new(
        Arc::new(StaticSource {
            records: sourced_batch(),
        }),
        Arc::clone(&sink),
        ScreeningConfig::default(),
    );

    let results = service.run_batch().expect("batch screens and publishes");

    assert_eq!(results.len(), 3);
    for result in &results {
        assert_eq!(
            result.evaluation.canonical_evidence.len(),
            result.evaluation.determinant_tiers.len()
        );
        assert!(result.evaluation.final_score >= 0.0);
    }
    // No evidentiary text at all on the third record.
    assert_eq!(results[2].evaluation.verdict, Verdict::InsufficientSignal);

    let published = sink.published.lock().expect("sink mutex poisoned");
    assert_eq!(published.len(), 1);
    assert_eq!(published[0], results);
}

#[test]
fn service_runs_are_deterministic() {
    let sink = Arc::new(RecordingSink::default());
    let service = ScreeningService::new(
        Arc::new(StaticSource {
            records: sourced_batch(),
        }),
        Arc::clone(&sink),
        ScreeningConfig::default(),
    );

    let first = service.run_batch().expect("first run");
    let second = service.run_batch().expect("second run");
    assert_eq!(first, second);
}

#[test]
fn source_failures_propagate() {
    let service = ScreeningService::new(
        Arc::new(FailingSource),
        Arc::new(RecordingSink::default()),
        ScreeningConfig::default(),
    );

    match service.run_batch() {
        Err(ScreeningServiceError::Source(SourceError::Unavailable(detail))) => {
            assert!(detail.contains("timed out"));
        }
        other => panic!("expected source error, got {other:?}"),
    }
}

#[test]
fn sink_failures_propagate_after_screening() {
    let service = ScreeningService::new(
        Arc::new(StaticSource {
            records: sourced_batch(),
        }),
        Arc::new(RejectingSink),
        ScreeningConfig::default(),
    );

    assert!(matches!(
        service.run_batch(),
        Err(ScreeningServiceError::Sink(SinkError::Unavailable(_)))
    ));
}
