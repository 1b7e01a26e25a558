//! Comparison harness.
//!
//! Runs a corpus of (stored value, query term) pairs through every strategy
//! and checks each observed result against the expected one for that
//! strategy. The built-in corpus records where the strategies disagree.

use crate::engine::{MatchEngine, MatchResult, QueryTerm, StoredValue};
use crate::strategy::{Strategy, StrategyKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Expected match outcome per strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expected {
    /// Outcome under [`StrategyKind::Minimal`]
    pub minimal: bool,
    /// Outcome under [`StrategyKind::AccentMap`]
    pub accent_map: bool,
    /// Outcome under [`StrategyKind::Collation`]
    pub collation: bool,
}

impl Expected {
    /// Every strategy matches.
    pub const ALL: Expected = Expected::new(true, true, true);
    /// No strategy matches.
    pub const NONE: Expected = Expected::new(false, false, false);
    /// Only the accent-folding strategies match.
    pub const FOLDING: Expected = Expected::new(false, true, true);
    /// Only collation matches.
    pub const COLLATION_ONLY: Expected = Expected::new(false, false, true);

    /// Creates an expectation row.
    pub const fn new(minimal: bool, accent_map: bool, collation: bool) -> Self {
        Self {
            minimal,
            accent_map,
            collation,
        }
    }

    /// Expected outcome for `kind`.
    pub fn for_kind(&self, kind: StrategyKind) -> bool {
        match kind {
            StrategyKind::Minimal => self.minimal,
            StrategyKind::AccentMap => self.accent_map,
            StrategyKind::Collation => self.collation,
        }
    }
}

/// One corpus entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonCase {
    /// Value as stored
    pub stored: StoredValue,
    /// Query as typed
    pub query: QueryTerm,
    /// Expected outcome per strategy
    pub expected: Expected,
}

impl ComparisonCase {
    /// Creates a case.
    pub fn new(stored: &str, query: &str, expected: Expected) -> Self {
        Self {
            stored: StoredValue::new(stored),
            query: QueryTerm::new(query),
            expected,
        }
    }
}

/// The corpus of stored values and queries the strategies are compared on.
pub fn default_corpus() -> Vec<ComparisonCase> {
    use Expected as E;

    let case = ComparisonCase::new;
    vec![
        case("José", "jose", E::FOLDING),
        case("José", "José", E::ALL),
        case("José", "josé", E::ALL),
        case("José", "JOSÉ", E::ALL),
        case(" José ", "josé", E::new(true, true, false)),
        case("Maçã de Arroz", "maca de arroz", E::FOLDING),
        case("Maçã de Arroz", "Maçã de Arroz", E::ALL),
        case("Maçã de Arroz", "maçã de arroz", E::ALL),
        case("Maçã de Arroz", "MACA DE ARROZ", E::FOLDING),
        case("Maçã de Arroz", "maca  de arroz", E::NONE),
        case("ºC", "ºC", E::ALL),
        case("ºC", "ºc", E::ALL),
        case("ºC", "oc", E::COLLATION_ONLY),
        case("ºC", "c", E::NONE),
        case("m3/d", "m3/d", E::ALL),
        case("m3/d", "M3/D", E::ALL),
        case("m²", "m²", E::ALL),
        case("m²", "m2", E::COLLATION_ONLY),
        case("kg/cm²", "kg/cm²", E::ALL),
        case("Wh/(m³•mca)", "Wh/(m³•mca)", E::ALL),
        case("Wh/(m³•mca)", "wh/(m3•mca)", E::COLLATION_ONLY),
        case("m³/día", "m³/día", E::ALL),
        case("m³/día", "m³/dia", E::FOLDING),
        case("m³/día", "M³/DÍA", E::ALL),
        case("Tan φ", "TAN φ", E::ALL),
        case("Cos φ", "cos φ", E::ALL),
        case("Cos φ", "COS Φ", E::ALL),
        case("%", "%", E::ALL),
        case("µS/cm", "µS/cm", E::ALL),
        case("µS/cm", "μs/cm", E::COLLATION_ONLY),
        case("Søren", "soren", E::COLLATION_ONLY),
    ]
}

/// Observed result for one case under one strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseOutcome {
    /// What the engine decided
    pub result: MatchResult,
    /// What the corpus expected
    pub expected: bool,
}

impl CaseOutcome {
    /// True when the observed result equals the expected one.
    pub fn passed(&self) -> bool {
        self.result.matched == self.expected
    }
}

/// Match matrix produced by [`ComparisonHarness::run`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessReport {
    /// When the run finished
    pub generated_at: DateTime<Utc>,
    /// Strategies in column order
    pub strategies: Vec<StrategyKind>,
    /// Outcomes, grouped by case in corpus order, then by strategy
    pub outcomes: Vec<CaseOutcome>,
}

impl HarnessReport {
    /// Number of outcomes that matched expectations.
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    /// Number of outcomes that did not.
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// True when every outcome matched expectations.
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(CaseOutcome::passed)
    }

    /// Outcomes that did not match expectations.
    pub fn mismatches(&self) -> impl Iterator<Item = &CaseOutcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }

    /// One slice per case, holding its outcome under each strategy.
    pub fn rows(&self) -> impl Iterator<Item = &[CaseOutcome]> {
        self.outcomes.chunks(self.strategies.len().max(1))
    }

    /// Every recorded match result.
    pub fn results(&self) -> impl Iterator<Item = &MatchResult> {
        self.outcomes.iter().map(|o| &o.result)
    }
}

/// Drives a corpus through a set of engines.
#[derive(Debug, Clone)]
pub struct ComparisonHarness {
    engines: Vec<MatchEngine>,
    corpus: Vec<ComparisonCase>,
}

impl ComparisonHarness {
    /// Harness over `corpus` with one engine per strategy kind.
    pub fn new(corpus: Vec<ComparisonCase>) -> Self {
        Self::with_strategies(corpus, Strategy::all())
    }

    /// Harness over the built-in corpus.
    pub fn builtin() -> Self {
        Self::new(default_corpus())
    }

    /// Harness over `corpus` with the given strategies, in column order.
    pub fn with_strategies(corpus: Vec<ComparisonCase>, strategies: Vec<Strategy>) -> Self {
        Self {
            engines: strategies.into_iter().map(MatchEngine::new).collect(),
            corpus,
        }
    }

    /// The cases this harness runs.
    pub fn corpus(&self) -> &[ComparisonCase] {
        &self.corpus
    }

    /// Runs every case under every strategy.
    pub fn run(&self) -> HarnessReport {
        #[cfg(feature = "parallel")]
        let per_case: Vec<Vec<CaseOutcome>> = {
            use rayon::prelude::*;
            self.corpus.par_iter().map(|case| self.run_case(case)).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let per_case: Vec<Vec<CaseOutcome>> =
            self.corpus.iter().map(|case| self.run_case(case)).collect();

        let report = HarnessReport {
            generated_at: Utc::now(),
            strategies: self.engines.iter().map(|e| e.strategy().kind()).collect(),
            outcomes: per_case.into_iter().flatten().collect(),
        };

        for outcome in report.mismatches() {
            tracing::warn!(
                strategy = %outcome.result.strategy,
                stored = %outcome.result.stored,
                query = %outcome.result.query,
                expected = outcome.expected,
                observed = outcome.result.matched,
                "Unexpected match result"
            );
        }

        tracing::info!(
            cases = self.corpus.len(),
            strategies = self.engines.len(),
            passed = report.passed(),
            failed = report.failed(),
            "Comparison harness finished"
        );

        report
    }

    fn run_case(&self, case: &ComparisonCase) -> Vec<CaseOutcome> {
        self.engines
            .iter()
            .map(|engine| {
                let result = engine.evaluate(&case.stored, &case.query);
                CaseOutcome {
                    expected: case.expected.for_kind(result.strategy),
                    result,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_corpus_passes() {
        let report = ComparisonHarness::builtin().run();
        let failures: Vec<_> = report
            .mismatches()
            .map(|o| format!("{} {:?} vs {:?}", o.result.strategy, o.result.stored, o.result.query))
            .collect();
        assert!(failures.is_empty(), "{failures:#?}");
        assert!(report.is_success());
        assert_eq!(report.outcomes.len(), default_corpus().len() * 3);
    }

    #[test]
    fn test_outcomes_in_corpus_order() {
        let report = ComparisonHarness::builtin().run();
        let corpus = default_corpus();

        assert_eq!(report.strategies, StrategyKind::ALL.to_vec());
        for (row, case) in report.rows().zip(&corpus) {
            assert_eq!(row.len(), 3);
            for (outcome, kind) in row.iter().zip(StrategyKind::ALL) {
                assert_eq!(outcome.result.strategy, kind);
                assert_eq!(outcome.result.stored, case.stored);
                assert_eq!(outcome.result.query, case.query);
            }
        }
    }

    #[test]
    fn test_strategies_disagree_on_jose() {
        let report = ComparisonHarness::new(vec![ComparisonCase::new(
            "José",
            "jose",
            Expected::FOLDING,
        )])
        .run();
        let observed: Vec<bool> = report.results().map(|r| r.matched).collect();
        assert_eq!(observed, vec![false, true, true]);
    }

    #[test]
    fn test_wrong_expectation_reported() {
        let harness = ComparisonHarness::new(vec![ComparisonCase::new("ºC", "oc", Expected::ALL)]);
        let report = harness.run();

        assert!(!report.is_success());
        assert_eq!(report.failed(), 2);
        let kinds: Vec<_> = report.mismatches().map(|o| o.result.strategy).collect();
        assert_eq!(kinds, vec![StrategyKind::Minimal, StrategyKind::AccentMap]);
    }

    #[test]
    fn test_subset_of_strategies() {
        let harness = ComparisonHarness::with_strategies(
            default_corpus(),
            vec![Strategy::accent_map()],
        );
        let report = harness.run();
        assert_eq!(report.strategies, vec![StrategyKind::AccentMap]);
        assert_eq!(report.outcomes.len(), harness.corpus().len());
        assert!(report.is_success());
    }

    #[test]
    fn test_empty_corpus() {
        let report = ComparisonHarness::new(Vec::new()).run();
        assert!(report.is_success());
        assert_eq!(report.passed(), 0);
        assert_eq!(report.rows().count(), 0);
    }

    #[test]
    fn test_report_serializes() {
        let report = ComparisonHarness::new(vec![ComparisonCase::new("m²", "m2", Expected::COLLATION_ONLY)]).run();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["strategies"][1], "accent_map");
        assert_eq!(json["outcomes"][2]["result"]["matched"], true);
        assert_eq!(json["outcomes"][0]["result"]["stored"], "m²");
    }
}
