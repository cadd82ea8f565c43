use std::fmt;

use crate::{algorithm::AeadAlgorithm, error::Failure, vector::TestVector};

/// Input of decrypt-and-verify which is altered to synthesize a negative case
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, strum_macros::Display)]
pub enum TamperTarget {
    #[strum(serialize = "tag")]
    Tag,
    #[strum(serialize = "ciphertext")]
    Ciphertext,
    #[strum(serialize = "associated data")]
    AssociatedData,
}

impl TamperTarget {
    pub const ALL: [TamperTarget; 3] = [
        TamperTarget::Tag,
        TamperTarget::Ciphertext,
        TamperTarget::AssociatedData,
    ];
}

/// A single step in the evaluation of a vector
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Phase {
    /// invariants of the vector, checked before the provider is invoked
    Shape,
    Encrypt,
    /// decrypt-and-verify
    Decrypt,
    /// a second encryption yields the same output as the first,
    /// only evaluated if the [`Phase::Encrypt`] call succeeded
    Idempotence,
    /// decrypt-and-verify rejects the vector with a flipped bit in the target
    Tamper(TamperTarget),
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Shape => f.write_str("shape"),
            Phase::Encrypt => f.write_str("encrypt"),
            Phase::Decrypt => f.write_str("decrypt"),
            Phase::Idempotence => f.write_str("idempotence"),
            Phase::Tamper(target) => write!(f, "tamper {target}"),
        }
    }
}

/// Outcome of one phase of one vector
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunResult {
    pub case: String,
    pub phase: Phase,
    pub outcome: Result<(), Failure>,
}

impl RunResult {
    pub fn passed(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.outcome.as_ref().err()
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(()) => write!(f, "{} [{}]: ok", self.case, self.phase),
            Err(failure) => write!(f, "{} [{}]: {failure}", self.case, self.phase),
        }
    }
}

/// Every phase evaluated for a single vector
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaseReport {
    name: String,
    algorithm: AeadAlgorithm,
    results: Vec<RunResult>,
}

impl CaseReport {
    pub(crate) fn new(vector: &TestVector) -> Self {
        Self {
            name: vector.name().to_owned(),
            algorithm: vector.algorithm(),
            results: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, phase: Phase, outcome: Result<(), Failure>) {
        if let Err(failure) = &outcome {
            log::debug!("'{}' failed in phase {phase}: {failure}", self.name);
        }
        self.results.push(RunResult {
            case: self.name.clone(),
            phase,
            outcome,
        });
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn algorithm(&self) -> AeadAlgorithm {
        self.algorithm
    }

    pub fn results(&self) -> &[RunResult] {
        &self.results
    }

    /// the outcome of `phase`, if it was evaluated
    pub fn result(&self, phase: Phase) -> Option<&RunResult> {
        self.results.iter().find(|result| result.phase == phase)
    }

    /// A case passes if every evaluated phase passed.
    pub fn passed(&self) -> bool {
        self.results.iter().all(RunResult::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &RunResult> {
        self.results.iter().filter(|result| !result.passed())
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.passed() { "PASS" } else { "FAIL" };
        write!(f, "[{verdict}] {} ({})", self.name, self.algorithm)?;
        for result in &self.results {
            if let Err(failure) = &result.outcome {
                write!(f, "\n    {}: {failure}", result.phase)?;
            }
        }
        Ok(())
    }
}

/// Aggregated outcome of a run over a registry
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    provider: String,
    cases: Vec<CaseReport>,
}

impl RunReport {
    pub(crate) fn new(provider: &str, cases: Vec<CaseReport>) -> Self {
        Self {
            provider: provider.to_owned(),
            cases,
        }
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// case reports in registration order
    pub fn cases(&self) -> &[CaseReport] {
        &self.cases
    }

    pub fn case(&self, name: &str) -> Option<&CaseReport> {
        self.cases.iter().find(|case| case.name() == name)
    }

    pub fn total(&self) -> usize {
        self.cases.len()
    }

    pub fn passed(&self) -> usize {
        self.cases.iter().filter(|case| case.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// A run succeeds if every vector passed every phase.
    pub fn is_success(&self) -> bool {
        self.cases.iter().all(CaseReport::passed)
    }

    /// every failed phase of every case
    pub fn failures(&self) -> impl Iterator<Item = &RunResult> {
        self.cases.iter().flat_map(CaseReport::failures)
    }
}

/// The summary line, the alternate form (`{:#}`) additionally lists every case.
impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}/{} passed, {} failed",
            self.provider,
            self.passed(),
            self.total(),
            self.failed()
        )?;

        if f.alternate() {
            for case in &self.cases {
                write!(f, "\n  {case}")?;
            }
        }

        Ok(())
    }
}
