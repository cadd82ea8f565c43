//! Drives registered vectors through an [`AeadProvider`] and collects the outcomes.
//!
//! Every vector is evaluated in phases: its invariants are checked first ([`Phase::Shape`]), then the provider
//! encrypts ([`Phase::Encrypt`]) and decrypts-and-verifies ([`Phase::Decrypt`]) the recorded values. Optionally the
//! encryption is repeated ([`Phase::Idempotence`]) and negative cases are synthesized by flipping bits in the tag,
//! the ciphertext and the associated data ([`Phase::Tamper`]).
//!
//! A failing phase never aborts the run, all outcomes end up in the [`RunReport`].

mod report;
mod tamper;

pub use report::{CaseReport, Phase, RunReport, RunResult, TamperTarget};

use crate::{
    error::{Buffer, Failure, Mismatch, ProviderError},
    provider::{AeadProvider, Sealed},
    registry::Registry,
    vector::TestVector,
};
use tamper::TamperedInput;

/// How many negative cases are synthesized per vector and tamper target
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TamperCoverage {
    /// no tamper phases
    Off,
    /// flip the lowest bit of the first byte
    #[default]
    SingleBit,
    /// flip every bit of the target, one at a time
    EveryBit,
}

/// options for the runner,
/// allows to create a [Runner] using [`Runner::with_options`]
#[derive(Clone, Copy, Debug)]
pub struct RunnerOptions {
    /// coverage of the synthesized tamper cases
    ///
    /// default: [`TamperCoverage::SingleBit`]
    pub tamper: TamperCoverage,
    /// whether every vector is encrypted a second time, expecting the identical output
    ///
    /// default: `true`
    pub check_idempotence: bool,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self {
            tamper: TamperCoverage::default(),
            check_idempotence: true,
        }
    }
}

/// Checks a provider against known-answer vectors.
/// Vectors are evaluated sequentially and independently of each other.
pub struct Runner<'p, P>
where
    P: AeadProvider + ?Sized,
{
    provider: &'p P,
    options: RunnerOptions,
}

impl<'p, P> Runner<'p, P>
where
    P: AeadProvider + ?Sized,
{
    /// creates a runner with the default [`RunnerOptions`]
    pub fn new(provider: &'p P) -> Self {
        Self::with_options(provider, RunnerOptions::default())
    }

    pub fn with_options(provider: &'p P, options: RunnerOptions) -> Self {
        log::debug!(
            "Setting up conformance runner for provider {}",
            provider.name()
        );
        log::trace!("Runner options {options:?}");
        Self { provider, options }
    }

    pub fn options(&self) -> &RunnerOptions {
        &self.options
    }

    /// Evaluates every vector of the registry in registration order.
    pub fn run(&self, registry: &Registry) -> RunReport {
        let cases = registry
            .iter()
            .map(|vector| self.run_vector(vector))
            .collect();
        let report = RunReport::new(self.provider.name(), cases);

        if report.is_success() {
            log::info!("{report}");
        } else {
            log::warn!("{report}");
        }

        report
    }

    /// Evaluates every phase of a single vector.
    pub fn run_vector(&self, vector: &TestVector) -> CaseReport {
        log::trace!("Running '{}' ({})", vector.name(), vector.algorithm());
        let mut case = CaseReport::new(vector);

        if let Err(err) = vector.validate() {
            case.record(Phase::Shape, Err(err.into()));
            return case;
        }

        let sealed = self.encrypt(vector);
        case.record(Phase::Encrypt, check_sealed(vector, &sealed));
        case.record(Phase::Decrypt, self.check_decrypt(vector));

        if self.options.check_idempotence {
            // a failed first encryption is already reported
            if let Ok(first) = &sealed {
                case.record(Phase::Idempotence, self.check_idempotence(vector, first));
            }
        }

        for target in TamperTarget::ALL {
            if let Some(outcome) = self.check_tamper(vector, target) {
                case.record(Phase::Tamper(target), outcome);
            }
        }

        if !case.passed() {
            log::warn!("{case}");
        }

        case
    }

    fn encrypt(&self, vector: &TestVector) -> Result<Sealed, ProviderError> {
        self.provider.aead_encrypt(
            vector.algorithm(),
            vector.key(),
            vector.iv(),
            vector.aad(),
            vector.plaintext(),
        )
    }

    fn check_decrypt(&self, vector: &TestVector) -> Result<(), Failure> {
        let plaintext = self.provider.aead_decrypt_verify(
            vector.algorithm(),
            vector.key(),
            vector.iv(),
            vector.aad(),
            vector.ciphertext(),
            vector.tag(),
        )?;

        compare(Buffer::Plaintext, vector.plaintext(), &plaintext)
    }

    fn check_idempotence(&self, vector: &TestVector, first: &Sealed) -> Result<(), Failure> {
        let second = self.encrypt(vector).map_err(Failure::Provider)?;

        compare(Buffer::Ciphertext, &first.ciphertext, &second.ciphertext)?;
        compare(Buffer::Tag, &first.tag, &second.tag)
    }

    /// `None` if there is nothing to tamper with
    fn check_tamper(
        &self,
        vector: &TestVector,
        target: TamperTarget,
    ) -> Option<Result<(), Failure>> {
        let bits = self.options.tamper.bits(target.select(vector).len());
        if bits.is_empty() {
            return None;
        }

        log::trace!(
            "Flipping {} bits of the {target} of '{}'",
            bits.len(),
            vector.name()
        );
        for bit in bits {
            let input = TamperedInput::new(vector, target, bit);
            let outcome = self.provider.aead_decrypt_verify(
                vector.algorithm(),
                vector.key(),
                vector.iv(),
                &input.aad,
                &input.ciphertext,
                &input.tag,
            );

            match outcome {
                Err(ProviderError::AuthenticationFailed) => {}
                Err(err) => return Some(Err(Failure::Provider(err))),
                Ok(_) => return Some(Err(Failure::TamperAccepted { target, bit })),
            }
        }

        Some(Ok(()))
    }
}

fn check_sealed(
    vector: &TestVector,
    sealed: &Result<Sealed, ProviderError>,
) -> Result<(), Failure> {
    let sealed = sealed
        .as_ref()
        .map_err(|err| Failure::Provider(err.clone()))?;

    compare(Buffer::Ciphertext, vector.ciphertext(), &sealed.ciphertext)?;
    compare(Buffer::Tag, vector.tag(), &sealed.tag)
}

fn compare(buffer: Buffer, expected: &[u8], actual: &[u8]) -> Result<(), Failure> {
    match Mismatch::between(buffer, expected, actual) {
        Some(mismatch) => Err(mismatch.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod test;
