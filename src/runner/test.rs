use std::cell::Cell;

use pretty_assertions::assert_eq;
use test_case::test_case;

use super::{Phase, Runner, RunnerOptions, TamperCoverage, TamperTarget};
use crate::{
    algorithm::AeadAlgorithm,
    error::{Buffer, Failure, Mismatch, ProviderError, VectorShapeError},
    provider::{self, AeadContext, AeadDecrypt, AeadEncrypt, AeadProvider, DefaultProvider},
    registry::Registry,
    vector::TestVector,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Fault {
    Honest,
    /// the first tag byte of every encryption is inverted
    CorruptTag,
    /// the first ciphertext byte of every non-empty encryption is inverted
    CorruptCiphertext,
    /// decryption never verifies the tag
    IgnoreTag,
    /// every decryption fails authentication
    RejectAll,
    /// every second encryption yields another tag
    Nondeterministic,
    /// only AES-128-GCM is implemented
    Aes128Only,
}

/// Wraps the default provider and injects a [`Fault`], counting the calls made into it.
struct FaultyProvider {
    inner: DefaultProvider,
    fault: Fault,
    encryptions: Cell<usize>,
    decryptions: Cell<usize>,
}

impl From<Fault> for FaultyProvider {
    fn from(fault: Fault) -> Self {
        Self {
            inner: DefaultProvider::default(),
            fault,
            encryptions: Cell::new(0),
            decryptions: Cell::new(0),
        }
    }
}

impl FaultyProvider {
    fn check_algorithm(&self, ctx: &AeadContext) -> provider::Result<()> {
        if self.fault == Fault::Aes128Only && ctx.algorithm != AeadAlgorithm::Aes128Gcm {
            return Err(ProviderError::UnsupportedAlgorithm(ctx.algorithm));
        }
        Ok(())
    }
}

impl AeadEncrypt for FaultyProvider {
    fn encrypt(&self, ctx: &AeadContext, io_buffer: &mut [u8]) -> provider::Result<Vec<u8>> {
        self.encryptions.set(self.encryptions.get() + 1);
        self.check_algorithm(ctx)?;

        let mut tag = self.inner.encrypt(ctx, io_buffer)?;
        if self.fault == Fault::CorruptCiphertext {
            if let Some(first) = io_buffer.first_mut() {
                *first = !*first;
            }
        }

        let corrupt = match self.fault {
            Fault::CorruptTag => true,
            Fault::Nondeterministic => self.encryptions.get() % 2 == 0,
            _ => false,
        };
        if corrupt {
            tag[0] = !tag[0];
        }

        Ok(tag)
    }
}

impl AeadDecrypt for FaultyProvider {
    fn decrypt(&self, ctx: &AeadContext, io_buffer: &mut [u8], tag: &[u8]) -> provider::Result<()> {
        self.decryptions.set(self.decryptions.get() + 1);
        self.check_algorithm(ctx)?;

        match self.fault {
            // GCM applies the same key stream in both directions
            Fault::IgnoreTag => self.inner.encrypt(ctx, io_buffer).map(|_| ()),
            Fault::RejectAll => Err(ProviderError::AuthenticationFailed),
            _ => self.inner.decrypt(ctx, io_buffer, tag),
        }
    }
}

impl AeadProvider for FaultyProvider {
    fn name(&self) -> &str {
        "faulty"
    }
}

fn every_bit() -> RunnerOptions {
    RunnerOptions {
        tamper: TamperCoverage::EveryBit,
        ..Default::default()
    }
}

#[test]
fn default_provider_passes_gcm_spec() {
    let registry = Registry::with_gcm_spec();
    let report = Runner::with_options(&DefaultProvider::default(), every_bit()).run(&registry);

    assert!(report.is_success(), "{report:#}");
    assert_eq!(report.total(), 12);
    assert_eq!(report.passed(), 12);
    assert_eq!(report.failed(), 0);
    assert_eq!(report.failures().count(), 0);
}

#[test]
fn runs_every_phase_of_a_full_vector() {
    let registry = Registry::with_gcm_spec();
    let case = Runner::new(&DefaultProvider::default())
        .run(&registry)
        .case("128-GCM Spec. TC6")
        .cloned()
        .unwrap();

    let phases: Vec<_> = case.results().iter().map(|result| result.phase).collect();
    assert_eq!(
        phases,
        [
            Phase::Encrypt,
            Phase::Decrypt,
            Phase::Idempotence,
            Phase::Tamper(TamperTarget::Tag),
            Phase::Tamper(TamperTarget::Ciphertext),
            Phase::Tamper(TamperTarget::AssociatedData),
        ]
    );
    assert!(case.passed());
}

#[test]
fn tag_only_vector_exercises_both_directions() {
    let registry = Registry::with_gcm_spec();
    let vector = registry
        .iter()
        .find(|v| v.name() == "128-GCM Spec. TC1")
        .unwrap();
    let provider = FaultyProvider::from(Fault::Honest);

    let case = Runner::new(&provider).run_vector(vector);

    assert!(case.passed(), "{case}");
    assert!(case.result(Phase::Encrypt).unwrap().passed());
    assert!(case.result(Phase::Decrypt).unwrap().passed());
    // nothing to flip in the empty ciphertext and AAD
    assert!(case.result(Phase::Tamper(TamperTarget::Tag)).is_some());
    for target in [TamperTarget::Ciphertext, TamperTarget::AssociatedData] {
        assert!(case.result(Phase::Tamper(target)).is_none());
    }
    assert_eq!(provider.encryptions.get(), 2);
    assert_eq!(provider.decryptions.get(), 2);
}

#[test]
fn malformed_vector_is_not_handed_to_provider() {
    let vector = TestVector::builder("short key", AeadAlgorithm::Aes256Gcm)
        .key([0u8; 16])
        .iv([0u8; 12])
        .tag([0u8; 16])
        .build();
    let provider = FaultyProvider::from(Fault::Honest);

    let case = Runner::new(&provider).run_vector(&vector);

    assert_eq!(case.results().len(), 1);
    assert_eq!(case.results()[0].phase, Phase::Shape);
    assert_eq!(
        case.results()[0].failure(),
        Some(&Failure::Shape(VectorShapeError::KeyLength {
            expected: 32,
            actual: 16
        }))
    );
    assert_eq!(provider.encryptions.get(), 0);
    assert_eq!(provider.decryptions.get(), 0);
}

#[test]
fn reports_corrupted_tag() {
    let provider = FaultyProvider::from(Fault::CorruptTag);
    let report = Runner::new(&provider).run(&Registry::with_gcm_spec());

    assert_eq!(report.failed(), 12);
    for case in report.cases() {
        assert_eq!(
            case.result(Phase::Encrypt).unwrap().failure(),
            Some(&Failure::Mismatch(Mismatch {
                buffer: Buffer::Tag,
                offset: 0,
                expected_len: 16,
                actual_len: 16,
            })),
            "{case}"
        );
        assert!(case.result(Phase::Decrypt).unwrap().passed(), "{case}");
        assert!(case.result(Phase::Idempotence).unwrap().passed(), "{case}");
    }
}

#[test]
fn reports_corrupted_ciphertext() {
    let provider = FaultyProvider::from(Fault::CorruptCiphertext);
    let report = Runner::new(&provider).run(&Registry::with_gcm_spec());

    // TC1 has no ciphertext to corrupt
    assert_eq!(report.failed(), 10);
    for name in ["128-GCM Spec. TC1", "256-GCM Spec. TC1"] {
        assert!(report.case(name).unwrap().passed());
    }

    let case = report.case("128-GCM Spec. TC4").unwrap();
    assert_eq!(
        case.result(Phase::Encrypt).unwrap().failure(),
        Some(&Failure::Mismatch(Mismatch {
            buffer: Buffer::Ciphertext,
            offset: 0,
            expected_len: 60,
            actual_len: 60,
        }))
    );
    assert!(case.result(Phase::Decrypt).unwrap().passed(), "{case}");
    assert!(case.result(Phase::Idempotence).unwrap().passed(), "{case}");
}

#[test]
fn reports_plaintext_not_matching_recorded_ciphertext() {
    let registry = Registry::with_gcm_spec();
    let recorded = registry
        .iter()
        .find(|v| v.name() == "128-GCM Spec. TC4")
        .unwrap();
    let mut plaintext = recorded.plaintext().to_vec();
    plaintext[5] ^= 0x01;
    let vector = TestVector::builder("altered plaintext", recorded.algorithm())
        .key(recorded.key())
        .iv(recorded.iv())
        .aad(recorded.aad())
        .plaintext(plaintext)
        .ciphertext(recorded.ciphertext())
        .tag(recorded.tag())
        .build();

    let case = Runner::new(&DefaultProvider::default()).run_vector(&vector);

    assert_eq!(
        case.result(Phase::Encrypt).unwrap().failure(),
        Some(&Failure::Mismatch(Mismatch {
            buffer: Buffer::Ciphertext,
            offset: 5,
            expected_len: 60,
            actual_len: 60,
        }))
    );
    assert_eq!(
        case.result(Phase::Decrypt).unwrap().failure(),
        Some(&Failure::Mismatch(Mismatch {
            buffer: Buffer::Plaintext,
            offset: 5,
            expected_len: 60,
            actual_len: 60,
        }))
    );
    assert_eq!(
        case.result(Phase::Decrypt).unwrap().to_string(),
        "altered plaintext [decrypt]: plaintext mismatch at byte 5 (expected 60 bytes, got 60)"
    );
    // the recorded ciphertext and tag still authenticate
    let tampered_tag = case.result(Phase::Tamper(TamperTarget::Tag)).unwrap();
    assert!(tampered_tag.passed());
}

#[test_case(TamperCoverage::SingleBit; "single bit")]
#[test_case(TamperCoverage::EveryBit; "every bit")]
fn reports_accepted_tampering(tamper: TamperCoverage) {
    let provider = FaultyProvider::from(Fault::IgnoreTag);
    let options = RunnerOptions {
        tamper,
        ..Default::default()
    };
    let report = Runner::with_options(&provider, options).run(&Registry::with_gcm_spec());

    assert_eq!(report.failed(), 12);
    for case in report.cases() {
        assert!(case.result(Phase::Encrypt).unwrap().passed(), "{case}");
        assert!(case.result(Phase::Decrypt).unwrap().passed(), "{case}");
        assert_eq!(
            case.result(Phase::Tamper(TamperTarget::Tag))
                .unwrap()
                .failure(),
            Some(&Failure::TamperAccepted {
                target: TamperTarget::Tag,
                bit: 0
            }),
            "{case}"
        );
    }
}

#[test]
fn reports_rejected_valid_vectors() {
    let provider = FaultyProvider::from(Fault::RejectAll);
    let report = Runner::new(&provider).run(&Registry::with_gcm_spec());

    assert!(!report.is_success());
    for case in report.cases() {
        assert_eq!(
            case.result(Phase::Decrypt).unwrap().failure(),
            Some(&Failure::AuthenticationRejected)
        );
        let tampered_tag = case.result(Phase::Tamper(TamperTarget::Tag)).unwrap();
        assert!(tampered_tag.passed());
    }
}

#[test]
fn reports_nondeterministic_encryption() {
    let provider = FaultyProvider::from(Fault::Nondeterministic);
    let registry = Registry::with_gcm_spec();

    let case = Runner::new(&provider).run_vector(&registry.all()[0]);

    assert!(case.result(Phase::Encrypt).unwrap().passed());
    assert!(matches!(
        case.result(Phase::Idempotence).unwrap().failure(),
        Some(Failure::Mismatch(Mismatch {
            buffer: Buffer::Tag,
            ..
        }))
    ));
}

#[test]
fn skips_idempotence_and_tampering_if_disabled() {
    let options = RunnerOptions {
        tamper: TamperCoverage::Off,
        check_idempotence: false,
    };
    let registry = Registry::with_gcm_spec();
    let provider = FaultyProvider::from(Fault::Honest);

    let report = Runner::with_options(&provider, options).run(&registry);

    assert!(report.is_success());
    for case in report.cases() {
        assert_eq!(case.results().len(), 2);
    }
    assert_eq!(provider.encryptions.get(), 12);
    assert_eq!(provider.decryptions.get(), 12);
}

#[test]
fn provider_errors_do_not_abort_the_run() {
    let provider = FaultyProvider::from(Fault::Aes128Only);
    let report = Runner::new(&provider).run(&Registry::with_gcm_spec());

    assert_eq!(report.total(), 12);
    assert_eq!(report.passed(), 6);
    assert_eq!(report.failed(), 6);

    let unsupported = Failure::Provider(ProviderError::UnsupportedAlgorithm(
        AeadAlgorithm::Aes256Gcm,
    ));
    for case in report.cases() {
        if case.algorithm() == AeadAlgorithm::Aes128Gcm {
            assert!(case.passed(), "{case}");
        } else {
            for result in case.failures() {
                assert_eq!(result.failure(), Some(&unsupported));
            }
            assert!(case.result(Phase::Idempotence).is_none());
        }
    }
}

#[test]
fn runs_dyn_provider() {
    let provider: Box<dyn AeadProvider> = Box::new(DefaultProvider::default());
    let report = Runner::new(provider.as_ref()).run(&Registry::with_gcm_spec());

    assert!(report.is_success(), "{report:#}");
}

#[test]
fn summarizes_report() {
    let provider = FaultyProvider::from(Fault::Aes128Only);
    let report = Runner::new(&provider).run(&Registry::with_gcm_spec());

    assert_eq!(report.to_string(), "faulty: 6/12 passed, 6 failed");

    let details = format!("{report:#}");
    assert!(details.contains("[PASS] 128-GCM Spec. TC6 (AES-128-GCM)"));
    assert!(details.contains("[FAIL] 256-GCM Spec. TC1 (AES-256-GCM)"));
    let unsupported = "encrypt: provider error: AES-256-GCM is not supported by this provider";
    assert!(details.contains(unsupported));
}
