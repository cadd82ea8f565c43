use std::process::ExitCode;

use aead_conformance::{provider::AeadProvider, registry, Runner, RunnerOptions, TamperCoverage};
use clap::{Parser, ValueEnum};

fn main() -> ExitCode {
    let Args {
        provider,
        tamper,
        skip_idempotence,
        log_level,
    } = Args::parse();

    if let Some(log_level) = log_level {
        println!("- Using log level {}", log_level);
        simple_logger::init_with_level(log_level).unwrap();
    }

    let options = RunnerOptions {
        tamper: tamper.into(),
        check_idempotence: !skip_idempotence,
    };
    let provider = provider.instantiate();
    println!("- Checking provider {} with {:?}", provider.name(), options);

    let report = Runner::with_options(provider.as_ref(), options).run(registry::global());
    println!("{report:#}");

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(value_enum, short, long, default_value_t = ArgProvider::Default)]
    provider: ArgProvider,

    #[arg(value_enum, short, long, default_value_t = ArgTamperCoverage::SingleBit)]
    tamper: ArgTamperCoverage,

    #[arg(long)]
    skip_idempotence: bool,

    #[arg(short, long)]
    log_level: Option<log::Level>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ArgProvider {
    Default,
    #[cfg(feature = "rust-crypto")]
    RustCrypto,
    #[cfg(feature = "ring")]
    Ring,
    #[cfg(feature = "openssl")]
    Openssl,
}

impl ArgProvider {
    fn instantiate(self) -> Box<dyn AeadProvider> {
        match self {
            ArgProvider::Default => Box::<aead_conformance::DefaultProvider>::default(),
            #[cfg(feature = "rust-crypto")]
            ArgProvider::RustCrypto => {
                Box::new(aead_conformance::provider::rust_crypto::RustCryptoProvider)
            }
            #[cfg(feature = "ring")]
            ArgProvider::Ring => Box::new(aead_conformance::provider::ring::RingProvider),
            #[cfg(feature = "openssl")]
            ArgProvider::Openssl => Box::new(aead_conformance::provider::openssl::OpensslProvider),
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ArgTamperCoverage {
    Off,
    SingleBit,
    EveryBit,
}

impl From<ArgTamperCoverage> for TamperCoverage {
    fn from(val: ArgTamperCoverage) -> Self {
        match val {
            ArgTamperCoverage::Off => TamperCoverage::Off,
            ArgTamperCoverage::SingleBit => TamperCoverage::SingleBit,
            ArgTamperCoverage::EveryBit => TamperCoverage::EveryBit,
        }
    }
}
