//! Persistence of classification decisions.

mod ledger;

pub use ledger::{EvidenceLedger, EvidenceRecord, EvidenceSink};
