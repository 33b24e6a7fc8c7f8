//! Entries, their tax estimate and the persisted collection.

pub mod entry;
pub mod store;
pub mod tax;

#[allow(unused_imports)]
pub use entry::{parse_amount, Entry, EntryDraft};
#[allow(unused_imports)]
pub use store::{EntryStore, StoreError, ENTRIES_KEY};
#[allow(unused_imports)]
pub use tax::{estimate_taxes, TaxBreakdown};
