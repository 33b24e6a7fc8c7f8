pub mod entry_detail;
pub mod entry_list;
pub mod new_entry;

pub use entry_detail::EntryDetailPage;
pub use entry_list::EntryListPage;
pub use new_entry::NewEntryPage;
