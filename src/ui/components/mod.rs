pub mod entry_card;
pub mod tax_line;
pub mod toast;
