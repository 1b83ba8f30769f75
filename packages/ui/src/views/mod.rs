mod confirm_modal;
pub use confirm_modal::ConfirmModal;

mod empty_state;
pub use empty_state::EmptyState;

mod entry_card;
pub use entry_card::EntryCard;

mod form_message;
pub use form_message::FormMessage;
