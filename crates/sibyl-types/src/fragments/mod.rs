mod current_date;
mod static_fragment;
mod transcript;

pub use current_date::CurrentDateFragment;
pub use static_fragment::StaticFragment;
pub use transcript::TranscriptFragment;
