pub mod atomic;
pub mod text;

pub use atomic::AtomicCursor;
pub use text::StrCursor;
