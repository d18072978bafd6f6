pub mod library;

pub use library::LibraryPage;
