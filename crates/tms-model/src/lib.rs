pub mod term;

pub use term::{NO_PARENT, Taxonomy, TermRow};
