mod part;

pub use part::*;
