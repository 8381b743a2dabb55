//! Text transforms applied to every line before it is hashed.

pub mod case;
pub mod policy;
pub mod transform;

pub use case::fold_case;
pub use policy::{NonAlphaNumPolicy, WhitespacePolicy};
pub use transform::{compress_whitespace, is_alphanumeric, normalize, Transform};
