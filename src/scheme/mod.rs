//! RLWE primitive boundary.
//!
//! [`RlwePrimitive`] is the capability contract the sweep depends on;
//! [`TextbookRlwe`] is the bundled implementation.

pub mod errors;
pub mod keys;
pub mod params;
pub mod textbook;
pub mod traits;

pub use errors::{PrimitiveError, PrimitiveResult};
pub use keys::{PublicKey, SecretKey};
pub use params::ParameterSet;
pub use textbook::{Ciphertext, TextbookRlwe};
pub use traits::{KeyPair, RlwePrimitive};
