//! Text serialization for jdoc documents.
//!
//! The store never formats text itself; it goes through a [`DocumentCodec`].
//! [`JsonCodec`] is the canonical encoding: pretty-printed JSON with a
//! two-space indent and keys in the order the document holds them.

pub mod codec;
pub mod error;

pub use codec::{DocumentCodec, JsonCodec};
pub use error::{CodecError, CodecResult};
