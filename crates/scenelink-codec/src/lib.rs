//! Reference codec for carrying scene objects inside structured documents.
//!
//! The `scenelink-codec` crate converts between live scene objects and the
//! compact reference fragments that cross the command boundary. A reference
//! fragment is an ordered sequence of identifiers sufficient to re-locate the
//! object in the host's registry; it is lossless with respect to *identity*,
//! never content. Decoding resolves those identifiers back into live borrows
//! through the narrow [`lookup`] contract and never fabricates an object.
//!
//! Three fragment shapes are supported, each labelled with a diagnostic tag:
//!
//! - `!ObjectRef [container_id, object_name]`
//! - `!MemberRef [container_id, object_name, member_name]`
//! - `!Transform4x4` — a 4×4 row-major homogeneous matrix as a sequence of
//!   four sequences of four numbers.
//!
//! Decoded references are plain borrows scoped to the directory reference
//! passed to the decoder, so the borrow checker guarantees a handle cannot
//! outlive the command invocation that resolved it.

pub mod convert;
pub mod error;
pub mod lookup;
pub mod transform;

#[cfg(any(test, feature = "test-support"))]
pub mod scene;

pub use self::convert::{
    Decoded, ReferenceKind, ResolvedMember, decode, decode_member, decode_object,
    decode_transform, encode_member, encode_object, encode_transform,
};
pub use self::error::CodecError;
pub use self::lookup::{Container, ContainerId, Directory, MemberOf, MemberView, ObjectOf, ObjectView};
pub use self::transform::Transform;
