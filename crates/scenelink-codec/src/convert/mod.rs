//! Encoders and decoders for reference fragments.
//!
//! Encoding always succeeds for a live object and produces a tagged, ordered
//! sequence of identifiers. Decoding validates the fragment shape first and
//! only then walks the [`lookup`](crate::lookup) contract, so a malformed
//! fragment never touches the directory. Decode is a pure function of the
//! fragment and the directory's current state: no caching, and no partial
//! result on failure.

use std::fmt;

use serde_yaml::Value;
use serde_yaml::value::{Tag, TaggedValue};

use crate::error::CodecError;
use crate::lookup::{Container, ContainerId, Directory, MemberOf, MemberView, ObjectOf, ObjectView};
use crate::transform::Transform;

/// Expected wire shape of an object reference, for diagnostics.
const OBJECT_SHAPE: &str = "[container_id, object_name]";

/// Expected wire shape of a member reference, for diagnostics.
const MEMBER_SHAPE: &str = "[container_id, object_name, member_name]";

/// Expected wire shape of a transform, for diagnostics.
const TRANSFORM_SHAPE: &str = "a 4x4 row-major matrix";

/// The reference fragment kinds understood by the codec.
///
/// # Example
///
/// ```
/// use scenelink_codec::ReferenceKind;
///
/// assert_eq!(ReferenceKind::Object.tag(), "ObjectRef");
/// assert_eq!(ReferenceKind::Transform.tag(), "Transform4x4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// A reference to an object: `[container_id, object_name]`.
    Object,
    /// A reference to a named member: `[container_id, object_name, member_name]`.
    Member,
    /// A 4×4 row-major homogeneous transform.
    Transform,
}

impl ReferenceKind {
    /// Returns the tag applied to fragments of this kind.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Object => "ObjectRef",
            Self::Member => "MemberRef",
            Self::Transform => "Transform4x4",
        }
    }

    /// Matches a document tag against the known reference kinds.
    #[must_use]
    pub fn from_tag(tag: &Tag) -> Option<Self> {
        [Self::Object, Self::Member, Self::Transform]
            .into_iter()
            .find(|kind| *tag == kind.tag())
    }
}

/// A member reference resolved to live borrows of its owner and itself.
///
/// Both borrows are scoped to the directory reference passed to
/// [`decode_member`], so neither can be retained past the invocation that
/// resolved them.
pub struct ResolvedMember<'a, D: Directory> {
    object: &'a ObjectOf<D>,
    member: &'a MemberOf<D>,
}

impl<'a, D: Directory> ResolvedMember<'a, D> {
    /// Returns the owning object.
    #[must_use]
    pub const fn object(&self) -> &'a ObjectOf<D> {
        self.object
    }

    /// Returns the resolved member.
    #[must_use]
    pub const fn member(&self) -> &'a MemberOf<D> {
        self.member
    }
}

impl<D: Directory> Clone for ResolvedMember<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Directory> Copy for ResolvedMember<'_, D> {}

// Manual impl: deriving would demand `D: Debug`, which the lookup traits do
// not guarantee. The resolved names identify the borrows well enough.
impl<D: Directory> fmt::Debug for ResolvedMember<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedMember")
            .field("object", &self.object.name())
            .field("member", &self.member.name())
            .finish()
    }
}

/// Result of tag-dispatched decoding via [`decode`].
pub enum Decoded<'a, D: Directory> {
    /// The fragment was an `ObjectRef`.
    Object(&'a ObjectOf<D>),
    /// The fragment was a `MemberRef`.
    Member(ResolvedMember<'a, D>),
    /// The fragment was a `Transform4x4`.
    Transform(Transform),
}

impl<D: Directory> fmt::Debug for Decoded<'_, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(object) => f.debug_tuple("Object").field(&object.name()).finish(),
            Self::Member(member) => f.debug_tuple("Member").field(member).finish(),
            Self::Transform(transform) => f.debug_tuple("Transform").field(transform).finish(),
        }
    }
}

/// Encodes an object as a tagged `[container_id, object_name]` sequence.
///
/// Encoding records identity, never content, and always succeeds for a live
/// object. Encoding the same object twice yields structurally equal
/// fragments.
#[must_use]
pub fn encode_object<O: ObjectView>(object: &O) -> Value {
    let items = vec![
        Value::from(object.container_id().value()),
        Value::from(object.name()),
    ];
    tagged(ReferenceKind::Object, items)
}

/// Encodes a member of an object as a tagged three-element sequence.
///
/// The owning object supplies the container id and object name; the member
/// contributes only its own name.
#[must_use]
pub fn encode_member<O: ObjectView>(object: &O, member: &O::Member) -> Value {
    let items = vec![
        Value::from(object.container_id().value()),
        Value::from(object.name()),
        Value::from(member.name()),
    ];
    tagged(ReferenceKind::Member, items)
}

/// Encodes a transform as a tagged 4×4 nested sequence of numbers.
///
/// # Example
///
/// ```
/// use scenelink_codec::{Transform, encode_transform, decode_transform};
///
/// let fragment = encode_transform(&Transform::IDENTITY);
/// let decoded = decode_transform(&fragment).expect("well-formed fragment");
/// assert_eq!(decoded, Transform::IDENTITY);
/// ```
#[must_use]
pub fn encode_transform(transform: &Transform) -> Value {
    let rows = transform
        .rows()
        .iter()
        .map(|row| Value::Sequence(row.iter().map(|cell| Value::from(*cell)).collect()))
        .collect();
    tagged(ReferenceKind::Transform, rows)
}

/// Decodes an object reference and resolves it against the directory.
///
/// # Errors
///
/// Returns [`CodecError::Malformed`] when the fragment is not a two-element
/// sequence of an integer id and a string name,
/// [`CodecError::UnresolvedContainer`] when the container id is absent, and
/// [`CodecError::UnresolvedMember`] when the container holds no object of
/// that name.
pub fn decode_object<'a, D: Directory>(
    node: &Value,
    directory: &'a D,
) -> Result<&'a ObjectOf<D>, CodecError> {
    let items = sequence_of(node, OBJECT_SHAPE, 2)?;
    let id = id_at(items, 0, OBJECT_SHAPE)?;
    let name = name_at(items, 1, OBJECT_SHAPE)?;

    let container = directory
        .container(id)
        .ok_or(CodecError::UnresolvedContainer { id })?;
    container
        .object(name)
        .ok_or_else(|| CodecError::UnresolvedMember {
            container: id,
            path: name.to_owned(),
        })
}

/// Decodes a member reference and resolves it against the directory.
///
/// # Errors
///
/// Returns [`CodecError::Malformed`] when the fragment is not a three-element
/// sequence of an integer id and two string names, and the unresolved
/// variants when any resolution step finds nothing; the failing step is
/// named in the error.
pub fn decode_member<'a, D: Directory>(
    node: &Value,
    directory: &'a D,
) -> Result<ResolvedMember<'a, D>, CodecError> {
    let items = sequence_of(node, MEMBER_SHAPE, 3)?;
    let id = id_at(items, 0, MEMBER_SHAPE)?;
    let object_name = name_at(items, 1, MEMBER_SHAPE)?;
    let member_name = name_at(items, 2, MEMBER_SHAPE)?;

    let container = directory
        .container(id)
        .ok_or(CodecError::UnresolvedContainer { id })?;
    let object = container
        .object(object_name)
        .ok_or_else(|| CodecError::UnresolvedMember {
            container: id,
            path: object_name.to_owned(),
        })?;
    let member = object
        .member(member_name)
        .ok_or_else(|| CodecError::UnresolvedMember {
            container: id,
            path: format!("{object_name}/{member_name}"),
        })?;
    Ok(ResolvedMember { object, member })
}

/// Decodes a transform fragment.
///
/// # Errors
///
/// Returns [`CodecError::Malformed`] unless the fragment is exactly four
/// rows of exactly four numeric cells. A numeric grid in any other shape is
/// rejected outright; there is no numeric-default fallback.
pub fn decode_transform(node: &Value) -> Result<Transform, CodecError> {
    let rows = sequence_of(node, TRANSFORM_SHAPE, 4)?;
    let mut cells = [[0.0_f64; 4]; 4];
    for (row_cells, row_node) in cells.iter_mut().zip(rows.iter()) {
        let columns = row_node
            .as_sequence()
            .ok_or_else(|| malformed(TRANSFORM_SHAPE, "matrix row is not a sequence"))?;
        if columns.len() != 4 {
            return Err(malformed(
                TRANSFORM_SHAPE,
                format!("matrix rows must have 4 columns, found {}", columns.len()),
            ));
        }
        for (cell, column) in row_cells.iter_mut().zip(columns.iter()) {
            *cell = column
                .as_f64()
                .ok_or_else(|| malformed(TRANSFORM_SHAPE, "matrix cell is not numeric"))?;
        }
    }
    Ok(Transform::new(cells))
}

/// Decodes any reference fragment, dispatching on its tag.
///
/// This is the single generic entry point for callers that do not know the
/// fragment kind ahead of time. Unlike the typed decoders, which treat tags
/// as diagnostic, this function requires a recognised tag to select a
/// converter.
///
/// # Errors
///
/// Returns [`CodecError::Malformed`] for an untagged fragment or an
/// unrecognised tag, plus whatever the selected converter reports.
pub fn decode<'a, D: Directory>(
    node: &Value,
    directory: &'a D,
) -> Result<Decoded<'a, D>, CodecError> {
    let Value::Tagged(node_tag) = node else {
        return Err(malformed(
            "a tagged reference fragment",
            "fragment carries no type tag",
        ));
    };
    let kind = ReferenceKind::from_tag(&node_tag.tag).ok_or_else(|| {
        malformed(
            "a tagged reference fragment",
            format!("unrecognised tag {}", node_tag.tag),
        )
    })?;
    match kind {
        ReferenceKind::Object => decode_object(node, directory).map(Decoded::Object),
        ReferenceKind::Member => decode_member(node, directory).map(Decoded::Member),
        ReferenceKind::Transform => decode_transform(node).map(Decoded::Transform),
    }
}

fn tagged(kind: ReferenceKind, items: Vec<Value>) -> Value {
    Value::Tagged(Box::new(TaggedValue {
        tag: Tag::new(kind.tag()),
        value: Value::Sequence(items),
    }))
}

fn malformed(expected: &'static str, message: impl Into<String>) -> CodecError {
    CodecError::Malformed {
        expected,
        message: message.into(),
    }
}

/// Strips a diagnostic tag wrapper, if any, and returns the payload node.
fn untagged(node: &Value) -> &Value {
    match node {
        Value::Tagged(inner) => &inner.value,
        other => other,
    }
}

fn sequence_of<'a>(
    node: &'a Value,
    expected: &'static str,
    arity: usize,
) -> Result<&'a [Value], CodecError> {
    let items = untagged(node)
        .as_sequence()
        .ok_or_else(|| malformed(expected, "fragment is not a sequence"))?;
    if items.len() != arity {
        return Err(malformed(
            expected,
            format!("expected {arity} elements, found {}", items.len()),
        ));
    }
    Ok(items.as_slice())
}

fn id_at(items: &[Value], index: usize, expected: &'static str) -> Result<ContainerId, CodecError> {
    items
        .get(index)
        .and_then(Value::as_i64)
        .map(ContainerId::new)
        .ok_or_else(|| malformed(expected, format!("element {index} is not an integer id")))
}

fn name_at<'a>(
    items: &'a [Value],
    index: usize,
    expected: &'static str,
) -> Result<&'a str, CodecError> {
    items
        .get(index)
        .and_then(Value::as_str)
        .ok_or_else(|| malformed(expected, format!("element {index} is not a string name")))
}
