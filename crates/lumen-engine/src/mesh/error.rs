use thiserror::Error;

/// Reasons a geometry cannot be packed.
///
/// Every variant except [`PackError::UnsupportedComponentCount`] means the
/// geometry itself is malformed; see [`PackError::is_invalid_geometry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackError {
    #[error("geometry has no index list")]
    MissingIndex,

    #[error("attribute `{0}` is not present in the geometry")]
    UnknownAttribute(String),

    #[error("slot {slot} is bound to both `{first}` and `{second}`")]
    DuplicateSlot {
        slot: u32,
        first: String,
        second: String,
    },

    #[error("attribute `{name}` holds {len} floats, not a multiple of its item size {item_size}")]
    MalformedAttribute {
        name: String,
        len: usize,
        item_size: u32,
    },

    #[error("attribute `{name}` has {found} vertices but `{reference}` has {expected}")]
    VertexCountMismatch {
        name: String,
        reference: String,
        expected: usize,
        found: usize,
    },

    #[error("index {index} is out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u16, vertex_count: usize },

    #[error("attribute `{name}` has item size {item_size}; float32xN supports 1..=4")]
    UnsupportedComponentCount { name: String, item_size: u32 },
}

impl PackError {
    /// `true` for malformed-geometry errors, `false` for unsupported formats.
    pub fn is_invalid_geometry(&self) -> bool {
        !matches!(self, PackError::UnsupportedComponentCount { .. })
    }
}
