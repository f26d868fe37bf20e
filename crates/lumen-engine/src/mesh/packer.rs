use std::collections::HashMap;

use crate::geometry::{GeometryAttribute, GeometrySource};

use super::PackError;

/// Size of one vertex component in bytes.
pub const FLOAT_SIZE: u64 = std::mem::size_of::<f32>() as u64;

/// Size of one index in bytes.
pub const INDEX_SIZE: u64 = std::mem::size_of::<u16>() as u64;

/// Attribute name -> shader binding slot (`@location`).
///
/// Slots must be unique but need not be contiguous. Iteration order of the
/// map is irrelevant; packing always sorts by slot.
pub type AttributeLocations = HashMap<String, u32>;

/// Builds an [`AttributeLocations`] map from `(name, slot)` pairs.
pub fn locations(pairs: &[(&str, u32)]) -> AttributeLocations {
    pairs
        .iter()
        .map(|&(name, slot)| (name.to_owned(), slot))
        .collect()
}

/// Placement of one attribute inside an interleaved vertex record.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AttributeLayout {
    slot: u32,
    byte_offset: u64,
    component_count: u32,
}

impl AttributeLayout {
    /// `component_count` must be in `1..=4`.
    pub(crate) const fn new(slot: u32, byte_offset: u64, component_count: u32) -> Self {
        Self {
            slot,
            byte_offset,
            component_count,
        }
    }

    #[inline]
    pub fn slot(&self) -> u32 {
        self.slot
    }

    #[inline]
    pub fn byte_offset(&self) -> u64 {
        self.byte_offset
    }

    #[inline]
    pub fn component_count(&self) -> u32 {
        self.component_count
    }

    /// Vertex format for this attribute.
    pub fn format(&self) -> wgpu::VertexFormat {
        match self.component_count {
            1 => wgpu::VertexFormat::Float32,
            2 => wgpu::VertexFormat::Float32x2,
            3 => wgpu::VertexFormat::Float32x3,
            _ => wgpu::VertexFormat::Float32x4,
        }
    }

    /// `"float32xN"` name of the format.
    pub fn format_name(&self) -> &'static str {
        match self.component_count {
            1 => "float32x1",
            2 => "float32x2",
            3 => "float32x3",
            _ => "float32x4",
        }
    }

    pub fn to_vertex_attribute(&self) -> wgpu::VertexAttribute {
        wgpu::VertexAttribute {
            format: self.format(),
            offset: self.byte_offset,
            shader_location: self.slot,
        }
    }
}

/// Result of [`pack`].
#[derive(Debug, Clone, PartialEq)]
pub struct PackedVertexBuffer {
    /// One entry per attribute, ascending slot.
    pub layout: Vec<AttributeLayout>,
    /// Bytes per vertex record.
    pub stride: u64,
    /// `vertex_count * stride / 4` floats, vertices in storage order.
    pub vertex_data: Vec<f32>,
    /// The geometry's index list, unchanged.
    pub indices: Vec<u16>,
}

impl PackedVertexBuffer {
    pub fn vertex_count(&self) -> usize {
        let floats = (self.stride / FLOAT_SIZE) as usize;
        if floats == 0 { 0 } else { self.vertex_data.len() / floats }
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// wgpu attribute descriptors in layout order.
    pub fn vertex_attributes(&self) -> Vec<wgpu::VertexAttribute> {
        self.layout.iter().map(AttributeLayout::to_vertex_attribute).collect()
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertex_data)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

/// Interleaves the attributes named in `locations` into one vertex buffer.
///
/// Attributes are ordered by ascending slot; that order fixes both the byte
/// offsets inside a record and the copy order. Vertices keep their storage
/// order and the index list is returned as is.
pub fn pack(
    geometry: &GeometrySource,
    locations: &AttributeLocations,
) -> Result<PackedVertexBuffer, PackError> {
    let indices = geometry.index.as_ref().ok_or(PackError::MissingIndex)?;

    // Explicit sort: map iteration order must not leak into the layout.
    let mut order: Vec<(&str, u32)> = locations
        .iter()
        .map(|(name, slot)| (name.as_str(), *slot))
        .collect();
    order.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

    if let Some(pair) = order.windows(2).find(|pair| pair[0].1 == pair[1].1) {
        return Err(PackError::DuplicateSlot {
            slot: pair[0].1,
            first: pair[0].0.to_owned(),
            second: pair[1].0.to_owned(),
        });
    }

    let mut selected: Vec<(u32, &GeometryAttribute)> = Vec::with_capacity(order.len());
    let mut reference: Option<(&str, usize)> = None;

    for (name, slot) in order {
        let attribute = geometry
            .attribute(name)
            .ok_or_else(|| PackError::UnknownAttribute(name.to_owned()))?;

        if !(1..=4).contains(&attribute.item_size) {
            return Err(PackError::UnsupportedComponentCount {
                name: name.to_owned(),
                item_size: attribute.item_size,
            });
        }

        if attribute.array.len() % attribute.item_size as usize != 0 {
            return Err(PackError::MalformedAttribute {
                name: name.to_owned(),
                len: attribute.array.len(),
                item_size: attribute.item_size,
            });
        }

        let count = attribute.count();
        match reference {
            None => reference = Some((name, count)),
            Some((first, expected)) if expected != count => {
                return Err(PackError::VertexCountMismatch {
                    name: name.to_owned(),
                    reference: first.to_owned(),
                    expected,
                    found: count,
                });
            }
            Some(_) => {}
        }

        selected.push((slot, attribute));
    }

    // Unselected attributes still describe the same vertices.
    if let Some((first, expected)) = reference {
        if let Some((name, attribute)) = geometry
            .attributes
            .iter()
            .find(|(_, attribute)| attribute.count() != expected)
        {
            return Err(PackError::VertexCountMismatch {
                name: name.clone(),
                reference: first.to_owned(),
                expected,
                found: attribute.count(),
            });
        }
    }

    let vertex_count = reference.map_or(0, |(_, count)| count);

    if reference.is_some() {
        if let Some(&index) = indices.iter().find(|&&i| usize::from(i) >= vertex_count) {
            return Err(PackError::IndexOutOfRange {
                index,
                vertex_count,
            });
        }
    }

    let mut layout = Vec::with_capacity(selected.len());
    let mut offset = 0u64;
    for (slot, attribute) in &selected {
        layout.push(AttributeLayout::new(*slot, offset, attribute.item_size));
        offset += u64::from(attribute.item_size) * FLOAT_SIZE;
    }
    let stride = offset;

    let mut vertex_data = Vec::with_capacity(vertex_count * (stride / FLOAT_SIZE) as usize);
    for i in 0..vertex_count {
        for (_, attribute) in &selected {
            vertex_data.extend_from_slice(attribute.item(i));
        }
    }

    log::trace!(
        "packed {} vertices, {} attributes, stride {} bytes",
        vertex_count,
        layout.len(),
        stride
    );

    Ok(PackedVertexBuffer {
        layout,
        stride,
        vertex_data,
        indices: indices.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{TRIANGLE_VERTEX_DATA, TRIANGLE_VERTEX_STRIDE, box_geometry, colored_triangle};

    fn attr(item_size: u32, array: &[f32]) -> GeometryAttribute {
        GeometryAttribute::new(item_size, array.to_vec())
    }

    fn two_vertex_geometry() -> GeometrySource {
        GeometrySource::new()
            .with_attribute("position", attr(3, &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0]))
            .with_attribute("uv", attr(2, &[0.0, 0.0, 1.0, 1.0]))
            .with_index(vec![0, 1, 0])
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn single_vertex_single_attribute() {
        let g = GeometrySource::new()
            .with_attribute("position", attr(3, &[1.0, 2.0, 3.0]))
            .with_index(vec![0, 0, 0]);

        let packed = pack(&g, &locations(&[("position", 0)])).unwrap();

        assert_eq!(packed.stride, 12);
        assert_eq!(packed.layout, vec![AttributeLayout::new(0, 0, 3)]);
        assert_eq!(packed.vertex_data, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn stride_is_sum_of_item_sizes() {
        let g = box_geometry(1.0, 1.0, 1.0);
        let packed = pack(&g, &locations(&[("position", 0), ("normal", 1), ("uv", 2)])).unwrap();

        assert_eq!(packed.stride, 4 * (3 + 3 + 2));
        let offsets: Vec<u64> = packed.layout.iter().map(|l| l.byte_offset()).collect();
        assert_eq!(offsets, vec![0, 12, 24]);
        assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn layout_follows_slot_order_not_name_order() {
        let g = two_vertex_geometry();
        let packed = pack(&g, &locations(&[("uv", 0), ("position", 5)])).unwrap();

        assert_eq!(
            packed.layout,
            vec![AttributeLayout::new(0, 0, 2), AttributeLayout::new(5, 8, 3)]
        );
        assert_eq!(packed.vertex_data, vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn sparse_slots_keep_their_numbers() {
        let g = two_vertex_geometry();
        let packed = pack(&g, &locations(&[("position", 3), ("uv", 7)])).unwrap();
        let slots: Vec<u32> = packed.layout.iter().map(|l| l.slot()).collect();
        assert_eq!(slots, vec![3, 7]);
    }

    #[test]
    fn unselected_attributes_are_skipped() {
        let g = box_geometry(1.0, 1.0, 1.0);
        let packed = pack(&g, &locations(&[("position", 0), ("uv", 1)])).unwrap();
        assert_eq!(packed.stride, 20);
        assert_eq!(packed.vertex_data.len(), 24 * 5);
        assert_eq!(packed.vertex_count(), 24);
    }

    // ── interleave ────────────────────────────────────────────────────────

    #[test]
    fn two_attribute_interleave() {
        let g = two_vertex_geometry();
        let packed = pack(&g, &locations(&[("position", 0), ("uv", 1)])).unwrap();

        assert_eq!(packed.stride, 20);
        assert_eq!(
            packed.vertex_data,
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0]
        );
    }

    #[test]
    fn triangle_packs_to_reference_records() {
        let packed = pack(&colored_triangle(), &locations(&[("position", 0), ("color", 1)])).unwrap();
        assert_eq!(packed.stride, TRIANGLE_VERTEX_STRIDE);
        assert_eq!(packed.vertex_data, TRIANGLE_VERTEX_DATA.to_vec());
    }

    #[test]
    fn indices_are_returned_unchanged() {
        let g = box_geometry(1.0, 1.0, 1.0);
        let packed = pack(&g, &locations(&[("position", 0)])).unwrap();
        assert_eq!(Some(&packed.indices), g.index.as_ref());
        assert_eq!(packed.index_count(), 36);
        assert_eq!(packed.index_bytes().len(), 72);
    }

    #[test]
    fn empty_geometry_keeps_stride() {
        let g = GeometrySource::new()
            .with_attribute("position", attr(3, &[]))
            .with_attribute("uv", attr(2, &[]))
            .with_index(vec![]);

        let packed = pack(&g, &locations(&[("position", 0), ("uv", 1)])).unwrap();
        assert_eq!(packed.stride, 20);
        assert!(packed.vertex_data.is_empty());
        assert_eq!(packed.vertex_count(), 0);
    }

    #[test]
    fn empty_location_map_packs_nothing() {
        let g = two_vertex_geometry();
        let packed = pack(&g, &AttributeLocations::new()).unwrap();
        assert!(packed.layout.is_empty());
        assert_eq!(packed.stride, 0);
        assert!(packed.vertex_data.is_empty());
    }

    #[test]
    fn wgpu_attributes_match_layout() {
        let g = two_vertex_geometry();
        let packed = pack(&g, &locations(&[("position", 0), ("uv", 1)])).unwrap();
        let attrs = packed.vertex_attributes();

        assert_eq!(attrs[0].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(attrs[0].offset, 0);
        assert_eq!(attrs[1].format, wgpu::VertexFormat::Float32x2);
        assert_eq!(attrs[1].offset, 12);
        assert_eq!(attrs[1].shader_location, 1);
        assert_eq!(packed.layout[1].format_name(), "float32x2");
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn missing_index_is_invalid_geometry() {
        let mut g = two_vertex_geometry();
        g.index = None;

        let err = pack(&g, &locations(&[("position", 0)])).unwrap_err();
        assert_eq!(err, PackError::MissingIndex);
        assert!(err.is_invalid_geometry());
    }

    #[test]
    fn unknown_attribute_is_invalid_geometry() {
        let g = two_vertex_geometry();
        let err = pack(&g, &locations(&[("position", 0), ("normal", 1)])).unwrap_err();
        assert_eq!(err, PackError::UnknownAttribute("normal".into()));
        assert!(err.is_invalid_geometry());
    }

    #[test]
    fn mismatched_vertex_counts_are_rejected() {
        let g = GeometrySource::new()
            .with_attribute("position", attr(3, &[0.0; 6]))
            .with_attribute("uv", attr(2, &[0.0; 6]))
            .with_index(vec![0]);

        let err = pack(&g, &locations(&[("position", 0), ("uv", 1)])).unwrap_err();
        assert_eq!(
            err,
            PackError::VertexCountMismatch {
                name: "uv".into(),
                reference: "position".into(),
                expected: 2,
                found: 3,
            }
        );
    }

    #[test]
    fn unselected_attribute_with_other_vertex_count_is_rejected() {
        let g = GeometrySource::new()
            .with_attribute("position", attr(3, &[0.0; 6]))
            .with_attribute("normal", attr(3, &[0.0; 9]))
            .with_index(vec![0, 1, 0]);

        let err = pack(&g, &locations(&[("position", 0)])).unwrap_err();
        assert!(err.is_invalid_geometry());
        assert_eq!(
            err,
            PackError::VertexCountMismatch {
                name: "normal".into(),
                reference: "position".into(),
                expected: 2,
                found: 3,
            }
        );
    }

    #[test]
    fn ragged_attribute_array_is_rejected() {
        let g = GeometrySource::new()
            .with_attribute("position", attr(3, &[0.0; 4]))
            .with_index(vec![0]);
        let err = pack(&g, &locations(&[("position", 0)])).unwrap_err();
        assert!(matches!(err, PackError::MalformedAttribute { len: 4, item_size: 3, .. }));
    }

    #[test]
    fn item_size_outside_one_to_four_is_unsupported() {
        for item_size in [0, 5] {
            let g = GeometrySource::new()
                .with_attribute("weights", attr(item_size, &[0.0; 10]))
                .with_index(vec![]);
            let err = pack(&g, &locations(&[("weights", 0)])).unwrap_err();
            assert_eq!(
                err,
                PackError::UnsupportedComponentCount {
                    name: "weights".into(),
                    item_size,
                }
            );
            assert!(!err.is_invalid_geometry());
        }
    }

    #[test]
    fn duplicate_slots_are_rejected() {
        let g = two_vertex_geometry();
        let err = pack(&g, &locations(&[("position", 1), ("uv", 1)])).unwrap_err();
        assert_eq!(
            err,
            PackError::DuplicateSlot {
                slot: 1,
                first: "position".into(),
                second: "uv".into(),
            }
        );
    }

    #[test]
    fn index_past_vertex_count_is_rejected() {
        let mut g = two_vertex_geometry();
        g.index = Some(vec![0, 1, 2]);
        let err = pack(&g, &locations(&[("position", 0)])).unwrap_err();
        assert_eq!(
            err,
            PackError::IndexOutOfRange {
                index: 2,
                vertex_count: 2,
            }
        );
    }

    #[test]
    fn missing_index_is_reported_before_attribute_errors() {
        let g = GeometrySource::new();
        let err = pack(&g, &locations(&[("position", 0)])).unwrap_err();
        assert_eq!(err, PackError::MissingIndex);
    }
}
