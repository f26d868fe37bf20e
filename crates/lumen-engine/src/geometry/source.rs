use std::collections::BTreeMap;

/// One named per-vertex data channel.
///
/// `array` holds `item_size` floats per vertex, vertices in storage order.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryAttribute {
    pub item_size: u32,
    pub array: Vec<f32>,
}

impl GeometryAttribute {
    pub fn new(item_size: u32, array: Vec<f32>) -> Self {
        Self { item_size, array }
    }

    /// Number of vertices stored in this attribute.
    ///
    /// Returns 0 for a zero `item_size`; the packer rejects such attributes
    /// before relying on the count.
    pub fn count(&self) -> usize {
        if self.item_size == 0 {
            return 0;
        }
        self.array.len() / self.item_size as usize
    }

    /// Components of vertex `i`.
    #[inline]
    pub fn item(&self, i: usize) -> &[f32] {
        let n = self.item_size as usize;
        &self.array[i * n..(i + 1) * n]
    }
}

/// Named attributes plus a triangle-list index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometrySource {
    pub attributes: BTreeMap<String, GeometryAttribute>,
    pub index: Option<Vec<u16>>,
}

impl GeometrySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) an attribute. Builder style.
    pub fn with_attribute(mut self, name: impl Into<String>, attribute: GeometryAttribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    pub fn with_index(mut self, index: Vec<u16>) -> Self {
        self.index = Some(index);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&GeometryAttribute> {
        self.attributes.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_divides_by_item_size() {
        let a = GeometryAttribute::new(3, vec![0.0; 9]);
        assert_eq!(a.count(), 3);
    }

    #[test]
    fn count_of_zero_item_size_is_zero() {
        let a = GeometryAttribute::new(0, vec![1.0, 2.0]);
        assert_eq!(a.count(), 0);
    }

    #[test]
    fn item_slices_one_vertex() {
        let a = GeometryAttribute::new(2, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(a.item(1), &[2.0, 3.0]);
    }

    #[test]
    fn builder_sets_attributes_and_index() {
        let g = GeometrySource::new()
            .with_attribute("uv", GeometryAttribute::new(2, vec![0.0, 0.0]))
            .with_index(vec![0, 0, 0]);
        assert!(g.attribute("uv").is_some());
        assert!(g.attribute("position").is_none());
        assert_eq!(g.index.as_deref(), Some(&[0u16, 0, 0][..]));
    }
}
