/// Flat triangle list: every consecutive triple of indices is one triangle.
///
/// Indices refer to the caller's flattened vertex sequence (outer ring first,
/// then each hole in input order). The buffer is filled only while the engine
/// produces it; callers get read-only access.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TriangleIndexBuffer {
    indices: Vec<u32>,
}

impl TriangleIndexBuffer {
    pub(crate) fn with_triangle_capacity(triangles: usize) -> Self {
        Self { indices: Vec::with_capacity(triangles * 3) }
    }

    #[inline(always)]
    pub(crate) fn push(&mut self, tri: [u32; 3]) {
        self.indices.extend_from_slice(&tri);
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.indices
    }

    /// Number of indices (always a multiple of 3).
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    pub fn into_vec(self) -> Vec<u32> {
        self.indices
    }
}

impl AsRef<[u32]> for TriangleIndexBuffer {
    fn as_ref(&self) -> &[u32] {
        &self.indices
    }
}
