use bytemuck::{Pod, Zeroable};

/// Per-marker render data read zero-copy by the JS renderer.
/// Must match the TypeScript side: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct MarkerInstance {
    /// Position on the marker sphere.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// World-space rendered size.
    pub size: f32,
    /// Live marker color (status or accent).
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl MarkerInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Marker instances for the current frame.
pub struct MarkerBuffer {
    pub instances: Vec<MarkerInstance>,
}

impl MarkerBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(256),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: MarkerInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer for zero-copy reads from JS.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for MarkerBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<MarkerInstance>(), 32);
        assert_eq!(MarkerInstance::FLOATS, 8);
    }

    #[test]
    fn buffer_push_and_count() {
        let mut buf = MarkerBuffer::new();
        buf.push(MarkerInstance::default());
        buf.push(MarkerInstance::default());
        assert_eq!(buf.instance_count(), 2);
        buf.clear();
        assert_eq!(buf.instance_count(), 0);
    }
}
