use crate::{
    engine::ports::ViewportProvider,
    foundation::core::{DeviceClass, ViewportSize},
};

/// Viewport geometry that never changes, e.g. a fixed-size offscreen preview.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedViewport {
    /// Reported viewport extents.
    pub size: ViewportSize,
    /// Reported device class.
    pub device: DeviceClass,
}

impl FixedViewport {
    /// Classify the device from `size.width` against `compact_breakpoint`.
    pub fn new(size: ViewportSize, compact_breakpoint: f64) -> Self {
        Self {
            size,
            device: DeviceClass::from_width(size.width, compact_breakpoint),
        }
    }

    /// Use an explicit device class instead of deriving it from the width.
    pub fn with_device(size: ViewportSize, device: DeviceClass) -> Self {
        Self { size, device }
    }
}

impl ViewportProvider for FixedViewport {
    fn viewport_size(&self) -> ViewportSize {
        self.size
    }

    fn device_class(&self) -> DeviceClass {
        self.device
    }
}
