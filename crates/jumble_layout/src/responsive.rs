//! Responsive helpers for Tailwind-style breakpoints.

/// Tailwind-compatible breakpoint widths in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoints {
    /// Small breakpoint (`sm`) - 640px
    pub sm: f32,
    /// Medium breakpoint (`md`) - 768px
    pub md: f32,
    /// Large breakpoint (`lg`) - 1024px
    pub lg: f32,
}

impl Breakpoints {
    pub const DEFAULT: Self = Self {
        sm: 640.0,
        md: 768.0,
        lg: 1024.0,
    };
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Device-class abstraction derived from the breakpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    /// Width < `md` (768px)
    Mobile,
    /// `md` <= width < `lg` (1024px)
    Tablet,
    /// width >= `lg` (1024px)
    Desktop,
}

/// Classify device width into mobile/tablet/desktop using the default breakpoints.
pub fn device_class_for_width(width: f32) -> DeviceClass {
    let bp = Breakpoints::DEFAULT;
    match width {
        w if w < bp.md => DeviceClass::Mobile,
        w if w < bp.lg => DeviceClass::Tablet,
        _ => DeviceClass::Desktop,
    }
}

/// Whether a viewport this wide uses small-screen mode (whole viewport scrolls).
///
/// `breakpoint` is exclusive: widths strictly below it are small. A zero or
/// negative width means the host has not measured yet and counts as large.
pub fn is_small_screen_width(width: f32, breakpoint: f32) -> bool {
    width > 0.0 && width < breakpoint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_class_breakpoints() {
        assert_eq!(device_class_for_width(375.0), DeviceClass::Mobile);
        assert_eq!(device_class_for_width(767.0), DeviceClass::Mobile);
        assert_eq!(device_class_for_width(768.0), DeviceClass::Tablet);
        assert_eq!(device_class_for_width(1023.0), DeviceClass::Tablet);
        assert_eq!(device_class_for_width(1440.0), DeviceClass::Desktop);
    }

    #[test]
    fn test_small_screen_width() {
        let md = Breakpoints::DEFAULT.md;
        assert!(is_small_screen_width(390.0, md));
        assert!(!is_small_screen_width(768.0, md));
        assert!(!is_small_screen_width(0.0, md));
    }
}
