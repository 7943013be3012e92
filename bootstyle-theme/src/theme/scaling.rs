/// Display platform, which decides the baseline pixels-per-point ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Aqua on macOS.
    MacOs,
    /// X11 and Windows.
    Other,
}

impl Platform {
    /// The platform this binary was built for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    /// Toolkit scaling value at which assets render 1:1.
    pub fn baseline(self) -> f64 {
        match self {
            Platform::MacOs => 1.000492368291482,
            Platform::Other => 1.33398982438864281,
        }
    }
}

/// Scale a size authored at baseline DPI to the given toolkit scaling, rounding up.
pub fn scale_size(size: f64, scaling: f64, platform: Platform) -> u32 {
    let factor = scaling / platform.baseline();
    (size * factor).ceil().max(0.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_scaling_is_identity() {
        let baseline = Platform::Other.baseline();
        assert_eq!(scale_size(10.0, baseline, Platform::Other), 10);
        assert_eq!(scale_size(10.0, Platform::MacOs.baseline(), Platform::MacOs), 10);
    }

    #[test]
    fn rounds_up() {
        let double = Platform::Other.baseline() * 2.0;
        assert_eq!(scale_size(3.0, double, Platform::Other), 6);
        assert_eq!(scale_size(3.0, 2.0, Platform::Other), 5);
    }
}
