/// A selectable output resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Resolution {
    pub key: &'static str,
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
}

/// Resolution choices, in menu order. Key `"0"` is the initial selection.
pub const RESOLUTIONS: &[Resolution] = &[
    Resolution {
        key: "0",
        label: "Phone FHD (1080x1920)",
        width: 1080,
        height: 1920,
    },
    Resolution {
        key: "1",
        label: "Phone QHD (1440x2560)",
        width: 1440,
        height: 2560,
    },
    Resolution {
        key: "2",
        label: "Phone tall (1080x2340)",
        width: 1080,
        height: 2340,
    },
    Resolution {
        key: "3",
        label: "Tablet (1536x2048)",
        width: 1536,
        height: 2048,
    },
    Resolution {
        key: "4",
        label: "Desktop FHD (1920x1080)",
        width: 1920,
        height: 1080,
    },
    Resolution {
        key: "5",
        label: "Desktop QHD (2560x1440)",
        width: 2560,
        height: 1440,
    },
    Resolution {
        key: "6",
        label: "Round watch (454x454)",
        width: 454,
        height: 454,
    },
    Resolution {
        key: "7",
        label: "Square watch (368x448)",
        width: 368,
        height: 448,
    },
    Resolution {
        key: "8",
        label: "Small square (300x300)",
        width: 300,
        height: 300,
    },
];

pub fn find_resolution(key: &str) -> Option<&'static Resolution> {
    RESOLUTIONS.iter().find(|r| r.key == key)
}
