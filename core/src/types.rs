/// Text shown at the leading edge of the top bar.
pub const BRAND: &str = "ai.dbanswan.com";

/// Vertical scroll offset, in CSS pixels, past which the top bar switches to
/// its translucent appearance.
pub const SCROLL_THRESHOLD: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

/// Navigation destinations in display order.
pub const NAV_ITEMS: [NavItem; 4] = [
    NavItem {
        href: "/",
        label: "Home",
    },
    NavItem {
        href: "/projects",
        label: "Projects",
    },
    NavItem {
        href: "/blog",
        label: "Blog",
    },
    NavItem {
        href: "/learning",
        label: "Learning",
    },
];

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD
}

/// Utility classes for the top bar background, picked only by whether the page
/// has been scrolled.
pub fn bar_appearance(scrolled: bool) -> &'static str {
    if scrolled {
        "bg-white bg-opacity-20 backdrop-blur-lg shadow-md"
    } else {
        "bg-transparent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(20.0));
        assert!(is_scrolled(20.5));
        assert!(is_scrolled(21.0));
        assert!(is_scrolled(4000.0));
    }

    #[test]
    fn negative_offsets_are_not_scrolled() {
        // overscroll bounce on some browsers reports negative offsets
        assert!(!is_scrolled(-35.0));
    }

    #[test]
    fn nav_items_keep_display_order() {
        let pairs: Vec<_> = NAV_ITEMS.iter().map(|i| (i.label, i.href)).collect();
        assert_eq!(
            pairs,
            vec![
                ("Home", "/"),
                ("Projects", "/projects"),
                ("Blog", "/blog"),
                ("Learning", "/learning"),
            ]
        );
    }

    #[test]
    fn appearance_follows_scroll_state() {
        assert_eq!(bar_appearance(false), "bg-transparent");
        let scrolled = bar_appearance(true);
        assert!(scrolled.contains("backdrop-blur-lg"));
        assert!(scrolled.contains("shadow-md"));
        assert!(!scrolled.contains("bg-transparent"));
    }
}
