//! Render surfaces and the mount registry.
//!
//! A [`RenderSurface`] is a realized card layout: SVG markup with a
//! fixed physical footprint. The desktop app embeds the markup in its
//! preview pane; the export pipeline parses the same markup back into a
//! vector tree and rasterizes it. Surfaces are produced fresh from the
//! record on every edit and registered in a [`SurfaceStore`], which the
//! pipeline receives as an explicit reference so it can be driven
//! headlessly in tests.

use std::fmt;
use std::str::FromStr;

use crate::error::CardError;
use crate::geometry::PageSizeMm;

/// Which side of the card a surface shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSide {
    Front,
    Back,
}

impl CardSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardSide::Front => "front",
            CardSide::Back => "back",
        }
    }
}

impl fmt::Display for CardSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardSide {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "front" => Ok(CardSide::Front),
            "back" => Ok(CardSide::Back),
            other => Err(CardError::UnknownSide(other.to_string())),
        }
    }
}

/// A realized, fixed-physical-size card layout.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSurface {
    pub side: CardSide,
    pub size: PageSizeMm,
    pub svg: String,
}

/// Explicit registry of the currently mounted surfaces.
///
/// At most one surface per side. Export and print always read the most
/// recently mounted surface for the requested side; an unmounted side
/// reads as `None` and the pipeline treats that as a silent no-op.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SurfaceStore {
    front: Option<RenderSurface>,
    back: Option<RenderSurface>,
}

impl SurfaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a surface, replacing any previous one for that side.
    pub fn mount(&mut self, surface: RenderSurface) {
        match surface.side {
            CardSide::Front => self.front = Some(surface),
            CardSide::Back => self.back = Some(surface),
        }
    }

    /// Remove the surface for a side, if any.
    pub fn unmount(&mut self, side: CardSide) {
        match side {
            CardSide::Front => self.front = None,
            CardSide::Back => self.back = None,
        }
    }

    /// Pure lookup of the mounted surface for a side.
    pub fn active(&self, side: CardSide) -> Option<&RenderSurface> {
        match side {
            CardSide::Front => self.front.as_ref(),
            CardSide::Back => self.back.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(side: CardSide, svg: &str) -> RenderSurface {
        RenderSurface {
            side,
            size: PageSizeMm::card(),
            svg: svg.to_string(),
        }
    }

    #[test]
    fn empty_store_has_no_active_surface() {
        let store = SurfaceStore::new();
        assert!(store.active(CardSide::Front).is_none());
        assert!(store.active(CardSide::Back).is_none());
    }

    #[test]
    fn mount_replaces_the_previous_surface_for_that_side() {
        let mut store = SurfaceStore::new();
        store.mount(surface(CardSide::Front, "<svg>v1</svg>"));
        store.mount(surface(CardSide::Front, "<svg>v2</svg>"));
        store.mount(surface(CardSide::Back, "<svg>back</svg>"));

        assert_eq!(store.active(CardSide::Front).unwrap().svg, "<svg>v2</svg>");
        assert_eq!(store.active(CardSide::Back).unwrap().svg, "<svg>back</svg>");
    }

    #[test]
    fn unmount_clears_only_the_given_side() {
        let mut store = SurfaceStore::new();
        store.mount(surface(CardSide::Front, "<svg/>"));
        store.mount(surface(CardSide::Back, "<svg/>"));
        store.unmount(CardSide::Front);

        assert!(store.active(CardSide::Front).is_none());
        assert!(store.active(CardSide::Back).is_some());
    }

    #[test]
    fn side_tags_round_trip_through_strings() {
        assert_eq!("front".parse::<CardSide>().unwrap(), CardSide::Front);
        assert_eq!("BACK".parse::<CardSide>().unwrap(), CardSide::Back);
        assert!("top".parse::<CardSide>().is_err());
        assert_eq!(CardSide::Front.to_string(), "front");
    }
}
