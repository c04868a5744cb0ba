use serde::{Deserialize, Serialize};

/// Downtown Calgary. Fallback position for records submitted without
/// coordinates, and the default map view.
pub const CITY_CENTER: Coordinates = Coordinates {
    lat: 51.0447,
    lng: -114.0719,
};

pub const DEFAULT_ZOOM: u8 = 13;

const TILE_BASE_URL: &str = "https://a.basemaps.cartocdn.com/rastertiles/voyager";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Finite and inside the WGS84 envelope. Records with anything else
    /// never become markers.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat.abs() <= 90.0
            && self.lng.abs() <= 180.0
    }

    #[must_use]
    pub fn from_parts(lat: Option<f64>, lng: Option<f64>) -> Option<Self> {
        match (lat, lng) {
            (Some(lat), Some(lng)) => {
                let c = Self { lat, lng };
                c.is_valid().then_some(c)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCoords {
    pub x: u32,
    pub y: u32,
    pub zoom: u8,
}

/// Slippy-map tile containing a coordinate at the given zoom.
#[must_use]
pub fn tile_coords(coords: Coordinates, zoom: u8) -> TileCoords {
    let n = f64::from(1u32 << u32::from(zoom.min(22)));
    let x = ((coords.lng + 180.0) / 360.0 * n).floor();
    let rad = coords.lat.to_radians();
    let y = ((1.0 - (rad.tan() + 1.0 / rad.cos()).ln() / std::f64::consts::PI) / 2.0 * n).floor();
    let clamp = |v: f64| -> u32 {
        if v.is_finite() && v >= 0.0 {
            (v as u32).min((n as u32).saturating_sub(1))
        } else {
            0
        }
    };
    TileCoords {
        x: clamp(x),
        y: clamp(y),
        zoom,
    }
}

/// Static map preview URL for a coordinate, used on submarket cards.
#[must_use]
pub fn map_tile_url(coords: Coordinates, zoom: u8) -> String {
    let tile = tile_coords(coords, zoom);
    format!("{TILE_BASE_URL}/{}/{}/{}.png", tile.zoom, tile.x, tile.y)
}

/// What the embedded map consumes: position plus a popup label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lng: f64,
    pub label: String,
}

impl MapMarker {
    #[must_use]
    pub fn from_coords(coords: Coordinates, label: impl Into<String>) -> Self {
        Self {
            lat: coords.lat,
            lng: coords.lng,
            label: label.into(),
        }
    }

    /// Build a marker only when both coordinates are present and valid.
    #[must_use]
    pub fn try_new(lat: Option<f64>, lng: Option<f64>, label: &str) -> Option<Self> {
        Coordinates::from_parts(lat, lng).map(|c| Self::from_coords(c, label))
    }
}
