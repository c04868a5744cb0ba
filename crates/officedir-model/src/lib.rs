#![forbid(unsafe_code)]
//! Directory model SSOT.
//!
//! Every record that crosses a crate boundary is defined here, with
//! parse-time validation at the edges. Collections on disk use the
//! site's camelCase JSON layout, so serde renames live on the records
//! rather than in the store.

mod company;
mod contact;
mod geo;
mod insight;
mod listing;
mod post;
mod reference;
mod slug;

pub use company::{timestamp_id_suffix, Company, CompanyContact, NewCompany};
pub use contact::{is_valid_email, ContactRequest};
pub use geo::{
    map_tile_url, tile_coords, Coordinates, MapMarker, TileCoords, CITY_CENTER, DEFAULT_ZOOM,
};
pub use insight::Insight;
pub use listing::{Building, CoworkingSpace, Submarket};
pub use post::BlogPost;
pub use reference::{category_label, ReferenceBook, ReferenceEntry};
pub use slug::{parse_slug, slugify, Slug, ValidationError, SLUG_MAX_LEN};

pub const CRATE_NAME: &str = "officedir-model";
