#![forbid(unsafe_code)]
//! Office space program estimates.
//!
//! Pure arithmetic over a named-count space program: per-kind areas are
//! summed, a circulation allowance and a gross-up factor are applied, and
//! the resulting rentable area is priced per building class. No state, no
//! I/O, no wall-clock time.

use officedir_model::{is_valid_email, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Corridors and walkways inside the tenant's own premises.
pub const CIRCULATION_RATE: f64 = 0.26;
/// Share of building common areas billed into rentable area.
pub const GROSS_UP_RATE: f64 = 0.19;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum SpaceKind {
    CeoOffice,
    PartnerOffice,
    StandardOffice,
    SmallOffice,
    EfficientOffice,
    SupervisorWorkstation,
    StandardCubicle,
    SmallCubicle,
    LargeBoardroom,
    ConferenceRoom,
    SmallMeetingRoom,
    BreakoutRoom,
    LargeReception,
    RegularReception,
    LunchRoom,
    SmallLunchRoom,
    ServerRoom,
    CoffeeBar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceGroup {
    Offices,
    Workstations,
    MeetingRooms,
    OtherAreas,
}

impl SpaceKind {
    pub const ALL: [SpaceKind; 18] = [
        Self::CeoOffice,
        Self::PartnerOffice,
        Self::StandardOffice,
        Self::SmallOffice,
        Self::EfficientOffice,
        Self::SupervisorWorkstation,
        Self::StandardCubicle,
        Self::SmallCubicle,
        Self::LargeBoardroom,
        Self::ConferenceRoom,
        Self::SmallMeetingRoom,
        Self::BreakoutRoom,
        Self::LargeReception,
        Self::RegularReception,
        Self::LunchRoom,
        Self::SmallLunchRoom,
        Self::ServerRoom,
        Self::CoffeeBar,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CeoOffice => "CEO / Director",
            Self::PartnerOffice => "Partner Office",
            Self::StandardOffice => "Standard Office",
            Self::SmallOffice => "Small Office",
            Self::EfficientOffice => "Efficient Office",
            Self::SupervisorWorkstation => "Supervisor Workstation",
            Self::StandardCubicle => "Standard Cubicle",
            Self::SmallCubicle => "Small Cubicle",
            Self::LargeBoardroom => "Large Boardroom (16\u{2013}20 seats)",
            Self::ConferenceRoom => "Conference Room (8\u{2013}10 seats)",
            Self::SmallMeetingRoom => "Small Meeting Room (6\u{2013}8 seats)",
            Self::BreakoutRoom => "Break Out Room (4\u{2013}6 seats)",
            Self::LargeReception => "Large Reception",
            Self::RegularReception => "Regular Reception",
            Self::LunchRoom => "Lunch Room (15\u{2013}20 seats)",
            Self::SmallLunchRoom => "Small Lunch Room (6\u{2013}8 seats)",
            Self::ServerRoom => "Server Room",
            Self::CoffeeBar => "Coffee Bar",
        }
    }

    /// Nominal footprint in feet, for display next to the count input.
    #[must_use]
    pub const fn dimensions(self) -> &'static str {
        match self {
            Self::CeoOffice => "20 \u{d7} 15",
            Self::PartnerOffice => "15 \u{d7} 15",
            Self::StandardOffice => "15 \u{d7} 10",
            Self::SmallOffice => "12 \u{d7} 10",
            Self::EfficientOffice => "10 \u{d7} 10",
            Self::SupervisorWorkstation => "11 \u{d7} 10",
            Self::StandardCubicle => "6 \u{d7} 8",
            Self::SmallCubicle => "6 \u{d7} 6",
            Self::LargeBoardroom => "25 \u{d7} 16",
            Self::ConferenceRoom => "20 \u{d7} 15",
            Self::SmallMeetingRoom => "15 \u{d7} 15",
            Self::BreakoutRoom => "10 \u{d7} 10",
            Self::LargeReception => "25 \u{d7} 20",
            Self::RegularReception => "20 \u{d7} 15",
            Self::LunchRoom => "20 \u{d7} 15",
            Self::SmallLunchRoom => "15 \u{d7} 15",
            Self::ServerRoom => "5 \u{d7} 5",
            Self::CoffeeBar => "6 \u{d7} 10",
        }
    }

    #[must_use]
    pub const fn area_sqft(self) -> u64 {
        match self {
            Self::CeoOffice => 300,
            Self::PartnerOffice => 225,
            Self::StandardOffice => 150,
            Self::SmallOffice => 120,
            Self::EfficientOffice => 100,
            Self::SupervisorWorkstation => 110,
            Self::StandardCubicle => 48,
            Self::SmallCubicle => 36,
            Self::LargeBoardroom => 400,
            Self::ConferenceRoom => 300,
            Self::SmallMeetingRoom => 225,
            Self::BreakoutRoom => 100,
            Self::LargeReception => 500,
            Self::RegularReception => 300,
            Self::LunchRoom => 300,
            Self::SmallLunchRoom => 225,
            Self::ServerRoom => 25,
            Self::CoffeeBar => 60,
        }
    }

    #[must_use]
    pub const fn group(self) -> SpaceGroup {
        match self {
            Self::CeoOffice
            | Self::PartnerOffice
            | Self::StandardOffice
            | Self::SmallOffice
            | Self::EfficientOffice => SpaceGroup::Offices,
            Self::SupervisorWorkstation | Self::StandardCubicle | Self::SmallCubicle => {
                SpaceGroup::Workstations
            }
            Self::LargeBoardroom
            | Self::ConferenceRoom
            | Self::SmallMeetingRoom
            | Self::BreakoutRoom => SpaceGroup::MeetingRooms,
            Self::LargeReception
            | Self::RegularReception
            | Self::LunchRoom
            | Self::SmallLunchRoom
            | Self::ServerRoom
            | Self::CoffeeBar => SpaceGroup::OtherAreas,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildingClass {
    A,
    B,
    C,
}

impl BuildingClass {
    pub const ALL: [BuildingClass; 3] = [Self::A, Self::B, Self::C];

    /// Asking lease rate in dollars per rentable square foot per year.
    #[must_use]
    pub const fn rate_per_rsf(self) -> u64 {
        match self {
            Self::A => 50,
            Self::B => 30,
            Self::C => 20,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "Class A",
            Self::B => "Class B",
            Self::C => "Class C",
        }
    }
}

/// Count entering the area sum. Negative input clamps to zero; the clamp
/// is idempotent.
#[must_use]
pub const fn clamp_count(count: i64) -> u64 {
    if count < 0 {
        0
    } else {
        count as u64
    }
}

/// Named counts, one per space kind. Unknown kinds fail deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpaceProgram {
    pub counts: BTreeMap<SpaceKind, i64>,
}

impl SpaceProgram {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, kind: SpaceKind, count: i64) -> &mut Self {
        self.counts.insert(kind, count);
        self
    }

    #[must_use]
    pub fn count(&self, kind: SpaceKind) -> u64 {
        clamp_count(self.counts.get(&kind).copied().unwrap_or(0))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        SpaceKind::ALL.iter().all(|kind| self.count(*kind) == 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassCost {
    pub class: BuildingClass,
    pub rate_per_rsf: u64,
    pub annual: u64,
    pub monthly: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpaceEstimate {
    pub subtotal: u64,
    pub circulation_allowance: u64,
    pub usable_area: u64,
    pub gross_up: u64,
    pub rentable_area: u64,
    pub costs: Vec<ClassCost>,
}

#[must_use]
fn round_fraction(base: u64, rate: f64) -> u64 {
    // Counts are bounded well below 2^52, so the f64 round is exact here.
    (base as f64 * rate).round() as u64
}

/// The estimate chain: subtotal, +26% circulation, +19% gross-up, then
/// annual and monthly costs per building class.
#[must_use]
pub fn estimate(program: &SpaceProgram) -> SpaceEstimate {
    let subtotal: u64 = SpaceKind::ALL
        .iter()
        .map(|kind| kind.area_sqft().saturating_mul(program.count(*kind)))
        .fold(0, u64::saturating_add);
    let circulation_allowance = round_fraction(subtotal, CIRCULATION_RATE);
    let usable_area = subtotal.saturating_add(circulation_allowance);
    let gross_up = round_fraction(usable_area, GROSS_UP_RATE);
    let rentable_area = usable_area.saturating_add(gross_up);

    let costs = BuildingClass::ALL
        .iter()
        .map(|class| {
            let annual = rentable_area.saturating_mul(class.rate_per_rsf());
            ClassCost {
                class: *class,
                rate_per_rsf: class.rate_per_rsf(),
                annual,
                monthly: (annual as f64 / 12.0).round() as u64,
            }
        })
        .collect();

    SpaceEstimate {
        subtotal,
        circulation_allowance,
        usable_area,
        gross_up,
        rentable_area,
        costs,
    }
}

/// Lead captured alongside an estimate: contact details plus areas of
/// interest and desired amenities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorLead {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub areas: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl CalculatorLead {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError("Name is required".to_string()));
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError("Invalid email format".to_string()));
        }
        if self.areas.iter().chain(&self.amenities).any(|v| v.trim().is_empty()) {
            return Err(ValidationError(
                "Areas and amenities must be non-empty labels".to_string(),
            ));
        }
        Ok(())
    }
}

/// Lead as persisted: submission, program and priced estimate together.
/// The caller supplies identity and timestamp so this crate stays
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub id: String,
    #[serde(flatten)]
    pub lead: CalculatorLead,
    pub program: SpaceProgram,
    pub estimate: SpaceEstimate,
    pub submitted_at: String,
}

pub const CRATE_NAME: &str = "officedir-calc";
