// src/domain/status.rs

/// Every status a listing record can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingStatus {
    NewLaunch,
    ReraApproved,
    ReadyToMove,
    PrimeLocation,
    Industrial,
    RetailSpace,
    CoWorking,
}

/// Display label plus the CSS classes for the badge chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub class: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct StatusEntry {
    pub status: ListingStatus,
    pub badge: Badge,
}

/// Closed status → badge mapping for one listing domain.
///
/// Statuses missing from `entries` resolve to `fallback`. There is no error
/// path: an unknown status always renders the fallback badge.
#[derive(Debug, Clone, Copy)]
pub struct StatusTable {
    pub entries: &'static [StatusEntry],
    pub fallback: Badge,
}

impl StatusTable {
    pub fn resolve(&self, status: ListingStatus) -> &Badge {
        self.entries
            .iter()
            .find(|e| e.status == status)
            .map(|e| &e.badge)
            .unwrap_or(&self.fallback)
    }
}

const CHIP: &str = "bg-white text-black";

pub const NEW_LAUNCH: Badge = Badge {
    label: "New Launch",
    class: CHIP,
};

const fn entry(status: ListingStatus, label: &'static str) -> StatusEntry {
    StatusEntry {
        status,
        badge: Badge { label, class: CHIP },
    }
}

/// Badges used by the featured-projects strip.
pub const FEATURED_STATUSES: StatusTable = StatusTable {
    entries: &[
        entry(ListingStatus::NewLaunch, "New Launch"),
        entry(ListingStatus::ReraApproved, "RERA Approved"),
        entry(ListingStatus::ReadyToMove, "Ready to Move"),
    ],
    fallback: NEW_LAUNCH,
};

/// Badges used by the shared listing card (residential and commercial rows).
pub const CARD_STATUSES: StatusTable = StatusTable {
    entries: &[
        entry(ListingStatus::NewLaunch, "New Launch"),
        entry(ListingStatus::ReraApproved, "RERA Approved"),
        entry(ListingStatus::ReadyToMove, "Ready to Move"),
        entry(ListingStatus::PrimeLocation, "Prime Location"),
        entry(ListingStatus::RetailSpace, "Retail Space"),
        entry(ListingStatus::CoWorking, "Co-Working"),
        entry(ListingStatus::Industrial, "Industrial"),
    ],
    fallback: NEW_LAUNCH,
};
