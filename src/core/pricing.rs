use crate::models::PriceTier;

/// Per-person spend shown under a venue's price tier
pub fn price_range_text(tier: PriceTier) -> &'static str {
    match tier {
        PriceTier::Free => "Free",
        PriceTier::Inexpensive => "$0-25 per person",
        PriceTier::Moderate => "$25-50 per person",
        PriceTier::Expensive => "$50-100 per person",
        PriceTier::Luxury => "$100+ per person",
    }
}

/// Short label used by the budget filter chips
pub fn price_range_label(tier: PriceTier) -> &'static str {
    match tier {
        PriceTier::Free => "Free",
        PriceTier::Inexpensive => "$ ($0-25)",
        PriceTier::Moderate => "$$ ($25-50)",
        PriceTier::Expensive => "$$$ ($50-100)",
        PriceTier::Luxury => "$$$$ ($100+)",
    }
}

pub fn ticket_text(requires_ticket: bool) -> &'static str {
    if requires_ticket {
        "Tickets Required"
    } else {
        "No Tickets Needed"
    }
}
