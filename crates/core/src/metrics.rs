use crate::{ENTRIES_PER_VIAL, PeriodTotals, VIAL_UNIT_COST, VialUsage, WasteEntry};

pub fn period_totals(entries: &[WasteEntry]) -> PeriodTotals {
    entries
        .iter()
        .fold(PeriodTotals::default(), |mut totals, entry| {
            totals.total_ml += entry.amount_ml;
            totals.total_cost += entry.cost_dollars;
            totals
        })
}

pub fn vial_usage(entry_count: usize) -> VialUsage {
    let total_entries = entry_count as u64;
    let used = total_entries / ENTRIES_PER_VIAL;
    VialUsage {
        used,
        cost: used as f64 * VIAL_UNIT_COST,
        total_entries,
    }
}

/// Waste cost plus vial cost; the two are billed side by side.
pub fn billed_total(totals: &PeriodTotals, vials: &VialUsage) -> f64 {
    totals.total_cost + vials.cost
}
