//! Compact currency rendering for cards and comparison tables.

/// Formats a whole-dollar amount the way the dashboard cards show it.
///
/// - `>= 1,000,000` → millions with one decimal (`$5.0M`)
/// - `>= 1,000` → thousands with no decimals (`$250K`)
/// - otherwise the plain amount (`$900`)
///
/// Halves round away from zero (`$1.25M` shows as `$1.3M`, `$2,500` as `$3K`).
pub fn format_compact_currency(amount: u64) -> String {
    if amount >= 1_000_000 {
        let tenths = div_round_half_up(amount, 100_000);
        return format!("${}.{}M", tenths / 10, tenths % 10);
    }
    if amount >= 1_000 {
        return format!("${}K", div_round_half_up(amount, 1_000));
    }
    format!("${}", amount)
}

fn div_round_half_up(amount: u64, unit: u64) -> u64 {
    amount / unit + u64::from(amount % unit >= unit / 2)
}
