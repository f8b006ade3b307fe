//! Current logging streak.

use std::collections::BTreeSet;

use chrono::NaiveDate;

/// Counts consecutive logged days ending today or yesterday.
///
/// Several entries on one day count once. The walk starts at the most recent
/// logged day and stops at the first missing day; older runs behind that gap
/// never contribute. Returns 0 when the most recent day is neither `today`
/// nor the day before.
pub fn current_streak(dates: &[NaiveDate], today: NaiveDate) -> u32 {
    let distinct: BTreeSet<NaiveDate> = dates.iter().copied().collect();
    let mut descending = distinct.into_iter().rev();

    let Some(latest) = descending.next() else {
        return 0;
    };

    let yesterday = today.pred_opt();
    if latest != today && Some(latest) != yesterday {
        return 0;
    }

    let mut streak = 1;
    let mut cursor = latest;
    for date in descending {
        if Some(date) != cursor.pred_opt() {
            break;
        }
        streak += 1;
        cursor = date;
    }

    streak
}
