use crate::domain::model::CalendarDate;

/// Number of completed years between `birth` and `today`.
///
/// Trusts its inputs: no range checks are made here.
pub fn age(birth: &CalendarDate, today: &CalendarDate) -> i64 {
    let mut age = i64::from(today.year) - i64::from(birth.year);
    if today.month < birth.month || (today.month == birth.month && today.day < birth.day) {
        age -= 1;
    }
    age
}
