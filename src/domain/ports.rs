use crate::domain::model::CalendarDate;

/// Source of the current local calendar date.
///
/// Everything that needs "today" receives a `Clock`, so tests can pin the
/// date instead of depending on the wall clock.
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> CalendarDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> CalendarDate {
        (**self).today()
    }
}
