//! Calendar date display utilities.

use std::fmt;

use jiff::civil::Date;

/// A wrapper around [`Date`] that formats it for human reading via the
/// `Display` trait.
///
/// Plan dates are civil calendar days with no time component, so the
/// display format is simply `DD Mon YYYY` (for example `01 Jan 2024`),
/// which stays unambiguous across locales that disagree on `MM/DD`.
pub struct CalendarDay<'a>(pub &'a Date);

impl fmt::Display for CalendarDay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%d %b %Y"))
    }
}
