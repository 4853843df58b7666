//! Fixed width clock strings, such as `01:02:03` or `120:00:00.250`.

use crate::{Error, TimeSpan};
use log::debug;

// divisors used to peel seconds into minutes, minutes into hours, and hours
// into days
const STEPS: [i64; 3] = [60, 60, 24];

/// The largest number of components a clock string may have.
pub const MAX_COMPONENTS: usize = STEPS.len() + 1;

/// Render a total number of milliseconds as a colon separated clock string.
///
/// `components` selects how many fields are emitted, starting from seconds:
/// `1` gives seconds, `2` gives minutes and seconds, `3` adds hours and `4`
/// adds days. The most significant field holds everything that remains, so
/// `to_time_string(360_000_000.0, 3, false)` is `"100:00:00"`. Each field is
/// zero padded to two digits.
///
/// The seconds total is taken with `floor`, so negative inputs round toward
/// negative infinity before the fields are split.
///
/// If `add_millis` is set the millisecond remainder is appended after a `.`
/// without padding.
///
/// ```
/// use timespan::to_time_string;
///
/// assert_eq!(to_time_string(3_661_000.0, 3, false).unwrap(), "01:01:01");
/// assert_eq!(to_time_string(90_000.0, 2, false).unwrap(), "01:30");
/// assert!(to_time_string(0.0, 5, false).is_err());
/// ```
pub fn to_time_string(total_ms: f64, components: usize, add_millis: bool) -> Result<String, Error> {
    let format = TimeFormat::new(components)?.with_millis(add_millis);
    Ok(format.format(total_ms))
}

/// A validated clock string layout. Once constructed, formatting with it
/// cannot fail.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TimeFormat {
    components: usize,
    millis: bool,
}

impl Default for TimeFormat {
    /// `hh:mm:ss` without milliseconds.
    fn default() -> Self {
        Self {
            components: 3,
            millis: false,
        }
    }
}

impl TimeFormat {
    pub fn new(components: usize) -> Result<Self, Error> {
        if components > MAX_COMPONENTS {
            debug!("rejecting clock format with {components} components");
            return Err(Error::TooManyComponents {
                requested: components,
                supported: MAX_COMPONENTS,
            });
        }

        Ok(Self {
            components,
            millis: false,
        })
    }

    /// Set whether the millisecond remainder is appended.
    pub fn with_millis(mut self, millis: bool) -> Self {
        self.millis = millis;
        self
    }

    pub fn components(&self) -> usize {
        self.components
    }

    pub fn millis(&self) -> bool {
        self.millis
    }

    pub fn format(&self, total_ms: f64) -> String {
        let mut rest = (total_ms / 1000.0).floor() as i64;
        let mut fields = Vec::with_capacity(self.components);

        for step in STEPS.iter().take(self.components.saturating_sub(1)) {
            fields.push(rest % step);
            rest /= step;
        }

        if self.components > 0 {
            fields.push(rest);
        }

        let mut out = fields
            .iter()
            .rev()
            .map(|field| format!("{field:02}"))
            .collect::<Vec<String>>()
            .join(":");

        if self.millis {
            let millis = (total_ms % 1000.0) as i64;
            out.push_str(&format!(".{millis}"));
        }

        out
    }

    pub fn format_span(&self, span: TimeSpan) -> String {
        self.format(span.as_millis())
    }
}
