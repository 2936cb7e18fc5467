//! Date helper functions

use chrono::{DateTime, TimeZone};

use crate::content::parse_date;

/// Format a date with a chrono format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "%B %-d, %Y") // -> "January 15, 2024"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format(format).to_string()
}

/// Generate a `<time>` element for a CMS date string
///
/// Unparseable dates are shown verbatim rather than dropped.
pub fn time_tag(date_string: &str, format: &str) -> String {
    let display = match parse_date(date_string) {
        Some(date) => format_date(&date, format),
        None => {
            tracing::debug!("Unparseable date {:?}", date_string);
            date_string.to_string()
        }
    };
    format!(
        r#"<time datetime="{}">{}</time>"#,
        super::html_escape(date_string),
        super::html_escape(&display)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn test_format_date() {
        let date = Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date(&date, "%Y-%m-%d"), "2024-01-15");
        assert_eq!(format_date(&date, "%B %-d, %Y"), "January 15, 2024");
    }

    #[test]
    fn test_time_tag() {
        assert_eq!(
            time_tag("2023-05-03", "%B %-d, %Y"),
            r#"<time datetime="2023-05-03">May 3, 2023</time>"#
        );
        assert_eq!(
            time_tag("someday", "%B %-d, %Y"),
            r#"<time datetime="someday">someday</time>"#
        );
    }
}
