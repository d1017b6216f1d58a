//! Section splitting for the raw report text.
//!
//! A report is a sequence of line runs separated by dash rule lines. The
//! first run is a three-line header; the remaining runs pair up as
//! (title, content) and are looked up by a normalized key.

use chrono::NaiveDateTime;
use regex::Regex;

use crate::constants::{GENERATED_ON_FORMAT, REPORT_TITLE, SECTION_SEPARATOR_PREFIX};
use crate::ordered_map::OrderedMap;
use crate::{Error, Result};

/// Report text split into its header timestamp and keyed sections.
#[derive(Debug)]
pub struct SplitReport {
    pub generated_on: NaiveDateTime,
    pub sections: Sections,
}

/// Section lookup table keyed by normalized titles.
#[derive(Debug, Default)]
pub struct Sections(OrderedMap<Vec<String>>);

impl Sections {
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// Look up a section the format requires; absence is a fatal error.
    pub fn required(&self, key: &str) -> Result<&[String]> {
        self.get(key)
            .ok_or_else(|| Error::format(key, "required section is missing"))
    }
}

/// Normalize a section title or column header into a lookup key: runs of
/// whitespace collapse to a single underscore, `.` and `:` are stripped,
/// and the result is lower-cased.
pub fn keyify(text: &str) -> String {
    let whitespace = Regex::new(r"\s+").expect("static pattern");
    whitespace
        .replace_all(text, "_")
        .replace(['.', ':'], "")
        .to_lowercase()
}

/// Split raw report text on separator rule lines and build the section
/// table from the (title, content) run pairs that follow the header.
pub fn split_report(text: &str) -> Result<SplitReport> {
    let mut runs: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    for line in text.lines() {
        if line.starts_with(SECTION_SEPARATOR_PREFIX) {
            if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.to_string());
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    let mut iter = runs.into_iter();
    let header = iter
        .next()
        .ok_or_else(|| Error::format("header", "report is empty"))?;
    let generated_on = parse_header(&header)?;

    let mut sections = OrderedMap::new();
    let mut iter = iter.peekable();
    while let Some(title_run) = iter.next() {
        let Some(content) = iter.next() else {
            return Err(Error::format(
                "sections",
                format!("section '{}' has no content run", title_run[0].trim()),
            ));
        };
        sections.insert(keyify(title_run[0].trim()), content);
    }

    Ok(SplitReport {
        generated_on,
        sections: Sections(sections),
    })
}

/// Validate the three-line header block and extract the generation
/// timestamp from the trailing tokens of its last line.
fn parse_header(lines: &[String]) -> Result<NaiveDateTime> {
    if lines.len() != 3 {
        return Err(Error::format(
            "header",
            format!("expected exactly 3 header lines, found {}", lines.len()),
        ));
    }
    let title = &lines[1];
    if title != REPORT_TITLE {
        return Err(Error::format(
            "header",
            format!("unknown title '{title}' (expected '{REPORT_TITLE}')"),
        ));
    }

    let tokens: Vec<&str> = lines[2].split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(Error::format(
            "header",
            format!("no timestamp on generation line '{}'", lines[2]),
        ));
    }
    let stamp = tokens[tokens.len() - 3..].join(" ");
    NaiveDateTime::parse_from_str(&stamp, GENERATED_ON_FORMAT)
        .map_err(|e| Error::format("header", format!("bad timestamp '{stamp}': {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn report(header: &str) -> String {
        format!(
            "{header}\n\
             ----------------\n\
             General information\n\
             ----------------\n\
             free text\n"
        )
    }

    const GOOD_HEADER: &str = "meta line\nRadio Mobile\nReport generated at 13:56:45 on 04-14-2010";

    #[test]
    fn keyify_normalizes_titles() {
        assert_eq!(keyify("Active units information"), "active_units_information");
        assert_eq!(keyify("Net members:"), "net_members");
        assert_eq!(keyify("Rx thr."), "rx_thr");
        assert_eq!(keyify("Ant.  G."), "ant_g");
    }

    #[test]
    fn splits_header_and_sections() {
        let split = split_report(&report(GOOD_HEADER)).unwrap();
        assert_eq!(
            split.generated_on.date(),
            NaiveDate::from_ymd_opt(2010, 4, 14).unwrap()
        );
        assert_eq!(split.generated_on.time().hour(), 13);
        assert_eq!(
            split.sections.required("general_information").unwrap(),
            &["free text".to_string()]
        );
    }

    #[test]
    fn rejects_short_header() {
        let err = split_report(&report("just one line\nRadio Mobile")).unwrap_err();
        assert!(matches!(err, Error::Format { .. }));
    }

    #[test]
    fn rejects_wrong_title() {
        let header = "meta\nSome Other Tool\ngenerated 13:56:45 on 04-14-2010";
        let err = split_report(&report(header)).unwrap_err();
        assert!(err.to_string().contains("Some Other Tool"));
    }

    #[test]
    fn rejects_bad_timestamp() {
        let header = "meta\nRadio Mobile\ngenerated 13:56:45 on 2010-04-14";
        assert!(split_report(&report(header)).is_err());
    }

    #[test]
    fn rejects_dangling_title_run() {
        let text = format!("{GOOD_HEADER}\n---\ntitle without content\n");
        assert!(split_report(&text).is_err());
    }

    #[test]
    fn missing_required_section_is_fatal() {
        let split = split_report(&report(GOOD_HEADER)).unwrap();
        let err = split.sections.required("active_units_information").unwrap_err();
        assert!(err.to_string().contains("active_units_information"));
    }
}
