use jiff::{Timestamp, Zoned, civil, tz::TimeZone};

use crate::i18n::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    Long,
    Short,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HourCycle {
    /// `2:05 PM`
    H12,
    /// `14:05`
    H23,
}

/// Which parts of a date to render and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    pub month: MonthStyle,
    /// `None` renders the date only.
    pub time: Option<HourCycle>,
}

impl DateFormat {
    /// Long month name with a 24-hour time, used for the featured call.
    pub const FULL: Self = Self {
        month: MonthStyle::Long,
        time: Some(HourCycle::H23),
    };

    /// Short month name and no time of day, used for list rows.
    pub const COMPACT: Self = Self {
        month: MonthStyle::Short,
        time: None,
    };
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::FULL
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid event date {input:?}: {source}")]
pub struct DateFormatError {
    input: String,
    #[source]
    source: jiff::Error,
}

/// The viewer's time zone. Compared by name so it can live in component
/// props.
#[derive(Debug, Clone)]
pub struct ViewerTimeZone(pub TimeZone);

impl ViewerTimeZone {
    pub fn system() -> Self {
        Self(TimeZone::system())
    }

    pub fn utc() -> Self {
        Self(TimeZone::UTC)
    }

    /// IANA name shown next to the featured call, e.g. `Europe/Berlin`.
    pub fn label(&self) -> &str {
        self.0.iana_name().unwrap_or("UTC")
    }
}

impl PartialEq for ViewerTimeZone {
    fn eq(&self, other: &Self) -> bool {
        self.0.iana_name() == other.0.iana_name()
    }
}

/// Parse an event date into the viewer's zone.
///
/// Dates carrying an offset (`Z`, `+02:00`) are instants. Dates without one
/// are read as wall-clock time in `tz`, and a bare date as midnight.
pub fn parse_event_date(
    date: &str,
    tz: &TimeZone,
) -> Result<Zoned, DateFormatError> {
    let to_error = |source| DateFormatError {
        input: date.to_string(),
        source,
    };

    if let Ok(timestamp) = date.parse::<Timestamp>() {
        return Ok(timestamp.to_zoned(tz.clone()));
    }
    date.parse::<civil::DateTime>()
        .and_then(|datetime| datetime.to_zoned(tz.clone()))
        .map_err(to_error)
}

/// Format an event date for `language` in the viewer's zone.
pub fn format_event_date(
    date: &str,
    language: Language,
    format: DateFormat,
    tz: &TimeZone,
) -> Result<String, DateFormatError> {
    let zoned = parse_event_date(date, tz)?;
    Ok(format_zoned(&zoned, language, format))
}

/// Like [`format_event_date`] but never fails: a date that can't be parsed is
/// shown as it arrived.
pub fn render_event_date(
    date: &str,
    language: Language,
    format: DateFormat,
    tz: &TimeZone,
) -> String {
    format_event_date(date, language, format, tz).unwrap_or_else(|e| {
        tracing::warn!("{e}");
        date.to_string()
    })
}

pub fn format_zoned(
    zoned: &Zoned,
    language: Language,
    format: DateFormat,
) -> String {
    let month_index = (zoned.month() - 1) as usize;
    let month = match format.month {
        MonthStyle::Long => long_months(language)[month_index],
        MonthStyle::Short => short_months(language)[month_index],
    };
    let day = zoned.day();
    let year = zoned.year();

    let date = match (language, format.month) {
        (Language::En, _) => format!("{month} {day}, {year}"),
        (Language::De, _) => format!("{day}. {month} {year}"),
        (Language::Pt, _) | (Language::Es, MonthStyle::Long) => {
            format!("{day} de {month} de {year}")
        }
        (Language::Es, MonthStyle::Short)
        | (Language::Fr | Language::It | Language::Nl, _) => {
            format!("{day} {month} {year}")
        }
    };

    let Some(cycle) = format.time else {
        return date;
    };
    let time = match cycle {
        HourCycle::H23 => format!("{:02}:{:02}", zoned.hour(), zoned.minute()),
        HourCycle::H12 => {
            let suffix = if zoned.hour() < 12 { "AM" } else { "PM" };
            let hour = match zoned.hour() % 12 {
                0 => 12,
                h => h,
            };
            format!("{hour}:{:02} {suffix}", zoned.minute())
        }
    };

    // Long dates read as a sentence in most languages, short ones as a list.
    let joiner = match (format.month, language) {
        (MonthStyle::Short, _) => ", ",
        (MonthStyle::Long, Language::En) => " at ",
        (MonthStyle::Long, Language::De) => " um ",
        (MonthStyle::Long, Language::Es) => " a las ",
        (MonthStyle::Long, Language::Fr) => " à ",
        (MonthStyle::Long, Language::It) => " alle ore ",
        (MonthStyle::Long, Language::Pt) => " às ",
        (MonthStyle::Long, Language::Nl) => " om ",
    };
    format!("{date}{joiner}{time}")
}

fn long_months(language: Language) -> &'static [&'static str; 12] {
    match language {
        Language::En => &[
            "January", "February", "March", "April", "May", "June", "July",
            "August", "September", "October", "November", "December",
        ],
        Language::De => &[
            "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli",
            "August", "September", "Oktober", "November", "Dezember",
        ],
        Language::Es => &[
            "enero", "febrero", "marzo", "abril", "mayo", "junio", "julio",
            "agosto", "septiembre", "octubre", "noviembre", "diciembre",
        ],
        Language::Fr => &[
            "janvier", "février", "mars", "avril", "mai", "juin", "juillet",
            "août", "septembre", "octobre", "novembre", "décembre",
        ],
        Language::It => &[
            "gennaio", "febbraio", "marzo", "aprile", "maggio", "giugno",
            "luglio", "agosto", "settembre", "ottobre", "novembre",
            "dicembre",
        ],
        Language::Pt => &[
            "janeiro", "fevereiro", "março", "abril", "maio", "junho",
            "julho", "agosto", "setembro", "outubro", "novembro", "dezembro",
        ],
        Language::Nl => &[
            "januari", "februari", "maart", "april", "mei", "juni", "juli",
            "augustus", "september", "oktober", "november", "december",
        ],
    }
}

fn short_months(language: Language) -> &'static [&'static str; 12] {
    match language {
        Language::En => &[
            "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep",
            "Oct", "Nov", "Dec",
        ],
        Language::De => &[
            "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.",
            "Sept.", "Okt.", "Nov.", "Dez.",
        ],
        Language::Es => &[
            "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept",
            "oct", "nov", "dic",
        ],
        Language::Fr => &[
            "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août",
            "sept.", "oct.", "nov.", "déc.",
        ],
        Language::It => &[
            "gen", "feb", "mar", "apr", "mag", "giu", "lug", "ago", "set",
            "ott", "nov", "dic",
        ],
        Language::Pt => &[
            "jan.", "fev.", "mar.", "abr.", "mai.", "jun.", "jul.", "ago.",
            "set.", "out.", "nov.", "dez.",
        ],
        Language::Nl => &[
            "jan", "feb", "mrt", "apr", "mei", "jun", "jul", "aug", "sep",
            "okt", "nov", "dec",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::tz;

    const CALL: &str = "2024-06-01T10:00:00Z";

    fn utc_format(language: Language, format: DateFormat) -> String {
        format_event_date(CALL, language, format, &TimeZone::UTC).unwrap()
    }

    #[test]
    fn test_full_and_compact_english() {
        assert_eq!(
            utc_format(Language::En, DateFormat::FULL),
            "June 1, 2024 at 10:00"
        );
        assert_eq!(
            utc_format(Language::En, DateFormat::COMPACT),
            "Jun 1, 2024"
        );
        assert_eq!(DateFormat::default(), DateFormat::FULL);
    }

    #[test]
    fn test_other_languages() {
        assert_eq!(
            utc_format(Language::De, DateFormat::FULL),
            "1. Juni 2024 um 10:00"
        );
        assert_eq!(
            utc_format(Language::Es, DateFormat::FULL),
            "1 de junio de 2024 a las 10:00"
        );
        assert_eq!(utc_format(Language::Es, DateFormat::COMPACT), "1 jun 2024");
        assert_eq!(
            format_event_date(
                "2024-09-08T10:00:00Z",
                Language::Es,
                DateFormat::COMPACT,
                &TimeZone::UTC
            )
            .unwrap(),
            "8 sept 2024"
        );
        assert_eq!(
            utc_format(Language::Fr, DateFormat::COMPACT),
            "1 juin 2024"
        );
        assert_eq!(
            utc_format(Language::Pt, DateFormat::COMPACT),
            "1 de jun. de 2024"
        );
    }

    #[test]
    fn test_converts_to_viewer_zone() {
        let tokyo_ish = TimeZone::fixed(tz::offset(9));
        let formatted = format_event_date(
            "2024-06-01T20:30:00Z",
            Language::En,
            DateFormat::FULL,
            &tokyo_ish,
        )
        .unwrap();
        assert_eq!(formatted, "June 2, 2024 at 05:30");
    }

    #[test]
    fn test_explicit_offset() {
        let formatted = format_event_date(
            "2024-06-01T10:00:00+02:00",
            Language::En,
            DateFormat::FULL,
            &TimeZone::UTC,
        )
        .unwrap();
        assert_eq!(formatted, "June 1, 2024 at 08:00");
    }

    #[test]
    fn test_local_datetime_without_offset() {
        let minus_five = TimeZone::fixed(tz::offset(-5));
        let formatted = format_event_date(
            "2024-12-31T23:15:00",
            Language::En,
            DateFormat::FULL,
            &minus_five,
        )
        .unwrap();
        assert_eq!(formatted, "December 31, 2024 at 23:15");
    }

    #[test]
    fn test_bare_date_is_midnight() {
        let minus_five = TimeZone::fixed(tz::offset(-5));
        assert_eq!(
            format_event_date(
                "2024-06-08",
                Language::En,
                DateFormat::COMPACT,
                &minus_five
            )
            .unwrap(),
            "Jun 8, 2024"
        );
        assert_eq!(
            format_event_date(
                "2024-06-08",
                Language::En,
                DateFormat::FULL,
                &minus_five
            )
            .unwrap(),
            "June 8, 2024 at 00:00"
        );
    }

    #[test]
    fn test_twelve_hour_clock() {
        let format = DateFormat {
            month: MonthStyle::Short,
            time: Some(HourCycle::H12),
        };
        assert_eq!(
            format_event_date(
                "2024-06-01T00:05:00Z",
                Language::En,
                format,
                &TimeZone::UTC
            )
            .unwrap(),
            "Jun 1, 2024, 12:05 AM"
        );
        assert_eq!(
            format_event_date(
                "2024-06-01T13:45:00Z",
                Language::En,
                format,
                &TimeZone::UTC
            )
            .unwrap(),
            "Jun 1, 2024, 1:45 PM"
        );
    }

    #[test]
    fn test_malformed_date() {
        let result = format_event_date(
            "next tuesday",
            Language::En,
            DateFormat::FULL,
            &TimeZone::UTC,
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("next tuesday"));

        assert_eq!(
            render_event_date(
                "next tuesday",
                Language::En,
                DateFormat::COMPACT,
                &TimeZone::UTC
            ),
            "next tuesday"
        );
    }

    #[test]
    fn test_viewer_time_zone_label() {
        assert_eq!(ViewerTimeZone::utc().label(), "UTC");
        assert_eq!(ViewerTimeZone::utc(), ViewerTimeZone::utc());
    }
}
