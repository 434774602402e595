//! Label lookup and the human-readable triangle report.
//!
//! The `triangle` module exposes numbers and a `TriangleType`; turning them
//! into text goes through a `Labels` implementation supplied by the caller.
//! `Catalog` is the bundled one, keyed by symbolic names (`"SideA"`,
//! `"Area"`, `"Equilateral"`, ...) with English and Swedish tables.
//!
//! Failure modes
//! - Missing key in a `Catalog`: the key itself is returned.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::triangle::{Triangle, TriangleType};

/// Report fields that carry a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    SideA,
    SideB,
    SideC,
    TriangleType,
    Area,
    AngleA,
    AngleB,
    AngleC,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::SideA,
        Field::SideB,
        Field::SideC,
        Field::TriangleType,
        Field::Area,
        Field::AngleA,
        Field::AngleB,
        Field::AngleC,
    ];

    #[inline]
    pub fn key(self) -> &'static str {
        match self {
            Field::SideA => "SideA",
            Field::SideB => "SideB",
            Field::SideC => "SideC",
            Field::TriangleType => "TriangleType",
            Field::Area => "Area",
            Field::AngleA => "AngleA",
            Field::AngleB => "AngleB",
            Field::AngleC => "AngleC",
        }
    }
}

/// Display strings for report fields and classifications.
pub trait Labels {
    fn field(&self, field: Field) -> Cow<'_, str>;
    fn kind(&self, kind: TriangleType) -> Cow<'_, str>;
}

impl<T: Labels + ?Sized> Labels for &T {
    fn field(&self, field: Field) -> Cow<'_, str> {
        (**self).field(field)
    }
    fn kind(&self, kind: TriangleType) -> Cow<'_, str> {
        (**self).kind(kind)
    }
}

/// Locales with a bundled catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Sv,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Sv];

    #[inline]
    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Sv => "sv",
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Locale::En => &[
                ("SideA", "Side A"),
                ("SideB", "Side B"),
                ("SideC", "Side C"),
                ("TriangleType", "Triangle type"),
                ("Area", "Area"),
                ("AngleA", "Angle A"),
                ("AngleB", "Angle B"),
                ("AngleC", "Angle C"),
                ("Equilateral", "Equilateral"),
                ("Isosceles", "Isosceles"),
                ("Scalene", "Scalene"),
            ],
            Locale::Sv => &[
                ("SideA", "Sida A"),
                ("SideB", "Sida B"),
                ("SideC", "Sida C"),
                ("TriangleType", "Triangeltyp"),
                ("Area", "Area"),
                ("AngleA", "Vinkel A"),
                ("AngleB", "Vinkel B"),
                ("AngleC", "Vinkel C"),
                ("Equilateral", "Liksidig"),
                ("Isosceles", "Likbent"),
                ("Scalene", "Oliksidig"),
            ],
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Unknown locale tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = Locale::ALL.iter().map(|l| l.tag()).collect();
        write!(
            f,
            "unknown locale '{}' (expected one of: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept region-qualified tags such as "sv-SE".
        let lang = s.split(['-', '_']).next().unwrap_or_default();
        Locale::ALL
            .into_iter()
            .find(|l| l.tag().eq_ignore_ascii_case(lang))
            .ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

/// Key → display string table.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    strings: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with every field and classification label for `locale`.
    pub fn builtin(locale: Locale) -> Self {
        let mut c = Self::new();
        for (k, v) in locale.table() {
            c.insert(*k, *v);
        }
        c
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    fn lookup<'a>(&'a self, key: &'static str) -> Cow<'a, str> {
        match self.get(key) {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Borrowed(key),
        }
    }
}

impl Labels for Catalog {
    fn field(&self, field: Field) -> Cow<'_, str> {
        self.lookup(field.key())
    }
    fn kind(&self, kind: TriangleType) -> Cow<'_, str> {
        self.lookup(kind.key())
    }
}

/// Raw values of a triangle at the time the report was taken.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Report {
    pub sides: [f64; 3],
    pub kind: TriangleType,
    pub area: f64,
    pub angles: [f64; 3],
}

impl Report {
    pub fn new(t: &Triangle) -> Self {
        Self {
            sides: t.sides(),
            kind: t.triangle_type(),
            area: t.area(),
            angles: t.angles(),
        }
    }

    /// Four report lines: sides, type, area, angles (2 decimals, degree sign).
    pub fn render(&self, labels: &impl Labels) -> String {
        let [a, b, c] = self.sides.map(round2);
        let [aa, ab, ac] = self.angles.map(round2);
        format!(
            "{}: {a}, {}: {b}, {}: {c}.\n\
             {}: {}\n\
             {}: {}\n\
             {}: {aa}\u{00b0}, {}: {ab}\u{00b0}, {}: {ac}\u{00b0}.",
            labels.field(Field::SideA),
            labels.field(Field::SideB),
            labels.field(Field::SideC),
            labels.field(Field::TriangleType),
            labels.kind(self.kind),
            labels.field(Field::Area),
            round2(self.area),
            labels.field(Field::AngleA),
            labels.field(Field::AngleB),
            labels.field(Field::AngleC),
        )
    }
}

/// Round half away from zero to two decimals.
#[inline]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalogs_cover_every_key() {
        for locale in Locale::ALL {
            let c = Catalog::builtin(locale);
            for f in Field::ALL {
                assert!(c.get(f.key()).is_some(), "{locale}: missing {}", f.key());
            }
            for k in TriangleType::ALL {
                assert!(c.get(k.key()).is_some(), "{locale}: missing {}", k.key());
            }
        }
    }

    #[test]
    fn missing_key_falls_back_to_key() {
        let c = Catalog::new();
        assert_eq!(c.field(Field::AngleB), "AngleB");
        assert_eq!(c.kind(TriangleType::Scalene), "Scalene");
    }

    #[test]
    fn locale_parsing() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("SV".parse::<Locale>(), Ok(Locale::Sv));
        assert_eq!("sv-SE".parse::<Locale>(), Ok(Locale::Sv));
        let err = "de".parse::<Locale>().unwrap_err();
        assert!(err.to_string().contains("en, sv"));
    }

    #[test]
    fn english_report_for_3_4_5() {
        let t = Triangle::from_sides(3.0, 4.0, 5.0).unwrap();
        let text = Report::new(&t).render(&Catalog::builtin(Locale::En));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "Side A: 3, Side B: 4, Side C: 5.",
                "Triangle type: Scalene",
                "Area: 6",
                "Angle A: 36.87°, Angle B: 53.13°, Angle C: 90°.",
            ]
        );
    }

    #[test]
    fn swedish_report_uses_swedish_labels() {
        let t = Triangle::from_sides(2.0, 2.0, 2.0).unwrap();
        let text = Report::new(&t).render(&Catalog::builtin(Locale::Sv));
        assert!(text.starts_with("Sida A: 2, Sida B: 2, Sida C: 2."));
        assert!(text.contains("Triangeltyp: Liksidig"));
        assert!(text.contains("Area: 1.73"));
        assert!(text.ends_with("Vinkel C: 60°."));
    }

    #[test]
    fn custom_labels_are_injected() {
        struct Upper;
        impl Labels for Upper {
            fn field(&self, field: Field) -> Cow<'_, str> {
                Cow::Owned(field.key().to_uppercase())
            }
            fn kind(&self, kind: TriangleType) -> Cow<'_, str> {
                Cow::Owned(kind.key().to_uppercase())
            }
        }
        let t = Triangle::from_legs(1.0, 1.0).unwrap();
        let text = Report::new(&t).render(&Upper);
        assert!(text.contains("TRIANGLETYPE: ISOSCELES"));
        assert!(text.contains("SIDEC: 1.41"));
    }

    #[test]
    fn rounding_two_decimals() {
        assert_eq!(round2(36.869_897_645), 36.87);
        assert_eq!(round2(2.0), 2.0);
        assert_eq!(round2(-1.005_1), -1.01);
    }
}
