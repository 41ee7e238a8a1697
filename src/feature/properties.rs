use serde_json::{Map, Value};

/// A property value as it appears in the source file: a JSON number or text.
/// Text may carry thousands separators or a trailing percent sign.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Returns None for null, booleans, and nested values.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(RawValue::Number),
            Value::String(s) => Some(RawValue::Text(s.clone())),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Tolerant numeric coercion. Non-finite results count as missing.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(v) => v.is_finite().then_some(*v),
            RawValue::Text(text) => parse_number(text),
        }
    }
}

impl From<f64> for RawValue {
    fn from(v: f64) -> Self { RawValue::Number(v) }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self { RawValue::Text(s.to_string()) }
}

/// Parse `"1,234"`, `"35.2%"`, `" 17 "` and friends. Empty text and `null` are missing.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim().trim_matches(|c| c == '"' || c == '\'').trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("null") {
        return None;
    }

    let unsuffixed = trimmed.strip_suffix('%').unwrap_or(trimmed);
    let cleaned: String = unsuffixed.chars().filter(|&c| c != ',').collect();
    cleaned.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Demographic fields of a feature. Every field is optional; nothing here is
/// validated beyond recognizing the JSON value type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    pub population: Option<RawValue>,
    pub households: Option<RawValue>,
    pub latino: Option<RawValue>,
    pub white: Option<RawValue>,
    pub black: Option<RawValue>,
    pub asian: Option<RawValue>,
    pub other: Option<RawValue>,
    pub native: Option<RawValue>,
    pub foreign: Option<RawValue>,
    pub foreign_born_pct: Option<RawValue>,
    pub latino_pct: Option<RawValue>,
}

// Source column names, most specific first.
const POPULATION: &[&str] = &["Population", "population", "POPULATION"];
const HOUSEHOLDS: &[&str] = &["Households", "households"];
const LATINO: &[&str] = &["Latino", "latino"];
const WHITE: &[&str] = &["White", "white"];
const BLACK: &[&str] = &["Black", "black"];
const ASIAN: &[&str] = &["Asian", "asian"];
const OTHER: &[&str] = &["Other", " Other ", "other"];
const NATIVE: &[&str] = &["Native", "native"];
const FOREIGN: &[&str] = &["Foreign", "Foreign_Born", "Foreign Born - Total Pop", "foreign"];
const FOREIGN_BORN_PCT: &[&str] = &["Foreign Born (%)", "foreign_born_pct"];
const LATINO_PCT: &[&str] = &["Latino Percent", "latino_pct"];

impl Properties {
    /// Build the typed record from a GeoJSON property object.
    pub fn from_json(props: &Map<String, Value>) -> Self {
        let field = |keys: &[&str]| {
            keys.iter()
                .filter_map(|key| props.get(*key))
                .find_map(RawValue::from_json)
        };

        Self {
            population: field(POPULATION),
            households: field(HOUSEHOLDS),
            latino: field(LATINO),
            white: field(WHITE),
            black: field(BLACK),
            asian: field(ASIAN),
            other: field(OTHER),
            native: field(NATIVE),
            foreign: field(FOREIGN),
            foreign_born_pct: field(FOREIGN_BORN_PCT),
            latino_pct: field(LATINO_PCT),
        }
    }

    #[inline] pub fn population(&self) -> Option<f64> { number(&self.population) }
    #[inline] pub fn households(&self) -> Option<f64> { number(&self.households) }
    #[inline] pub fn latino(&self) -> Option<f64> { number(&self.latino) }
    #[inline] pub fn white(&self) -> Option<f64> { number(&self.white) }
    #[inline] pub fn black(&self) -> Option<f64> { number(&self.black) }
    #[inline] pub fn asian(&self) -> Option<f64> { number(&self.asian) }
    #[inline] pub fn other(&self) -> Option<f64> { number(&self.other) }
    #[inline] pub fn native(&self) -> Option<f64> { number(&self.native) }
    #[inline] pub fn foreign(&self) -> Option<f64> { number(&self.foreign) }
    #[inline] pub fn foreign_born_pct(&self) -> Option<f64> { number(&self.foreign_born_pct) }
    #[inline] pub fn latino_pct(&self) -> Option<f64> { number(&self.latino_pct) }
}

#[inline]
fn number(field: &Option<RawValue>) -> Option<f64> {
    field.as_ref().and_then(RawValue::as_number)
}
