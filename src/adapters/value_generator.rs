use crate::adapters::random::RandomSource;
use crate::adapters::reference_resolver::{ref_name, ReferenceResolver};
use crate::domain::{MockValue, SchemaNode, SchemaType};
use chrono::{Datelike, NaiveDate, SecondsFormat, TimeZone, Utc};
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

pub const DEFAULT_MIN_ITEMS: u64 = 1;
pub const DEFAULT_MAX_ITEMS: u64 = 5;

/// Largest array a single schema node can produce. `minItems`/`maxItems`
/// above this are clamped down to it.
pub const MAX_GENERATED_ITEMS: u64 = 100;

/// Upper bound for plain integers and numbers. Keeps mock output readable;
/// schema `minimum`/`maximum` are not consulted.
pub const MAX_PLAIN_NUMBER: i64 = 9999;

const WORDS_PER_STRING: usize = 4;
const FIRST_YEAR: i64 = 2000;

/// Reference bookkeeping for one generation pass.
///
/// Holds the names of references currently being expanded and the value
/// generated for each reference, keyed by the full pointer. A reference met
/// again while it is still being expanded yields `null`; a reference met after
/// its expansion finished yields a clone of the cached value.
#[derive(Debug, Default)]
pub struct ResolutionState {
    in_progress: HashSet<String>,
    generated: HashMap<String, MockValue>,
}

impl ResolutionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cached(&self, reference: &str) -> Option<&MockValue> {
        self.generated.get(reference)
    }

    pub(crate) fn is_expanding(&self, name: &str) -> bool {
        self.in_progress.contains(name)
    }

    pub(crate) fn cached_count(&self) -> usize {
        self.generated.len()
    }

    fn enter(&mut self, name: &str) -> bool {
        self.in_progress.insert(name.to_string())
    }

    fn leave(&mut self, name: &str) {
        self.in_progress.remove(name);
    }

    fn remember(&mut self, reference: &str, value: MockValue) {
        self.generated.insert(reference.to_string(), value);
    }
}

/// Produces mock values for schema nodes.
pub struct ValueGenerator<'doc, 'r> {
    resolver: ReferenceResolver<'doc>,
    random: &'r mut dyn RandomSource,
}

impl<'doc, 'r> ValueGenerator<'doc, 'r> {
    pub fn new(resolver: ReferenceResolver<'doc>, random: &'r mut dyn RandomSource) -> Self {
        Self { resolver, random }
    }

    /// Generate a value with a fresh [`ResolutionState`].
    pub fn generate_standalone(&mut self, schema: &SchemaNode) -> MockValue {
        let mut state = ResolutionState::new();
        self.generate(schema, &mut state)
    }

    pub fn generate(&mut self, schema: &SchemaNode, state: &mut ResolutionState) -> MockValue {
        if let Some(reference) = schema.reference.as_deref() {
            return self.expand_reference(reference, state);
        }

        match schema.schema_type {
            Some(SchemaType::String) => self.generate_string(schema),
            Some(SchemaType::Integer) => self.generate_integer(schema),
            Some(SchemaType::Number) => {
                MockValue::Number(self.random.float_between(1.0, (MAX_PLAIN_NUMBER + 1) as f64))
            }
            Some(SchemaType::Boolean) => MockValue::Bool(self.random.coin()),
            Some(SchemaType::Array) => self.generate_array(schema, state),
            Some(SchemaType::Object) => self.generate_object(schema, state),
            None => MockValue::Null,
        }
    }

    fn expand_reference(&mut self, reference: &str, state: &mut ResolutionState) -> MockValue {
        if let Some(value) = state.cached(reference) {
            return value.clone();
        }

        let name = ref_name(reference);
        if !state.enter(name) {
            debug!("Reference cycle through '{}', using null", reference);
            return MockValue::Null;
        }

        let value = match self.resolver.resolve(reference) {
            Ok(target) => {
                let value = self.generate(target, state);
                state.remember(reference, value.clone());
                value
            }
            Err(e) => {
                debug!("{}", e);
                MockValue::Null
            }
        };

        state.leave(name);
        value
    }

    fn generate_string(&mut self, schema: &SchemaNode) -> MockValue {
        if !schema.enum_values.is_empty() {
            let idx = self.random.index(schema.enum_values.len());
            return MockValue::String(schema.enum_values[idx].clone());
        }

        if schema.has_format("date-time") {
            return self.generate_date_time();
        }

        let words: Vec<String> = (0..WORDS_PER_STRING).map(|_| self.random.word()).collect();
        MockValue::String(words.join(" "))
    }

    /// ISO-8601 UTC timestamp between 2000 and the current year. Days stop at
    /// 28 so every month is valid.
    fn generate_date_time(&mut self) -> MockValue {
        let current_year = Utc::now().year() as i64;
        let year = self.random.int_between(FIRST_YEAR, current_year) as i32;
        let month = self.random.int_between(1, 12) as u32;
        let day = self.random.int_between(1, 28) as u32;
        let hour = self.random.int_between(0, 23) as u32;
        let minute = self.random.int_between(0, 59) as u32;
        let second = self.random.int_between(0, 59) as u32;

        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .map(|naive| {
                let timestamp = Utc
                    .from_utc_datetime(&naive)
                    .to_rfc3339_opts(SecondsFormat::Secs, true);
                MockValue::String(timestamp)
            })
            .unwrap_or(MockValue::Null)
    }

    fn generate_integer(&mut self, schema: &SchemaNode) -> MockValue {
        if schema.has_format("int64") {
            MockValue::Integer(self.random.any_i64())
        } else {
            MockValue::Integer(self.random.int_between(1, MAX_PLAIN_NUMBER))
        }
    }

    fn generate_array(&mut self, schema: &SchemaNode, state: &mut ResolutionState) -> MockValue {
        let Some(items) = schema.items.as_deref() else {
            debug!("Array schema without items, using null");
            return MockValue::Null;
        };

        let min_items = schema.min_items.unwrap_or(DEFAULT_MIN_ITEMS);
        let max_items = schema.max_items.unwrap_or(DEFAULT_MAX_ITEMS);
        if max_items < min_items {
            warn!(
                "Array schema has maxItems {} below minItems {}, using an empty array",
                max_items, min_items
            );
            return MockValue::Array(Vec::new());
        }

        if max_items > MAX_GENERATED_ITEMS {
            warn!(
                "Array schema bounds {}..={} exceed {}, clamping",
                min_items, max_items, MAX_GENERATED_ITEMS
            );
        }
        let low = min_items.min(MAX_GENERATED_ITEMS) as i64;
        let high = max_items.min(MAX_GENERATED_ITEMS) as i64;
        let count = self.random.int_between(low, high);

        let values = (0..count).map(|_| self.generate(items, state)).collect();
        MockValue::Array(values)
    }

    fn generate_object(&mut self, schema: &SchemaNode, state: &mut ResolutionState) -> MockValue {
        let mut object = IndexMap::new();

        if let Some(properties) = &schema.properties {
            for (name, property) in properties {
                let value = self.generate(property, state);
                object.insert(name.clone(), value);
            }
        }

        MockValue::Object(object)
    }
}
