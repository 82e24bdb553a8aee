use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

use super::model::{Ability, MetricKey, Metrics, Record};
use crate::error::NormalizeError;

// ---------------------------------------------------------------------------
// JSON records (catalogue-service detail shape)
// ---------------------------------------------------------------------------

/// Shape one raw catalogue-service record into a [`Record`].
///
/// ```json
/// {
///   "id": 6, "name": "charizard", "height": 17, "weight": 905,
///   "base_experience": 267,
///   "types":     [{ "slot": 1, "type": { "name": "fire" } }, ...],
///   "stats":     [{ "base_stat": 78, "stat": { "name": "hp" } }, ...],
///   "abilities": [{ "ability": { "name": "blaze" }, "is_hidden": false }, ...],
///   "moves":     [{ "move": { "name": "mega-punch" } }, ...]
/// }
/// ```
pub fn normalize_json(raw: &JsonValue) -> Result<Record, NormalizeError> {
    let obj = raw.as_object().ok_or(NormalizeError::NotAnObject)?;

    let id = json_id(obj)?;
    let name = json_name(obj)?;
    let categories = json_categories(obj)?;
    let metrics = json_metrics(obj)?;
    let height_deci = required_u32(obj, "height")?;
    let weight_deci = required_u32(obj, "weight")?;

    let base_experience = match obj.get("base_experience") {
        None | Some(JsonValue::Null) => None,
        Some(v) => Some(as_u32(v, "base_experience")?),
    };

    let abilities = match obj.get("abilities") {
        None => Vec::new(),
        Some(v) => json_list(v, "abilities")?
            .iter()
            .map(json_ability)
            .collect::<Result<_, _>>()?,
    };

    let move_names = match obj.get("moves") {
        None => Vec::new(),
        Some(v) => json_list(v, "moves")?
            .iter()
            .map(|m| nested_name(m, "move", "moves"))
            .collect::<Result<_, _>>()?,
    };

    Ok(Record {
        id,
        name,
        categories,
        metrics,
        height_deci,
        weight_deci,
        base_experience,
        abilities,
        move_names,
    })
}

fn json_id(obj: &Map<String, JsonValue>) -> Result<u32, NormalizeError> {
    let v = obj.get("id").ok_or(NormalizeError::MissingField("id"))?;
    let id = v
        .as_i64()
        .ok_or_else(|| NormalizeError::wrong_shape("id", "integer"))?;
    if id <= 0 {
        return Err(NormalizeError::InvalidId(id));
    }
    u32::try_from(id).map_err(|_| NormalizeError::wrong_shape("id", "32-bit integer"))
}

fn json_name(obj: &Map<String, JsonValue>) -> Result<String, NormalizeError> {
    let name = obj
        .get("name")
        .ok_or(NormalizeError::MissingField("name"))?
        .as_str()
        .ok_or_else(|| NormalizeError::wrong_shape("name", "string"))?;
    clean_name(name)
}

/// Categories ordered by `slot` when every entry carries one, input order otherwise.
fn json_categories(obj: &Map<String, JsonValue>) -> Result<Vec<String>, NormalizeError> {
    let types = json_list(
        obj.get("types").ok_or(NormalizeError::MissingField("types"))?,
        "types",
    )?;

    let mut slotted: Vec<(Option<i64>, String)> = types
        .iter()
        .map(|t| {
            let slot = t.get("slot").and_then(JsonValue::as_i64);
            nested_name(t, "type", "types").map(|name| (slot, name))
        })
        .collect::<Result<_, _>>()?;

    if slotted.iter().all(|(slot, _)| slot.is_some()) {
        slotted.sort_by_key(|(slot, _)| *slot);
    }

    let categories: Vec<String> = slotted.into_iter().map(|(_, name)| name).collect();
    if categories.is_empty() {
        return Err(NormalizeError::NoCategories);
    }
    Ok(categories)
}

fn json_metrics(obj: &Map<String, JsonValue>) -> Result<Metrics, NormalizeError> {
    let stats = json_list(
        obj.get("stats").ok_or(NormalizeError::MissingField("stats"))?,
        "stats",
    )?;

    let mut builder = MetricsBuilder::default();
    for stat in stats {
        let name = nested_name(stat, "stat", "stats")?;
        let value = stat
            .get("base_stat")
            .ok_or(NormalizeError::MissingField("base_stat"))
            .and_then(|v| as_u32(v, "base_stat"))?;
        builder.set(&name, value)?;
    }
    builder.finish()
}

fn json_ability(v: &JsonValue) -> Result<Ability, NormalizeError> {
    let name = nested_name(v, "ability", "abilities")?;
    let hidden = match v.get("is_hidden") {
        None | Some(JsonValue::Null) => false,
        Some(h) => h
            .as_bool()
            .ok_or_else(|| NormalizeError::wrong_shape("is_hidden", "boolean"))?,
    };
    Ok(Ability { name, hidden })
}

// -- JSON helpers --

fn json_list<'a>(v: &'a JsonValue, field: &str) -> Result<&'a Vec<JsonValue>, NormalizeError> {
    v.as_array()
        .ok_or_else(|| NormalizeError::wrong_shape(field, "array"))
}

/// Read `entry[outer].name`, e.g. `{"type": {"name": "fire"}}`.
fn nested_name(entry: &JsonValue, outer: &str, field: &str) -> Result<String, NormalizeError> {
    entry
        .get(outer)
        .and_then(|inner| inner.get("name"))
        .and_then(JsonValue::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| NormalizeError::wrong_shape(field, "entries with a non-empty nested name"))
}

fn required_u32(obj: &Map<String, JsonValue>, field: &'static str) -> Result<u32, NormalizeError> {
    let v = obj.get(field).ok_or(NormalizeError::MissingField(field))?;
    as_u32(v, field)
}

fn as_u32(v: &JsonValue, field: &str) -> Result<u32, NormalizeError> {
    v.as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| NormalizeError::wrong_shape(field, "non-negative integer"))
}

fn clean_name(name: &str) -> Result<String, NormalizeError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(NormalizeError::EmptyName);
    }
    Ok(name.to_lowercase())
}

// ---------------------------------------------------------------------------
// Metric collection shared by both input shapes
// ---------------------------------------------------------------------------

#[derive(Default)]
struct MetricsBuilder {
    values: [Option<u32>; 6],
}

impl MetricsBuilder {
    fn set(&mut self, api_name: &str, value: u32) -> Result<(), NormalizeError> {
        let key = MetricKey::from_api_name(api_name)
            .ok_or_else(|| NormalizeError::UnknownMetric(api_name.to_string()))?;
        let slot = &mut self.values[key.index()];
        if slot.is_some() {
            return Err(NormalizeError::DuplicateMetric(key.api_name()));
        }
        *slot = Some(value);
        Ok(())
    }

    fn finish(self) -> Result<Metrics, NormalizeError> {
        let present = self.values.iter().filter(|v| v.is_some()).count();
        if present != 6 {
            return Err(NormalizeError::MetricCount(present));
        }
        Ok(Metrics::new(self.values.map(|v| v.unwrap_or_default())))
    }
}

// ---------------------------------------------------------------------------
// CSV rows
// ---------------------------------------------------------------------------

/// One CSV row. List columns are semicolon-separated; a trailing `*` on an
/// ability marks it hidden.
#[derive(Debug, Clone, Deserialize)]
pub struct CsvRecord {
    pub id: i64,
    pub name: String,
    pub types: String,
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    #[serde(rename = "special-attack")]
    pub special_attack: i64,
    #[serde(rename = "special-defense")]
    pub special_defense: i64,
    pub speed: i64,
    pub height: i64,
    pub weight: i64,
    #[serde(default)]
    pub base_experience: Option<i64>,
    #[serde(default)]
    pub abilities: String,
    #[serde(default)]
    pub moves: String,
}

/// Shape one CSV row into a [`Record`].
pub fn normalize_csv(row: &CsvRecord) -> Result<Record, NormalizeError> {
    if row.id <= 0 {
        return Err(NormalizeError::InvalidId(row.id));
    }
    let id = u32::try_from(row.id).map_err(|_| NormalizeError::wrong_shape("id", "32-bit integer"))?;
    let name = clean_name(&row.name)?;

    let categories = split_list(&row.types);
    if categories.is_empty() {
        return Err(NormalizeError::NoCategories);
    }

    let mut builder = MetricsBuilder::default();
    for (key, value) in [
        (MetricKey::Hp, row.hp),
        (MetricKey::Attack, row.attack),
        (MetricKey::Defense, row.defense),
        (MetricKey::SpecialAttack, row.special_attack),
        (MetricKey::SpecialDefense, row.special_defense),
        (MetricKey::Speed, row.speed),
    ] {
        builder.set(key.api_name(), csv_u32(value, key.api_name())?)?;
    }

    let base_experience = row
        .base_experience
        .map(|v| csv_u32(v, "base_experience"))
        .transpose()?;

    let abilities = split_list(&row.abilities)
        .into_iter()
        .map(|a| match a.strip_suffix('*') {
            Some(name) => Ability {
                name: name.to_string(),
                hidden: true,
            },
            None => Ability {
                name: a,
                hidden: false,
            },
        })
        .collect();

    Ok(Record {
        id,
        name,
        categories,
        metrics: builder.finish()?,
        height_deci: csv_u32(row.height, "height")?,
        weight_deci: csv_u32(row.weight, "weight")?,
        base_experience,
        abilities,
        move_names: split_list(&row.moves),
    })
}

fn split_list(s: &str) -> Vec<String> {
    s.split(';')
        .map(str::trim)
        .filter(|tok| !tok.is_empty())
        .map(str::to_string)
        .collect()
}

fn csv_u32(v: i64, field: &str) -> Result<u32, NormalizeError> {
    u32::try_from(v).map_err(|_| NormalizeError::wrong_shape(field, "non-negative integer"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn stats(values: [u64; 6]) -> JsonValue {
        JsonValue::Array(
            MetricKey::ALL
                .iter()
                .zip(values)
                .map(|(k, v)| json!({ "base_stat": v, "stat": { "name": k.api_name() } }))
                .collect(),
        )
    }

    fn charizard() -> JsonValue {
        json!({
            "id": 6,
            "name": "Charizard",
            "height": 17,
            "weight": 905,
            "base_experience": 267,
            "types": [
                { "slot": 2, "type": { "name": "flying" } },
                { "slot": 1, "type": { "name": "fire" } }
            ],
            "stats": stats([78, 84, 78, 109, 85, 100]),
            "abilities": [
                { "ability": { "name": "blaze" }, "is_hidden": false },
                { "ability": { "name": "solar-power" }, "is_hidden": true }
            ],
            "moves": [ { "move": { "name": "mega-punch" } }, { "move": { "name": "fire-punch" } } ]
        })
    }

    #[test]
    fn normalizes_full_record() {
        let r = normalize_json(&charizard()).unwrap();
        assert_eq!(r.id, 6);
        assert_eq!(r.name, "charizard");
        assert_eq!(r.categories, ["fire", "flying"]);
        assert_eq!(r.metrics, Metrics::new([78, 84, 78, 109, 85, 100]));
        assert_eq!((r.height_deci, r.weight_deci), (17, 905));
        assert_eq!(r.base_experience, Some(267));
        assert_eq!(r.abilities.len(), 2);
        assert!(r.abilities[1].hidden);
        assert_eq!(r.move_names, ["mega-punch", "fire-punch"]);
    }

    #[test]
    fn null_base_experience_and_missing_lists_are_accepted() {
        let mut raw = charizard();
        raw["base_experience"] = JsonValue::Null;
        let obj = raw.as_object_mut().unwrap();
        obj.remove("abilities");
        obj.remove("moves");

        let r = normalize_json(&raw).unwrap();
        assert_eq!(r.base_experience, None);
        assert!(r.abilities.is_empty());
        assert!(r.move_names.is_empty());
    }

    #[test]
    fn stats_may_arrive_in_any_order() {
        let mut raw = charizard();
        let list = raw["stats"].as_array_mut().unwrap();
        list.reverse();
        let r = normalize_json(&raw).unwrap();
        assert_eq!(r.metrics.get(MetricKey::Hp), 78);
        assert_eq!(r.metrics.get(MetricKey::Speed), 100);
    }

    #[test]
    fn fewer_than_six_metrics_fails() {
        let mut raw = charizard();
        raw["stats"].as_array_mut().unwrap().pop();
        assert_eq!(normalize_json(&raw), Err(NormalizeError::MetricCount(5)));
    }

    #[test]
    fn duplicate_and_unknown_metrics_fail() {
        let mut raw = charizard();
        raw["stats"][5] = json!({ "base_stat": 1, "stat": { "name": "hp" } });
        assert_eq!(normalize_json(&raw), Err(NormalizeError::DuplicateMetric("hp")));

        raw["stats"][5] = json!({ "base_stat": 1, "stat": { "name": "accuracy" } });
        assert_eq!(
            normalize_json(&raw),
            Err(NormalizeError::UnknownMetric("accuracy".into()))
        );
    }

    #[test]
    fn non_numeric_metric_fails() {
        let mut raw = charizard();
        raw["stats"][0]["base_stat"] = json!("78");
        assert!(matches!(
            normalize_json(&raw),
            Err(NormalizeError::WrongShape { field, .. }) if field == "base_stat"
        ));
    }

    #[test]
    fn missing_required_fields_fail() {
        for field in ["id", "name", "types", "stats", "height", "weight"] {
            let mut raw = charizard();
            raw.as_object_mut().unwrap().remove(field);
            assert_eq!(normalize_json(&raw), Err(NormalizeError::MissingField(field)));
        }
    }

    #[test]
    fn rejects_bad_identity_and_empty_categories() {
        let mut raw = charizard();
        raw["id"] = json!(0);
        assert_eq!(normalize_json(&raw), Err(NormalizeError::InvalidId(0)));

        let mut raw = charizard();
        raw["name"] = json!("  ");
        assert_eq!(normalize_json(&raw), Err(NormalizeError::EmptyName));

        let mut raw = charizard();
        raw["types"] = json!([]);
        assert_eq!(normalize_json(&raw), Err(NormalizeError::NoCategories));

        assert_eq!(normalize_json(&json!([1, 2])), Err(NormalizeError::NotAnObject));
    }

    #[test]
    fn csv_row_normalizes_lists_and_hidden_abilities() {
        let row = CsvRecord {
            id: 25,
            name: "Pikachu".into(),
            types: "electric".into(),
            hp: 35,
            attack: 55,
            defense: 40,
            special_attack: 50,
            special_defense: 50,
            speed: 90,
            height: 4,
            weight: 60,
            base_experience: None,
            abilities: "static; lightning-rod*".into(),
            moves: "thunder-shock;quick-attack;".into(),
        };
        let r = normalize_csv(&row).unwrap();
        assert_eq!(r.name, "pikachu");
        assert_eq!(r.categories, ["electric"]);
        assert_eq!(r.metrics.get(MetricKey::Speed), 90);
        assert_eq!(r.base_experience, None);
        assert_eq!(
            r.abilities,
            [
                Ability { name: "static".into(), hidden: false },
                Ability { name: "lightning-rod".into(), hidden: true },
            ]
        );
        assert_eq!(r.move_names, ["thunder-shock", "quick-attack"]);

        let negative = CsvRecord { speed: -1, ..row };
        assert!(normalize_csv(&negative).is_err());
    }
}
