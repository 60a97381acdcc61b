//! Metadata — the open key-value record on each person.

use std::collections::BTreeMap;

use super::Value;

/// A map of attribute names to values. Ordered so snapshots are stable.
pub type Metadata = BTreeMap<String, Value>;

/// Merge `incoming` into `target`; incoming values win on key collision.
pub fn merge_metadata(target: &mut Metadata, incoming: Metadata) {
    target.extend(incoming);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_and_unions() {
        let mut target = Metadata::new();
        target.insert("house".into(), Value::from("Tully"));
        target.insert("seat".into(), Value::from("Riverrun"));

        let mut incoming = Metadata::new();
        incoming.insert("house".into(), Value::from("Stark"));
        incoming.insert("title".into(), Value::from("Lady of Winterfell"));

        merge_metadata(&mut target, incoming);
        assert_eq!(target.len(), 3);
        assert_eq!(target["house"], Value::from("Stark"));
        assert_eq!(target["seat"], Value::from("Riverrun"));
    }
}
