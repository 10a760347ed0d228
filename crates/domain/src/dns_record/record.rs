use super::RecordType;
use crate::names::normalize_name;
use serde::{Deserialize, Serialize};

/// One resource record from a resolved answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Owner name of the record
    pub name: String,
    /// Record type (serialized as the numeric RR type code)
    #[serde(rename = "type")]
    pub record_type: RecordType,
    /// Record data in presentation form
    pub data: String,
}

impl ResourceRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<RecordType>,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            data: data.into(),
        }
    }

    /// Normalizes `name` and `data` in place.
    pub fn normalize(&mut self) {
        self.name = normalize_name(&self.name);
        self.data = normalize_name(&self.data);
    }

    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }
}
