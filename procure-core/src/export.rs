//! Export Serializer
//!
//! Renders a collection of entries into CSV or JSON text according to a
//! field subset. CSV values containing a comma, quote or newline are
//! wrapped in double quotes with internal quotes doubled; JSON keeps
//! native types (numbers stay numeric, tags stay an array).

use serde_json::{Map, Value};

use crate::error::{CatalogError, CatalogResult};
use crate::models::entry::{CatalogEntry, EntryVariant};

/// Supported export formats with their MIME types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

/// Exportable entry fields; order in the caller's slice is the column order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportField {
    Id,
    OrganizationId,
    Name,
    Description,
    Category,
    Supplier,
    Status,
    Kind,
    Tags,
    UnitPrice,
    Sku,
    Unit,
    CreatedAt,
    UpdatedAt,
}

impl ExportField {
    /// All fields, used when the caller passes an empty subset
    pub const ALL: [ExportField; 14] = [
        ExportField::Id,
        ExportField::OrganizationId,
        ExportField::Name,
        ExportField::Description,
        ExportField::Category,
        ExportField::Supplier,
        ExportField::Status,
        ExportField::Kind,
        ExportField::Tags,
        ExportField::UnitPrice,
        ExportField::Sku,
        ExportField::Unit,
        ExportField::CreatedAt,
        ExportField::UpdatedAt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportField::Id => "id",
            ExportField::OrganizationId => "organization_id",
            ExportField::Name => "name",
            ExportField::Description => "description",
            ExportField::Category => "category",
            ExportField::Supplier => "supplier",
            ExportField::Status => "status",
            ExportField::Kind => "kind",
            ExportField::Tags => "tags",
            ExportField::UnitPrice => "unit_price",
            ExportField::Sku => "sku",
            ExportField::Unit => "unit",
            ExportField::CreatedAt => "created_at",
            ExportField::UpdatedAt => "updated_at",
        }
    }

    /// Projected value with native JSON types; `Null` for absent optionals
    fn json_value(&self, entry: &CatalogEntry) -> Value {
        fn opt(v: &Option<String>) -> Value {
            v.as_ref().map_or(Value::Null, |s| Value::String(s.clone()))
        }
        match self {
            ExportField::Id => Value::String(entry.id.clone()),
            ExportField::OrganizationId => Value::String(entry.organization_id.clone()),
            ExportField::Name => Value::String(entry.name.clone()),
            ExportField::Description => opt(&entry.description),
            ExportField::Category => opt(&entry.category),
            ExportField::Supplier => opt(&entry.supplier),
            ExportField::Status => Value::String(entry.status.as_str().to_string()),
            ExportField::Kind => Value::String(entry.kind().as_str().to_string()),
            ExportField::Tags => Value::Array(
                entry.tags.iter().map(|t| Value::String(t.clone())).collect(),
            ),
            ExportField::UnitPrice => serde_json::json!(entry.unit_price()),
            ExportField::Sku => match &entry.variant {
                EntryVariant::Product { sku, .. } => opt(sku),
                EntryVariant::Service { .. } => Value::Null,
            },
            ExportField::Unit => match &entry.variant {
                EntryVariant::Service { unit, .. } => Value::String(unit.as_str().to_string()),
                EntryVariant::Product { .. } => Value::Null,
            },
            ExportField::CreatedAt => Value::String(entry.created_at.to_rfc3339()),
            ExportField::UpdatedAt => Value::String(entry.updated_at.to_rfc3339()),
        }
    }
}

pub struct ExportSerializer;

impl ExportSerializer {
    /// Render entries as CSV text
    pub fn to_csv(entries: &[CatalogEntry], fields: &[ExportField], include_headers: bool) -> String {
        let fields = Self::effective_fields(fields);
        let mut out = String::new();

        if include_headers {
            let header: Vec<&str> = fields.iter().map(ExportField::as_str).collect();
            out.push_str(&header.join(","));
            out.push('\n');
        }

        for entry in entries {
            let row: Vec<String> = fields
                .iter()
                .map(|f| Self::escape_csv(&Self::coerce(f.json_value(entry))))
                .collect();
            out.push_str(&row.join(","));
            out.push('\n');
        }

        out
    }

    /// Render entries as a JSON array with field projection
    pub fn to_json(entries: &[CatalogEntry], fields: &[ExportField]) -> CatalogResult<String> {
        let fields = Self::effective_fields(fields);
        let projected: Vec<Value> = entries
            .iter()
            .map(|entry| {
                let mut obj = Map::new();
                for field in fields {
                    obj.insert(field.as_str().to_string(), field.json_value(entry));
                }
                Value::Object(obj)
            })
            .collect();
        serde_json::to_string(&projected)
            .map_err(|e| CatalogError::Validation(format!("JSON export failed: {e}")))
    }

    fn effective_fields(fields: &[ExportField]) -> &[ExportField] {
        if fields.is_empty() { &ExportField::ALL } else { fields }
    }

    /// Default string coercion for CSV cells; `Null` → empty string
    fn coerce(value: Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s,
            Value::Array(items) => items
                .into_iter()
                .map(Self::coerce)
                .collect::<Vec<_>>()
                .join(","),
            other => other.to_string(),
        }
    }

    /// Quote a cell when it contains a comma, quote or newline,
    /// doubling internal quotes
    fn escape_csv(value: &str) -> String {
        if value.contains(',') || value.contains('"') || value.contains('\n') {
            format!("\"{}\"", value.replace('"', "\"\""))
        } else {
            value.to_string()
        }
    }
}
