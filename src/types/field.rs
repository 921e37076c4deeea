/// Abstract data kind of a model field, as declared by the host schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    Bool,
    Int,
    Uint,
    Float,
    String,
    Time,
    Bytes,
    /// Any tag the host declares that has no built-in kind.
    Custom(String),
}

impl DataType {
    /// Returns the raw data-type tag.
    pub fn as_str(&self) -> &str {
        match self {
            DataType::Bool => "bool",
            DataType::Int => "int",
            DataType::Uint => "uint",
            DataType::Float => "float",
            DataType::String => "string",
            DataType::Time => "time",
            DataType::Bytes => "bytes",
            DataType::Custom(tag) => tag,
        }
    }
}

impl From<&str> for DataType {
    fn from(tag: &str) -> Self {
        match tag {
            "bool" => DataType::Bool,
            "int" => DataType::Int,
            "uint" => DataType::Uint,
            "float" => DataType::Float,
            "string" => DataType::String,
            "time" => DataType::Time,
            "bytes" => DataType::Bytes,
            other => DataType::Custom(other.to_string()),
        }
    }
}

/// Read-only description of a single model field.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub data_type: DataType,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: impl Into<DataType>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
        }
    }
}

/// A table and its fields, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub table: String,
    pub fields: Vec<Field>,
}

impl Schema {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field to the schema.
    pub fn field(mut self, name: impl Into<String>, data_type: impl Into<DataType>) -> Self {
        self.fields.push(Field::new(name, data_type));
        self
    }

    /// Look up a field by column name.
    pub fn lookup(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}
