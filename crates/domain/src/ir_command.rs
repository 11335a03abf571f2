//! Air-conditioner IR command as a bag of form fields.

use url::form_urlencoded;

/// Field name/value pairs read from the IR form, in document order.
///
/// No schema: the device decides what the fields mean. Repeated names are
/// kept, the same way a browser form submits them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IrCommand {
    fields: Vec<(String, String)>,
}

impl IrCommand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    /// Append a field.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    /// Iterate over fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// First value recorded for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Encode as `application/x-www-form-urlencoded`.
    ///
    /// Spaces become `+`; alphanumerics and `*-._` pass through; every other
    /// byte is percent-encoded.
    #[must_use]
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields())
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for IrCommand
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
