use crate::error::EnumError;

/// Implemented by every generated enum. `name` and `from_name` are inverse
/// over `VALUES`.
pub trait Enumer: Sized + Copy + 'static {
    const TYPE_NAME: &'static str;
    const VALUES: &'static [Self];

    fn name(&self) -> &'static str;
    fn from_name(name: &str) -> Result<Self, EnumError>;

    /// Every canonical string, in declaration order.
    fn names() -> Vec<&'static str> {
        Self::VALUES.iter().map(|v| v.name()).collect()
    }
}
