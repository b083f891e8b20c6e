/// Contract for typed aggregate identifiers (UUID newtypes).
pub trait AggregateId: Sized {
    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, String>;
}
