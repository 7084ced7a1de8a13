/// Imports are keyed by a random UUID assigned at upload time.
pub type ImportId = uuid::Uuid;
