pub mod candidates;
pub mod commit_policy;
pub mod romaji;
pub mod settings;
pub mod transliterate;
pub mod unicode;
